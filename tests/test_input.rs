use arcade_loop::input::*;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn repeat(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat))
}

fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release))
}

// ── classify ──────────────────────────────────────────────────────────────────

#[test]
fn classify_named_keys() {
    assert_eq!(classify(&KeyCode::Enter), Some(KeyPress::new(Key::Enter)));
    assert_eq!(classify(&KeyCode::Backspace), Some(KeyPress::new(Key::Backspace)));
    assert_eq!(classify(&KeyCode::Esc), Some(KeyPress::new(Key::Escape)));
    assert_eq!(classify(&KeyCode::Left), Some(KeyPress::new(Key::Left)));
}

#[test]
fn classify_letters_keep_their_char() {
    assert_eq!(classify(&KeyCode::Char('p')), Some(KeyPress::char(Key::Pause, 'p')));
    assert_eq!(classify(&KeyCode::Char('R')), Some(KeyPress::char(Key::Restart, 'R')));
    assert_eq!(classify(&KeyCode::Char('w')), Some(KeyPress::char(Key::Up, 'w')));
    assert_eq!(classify(&KeyCode::Char('D')), Some(KeyPress::char(Key::Right, 'D')));
    assert_eq!(classify(&KeyCode::Char('x')), Some(KeyPress::char(Key::Other, 'x')));
    assert_eq!(classify(&KeyCode::Char(' ')), Some(KeyPress::char(Key::Other, ' ')));
}

#[test]
fn classify_ignores_unmapped_keys() {
    assert_eq!(classify(&KeyCode::F(5)), None);
    assert_eq!(classify(&KeyCode::Tab), None);
}

// ── InputTracker ──────────────────────────────────────────────────────────────

#[test]
fn press_is_queued_once() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Enter));
    let first = t.snapshot();
    assert_eq!(first.presses, vec![KeyPress::new(Key::Enter)]);
    assert!(t.snapshot().presses.is_empty());
}

#[test]
fn arrow_and_letter_both_hold_direction() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Up));
    t.record(&press(KeyCode::Char('d')));
    let input = t.snapshot();
    assert!(input.held.up);
    assert!(input.held.right);
    assert!(!input.held.down);
    assert!(!input.held.left);
}

#[test]
fn held_key_expires_after_hold_window() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Left));
    for _ in 0..=HOLD_WINDOW {
        assert!(t.snapshot().held.left);
    }
    assert!(!t.snapshot().held.left);
}

#[test]
fn repeat_keeps_key_held_without_new_press() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Left));
    t.snapshot();
    for _ in 0..(HOLD_WINDOW * 3) {
        t.record(&repeat(KeyCode::Left));
        let input = t.snapshot();
        assert!(input.held.left);
        assert!(input.presses.is_empty());
    }
}

#[test]
fn release_drops_key_immediately() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Right));
    assert!(t.snapshot().held.right);
    t.record(&release(KeyCode::Right));
    assert!(!t.snapshot().held.right);
}

#[test]
fn escape_requests_quit() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Esc));
    let input = t.snapshot();
    assert!(input.quit);
    assert!(input.presses.is_empty());
}

#[test]
fn ctrl_c_requests_quit() {
    let mut t = InputTracker::new();
    t.record(&Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(t.snapshot().quit);
}

#[test]
fn plain_c_is_just_typing() {
    let mut t = InputTracker::new();
    t.record(&press(KeyCode::Char('c')));
    let input = t.snapshot();
    assert!(!input.quit);
    assert_eq!(input.presses, vec![KeyPress::char(Key::Other, 'c')]);
}

#[test]
fn non_key_events_are_ignored() {
    let mut t = InputTracker::new();
    t.record(&Event::Resize(80, 24));
    t.record(&Event::FocusLost);
    assert_eq!(t.snapshot(), FrameInput::default());
}
