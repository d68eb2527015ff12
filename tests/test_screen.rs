use arcade_loop::compute::{apply_trigger, handle_input, init_state};
use arcade_loop::config::GameConfig;
use arcade_loop::entities::*;
use arcade_loop::input::{Key, KeyPress};
use arcade_loop::screen::*;

fn state_on(screen: Screen) -> GameState {
    let mut s = init_state(GameConfig::default());
    s.screen = screen;
    s.state_time = 7.5;
    s
}

fn typed(text: &str) -> Vec<KeyPress> {
    text.chars().map(|c| KeyPress::char(Key::Other, c)).collect()
}

const ALL_SCREENS: [Screen; 4] = [Screen::Intro, Screen::Playing, Screen::Paused, Screen::GameOver];
const ALL_TRIGGERS: [Trigger; 4] = [
    Trigger::Confirm,
    Trigger::TogglePause,
    Trigger::Restart,
    Trigger::PlayerDefeated,
];

// ── next_screen ───────────────────────────────────────────────────────────────

#[test]
fn transition_table_is_exact() {
    let expected = [
        (Screen::Intro, Trigger::Confirm, Screen::Playing),
        (Screen::Playing, Trigger::TogglePause, Screen::Paused),
        (Screen::Paused, Trigger::TogglePause, Screen::Playing),
        (Screen::Playing, Trigger::PlayerDefeated, Screen::GameOver),
        (Screen::GameOver, Trigger::Restart, Screen::Playing),
    ];
    for screen in ALL_SCREENS {
        for trigger in ALL_TRIGGERS {
            let want = expected
                .iter()
                .find(|(s, t, _)| *s == screen && *t == trigger)
                .map(|(_, _, to)| *to);
            assert_eq!(next_screen(screen, trigger), want, "{screen:?} + {trigger:?}");
        }
    }
}

#[test]
fn playfield_shown_everywhere_but_intro() {
    assert!(!Screen::Intro.shows_playfield());
    assert!(Screen::Playing.shows_playfield());
    assert!(Screen::Paused.shows_playfield());
    assert!(Screen::GameOver.shows_playfield());
}

// ── apply_trigger ─────────────────────────────────────────────────────────────

#[test]
fn transition_resets_state_time() {
    let s = apply_trigger(&state_on(Screen::Playing), Trigger::TogglePause);
    assert_eq!(s.screen, Screen::Paused);
    assert_eq!(s.state_time, 0.0);
}

#[test]
fn ignored_trigger_keeps_state_time() {
    let s = apply_trigger(&state_on(Screen::Intro), Trigger::TogglePause);
    assert_eq!(s.screen, Screen::Intro);
    assert_eq!(s.state_time, 7.5);
}

// ── handle_input: intro ───────────────────────────────────────────────────────

#[test]
fn enter_starts_game() {
    let s = handle_input(&state_on(Screen::Intro), &[KeyPress::new(Key::Enter)]);
    assert_eq!(s.screen, Screen::Playing);
    assert_eq!(s.state_time, 0.0);
}

#[test]
fn typing_builds_player_name() {
    let s = handle_input(&state_on(Screen::Intro), &typed("Neo"));
    assert_eq!(s.player_name, "Neo");
    assert_eq!(s.screen, Screen::Intro);
}

#[test]
fn command_letters_are_typed_on_intro() {
    let presses = [KeyPress::char(Key::Pause, 'p'), KeyPress::char(Key::Restart, 'r')];
    let s = handle_input(&state_on(Screen::Intro), &presses);
    assert_eq!(s.player_name, "pr");
    assert_eq!(s.screen, Screen::Intro);
}

#[test]
fn backspace_removes_last_char() {
    let mut presses = typed("abc");
    presses.push(KeyPress::new(Key::Backspace));
    let s = handle_input(&state_on(Screen::Intro), &presses);
    assert_eq!(s.player_name, "ab");
}

#[test]
fn backspace_on_empty_name_is_harmless() {
    let s = handle_input(&state_on(Screen::Intro), &[KeyPress::new(Key::Backspace)]);
    assert_eq!(s.player_name, "");
}

#[test]
fn name_is_capped() {
    let s = handle_input(&state_on(Screen::Intro), &typed("abcdefghijklmnopqrstuvwxyz"));
    assert_eq!(s.player_name, "abcdefghijklmnop");
}

#[test]
fn keys_without_char_are_not_typed() {
    let s = handle_input(&state_on(Screen::Intro), &[KeyPress::new(Key::Up)]);
    assert_eq!(s.player_name, "");
}

#[test]
fn name_then_enter_in_one_tick() {
    let mut presses = typed("zed");
    presses.push(KeyPress::new(Key::Enter));
    let s = handle_input(&state_on(Screen::Intro), &presses);
    assert_eq!(s.player_name, "zed");
    assert_eq!(s.screen, Screen::Playing);
}

// ── handle_input: pause & restart ─────────────────────────────────────────────

#[test]
fn p_toggles_pause() {
    let pause = [KeyPress::char(Key::Pause, 'p')];
    let s = handle_input(&state_on(Screen::Playing), &pause);
    assert_eq!(s.screen, Screen::Paused);
    let s = handle_input(&s, &pause);
    assert_eq!(s.screen, Screen::Playing);
}

#[test]
fn double_pause_in_one_tick_cancels_out() {
    let presses = [KeyPress::char(Key::Pause, 'p'), KeyPress::char(Key::Pause, 'P')];
    let s = handle_input(&state_on(Screen::Playing), &presses);
    assert_eq!(s.screen, Screen::Playing);
    assert_eq!(s.state_time, 0.0);
}

#[test]
fn restart_ignored_while_playing() {
    let s = handle_input(&state_on(Screen::Playing), &[KeyPress::char(Key::Restart, 'r')]);
    assert_eq!(s.screen, Screen::Playing);
    assert_eq!(s.state_time, 7.5);
}

#[test]
fn pause_ignored_on_game_over() {
    let s = handle_input(&state_on(Screen::GameOver), &[KeyPress::char(Key::Pause, 'p')]);
    assert_eq!(s.screen, Screen::GameOver);
}

#[test]
fn enter_ignored_outside_intro() {
    for screen in [Screen::Playing, Screen::Paused, Screen::GameOver] {
        let s = handle_input(&state_on(screen), &[KeyPress::new(Key::Enter)]);
        assert_eq!(s.screen, screen);
    }
}

#[test]
fn restart_from_game_over_plays_again() {
    let s = handle_input(&state_on(Screen::GameOver), &[KeyPress::char(Key::Restart, 'r')]);
    assert_eq!(s.screen, Screen::Playing);
    assert_eq!(s.state_time, 0.0);
}
