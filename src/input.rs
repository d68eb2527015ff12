/// Input collaborator: turns raw terminal events into one `FrameInput` per
/// tick.
///
/// Terminals differ in what they report. Keyboard-enhancement capable ones
/// (kitty protocol) send proper `Press` / `Repeat` / `Release` events, so a
/// key is dropped the moment it is released. Classic terminals only send
/// `Press` (OS key-repeat shows up as repeated presses), so a key is
/// considered held while its last press is at most `HOLD_WINDOW` ticks old.
/// The OS repeat rate is well above 60 / `HOLD_WINDOW` Hz, so a key that is
/// actually held never expires.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Ticks a key stays live after its last press or repeat.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Backspace,
    Escape,
    Pause,
    Restart,
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// A discrete key press. `ch` carries the printable character, if any, for
/// text entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ch: Option<char>,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, ch: None }
    }

    pub fn char(key: Key, ch: char) -> Self {
        Self { key, ch: Some(ch) }
    }
}

/// Movement keys currently held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the core consumes from the input side for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub presses: Vec<KeyPress>,
    pub held: HeldKeys,
    pub quit: bool,
}

/// Map a terminal key code onto the game's key set.
pub fn classify(code: &KeyCode) -> Option<KeyPress> {
    let press = match code {
        KeyCode::Enter => KeyPress::new(Key::Enter),
        KeyCode::Backspace => KeyPress::new(Key::Backspace),
        KeyCode::Esc => KeyPress::new(Key::Escape),
        KeyCode::Up => KeyPress::new(Key::Up),
        KeyCode::Down => KeyPress::new(Key::Down),
        KeyCode::Left => KeyPress::new(Key::Left),
        KeyCode::Right => KeyPress::new(Key::Right),
        KeyCode::Char(c) => {
            let key = match c.to_ascii_lowercase() {
                'p' => Key::Pause,
                'r' => Key::Restart,
                'w' => Key::Up,
                's' => Key::Down,
                'a' => Key::Left,
                'd' => Key::Right,
                _ => Key::Other,
            };
            if c.is_control() {
                KeyPress::new(key)
            } else {
                KeyPress::char(key, *c)
            }
        }
        _ => return None,
    };
    Some(press)
}

/// Accumulates terminal events between ticks.
#[derive(Debug, Default)]
pub struct InputTracker {
    /// Each held key → the tick it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    presses: Vec<KeyPress>,
    quit: bool,
    frame: u64,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        match kind {
            KeyEventKind::Press => {
                if *code == KeyCode::Esc
                    || (*code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
                {
                    self.quit = true;
                    return;
                }
                self.key_frame.insert(code.clone(), self.frame);
                if let Some(press) = classify(code) {
                    self.presses.push(press);
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code.clone(), self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(code);
            }
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` ticks.
    fn is_held(&self, key: Key) -> bool {
        self.key_frame.iter().any(|(code, &last)| {
            self.frame.saturating_sub(last) <= HOLD_WINDOW
                && classify(code).map(|p| p.key) == Some(key)
        })
    }

    /// Hand the tick's input to the core and advance to the next tick.
    pub fn snapshot(&mut self) -> FrameInput {
        let held = HeldKeys {
            up: self.is_held(Key::Up),
            down: self.is_held(Key::Down),
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
        };
        let frame = self.frame;
        self.key_frame
            .retain(|_, last| frame.saturating_sub(*last) <= HOLD_WINDOW);
        self.frame += 1;
        FrameInput {
            presses: std::mem::take(&mut self.presses),
            held,
            quit: self.quit,
        }
    }
}
