/// The screen transition table.
///
/// Every legal move between screens is listed in `next_screen`; anything
/// not listed is ignored. Side effects of a transition (timer reset, full
/// restart) are applied by `compute::apply_trigger`.

use crate::entities::Screen;

/// Inputs and conditions that can move the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Enter on the intro screen.
    Confirm,
    /// `P` while playing or paused.
    TogglePause,
    /// `R` on the game-over screen.
    Restart,
    /// Health reached zero during a game update.
    PlayerDefeated,
}

pub fn next_screen(screen: Screen, trigger: Trigger) -> Option<Screen> {
    match (screen, trigger) {
        (Screen::Intro, Trigger::Confirm) => Some(Screen::Playing),
        (Screen::Playing, Trigger::TogglePause) => Some(Screen::Paused),
        (Screen::Paused, Trigger::TogglePause) => Some(Screen::Playing),
        (Screen::Playing, Trigger::PlayerDefeated) => Some(Screen::GameOver),
        (Screen::GameOver, Trigger::Restart) => Some(Screen::Playing),
        _ => None,
    }
}

impl Screen {
    /// Paused and game-over screens draw the playing scene underneath.
    pub fn shows_playfield(self) -> bool {
        matches!(self, Screen::Playing | Screen::Paused | Screen::GameOver)
    }
}
