/// Sound collaborator: rings the terminal bell for game events.
///
/// Initialisation can fail (no terminal attached, or a terminal that
/// cannot beep). Callers keep going without sound in that case.

use std::fmt;
use std::io::{IsTerminal, Write};

use crossterm::{style::Print, QueueableCommand};

use crate::entities::GameEvent;

const BELL: char = '\u{7}';

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioError {
    NotATerminal,
    DumbTerminal,
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotATerminal => write!(f, "stdout is not a terminal"),
            Self::DumbTerminal => write!(f, "TERM=dumb has no bell"),
        }
    }
}

impl std::error::Error for AudioError {}

#[derive(Debug)]
pub struct Audio {
    _private: (),
}

impl Audio {
    /// Probe the real stdout and `TERM`.
    pub fn init() -> Result<Self, AudioError> {
        let term = std::env::var("TERM").ok();
        Self::probe(std::io::stdout().is_terminal(), term.as_deref())
    }

    pub fn probe(is_terminal: bool, term: Option<&str>) -> Result<Self, AudioError> {
        if !is_terminal {
            return Err(AudioError::NotATerminal);
        }
        if term == Some("dumb") {
            return Err(AudioError::DumbTerminal);
        }
        Ok(Self { _private: () })
    }

    /// Queue one bell per event. Nothing is flushed here; the frame flush
    /// sends it along with the picture.
    pub fn play<W: Write>(&self, out: &mut W, events: &[GameEvent]) -> std::io::Result<()> {
        for event in events {
            match event {
                GameEvent::PlayerHit | GameEvent::PlayerDefeated => {
                    out.queue(Print(BELL))?;
                }
            }
        }
        Ok(())
    }
}
