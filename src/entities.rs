/// All game entity types: pure data, no simulation logic.

use crate::config::GameConfig;

// ── Geometry & colour ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour plus alpha, used for full-screen tints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in integer screen pixels.
///
/// `right()` and `bottom()` are exclusive edges: a 40-wide rect at x=0
/// covers columns 0..40.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True if `other` lies entirely inside `self` (shared edges allowed).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

/// The active screen of the state machine. Exactly one is live at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Intro,
    Playing,
    Paused,
    GameOver,
}

/// Things that happened during a tick that collaborators may react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy hit the player.
    PlayerHit,
    /// Health ran out and the game switched to the game-over screen.
    PlayerDefeated,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Bounding box used for both drawing and collision.
    pub rect: Rect,
    pub health: u32,
    pub frame_index: usize,
    /// Seconds accumulated towards the next animation frame.
    pub frame_timer: f32,
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Fall speed in pixels per second.
    pub speed: f32,
}

// ── Particle ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life in seconds.
    pub life: f32,
    pub radius: i32,
    pub color: Rgb,
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollingBackground {
    /// Vertical scroll in pixels, kept in `[0, screen_height)`.
    pub offset: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The whole game, owned by the frame loop and passed to every update.
/// Cloneable so update functions can return a new copy.
#[derive(Clone, Debug)]
pub struct GameState {
    pub screen: Screen,
    /// Seconds spent in the current screen; reset by every transition.
    pub state_time: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub background: ScrollingBackground,
    pub spawn_timer: f32,
    pub score: u32,
    /// Highest score reached this session. Never written to disk.
    pub best_score: u32,
    /// Typed on the intro screen.
    pub player_name: String,
    /// Events produced by the most recent update.
    pub events: Vec<GameEvent>,
    pub frame: u64,
    pub config: GameConfig,
}
