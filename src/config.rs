/// Tunables for the arcade loop.
///
/// There are no config files or flags; everything is compiled in and
/// gathered into a `GameConfig` that travels with the game state.

use crate::entities::Rgb;

// ── Screen & timing ──────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const TARGET_TPS: u32 = 60;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_START_X: i32 = 100;
pub const PLAYER_START_Y: i32 = 300;
pub const PLAYER_SIZE: i32 = 40;
/// Pixels per second.
pub const PLAYER_SPEED: f32 = 200.0;
pub const PLAYER_HEALTH: u32 = 3;
pub const PLAYER_FRAME_COUNT: usize = 4;
/// Seconds per animation frame.
pub const PLAYER_FRAME_INTERVAL: f32 = 0.1;
pub const MAX_NAME_LEN: usize = 16;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: i32 = 30;
/// Pixels per second.
pub const ENEMY_SPEED: f32 = 100.0;
/// Seconds between spawns.
pub const SPAWN_INTERVAL: f32 = 2.0;
/// Points for an enemy that leaves the screen without touching the player.
pub const DODGE_SCORE: u32 = 10;

// ── Effects ──────────────────────────────────────────────────────────────────

pub const HIT_BURST: usize = 10;
/// Backdrop pixels per second.
pub const SCROLL_SPEED: f32 = 100.0;

// ── Colour palette ───────────────────────────────────────────────────────────

pub const COLOR_BACKDROP: Rgb = Rgb(70, 70, 100);
pub const COLOR_TILE: Rgb = Rgb(90, 90, 130);
pub const COLOR_WHITE: Rgb = Rgb(255, 255, 255);
pub const COLOR_ENEMY: Rgb = Rgb(255, 0, 0);
pub const COLOR_PARTICLE: Rgb = Rgb(255, 200, 50);

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub player_start: (i32, i32),
    pub player_size: i32,
    pub player_speed: f32,
    pub player_health: u32,
    pub frame_count: usize,
    pub frame_interval: f32,
    pub enemy_size: i32,
    pub enemy_speed: f32,
    pub spawn_interval: f32,
    pub dodge_score: u32,
    pub hit_burst: usize,
    pub scroll_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            player_start: (PLAYER_START_X, PLAYER_START_Y),
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_health: PLAYER_HEALTH,
            frame_count: PLAYER_FRAME_COUNT,
            frame_interval: PLAYER_FRAME_INTERVAL,
            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            dodge_score: DODGE_SCORE,
            hit_burst: HIT_BURST,
            scroll_speed: SCROLL_SPEED,
        }
    }
}

/// Colour of animation frame `index`: a darker green per frame.
pub fn player_frame_color(index: usize) -> Rgb {
    let shade = 255u32.saturating_sub(50 * index as u32) as u8;
    Rgb(0, shade, 0)
}
