/// Game logic: the screen state machine and the per-tick entity updates.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// value.  Side effects are limited to the injected RNG and logging.

use rand::Rng;
use tracing::{debug, info, trace};

use crate::collision::rect_rect_collision;
use crate::config::{GameConfig, MAX_NAME_LEN};
use crate::entities::{
    Enemy, GameEvent, GameState, Player, Rect, Screen, ScrollingBackground,
};
use crate::input::{HeldKeys, Key, KeyPress};
use crate::particles::{spawn_particles, update_particles};
use crate::screen::{next_screen, Trigger};

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_player(config: &GameConfig) -> Player {
    let (x, y) = config.player_start;
    Player {
        rect: Rect::new(x, y, config.player_size, config.player_size),
        health: config.player_health,
        frame_index: 0,
        frame_timer: 0.0,
    }
}

/// Build the game as it looks at startup: intro screen, nothing spawned.
pub fn init_state(config: GameConfig) -> GameState {
    GameState {
        screen: Screen::Intro,
        state_time: 0.0,
        player: new_player(&config),
        enemies: Vec::new(),
        particles: Vec::new(),
        background: ScrollingBackground::default(),
        spawn_timer: 0.0,
        score: 0,
        best_score: 0,
        player_name: String::new(),
        events: Vec::new(),
        frame: 0,
        config,
    }
}

// ── Transitions ──────────────────────────────────────────────────────────────

/// Feed one trigger through the transition table. Triggers that do not
/// apply to the current screen leave the state untouched.
pub fn apply_trigger(state: &GameState, trigger: Trigger) -> GameState {
    let Some(screen) = next_screen(state.screen, trigger) else {
        return state.clone();
    };
    info!(from = ?state.screen, to = ?screen, ?trigger, "screen transition");

    let state = if trigger == Trigger::Restart {
        restart_game(state)
    } else {
        state.clone()
    };
    GameState {
        screen,
        state_time: 0.0,
        ..state
    }
}

/// Reset everything a fresh round needs. The name and session best survive.
pub fn restart_game(state: &GameState) -> GameState {
    info!(score = state.score, best = state.best_score, "game restarted");
    GameState {
        screen: Screen::Playing,
        state_time: 0.0,
        player: new_player(&state.config),
        enemies: Vec::new(),
        particles: Vec::new(),
        spawn_timer: 0.0,
        score: 0,
        events: Vec::new(),
        ..state.clone()
    }
}

/// Apply this tick's discrete key presses to the current screen.
pub fn handle_input(state: &GameState, presses: &[KeyPress]) -> GameState {
    presses
        .iter()
        .fold(state.clone(), |state, press| {
            let screen = state.screen;
            match screen {
                Screen::Intro => handle_intro_input(&state, press),
                Screen::Playing | Screen::Paused if press.key == Key::Pause => {
                    apply_trigger(&state, Trigger::TogglePause)
                }
                Screen::GameOver if press.key == Key::Restart => {
                    apply_trigger(&state, Trigger::Restart)
                }
                _ => state,
            }
        })
}

/// Enter starts the game; everything else edits the pilot name.
fn handle_intro_input(state: &GameState, press: &KeyPress) -> GameState {
    match (press.key, press.ch) {
        (Key::Enter, _) => apply_trigger(state, Trigger::Confirm),
        (Key::Backspace, _) => {
            let mut player_name = state.player_name.clone();
            player_name.pop();
            GameState {
                player_name,
                ..state.clone()
            }
        }
        (_, Some(ch)) if state.player_name.chars().count() < MAX_NAME_LEN => {
            let mut player_name = state.player_name.clone();
            player_name.push(ch);
            GameState {
                player_name,
                ..state.clone()
            }
        }
        _ => state.clone(),
    }
}

// ── Per-frame tick (nearly pure, RNG is injected) ─────────────────────────

/// Advance the simulation by `dt` seconds.  Exactly one screen's update runs.
pub fn tick(state: &GameState, held: &HeldKeys, dt: f32, rng: &mut impl Rng) -> GameState {
    trace!(frame = state.frame, dt, screen = ?state.screen, "tick");
    let state = GameState {
        state_time: state.state_time + dt,
        frame: state.frame + 1,
        events: Vec::new(),
        ..state.clone()
    };
    match state.screen {
        Screen::Intro => update_intro(&state, dt),
        Screen::Playing => update_game(&state, held, dt, rng),
        Screen::Paused => update_pause(&state),
        Screen::GameOver => update_game_over(&state),
    }
}

fn update_intro(state: &GameState, dt: f32) -> GameState {
    GameState {
        background: update_scrolling_bg(&state.background, dt, &state.config),
        ..state.clone()
    }
}

fn update_game(state: &GameState, held: &HeldKeys, dt: f32, rng: &mut impl Rng) -> GameState {
    let config = &state.config;

    // ── 1. Backdrop ──────────────────────────────────────────────────────────
    let background = update_scrolling_bg(&state.background, dt, config);

    // ── 2. Player animation & movement ───────────────────────────────────────
    let player = animate_player(&state.player, dt, config);
    let player = move_player(&player, held, dt, config);

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    let (spawn_timer, spawned) = update_spawner(state.spawn_timer, dt, config, rng);
    let mut enemies = state.enemies.clone();
    enemies.extend(spawned);

    // ── 4. Enemies ↔ player ──────────────────────────────────────────────────
    let step = update_enemies(&enemies, &player.rect, dt, config);

    let mut particles = state.particles.clone();
    let mut events = Vec::new();
    let (cx, cy) = player.rect.center();
    for _ in 0..step.hits {
        particles.extend(spawn_particles(cx as f32, cy as f32, config.hit_burst, rng));
        events.push(GameEvent::PlayerHit);
    }
    let player = Player {
        health: player.health.saturating_sub(step.hits),
        ..player
    };
    let score = state.score + step.missed * config.dodge_score;

    // ── 5. Particles ─────────────────────────────────────────────────────────
    let particles = update_particles(&particles, dt);

    let next = GameState {
        background,
        player,
        enemies: step.enemies,
        particles,
        spawn_timer,
        score,
        best_score: state.best_score.max(score),
        events,
        ..state.clone()
    };

    // ── 6. Defeat check ──────────────────────────────────────────────────────
    if next.player.health == 0 {
        let mut over = apply_trigger(&next, Trigger::PlayerDefeated);
        over.events.push(GameEvent::PlayerDefeated);
        over
    } else {
        next
    }
}

fn update_pause(state: &GameState) -> GameState {
    state.clone()
}

fn update_game_over(state: &GameState) -> GameState {
    state.clone()
}

// ── Backdrop ─────────────────────────────────────────────────────────────────

/// Scroll the backdrop and wrap back to 0 once it reaches the screen height.
pub fn update_scrolling_bg(
    bg: &ScrollingBackground,
    dt: f32,
    config: &GameConfig,
) -> ScrollingBackground {
    let offset = bg.offset + config.scroll_speed * dt;
    ScrollingBackground {
        offset: if offset >= config.screen_height as f32 { 0.0 } else { offset },
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Direction the held keys point in: unit length when any key is held,
/// (0, 0) otherwise.
pub fn movement_intent(held: &HeldKeys) -> (f32, f32) {
    let mut dx = 0.0f32;
    let mut dy = 0.0f32;
    if held.up {
        dy = -1.0;
    }
    if held.down {
        dy = 1.0;
    }
    if held.left {
        dx = -1.0;
    }
    if held.right {
        dx = 1.0;
    }
    let len = dx.hypot(dy);
    if len > 0.0 {
        (dx / len, dy / len)
    } else {
        (0.0, 0.0)
    }
}

/// Move by `intent * speed * dt`, truncated to whole pixels, then clamp the
/// box inside the screen.
pub fn move_player(player: &Player, held: &HeldKeys, dt: f32, config: &GameConfig) -> Player {
    let (ix, iy) = movement_intent(held);
    let mut rect = player.rect;
    rect.x += (ix * config.player_speed * dt) as i32;
    rect.y += (iy * config.player_speed * dt) as i32;

    Player {
        rect: clamp_to_screen(rect, config),
        ..player.clone()
    }
}

fn clamp_to_screen(rect: Rect, config: &GameConfig) -> Rect {
    let mut rect = rect;
    if rect.left() < 0 {
        rect.x = 0;
    } else if rect.right() > config.screen_width {
        rect.x = config.screen_width - rect.w;
    }
    if rect.top() < 0 {
        rect.y = 0;
    } else if rect.bottom() > config.screen_height {
        rect.y = config.screen_height - rect.h;
    }
    rect
}

/// Step the cosmetic animation: one frame every `frame_interval` seconds.
pub fn animate_player(player: &Player, dt: f32, config: &GameConfig) -> Player {
    let frame_timer = player.frame_timer + dt;
    if frame_timer >= config.frame_interval {
        Player {
            frame_timer: 0.0,
            frame_index: (player.frame_index + 1) % config.frame_count.max(1),
            ..player.clone()
        }
    } else {
        Player {
            frame_timer,
            ..player.clone()
        }
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Drop one enemy just above the screen at a random column.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let max_x = (config.screen_width - config.enemy_size).max(0);
    let x = rng.gen_range(0..=max_x);
    debug!(x, "enemy spawned");
    Enemy {
        rect: Rect::new(x, -config.enemy_size, config.enemy_size, config.enemy_size),
        speed: config.enemy_speed,
    }
}

/// Accumulate `dt` and spawn when the interval has elapsed. Returns the new
/// timer value and the spawned enemy, if any.
pub fn update_spawner(
    timer: f32,
    dt: f32,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> (f32, Option<Enemy>) {
    let timer = timer + dt;
    if timer >= config.spawn_interval {
        (0.0, Some(spawn_enemy(config, rng)))
    } else {
        (timer, None)
    }
}

/// Outcome of moving every enemy one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyStep {
    /// Survivors, in their original order.
    pub enemies: Vec<Enemy>,
    /// Enemies removed because they hit the player.
    pub hits: u32,
    /// Enemies removed because they fell off the bottom.
    pub missed: u32,
}

/// Move enemies down and resolve collisions against `player_rect`.
///
/// A hit is checked before the off-screen test, so an enemy that collides
/// is never also counted as missed.
pub fn update_enemies(
    enemies: &[Enemy],
    player_rect: &Rect,
    dt: f32,
    config: &GameConfig,
) -> EnemyStep {
    let mut hits = 0;
    let mut missed = 0;

    let survivors = enemies
        .iter()
        .filter_map(|e| {
            let mut rect = e.rect;
            rect.y += (e.speed * dt) as i32;

            if rect_rect_collision(&rect, player_rect) {
                debug!(x = rect.x, y = rect.y, "enemy hit player");
                hits += 1;
                return None;
            }
            if rect.top() > config.screen_height {
                debug!(x = rect.x, "enemy missed");
                missed += 1;
                return None;
            }
            Some(Enemy { rect, ..e.clone() })
        })
        .collect();

    EnemyStep {
        enemies: survivors,
        hits,
        missed,
    }
}
