/// Render dispatch: turns a `GameState` into a list of draw commands.
///
/// No terminal I/O happens here; the binary's display layer rasterizes the
/// commands. Commands are painted in order, so later ones cover earlier
/// ones.

use crate::config::{
    player_frame_color, COLOR_BACKDROP, COLOR_ENEMY, COLOR_TILE, COLOR_WHITE,
};
use crate::entities::{GameState, Rect, Rgb, Rgba, Screen};

/// Dims the playfield while paused.
pub const PAUSE_TINT: Rgba = Rgba(0, 0, 0, 150);
/// Reddens the playfield after defeat.
pub const GAME_OVER_TINT: Rgba = Rgba(100, 0, 0, 150);

/// Backdrop tile pitch in pixels.
const TILE: i32 = 100;
const TILE_MARK: i32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// `(x, y)` is the top-left corner of the text.
    TopLeft,
    /// `(x, y)` is the centre of the text.
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Rgb },
    Circle { x: i32, y: i32, radius: i32, color: Rgb },
    Text { text: String, x: i32, y: i32, anchor: Anchor, color: Rgb },
    /// Semi-transparent tint over everything drawn so far.
    Overlay { tint: Rgba },
}

fn text(text: impl Into<String>, x: i32, y: i32, anchor: Anchor) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        x,
        y,
        anchor,
        color: COLOR_WHITE,
    }
}

/// Render one complete frame for the active screen.
pub fn render_frame(state: &GameState) -> Vec<DrawCommand> {
    match state.screen {
        Screen::Intro => draw_intro(state),
        Screen::Playing => draw_game(state),
        Screen::Paused => draw_pause(state),
        Screen::GameOver => draw_game_over(state),
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_intro(state: &GameState) -> Vec<DrawCommand> {
    let cx = state.config.screen_width / 2;
    let mut cmds = draw_scrolling_bg(state);
    cmds.push(text("ARCADE LOOP", cx, 200, Anchor::Center));
    cmds.push(text(
        "Press ENTER to start, or type your name below:",
        cx,
        250,
        Anchor::Center,
    ));
    cmds.push(text(state.player_name.clone(), cx, 300, Anchor::Center));
    cmds.push(text(
        "Arrows / WASD : Move   P : Pause   ESC : Quit",
        cx,
        state.config.screen_height - 40,
        Anchor::Center,
    ));
    cmds
}

fn draw_game(state: &GameState) -> Vec<DrawCommand> {
    let mut cmds = draw_scrolling_bg(state);

    cmds.push(DrawCommand::Rect {
        rect: state.player.rect,
        color: player_frame_color(state.player.frame_index),
    });
    cmds.extend(state.enemies.iter().map(|e| DrawCommand::Rect {
        rect: e.rect,
        color: COLOR_ENEMY,
    }));
    cmds.extend(state.particles.iter().map(|p| DrawCommand::Circle {
        x: p.x as i32,
        y: p.y as i32,
        radius: p.radius,
        color: p.color,
    }));

    // HUD
    cmds.push(text(format!("HP: {}", state.player.health), 10, 10, Anchor::TopLeft));
    cmds.push(text(format!("Score: {}", state.score), 10, 30, Anchor::TopLeft));
    cmds.push(text("Press P to pause", 10, 50, Anchor::TopLeft));
    cmds
}

fn draw_pause(state: &GameState) -> Vec<DrawCommand> {
    let (cx, cy) = (state.config.screen_width / 2, state.config.screen_height / 2);
    let mut cmds = draw_game(state);
    cmds.push(DrawCommand::Overlay { tint: PAUSE_TINT });
    cmds.push(text("PAUSED - Press P to Resume", cx, cy, Anchor::Center));
    cmds
}

fn draw_game_over(state: &GameState) -> Vec<DrawCommand> {
    let (cx, cy) = (state.config.screen_width / 2, state.config.screen_height / 2);
    let mut cmds = draw_game(state);
    cmds.push(DrawCommand::Overlay { tint: GAME_OVER_TINT });
    if !state.player_name.is_empty() {
        cmds.push(text(format!("Pilot: {}", state.player_name), cx, cy - 60, Anchor::Center));
    }
    cmds.push(text("GAME OVER", cx, cy - 20, Anchor::Center));
    cmds.push(text("Press R to Restart or ESC to Quit", cx, cy + 20, Anchor::Center));
    cmds.push(text(
        format!("Score: {}   Best: {}", state.score, state.best_score),
        cx,
        cy + 60,
        Anchor::Center,
    ));
    cmds
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Two stacked copies of the tiled backdrop, shifted up by the scroll
/// offset, so the seam travels down the screen and wraps.
pub fn draw_scrolling_bg(state: &GameState) -> Vec<DrawCommand> {
    let (w, h) = (state.config.screen_width, state.config.screen_height);
    let top = -(state.background.offset as i32);

    let mut cmds = Vec::new();
    for y0 in [top, top + h] {
        cmds.push(DrawCommand::Rect {
            rect: Rect::new(0, y0, w, h),
            color: COLOR_BACKDROP,
        });
        for row in 0..h / TILE {
            // Odd rows are staggered by half a tile
            let shift = if row % 2 == 1 { TILE / 2 } else { 0 };
            for col in 0..w / TILE {
                cmds.push(DrawCommand::Rect {
                    rect: Rect::new(
                        col * TILE + shift + (TILE - TILE_MARK) / 4,
                        y0 + row * TILE + (TILE - TILE_MARK) / 2,
                        TILE_MARK,
                        TILE_MARK,
                    ),
                    color: COLOR_TILE,
                });
            }
        }
    }
    cmds
}
