mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use arcade_loop::audio::Audio;
use arcade_loop::clock::FrameClock;
use arcade_loop::compute::{handle_input, init_state, tick};
use arcade_loop::config::{GameConfig, TARGET_TPS};
use arcade_loop::input::InputTracker;
use arcade_loop::render::render_frame;

const LOG_FILE: &str = "arcade_loop.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs go to a file and only when
/// `RUST_LOG` asks for them.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = File::create(std::env::temp_dir().join(LOG_FILE)) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One tick: poll input, update, render. Returns when quit is requested.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut tracker = InputTracker::new();
    let mut clock = FrameClock::new(TARGET_TPS);

    let audio = match Audio::init() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("audio disabled: {e}");
            None
        }
    };

    let mut state = init_state(GameConfig::default());
    let world = (state.config.screen_width, state.config.screen_height);

    loop {
        let dt = clock.tick();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            tracker.record(&ev);
        }
        let input = tracker.snapshot();
        if input.quit {
            info!(frame = state.frame, "quit requested");
            return Ok(());
        }

        state = handle_input(&state, &input.presses);
        state = tick(&state, &input.held, dt, &mut rng);

        if let Some(audio) = audio.as_ref() {
            audio.play(out, &state.events)?;
        }
        display::render(out, &render_frame(&state), world)?;
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging();
    info!("starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("entering alternate screen")?;
    out.execute(cursor::Hide).context("hiding cursor")?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("stopped");
    result.context("running game loop")
}
