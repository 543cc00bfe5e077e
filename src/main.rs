//! Terminal paper plane runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! `paper-plane sim ...` runs the headless simulation instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use paper_plane::core::{GameConfig, GameState};
use paper_plane::input::{handle_key_event, should_quit, InputHandler};
use paper_plane::logging::init_logging;
use paper_plane::sim::{parse_sim_args, run_simulation};
use paper_plane::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

/// Keep-alive redraw interval for the start and game-over screens.
const STATIC_REFRESH_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    if let Some(sim) = parse_sim_args(&args)? {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_simulation(&sim, config, &mut out)?;
        return Ok(());
    }
    if let Some(arg) = args.first() {
        return Err(anyhow!("unknown argument: {} (expected no arguments or `sim`)", arg));
    }

    let mut game = GameState::new(config).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut input = if term.key_release_events() {
        InputHandler::new().with_release_events()
    } else {
        InputHandler::new()
    };
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let tick_ms = game.config().tick_ms;
    let tick_duration = Duration::from_millis(tick_ms as u64);
    let clock = Instant::now();
    let mut last_tick = Instant::now();

    log::info!(
        "terminal runner started (key release events: {})",
        term.key_release_events()
    );

    loop {
        // Render.
        let snap = game.snapshot();
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), !snap.playable()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log::info!("quit requested");
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        }
                        if let Some(action) = handle_key_event(key) {
                            log::debug!("action {}", action.as_str());
                            game.apply_action(action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        input.handle_key_repeat(key.code);
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = input.handle_key_release(key.code) {
                            game.apply_action(action);
                        }
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(action) = input.update(tick_ms) {
                game.apply_action(action);
            }
            game.tick(tick_ms);
        }
    }
}
