//! Terminal Game of Life (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui-life-term`.
//! Configuration comes from `LIFE_*` environment variables; logs go to
//! `LIFE_LOG_PATH` when set and are dropped otherwise.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_life::core::Grid;
use tui_life::engine::{LifeConfig, Session, SessionStatus};
use tui_life::input::{handle_key_event, mouse_click, should_quit};
use tui_life::logging::{self, LogTarget};
use tui_life::term::{FrameBuffer, HudStatus, LifeView, RenderThrottle, TerminalRenderer, Viewport};
use tui_life::types::TICK_MS;

/// Redraw cadence while stopped and nothing changes.
const IDLE_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = LifeConfig::from_env()?;
    match config.log_path.as_deref() {
        Some(path) => logging::init(LogTarget::File(path))?,
        None => logging::init(LogTarget::Off)?,
    }

    let seed = config.seed_or(tui_life::clock_seed());
    let mut session = Session::new(&config, seed)?;
    info!(seed, interval_ms = config.interval_ms, "tui-life starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Restore the terminal even when the loop failed; the loop error wins.
    let restored = term.exit();
    info!(generation = session.status().generation, "tui-life exiting");
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        // Render.
        let status = session.status();
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame_fingerprint(session.grid(), &status), status.running)
        {
            view.render_into(session.grid(), &hud(&status), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    let hit = mouse_click(mouse).and_then(|(x, y)| {
                        view.cell_at(session.store().dimensions(), viewport, x, y)
                    });
                    if let Some(coord) = hit {
                        if let Err(e) = session.toggle_at(coord) {
                            warn!(error = %e, "click toggle rejected");
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.tick(elapsed_ms);
        }
    }
}

fn hud(status: &SessionStatus) -> HudStatus {
    HudStatus {
        generation: status.generation,
        population: status.population,
        running: status.running,
        interval_ms: status.interval_ms,
        cursor: Some(status.cursor),
    }
}

/// Everything visible on screen folded into one value.
fn frame_fingerprint(grid: &Grid, status: &SessionStatus) -> u64 {
    let mut h = grid.fingerprint();
    for v in [
        status.generation,
        status.interval_ms as u64,
        status.running as u64,
        status.cursor.row as u64,
        status.cursor.col as u64,
    ] {
        h = (h ^ v).wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}
