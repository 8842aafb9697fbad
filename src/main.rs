//! Terminal stacker runner (default binary).
//!
//! Keys are mapped to engine commands; a gravity timer calls `tick()` once per
//! fall interval. Pausing stops both the timer and key delivery.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use stacker::core::{GameEngine, GameSnapshot};
use stacker::input::{handle_key_event, is_pause_key, should_quit};
use stacker::settings::Settings;
use stacker::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    for warning in &settings.warnings {
        eprintln!("stacker: {warning}");
    }

    let mut engine = GameEngine::with_seed(settings.engine.clone(), settings.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut engine);
    // Always try to restore terminal state.
    let _ = term.exit();

    if settings.debug {
        eprintln!("stacker: seed={}", settings.seed);
        eprint!("{engine}");
    }
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut paused = false;
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into_with_pause(&snap, paused, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let fall_interval = Duration::from_millis(engine.fall_interval_ms() as u64);
        let timeout = if paused {
            Duration::from_millis(250)
        } else {
            fall_interval.saturating_sub(last_tick.elapsed())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_pause_key(key) {
                        paused = !paused;
                        last_tick = Instant::now();
                        continue;
                    }
                    if !paused {
                        if let Some(command) = handle_key_event(key) {
                            engine.apply(command);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if !paused && last_tick.elapsed() >= fall_interval {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
