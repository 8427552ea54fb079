//! Terminal match-3 runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for mouse
//! input and a small draw-list renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_match::core::Game;
use tui_match::input::{should_quit, PointerMap};
use tui_match::term::{GameView, TerminalRenderer};
use tui_match::types::{LevelConfig, PointerEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game = Game::new(LevelConfig::default(), seed);

    let view = GameView::default();
    let mut snapshot = game.snapshot();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let viewport = term.viewport()?;
        game.snapshot_into(&mut snapshot);
        let cells = view.render(&snapshot, viewport);
        term.draw(&cells)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    let (origin_col, origin_row) = view.board_origin(&snapshot, viewport);
                    let map = PointerMap::new(origin_col, origin_row, snapshot.height);
                    match map.pointer_event(mouse) {
                        Some(PointerEvent::Press(pos)) => game.press(pos),
                        Some(PointerEvent::Move(pos)) => game.pointer_move(pos),
                        Some(PointerEvent::Release(pos)) => game.release(pos),
                        None => {}
                    }
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
    }
}
