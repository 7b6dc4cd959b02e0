//! Tetris Stack runner (default binary).
//!
//! Menu-driven loop: draw the current queue/reserve state plus the action
//! menu, wait for a keypress, apply the chosen action, repeat. The terminal
//! is always restored on the way out, including on errors.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_stack::core::Session;
use tetris_stack::term::{map_key, should_quit, Feedback, MenuChoice, SessionView, TerminalScreen};

fn main() -> Result<()> {
    let mut term = TerminalScreen::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalScreen) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = Session::new(seed);

    let view = SessionView;
    let mut feedback: Option<Feedback> = None;

    loop {
        let lines = view.render(&session.snapshot(), feedback.as_ref());
        term.draw(&lines)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            match map_key(key.code) {
                Some(MenuChoice::Quit) => return Ok(()),
                Some(MenuChoice::Action(action)) => {
                    feedback = Some(match session.apply(action) {
                        Ok(report) => Feedback::Report(report),
                        Err(err) => Feedback::Failure(err),
                    });
                }
                None => {
                    // Unmapped key: keep the previous feedback and redraw.
                }
            }
        }
    }
}
