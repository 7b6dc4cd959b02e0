//! SessionView: maps a `SessionSnapshot` into console text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionReport, SessionError, SessionSnapshot};
use crate::types::Piece;

/// Outcome of the previous action, carried into the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Report(ActionReport),
    Failure(SessionError),
}

/// Renders the session state, the last-action feedback and the menu.
#[derive(Debug, Default)]
pub struct SessionView;

impl SessionView {
    /// Render one frame as a list of text lines.
    pub fn render(&self, snapshot: &SessionSnapshot, feedback: Option<&Feedback>) -> Vec<String> {
        let mut lines = Vec::with_capacity(16);

        lines.push("==================================================".to_string());
        lines.push("                  TETRIS STACK                    ".to_string());
        lines.push("==================================================".to_string());
        lines.push(format!("Next pieces:           {}", format_row(&snapshot.queue)));
        lines.push(format!("Reserve (top -> base): {}", format_row(&snapshot.stack)));
        lines.push("--------------------------------------------------".to_string());
        lines.push("1. play piece            4. swap front <-> top".to_string());
        lines.push("2. reserve piece         5. swap first three".to_string());
        lines.push("3. use reserved piece    0. quit".to_string());
        lines.push("--------------------------------------------------".to_string());

        if let Some(feedback) = feedback {
            lines.push(self.format_feedback(feedback));
        }

        lines
    }

    fn format_feedback(&self, feedback: &Feedback) -> String {
        match feedback {
            Feedback::Report(report) => match report {
                ActionReport::Played(p) => format!("played piece {}", format_piece(p)),
                ActionReport::Reserved(p) => format!("reserved piece {}", format_piece(p)),
                ActionReport::Used(p) => format!("used reserved piece {}", format_piece(p)),
                ActionReport::SwappedTop {
                    queue_front,
                    stack_top,
                } => format!(
                    "swapped: queue front is now {}, reserve top is now {}",
                    format_piece(queue_front),
                    format_piece(stack_top)
                ),
                ActionReport::SwappedTriple { .. } => {
                    "swapped the first three pieces of queue and reserve".to_string()
                }
            },
            Feedback::Failure(err) => format!("cannot do that: {err}"),
        }
    }
}

/// Format a piece the way the state header shows it, e.g. `[T 4]`.
pub fn format_piece(piece: &Piece) -> String {
    format!("[{} {}]", piece.kind.as_char(), piece.id)
}

fn format_row(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "(empty)".to_string();
    }
    pieces
        .iter()
        .map(format_piece)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    #[test]
    fn render_shows_queue_and_empty_reserve() {
        let session = Session::new(1);
        let view = SessionView;
        let lines = view.render(&session.snapshot(), None);

        let queue_line = lines.iter().find(|l| l.starts_with("Next pieces")).unwrap();
        for id in 0..5 {
            assert!(queue_line.contains(&format!(" {id}]")), "{queue_line}");
        }

        let stack_line = lines.iter().find(|l| l.starts_with("Reserve")).unwrap();
        assert!(stack_line.contains("(empty)"));
    }

    #[test]
    fn render_includes_failure_feedback() {
        let mut session = Session::new(1);
        let err = session.use_reserved().unwrap_err();
        let view = SessionView;
        let lines = view.render(&session.snapshot(), Some(&Feedback::Failure(err)));

        assert!(lines
            .iter()
            .any(|l| l.contains("reserve stack is empty")));
    }

    #[test]
    fn piece_formatting() {
        use crate::types::{Piece, PieceKind};
        assert_eq!(format_piece(&Piece::new(PieceKind::T, 41)), "[T 41]");
    }
}
