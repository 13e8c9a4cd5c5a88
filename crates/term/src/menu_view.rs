//! MenuView: maps a `core::Session` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionOutcome, KindSource, Session, SessionError};
use crate::style::{piece_color, Line, Span, BORDER, NOTICE, WARNING};
use crate::types::{Piece, StackAction};

/// Menu layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// Inner width of the menu box in columns.
    inner_width: usize,
}

impl Default for MenuView {
    fn default() -> Self {
        Self::new(42)
    }
}

impl MenuView {
    pub fn new(inner_width: usize) -> Self {
        Self { inner_width }
    }

    /// Lines printed once before the first menu
    pub fn banner(&self) -> Vec<Line> {
        vec![
            Line::new(vec![Span::colored("=== TETRIS STACK ===", NOTICE).bold()]),
            Line::plain("Generating initial pieces..."),
            Line::default(),
        ]
    }

    /// Current queue and reserve, followed by the numbered menu
    pub fn render<S: KindSource>(&self, session: &Session<S>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(16);
        lines.push(self.rule('╔', '═', '╗'));
        lines.push(queue_line(&session.queue_view()));
        lines.push(reserve_line(&session.stack_view()));
        lines.push(Line::new(vec![Span::plain(format!(
            "History  : {}/{}",
            session.history().len(),
            session.history().capacity()
        ))]));
        lines.push(self.rule('╠', '─', '╣'));
        for action in StackAction::MENU {
            lines.push(self.menu_row(action));
        }
        lines.push(self.rule('╚', '═', '╝'));
        lines
    }

    /// Prompt shown before reading a choice
    pub fn prompt(&self) -> Span {
        Span::plain("→ ")
    }

    fn rule(&self, left: char, fill: char, right: char) -> Line {
        let mut text = String::with_capacity(self.inner_width + 2);
        text.push(left);
        text.extend(std::iter::repeat(fill).take(self.inner_width));
        text.push(right);
        Line::new(vec![Span::colored(text, BORDER)])
    }

    fn menu_row(&self, action: StackAction) -> Line {
        let body = format!(" {} - {}", action.number(), action.label());
        let pad = self.inner_width.saturating_sub(body.chars().count());
        Line::new(vec![
            Span::colored("║", BORDER),
            Span::plain(format!("{}{}", body, " ".repeat(pad))),
            Span::colored("║", BORDER),
        ])
    }
}

fn piece_span(piece: Piece) -> Span {
    Span::colored(piece.to_string(), piece_color(piece.kind)).bold()
}

fn pieces_into(spans: &mut Vec<Span>, pieces: &[Piece]) {
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            spans.push(Span::plain(" "));
        }
        spans.push(piece_span(*piece));
    }
}

/// Queue contents, soonest first
pub fn queue_line(pieces: &[Piece]) -> Line {
    let mut spans = vec![Span::plain("Queue    : ")];
    if pieces.is_empty() {
        spans.push(Span::plain("<empty>"));
    } else {
        pieces_into(&mut spans, pieces);
    }
    Line::new(spans)
}

/// Reserve contents, top first
pub fn reserve_line(pieces: &[Piece]) -> Line {
    let mut spans = vec![Span::plain("Reserve  : ")];
    if pieces.is_empty() {
        spans.push(Span::plain("<empty>"));
    } else {
        pieces_into(&mut spans, pieces);
        spans.push(Span::plain("  ← top"));
    }
    Line::new(spans)
}

/// Player-facing wording for a rejected action
pub fn error_message(err: SessionError) -> &'static str {
    match err {
        SessionError::QueueFull => "Queue full!",
        SessionError::QueueEmpty => "Queue empty!",
        SessionError::StackFull => "Reserve full!",
        SessionError::StackEmpty => "Reserve empty!",
        SessionError::EmptyStructure => "Cannot swap: one of the structures is empty!",
        SessionError::NothingToUndo => "Nothing to undo!",
        SessionError::InvalidCapacity { .. } => "Invalid capacity!",
    }
}

fn warning(err: SessionError) -> Line {
    Line::new(vec![Span::colored(format!("  {}", error_message(err)), WARNING)])
}

fn with_piece(label: &str, piece: Piece) -> Line {
    Line::new(vec![Span::plain(format!("  {} ", label)), piece_span(piece)])
}

/// Messages describing what an action did
pub fn outcome_lines(outcome: &ActionOutcome) -> Vec<Line> {
    match outcome {
        ActionOutcome::Played(Ok(t)) => vec![with_piece("Played piece", t.piece)],
        ActionOutcome::Held(Ok(t)) => vec![with_piece("Reserved", t.piece)],
        ActionOutcome::Released(Ok(r)) => {
            let mut lines = vec![with_piece("Used reserved", r.used)];
            match r.played {
                Ok(piece) => lines.push(with_piece("Played from queue", piece)),
                Err(err) => lines.push(warning(err)),
            }
            lines
        }
        ActionOutcome::Swapped(Ok(_)) => {
            vec![Line::plain("  Swapped reserve top with queue front!")]
        }
        ActionOutcome::Undone(Ok(())) => vec![Line::plain("  Last action undone!")],
        ActionOutcome::Exchanged(e) => {
            let mut lines = vec![Line::plain("  Exchanged queue with reserve! (full swap)")];
            if !e.discarded.is_empty() {
                let mut spans = vec![Span::plain("  Discarded: ")];
                pieces_into(&mut spans, &e.discarded);
                lines.push(Line::new(spans));
            }
            lines
        }
        ActionOutcome::Exit => vec![Line::new(vec![Span::colored(
            "Thanks for playing!",
            NOTICE,
        )])],
        ActionOutcome::Played(Err(err))
        | ActionOutcome::Held(Err(err))
        | ActionOutcome::Released(Err(err))
        | ActionOutcome::Swapped(Err(err))
        | ActionOutcome::Undone(Err(err)) => vec![warning(*err)],
    }
}

/// Message for input that maps to no action
pub fn invalid_choice_line(input: &str) -> Line {
    Line::new(vec![Span::colored(
        format!("  Invalid option: {:?}", input),
        WARNING,
    )])
}
