//! Mapping from typed lines to menu actions.

use crate::types::StackAction;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Action(StackAction),
    /// Blank line; re-prompt without complaint
    Empty,
    /// Anything else, kept for the "invalid choice" message
    Invalid(String),
}

/// Map a line to a menu input.
///
/// Accepts the menu numbers (`1`..`6`, `0`), the action names (`hold`,
/// `undo`, ...) and `q`/`quit` as a synonym for exit.
pub fn parse_line(line: &str) -> MenuInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return MenuInput::Empty;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return match StackAction::from_number(n) {
            Some(action) => MenuInput::Action(action),
            None => MenuInput::Invalid(trimmed.to_string()),
        };
    }

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" => MenuInput::Action(StackAction::Exit),
        other => StackAction::from_str(other)
            .map(MenuInput::Action)
            .unwrap_or_else(|| MenuInput::Invalid(trimmed.to_string())),
    }
}
