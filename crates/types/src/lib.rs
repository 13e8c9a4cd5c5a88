//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, JSON observations).
//!
//! # Default Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Pieces visible in the next queue |
//! | `STACK_CAPACITY` | 3 | Pieces that fit in the hold reserve |
//! | `HISTORY_CAPACITY` | 100 | Snapshots kept for undo |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, StackAction, QUEUE_CAPACITY};
//!
//! // Parse a piece kind (case-insensitive)
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! // Pieces are plain values
//! let piece = Piece::new(kind, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! // Menu numbers map to actions
//! assert_eq!(StackAction::from_number(2), Some(StackAction::HoldTransfer));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Default next queue capacity (5 pieces)
pub const QUEUE_CAPACITY: usize = 5;

/// Default hold reserve capacity (3 pieces)
pub const STACK_CAPACITY: usize = 3;

/// Default number of undo snapshots (100)
pub const HISTORY_CAPACITY: usize = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacities() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(STACK_CAPACITY, 3);
        assert_eq!(HISTORY_CAPACITY, 100);
    }

    #[test]
    fn piece_kind_letters_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn piece_kind_index_matches_draw_order() {
        assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
        assert_eq!(PieceKind::from_index(6), Some(PieceKind::Z));
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn action_numbers_follow_menu() {
        assert_eq!(StackAction::from_number(1), Some(StackAction::PlayNormal));
        assert_eq!(StackAction::from_number(3), Some(StackAction::ReleaseTransfer));
        assert_eq!(StackAction::from_number(4), Some(StackAction::SwapTopFront));
        assert_eq!(StackAction::from_number(5), Some(StackAction::Undo));
        assert_eq!(StackAction::from_number(6), Some(StackAction::FullExchange));
        assert_eq!(StackAction::from_number(0), Some(StackAction::Exit));
        assert_eq!(StackAction::from_number(7), None);
        assert_eq!(StackAction::from_number(-1), None);

        for action in StackAction::MENU {
            assert_eq!(StackAction::from_number(action.number()), Some(action));
        }
    }

    #[test]
    fn piece_display() {
        assert_eq!(Piece::new(PieceKind::L, 12).to_string(), "[L 12]");
    }
}

/// The seven tetromino piece kinds
///
/// Only the letter identity matters here; there is no geometry.
/// Variants are declared in draw order, so a uniform index in `0..7`
/// maps to a kind through [`PieceKind::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in draw order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Number of distinct kinds
    pub const COUNT: usize = 7;

    /// Map a draw index (`0..7`) to a kind
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parse a single letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter shown to the player
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Convert to uppercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "I");
    /// assert_eq!(PieceKind::Z.as_str(), "Z");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A uniquely identified piece
///
/// Pieces are copied by value between the queue, the reserve and the
/// undo history. `id` is assigned once by the generator and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Player actions offered by the menu
///
/// Each variant carries the number the player types to select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackAction {
    /// Play the piece at the front of the queue
    PlayNormal,
    /// Move the front piece into the reserve
    HoldTransfer,
    /// Use the top reserved piece, then play the front piece
    ReleaseTransfer,
    /// Exchange the reserve top with the queue front in place
    SwapTopFront,
    /// Roll back the most recent action
    Undo,
    /// Exchange the whole queue with the whole reserve
    FullExchange,
    /// Leave the session
    Exit,
}

impl StackAction {
    /// Actions in menu order
    pub const MENU: [StackAction; 7] = [
        StackAction::PlayNormal,
        StackAction::HoldTransfer,
        StackAction::ReleaseTransfer,
        StackAction::SwapTopFront,
        StackAction::Undo,
        StackAction::FullExchange,
        StackAction::Exit,
    ];

    /// Map a menu number to an action
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(StackAction::PlayNormal),
            2 => Some(StackAction::HoldTransfer),
            3 => Some(StackAction::ReleaseTransfer),
            4 => Some(StackAction::SwapTopFront),
            5 => Some(StackAction::Undo),
            6 => Some(StackAction::FullExchange),
            0 => Some(StackAction::Exit),
            _ => None,
        }
    }

    /// Menu number for this action
    pub fn number(&self) -> i64 {
        match self {
            StackAction::PlayNormal => 1,
            StackAction::HoldTransfer => 2,
            StackAction::ReleaseTransfer => 3,
            StackAction::SwapTopFront => 4,
            StackAction::Undo => 5,
            StackAction::FullExchange => 6,
            StackAction::Exit => 0,
        }
    }

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::StackAction;
    ///
    /// assert_eq!(StackAction::from_str("hold"), Some(StackAction::HoldTransfer));
    /// assert_eq!(StackAction::from_str("fullExchange"), Some(StackAction::FullExchange));
    /// assert_eq!(StackAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(StackAction::PlayNormal),
            "hold" => Some(StackAction::HoldTransfer),
            "release" => Some(StackAction::ReleaseTransfer),
            "swap" => Some(StackAction::SwapTopFront),
            "undo" => Some(StackAction::Undo),
            "fullexchange" => Some(StackAction::FullExchange),
            "exit" => Some(StackAction::Exit),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in JSON observations)
    pub fn as_str(&self) -> &'static str {
        match self {
            StackAction::PlayNormal => "play",
            StackAction::HoldTransfer => "hold",
            StackAction::ReleaseTransfer => "release",
            StackAction::SwapTopFront => "swap",
            StackAction::Undo => "undo",
            StackAction::FullExchange => "fullExchange",
            StackAction::Exit => "exit",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            StackAction::PlayNormal => "Play current piece",
            StackAction::HoldTransfer => "Hold piece (reserve)",
            StackAction::ReleaseTransfer => "Use reserved piece",
            StackAction::SwapTopFront => "Swap reserve top with queue front",
            StackAction::Undo => "Undo last action",
            StackAction::FullExchange => "Exchange queue with reserve",
            StackAction::Exit => "Quit",
        }
    }
}
