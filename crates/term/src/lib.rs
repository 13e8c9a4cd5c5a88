//! Terminal rendering module (the session controller's output side).
//!
//! Keeps `core` free of I/O: views turn a session and action outcomes into
//! styled lines, and the renderer writes them out with crossterm.
//!
//! - [`menu_view`]: the boxed queue / reserve / menu display (pure)
//! - [`renderer`]: encodes styled lines for a terminal or plain writer
//! - [`observation`]: one-line JSON observations for scripted callers

pub mod menu_view;
pub mod observation;
pub mod renderer;
pub mod style;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use menu_view::{
    error_message, invalid_choice_line, outcome_lines, queue_line, reserve_line, MenuView,
};
pub use observation::{
    build_observation, invalid_observation, ready_observation, Observation, ObservationStatus,
    PieceSnapshot,
};
pub use renderer::{color_supported, encode_lines_into, TextRenderer};
pub use style::{piece_color, Line, Rgb, Span};
