//! Menu input module (session-facing).
//!
//! This module is independent of any terminal framework. It maps typed lines
//! into [`crate::types::StackAction`]s and reads them from any `BufRead`, so
//! the menu loop works the same on an interactive terminal and on piped input.

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{parse_line, MenuInput};
pub use reader::{read_input, InputError};
