//! Tetris Stack (workspace facade crate).
//!
//! This package exposes the member crates as `tetris_stack::{core,input,term,types}`
//! and hosts the session controller used by the binary: argument parsing
//! ([`cli`]) and the menu loop ([`controller`]).

pub mod cli;
pub mod controller;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;
