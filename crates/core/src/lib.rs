//! Core session logic - pure, deterministic, and testable
//!
//! This crate models the "next piece" and "hold" mechanics of a falling-block
//! puzzle game: a fixed-size lookahead queue, a bounded reserve stack, the
//! actions that move pieces between them, and snapshot-based undo.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted [`KindSource`]) produces identical sessions
//! - **Testable**: Every action returns a structured result or a [`SessionError`]
//! - **Portable**: Can be driven by the terminal menu, a script, or another program
//!
//! # Module Structure
//!
//! - [`rng`]: Uniform piece generation with never-reused ids
//! - [`queue`]: Circular next queue
//! - [`stack`]: Bounded hold reserve
//! - [`snapshot`]: Full value copies of queue + reserve
//! - [`history`]: Bounded undo log
//! - [`session`]: The actions (play, hold, release, swap, full exchange, undo)
//! - [`config`]: Capacities, history policy and seed, with environment overrides
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{Session, SessionConfig};
//!
//! let mut session = Session::initialize(&SessionConfig::seeded(12345)).unwrap();
//! assert_eq!(session.queue_view().len(), 5);
//!
//! // Put the front piece aside, then take it back
//! let held = session.hold_transfer().unwrap();
//! assert_eq!(session.stack_view(), vec![held.piece]);
//! session.undo().unwrap();
//! assert!(session.stack_view().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use error::SessionError;
pub use history::{History, HistoryOverflow};
pub use queue::NextQueue;
pub use rng::{time_seed, KindSource, PieceGenerator, SimpleRng};
pub use session::{ActionOutcome, Exchange, Release, Session, Swap, Transfer};
pub use snapshot::SessionSnapshot;
pub use stack::HoldStack;
