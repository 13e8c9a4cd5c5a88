//! Session - queue, reserve, undo history and the piece generator in one place
//!
//! Every mutating action first captures a snapshot of the queue and the
//! reserve, then runs. A rejected action still leaves its snapshot behind, so
//! undoing it restores an identical state.
//!
//! Actions that take exactly one piece out of the queue (play, hold, and the
//! second half of release) enqueue one fresh piece before returning. The full
//! exchange is a pure rearrangement: it may leave the queue short until later
//! plays refill it one piece at a time.

use log::debug;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::history::History;
use crate::queue::NextQueue;
use crate::rng::{KindSource, PieceGenerator, SimpleRng};
use crate::snapshot::SessionSnapshot;
use crate::stack::HoldStack;
use crate::types::{Piece, StackAction};

/// A piece moved out of the queue, plus the piece drawn to replace it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub piece: Piece,
    pub drawn: Option<Piece>,
}

/// Result of using the reserve top.
///
/// `used` always left the reserve. `played` is the queue front that was played
/// with it, or `QueueEmpty` when there was none; the reserve pop is kept
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub used: Piece,
    pub played: Result<Piece, SessionError>,
    pub drawn: Option<Piece>,
}

/// Pieces that changed places in a top/front swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    /// Former reserve top, now at the queue front
    pub to_queue: Piece,
    /// Former queue front, now on the reserve top
    pub to_stack: Piece,
}

/// Summary of a full exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub queue_len: usize,
    pub stack_len: usize,
    /// Pieces that fit in neither structure afterwards
    pub discarded: Vec<Piece>,
}

/// Outcome of [`Session::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(Result<Transfer, SessionError>),
    Held(Result<Transfer, SessionError>),
    Released(Result<Release, SessionError>),
    Swapped(Result<Swap, SessionError>),
    Undone(Result<(), SessionError>),
    Exchanged(Exchange),
    Exit,
}

impl ActionOutcome {
    /// Error reported by the action, if it was rejected outright
    pub fn error(&self) -> Option<SessionError> {
        match self {
            ActionOutcome::Played(r) | ActionOutcome::Held(r) => r.err(),
            ActionOutcome::Released(r) => r.err(),
            ActionOutcome::Swapped(r) => r.err(),
            ActionOutcome::Undone(r) => r.err(),
            ActionOutcome::Exchanged(_) | ActionOutcome::Exit => None,
        }
    }
}

/// One player's session.
///
/// All state is owned here and mutated through `&mut self`. Operations read
/// and then write shared indices without any atomicity, so sharing a session
/// between threads needs external synchronisation (for example a `Mutex`).
#[derive(Debug, Clone)]
pub struct Session<S = SimpleRng> {
    queue: NextQueue,
    stack: HoldStack,
    history: History,
    generator: PieceGenerator<S>,
    seed: Option<u32>,
}

impl Session<SimpleRng> {
    /// Start a session with the configured (or clock-derived) seed
    pub fn initialize(config: &SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let seed = config.resolve_seed();
        let mut session = Self::with_source(config, SimpleRng::new(seed))?;
        session.seed = Some(seed);
        debug!("session seeded with {}", seed);
        Ok(session)
    }
}

impl<S: KindSource> Session<S> {
    /// Start a session drawing kinds from `source`.
    ///
    /// Fills the queue, leaves the reserve empty and records the initial
    /// snapshot.
    pub fn with_source(config: &SessionConfig, source: S) -> Result<Self, SessionError> {
        config.validate()?;
        let mut session = Self {
            queue: NextQueue::new(config.queue_capacity)?,
            stack: HoldStack::new(config.stack_capacity)?,
            history: History::new(config.history_capacity, config.history_overflow),
            generator: PieceGenerator::new(source),
            seed: None,
        };
        while session.queue.enqueue(&mut session.generator).is_ok() {}
        session.capture();
        debug!(
            "session ready: queue {}/{}, reserve 0/{}, history capacity {}",
            session.queue.len(),
            config.queue_capacity,
            config.stack_capacity,
            config.history_capacity
        );
        Ok(session)
    }

    fn capture(&mut self) -> bool {
        self.history
            .capture(SessionSnapshot::capture(&self.queue, &self.stack))
    }

    /// Top the queue back up by one piece after a removal
    fn refill(&mut self) -> Option<Piece> {
        self.queue.enqueue(&mut self.generator).ok()
    }

    /// Play the front piece, then draw a replacement
    pub fn play_normal(&mut self) -> Result<Transfer, SessionError> {
        self.capture();
        let piece = self.queue.dequeue()?;
        let drawn = self.refill();
        debug!("played {}", piece);
        Ok(Transfer { piece, drawn })
    }

    /// Move the front piece into the reserve, then draw a replacement
    pub fn hold_transfer(&mut self) -> Result<Transfer, SessionError> {
        self.capture();
        if self.queue.is_empty() {
            return Err(SessionError::QueueEmpty);
        }
        if self.stack.is_full() {
            return Err(SessionError::StackFull);
        }
        let piece = self.queue.dequeue()?;
        self.stack.push(piece)?;
        let drawn = self.refill();
        debug!("held {}", piece);
        Ok(Transfer { piece, drawn })
    }

    /// Use the reserve top, play the queue front, then draw one replacement.
    ///
    /// The pop is not rolled back when the queue turns out to be empty.
    pub fn release_transfer(&mut self) -> Result<Release, SessionError> {
        self.capture();
        let used = self.stack.pop()?;
        let played = self.queue.dequeue();
        let drawn = self.refill();
        debug!("used reserved {}, queue play: {:?}", used, played);
        Ok(Release {
            used,
            played,
            drawn,
        })
    }

    /// Exchange the reserve top with the queue front in place
    pub fn swap_top_front(&mut self) -> Result<Swap, SessionError> {
        self.capture();
        let front = self.queue.front().ok_or(SessionError::EmptyStructure)?;
        let top = self.stack.peek().ok_or(SessionError::EmptyStructure)?;
        self.stack.replace_top(front)?;
        self.queue.replace_front(top)?;
        debug!("swapped reserve top {} with queue front {}", top, front);
        Ok(Swap {
            to_queue: top,
            to_stack: front,
        })
    }

    /// Exchange the queue and the reserve wholesale.
    ///
    /// The reserve, oldest first, becomes the queue (from a reset head); the
    /// old queue fills the remaining slots uncounted. The old queue, front
    /// first, becomes the reserve up to its capacity. Never fails and never
    /// draws new pieces.
    pub fn full_exchange(&mut self) -> Exchange {
        self.capture();
        let old_queue = self.queue.view();
        let old_stack: Vec<Piece> = self.stack.bottom_up().collect();

        self.queue.rearrange(&old_stack, &old_queue);
        self.stack.refill_from(&old_queue);

        let discarded: Vec<Piece> = old_stack
            .iter()
            .skip(self.queue.capacity())
            .chain(old_queue.iter().skip(self.stack.capacity()))
            .copied()
            .collect();

        debug!(
            "full exchange: queue {} -> {}, reserve {} -> {}, {} discarded",
            old_queue.len(),
            self.queue.len(),
            old_stack.len(),
            self.stack.len(),
            discarded.len()
        );
        Exchange {
            queue_len: self.queue.len(),
            stack_len: self.stack.len(),
            discarded,
        }
    }

    /// Restore the most recent snapshot
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let snapshot = self.history.pop().ok_or(SessionError::NothingToUndo)?;
        snapshot.restore_into(&mut self.queue, &mut self.stack);
        debug!("undo: {} snapshots left", self.history.len());
        Ok(())
    }

    /// Dispatch a menu action
    pub fn apply(&mut self, action: StackAction) -> ActionOutcome {
        let outcome = match action {
            StackAction::PlayNormal => ActionOutcome::Played(self.play_normal()),
            StackAction::HoldTransfer => ActionOutcome::Held(self.hold_transfer()),
            StackAction::ReleaseTransfer => ActionOutcome::Released(self.release_transfer()),
            StackAction::SwapTopFront => ActionOutcome::Swapped(self.swap_top_front()),
            StackAction::Undo => ActionOutcome::Undone(self.undo()),
            StackAction::FullExchange => ActionOutcome::Exchanged(self.full_exchange()),
            StackAction::Exit => ActionOutcome::Exit,
        };
        if let Some(err) = outcome.error() {
            debug!("{} rejected: {}", action.as_str(), err);
        }
        outcome
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn stack(&self) -> &HoldStack {
        &self.stack
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Queue contents, soonest-to-fall first
    pub fn queue_view(&self) -> Vec<Piece> {
        self.queue.view()
    }

    /// Reserve contents, top first
    pub fn stack_view(&self) -> Vec<Piece> {
        self.stack.view()
    }

    /// Copy of the current state (not recorded in the history)
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.queue, &self.stack)
    }

    /// Id the next generated piece will receive
    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    /// Seed of the built-in RNG, when the session owns one
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }
}
