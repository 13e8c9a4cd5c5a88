//! Undo history - bounded log of session snapshots
//!
//! Snapshots are appended before every mutating action and popped by undo.
//! Undo walks strictly backwards; there is no redo.
//!
//! When the log is full the behaviour depends on [`HistoryOverflow`]:
//! `Saturate` stops recording (the oldest snapshots stay reachable, the newest
//! actions become un-undoable), `EvictOldest` drops the oldest snapshot to make
//! room.

use std::collections::VecDeque;

use log::{trace, warn};

use crate::snapshot::SessionSnapshot;

/// What `capture` does once the history is at capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOverflow {
    /// Ignore new captures
    #[default]
    Saturate,
    /// Ring buffer: forget the oldest snapshot
    EvictOldest,
}

impl HistoryOverflow {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "saturate" => Some(HistoryOverflow::Saturate),
            "evict" | "evict-oldest" | "ring" => Some(HistoryOverflow::EvictOldest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<SessionSnapshot>,
    capacity: usize,
    overflow: HistoryOverflow,
}

impl History {
    pub fn new(capacity: usize, overflow: HistoryOverflow) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(128)),
            capacity,
            overflow,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Record a snapshot. Returns false when it was not recorded.
    pub fn capture(&mut self, snapshot: SessionSnapshot) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.is_full() {
            match self.overflow {
                HistoryOverflow::Saturate => {
                    warn!(
                        "undo history full ({} snapshots); action will not be undoable",
                        self.capacity
                    );
                    return false;
                }
                HistoryOverflow::EvictOldest => {
                    self.entries.pop_front();
                }
            }
        }
        self.entries.push_back(snapshot);
        trace!("captured snapshot #{}", self.entries.len());
        true
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<SessionSnapshot> {
        self.entries.pop_back()
    }

    /// Most recent snapshot, if any
    pub fn last(&self) -> Option<&SessionSnapshot> {
        self.entries.back()
    }
}
