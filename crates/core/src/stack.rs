//! Hold reserve - fixed-capacity LIFO of set-aside pieces

use crate::error::SessionError;
use crate::types::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldStack {
    slots: Box<[Option<Piece>]>,
    len: usize,
}

impl HoldStack {
    /// Create an empty reserve. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Result<Self, SessionError> {
        if capacity == 0 {
            return Err(SessionError::InvalidCapacity {
                what: "reserve",
                value: capacity,
            });
        }
        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Slot of the most recently pushed piece; `None` when empty
    pub fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), SessionError> {
        if self.is_full() {
            return Err(SessionError::StackFull);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Piece, SessionError> {
        let piece = self.peek().ok_or(SessionError::StackEmpty)?;
        self.len -= 1;
        Ok(piece)
    }

    pub fn peek(&self) -> Option<Piece> {
        self.top_index().and_then(|top| self.slots[top])
    }

    /// Overwrite the top piece in place, returning the previous one
    pub fn replace_top(&mut self, piece: Piece) -> Result<Piece, SessionError> {
        let top = self.top_index().ok_or(SessionError::StackEmpty)?;
        let previous = self.slots[top].ok_or(SessionError::StackEmpty)?;
        self.slots[top] = Some(piece);
        Ok(previous)
    }

    /// Pieces oldest-pushed first
    pub fn bottom_up(&self) -> impl DoubleEndedIterator<Item = Piece> + '_ {
        self.slots[..self.len].iter().filter_map(|slot| *slot)
    }

    /// Player-visible order: top first
    pub fn view(&self) -> Vec<Piece> {
        self.bottom_up().rev().collect()
    }

    /// Replace the contents, bottom first. Pieces beyond capacity are dropped.
    ///
    /// Returns how many pieces were dropped.
    pub fn refill_from(&mut self, pieces: &[Piece]) -> usize {
        let len = pieces.len().min(self.capacity());
        let mut contents = pieces[..len].iter().copied();
        for slot in self.slots.iter_mut() {
            *slot = contents.next();
        }
        self.len = len;
        pieces.len() - len
    }
}
