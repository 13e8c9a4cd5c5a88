//! Next queue - fixed-capacity circular buffer of upcoming pieces
//!
//! Slots are allocated once at construction and never resized. `head` is the
//! slot of the piece that leaves next, `tail` the slot the next piece is
//! written to, and `len` pieces are valid starting at `head`, wrapping modulo
//! the capacity.
//!
//! The queue never refills itself. Callers that remove a piece are expected to
//! call [`NextQueue::enqueue`] afterwards (see `Session`).

use crate::error::SessionError;
use crate::rng::{KindSource, PieceGenerator};
use crate::types::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    slots: Box<[Option<Piece>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl NextQueue {
    /// Create an empty queue. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Result<Self, SessionError> {
        if capacity == 0 {
            return Err(SessionError::InvalidCapacity {
                what: "queue",
                value: capacity,
            });
        }
        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
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

    /// True when a piece can be taken from the front
    pub fn front_is_available(&self) -> bool {
        self.len > 0
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Generate a piece and append it at the tail.
    ///
    /// Fails with `QueueFull` (without touching the generator) when full.
    pub fn enqueue<S: KindSource>(
        &mut self,
        generator: &mut PieceGenerator<S>,
    ) -> Result<Piece, SessionError> {
        if self.is_full() {
            return Err(SessionError::QueueFull);
        }
        let piece = generator.generate();
        self.slots[self.tail] = Some(piece);
        self.tail = (self.tail + 1) % self.capacity();
        self.len += 1;
        Ok(piece)
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> Result<Piece, SessionError> {
        let piece = self.front().ok_or(SessionError::QueueEmpty)?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(piece)
    }

    /// Piece that leaves next, if any
    pub fn front(&self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head]
    }

    /// Overwrite the front piece in place, returning the previous one
    pub fn replace_front(&mut self, piece: Piece) -> Result<Piece, SessionError> {
        let previous = self.front().ok_or(SessionError::QueueEmpty)?;
        self.slots[self.head] = Some(piece);
        Ok(previous)
    }

    /// Valid pieces, soonest-to-fall first
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % capacity])
    }

    /// Player-visible order: front to back
    pub fn view(&self) -> Vec<Piece> {
        self.iter().collect()
    }

    /// Rewrite the buffer from slot 0.
    ///
    /// `live` becomes the counted contents (truncated to capacity); `trailing`
    /// fills the remaining slots without being counted. Slots left over after
    /// both are cleared. `head` resets to 0.
    pub fn rearrange(&mut self, live: &[Piece], trailing: &[Piece]) {
        let capacity = self.capacity();
        let len = live.len().min(capacity);
        let mut contents = live[..len].iter().chain(trailing.iter()).copied();
        for slot in self.slots.iter_mut() {
            *slot = contents.next();
        }
        self.head = 0;
        self.tail = len % capacity;
        self.len = len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn generator() -> PieceGenerator<impl KindSource> {
        PieceGenerator::new(|| PieceKind::I)
    }

    fn ids(queue: &NextQueue) -> Vec<u64> {
        queue.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            NextQueue::new(0),
            Err(SessionError::InvalidCapacity {
                what: "queue",
                value: 0
            })
        );
    }

    #[test]
    fn test_enqueue_until_full() {
        let mut gen = generator();
        let mut queue = NextQueue::new(3).unwrap();

        for _ in 0..3 {
            queue.enqueue(&mut gen).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(&mut gen), Err(SessionError::QueueFull));
        // A rejected enqueue must not consume an id.
        assert_eq!(gen.next_id(), 3);
        assert_eq!(ids(&queue), vec![0, 1, 2]);
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue = NextQueue::new(2).unwrap();
        assert_eq!(queue.dequeue(), Err(SessionError::QueueEmpty));
        assert!(!queue.front_is_available());
    }

    #[test]
    fn test_wraparound() {
        let mut gen = generator();
        let mut queue = NextQueue::new(3).unwrap();
        for _ in 0..3 {
            queue.enqueue(&mut gen).unwrap();
        }

        assert_eq!(queue.dequeue().unwrap().id, 0);
        assert_eq!(queue.dequeue().unwrap().id, 1);
        queue.enqueue(&mut gen).unwrap();
        queue.enqueue(&mut gen).unwrap();

        assert_eq!(queue.head(), 2);
        assert_eq!(queue.tail(), 2);
        assert_eq!(ids(&queue), vec![2, 3, 4]);
    }

    #[test]
    fn test_replace_front() {
        let mut gen = generator();
        let mut queue = NextQueue::new(2).unwrap();
        assert_eq!(
            queue.replace_front(Piece::new(PieceKind::O, 99)),
            Err(SessionError::QueueEmpty)
        );

        queue.enqueue(&mut gen).unwrap();
        queue.enqueue(&mut gen).unwrap();
        let old = queue.replace_front(Piece::new(PieceKind::O, 99)).unwrap();
        assert_eq!(old.id, 0);
        assert_eq!(ids(&queue), vec![99, 1]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_rearrange_counts_only_live() {
        let mut queue = NextQueue::new(5).unwrap();
        let live = [Piece::new(PieceKind::S, 10), Piece::new(PieceKind::Z, 11)];
        let trailing = [
            Piece::new(PieceKind::I, 1),
            Piece::new(PieceKind::O, 2),
            Piece::new(PieceKind::T, 3),
            Piece::new(PieceKind::L, 4),
        ];
        queue.rearrange(&live, &trailing);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.head(), 0);
        assert_eq!(queue.tail(), 2);
        assert_eq!(ids(&queue), vec![10, 11]);
        // The next enqueue overwrites the first trailing slot.
        assert_eq!(queue.slots[2].map(|p| p.id), Some(1));
        assert_eq!(queue.slots[4].map(|p| p.id), Some(3));
    }

    #[test]
    fn test_rearrange_empty() {
        let mut gen = generator();
        let mut queue = NextQueue::new(3).unwrap();
        queue.enqueue(&mut gen).unwrap();
        queue.rearrange(&[], &[]);
        assert!(queue.is_empty());
        assert_eq!(queue.tail(), 0);
        assert!(queue.slots.iter().all(Option::is_none));
    }
}
