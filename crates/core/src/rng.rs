//! RNG module - uniform random piece generation
//!
//! Every generated piece draws its kind uniformly from the seven letters and
//! takes the next value of a monotonic id counter. The random source is
//! injectable through [`KindSource`], so a fixed seed (or a scripted source)
//! reproduces a session exactly.
//!
//! Also provides a simple LCG for deterministic play and testing.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{Piece, PieceKind};

/// Anything that can pick the kind of the next piece
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of a power-of-two LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current RNG state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        let index = self.next_range(PieceKind::COUNT as u32) as usize;
        PieceKind::ALL[index]
    }
}

impl<F> KindSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

/// Seed derived from the wall clock, so separate runs differ
pub fn time_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the 128-bit nanosecond count down to 32 bits.
    (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32
}

/// Piece generator: random kind plus a never-reused sequence id
#[derive(Debug, Clone)]
pub struct PieceGenerator<S = SimpleRng> {
    source: S,
    next_id: u64,
}

impl PieceGenerator<SimpleRng> {
    /// Create a generator backed by [`SimpleRng`]
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<S: KindSource> PieceGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source, next_id: 0 }
    }

    /// Create the next piece. Never fails; the id counter only moves forward.
    ///
    /// Ids are 64-bit and are never wrapped back to zero.
    pub fn generate(&mut self) -> Piece {
        let kind = self.source.next_kind();
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Id the next generated piece will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
