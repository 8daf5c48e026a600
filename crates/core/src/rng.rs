//! RNG module - piece kind selection
//!
//! The engine never draws randomness on its own: every piece kind comes from
//! a [`KindSource`]. The default source is a small seeded LCG so sessions are
//! reproducible; tests plug in closures or fixed sequences instead.

use crate::types::PieceKind;

/// Supplies the kind of the next generated piece.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<F> KindSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with a short period; draw from the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of kinds. Handy for scripted sessions.
#[derive(Debug, Clone)]
pub struct KindCycle<'a> {
    kinds: &'a [PieceKind],
    next: usize,
}

impl<'a> KindCycle<'a> {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: &'a [PieceKind]) -> Self {
        assert!(!kinds.is_empty(), "kind cycle needs at least one kind");
        Self { kinds, next: 0 }
    }
}

impl KindSource for KindCycle<'_> {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
