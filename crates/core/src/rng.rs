//! RNG module - double-permutation piece generation
//!
//! Two shuffled permutations of the seven shapes are read alternately, one
//! element at a time: `a[0], b[0], a[1], b[1], ...`. Once both have been read
//! at the last index, both are reshuffled and reading restarts at index 0.
//! Every run of 7 draws taken from one permutation therefore contains each
//! shape exactly once, while the interleaving allows short repeats.
//!
//! Also provides a simple LCG so piece sequences are reproducible from a seed.

use crate::types::Shape;

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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Alternating double-permutation shape generator
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    permutations: [[Shape; 7]; 2],
    /// Index into both permutations
    cursor: usize,
    /// Which permutation the next draw reads (0 or 1)
    side: usize,
    rng: SimpleRng,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        let mut randomizer = Self {
            permutations: [Shape::ALL; 2],
            cursor: 0,
            side: 0,
            rng: SimpleRng::new(seed),
        };
        randomizer.reshuffle();
        randomizer
    }

    fn reshuffle(&mut self) {
        for perm in &mut self.permutations {
            *perm = Shape::ALL;
            self.rng.shuffle(perm);
        }
        self.cursor = 0;
        self.side = 0;
    }

    /// Draw the next shape
    pub fn next_shape(&mut self) -> Shape {
        let shape = self.permutations[self.side][self.cursor];
        if self.side == 0 {
            self.side = 1;
        } else {
            self.side = 0;
            self.cursor += 1;
            if self.cursor == Shape::ALL.len() {
                self.reshuffle();
            }
        }
        shape
    }

    /// The permutations currently being read (for tests and debugging)
    pub fn permutations(&self) -> &[[Shape; 7]; 2] {
        &self.permutations
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
