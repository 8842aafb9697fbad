//! Lookahead queue of upcoming pieces
//!
//! The queue is an ordinary owned value: each engine holds its own, so no
//! piece sequence leaks from one session into another.

use std::collections::VecDeque;

use crate::rng::PieceRandomizer;
use crate::tetromino::Tetromino;
use crate::types::{Shape, DEFAULT_LOOKAHEAD};

/// Fixed-depth queue of pending pieces backed by a [`PieceRandomizer`]
#[derive(Debug, Clone)]
pub struct PieceQueue {
    randomizer: PieceRandomizer,
    pending: VecDeque<Tetromino>,
    depth: usize,
}

impl PieceQueue {
    /// Create a queue holding `depth` pieces (at least one)
    pub fn new(seed: u32, depth: usize) -> Self {
        Self::from_randomizer(PieceRandomizer::new(seed), depth)
    }

    pub fn from_randomizer(randomizer: PieceRandomizer, depth: usize) -> Self {
        let depth = depth.max(1);
        let mut queue = Self {
            randomizer,
            pending: VecDeque::with_capacity(depth + 1),
            depth,
        };
        queue.fill();
        queue
    }

    fn fill(&mut self) {
        while self.pending.len() < self.depth {
            let shape = self.randomizer.next_shape();
            self.pending.push_back(Tetromino::new(shape));
        }
    }

    /// Take the front piece and append a freshly drawn one
    ///
    /// Pieces come out at rotation 0; the engine only repositions them.
    pub fn next_piece(&mut self) -> Tetromino {
        let piece = match self.pending.pop_front() {
            Some(piece) => piece,
            None => Tetromino::new(self.randomizer.next_shape()),
        };
        self.fill();
        piece
    }

    /// Shape of the piece [`next_piece`](Self::next_piece) will return
    pub fn peek(&self) -> Option<Shape> {
        self.pending.front().map(Tetromino::shape)
    }

    /// Upcoming pieces, front first
    pub fn upcoming(&self) -> impl Iterator<Item = &Tetromino> + '_ {
        self.pending.iter()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Discard the pending pieces and draw new ones
    ///
    /// The randomizer keeps its stream, so a new session gets new pieces.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.fill();
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1, DEFAULT_LOOKAHEAD)
    }
}
