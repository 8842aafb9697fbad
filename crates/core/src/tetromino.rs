//! Tetromino module - a piece with a committed placement and an optional proposal
//!
//! Movement is tested before it is committed: `simulate_*` calls build up a
//! pending [`Placement`] (the proposal) while the committed placement stays
//! untouched. [`Tetromino::apply_simulation`] promotes the proposal,
//! [`Tetromino::reset_simulation`] throws it away. Any committing call drops
//! a pending proposal.

use crate::pieces::get_layout;
use crate::types::{Direction, Rgb, Rotation, Shape};

/// Anchor position and rotation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    pub row: i32,
    pub col: i32,
    pub rotation: Rotation,
}

impl Placement {
    pub fn new(row: i32, col: i32, rotation: Rotation) -> Self {
        Self { row, col, rotation }
    }

    /// This placement moved one cell toward `direction`
    pub fn shifted(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
            ..self
        }
    }

    /// This placement turned one step clockwise
    pub fn rotated(self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..self
        }
    }
}

/// A falling, queued or preview piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    shape: Shape,
    color: Rgb,
    committed: Placement,
    proposal: Option<Placement>,
}

impl Tetromino {
    /// Create a piece at `(0, 0)`, rotation 0, in the shape's own color
    pub fn new(shape: Shape) -> Self {
        Self::with_placement(shape, shape.color(), Placement::default())
    }

    pub fn with_placement(shape: Shape, color: Rgb, placement: Placement) -> Self {
        Self {
            shape,
            color,
            committed: placement,
            proposal: None,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// The proposal while simulating, otherwise the committed placement
    pub fn placement(&self) -> Placement {
        self.proposal.unwrap_or(self.committed)
    }

    pub fn committed(&self) -> Placement {
        self.committed
    }

    pub fn is_simulating(&self) -> bool {
        self.proposal.is_some()
    }

    pub fn row(&self) -> i32 {
        self.placement().row
    }

    pub fn col(&self) -> i32 {
        self.placement().col
    }

    pub fn rotation(&self) -> Rotation {
        self.placement().rotation
    }

    /// Absolute `(row, col)` of the four blocks at the current placement
    pub fn coords(&self) -> [(i32, i32); 4] {
        let p = self.placement();
        get_layout(self.shape, p.rotation).map(|(dr, dc)| (p.row + dr as i32, p.col + dc as i32))
    }

    /// Commit a one-cell move
    pub fn shift(&mut self, direction: Direction) {
        self.committed = self.committed.shifted(direction);
        self.proposal = None;
    }

    /// Commit a clockwise turn
    pub fn rotate(&mut self) {
        self.committed = self.committed.rotated();
        self.proposal = None;
    }

    /// Commit an anchor position, keeping the rotation
    pub fn set_position(&mut self, row: i32, col: i32) {
        self.committed.row = row;
        self.committed.col = col;
        self.proposal = None;
    }

    /// Move the proposal one cell, starting it from the committed placement
    /// if none is pending
    pub fn simulate_shift(&mut self, direction: Direction) {
        let base = self.placement();
        self.proposal = Some(base.shifted(direction));
    }

    /// Turn the proposal clockwise, starting it from the committed placement
    /// if none is pending
    pub fn simulate_rotate(&mut self) {
        let base = self.placement();
        self.proposal = Some(base.rotated());
    }

    pub fn reset_simulation(&mut self) {
        self.proposal = None;
    }

    pub fn apply_simulation(&mut self) {
        if let Some(p) = self.proposal.take() {
            self.committed = p;
        }
    }

    /// A fresh piece of the same shape and color at the current placement
    pub fn detached_copy(&self) -> Self {
        Self::with_placement(self.shape, self.color, self.placement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetromino_new() {
        let piece = Tetromino::new(Shape::T);

        assert_eq!(piece.shape(), Shape::T);
        assert_eq!(piece.color(), Shape::T.color());
        assert_eq!(piece.rotation(), Rotation::North);
        assert_eq!((piece.row(), piece.col()), (0, 0));
        assert!(!piece.is_simulating());
    }

    #[test]
    fn test_coords_follow_anchor() {
        let mut piece = Tetromino::new(Shape::O);
        piece.set_position(3, 4);
        assert_eq!(piece.coords(), [(3, 4), (3, 5), (4, 4), (4, 5)]);
    }

    #[test]
    fn test_simulation_accumulates_without_touching_commit() {
        let mut piece = Tetromino::new(Shape::T);
        piece.set_position(5, 5);

        piece.simulate_shift(Direction::Left);
        piece.simulate_shift(Direction::Left);
        piece.simulate_rotate();

        assert!(piece.is_simulating());
        assert_eq!(piece.placement(), Placement::new(5, 3, Rotation::East));
        assert_eq!(piece.committed(), Placement::new(5, 5, Rotation::North));
    }

    #[test]
    fn test_apply_simulation_commits() {
        let mut piece = Tetromino::new(Shape::J);
        piece.simulate_shift(Direction::Down);
        piece.simulate_rotate();
        piece.apply_simulation();

        assert!(!piece.is_simulating());
        assert_eq!(piece.committed(), Placement::new(1, 0, Rotation::East));
    }

    #[test]
    fn test_commit_discards_pending_proposal() {
        let mut piece = Tetromino::new(Shape::L);
        piece.simulate_shift(Direction::Right);
        piece.shift(Direction::Down);

        assert!(!piece.is_simulating());
        assert_eq!(piece.placement(), Placement::new(1, 0, Rotation::North));

        piece.simulate_rotate();
        piece.rotate();
        assert_eq!(piece.placement(), Placement::new(1, 0, Rotation::East));
    }

    #[test]
    fn test_rotation_wraps_after_four_turns() {
        let mut piece = Tetromino::new(Shape::S);
        let start = piece.coords();
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece.coords(), start);
    }

    #[test]
    fn test_detached_copy_drops_proposal_state() {
        let mut piece = Tetromino::new(Shape::Z);
        piece.simulate_shift(Direction::Down);
        let copy = piece.detached_copy();
        assert!(!copy.is_simulating());
        assert_eq!(copy.committed(), piece.placement());
    }
}
