//! Tetromino tests - layouts and simulate-then-commit behavior

use std::collections::HashSet;

use stacker::core::{get_layout, Placement, Tetromino};
use stacker::types::{Direction, Rotation, Shape};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

fn piece_at(shape: Shape, rotation: Rotation) -> Tetromino {
    Tetromino::with_placement(shape, shape.color(), Placement::new(5, 5, rotation))
}

#[test]
fn test_every_layout_has_four_distinct_cells() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            let cells: HashSet<(i32, i32)> =
                piece_at(shape, rotation).coords().into_iter().collect();
            assert_eq!(cells.len(), 4, "{:?} {:?}", shape, rotation);
        }
    }
}

#[test]
fn test_known_layouts() {
    assert_eq!(
        get_layout(Shape::I, Rotation::East),
        [(-1, 1), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        get_layout(Shape::T, Rotation::North),
        [(0, -1), (0, 0), (0, 1), (1, 0)]
    );
    assert_eq!(
        get_layout(Shape::Z, Rotation::West),
        [(1, -1), (0, -1), (0, 0), (-1, 0)]
    );
}

#[test]
fn test_simulate_then_reset_round_trip() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            for direction in Direction::ALL {
                let mut piece = piece_at(shape, rotation);
                let before = (piece.committed(), piece.coords());

                piece.simulate_shift(direction);
                assert!(piece.is_simulating());
                assert_ne!(piece.coords(), before.1);
                piece.reset_simulation();

                assert!(!piece.is_simulating());
                assert_eq!((piece.committed(), piece.coords()), before);
            }

            let mut piece = piece_at(shape, rotation);
            let before = (piece.committed(), piece.coords());
            piece.simulate_rotate();
            piece.reset_simulation();
            assert_eq!((piece.committed(), piece.coords()), before);
        }
    }
}

#[test]
fn test_simulated_shift_matches_committed_shift() {
    for shape in Shape::ALL {
        for direction in Direction::ALL {
            let mut simulated = piece_at(shape, Rotation::South);
            simulated.simulate_shift(direction);
            simulated.apply_simulation();

            let mut committed = piece_at(shape, Rotation::South);
            committed.shift(direction);

            assert_eq!(simulated, committed);
        }
    }
}

#[test]
fn test_shift_is_unit_translation() {
    let mut piece = piece_at(Shape::L, Rotation::West);
    let before = piece.coords();
    piece.shift(Direction::Up);
    for (b, a) in before.iter().zip(piece.coords().iter()) {
        assert_eq!((b.0 - 1, b.1), *a);
    }
}
