//! Pieces module - tetromino layouts
//!
//! Each shape has four layouts, one per clockwise rotation. A layout lists
//! the `(row, col)` offsets of the four blocks relative to the piece anchor.
//! The anchor sits inside the piece (it is always one of the blocks except
//! for some I rotations), so offsets range over `-1..=2`.
//!
//! This table is the only geometry source: committed positions, simulated
//! positions and the landing preview all read it through [`get_layout`].

use crate::types::{Rotation, Shape};

/// Offset of a single block relative to the piece anchor, as `(row, col)`
pub type BlockOffset = (i8, i8);

/// The four block offsets of one layout
pub type PieceLayout = [BlockOffset; 4];

/// Get the layout for a shape and rotation
pub fn get_layout(shape: Shape, rotation: Rotation) -> PieceLayout {
    match shape {
        Shape::I => I_LAYOUTS[rotation.index()],
        Shape::J => J_LAYOUTS[rotation.index()],
        Shape::L => L_LAYOUTS[rotation.index()],
        Shape::O => O_LAYOUT,
        Shape::S => S_LAYOUTS[rotation.index()],
        Shape::T => T_LAYOUTS[rotation.index()],
        Shape::Z => Z_LAYOUTS[rotation.index()],
    }
}

const I_LAYOUTS: [PieceLayout; 4] = [
    // horizontal, anchor second from the left
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // vertical, one column right of the anchor
    [(-1, 1), (0, 1), (1, 1), (2, 1)],
    // horizontal, one row below the anchor
    [(1, -1), (1, 0), (1, 1), (1, 2)],
    // vertical through the anchor
    [(2, 0), (1, 0), (0, 0), (-1, 0)],
];

const J_LAYOUTS: [PieceLayout; 4] = [
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    [(1, 1), (0, 1), (0, 0), (0, -1)],
    [(1, -1), (1, 0), (0, 0), (-1, 0)],
];

const L_LAYOUTS: [PieceLayout; 4] = [
    [(0, -1), (0, 0), (0, 1), (-1, 1)],
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    [(0, 1), (0, 0), (0, -1), (1, -1)],
    [(1, 0), (0, 0), (-1, 0), (-1, -1)],
];

/// O piece layout (same for all rotations)
const O_LAYOUT: PieceLayout = [(0, 0), (0, 1), (1, 0), (1, 1)];

const S_LAYOUTS: [PieceLayout; 4] = [
    [(-1, 1), (-1, 0), (0, 0), (0, -1)],
    [(1, 1), (0, 1), (0, 0), (-1, 0)],
    [(1, -1), (1, 0), (0, 0), (0, 1)],
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
];

const T_LAYOUTS: [PieceLayout; 4] = [
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    [(-1, 0), (0, 0), (0, -1), (1, 0)],
    [(0, 1), (0, 0), (-1, 0), (0, -1)],
    [(1, 0), (0, 0), (0, 1), (-1, 0)],
];

const Z_LAYOUTS: [PieceLayout; 4] = [
    [(-1, -1), (-1, 0), (0, 0), (0, 1)],
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    [(1, 1), (1, 0), (0, 0), (0, -1)],
    [(1, -1), (0, -1), (0, 0), (-1, 0)],
];

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_every_layout_has_four_distinct_blocks() {
        for shape in Shape::ALL {
            for rotation in ROTATIONS {
                let layout = get_layout(shape, rotation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(layout[i], layout[j], "{shape:?} {rotation:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_offsets_stay_near_anchor() {
        for shape in Shape::ALL {
            for rotation in ROTATIONS {
                for (dr, dc) in get_layout(shape, rotation) {
                    assert!((-1..=2).contains(&dr));
                    assert!((-1..=2).contains(&dc));
                }
            }
        }
    }

    #[test]
    fn test_o_layout_ignores_rotation() {
        let north = get_layout(Shape::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(get_layout(Shape::O, rotation), north);
        }
    }

    #[test]
    fn test_other_shapes_have_four_distinct_layouts() {
        for shape in Shape::ALL.into_iter().filter(|s| *s != Shape::O) {
            let mut sorted: Vec<Vec<BlockOffset>> = ROTATIONS
                .iter()
                .map(|r| {
                    let mut l = get_layout(shape, *r).to_vec();
                    l.sort();
                    l
                })
                .collect();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 4, "{shape:?}");
        }
    }
}
