//! Grid tests - cell state model and row clearing

use stacker::core::{score_for_cleared_rows, Cell, Grid, ScoreMultiplier};
use stacker::types::{CellState, EngineError, Rgb};

fn shade(row: usize) -> Rgb {
    Rgb::new(10 * row as u8, 0, 0)
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(20, 10);
    assert_eq!(grid.rows(), 20);
    assert_eq!(grid.cols(), 10);

    for row in 0..20 {
        for col in 0..10 {
            assert!(grid.is_empty(row, col), "cell ({}, {}) should be empty", row, col);
            assert_eq!(grid.color(row, col), None);
        }
    }
}

#[test]
fn test_checked_access_out_of_bounds() {
    let grid = Grid::new(6, 6);
    assert_eq!(
        grid.cell(-1, 0),
        Err(EngineError::OutOfBounds {
            row: -1,
            col: 0,
            rows: 6,
            cols: 6
        })
    );
    assert!(grid.cell(0, 6).is_err());
    assert!(grid.cell(6, 0).is_err());
    assert_eq!(grid.cell(5, 5), Ok(Cell::Empty));
}

#[test]
fn test_is_blocked_covers_walls_and_stack() {
    let mut grid = Grid::new(6, 6);
    grid.set_inactive(3, 3, shade(1));
    grid.set_active(2, 2, shade(1));

    assert!(grid.is_blocked(-1, 0));
    assert!(grid.is_blocked(0, 6));
    assert!(grid.is_blocked(3, 3));
    assert!(!grid.is_blocked(2, 2));
    assert!(!grid.is_blocked(0, 0));
}

#[test]
fn test_row_is_full_needs_every_cell_locked() {
    let mut grid = Grid::new(6, 6);
    for col in 0..5 {
        grid.set_inactive(5, col, shade(5));
    }
    assert!(!grid.row_is_full(5));

    grid.set_active(5, 5, shade(5));
    assert!(!grid.row_is_full(5));

    grid.set_inactive(5, 5, shade(5));
    assert!(grid.row_is_full(5));
    assert!(!grid.row_is_full(99));
}

#[test]
fn test_clear_rows_two_and_five() {
    let mut grid = Grid::new(8, 6);
    for row in 0..8 {
        if row == 2 || row == 5 {
            for col in 0..6 {
                grid.set_inactive(row as i32, col, shade(row));
            }
        } else {
            // One locked cell per row, tagged with its original row.
            grid.set_inactive(row as i32, (row % 6) as i32, shade(row));
        }
    }

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared, 2);
    assert_eq!(score_for_cleared_rows(cleared, 3, ScoreMultiplier::Level), 300);

    // Rows above row 2 moved by two, rows between 2 and 5 by one.
    let expected_origin = [None, None, Some(0), Some(1), Some(3), Some(4), Some(6), Some(7)];
    for (row, origin) in expected_origin.iter().enumerate() {
        let locked: Vec<(i32, Rgb)> = (0..6)
            .filter_map(|col| match grid.cell(row as i32, col) {
                Ok(Cell::Inactive(color)) => Some((col, color)),
                _ => None,
            })
            .collect();
        match origin {
            None => assert!(locked.is_empty(), "row {} should be empty", row),
            Some(orig) => assert_eq!(locked, vec![((orig % 6) as i32, shade(*orig))]),
        }
    }
    assert_eq!(grid.count(CellState::Inactive), 6);
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut grid = Grid::new(6, 6);
    for row in 3..6 {
        for col in 0..6 {
            grid.set_inactive(row, col, shade(row as usize));
        }
    }
    grid.set_inactive(2, 0, shade(2));

    assert_eq!(grid.clear_full_rows(), 3);
    assert!(grid.is_inactive(5, 0));
    assert_eq!(grid.count(CellState::Inactive), 1);
}

#[test]
fn test_clear_all() {
    let mut grid = Grid::new(6, 6);
    grid.set_inactive(0, 0, shade(0));
    grid.set_highlighted(1, 1, shade(1));
    grid.clear_all();
    assert_eq!(grid.count(CellState::Empty), 36);
}
