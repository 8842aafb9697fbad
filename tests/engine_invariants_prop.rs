//! Property tests for the engine: generated seeds, grid sizes and command
//! streams must never break the grid invariants.
//!
//! Invariants covered:
//! - While a piece is falling there are exactly 4 Active cells, and they are
//!   the current piece's coordinates.
//! - At most 4 cells are Highlighted.
//! - A lock adds 4 locked cells minus a full row per cleared row.
//! - Score and level never decrease; level stays capped; the fall interval
//!   never grows.
//! - After the round ends every command but `NewGame` is ignored.

use proptest::prelude::*;

use stacker::core::{EngineConfig, GameEngine, MoveOutcome, RoundState};
use stacker::types::{CellState, Command, Direction};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => Just(Command::Tick),
        2 => Just(Command::Move(Direction::Left)),
        2 => Just(Command::Move(Direction::Right)),
        2 => Just(Command::Move(Direction::Down)),
        1 => Just(Command::Move(Direction::Up)),
        2 => Just(Command::Rotate),
        1 => Just(Command::Drop),
    ]
}

fn count(engine: &GameEngine, state: CellState) -> usize {
    engine.grid().count(state)
}

proptest! {
    #[test]
    fn generated_command_streams_respect_invariants(
        seed in any::<u32>(),
        rows in 6usize..16,
        cols in 6usize..12,
        commands in prop::collection::vec(command_strategy(), 1..300),
    ) {
        let config = EngineConfig {
            ticks_per_level: 10,
            ..EngineConfig::with_size(rows, cols)
        };
        let mut engine = GameEngine::with_seed(config, seed);

        for command in commands {
            let score = engine.score();
            let level = engine.level();
            let interval = engine.fall_interval_ms();
            let locked = count(&engine, CellState::Inactive);
            let was_over = engine.is_game_over();

            let outcome = engine.apply(command);

            if was_over {
                prop_assert_eq!(outcome, MoveOutcome::Ignored);
                continue;
            }

            prop_assert!(engine.score() >= score);
            prop_assert!(engine.level() >= level);
            prop_assert!(engine.level() <= 15);
            prop_assert!(engine.fall_interval_ms() <= interval);
            prop_assert!(count(&engine, CellState::Highlighted) <= 4);

            if let MoveOutcome::Locked { rows_cleared } = outcome {
                let expected = locked + 4 - rows_cleared as usize * engine.cols();
                prop_assert_eq!(count(&engine, CellState::Inactive), expected);
            }

            if engine.round_state() == RoundState::PieceFalling {
                let piece = engine.current_piece().unwrap();
                prop_assert!(!piece.is_simulating());
                prop_assert_eq!(count(&engine, CellState::Active), 4);
                for (row, col) in piece.coords() {
                    prop_assert_eq!(engine.cell_state(row, col), CellState::Active);
                }
            }
        }
    }

    #[test]
    fn new_game_always_recovers(
        seed in any::<u32>(),
        drops in 1usize..60,
    ) {
        let mut engine = GameEngine::with_seed(EngineConfig::with_size(6, 6), seed);
        for _ in 0..drops {
            if engine.apply(Command::Drop) == MoveOutcome::Ignored {
                engine.tick();
            }
        }

        engine.new_game();
        prop_assert_eq!(engine.round_state(), RoundState::NoActivePiece);
        prop_assert_eq!(count(&engine, CellState::Empty), 36);
        prop_assert_eq!(engine.score(), 0);
        prop_assert_eq!(engine.tick(), MoveOutcome::Spawned);
    }
}
