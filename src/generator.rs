//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done in two steps: filling an empty board with a [Solver]
//! and then clearing random cells with
//! [SudokuBoard::remove_fields_with](crate::SudokuBoard::remove_fields_with)
//! until only the number of clues prescribed by a [Difficulty] remains. The
//! [Generator] drives both steps.

use crate::SudokuBoard;
use crate::error::{SudokuError, SudokuResult};
use crate::solver::{BacktrackingSolver, Solver};

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// An enumeration of the difficulty tiers a puzzle can be generated with.
/// Each tier fixes the number of cells that remain filled after generation;
/// a harder puzzle provides fewer clues. Note that the tier is a pure clue
/// count and *not* a measure of which solving techniques a puzzle requires.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Difficulty {

    /// An easy puzzle, providing 45 clues.
    Easy,

    /// A medium puzzle, providing 30 clues.
    Medium,

    /// A hard puzzle, providing 17 clues.
    Hard
}

impl Difficulty {

    /// Gets the number of cells that remain filled in a puzzle generated
    /// with this difficulty.
    pub fn cells_to_fill(self) -> usize {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 30,
            Difficulty::Hard => 17
        }
    }
}

/// A generator randomly generates Sudoku puzzles. It wraps a [Solver] that
/// fills an empty board and a random number generator that decides which
/// cells are cleared afterwards. For most cases, sensible defaults are
/// provided by [Generator::new_default].
pub struct Generator<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Generator<BacktrackingSolver<ThreadRng>, ThreadRng> {

    /// Creates a new generator that uses a
    /// [BacktrackingSolver](crate::solver::BacktrackingSolver) to fill
    /// boards and a [ThreadRng] to decide which cells are cleared.
    pub fn new_default()
            -> Generator<BacktrackingSolver<ThreadRng>, ThreadRng> {
        Generator::new(BacktrackingSolver::new_default(), rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Generator<S, R> {

    /// Creates a new generator that uses the given solver to fill boards
    /// and the given random number generator to decide which cells are
    /// cleared.
    pub fn new(solver: S, rng: R) -> Generator<S, R> {
        Generator {
            solver,
            rng
        }
    }

    /// Fills every empty cell of the given board such that the board is
    /// legal, keeping all already present digits.
    ///
    /// If no error is returned, it is guaranteed that
    /// [SudokuBoard::check_board] holds on `board` and the board is full
    /// after this operation. Otherwise, it remains unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If there is no set of digits that can be
    /// entered into the empty cells without violating the uniqueness rule,
    /// which can only happen if the present digits already conflict.
    pub fn fill(&mut self, board: &mut SudokuBoard) -> SudokuResult<()> {
        if self.solver.solve(board) {
            Ok(())
        }
        else {
            Err(SudokuError::Unsolvable)
        }
    }

    /// Generates a new random puzzle with the given difficulty. The board
    /// is first filled completely by the wrapped solver and then reduced to
    /// `difficulty.cells_to_fill()` clues by clearing uniformly random
    /// cells.
    ///
    /// It is guaranteed that [SudokuBoard::check_board] holds on the
    /// result. There is *no* guarantee that the puzzle has a unique
    /// solution.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If the wrapped solver fails to fill an
    /// empty board, which indicates a defective solver rather than an
    /// impossible puzzle.
    pub fn generate(&mut self, difficulty: Difficulty)
            -> SudokuResult<SudokuBoard> {
        let mut board = SudokuBoard::new();
        self.fill(&mut board)?;
        board.remove_fields_with(difficulty, &mut self.rng);
        Ok(board)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;

    use rand_chacha::ChaCha8Rng;

    fn seeded_generator(solver_seed: u64, removal_seed: u64)
            -> Generator<BacktrackingSolver<ChaCha8Rng>, ChaCha8Rng> {
        Generator::new(
            BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(solver_seed)),
            ChaCha8Rng::seed_from_u64(removal_seed))
    }

    #[test]
    fn difficulty_clue_counts() {
        assert_eq!(45, Difficulty::Easy.cells_to_fill());
        assert_eq!(30, Difficulty::Medium.cells_to_fill());
        assert_eq!(17, Difficulty::Hard.cells_to_fill());
    }

    #[test]
    fn difficulty_serialization_round_trip() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        let difficulty: Difficulty =
            serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(Difficulty::Medium, difficulty);
    }

    #[test]
    fn filled_board_keeps_clues() {
        let mut board = SudokuBoard::new();
        board.set(0, 1, 1).unwrap();
        board.set(0, 3, 3).unwrap();
        board.set(1, 0, 2).unwrap();
        board.set(2, 1, 4).unwrap();
        let mut generator = seeded_generator(3, 4);

        generator.fill(&mut board).unwrap();

        assert!(board.check_board());
        assert!(board.is_full());
        assert_eq!(1, board.get(0, 1));
        assert_eq!(3, board.get(0, 3));
        assert_eq!(2, board.get(1, 0));
        assert_eq!(4, board.get(2, 1));
    }

    #[test]
    fn unsolvable_board_is_not_changed() {
        let mut board = SudokuBoard::new();
        board.set(0, 1, 1).unwrap();
        board.set(4, 1, 1).unwrap();
        let before = board.clone();
        let mut generator = seeded_generator(3, 4);

        assert_eq!(Err(SudokuError::Unsolvable),
            generator.fill(&mut board));
        assert_eq!(before, board);
    }

    #[test]
    fn generated_puzzle_has_target_clue_count() {
        let mut generator = seeded_generator(5, 6);

        let easy = generator.generate(Difficulty::Easy).unwrap();
        let medium = generator.generate(Difficulty::Medium).unwrap();
        let hard = generator.generate(Difficulty::Hard).unwrap();

        assert_eq!(45, easy.count_clues());
        assert_eq!(30, medium.count_clues());
        assert_eq!(17, hard.count_clues());
    }

    #[test]
    fn generated_puzzle_is_valid() {
        let mut generator = seeded_generator(7, 8);
        let puzzle = generator.generate(Difficulty::Medium).unwrap();

        assert!(puzzle.check_board());
    }

    #[test]
    fn removal_only_clears_filled_cells() {
        let mut solution = SudokuBoard::new();
        let mut solver =
            BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(9));
        assert!(solver.solve(&mut solution));

        let mut puzzle = solution.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        puzzle.remove_fields_with(Difficulty::Medium, &mut rng);

        assert_eq!(30, puzzle.count_clues());

        for r in 0..9 {
            for c in 0..9 {
                let value = puzzle.get(r, c);

                // every remaining clue agrees with the solution it was
                // punched out of
                if value != 0 {
                    assert_eq!(solution.get(r, c), value);
                }
            }
        }
    }

    #[test]
    fn removal_with_thread_rng_hits_target() {
        let mut board = SudokuBoard::new();
        let mut generator = seeded_generator(11, 12);
        generator.fill(&mut board).unwrap();

        board.remove_fields(Difficulty::Easy);

        assert_eq!(45, board.count_clues());
        assert!(board.check_board());
    }
}
