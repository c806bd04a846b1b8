//! This module contains the logic for solving Sudoku boards.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation.

use crate::SudokuBoard;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A trait for types which have the ability to fill the empty cells of a
/// [SudokuBoard]. The interface is deliberately narrow so that alternative
/// strategies, such as constraint propagation or exhaustive enumeration,
/// can be substituted without any changes to the board.
pub trait Solver {

    /// Attempts to fill every empty cell of the given board with a digit
    /// from 1 to 9 such that the board is legal. Cells that already contain
    /// a digit are kept as they are.
    ///
    /// Returns `true` if the board was completely filled, in which case
    /// [SudokuBoard::check_board] is guaranteed to hold afterwards. Returns
    /// `false` if no legal assignment exists for the given cells; in that
    /// case every cell written during the search has been reset, so the
    /// board is left as it was provided.
    fn solve(&mut self, board: &mut SudokuBoard) -> bool;
}

fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A [Solver] which fills boards by recursively testing candidate digits
/// for each empty cell in a uniformly random order, backtracking whenever
/// the board becomes illegal. This means two things:
///
/// * Its worst-case runtime is exponential in the number of empty cells,
/// though boards with a reasonable amount of clues are solved quickly.
/// * Repeated calls on the same starting board are not required to produce
/// the same solution. This non-determinism is intentional; it is what makes
/// the solver usable for generating fresh random boards.
///
/// The random number generator is injected at construction time, so tests
/// can supply a seeded generator and assert exact solver behavior. For most
/// cases, [BacktrackingSolver::new_default] provides a sensible instance.
#[derive(Clone)]
pub struct BacktrackingSolver<R: Rng> {
    rng: R
}

impl BacktrackingSolver<ThreadRng> {

    /// Creates a new backtracking solver that uses a [ThreadRng] to order
    /// the candidate digits.
    pub fn new_default() -> BacktrackingSolver<ThreadRng> {
        BacktrackingSolver::new(rand::thread_rng())
    }
}

impl<R: Rng> BacktrackingSolver<R> {

    /// Creates a new backtracking solver that uses the given random number
    /// generator to order the candidate digits.
    pub fn new(rng: R) -> BacktrackingSolver<R> {
        BacktrackingSolver {
            rng
        }
    }

    fn solve_rec(&mut self, board: &mut SudokuBoard, row: usize, col: usize)
            -> bool {
        if row == 9 {
            return true;
        }

        let next_col = (col + 1) % 9;
        let next_row = if next_col == 0 { row + 1 } else { row };

        if board.get(row, col) != 0 {
            return self.solve_rec(board, next_row, next_col);
        }

        for number in shuffle(&mut self.rng, 1..=9) {
            board.set(row, col, number).unwrap();

            if board.check_board()
                    && self.solve_rec(board, next_row, next_col) {
                return true;
            }

            board.set(row, col, 0).unwrap();
        }

        false
    }
}

impl<R: Rng> Solver for BacktrackingSolver<R> {
    fn solve(&mut self, board: &mut SudokuBoard) -> bool {
        self.solve_rec(board, 0, 0)
    }
}
