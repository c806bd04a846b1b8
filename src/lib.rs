// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku boards
//! * Checking validity of boards and individual moves according to standard
//! rules
//! * Solving boards using a randomized backtracking algorithm behind a
//! pluggable solver interface
//! * Generating playable puzzles of a configurable
//! [Difficulty](generator::Difficulty)
//!
//! # Parsing and printing boards
//!
//! See [SudokuBoard::parse] for the exact format of a board code.
//!
//! Codes can be used to exchange boards, while pretty prints can be used to
//! display a board in a clearer manner. An example of how to parse and
//! display a board is provided below.
//!
//! ```
//! use sudoku_board::SudokuBoard;
//!
//! let board = SudokuBoard::parse("\
//!     2, , , , , , , , ,\
//!      , ,3, , , , , , ,\
//!      , , , , , ,1, , ,\
//!      , , , , , , , , ,\
//!      , ,7, , , , , , ,\
//!      , , , , ,4, , , ,\
//!      , , , , , , , , ,\
//!      ,5, , , , , , , ,\
//!      , , , , , , , ,9").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Checking validity of boards and moves
//!
//! A board is legal if no row, column, or 3x3 box contains a repeated
//! nonzero digit. [SudokuBoard::check_board] checks the entire board.
//!
//! ```
//! use sudoku_board::SudokuBoard;
//!
//! let mut board = SudokuBoard::new();
//! board.set(0, 0, 5).unwrap();
//! board.set(0, 8, 5).unwrap();
//! assert!(!board.check_board());
//! ```
//!
//! If you are developing an app that gives feedback to the user, it may be
//! desirable to check a potential move before committing it. This is done
//! with [SudokuBoard::is_valid_move], which leaves the board unchanged.
//! Alternatively, [SudokuBoard::set_final] commits a value only if the
//! board remains legal and restores the previous value otherwise.
//!
//! ```
//! use sudoku_board::SudokuBoard;
//!
//! let mut board = SudokuBoard::new();
//! board.set(0, 0, 5).unwrap();
//!
//! assert!(!board.is_valid_move(0, 8, 5));
//! assert!(board.is_valid_move(0, 8, 6));
//! assert_eq!(0, board.get(0, 8));
//! ```
//!
//! # Solving boards
//!
//! This crate offers a [Solver](solver::Solver) trait for types that can
//! fill the empty cells of a board. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which
//! fills the first empty cell with digits in a uniformly random order and
//! backtracks whenever the board becomes illegal. A [Sudoku] pairs a board
//! with the solver strategy used to fill it.
//!
//! ```
//! use sudoku_board::Sudoku;
//! use sudoku_board::solver::BacktrackingSolver;
//!
//! let mut sudoku = Sudoku::new(BacktrackingSolver::new_default());
//!
//! assert!(sudoku.solve());
//! assert!(sudoku.board().check_board());
//! assert!(sudoku.board().is_full());
//! ```
//!
//! # Generating puzzles
//!
//! Generation is done in two steps: filling an empty board with a solver
//! and then clearing random cells until only the number of clues prescribed
//! by the chosen [Difficulty](generator::Difficulty) remains. The
//! [Generator](generator::Generator) drives both steps.
//!
//! ```
//! use sudoku_board::generator::{Difficulty, Generator};
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(Difficulty::Easy).unwrap();
//!
//! assert!(puzzle.check_board());
//! assert_eq!(45, puzzle.count_clues());
//! ```
//!
//! Note that clue removal is a pure cardinality reduction: there is no
//! guarantee that the generated puzzle has a unique solution.

pub mod error;
pub mod generator;
pub mod solver;

use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::generator::Difficulty;
use crate::solver::Solver;

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A single cell of a Sudoku board, holding a digit in the range `[0, 9]`,
/// where 0 denotes an empty cell. Cells are owned exclusively by the
/// board's storage and have no knowledge of their grid context - range
/// checking is the only validation they perform.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SudokuCell {
    value: usize
}

impl SudokuCell {

    /// Creates a new cell holding the given value.
    ///
    /// # Errors
    ///
    /// If `value` is greater than 9. In that case,
    /// `SudokuError::InvalidValue` is returned.
    pub fn new(value: usize) -> SudokuResult<SudokuCell> {
        let mut cell = SudokuCell::default();
        cell.set_value(value)?;
        Ok(cell)
    }

    /// Gets the value currently held by this cell. 0 denotes an empty cell.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Sets the value held by this cell. 0 clears the cell.
    ///
    /// # Errors
    ///
    /// If `value` is greater than 9. In that case,
    /// `SudokuError::InvalidValue` is returned and the previous value is
    /// retained.
    pub fn set_value(&mut self, value: usize) -> SudokuResult<()> {
        if value > 9 {
            return Err(SudokuError::InvalidValue);
        }

        self.value = value;
        Ok(())
    }

    /// Indicates whether this cell is empty, i.e. holds the value 0.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// An ordered view of nine cell coordinates in the form `(row, column)`,
/// denoting one row, one column, or one 3x3 box of a [SudokuBoard]. A group
/// never copies cell contents; all accessors dereference into the storage
/// of the board they are given, so a write made through any view is visible
/// through every other view of the same board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SudokuGroup {
    cells: [(usize, usize); 9]
}

impl SudokuGroup {

    /// Gets the coordinates of the cells covered by this group, in the form
    /// `(row, column)`.
    pub fn cells(&self) -> &[(usize, usize); 9] {
        &self.cells
    }

    /// Gets the value of the cell at the given position within this group.
    /// `index` must be in the range `[0, 8]`; this is a caller contract and
    /// violating it panics.
    pub fn cell_value(&self, board: &SudokuBoard, index: usize) -> usize {
        let (row, col) = self.cells[index];
        board.get(row, col)
    }

    /// Sets the value of the cell at the given position within this group.
    /// `index` must be in the range `[0, 8]`; this is a caller contract and
    /// violating it panics.
    ///
    /// # Errors
    ///
    /// If `value` is greater than 9. In that case,
    /// `SudokuError::InvalidValue` is returned and the cell is unchanged.
    pub fn set_cell_value(&self, board: &mut SudokuBoard, index: usize,
            value: usize) -> SudokuResult<()> {
        let (row, col) = self.cells[index];
        board.set(row, col, value)
    }

    /// Indicates whether the cells covered by this group satisfy the
    /// uniqueness rule, that is, no digit from 1 to 9 occurs more than once
    /// among them. Empty cells are excluded from the count, so any number
    /// of empty cells is always permitted.
    pub fn verify(&self, board: &SudokuBoard) -> bool {
        let mut counts = [0u32; 10];

        for &(row, col) in self.cells.iter() {
            counts[board.get(row, col)] += 1;
        }

        counts[1..].iter().all(|&count| count <= 1)
    }
}

pub(crate) fn index(row: usize, col: usize) -> usize {
    debug_assert!(row < 9 && col < 9);
    row * 9 + col
}

fn initialize_cells() -> Vec<SudokuCell> {
    vec![SudokuCell::default(); 81]
}

fn initialize_rows() -> Vec<SudokuGroup> {
    let mut rows = Vec::with_capacity(9);

    for r in 0..9 {
        let mut cells = [(0, 0); 9];

        for c in 0..9 {
            cells[c] = (r, c);
        }

        rows.push(SudokuGroup { cells });
    }

    rows
}

fn initialize_columns() -> Vec<SudokuGroup> {
    let mut columns = Vec::with_capacity(9);

    for c in 0..9 {
        let mut cells = [(0, 0); 9];

        for r in 0..9 {
            cells[r] = (r, c);
        }

        columns.push(SudokuGroup { cells });
    }

    columns
}

fn initialize_boxes() -> Vec<SudokuGroup> {
    let mut boxes_cells = [[(0, 0); 9]; 9];

    for r in 0..9 {
        for c in 0..9 {
            let box_number = r / 3 * 3 + c / 3;
            let in_box_pos = r % 3 * 3 + c % 3;
            boxes_cells[box_number][in_box_pos] = (r, c);
        }
    }

    boxes_cells.iter()
        .map(|&cells| SudokuGroup { cells })
        .collect()
}

/// A classic 9x9 Sudoku board. It owns a flat arena of 81 [SudokuCell]s,
/// indexed by `row * 9 + col`, together with nine row views, nine column
/// views, and nine box views ([SudokuGroup]s) that are built once at
/// construction time. Every cell belongs to exactly one row, one column,
/// and one box.
///
/// Cloning a board deep-copies all 81 cell values. Since groups are
/// coordinate views rather than aliases of storage, the clone's views
/// dereference into the clone's own arena and the two boards are fully
/// independent.
///
/// A board serializes as the flat sequence of its 81 cell values, which is
/// sufficient for an external serializer to capture and restore the full
/// contents.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct SudokuBoard {
    cells: Vec<SudokuCell>,
    rows: Vec<SudokuGroup>,
    columns: Vec<SudokuGroup>,
    boxes: Vec<SudokuGroup>
}

fn to_char(cell: &SudokuCell) -> char {
    if cell.is_empty() {
        ' '
    }
    else {
        (b'0' + cell.value() as u8) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..9 {
        if x == 0 {
            result.push(start);
        }
        else if x % 3 == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &SudokuBoard, r: usize) -> String {
    line('║', '║', '│', |c| to_char(&board.cells[index(r, c)]), ' ', '║',
        true)
}

impl Display for SudokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for r in 0..9 {
            if r == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if r % 3 == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, r).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &SudokuCell) -> String {
    if cell.is_empty() {
        String::from("")
    }
    else {
        cell.value().to_string()
    }
}

impl SudokuBoard {

    /// Creates a new board with all 81 cells empty. The row, column, and
    /// box views are built here and never rebuilt.
    pub fn new() -> SudokuBoard {
        SudokuBoard {
            cells: initialize_cells(),
            rows: initialize_rows(),
            columns: initialize_columns(),
            boxes: initialize_boxes()
        }
    }

    /// Parses a code encoding a board. The code is a comma-separated list
    /// of 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuBoard> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != 81 {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut board = SudokuBoard::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let value = entry.parse::<usize>()?;

            if value == 0 || value > 9 {
                return Err(SudokuParseError::InvalidNumber);
            }

            board.cells[i].set_value(value).unwrap();
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [SudokuBoard::parse]. That is, a board that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_board::SudokuBoard;
    ///
    /// let mut board = SudokuBoard::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set(1, 1, 4).unwrap();
    /// board.set(2, 1, 5).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = SudokuBoard::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the value of the cell in the given row and column. 0 denotes
    /// an empty cell. `row` and `col` must be in the range `[0, 8]`; this
    /// is a caller contract and violating it panics.
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.cells[index(row, col)].value()
    }

    /// Sets the value of the cell in the given row and column. 0 clears the
    /// cell. This is an unconditional write: the range check is delegated
    /// to the cell and no grid-legality check is performed. `row` and `col`
    /// must be in the range `[0, 8]`; this is a caller contract and
    /// violating it panics.
    ///
    /// # Errors
    ///
    /// If `value` is greater than 9. In that case,
    /// `SudokuError::InvalidValue` is returned and the cell is unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: usize)
            -> SudokuResult<()> {
        self.cells[index(row, col)].set_value(value)
    }

    /// Sets the value of the cell in the given row and column and enforces
    /// that the board remains legal. If the write makes the board illegal,
    /// the previous value is restored, leaving the board exactly as before
    /// the call. This is the only mutator that enforces legality as a
    /// postcondition.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidValue` If `value` is greater than 9.
    /// * `SudokuError::IllegalMove` If the board fails
    /// [SudokuBoard::check_board] after the write. The board is guaranteed
    /// to be restored to its pre-call state.
    pub fn set_final(&mut self, row: usize, col: usize, value: usize)
            -> SudokuResult<()> {
        let previous = self.get(row, col);

        self.set(row, col, value)?;

        if !self.check_board() {
            self.set(row, col, previous).unwrap();
            return Err(SudokuError::IllegalMove);
        }

        Ok(())
    }

    /// Indicates whether writing the given value into the cell in the given
    /// row and column would leave the board legal. Clearing a cell
    /// (`value == 0`) is always a valid move, and a value greater than 9 is
    /// never one. The check is performed by speculatively writing the value
    /// and evaluating [SudokuBoard::check_board]; the previous value is
    /// unconditionally restored, so the board is unchanged from the
    /// caller's perspective.
    pub fn is_valid_move(&mut self, row: usize, col: usize, value: usize)
            -> bool {
        if value == 0 {
            return true;
        }

        let previous = self.get(row, col);

        if self.set(row, col, value).is_err() {
            return false;
        }

        let valid = self.check_board();
        self.set(row, col, previous).unwrap();
        valid
    }

    /// Indicates whether the board is currently legal, that is, all nine
    /// rows, all nine columns, and all nine boxes independently satisfy the
    /// uniqueness rule (see [SudokuGroup::verify]). This is the single
    /// source of truth for grid legality.
    pub fn check_board(&self) -> bool {
        for i in 0..9 {
            if !self.rows[i].verify(self) || !self.columns[i].verify(self)
                    || !self.boxes[i].verify(self) {
                return false;
            }
        }

        true
    }

    /// Gets the group covering the row with the given index.
    ///
    /// # Errors
    ///
    /// If `row` is not in the range `[0, 8]`. In that case,
    /// `SudokuError::IndexOutOfRange` is returned.
    pub fn get_row(&self, row: usize) -> SudokuResult<SudokuGroup> {
        if row < 9 {
            Ok(self.rows[row])
        }
        else {
            Err(SudokuError::IndexOutOfRange)
        }
    }

    /// Gets the group covering the column with the given index.
    ///
    /// # Errors
    ///
    /// If `col` is not in the range `[0, 8]`. In that case,
    /// `SudokuError::IndexOutOfRange` is returned.
    pub fn get_column(&self, col: usize) -> SudokuResult<SudokuGroup> {
        if col < 9 {
            Ok(self.columns[col])
        }
        else {
            Err(SudokuError::IndexOutOfRange)
        }
    }

    /// Gets the group covering the 3x3 box that contains the cell in the
    /// given row and column. The box index is derived as
    /// `(row / 3) * 3 + col / 3`, so all nine cells of a box yield the same
    /// group.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not in the range `[0, 8]`. In that case,
    /// `SudokuError::IndexOutOfRange` is returned.
    pub fn get_box(&self, row: usize, col: usize)
            -> SudokuResult<SudokuGroup> {
        if row < 9 && col < 9 {
            Ok(self.boxes[row / 3 * 3 + col / 3])
        }
        else {
            Err(SudokuError::IndexOutOfRange)
        }
    }

    /// Counts the number of clues given by this board, that is, the number
    /// of non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Indicates whether this board is full, i.e. every cell holds a digit
    /// from 1 to 9. In this case, [SudokuBoard::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indicates whether this board is empty, i.e. no cell holds a digit.
    /// In this case, [SudokuBoard::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Clears randomly chosen cells of a fully solved board until only the
    /// number of clues prescribed by the given difficulty remains, using
    /// `rand::thread_rng()` to pick the cells. See
    /// [SudokuBoard::remove_fields_with] for details.
    pub fn remove_fields(&mut self, difficulty: Difficulty) {
        self.remove_fields_with(difficulty, &mut rand::thread_rng())
    }

    /// Clears randomly chosen cells of a fully solved board until only the
    /// number of clues prescribed by the given difficulty remains. Each
    /// cleared cell is drawn uniformly at random; draws that hit an already
    /// empty cell are rejected and re-drawn, so exactly
    /// `81 - difficulty.cells_to_fill()` distinct cells are cleared.
    ///
    /// This is a pure cardinality reduction: no check is performed that the
    /// resulting puzzle has a unique solution or is solvable without brute
    /// force. The board is expected to be fully filled when calling this
    /// method; otherwise the required number of non-empty cells may not
    /// exist and this method will not terminate.
    pub fn remove_fields_with<R: Rng>(&mut self, difficulty: Difficulty,
            rng: &mut R) {
        let cells_to_remove = 81 - difficulty.cells_to_fill();

        for _ in 0..cells_to_remove {
            let mut row = rng.gen_range(0..9);
            let mut col = rng.gen_range(0..9);

            while self.get(row, col) == 0 {
                row = rng.gen_range(0..9);
                col = rng.gen_range(0..9);
            }

            self.set(row, col, 0).unwrap();
        }
    }
}

impl Default for SudokuBoard {
    fn default() -> SudokuBoard {
        SudokuBoard::new()
    }
}

impl From<SudokuBoard> for Vec<usize> {
    fn from(board: SudokuBoard) -> Vec<usize> {
        board.cells.iter()
            .map(|cell| cell.value())
            .collect()
    }
}

impl TryFrom<Vec<usize>> for SudokuBoard {
    type Error = SudokuParseError;

    fn try_from(values: Vec<usize>) -> Result<SudokuBoard, SudokuParseError> {
        if values.len() != 81 {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut board = SudokuBoard::new();

        for (i, &value) in values.iter().enumerate() {
            if value > 9 {
                return Err(SudokuParseError::InvalidNumber);
            }

            board.cells[i].set_value(value).unwrap();
        }

        Ok(board)
    }
}

/// A Sudoku pairs a [SudokuBoard] with the [Solver] strategy attached to
/// it. The solver is only consulted by the [Sudoku::solve] convenience
/// method; all other operations go through the board directly.
#[derive(Clone)]
pub struct Sudoku<S: Solver> {
    board: SudokuBoard,
    solver: S
}

impl<S: Solver> Sudoku<S> {

    /// Creates a new Sudoku with an empty board and the given solver
    /// strategy attached.
    pub fn new(solver: S) -> Sudoku<S> {
        Sudoku {
            board: SudokuBoard::new(),
            solver
        }
    }

    /// Creates a new Sudoku from a given board, which may already contain
    /// some clues, and the given solver strategy. Note that it is *not*
    /// checked whether the board is legal - it is perfectly possible to
    /// wrap an illegal board here.
    pub fn new_with_board(board: SudokuBoard, solver: S) -> Sudoku<S> {
        Sudoku {
            board,
            solver
        }
    }

    /// Gets a reference to the board of this Sudoku.
    pub fn board(&self) -> &SudokuBoard {
        &self.board
    }

    /// Gets a mutable reference to the board of this Sudoku.
    pub fn board_mut(&mut self) -> &mut SudokuBoard {
        &mut self.board
    }

    /// Gets a reference to the solver strategy attached to this Sudoku.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Fills the empty cells of the board by delegating to the attached
    /// solver strategy. Returns `true` if the solver succeeded, in which
    /// case the board is full and legal. Returns `false` if no legal
    /// assignment exists for the given clues, which can only happen if the
    /// board was seeded with already-conflicting values.
    pub fn solve(&mut self) -> bool {
        self.solver.solve(&mut self.board)
    }
}
