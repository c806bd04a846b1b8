//! This module contains the error and result definitions used in this
//! crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors that can occur on methods in the
/// [root module](../index.html). This does not include errors that occur
/// when parsing a board, see [SudokuParseError](enum.SudokuParseError.html)
/// for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that a value written to a cell is invalid, that is,
    /// greater than 9. The cell in question keeps its previous value.
    InvalidValue,

    /// Indicates that a committed move would make the board illegal. The
    /// board is guaranteed to be restored to its state before the move was
    /// attempted, so the caller may retry with a different value.
    IllegalMove,

    /// Indicates that a row, column, or box index lies outside the board,
    /// that is, outside the range `[0, 8]`.
    IndexOutOfRange,

    /// Indicates that no legal assignment exists for the cells already
    /// filled into a board. Since an empty board is always solvable, this
    /// can only happen if the board was seeded with conflicting values.
    Unsolvable
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidValue =>
                write!(f, "number must be between 0 and 9"),
            SudokuError::IllegalMove =>
                write!(f, "impossible move"),
            SudokuError::IndexOutOfRange =>
                write!(f, "index out of bounds"),
            SudokuError::Unsolvable =>
                write!(f, "no legal assignment exists for the given cells")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// `SudokuBoard`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// is not 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "code must contain exactly 81 cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell entry must be between 1 and 9")
        }
    }
}

impl Error for SudokuParseError { }

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
