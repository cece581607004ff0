use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Everything that can go wrong while propagating constraints or bifurcating.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum SolveError{
    /// Some cell's candidate set was emptied by propagation and no bifurcation can recover it.
    Contradiction,
    /// The propagation loop and bifurcation controller both ran out of progress without
    /// reaching a full assignment, and no contradiction was found either.
    NoSolutionFound,
    /// Two or more distinct complete assignments satisfy every constraint.
    MultipleSolutionsFound,
    /// The bifurcation controller could not find any cell worth splitting on, but the board
    /// is not fully assigned.
    NoBifurcationsLeft
}

impl Display for SolveError{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Contradiction => write!(f, "contradiction: a cell has no remaining candidates"),
            SolveError::NoSolutionFound => write!(f, "no solution found"),
            SolveError::MultipleSolutionsFound => write!(f, "multiple solutions found"),
            SolveError::NoBifurcationsLeft => write!(f, "no bifurcation candidates left")
        }
    }
}

impl std::error::Error for SolveError {}

pub type SolveResult<V> = Result<V, SolveError>;

/// Errors raised while parsing a [`crate::grid::SudokuGrid`] from a clue string or text grid.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum GridError{
    WrongRowCount,
    WrongCellCount,
    InvalidDigit,
    NumberFormatError
}

impl Display for GridError{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::WrongRowCount => write!(f, "grid does not have 9 rows"),
            GridError::WrongCellCount => write!(f, "a row does not have 9 cells"),
            GridError::InvalidDigit => write!(f, "digit is out of the 1-9 range"),
            GridError::NumberFormatError => write!(f, "could not parse a digit")
        }
    }
}

impl std::error::Error for GridError {}

impl From<ParseIntError> for GridError {
    fn from(_: ParseIntError) -> Self {
        GridError::NumberFormatError
    }
}

pub type GridResult<V> = Result<V, GridError>;
