//! Single-cell clues and the end-of-solve finalisation check.
//!
//! Neither class has a counterpart in the teacher (whose `Sudoku<C>` has no notion of a given
//! digit separate from the grid itself); both are learned directly from the original Python
//! source's `GivenDigit`/`FinaliseConstraint` classes in `sudoku.py`.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::{SolveError, SolveResult};

/// A clue: forces one cell to a fixed digit before propagation starts.
#[derive(Debug, Clone)]
pub struct GivenDigit {
    base: ConstraintBase,
    value: u8
}

impl GivenDigit {
    pub fn new(cell: CellId, value: u8) -> GivenDigit {
        GivenDigit {
            base: ConstraintBase::new(vec![cell]),
            value
        }
    }

    pub fn cell(&self) -> CellId {
        self.base.cells[0]
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl Constraint for GivenDigit {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn initialise(&mut self, board: &mut Board) -> SolveResult<()> {
        board.assign_cell(self.cell(), self.value)
    }

    fn quick_update(&mut self, _board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        Ok(false)
    }

    fn partial_assignment_invalid(&self, board: &Board) -> bool {
        match board.cell(self.cell()).value() {
            Some(value) => value != self.value,
            None => !board.cell(self.cell()).possibles().contains(self.value as usize)
        }
    }

    fn check(&self, board: &Board) -> bool {
        board.cell(self.cell()).value() == Some(self.value)
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A marker constraint with no cells of its own, whose `check` simply demands that every cell
/// on the board has been solved. Mirrors the original source's `FinaliseConstraint`, which runs
/// last to catch any constraint whose `check` is only meaningful once the whole grid is full.
#[derive(Debug, Clone)]
pub struct FinaliseConstraint {
    base: ConstraintBase
}

impl FinaliseConstraint {
    pub fn new() -> FinaliseConstraint {
        FinaliseConstraint {
            base: ConstraintBase::new(Vec::new())
        }
    }
}

impl Default for FinaliseConstraint {
    fn default() -> FinaliseConstraint {
        FinaliseConstraint::new()
    }
}

impl Constraint for FinaliseConstraint {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, _board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        Ok(false)
    }

    fn partial_assignment_invalid(&self, _board: &Board) -> bool {
        false
    }

    fn check(&self, board: &Board) -> bool {
        board.is_fully_solved()
    }

    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn given_digit_forces_its_cell() {
        let mut board = Board::new();
        board.add_given(CellId::from_row_column(4, 4), 3).unwrap();
        assert_eq!(board.cell(CellId::from_row_column(4, 4)).value(), Some(3));
    }

    #[test]
    fn conflicting_given_is_rejected() {
        let mut board = Board::new();
        board.add_given(CellId::from_row_column(4, 4), 3).unwrap();
        let result = board.add_given(CellId::from_row_column(4, 4), 7);
        assert_eq!(result, Err(SolveError::Contradiction));
    }
}
