//! Palindrome lines: the cell sequence reads the same from both ends.
//!
//! Grounded on `original_source/python/constraints.py`'s `Palindrome`.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct Palindrome {
    base: ConstraintBase
}

impl Palindrome {
    pub fn new(cells: Vec<CellId>) -> Palindrome {
        Palindrome {
            base: ConstraintBase::new(cells)
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        let n = self.base.cells.len();
        (0..n / 2).map(move |i| (self.base.cells[i], self.base.cells[n - 1 - i]))
    }
}

impl Constraint for Palindrome {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        let mut changed = false;
        for (a, b) in self.pairs().collect::<Vec<_>>() {
            let intersection = board.cell(a).possibles() & board.cell(b).possibles();
            if board.cell(a).possibles() != &intersection {
                board.narrow_cell(a, &intersection)?;
                changed = true;
            }
            if board.cell(b).possibles() != &intersection {
                board.narrow_cell(b, &intersection)?;
                changed = true;
            }
        }
        Ok(changed)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        self.pairs().all(|(a, b)| board.cell(a).value() == board.cell(b).value())
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
    fn ends_are_forced_to_match() {
        let mut board = Board::new();
        let cells = vec![
            CellId::from_row_column(0, 0),
            CellId::from_row_column(0, 1),
            CellId::from_row_column(0, 2)
        ];
        board.add_given(cells[0], 4).unwrap();
        let mut palindrome = Palindrome::new(cells.clone());
        palindrome.initialise(&mut board).unwrap();
        palindrome.quick_update(&mut board, cells[0]).unwrap();
        assert_eq!(board.cell(cells[2]).value(), Some(4));
    }
}
