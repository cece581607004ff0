//! X-Sum clues: the first N cells of a line sum to a given clue, where N is read off the
//! line's own first cell.
//!
//! Grounded on `original_source/python/constraints.py`'s `InternalXSumConstraint`
//! (`summand_cells[: assignment[self.x_cell]]`, summed and compared against a clue) for the
//! "count taken from the first cell's own value" shape. The original models the clue as a
//! separate `sum_cell` elsewhere on the grid; simplified here to a fixed `sum` constant, the
//! same way [`super::sandwich::Sandwich`] and [`super::little_killer::LittleKiller`] already
//! take their clue as a plain number rather than a second constrained cell.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{default_enumeration_pruner, Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct XSum {
    base: ConstraintBase,
    sum: u16
}

impl XSum {
    /// `cells` ordered from the clued end of the line inward; `cells[0]`'s own value names how
    /// many of `cells`, counted from that end, must sum to `sum`.
    pub fn new(cells: Vec<CellId>, sum: u16) -> XSum {
        XSum {
            base: ConstraintBase::new(cells),
            sum
        }
    }

    fn is_valid(&self, assignment: &[u8]) -> bool {
        let n = assignment[0] as usize;
        if n == 0 || n > assignment.len() {
            return false;
        }
        assignment[..n].iter().map(|&v| v as u16).sum::<u16>() == self.sum
    }
}

impl Constraint for XSum {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        let before: Vec<_> = self.base.cells.iter().map(|&c| board.cell(c).possibles().len()).collect();
        let cells = self.base.cells.clone();
        let config = *board.config();
        let is_valid = |assignment: &[u8]| self.is_valid(assignment);
        default_enumeration_pruner(&cells, board, &config, &is_valid)?;
        let after: Vec<_> = self.base.cells.iter().map(|&c| board.cell(c).possibles().len()).collect();
        Ok(before != after)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        let values: Vec<u8> = match self.base.cells.iter().map(|&c| board.cell(c).value()).collect::<Option<Vec<u8>>>() {
            Some(values) => values,
            None => return false
        };
        self.is_valid(&values)
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
    fn short_line_narrows_to_the_only_valid_split() {
        let mut board = Board::new();
        let cells = vec![CellId::from_row_column(0, 0), CellId::from_row_column(0, 1)];
        let mut xsum = XSum::new(cells.clone(), 3);
        xsum.initialise(&mut board).unwrap();
        xsum.quick_update(&mut board, cells[0]).unwrap();
        // n=1 needs cells[0] alone to equal 3, but then n would be 1, not 3: impossible.
        // n=2 needs cells[0]=2 and cells[0]+cells[1]=3, so cells[1]=1: the only survivor.
        assert_eq!(board.cell(cells[0]).value(), Some(2));
        assert_eq!(board.cell(cells[1]).value(), Some(1));
    }
}
