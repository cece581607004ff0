//! Little killer clues: a diagonal ray from outside the grid, with a clued sum and no
//! uniqueness requirement (digits may repeat along the diagonal).
//!
//! Grounded on `original_source/python/constraints.py`'s `InternalLittleKiller`.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{default_enumeration_pruner, Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct LittleKiller {
    base: ConstraintBase,
    sum: u16
}

impl LittleKiller {
    pub fn new(cells: Vec<CellId>, sum: u16) -> LittleKiller {
        LittleKiller {
            base: ConstraintBase::new(cells),
            sum
        }
    }

    fn is_valid(&self, assignment: &[u8]) -> bool {
        assignment.iter().map(|&v| v as u16).sum::<u16>() == self.sum
    }
}

impl Constraint for LittleKiller {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        // Diagonals can run the full 9 cells, past the brute-force cutoff; the enumeration
        // pruner's own product cap makes it a no-op in that case and a real prune on the short
        // diagonals near the grid's corners.
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
        let sum: u16 = self.base.cells.iter().map(|&c| board.cell(c).value().unwrap_or(0) as u16).sum();
        sum == self.sum
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
    fn short_diagonal_narrows_by_sum() {
        let mut board = Board::new();
        let cells = vec![CellId::from_row_column(0, 0), CellId::from_row_column(1, 1)];
        let mut killer = LittleKiller::new(cells.clone(), 4);
        killer.initialise(&mut board).unwrap();
        killer.quick_update(&mut board, cells[0]).unwrap();
        for &cell in &cells {
            assert!(!board.cell(cell).possibles().contains(9));
        }
    }
}
