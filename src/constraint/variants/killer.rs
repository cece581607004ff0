//! Killer cages: a group of cells summing to a clued total, usually also all-distinct.
//!
//! Grounded on `original_source/python/constraints.py`'s `KillerCage`.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{default_enumeration_pruner, Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct KillerCage {
    base: ConstraintBase,
    sum: u16,
    unique: bool
}

impl KillerCage {
    pub fn new(cells: Vec<CellId>, sum: u16) -> KillerCage {
        KillerCage {
            base: ConstraintBase::new(cells),
            sum,
            unique: true
        }
    }

    /// A cage whose cells are allowed to repeat digits (rare, but some variants use it).
    pub fn non_unique(cells: Vec<CellId>, sum: u16) -> KillerCage {
        KillerCage {
            base: ConstraintBase::new(cells),
            sum,
            unique: false
        }
    }

    fn is_valid(&self, assignment: &[u8]) -> bool {
        let total: u16 = assignment.iter().map(|&v| v as u16).sum();
        if total != self.sum {
            return false;
        }

        if self.unique {
            let mut seen = [false; 10];
            for &v in assignment {
                if seen[v as usize] {
                    return false;
                }
                seen[v as usize] = true;
            }
        }

        true
    }
}

impl Constraint for KillerCage {
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
        let assignment: Vec<u8> = self.base.cells.iter().filter_map(|&c| board.cell(c).value()).collect();
        assignment.len() == self.base.cells.len() && self.is_valid(&assignment)
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
    fn pair_cage_narrows_to_complementary_digits() {
        let mut board = Board::new();
        let cells = vec![CellId::from_row_column(0, 0), CellId::from_row_column(0, 1)];
        let mut cage = KillerCage::new(cells.clone(), 3);
        cage.initialise(&mut board).unwrap();
        cage.quick_update(&mut board, cells[0]).unwrap();
        assert_eq!(board.cell(cells[0]).possibles().iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(board.cell(cells[1]).possibles().iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
