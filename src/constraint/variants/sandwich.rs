//! Sandwich sums: the digits strictly between 1 and 9 in a row or column must sum to a clue.
//!
//! Grounded on `original_source/python/constraints.py`'s `InternalSandwichConstraint`. Since the
//! sum only constrains cells *between* wherever 1 and 9 end up landing — a fact that isn't
//! known until most of the line is solved — this doesn't lend itself to
//! [`crate::constraint::default_enumeration_pruner`] (a 9-cell line is far past the brute-force
//! cutoff) or to a cheap bounds pass the way a thermometer does. It's left to the final `check`
//! plus bifurcation, same as a solver without a dedicated sandwich technique would do.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct Sandwich {
    base: ConstraintBase,
    clue: u8
}

impl Sandwich {
    /// `cells` is the full 9-cell row or column the sandwich clue applies to.
    pub fn new(cells: Vec<CellId>, clue: u8) -> Sandwich {
        Sandwich {
            base: ConstraintBase::new(cells),
            clue
        }
    }

    fn sandwiched_sum(&self, board: &Board) -> Option<u16> {
        let values: Vec<u8> = self.base.cells.iter().map(|&c| board.cell(c).value()).collect::<Option<Vec<u8>>>()?;
        let one_at = values.iter().position(|&v| v == 1)?;
        let nine_at = values.iter().position(|&v| v == 9)?;
        let (lo, hi) = if one_at < nine_at { (one_at, nine_at) } else { (nine_at, one_at) };
        Some(values[lo + 1..hi].iter().map(|&v| v as u16).sum())
    }
}

impl Constraint for Sandwich {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, _board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        Ok(false)
    }

    fn partial_assignment_invalid(&self, board: &Board) -> bool {
        crate::constraint::default_partial_assignment_invalid(self, board)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        self.sandwiched_sum(board) == Some(self.clue as u16)
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
    fn solved_row_with_correct_sandwich_passes() {
        let mut board = Board::new();
        let values = [5u8, 1, 3, 7, 9, 2, 4, 6, 8];
        let cells: Vec<CellId> = (0..9).map(|c| CellId::from_row_column(0, c)).collect();
        for (cell, &value) in cells.iter().zip(values.iter()) {
            board.add_given(*cell, value).unwrap();
        }
        let sandwich = Sandwich::new(cells, 10); // between 1 and 9: 3 + 7 = 10
        assert!(sandwich.check(&board));
    }
}
