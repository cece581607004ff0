//! Skyscraper clues: the clue counts how many cells in the line are visible from that end,
//! where a taller digit hides every shorter one behind it.
//!
//! Grounded on `original_source/python/constraints.py`'s `Skyscraper`/`InternalSkyscraperConstraint`.
//! Visibility counting doesn't reduce to a per-pair or per-cell bound the way a thermometer or
//! whisper line does, and a 9-cell line is past the brute-force cutoff, so — like
//! [`super::sandwich::Sandwich`] and [`super::little_killer::LittleKiller`] — this constraint
//! prunes nothing during propagation and is resolved by the final `check` plus bifurcation.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct Skyscraper {
    base: ConstraintBase,
    clue: u8
}

impl Skyscraper {
    /// `cells` ordered from the viewer's end of the line inward.
    pub fn new(cells: Vec<CellId>, clue: u8) -> Skyscraper {
        Skyscraper {
            base: ConstraintBase::new(cells),
            clue
        }
    }

    fn visible_count(values: &[u8]) -> u8 {
        let mut tallest = 0u8;
        let mut count = 0u8;
        for &value in values {
            if value > tallest {
                count += 1;
                tallest = value;
            }
        }
        count
    }
}

impl Constraint for Skyscraper {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, _board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        Ok(false)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        let values: Vec<u8> = self.base.cells.iter().filter_map(|&c| board.cell(c).value()).collect();
        values.len() == self.base.cells.len() && Skyscraper::visible_count(&values) == self.clue
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

    #[test]
    fn visible_count_counts_new_maxima() {
        assert_eq!(Skyscraper::visible_count(&[3, 1, 4, 1, 5, 9, 2, 6, 8]), 3);
        assert_eq!(Skyscraper::visible_count(&[9, 1, 2, 3, 4, 5, 6, 7, 8]), 1);
        assert_eq!(Skyscraper::visible_count(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), 9);
    }
}
