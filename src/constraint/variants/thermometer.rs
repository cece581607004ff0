//! Thermometers: a chain of cells that must strictly increase from bulb to tip.
//!
//! Grounded on `original_source/python/constraints.py`'s `BrokenThermometer` (simplified here to
//! an ordinary monotone thermometer — the "broken" non-strict variant is a straightforward
//! change of the `<` to `<=` below, left out as the spec's base case is the strict kind). Unlike
//! the cage/arrow constraints, a thermometer's length can run the full 9 cells, which would make
//! brute enumeration too expensive, so this uses a cheap forward/backward bounds pass instead of
//! [`crate::constraint::default_enumeration_pruner`].

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::SolveResult;
use crate::utilities::USizeSet;

#[derive(Debug, Clone)]
pub struct Thermometer {
    base: ConstraintBase
}

impl Thermometer {
    /// `cells` ordered from bulb (lowest) to tip (highest).
    pub fn new(cells: Vec<CellId>) -> Thermometer {
        Thermometer {
            base: ConstraintBase::new(cells)
        }
    }

    fn tighten(&self, board: &mut Board) -> SolveResult<bool> {
        let cells = &self.base.cells;
        let mut changed = false;

        // forward pass: cell i+1 must exceed the smallest remaining candidate of cell i
        let mut running_min = board.cell(cells[0]).possibles().iter().next().unwrap_or(1);
        for index in 1..cells.len() {
            let floor = running_min + 1;
            let allowed = USizeSet::from_iter(1, 9, (floor..=9).collect::<Vec<_>>()).unwrap_or_else(|_| {
                USizeSet::new(1, 9).expect("valid bounds")
            });
            let before = board.cell(cells[index]).possibles().len();
            board.narrow_cell(cells[index], &allowed)?;
            if board.cell(cells[index]).possibles().len() != before {
                changed = true;
            }
            running_min = board
                .cell(cells[index])
                .possibles()
                .iter()
                .next()
                .unwrap_or(running_min);
        }

        // backward pass: cell i must be smaller than the largest remaining candidate of cell i+1
        let mut running_max = board.cell(*cells.last().unwrap()).possibles().iter().last().unwrap_or(9);
        for index in (0..cells.len() - 1).rev() {
            let ceiling = running_max.saturating_sub(1).max(1);
            let allowed = USizeSet::from_iter(1, 9, (1..=ceiling).collect::<Vec<_>>()).unwrap_or_else(|_| {
                USizeSet::new(1, 9).expect("valid bounds")
            });
            let before = board.cell(cells[index]).possibles().len();
            board.narrow_cell(cells[index], &allowed)?;
            if board.cell(cells[index]).possibles().len() != before {
                changed = true;
            }
            running_max = board.cell(cells[index]).possibles().iter().last().unwrap_or(running_max);
        }

        Ok(changed)
    }
}

impl Constraint for Thermometer {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        self.tighten(board)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        self.base.cells.windows(2).all(|pair| {
            board.cell(pair[0]).value().unwrap_or(0) < board.cell(pair[1]).value().unwrap_or(0)
        })
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
    fn three_cell_thermo_excludes_impossible_extremes() {
        let mut board = Board::new();
        let cells = vec![
            CellId::from_row_column(0, 0),
            CellId::from_row_column(0, 1),
            CellId::from_row_column(0, 2)
        ];
        let mut thermo = Thermometer::new(cells.clone());
        thermo.initialise(&mut board).unwrap();
        thermo.quick_update(&mut board, cells[0]).unwrap();
        // bulb can be at most 7 (needs two strictly larger values above it)
        assert!(!board.cell(cells[0]).possibles().contains(8));
        assert!(!board.cell(cells[0]).possibles().contains(9));
        // tip can be at least 3
        assert!(!board.cell(cells[2]).possibles().contains(1));
        assert!(!board.cell(cells[2]).possibles().contains(2));
    }
}
