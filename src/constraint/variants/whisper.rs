//! German whisper lines: adjacent cells must differ by at least 5.
//!
//! Grounded on `original_source/python/constraints.py`'s `GermanWhisper`.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::SolveResult;
use crate::utilities::USizeSet;

const MIN_DIFFERENCE: i16 = 5;

#[derive(Debug, Clone)]
pub struct GermanWhisper {
    base: ConstraintBase
}

impl GermanWhisper {
    pub fn new(cells: Vec<CellId>) -> GermanWhisper {
        GermanWhisper {
            base: ConstraintBase::new(cells)
        }
    }

    fn reachable_from(value: usize) -> USizeSet {
        let values = (1..=9usize).filter(|&other| (value as i16 - other as i16).abs() >= MIN_DIFFERENCE);
        USizeSet::from_iter(1, 9, values).expect("values within 1..=9")
    }

    fn prune_pair(board: &mut Board, a: CellId, b: CellId) -> SolveResult<bool> {
        let mut changed = false;

        let a_allowed: Vec<usize> = board
            .cell(a)
            .possibles()
            .iter()
            .filter(|&v| {
                GermanWhisper::reachable_from(v)
                    .iter()
                    .any(|other| board.cell(b).possibles().contains(other))
            })
            .collect();
        let a_set = USizeSet::from_iter(1, 9, a_allowed).expect("values within 1..=9");
        if board.cell(a).possibles() != &a_set {
            board.narrow_cell(a, &a_set)?;
            changed = true;
        }

        let b_allowed: Vec<usize> = board
            .cell(b)
            .possibles()
            .iter()
            .filter(|&v| {
                GermanWhisper::reachable_from(v)
                    .iter()
                    .any(|other| board.cell(a).possibles().contains(other))
            })
            .collect();
        let b_set = USizeSet::from_iter(1, 9, b_allowed).expect("values within 1..=9");
        if board.cell(b).possibles() != &b_set {
            board.narrow_cell(b, &b_set)?;
            changed = true;
        }

        Ok(changed)
    }
}

impl Constraint for GermanWhisper {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        let mut changed = false;
        for pair in self.base.cells.windows(2) {
            changed |= GermanWhisper::prune_pair(board, pair[0], pair[1])?;
        }
        Ok(changed)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        self.base.cells.windows(2).all(|pair| {
            let a = board.cell(pair[0]).value().unwrap_or(0) as i16;
            let b = board.cell(pair[1]).value().unwrap_or(0) as i16;
            (a - b).abs() >= MIN_DIFFERENCE
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
    fn low_end_forces_high_partner() {
        let mut board = Board::new();
        let cells = vec![CellId::from_row_column(0, 0), CellId::from_row_column(0, 1)];
        board.add_given(cells[0], 1).unwrap();
        let mut whisper = GermanWhisper::new(cells.clone());
        whisper.initialise(&mut board).unwrap();
        whisper.quick_update(&mut board, cells[0]).unwrap();
        // 1 can only pair with 6, 7, 8 or 9
        assert_eq!(board.cell(cells[1]).possibles().iter().collect::<Vec<_>>(), vec![6, 7, 8, 9]);
    }

    #[test]
    fn five_has_no_valid_partner() {
        let mut board = Board::new();
        let cells = vec![CellId::from_row_column(0, 0), CellId::from_row_column(0, 1)];
        board.add_given(cells[0], 5).unwrap();
        let mut whisper = GermanWhisper::new(cells.clone());
        whisper.initialise(&mut board).unwrap();
        let result = whisper.quick_update(&mut board, cells[0]);
        assert!(result.is_err());
    }
}
