//! Arrows: the digits along the arrow's body must sum to the digit in its round head.
//!
//! Grounded on `original_source/python/constraints.py`'s `Arrow`, with the head/body split and
//! Rust-side texture drawn from
//! `other_examples/…dweatherstone-sudoku_solver…variant-line-arrow.rs`.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{default_enumeration_pruner, Constraint, ConstraintBase};
use crate::error::SolveResult;

#[derive(Debug, Clone)]
pub struct Arrow {
    base: ConstraintBase
}

impl Arrow {
    /// `head` holds the sum; `body` is the chain of cells along the arrow's shaft.
    pub fn new(head: CellId, body: Vec<CellId>) -> Arrow {
        let mut cells = vec![head];
        cells.extend(body);
        Arrow {
            base: ConstraintBase::new(cells)
        }
    }

    fn head(&self) -> CellId {
        self.base.cells[0]
    }

    fn body(&self) -> &[CellId] {
        &self.base.cells[1..]
    }

    fn is_valid(assignment: &[u8]) -> bool {
        let head = assignment[0] as u16;
        let body_sum: u16 = assignment[1..].iter().map(|&v| v as u16).sum();
        head == body_sum
    }
}

impl Constraint for Arrow {
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
        default_enumeration_pruner(&cells, board, &config, &Arrow::is_valid)?;
        let after: Vec<_> = self.base.cells.iter().map(|&c| board.cell(c).possibles().len()).collect();
        Ok(before != after)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        let head = board.cell(self.head()).value();
        let body_sum: Option<u16> = self
            .body()
            .iter()
            .map(|&c| board.cell(c).value().map(|v| v as u16))
            .sum();
        head.map(|h| h as u16) == body_sum
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
    fn two_cell_body_narrows_head() {
        let mut board = Board::new();
        let head = CellId::from_row_column(0, 0);
        let body = vec![CellId::from_row_column(0, 1), CellId::from_row_column(0, 2)];
        board.add_given(body[0], 1).unwrap();
        board.add_given(body[1], 2).unwrap();
        let mut arrow = Arrow::new(head, body);
        arrow.initialise(&mut board).unwrap();
        arrow.quick_update(&mut board, head).unwrap();
        assert_eq!(board.cell(head).value(), Some(3));
    }
}
