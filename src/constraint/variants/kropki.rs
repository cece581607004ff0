//! Kropki dots: adjacent cells related by a ratio of 2 (black) or a difference of 1 (white).
//!
//! Grounded on `original_source/python/constraints.py`'s `BlackKropki`; `WhiteKropki` is added
//! by symmetry since the original only implements the black variant but the spec's constraint
//! library calls for both dot colours.

use std::any::Any;

use crate::board::{Board, CellId};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::SolveResult;
use crate::utilities::USizeSet;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KropkiKind {
    /// Difference of exactly 1.
    White,
    /// Ratio of exactly 2.
    Black
}

impl KropkiKind {
    fn related(self, a: u8, b: u8) -> bool {
        match self {
            KropkiKind::White => (a as i16 - b as i16).abs() == 1,
            KropkiKind::Black => a == 2 * b || b == 2 * a
        }
    }
}

#[derive(Debug, Clone)]
pub struct Kropki {
    base: ConstraintBase,
    kind: KropkiKind
}

impl Kropki {
    pub fn new(a: CellId, b: CellId, kind: KropkiKind) -> Kropki {
        Kropki {
            base: ConstraintBase::new(vec![a, b]),
            kind
        }
    }

    fn a(&self) -> CellId {
        self.base.cells[0]
    }

    fn b(&self) -> CellId {
        self.base.cells[1]
    }
}

impl Constraint for Kropki {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn quick_update(&mut self, board: &mut Board, _changed: CellId) -> SolveResult<bool> {
        let mut changed = false;

        let a_allowed: Vec<usize> = board
            .cell(self.a())
            .possibles()
            .iter()
            .filter(|&va| board.cell(self.b()).possibles().iter().any(|vb| self.kind.related(va as u8, vb as u8)))
            .collect();
        let a_set = USizeSet::from_iter(1, 9, a_allowed).expect("values within 1..=9");
        if board.cell(self.a()).possibles() != &a_set {
            board.narrow_cell(self.a(), &a_set)?;
            changed = true;
        }

        let b_allowed: Vec<usize> = board
            .cell(self.b())
            .possibles()
            .iter()
            .filter(|&vb| board.cell(self.a()).possibles().iter().any(|va| self.kind.related(va as u8, vb as u8)))
            .collect();
        let b_set = USizeSet::from_iter(1, 9, b_allowed).expect("values within 1..=9");
        if board.cell(self.b()).possibles() != &b_set {
            board.narrow_cell(self.b(), &b_set)?;
            changed = true;
        }

        Ok(changed)
    }

    fn check(&self, board: &Board) -> bool {
        if !crate::constraint::default_check(self, board) {
            return false;
        }
        let (Some(a), Some(b)) = (board.cell(self.a()).value(), board.cell(self.b()).value()) else {
            return false;
        };
        self.kind.related(a, b)
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
    fn black_dot_halves_or_doubles() {
        let mut board = Board::new();
        let a = CellId::from_row_column(0, 0);
        let b = CellId::from_row_column(0, 1);
        board.add_given(a, 3).unwrap();
        let mut kropki = Kropki::new(a, b, KropkiKind::Black);
        kropki.initialise(&mut board).unwrap();
        kropki.quick_update(&mut board, a).unwrap();
        assert_eq!(board.cell(b).possibles().iter().collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn white_dot_is_off_by_one() {
        let mut board = Board::new();
        let a = CellId::from_row_column(0, 0);
        let b = CellId::from_row_column(0, 1);
        board.add_given(a, 5).unwrap();
        let mut kropki = Kropki::new(a, b, KropkiKind::White);
        kropki.initialise(&mut board).unwrap();
        kropki.quick_update(&mut board, a).unwrap();
        assert_eq!(board.cell(b).possibles().iter().collect::<Vec<_>>(), vec![4, 6]);
    }
}
