//! Uniqueness regions: rows, columns, boxes, and any other group of cells that must hold 9
//! distinct digits (disjoint groups, killer-cage-with-distinct-cells, and so on).
//!
//! Grounded on the original Python source's `NoRepeatsConstraint` (`detect_and_action_n_tuples`,
//! `detect_corner_marks`, `check_for_corner_mark_tuples`): naked singles, hidden singles and
//! naked n-tuples are detected here per-region; cross-region box-line reduction is driven by
//! `Board::apply_locked_candidates`, which reaches into every region's `corner_marks` through
//! the `as_no_repeats` downcast below — the same "reach across objects via a trait downcast"
//! idiom as the teacher's `Subconstraint::get_subconstraint`.

use std::any::Any;
use std::collections::HashSet;

use crate::board::{Board, Candidate, CellId, CellMask};
use crate::constraint::{Constraint, ConstraintBase};
use crate::error::{SolveError, SolveResult};

/// A group of cells that must collectively hold 9 distinct digits.
#[derive(Debug, Clone)]
pub struct NoRepeats {
    base: ConstraintBase,
    region_mask: CellMask,
    /// `corner_marks[d - 1]`: cells in this region that can still hold digit `d`. Only kept
    /// up to date for 9-cell regions, per the size gate below.
    corner_marks: [CellMask; 9],
    /// Cell-combinations already identified as a naked n-tuple, so repeated `quick_update`
    /// calls don't redo the same purge.
    tuples_noted: HashSet<CellMask>
}

impl NoRepeats {
    pub fn new(cells: Vec<CellId>) -> NoRepeats {
        let region_mask = CellMask::from_iter(cells.iter().copied());
        NoRepeats {
            base: ConstraintBase::new(cells),
            region_mask,
            corner_marks: [CellMask::EMPTY; 9],
            tuples_noted: HashSet::new()
        }
    }

    pub fn row(row: u8) -> NoRepeats {
        NoRepeats::new((0..9).map(|column| CellId::from_row_column(row, column)).collect())
    }

    pub fn column(column: u8) -> NoRepeats {
        NoRepeats::new((0..9).map(|row| CellId::from_row_column(row, column)).collect())
    }

    pub fn box_region(box_index: u8) -> NoRepeats {
        let base_row = (box_index / 3) * 3;
        let base_column = (box_index % 3) * 3;
        let cells = (0..3)
            .flat_map(|dr| (0..3).map(move |dc| (dr, dc)))
            .map(|(dr, dc)| CellId::from_row_column(base_row + dr, base_column + dc))
            .collect();
        NoRepeats::new(cells)
    }

    pub fn region_mask(&self) -> CellMask {
        self.region_mask
    }

    /// Cells in this region that can still hold `digit`, if this is a full 9-cell region.
    ///
    /// Resolves the spec's Open Question about sub-9 regions by adopting its own suggested
    /// gate: a region smaller than 9 cells (e.g. a killer cage treated as a disjoint group)
    /// never participates in corner-mark/locked-candidate bookkeeping.
    pub fn locked_mask(&self, digit: u8) -> Option<CellMask> {
        if self.base.cells.len() != 9 {
            return None;
        }
        Some(self.corner_marks[(digit - 1) as usize])
    }

    fn refresh_corner_marks(&mut self, board: &mut Board) {
        if self.base.cells.len() != 9 {
            return;
        }

        for digit in 1..=9u8 {
            let mask = CellMask::from_iter(
                self.base
                    .cells
                    .iter()
                    .copied()
                    .filter(|&cell| board.cell(cell).possibles().contains(digit as usize))
            );
            self.corner_marks[(digit - 1) as usize] = mask;

            if mask.len() == 2 {
                let pair: Vec<CellId> = mask.iter().collect();
                NoRepeats::add_corner_mark_forcing_edges(board, pair[0], pair[1], digit);
                NoRepeats::add_corner_mark_forcing_edges(board, pair[1], pair[0], digit);
            }
        }
    }

    /// When `digit` is down to exactly `from_cell`/`to_cell` in a region, ruling out `digit` in
    /// `from_cell` (by assigning it any of its other candidates) forces `to_cell` to `digit`.
    fn add_corner_mark_forcing_edges(board: &mut Board, from_cell: CellId, to_cell: CellId, digit: u8) {
        let other_values: Vec<u8> = board
            .cell(from_cell)
            .possibles()
            .iter()
            .map(|v| v as u8)
            .filter(|&v| v != digit)
            .collect();

        for value in other_values {
            board
                .graphs_mut()
                .add_forcing(Candidate::new(from_cell, value), Candidate::new(to_cell, digit));
        }
    }

    fn detect_naked_tuples(&mut self, board: &mut Board) -> SolveResult<bool> {
        let unsolved: Vec<CellId> = self
            .base
            .cells
            .iter()
            .copied()
            .filter(|&cell| !board.cell(cell).is_solved())
            .collect();

        let mut changed = false;

        for size in 2..unsolved.len() {
            let mut combo = Vec::with_capacity(size);
            changed |= self.try_tuples(board, &unsolved, size, 0, &mut combo)?;
        }

        Ok(changed)
    }

    fn try_tuples(
        &mut self,
        board: &mut Board,
        unsolved: &[CellId],
        size: usize,
        start: usize,
        combo: &mut Vec<CellId>
    ) -> SolveResult<bool> {
        if combo.len() == size {
            return self.check_tuple(board, unsolved, combo);
        }

        let mut changed = false;
        for index in start..unsolved.len() {
            combo.push(unsolved[index]);
            changed |= self.try_tuples(board, unsolved, size, index + 1, combo)?;
            combo.pop();
        }
        Ok(changed)
    }

    fn check_tuple(&mut self, board: &mut Board, unsolved: &[CellId], combo: &[CellId]) -> SolveResult<bool> {
        let mut union = crate::utilities::USizeSet::new(1, 9).expect("valid bounds");
        for &cell in combo {
            union.union_with(board.cell(cell).possibles()).expect("same bounds");
        }

        if union.len() != combo.len() {
            return Ok(false);
        }

        let combo_mask = CellMask::from_iter(combo.iter().copied());
        if !self.tuples_noted.insert(combo_mask) {
            return Ok(false);
        }

        let mut changed = false;
        for &cell in unsolved {
            if combo.contains(&cell) {
                continue;
            }
            for value in union.iter() {
                if board.cell(cell).possibles().contains(value) {
                    board.remove_candidate(cell, value as u8)?;
                    changed = true;
                }
            }
        }

        Ok(changed)
    }
}

impl Constraint for NoRepeats {
    fn base(&self) -> &ConstraintBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ConstraintBase {
        &mut self.base
    }

    fn initialise(&mut self, board: &mut Board) -> SolveResult<()> {
        let cells = self.base.cells.clone();
        for i in 0..cells.len() {
            for j in (i + 1)..cells.len() {
                board.graphs_mut().add_seen(cells[i], cells[j]);
            }
        }

        self.refresh_corner_marks(board);
        Ok(())
    }

    fn quick_update(&mut self, board: &mut Board, changed: CellId) -> SolveResult<bool> {
        if !self.base.cells.contains(&changed) {
            return Ok(false);
        }

        let mut progressed = false;

        if let Some(value) = board.cell(changed).value() {
            for &cell in &self.base.cells.clone() {
                if cell != changed && board.cell(cell).possibles().contains(value as usize) {
                    board.remove_candidate(cell, value)?;
                    progressed = true;
                }
            }
        }

        for digit in 1..=9u8 {
            let holders: Vec<CellId> = self
                .base
                .cells
                .iter()
                .copied()
                .filter(|&cell| board.cell(cell).possibles().contains(digit as usize))
                .collect();

            if holders.is_empty() {
                return Err(SolveError::Contradiction);
            }

            if holders.len() == 1 && board.cell(holders[0]).value() != Some(digit) {
                board.assign_cell(holders[0], digit)?;
                progressed = true;
            }
        }

        progressed |= self.detect_naked_tuples(board)?;
        self.refresh_corner_marks(board);
        Ok(progressed)
    }

    fn partial_assignment_invalid(&self, board: &Board) -> bool {
        if crate::constraint::default_partial_assignment_invalid(self, board) {
            return true;
        }

        let mut seen = [false; 10];
        for &cell in &self.base.cells {
            if let Some(value) = board.cell(cell).value() {
                if seen[value as usize] {
                    return true;
                }
                seen[value as usize] = true;
            }
        }

        false
    }

    fn check(&self, board: &Board) -> bool {
        crate::constraint::default_check(self, board)
    }

    fn as_no_repeats(&self) -> Option<&NoRepeats> {
        Some(self)
    }

    fn as_no_repeats_mut(&mut self) -> Option<&mut NoRepeats> {
        Some(self)
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
    fn naked_single_clears_peers_in_region() {
        let mut board = Board::new();
        board.add_given(CellId::from_row_column(0, 0), 7).unwrap();
        board.requeue_all();
        board.propagate().unwrap();
        assert!(!board.cell(CellId::from_row_column(0, 3)).possibles().contains(7));
        assert!(!board.cell(CellId::from_row_column(4, 0)).possibles().contains(7));
        assert!(!board.cell(CellId::from_row_column(1, 1)).possibles().contains(7));
    }

    #[test]
    fn corner_mark_pair_adds_forcing_edges() {
        let mut board = Board::new();
        for column in 0..7u8 {
            board.add_given(CellId::from_row_column(0, column), column + 1).unwrap();
        }
        board.requeue_all();
        board.propagate().unwrap();

        let last_two = CellId::from_row_column(0, 7);
        let last_one = CellId::from_row_column(0, 8);
        assert_eq!(board.cell(last_two).possibles().iter().collect::<Vec<_>>(), vec![8, 9]);
        assert_eq!(board.cell(last_one).possibles().iter().collect::<Vec<_>>(), vec![8, 9]);

        let forced: Vec<_> = board.graphs().forced_by(Candidate::new(last_two, 9)).collect();
        assert!(forced.contains(&Candidate::new(last_one, 8)));
    }

    #[test]
    fn row_has_nine_distinct_cells() {
        let region = NoRepeats::row(3);
        assert_eq!(region.region_mask().len(), 9);
        for column in 0..9 {
            assert!(region.region_mask().contains(CellId::from_row_column(3, column)));
        }
    }
}
