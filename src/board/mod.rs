//! The arena that owns every cell and constraint of a single puzzle, plus the propagation loop
//! and bifurcation controller that drive it towards a solution.
//!
//! Cells and constraints are addressed by stable [`CellId`]/[`ConstraintId`] indices into flat
//! `Vec`s rather than by pointer or reference, the same "flat array, derived index" idiom the
//! teacher used for its own `SudokuGrid`. The payoff shows up in [`Clone`]: a bifurcation trial
//! clones the whole board, and because every cross-reference is an index rather than a pointer,
//! the clone is a plain structural copy with no pointer-rewiring pass required.

pub mod bifurcation;
pub mod cell;
pub mod graph;
pub mod ids;
pub mod mask;

use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use log::{debug, trace};

use crate::config::SolverConfig;
use crate::constraint::given::GivenDigit;
use crate::constraint::no_repeats::NoRepeats;
use crate::constraint::Constraint;
use crate::error::{SolveError, SolveResult};
use crate::grid::SudokuGrid;
use crate::utilities::USizeSet;

pub use cell::Cell;
pub use graph::{Candidate, CandidateGraphs};
pub use ids::{CellId, ConstraintId, CELL_COUNT, SIZE};
pub use mask::CellMask;

/// A single variant Sudoku puzzle in progress: 81 cells, a set of constraints, and the
/// bookkeeping the propagation loop needs to narrow them towards a unique solution.
#[derive(Debug)]
pub struct Board {
    cells: Vec<Cell>,
    constraints: Vec<Option<Box<dyn Constraint>>>,
    cell_constraints: Vec<Vec<ConstraintId>>,
    no_repeats_ids: Vec<ConstraintId>,
    graphs: CandidateGraphs,
    queue: VecDeque<CellId>,
    config: SolverConfig
}

impl Board {
    /// A classic-Sudoku board: 81 empty cells plus the 9 row, 9 column and 9 box regions.
    pub fn new() -> Board {
        Board::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Board {
        let mut board = Board::blank(config);
        board
            .add_row_column_box_constraints()
            .expect("builtin regions never contradict a freshly blanked board");
        board
    }

    /// A board with no constraints at all, not even the standard rows/columns/boxes. Useful
    /// for variant puzzles that redefine uniqueness regions, and for testing.
    pub fn blank(config: SolverConfig) -> Board {
        Board {
            cells: CellId::all().map(Cell::new).collect(),
            constraints: Vec::new(),
            cell_constraints: vec![Vec::new(); CELL_COUNT],
            no_repeats_ids: Vec::new(),
            graphs: CandidateGraphs::new(),
            queue: VecDeque::new(),
            config
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn graphs(&self) -> &CandidateGraphs {
        &self.graphs
    }

    pub fn graphs_mut(&mut self) -> &mut CandidateGraphs {
        &mut self.graphs
    }

    pub fn no_repeats_ids(&self) -> &[ConstraintId] {
        &self.no_repeats_ids
    }

    pub fn constraint(&self, id: ConstraintId) -> &dyn Constraint {
        self.constraints[id.index()]
            .as_deref()
            .expect("constraint temporarily taken out for update")
    }

    pub fn is_fully_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    fn enqueue(&mut self, cell: CellId) {
        if !self.queue.contains(&cell) {
            self.queue.push_back(cell);
        }
    }

    /// Removes `value` from `cell`'s candidates, enqueuing it for propagation if it changed.
    pub fn remove_candidate(&mut self, cell: CellId, value: u8) -> SolveResult<()> {
        let changed = self.cells[cell.index()].remove(value);
        if changed {
            let candidate = Candidate::new(cell, value);
            self.graphs.forcing_values.remove_node(candidate);
            self.graphs.contradiction_graph.remove_node(candidate);

            if self.cells[cell.index()].is_contradictory() {
                return Err(SolveError::Contradiction);
            }

            self.enqueue(cell);
        }

        Ok(())
    }

    /// Narrows `cell`'s candidates to (the intersection with) `allowed`.
    pub fn narrow_cell(&mut self, cell: CellId, allowed: &USizeSet) -> SolveResult<()> {
        let before = self.cells[cell.index()].possibles().len();
        self.cells[cell.index()].intersect_with(allowed);

        if self.cells[cell.index()].is_contradictory() {
            return Err(SolveError::Contradiction);
        }

        if self.cells[cell.index()].possibles().len() != before {
            self.enqueue(cell);
        }

        Ok(())
    }

    /// Forces `cell` to `value`, as when placing a given digit or trying a bifurcation branch.
    pub fn assign_cell(&mut self, cell: CellId, value: u8) -> SolveResult<()> {
        if self.cells[cell.index()].value() == Some(value) {
            return Ok(());
        }

        if !self.cells[cell.index()].possibles().contains(value as usize) {
            return Err(SolveError::Contradiction);
        }

        self.cells[cell.index()].assign(value);
        self.graphs.retain_only(cell, value);
        self.enqueue(cell);
        Ok(())
    }

    fn register_constraint(&mut self, constraint: Box<dyn Constraint>) -> ConstraintId {
        let id = ConstraintId::new(self.constraints.len());

        for &cell in constraint.cells() {
            self.cell_constraints[cell.index()].push(id);
        }

        if constraint.as_no_repeats().is_some() {
            self.no_repeats_ids.push(id);
        }

        self.constraints.push(Some(constraint));
        id
    }

    /// Adds a constraint to the board, running its one-time initialisation first.
    pub fn add_constraint(&mut self, mut constraint: Box<dyn Constraint>) -> SolveResult<ConstraintId> {
        constraint.initialise(self)?;
        Ok(self.register_constraint(constraint))
    }

    pub fn add_row_column_box_constraints(&mut self) -> SolveResult<()> {
        for row in 0..SIZE {
            self.add_constraint(Box::new(NoRepeats::row(row)))?;
        }

        for column in 0..SIZE {
            self.add_constraint(Box::new(NoRepeats::column(column)))?;
        }

        for box_index in 0..SIZE {
            self.add_constraint(Box::new(NoRepeats::box_region(box_index)))?;
        }

        Ok(())
    }

    /// Places a given (clue) digit on the board.
    pub fn add_given(&mut self, cell: CellId, value: u8) -> SolveResult<ConstraintId> {
        self.add_constraint(Box::new(GivenDigit::new(cell, value)))
    }

    fn drain_queue(&mut self) -> SolveResult<()> {
        while let Some(cell) = self.queue.pop_front() {
            if self.cells[cell.index()].is_contradictory() {
                debug!("{cell} has no remaining candidates");
                return Err(SolveError::Contradiction);
            }

            let touching = self.cell_constraints[cell.index()].clone();
            for id in touching {
                let mut constraint = self.constraints[id.index()]
                    .take()
                    .expect("constraint not already taken");
                let result = constraint.quick_update(self, cell);
                self.constraints[id.index()] = Some(constraint);
                result?;
            }
        }

        Ok(())
    }

    /// Box-line reduction: when a digit's remaining cells in one uniqueness region all fall
    /// inside a second region, it can be purged from the rest of that second region.
    fn apply_locked_candidates(&mut self) -> SolveResult<bool> {
        let region_ids = self.no_repeats_ids.clone();
        let mut changed = false;

        for &region_id in &region_ids {
            for digit in 1..=9u8 {
                let locked = match self.constraint(region_id).as_no_repeats().and_then(|r| r.locked_mask(digit)) {
                    Some(mask) if !mask.is_empty() => mask,
                    _ => continue
                };

                for &other_id in &region_ids {
                    if other_id == region_id {
                        continue;
                    }

                    let other_mask = match self.constraint(other_id).as_no_repeats() {
                        Some(r) => r.region_mask(),
                        None => continue
                    };

                    if other_mask == locked {
                        continue;
                    }

                    if (locked & other_mask) == locked {
                        let to_clear = other_mask & !locked;
                        for cell in to_clear {
                            if self.cell(cell).possibles().contains(digit as usize) {
                                self.remove_candidate(cell, digit)?;
                                changed = true;
                            }
                        }
                    }
                }
            }
        }

        Ok(changed)
    }

    /// Chain-level contradiction pruning: for each candidate still reachable through
    /// `forcing_values`, BFS the set of candidates it would force; if that set contains a
    /// mutually contradicting pair, assigning the candidate is itself impossible. Cheaper than
    /// bifurcation since it reasons about the existing graphs rather than cloning the board.
    fn quick_bifurcation_check(&mut self) -> SolveResult<bool> {
        let candidates: Vec<Candidate> = self.graphs.forcing_values.nodes().collect();
        let mut changed = false;

        for candidate in candidates {
            if !self.cells[candidate.cell.index()].possibles().contains(candidate.value as usize) {
                continue;
            }

            let reachable = self.graphs.forcing_reachable(candidate);
            if self.graphs.reachable_set_self_contradicts(&reachable) {
                debug!(
                    "forcing chain from {} = {} reaches a contradiction, eliminating it",
                    candidate.cell, candidate.value
                );
                self.remove_candidate(candidate.cell, candidate.value)?;
                changed = true;
            }
        }

        Ok(changed)
    }

    pub(crate) fn propagate(&mut self) -> SolveResult<()> {
        self.drain_queue()?;

        loop {
            let locked_changed = self.apply_locked_candidates()?;
            let chain_changed = self.quick_bifurcation_check()?;
            trace!("propagation pass: locked_candidates={locked_changed} forcing_chains={chain_changed}");

            if locked_changed || chain_changed {
                self.drain_queue()?;
            } else {
                break;
            }
        }

        Ok(())
    }

    fn final_constraint_check(&self) -> bool {
        self.constraints
            .iter()
            .all(|c| c.as_ref().expect("constraint present at final check").check(self))
    }

    /// True for a board carrying nothing but the standard row/column/box regions and no
    /// givens: a board in this state has billions of valid completions, so solving it to
    /// completion is both pointless and, via bifurcation alone, computationally absurd.
    fn is_underconstrained(&self) -> bool {
        self.constraints.len() == self.no_repeats_ids.len()
            && self.cells.iter().all(|cell| cell.possibles().len() == 9)
    }

    /// Runs the propagation loop to a fixed point, bifurcating when it stalls short of a full
    /// solution. Mutates `self` into the unique solution on success.
    pub fn solve(&mut self) -> SolveResult<()> {
        if self.is_underconstrained() {
            debug!("board carries only the standard regions and no givens, refusing to solve");
            return Err(SolveError::MultipleSolutionsFound);
        }

        self.solve_at_depth(0)
    }

    pub(crate) fn solve_at_depth(&mut self, depth: u32) -> SolveResult<()> {
        trace!("solving at bifurcation depth {depth}");
        self.propagate()?;

        if self.is_fully_solved() {
            return if self.final_constraint_check() {
                debug!("depth {depth}: board fully solved");
                Ok(())
            } else {
                debug!("depth {depth}: fully assigned board fails a final constraint check");
                Err(SolveError::Contradiction)
            };
        }

        if depth >= self.config.max_bifurcation_level {
            debug!("depth {depth}: bifurcation depth limit reached with cells unsolved");
            return Err(SolveError::NoBifurcationsLeft);
        }

        bifurcation::bifurcate(self, depth)
    }

    /// Enqueues every cell for a fresh round of propagation; used after seeding givens onto an
    /// already-constructed board.
    pub fn requeue_all(&mut self) {
        for id in CellId::all() {
            self.enqueue(id);
        }
    }

    /// Projects the board's solved cells onto a [`SudokuGrid`], leaving unsolved cells blank.
    pub fn to_grid(&self) -> SudokuGrid {
        let mut grid = SudokuGrid::empty();
        for cell in &self.cells {
            if let Some(value) = cell.value() {
                grid.set(cell.id().row(), cell.id().column(), Some(value));
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Clone for Board {
    fn clone(&self) -> Board {
        Board {
            cells: self.cells.clone(),
            constraints: self
                .constraints
                .iter()
                .map(|slot| slot.as_ref().map(|c| c.clone_box()))
                .collect(),
            cell_constraints: self.cell_constraints.clone(),
            no_repeats_ids: self.no_repeats_ids.clone(),
            graphs: self.graphs.clone(),
            queue: self.queue.clone(),
            config: self.config
        }
    }
}

impl std::ops::Index<(u8, u8)> for Board {
    type Output = Cell;

    fn index(&self, (row, column): (u8, u8)) -> &Cell {
        self.cell(CellId::from_row_column(row, column))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_grid(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_a_given_propagates_to_peers() {
        let mut board = Board::new();
        board.add_given(CellId::from_row_column(0, 0), 5).unwrap();
        board.requeue_all();
        board.propagate().unwrap();
        assert!(!board.cell(CellId::from_row_column(0, 1)).possibles().contains(5));
        assert!(!board.cell(CellId::from_row_column(1, 0)).possibles().contains(5));
        assert!(!board.cell(CellId::from_row_column(1, 1)).possibles().contains(5));
    }

    #[test]
    fn contradictory_givens_are_rejected() {
        let mut board = Board::new();
        board.add_given(CellId::from_row_column(0, 0), 5).unwrap();
        board.add_given(CellId::from_row_column(0, 1), 5).unwrap();
        board.requeue_all();
        assert_eq!(board.propagate(), Err(SolveError::Contradiction));
    }

    #[test]
    fn underconstrained_board_is_multiple_not_impossible() {
        let mut board = Board::new();
        let result = board.solve();
        assert_eq!(result, Err(SolveError::MultipleSolutionsFound));
    }
}
