//! The constraint interface and the default enumeration-based pruner shared by every concrete
//! constraint kind.
//!
//! The free-function default-method idiom here (`default_check`, `default_enumeration_pruner`)
//! is carried over from the teacher's `constraint/mod.rs`, which factored `check`/`check_cell`
//! into `default_check<C>`/`default_check_cell<C>` free functions callable from any `C:
//! Constraint + ?Sized`; the same shape now backs the propagation-pruning default instead of
//! the teacher's row/column/box validity check.

use std::any::Any;
use std::fmt::Debug;

use crate::board::graph::Candidate;
use crate::board::ids::CellId;
use crate::board::Board;
use crate::config::SolverConfig;
use crate::error::{SolveError, SolveResult};
use crate::utilities::USizeSet;

pub mod given;
pub mod no_repeats;
pub mod variants;

use no_repeats::NoRepeats;

/// Shared state every constraint carries: the cells it constrains.
#[derive(Debug, Clone)]
pub struct ConstraintBase {
    pub cells: Vec<CellId>
}

impl ConstraintBase {
    pub fn new(cells: Vec<CellId>) -> ConstraintBase {
        ConstraintBase { cells }
    }
}

/// One rule placed on the board: a uniqueness region, a given digit, a killer cage, and so on.
///
/// `quick_update` is the workhorse: it's called whenever one of the constraint's cells
/// changes, and should remove any candidates that are now provably impossible, pushing any
/// newly-shrunk cell back onto the board's propagation queue. `check` is the final-state
/// validator used once a board is fully assigned (or when bifurcation wants to know whether a
/// trial branch is still consistent at all).
pub trait Constraint: Debug {
    fn base(&self) -> &ConstraintBase;

    fn base_mut(&mut self) -> &mut ConstraintBase;

    fn cells(&self) -> &[CellId] {
        &self.base().cells
    }

    /// Called once, when the constraint is added to a board, to do any one-time setup (seeding
    /// the seen graph, narrowing obviously-impossible candidates, and so on).
    fn initialise(&mut self, _board: &mut Board) -> SolveResult<()> {
        Ok(())
    }

    /// Reacts to `changed` having lost one or more candidates. Returns whether this constraint
    /// itself narrowed anything further (the board decides whether to requeue from that).
    fn quick_update(&mut self, board: &mut Board, changed: CellId) -> SolveResult<bool>;

    /// Whether the cells touched by this constraint are jointly unsatisfiable given their
    /// current candidate sets. The default only checks for an emptied cell; concrete
    /// constraints override this with their own arithmetic where relevant.
    fn partial_assignment_invalid(&self, board: &Board) -> bool {
        default_partial_assignment_invalid(self, board)
    }

    /// Final-state check: true if every cell this constraint touches is both solved and
    /// mutually consistent.
    fn check(&self, board: &Board) -> bool {
        default_check(self, board)
    }

    /// Downcast hook used by locked-candidate logic, which needs to reach across regions.
    fn as_no_repeats(&self) -> Option<&NoRepeats> {
        None
    }

    fn as_no_repeats_mut(&mut self) -> Option<&mut NoRepeats> {
        None
    }

    fn clone_box(&self) -> Box<dyn Constraint>;

    fn as_any(&self) -> &dyn Any;
}

pub fn default_partial_assignment_invalid<C: Constraint + ?Sized>(this: &C, board: &Board) -> bool {
    this.cells().iter().any(|&cell| board.cell(cell).is_contradictory())
}

pub fn default_check<C: Constraint + ?Sized>(this: &C, board: &Board) -> bool {
    this.cells().iter().all(|&cell| board.cell(cell).is_solved()) && !this.partial_assignment_invalid(board)
}

/// Brute-forces every assignment of `cells` accepted by `is_valid`, then:
///
/// - narrows every cell's possibles to the union of values that appear in some valid
///   assignment,
/// - records a contradiction edge between any two candidates that never co-occur in a valid
///   assignment,
/// - records a forcing edge `a -> b` when every valid assignment containing `a` also fixes the
///   other cell to `b`.
///
/// Skips entirely (and reports no error) when the cartesian product of candidate counts
/// exceeds `config.max_assignment_product`, since brute force is not always affordable.
pub fn default_enumeration_pruner(
    cells: &[CellId],
    board: &mut Board,
    config: &SolverConfig,
    is_valid: &dyn Fn(&[u8]) -> bool
) -> SolveResult<()> {
    if cells.is_empty() {
        return Ok(());
    }

    let domains: Vec<Vec<u8>> = cells
        .iter()
        .map(|&cell| board.cell(cell).possibles().iter().map(|v| v as u8).collect())
        .collect();

    if domains.iter().any(|d| d.is_empty()) {
        return Err(SolveError::Contradiction);
    }

    let product: u64 = domains.iter().map(|d| d.len() as u64).product();
    if product > config.max_assignment_product {
        return Ok(());
    }

    let mut valid_assignments = Vec::new();
    let mut current = Vec::with_capacity(cells.len());
    enumerate_assignments(&domains, &mut current, is_valid, &mut valid_assignments);

    if valid_assignments.is_empty() {
        return Err(SolveError::Contradiction);
    }

    for (index, &cell) in cells.iter().enumerate() {
        let mut allowed: Vec<usize> = valid_assignments
            .iter()
            .map(|assignment| assignment[index] as usize)
            .collect();
        allowed.sort_unstable();
        allowed.dedup();

        let allowed_set = USizeSet::from_iter(1, 9, allowed).expect("values already in 1..=9");
        if board.cell(cell).possibles() != &allowed_set {
            board.narrow_cell(cell, &allowed_set)?;
        }
    }

    for i in 0..cells.len() {
        for j in (i + 1)..cells.len() {
            for &a in &domains[i] {
                let co_occurring: Vec<u8> = valid_assignments
                    .iter()
                    .filter(|assignment| assignment[i] == a)
                    .map(|assignment| assignment[j])
                    .collect();

                if co_occurring.is_empty() {
                    continue;
                }

                for &b in &domains[j] {
                    if !co_occurring.contains(&b) {
                        board
                            .graphs_mut()
                            .add_contradiction(Candidate::new(cells[i], a), Candidate::new(cells[j], b));
                    }
                }

                let mut unique = co_occurring.clone();
                unique.sort_unstable();
                unique.dedup();
                if unique.len() == 1 {
                    board
                        .graphs_mut()
                        .add_forcing(Candidate::new(cells[i], a), Candidate::new(cells[j], unique[0]));
                }
            }
        }
    }

    Ok(())
}

fn enumerate_assignments(
    domains: &[Vec<u8>],
    current: &mut Vec<u8>,
    is_valid: &dyn Fn(&[u8]) -> bool,
    out: &mut Vec<Vec<u8>>
) {
    if current.len() == domains.len() {
        if is_valid(current) {
            out.push(current.clone());
        }
        return;
    }

    let index = current.len();
    for &value in &domains[index] {
        current.push(value);
        enumerate_assignments(domains, current, is_valid, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn pruner_narrows_to_feasible_values() {
        let mut board = Board::new();
        let cells = vec![CellId::new(0), CellId::new(1)];
        let config = SolverConfig::default();
        let is_valid = |assignment: &[u8]| assignment[0] + assignment[1] == 3;
        default_enumeration_pruner(&cells, &mut board, &config, &is_valid).unwrap();
        assert_eq!(board.cell(cells[0]).possibles().iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(board.cell(cells[1]).possibles().iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn pruner_detects_contradiction() {
        let mut board = Board::new();
        let cells = vec![CellId::new(0)];
        let config = SolverConfig::default();
        let is_valid = |_: &[u8]| false;
        let result = default_enumeration_pruner(&cells, &mut board, &config, &is_valid);
        assert_eq!(result, Err(SolveError::Contradiction));
    }
}
