//! Trial-and-clone search, used once propagation alone stalls short of a full assignment.
//!
//! Grounded on the original Python source's `Board.bifurcate`: pick a cell, try each of its
//! remaining candidates in a cloned board, and reconcile the outcomes (a single surviving
//! branch is the answer; more than one means the puzzle has multiple solutions; zero means the
//! whole board was a dead end one level up).

use log::{debug, trace};

use crate::board::{Board, Cell, CellId};
use crate::error::{SolveError, SolveResult};

/// Whether `cell` is worth splitting on at all: bifurcating on an already-solved or
/// contradictory cell can't narrow anything.
fn is_bifurcation_candidate(cell: &Cell) -> bool {
    cell.possibles().len() >= 2
}

/// Picks the unsolved cell with the fewest remaining candidates, breaking ties by how many
/// other candidates it would force via the forcing-values graph — more forced candidates means
/// a wrong guess is caught sooner.
fn choose_bifurcation_cell(board: &Board) -> Option<CellId> {
    let chosen = board
        .cells()
        .filter(|cell| is_bifurcation_candidate(cell))
        .min_by_key(|cell| {
            let forced = cell
                .possibles()
                .iter()
                .map(|value| {
                    board
                        .graphs()
                        .forced_by(crate::board::Candidate::new(cell.id(), value as u8))
                        .count()
                })
                .sum::<usize>();
            (cell.possibles().len(), usize::MAX - forced)
        })
        .map(Cell::id);

    if let Some(cell) = chosen {
        debug!("bifurcation target {cell} ({} candidates)", board.cell(cell).possibles().len());
    }

    chosen
}

pub fn bifurcate(board: &mut Board, depth: u32) -> SolveResult<()> {
    let target = choose_bifurcation_cell(board).ok_or(SolveError::NoBifurcationsLeft)?;
    let candidates: Vec<u8> = board.cell(target).possibles().iter().map(|v| v as u8).collect();

    let mut solution: Option<Board> = None;
    let mut last_err = SolveError::NoSolutionFound;

    for value in candidates {
        trace!("depth {depth}: trying {target} = {value}");
        let mut trial = board.clone();
        let outcome = trial
            .assign_cell(target, value)
            .and_then(|_| trial.solve_at_depth(depth + 1));

        match outcome {
            Ok(()) => {
                debug!("depth {depth}: {target} = {value} reached a solution");
                if solution.is_some() {
                    return Err(SolveError::MultipleSolutionsFound);
                }
                solution = Some(trial);
            }
            Err(SolveError::Contradiction) => {
                trace!("depth {depth}: {target} = {value} contradicted");
                continue;
            }
            Err(SolveError::NoSolutionFound) => {
                last_err = SolveError::NoSolutionFound;
                continue;
            }
            Err(SolveError::NoBifurcationsLeft) => {
                last_err = SolveError::NoBifurcationsLeft;
                continue;
            }
            Err(SolveError::MultipleSolutionsFound) => return Err(SolveError::MultipleSolutionsFound)
        }
    }

    match solution {
        Some(trial) => {
            *board = trial;
            Ok(())
        }
        None => Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ids::CellId;

    const SOLVED: [[u8; 9]; 9] = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9]
    ];

    #[test]
    fn last_blank_cell_resolves_to_the_known_solution() {
        let mut board = Board::new();

        for row in 0..9u8 {
            for column in 0..9u8 {
                if (row, column) == (8, 8) {
                    continue;
                }
                let value = SOLVED[row as usize][column as usize];
                board.add_given(CellId::from_row_column(row, column), value).unwrap();
            }
        }

        board.requeue_all();
        board.solve().unwrap();
        assert_eq!(board[(8, 8)].value(), Some(SOLVED[8][8]));
    }
}
