//! Puzzle generation: filling a blank board to a full solution, then stripping clues back out
//! while a unique solution survives.
//!
//! `Generator::fill` ports the teacher's `Generator::fill_rec`/`shuffle` shuffled-backtracking
//! fill from `sudoku_generator.rs` to drive a [`Board`] directly instead of the teacher's
//! `Sudoku<C>`. The teacher's `Reducer`/`Reduction`/`ReductionPrioritizer` difficulty-tuning
//! machinery is not ported: it depends on a constraint-level `list_reductions`/`reduce`/`revert`
//! API this crate's simpler `Constraint` trait doesn't have, so `strip_to_unique` below is a
//! plain "clear a clue, re-solve, back off on ambiguity" loop instead.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::board::{Board, CellId, SIZE};
use crate::error::{SolveError, SolveResult};
use crate::grid::SudokuGrid;

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>) -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {
    pub fn new_defaults() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Generator<R> {
        Generator { rng }
    }

    fn fill_rec(&mut self, board: &mut Board, index: usize) -> bool {
        if index == (SIZE as usize) * (SIZE as usize) {
            return true;
        }

        let cell = CellId::new(index);

        if board.cell(cell).is_solved() {
            return self.fill_rec(board, index + 1);
        }

        let candidates: Vec<u8> = board.cell(cell).possibles().iter().map(|v| v as u8).collect();
        for value in shuffle(&mut self.rng, candidates.into_iter()) {
            let mut trial = board.clone();
            if trial.assign_cell(cell, value).is_err() {
                continue;
            }
            if trial.propagate().is_err() {
                continue;
            }
            if self.fill_rec(&mut trial, index + 1) {
                *board = trial;
                return true;
            }
        }

        false
    }

    /// Fills every blank cell of `board` to produce one full, constraint-satisfying grid.
    pub fn fill(&mut self, board: &mut Board) -> SolveResult<()> {
        if self.fill_rec(board, 0) {
            Ok(())
        } else {
            Err(SolveError::NoSolutionFound)
        }
    }

    /// Generates a fresh, fully-solved classic-Sudoku board.
    pub fn generate(&mut self) -> SolveResult<Board> {
        let mut board = Board::new();
        self.fill(&mut board)?;
        Ok(board)
    }
}

/// Clears clues from `grid` one at a time, in a shuffled order, keeping each removal only when
/// the board built from the remainder still has a unique solution.
pub fn strip_to_unique(rng: &mut impl Rng, grid: &SudokuGrid) -> SolveResult<SudokuGrid> {
    let mut working = grid.clone();
    let order = shuffle(rng, CellId::all());

    for cell in order {
        let value = match working.get(cell.row(), cell.column()) {
            Some(value) => value,
            None => continue
        };

        working.set(cell.row(), cell.column(), None);

        let still_unique = match working.to_board() {
            Ok(mut board) => matches!(board.solve(), Ok(())),
            Err(_) => false
        };

        if !still_unique {
            working.set(cell.row(), cell.column(), Some(value));
        }
    }

    Ok(working)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fill_produces_a_full_valid_board() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(1));
        let board = generator.generate().unwrap();
        assert!(board.is_fully_solved());
    }

    #[test]
    fn strip_to_unique_leaves_a_solvable_grid() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(2));
        let board = generator.generate().unwrap();
        let full_grid = board.to_grid();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stripped = strip_to_unique(&mut rng, &full_grid).unwrap();
        assert!(stripped.count_clues() <= full_grid.count_clues());

        let mut solved = stripped.to_board().unwrap();
        assert!(solved.solve().is_ok());
    }
}
