//! A plain 9x9 grid of clues/solved digits, independent of the propagation engine: the format
//! used to read a puzzle in and print a board out.
//!
//! Simplified from the teacher's `SudokuGrid` (generic `block_width`/`block_height`, arbitrary
//! size) down to the fixed 9x9/`1..=9` domain this spec always works with; the box-drawing
//! `Display` helpers (`line`/`top_row`/`thin_separator_line`/`thick_separator_line`/
//! `bottom_row`/`content_row`) are reused near-verbatim.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellId, SIZE};
use crate::error::{GridError, GridResult};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SudokuGrid {
    cells: Vec<Option<u8>>
}

impl SudokuGrid {
    pub fn empty() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CellId::all().count()]
        }
    }

    fn index(row: u8, column: u8) -> usize {
        CellId::from_row_column(row, column).index()
    }

    pub fn get(&self, row: u8, column: u8) -> Option<u8> {
        self.cells[SudokuGrid::index(row, column)]
    }

    pub fn set(&mut self, row: u8, column: u8, value: Option<u8>) {
        self.cells[SudokuGrid::index(row, column)] = value;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Parses a plain-text grid: 9 lines of 9 characters, `.` or `0` for a blank cell.
    pub fn parse_text(text: &str) -> GridResult<SudokuGrid> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != SIZE as usize {
            return Err(GridError::WrongRowCount);
        }

        let mut grid = SudokuGrid::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.trim().chars().collect();
            if chars.len() != SIZE as usize {
                return Err(GridError::WrongCellCount);
            }

            for (column, &ch) in chars.iter().enumerate() {
                let value = match ch {
                    '.' | '0' => None,
                    '1'..='9' => Some(ch.to_digit(10).unwrap() as u8),
                    _ => return Err(GridError::InvalidDigit)
                };
                grid.set(row as u8, column as u8, value);
            }
        }

        Ok(grid)
    }

    /// Parses a comma-separated clue string, `81` entries long, blanks written as empty fields.
    pub fn parse_clue_string(code: &str) -> GridResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();
        if entries.len() != (SIZE as usize) * (SIZE as usize) {
            return Err(GridError::WrongCellCount);
        }

        let mut grid = SudokuGrid::empty();
        for (index, entry) in entries.iter().enumerate() {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let value: u8 = entry.parse()?;
            if value == 0 || value > 9 {
                return Err(GridError::InvalidDigit);
            }

            let cell = CellId::new(index);
            grid.set(cell.row(), cell.column(), Some(value));
        }

        Ok(grid)
    }

    pub fn to_clue_string(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map(|v| v.to_string()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Seeds a fresh [`Board`] with this grid's clues as givens.
    pub fn to_board(&self) -> crate::error::SolveResult<Board> {
        let mut board = Board::new();
        for cell in CellId::all() {
            if let Some(value) = self.get(cell.row(), cell.column()) {
                board.add_given(cell, value)?;
            }
        }
        board.requeue_all();
        Ok(board)
    }
}

fn to_char(cell: Option<u8>) -> char {
    match cell {
        Some(n) => (b'0' + n) as char,
        None => ' '
    }
}

#[allow(clippy::too_many_arguments)]
fn line(start: char, thick_sep: char, thin_sep: char, segment: impl Fn(u8) -> char, pad: char, end: char, newline: bool) -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        } else if x % 3 == 0 {
            result.push(thick_sep);
        } else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, row: u8) -> String {
    line('║', '║', '│', |column| to_char(grid.get(row, column)), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row == 0 {
                f.write_str(&top_row())?;
            } else if row % 3 == 0 {
                f.write_str(&thick_separator_line())?;
            } else {
                f.write_str(&thin_separator_line())?;
            }

            f.write_str(&content_row(self, row))?;
        }

        f.write_str(&bottom_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_string_roundtrip() {
        let mut grid = SudokuGrid::empty();
        grid.set(0, 0, Some(5));
        grid.set(8, 8, Some(9));
        let code = grid.to_clue_string();
        let parsed = SudokuGrid::parse_clue_string(&code).unwrap();
        assert_eq!(grid, parsed);
    }

    #[test]
    fn wrong_cell_count_is_rejected() {
        assert_eq!(SudokuGrid::parse_clue_string("1,2,3"), Err(GridError::WrongCellCount));
    }

    #[test]
    fn text_grid_parses_blanks_and_digits() {
        let text = "123456789\n".repeat(9);
        let grid = SudokuGrid::parse_text(&text).unwrap();
        assert!(grid.is_full());
        assert_eq!(grid.get(0, 0), Some(1));
    }
}
