use std::fmt::{self, Display, Formatter};

/// Side length of every board this crate solves. Variant Sudoku still means a 9x9 grid.
pub const SIZE: u8 = 9;
pub const CELL_COUNT: usize = (SIZE as usize) * (SIZE as usize);

/// Stable index of a cell in [`crate::board::Board`]'s arena. Cheap to copy, and meaningful
/// across a cloned board since cloning never reshuffles the arena.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CellId(u8);

impl CellId {
    pub fn new(index: usize) -> CellId {
        assert!(index < CELL_COUNT, "cell index {index} out of range");
        CellId(index as u8)
    }

    pub fn from_row_column(row: u8, column: u8) -> CellId {
        assert!(row < SIZE && column < SIZE, "row/column out of range");
        CellId(row * SIZE + column)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / SIZE
    }

    pub fn column(self) -> u8 {
        self.0 % SIZE
    }

    pub fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.column() / 3
    }

    pub fn all() -> impl Iterator<Item = CellId> {
        (0..CELL_COUNT).map(CellId::new)
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.column() + 1)
    }
}

/// Stable index of a constraint in [`crate::board::Board`]'s constraint arena.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ConstraintId(usize);

impl ConstraintId {
    pub fn new(index: usize) -> ConstraintId {
        ConstraintId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_column_roundtrip() {
        for row in 0..SIZE {
            for column in 0..SIZE {
                let id = CellId::from_row_column(row, column);
                assert_eq!(id.row(), row);
                assert_eq!(id.column(), column);
            }
        }
    }

    #[test]
    fn box_index_is_grouped_in_threes() {
        assert_eq!(CellId::from_row_column(0, 0).box_index(), 0);
        assert_eq!(CellId::from_row_column(2, 2).box_index(), 0);
        assert_eq!(CellId::from_row_column(0, 3).box_index(), 1);
        assert_eq!(CellId::from_row_column(8, 8).box_index(), 8);
    }
}
