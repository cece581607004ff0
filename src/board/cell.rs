use crate::board::ids::CellId;
use crate::utilities::USizeSet;

/// One square of the grid: a stable identity plus the set of digits it could still hold.
///
/// Mirrors the teacher's flat-`Vec<Option<usize>>` cell representation in spirit, but replaces
/// "a single resolved digit or nothing" with a candidate bitset, since propagation needs to
/// narrow possibilities incrementally rather than jump straight to a final value.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    possibles: USizeSet
}

impl Cell {
    pub fn new(id: CellId) -> Cell {
        Cell {
            id,
            possibles: USizeSet::new_all(1, 9).expect("1..=9 is a valid bound")
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn possibles(&self) -> &USizeSet {
        &self.possibles
    }

    /// The cell's resolved digit, if propagation has narrowed it to a single candidate.
    pub fn value(&self) -> Option<u8> {
        self.possibles.single_value().map(|v| v as u8)
    }

    pub fn is_solved(&self) -> bool {
        self.possibles.len() == 1
    }

    pub fn is_contradictory(&self) -> bool {
        self.possibles.is_empty()
    }

    /// Removes `value` from the candidate set. Returns whether it was actually present.
    pub fn remove(&mut self, value: u8) -> bool {
        self.possibles.remove(value as usize).expect("value in 1..=9")
    }

    /// Narrows the candidate set down to exactly `{value}`, as when assigning a given digit.
    pub fn assign(&mut self, value: u8) {
        self.possibles = USizeSet::singleton(1, 9, value as usize).expect("value in 1..=9");
    }

    pub fn intersect_with(&mut self, other: &USizeSet) {
        self.possibles.intersect_with(other).expect("both bounded to 1..=9");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_all_candidates() {
        let cell = Cell::new(CellId::new(0));
        assert_eq!(cell.possibles().len(), 9);
        assert_eq!(cell.value(), None);
    }

    #[test]
    fn assign_narrows_to_singleton() {
        let mut cell = Cell::new(CellId::new(0));
        cell.assign(5);
        assert_eq!(cell.value(), Some(5));
        assert!(cell.is_solved());
    }

    #[test]
    fn remove_all_is_contradictory() {
        let mut cell = Cell::new(CellId::new(0));
        for value in 1..=9 {
            cell.remove(value);
        }
        assert!(cell.is_contradictory());
    }
}
