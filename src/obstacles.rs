// Per-tick obstacle set: static barriers (walls and stones) plus the snake body

use std::collections::HashSet;

use crate::types::{BoardSnapshot, Cell};

/// Cells a search must not enter during the current tick.
/// Built fresh from each snapshot and dropped at the end of the tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: HashSet<Cell>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        ObstacleSet::default()
    }

    /// Walls and stones only, without the snake
    pub fn statics(board: &BoardSnapshot) -> Self {
        board
            .barriers
            .iter()
            .chain(board.hazards.iter())
            .copied()
            .collect()
    }

    /// Static barriers plus the full body, head included
    pub fn for_tick(board: &BoardSnapshot) -> Self {
        let mut set = Self::statics(board);
        set.extend(board.body.iter().copied());
        set
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn remove(&mut self, cell: &Cell) -> bool {
        self.cells.remove(cell)
    }

    /// Copy of this set with one cell made passable
    pub fn without(&self, cell: &Cell) -> Self {
        let mut copy = self.clone();
        copy.remove(cell);
        copy
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Extend<Cell> for ObstacleSet {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}

impl FromIterator<Cell> for ObstacleSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        ObstacleSet {
            cells: iter.into_iter().collect(),
        }
    }
}
