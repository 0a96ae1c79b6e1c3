// Grid model: bounds membership and 4-connected adjacency on a square board

use crate::types::Cell;

/// Square board with cells in `[0, size)` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        Grid { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// True if the cell lies on the board
    pub fn contains(&self, cell: Cell) -> bool {
        within_bounds(cell, self.size)
    }
}

/// True iff both coordinates are in `[0, size)`
pub fn within_bounds(cell: Cell, size: i32) -> bool {
    cell.x >= 0 && cell.x < size && cell.y >= 0 && cell.y < size
}

/// The four axis-aligned neighbours in fixed order: +x, -x, +y, -y.
/// No bounds filtering; callers decide what is passable.
/// Saturates at the `i32` limits, which are never on a board.
pub fn neighbors(cell: Cell) -> [Cell; 4] {
    [
        Cell::new(cell.x.saturating_add(1), cell.y),
        Cell::new(cell.x.saturating_sub(1), cell.y),
        Cell::new(cell.x, cell.y.saturating_add(1)),
        Cell::new(cell.x, cell.y.saturating_sub(1)),
    ]
}

/// Calculates Manhattan distance between two cells
pub fn manhattan_distance(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_bounds_edges() {
        assert!(within_bounds(Cell::new(0, 0), 10));
        assert!(within_bounds(Cell::new(9, 9), 10));
        assert!(!within_bounds(Cell::new(10, 0), 10));
        assert!(!within_bounds(Cell::new(0, -1), 10));
        assert!(!within_bounds(Cell::new(-1, 5), 10));
    }

    #[test]
    fn test_grid_contains_matches_free_function() {
        let grid = Grid::new(5);
        assert!(grid.contains(Cell::new(4, 4)));
        assert!(!grid.contains(Cell::new(5, 4)));
    }

    #[test]
    fn test_neighbors_fixed_order_unfiltered() {
        let n = neighbors(Cell::new(0, 0));
        assert_eq!(
            n,
            [
                Cell::new(1, 0),
                Cell::new(-1, 0),
                Cell::new(0, 1),
                Cell::new(0, -1),
            ]
        );
    }

    #[test]
    fn test_neighbors_saturate_at_integer_limits() {
        let n = neighbors(Cell::new(i32::MAX, i32::MIN));
        assert_eq!(n[0], Cell::new(i32::MAX, i32::MIN));
        assert_eq!(n[3], Cell::new(i32::MAX, i32::MIN));
        assert!(n.iter().all(|&cell| !within_bounds(cell, 10)));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(Cell::new(0, 0), Cell::new(3, 4)), 7);
        assert_eq!(manhattan_distance(Cell::new(2, 2), Cell::new(2, 2)), 0);
    }
}
