// One-step trap check
//
// Before committing to a food move we pretend the snake has already reached the
// target and ask whether its head would have anywhere left to go. This is a
// cheap heuristic, not a reachability proof: an open neighbour may still lead
// into a dead end later.

use crate::grid::{neighbors, Grid};
use crate::obstacles::ObstacleSet;
use crate::simple_profiler::{Category, ProfileGuard};
use crate::types::Cell;

/// Body shape right after the snake's head lands on `target` via `candidate_step`.
///
/// The target and step are prepended to the current body. One tail segment is
/// dropped to model the shift, unless `grows` is set (the move eats food).
pub fn simulate_body(candidate_step: Cell, target: Cell, body: &[Cell], grows: bool) -> Vec<Cell> {
    let mut future = Vec::with_capacity(body.len() + 2);
    future.push(target);
    future.push(candidate_step);
    future.extend_from_slice(body);
    if !grows {
        future.pop();
    }
    future
}

/// True if at least one neighbour of the simulated head is on the board and
/// clear of both the simulated body and the static barriers.
pub fn is_escapable_after(
    grid: &Grid,
    candidate_step: Cell,
    target: Cell,
    barriers: &ObstacleSet,
    body: &[Cell],
    grows: bool,
) -> bool {
    let _guard = ProfileGuard::new(Category::SafetyCheck);

    let mut blocked = barriers.clone();
    blocked.extend(simulate_body(candidate_step, target, body, grows));

    neighbors(target)
        .iter()
        .any(|next| grid.contains(*next) && !blocked.contains(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_body_drops_tail_when_not_growing() {
        let body = [Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)];
        let future = simulate_body(Cell::new(2, 3), Cell::new(2, 4), &body, false);
        assert_eq!(
            future,
            vec![Cell::new(2, 4), Cell::new(2, 3), Cell::new(2, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn test_simulate_body_keeps_tail_when_growing() {
        let body = [Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)];
        let future = simulate_body(Cell::new(2, 3), Cell::new(2, 4), &body, true);
        assert_eq!(future.len(), 5);
        assert_eq!(future.last(), Some(&Cell::new(2, 0)));
    }

    #[test]
    fn test_open_board_is_escapable() {
        let grid = Grid::new(10);
        let body = [Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3)];
        assert!(is_escapable_after(
            &grid,
            Cell::new(5, 6),
            Cell::new(5, 8),
            &ObstacleSet::new(),
            &body,
            true,
        ));
    }

    #[test]
    fn test_corner_pocket_boxed_in_by_barriers_is_a_trap() {
        // Target at (0,0): left and down are off the board, (1,0) is a wall,
        // (0,1) is the step the head arrives from.
        let grid = Grid::new(10);
        let barriers: ObstacleSet = vec![Cell::new(1, 0)].into_iter().collect();
        let body = [Cell::new(0, 2), Cell::new(0, 3)];

        assert!(!is_escapable_after(
            &grid,
            Cell::new(0, 1),
            Cell::new(0, 0),
            &barriers,
            &body,
            false,
        ));
    }

    #[test]
    fn test_simulated_body_filling_every_neighbor_is_a_trap() {
        // Body coils around (5,5) so after arriving all four neighbours are taken
        let grid = Grid::new(10);
        let step = Cell::new(5, 4);
        let target = Cell::new(5, 5);
        let body = [
            Cell::new(5, 3),
            Cell::new(6, 3),
            Cell::new(6, 4),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
            Cell::new(4, 5),
            Cell::new(4, 4),
        ];

        assert!(!is_escapable_after(
            &grid,
            step,
            target,
            &ObstacleSet::new(),
            &body,
            true,
        ));
    }

    #[test]
    fn test_dropped_tail_frees_the_only_exit() {
        // (4,5) is the tail; it vacates only when the snake does not grow
        let grid = Grid::new(10);
        let step = Cell::new(5, 4);
        let target = Cell::new(5, 5);
        let body = [
            Cell::new(5, 3),
            Cell::new(6, 3),
            Cell::new(6, 4),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
            Cell::new(4, 5),
        ];

        assert!(!is_escapable_after(&grid, step, target, &ObstacleSet::new(), &body, true));
        assert!(is_escapable_after(&grid, step, target, &ObstacleSet::new(), &body, false));
    }

    #[test]
    fn test_barriers_are_not_mutated() {
        let grid = Grid::new(10);
        let barriers: ObstacleSet = vec![Cell::new(9, 9)].into_iter().collect();
        let body = [Cell::new(1, 1)];
        is_escapable_after(&grid, Cell::new(1, 2), Cell::new(1, 3), &barriers, &body, false);
        assert_eq!(barriers.len(), 1);
    }
}
