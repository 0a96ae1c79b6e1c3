// A* pathfinding over the 4-connected board
//
// Open set is a binary heap with lazy deletion: a cell may be pushed more than
// once when a cheaper route is found, and stale entries are skipped on pop.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{manhattan_distance, neighbors, Grid};
use crate::obstacles::ObstacleSet;
use crate::simple_profiler::{Category, ProfileGuard};
use crate::types::Cell;

/// Ordered cells from start to goal inclusive; empty when unreachable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn unreachable() -> Self {
        Path::default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// The cell after the start, if the path actually moves anywhere
    pub fn first_step(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }
}

/// Search node: f = g + h. Lower f first, then lower h, then earlier insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    cell: Cell,
    g: i32,
    h: i32,
    seq: u64,
}

impl SearchNode {
    fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every key is reversed
        other
            .f()
            .cmp(&self.f())
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `goal` avoiding `obstacles` and the board edge.
///
/// The start cell is never checked against the obstacle set, so the snake's own
/// head is a valid origin. The goal must be passable to be reached.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell, obstacles: &ObstacleSet) -> Path {
    let _guard = ProfileGuard::new(Category::PathSearch);

    if !grid.contains(start) || !grid.contains(goal) {
        return Path::unreachable();
    }

    let mut open = BinaryHeap::new();
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut best_g: HashMap<Cell, i32> = HashMap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut seq = 0u64;

    best_g.insert(start, 0);
    open.push(SearchNode {
        cell: start,
        g: 0,
        h: manhattan_distance(start, goal),
        seq,
    });

    while let Some(current) = open.pop() {
        if current.cell == goal {
            return reconstruct(&came_from, goal);
        }

        // Stale entry superseded by a cheaper push
        if best_g.get(&current.cell).map_or(false, |&g| current.g > g) {
            continue;
        }

        if !closed.insert(current.cell) {
            continue;
        }

        for neighbor in neighbors(current.cell) {
            if closed.contains(&neighbor)
                || !grid.contains(neighbor)
                || obstacles.contains(&neighbor)
            {
                continue;
            }

            let tentative_g = current.g + 1;
            let improves = best_g
                .get(&neighbor)
                .map_or(true, |&known| tentative_g < known);

            if improves {
                best_g.insert(neighbor, tentative_g);
                came_from.insert(neighbor, current.cell);
                seq += 1;
                open.push(SearchNode {
                    cell: neighbor,
                    g: tentative_g,
                    h: manhattan_distance(neighbor, goal),
                    seq,
                });
            }
        }
    }

    Path::unreachable()
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        cells.push(previous);
        current = previous;
    }
    cells.reverse();
    Path { cells }
}
