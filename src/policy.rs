// Per-tick decision policy
//
// Each tick is evaluated from scratch, in this order:
// 1. No head on the board -> default direction
// 2. Long snake -> route to the stone (detour), or unwind in place if enabled
// 3. Path to food whose first step passes the trap check
// 4. Route to the stone (if enabled), then the first open neighbour
// 5. Point at the stone, then at the neck, then the default direction
//
// Every branch ends in a Direction, so decide() is total over snapshots.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PolicyConfig;
use crate::grid::Grid;
use crate::obstacles::ObstacleSet;
use crate::pathfinder::find_path;
use crate::safety::is_escapable_after;
use crate::simple_profiler::{Category, ProfileGuard};
use crate::types::{BoardSnapshot, Cell, Direction};

/// Which policy step produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    NoActiveAgent,
    OffBoard,
    HazardDetour,
    Unwind,
    FoodPath,
    HazardFallback,
    LocalEscape,
    LastResortHazard,
    LastResortNeck,
    Default,
}

impl DecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionReason::NoActiveAgent => "no_active_agent",
            DecisionReason::OffBoard => "off_board",
            DecisionReason::HazardDetour => "hazard_detour",
            DecisionReason::Unwind => "unwind",
            DecisionReason::FoodPath => "food_path",
            DecisionReason::HazardFallback => "hazard_fallback",
            DecisionReason::LocalEscape => "local_escape",
            DecisionReason::LastResortHazard => "last_resort_hazard",
            DecisionReason::LastResortNeck => "last_resort_neck",
            DecisionReason::Default => "default",
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chosen direction together with the step that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub reason: DecisionReason,
}

impl Decision {
    fn new(direction: Direction, reason: DecisionReason) -> Self {
        Decision { direction, reason }
    }
}

/// Direction that moves `from` toward `to`, resolving the X axis first.
///
/// Returns `None` when the cells are equal: there is no move that stays put,
/// and callers must fall through rather than invent one.
pub fn direction_to(from: Cell, to: Cell) -> Option<Direction> {
    if to.x < from.x {
        Some(Direction::Left)
    } else if to.x > from.x {
        Some(Direction::Right)
    } else if to.y < from.y {
        Some(Direction::Down)
    } else if to.y > from.y {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Stateless decision engine; one instance serves every tick
#[derive(Debug, Clone)]
pub struct DecisionPolicy {
    config: PolicyConfig,
}

impl DecisionPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        DecisionPolicy { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Chooses the move for this tick
    pub fn decide(&self, board: &BoardSnapshot) -> Direction {
        self.decide_with_trace(board).direction
    }

    /// Chooses the move for this tick and reports which step chose it
    pub fn decide_with_trace(&self, board: &BoardSnapshot) -> Decision {
        let _guard = ProfileGuard::new(Category::Decision);

        let head = match board.head {
            Some(head) => head,
            None => {
                debug!("No head on the board, defaulting to {}", self.config.default_direction);
                return Decision::new(self.config.default_direction, DecisionReason::NoActiveAgent);
            }
        };

        let grid = Grid::new(board.size);
        if !grid.contains(head) {
            debug!("Head {} is off the board, defaulting to {}", head, self.config.default_direction);
            return Decision::new(self.config.default_direction, DecisionReason::OffBoard);
        }

        let obstacles = ObstacleSet::for_tick(board);
        let hazard = board.target_hazard();

        if self.config.detour_active(board.snake_length()) {
            if let Some(hazard) = hazard {
                let detour_obstacles = if self.config.exclude_hazard_on_detour {
                    obstacles.without(&hazard)
                } else {
                    obstacles.clone()
                };
                if let Some(direction) = step_toward(&grid, head, hazard, &detour_obstacles) {
                    debug!(
                        "Length {} over threshold, detouring to stone at {}",
                        board.snake_length(),
                        hazard
                    );
                    return Decision::new(direction, DecisionReason::HazardDetour);
                }
                debug!("Detour to stone at {} unreachable", hazard);
            }

            // Too long to eat: coil away from the body instead of chasing food
            if self.config.unwind_when_long {
                if let Some(direction) = self.first_open_direction(&grid, head, &obstacles) {
                    debug!("Length {} over threshold, unwinding {}", board.snake_length(), direction);
                    return Decision::new(direction, DecisionReason::Unwind);
                }
                return self.last_resort(board, head, hazard);
            }
        }

        if let Some(food) = board.target_food() {
            if let Some(direction) = self.safe_food_step(&grid, board, head, food, &obstacles) {
                return Decision::new(direction, DecisionReason::FoodPath);
            }
        }

        if self.config.hazard_fallback {
            if let Some(hazard) = hazard {
                let opened = obstacles.without(&hazard);
                if let Some(direction) = step_toward(&grid, head, hazard, &opened) {
                    debug!("No safe food step, falling back to stone at {}", hazard);
                    return Decision::new(direction, DecisionReason::HazardFallback);
                }
            }
        }

        if let Some(direction) = self.first_open_direction(&grid, head, &obstacles) {
            debug!("No usable path, escaping {}", direction);
            return Decision::new(direction, DecisionReason::LocalEscape);
        }

        self.last_resort(board, head, hazard)
    }

    /// Boxed in: point at the stone, then at the neck, then the default
    fn last_resort(&self, board: &BoardSnapshot, head: Cell, hazard: Option<Cell>) -> Decision {
        if let Some(direction) = hazard.and_then(|hazard| direction_to(head, hazard)) {
            debug!("Boxed in, pointing at stone");
            return Decision::new(direction, DecisionReason::LastResortHazard);
        }

        if let Some(direction) = board.body.get(1).and_then(|&neck| direction_to(head, neck)) {
            debug!("Boxed in, pointing at neck");
            return Decision::new(direction, DecisionReason::LastResortNeck);
        }

        Decision::new(self.config.default_direction, DecisionReason::Default)
    }

    /// First step toward food, provided the trap check (when enabled) passes
    fn safe_food_step(
        &self,
        grid: &Grid,
        board: &BoardSnapshot,
        head: Cell,
        food: Cell,
        obstacles: &ObstacleSet,
    ) -> Option<Direction> {
        let path = find_path(grid, head, food, obstacles);
        let step = path.first_step()?;

        if self.config.check_safety_after_eating {
            let statics = ObstacleSet::statics(board);
            let escapable = is_escapable_after(
                grid,
                step,
                food,
                &statics,
                &board.body,
                self.config.grow_on_eat,
            );
            if !escapable {
                debug!("Food at {} would trap the snake, skipping", food);
                return None;
            }
        }

        direction_to(head, step)
    }

    /// First neighbour in priority order that is on the board and unobstructed
    fn first_open_direction(
        &self,
        grid: &Grid,
        head: Cell,
        obstacles: &ObstacleSet,
    ) -> Option<Direction> {
        self.config
            .fallback_priority
            .iter()
            .copied()
            .find(|direction| {
                let next = direction.apply(&head);
                grid.contains(next) && !obstacles.contains(&next)
            })
    }
}

/// Direction of the first step of a shortest path, if one exists
fn step_toward(grid: &Grid, head: Cell, goal: Cell, obstacles: &ObstacleSet) -> Option<Direction> {
    let path = find_path(grid, head, goal, obstacles);
    path.first_step().and_then(|step| direction_to(head, step))
}
