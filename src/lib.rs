// Library exports for the Codenjoy snake bot
// This allows the replay tools and other utilities to use the core decision logic

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod pathfinder;
pub mod policy;
pub mod replay;
pub mod safety;
pub mod simple_profiler;
pub mod types;
