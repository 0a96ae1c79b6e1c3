// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the snake bot

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub policy: PolicyConfig,
    pub debug: DebugConfig,
}

/// Knobs for the per-tick decision policy
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Head for the stone once the body is longer than this. Absent disables detours.
    #[serde(default)]
    pub detour_length_threshold: Option<usize>,
    /// Treat the stone as passable while routing toward it
    pub exclude_hazard_on_detour: bool,
    /// Past the threshold with no route to the stone, step to the first open
    /// neighbour rather than chase food
    #[serde(default)]
    pub unwind_when_long: bool,
    /// Run the one-step trap check before taking a food step
    pub check_safety_after_eating: bool,
    /// Keep the tail in the simulated body when the move eats food
    pub grow_on_eat: bool,
    /// Route to the stone when no safe food step exists
    pub hazard_fallback: bool,
    /// Order in which neighbouring cells are tried when no path is usable
    pub fallback_priority: Vec<Direction>,
    /// Emitted when nothing else applies
    pub default_direction: Direction,
}

impl PolicyConfig {
    /// Always chase food; no detours, no trap check
    pub fn greedy() -> Self {
        PolicyConfig {
            detour_length_threshold: None,
            exclude_hazard_on_detour: false,
            unwind_when_long: false,
            check_safety_after_eating: false,
            grow_on_eat: false,
            hazard_fallback: false,
            fallback_priority: Self::standard_priority(),
            default_direction: Direction::Up,
        }
    }

    /// Past length 30 try the stone (still an obstacle), otherwise unwind;
    /// trap check on food
    pub fn cautious() -> Self {
        PolicyConfig {
            detour_length_threshold: Some(30),
            exclude_hazard_on_detour: false,
            unwind_when_long: true,
            check_safety_after_eating: true,
            grow_on_eat: false,
            hazard_fallback: false,
            fallback_priority: Self::standard_priority(),
            default_direction: Direction::Up,
        }
    }

    /// Detour from length 40 straight onto the stone, and fall back to it
    /// whenever no safe food step exists
    pub fn detouring() -> Self {
        PolicyConfig {
            detour_length_threshold: Some(39),
            exclude_hazard_on_detour: true,
            unwind_when_long: false,
            check_safety_after_eating: true,
            grow_on_eat: true,
            hazard_fallback: true,
            fallback_priority: Self::standard_priority(),
            default_direction: Direction::Up,
        }
    }

    fn standard_priority() -> Vec<Direction> {
        vec![Direction::Left, Direction::Right, Direction::Up, Direction::Down]
    }

    /// True if a body of this length should head for the stone
    pub fn detour_active(&self, snake_length: usize) -> bool {
        self.detour_length_threshold
            .map_or(false, |threshold| snake_length > threshold)
    }
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&contents)?)
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            policy: PolicyConfig::detouring(),
            debug: DebugConfig {
                enabled: false,
                log_file_path: "snake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
