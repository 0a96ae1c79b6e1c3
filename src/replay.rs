// Replay module for analyzing historical game states and debugging decision-making
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Replay the policy on historical states
// 3. Compare logged vs replayed moves
// 4. Generate detailed analysis reports

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::error::ReplayError;
use crate::policy::{Decision, DecisionPolicy, DecisionReason};
use crate::types::{BoardSnapshot, Direction};

/// Represents a single log entry from the debug JSONL file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogEntry {
    pub turn: i32,
    pub chosen_move: String,
    #[serde(default)]
    pub reason: Option<DecisionReason>,
    pub board: BoardSnapshot,
    #[serde(default)]
    pub timestamp: String,
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub matches: bool,
    pub original_reason: Option<DecisionReason>,
    pub replayed_reason: DecisionReason,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    policy: DecisionPolicy,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine {
            policy: DecisionPolicy::new(config.policy),
            verbose,
        }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<LogEntry>, ReplayError> {
        let file = File::open(log_path.as_ref()).map_err(ReplayError::Open)?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ReplayError::ReadLine {
                line: line_num + 1,
                source,
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry =
                serde_json::from_str(&line).map_err(|source| ReplayError::ParseLine {
                    line: line_num + 1,
                    source,
                })?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Runs the policy on a single board state
    pub fn replay_turn(&self, board: &BoardSnapshot) -> (Decision, u128) {
        let start_time = Instant::now();
        let decision = self.policy.decide_with_trace(board);
        (decision, start_time.elapsed().as_micros())
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &LogEntry) -> Result<ReplayResult, ReplayError> {
        if self.verbose {
            info!("Replaying turn {}...", entry.turn);
        }

        let original_move: Direction = entry.chosen_move.parse()?;
        let (decision, computation_time) = self.replay_turn(&entry.board);
        let matches = original_move == decision.direction;

        let result = ReplayResult {
            turn: entry.turn,
            original_move,
            replayed_move: decision.direction,
            matches,
            original_reason: entry.reason,
            replayed_reason: decision.reason,
            computation_time_us: computation_time,
        };

        if self.verbose {
            if matches {
                info!(
                    "Turn {}: ✓ MATCH - {} ({}, time: {}µs)",
                    entry.turn, decision.direction, decision.reason, computation_time
                );
            } else {
                warn!(
                    "Turn {}: ✗ MISMATCH - Original: {}, Replayed: {} ({}, time: {}µs)",
                    entry.turn, original_move, decision.direction, decision.reason, computation_time
                );
            }
        }

        Ok(result)
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[LogEntry]) -> Vec<ReplayResult> {
        let mut results = Vec::new();

        for entry in entries {
            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                }
            }
        }

        results
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[LogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, ReplayError> {
        let mut results = Vec::new();

        for &turn_num in turn_numbers {
            let entry = find_turn(entries, turn_num)?;

            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", turn_num, e);
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results
                .iter()
                .map(|r| r.computation_time_us as f64)
                .sum::<f64>()
                / results.len() as f64;

            println!("Average Computation Time:   {:.1}µs\n", avg_time);
        }

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                let original_reason = result
                    .original_reason
                    .map_or("unknown", |reason| reason.as_str());
                println!(
                    "Turn {}: {} ({}) → {} ({})",
                    result.turn,
                    result.original_move,
                    original_reason,
                    result.replayed_move,
                    result.replayed_reason
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[LogEntry],
        expected_moves: &[(i32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), ReplayError> {
        for (turn, acceptable) in expected_moves {
            let entry = find_turn(entries, *turn)?;
            let actual_move: Direction = entry.chosen_move.parse()?;

            if !acceptable.contains(&actual_move) {
                return Err(ReplayError::UnexpectedMove {
                    turn: *turn,
                    expected: acceptable.clone(),
                    actual: actual_move,
                });
            }
        }

        Ok(())
    }
}

fn find_turn(entries: &[LogEntry], turn: i32) -> Result<&LogEntry, ReplayError> {
    entries
        .iter()
        .find(|e| e.turn == turn)
        .ok_or(ReplayError::TurnNotFound(turn))
}
