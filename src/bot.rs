// Snake bot service object
//
// Owns the decision policy and the debug logger and exposes one method per
// game endpoint. The HTTP layer in handler.rs only forwards to these.

use log::info;
use serde_json::{json, Value};
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::policy::{Decision, DecisionPolicy};
use crate::types::BoardSnapshot;

/// Snake bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    policy: DecisionPolicy,
    logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and no debug log
    pub fn new(config: Config) -> Self {
        Self::with_logger(config, DebugLogger::disabled())
    }

    /// Creates a new Bot that records every move to `logger`
    pub fn with_logger(config: Config, logger: DebugLogger) -> Self {
        Bot {
            policy: DecisionPolicy::new(config.policy),
            logger,
        }
    }

    /// Returns bot metadata
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": "codenjoy-snake-rust",
            "game": "snake",
            "version": env!("CARGO_PKG_VERSION"),
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, turn: i32, board: &BoardSnapshot) {
        info!("GAME START (turn {}, board {}x{})", turn, board.size, board.size);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, turn: i32, board: &BoardSnapshot) {
        info!("GAME OVER (turn {}, length {})", turn, board.snake_length());
    }

    /// Computes the next move and returns it with the reason it was chosen
    pub fn decide(&self, turn: i32, board: &BoardSnapshot) -> Decision {
        let start_time = Instant::now();
        let decision = self.policy.decide_with_trace(board);

        info!(
            "Turn {}: Chose {} ({}, length: {}, time: {}µs)",
            turn,
            decision.direction,
            decision.reason,
            board.snake_length(),
            start_time.elapsed().as_micros()
        );

        if self.logger.is_enabled() {
            self.logger.log_move(turn, board.clone(), decision);
        }
        decision
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    pub fn get_move(&self, turn: i32, board: &BoardSnapshot) -> Value {
        let decision = self.decide(turn, board);
        json!({ "move": decision.direction.as_str() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn snapshot() -> BoardSnapshot {
        BoardSnapshot {
            size: 10,
            head: Some(Cell::new(5, 5)),
            body: vec![Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3)],
            food: vec![Cell::new(5, 8)],
            hazards: vec![Cell::new(0, 9)],
            barriers: vec![],
        }
    }

    #[test]
    fn test_move_response_uses_uppercase_token() {
        let bot = Bot::new(Config::default_hardcoded());
        let response = bot.get_move(1, &snapshot());
        assert_eq!(response["move"], "UP");
    }

    #[test]
    fn test_info_reports_api_version() {
        let bot = Bot::new(Config::default_hardcoded());
        let info = bot.info();
        assert_eq!(info["apiversion"], "1");
        assert_eq!(info["author"], "codenjoy-snake-rust");
    }

    #[test]
    fn test_disabled_logger_leaves_decision_unchanged() {
        let bot = Bot::new(Config::default_hardcoded());
        let decision = bot.decide(3, &snapshot());
        assert_eq!(decision.direction, crate::types::Direction::Up);
    }

    #[tokio::test]
    async fn test_enabled_logger_records_each_move() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.jsonl");
        let logger = DebugLogger::new(true, path.to_str().unwrap()).await;
        let bot = Bot::with_logger(Config::default_hardcoded(), logger);

        bot.decide(4, &snapshot());

        // The write is spawned; give it a few scheduler turns to land
        let mut contents = String::new();
        for _ in 0..50 {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            contents = tokio::fs::read_to_string(&path).await.unwrap_or_default();
            if !contents.is_empty() {
                break;
            }
        }

        let entry: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(entry["turn"], 4);
        assert_eq!(entry["chosen_move"], "UP");
    }

    #[test]
    fn test_missing_head_still_answers() {
        let bot = Bot::new(Config::default_hardcoded());
        let mut board = snapshot();
        board.head = None;
        let response = bot.get_move(7, &board);
        assert_eq!(response["move"], "UP");
    }
}
