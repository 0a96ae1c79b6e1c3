// Prints the board and the full decision trace for one logged turn
//
// Usage:
//   cargo run --bin diagnose_decision -- <log_file> <turn> [--config <path>]

use std::env;
use std::process;

use codenjoy_snake::config::Config;
use codenjoy_snake::grid::Grid;
use codenjoy_snake::obstacles::ObstacleSet;
use codenjoy_snake::pathfinder::find_path;
use codenjoy_snake::policy::DecisionPolicy;
use codenjoy_snake::replay::ReplayEngine;
use codenjoy_snake::safety::is_escapable_after;
use codenjoy_snake::types::{BoardSnapshot, Cell};

fn render(board: &BoardSnapshot) -> String {
    let mut out = String::new();
    // Highest y first so UP points up on screen
    for y in (0..board.size).rev() {
        for x in 0..board.size {
            let cell = Cell::new(x, y);
            let glyph = if board.head == Some(cell) {
                'H'
            } else if board.body.contains(&cell) {
                'o'
            } else if board.food.contains(&cell) {
                '*'
            } else if board.hazards.contains(&cell) {
                'S'
            } else if board.barriers.contains(&cell) {
                '#'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <game.jsonl> <turn_number> [--config <path>]", args[0]);
        process::exit(1);
    }

    let log_file = &args[1];
    let target_turn: i32 = match args[2].parse() {
        Ok(turn) => turn,
        Err(e) => {
            eprintln!("Turn number must be a valid integer: {}", e);
            process::exit(1);
        }
    };

    let config = match args.iter().position(|a| a == "--config") {
        Some(idx) => match args.get(idx + 1) {
            Some(path) => Config::from_file(path).unwrap_or_else(|e| {
                eprintln!("Warning: Could not load config from '{}': {}", path, e);
                Config::default_hardcoded()
            }),
            None => {
                eprintln!("Error: --config requires an argument");
                process::exit(1);
            }
        },
        None => Config::load_or_default(),
    };

    let engine = ReplayEngine::new(config.clone(), false);
    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    let entry = match entries.iter().find(|e| e.turn == target_turn) {
        Some(entry) => entry,
        None => {
            eprintln!("Turn {} not found in {}", target_turn, log_file);
            process::exit(1);
        }
    };
    let board = &entry.board;

    println!("═══════════════════════════════════════════════════════════");
    println!("Decision Diagnosis for Turn {}", target_turn);
    println!("═══════════════════════════════════════════════════════════");
    println!();
    print!("{}", render(board));
    println!();

    let head = match board.head {
        Some(head) => head,
        None => {
            println!("No head on the board; the policy answers with the default direction.");
            return;
        }
    };

    println!("Snake State:");
    println!("  Head:   {}", head);
    println!("  Length: {}", board.snake_length());
    println!(
        "  Detour active: {}",
        config.policy.detour_active(board.snake_length())
    );
    println!();

    let grid = Grid::new(board.size);
    let obstacles = ObstacleSet::for_tick(board);

    if let Some(food) = board.target_food() {
        let path = find_path(&grid, head, food, &obstacles);
        println!("Food at {}:", food);
        if let Some(step) = path.first_step() {
            println!("  Path length: {} cells, first step {}", path.len(), step);
            let escapable = is_escapable_after(
                &grid,
                step,
                food,
                &ObstacleSet::statics(board),
                &board.body,
                config.policy.grow_on_eat,
            );
            println!("  Escape after eating: {}", if escapable { "yes" } else { "NO (trap)" });
        } else {
            println!("  Unreachable");
        }
        println!();
    }

    if let Some(hazard) = board.target_hazard() {
        let path = find_path(&grid, head, hazard, &obstacles.without(&hazard));
        println!("Stone at {}:", hazard);
        match path.first_step() {
            Some(step) => println!("  Path length: {} cells, first step {}", path.len(), step),
            None => println!("  Unreachable"),
        }
        println!();
    }

    let decision = DecisionPolicy::new(config.policy).decide_with_trace(board);
    println!("Move Logged:   {}", entry.chosen_move);
    println!("Move Replayed: {} ({})", decision.direction, decision.reason);
}
