// HTTP handler bindings for the snake bot endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use rocket::http::Status;
use rocket::serde::json::Json;
use serde_json::Value;

use codenjoy_snake::bot::Bot;
use codenjoy_snake::types::MoveRequest;

/// GET / endpoint
/// Returns bot metadata
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /start endpoint
/// Called when a game starts
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<MoveRequest>) -> Status {
    bot.start(start_req.turn, &start_req.board);

    Status::Ok
}

/// POST /move endpoint
/// Called each tick to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub fn get_move(bot: &rocket::State<Bot>, move_req: Json<MoveRequest>) -> Json<Value> {
    Json(bot.get_move(move_req.turn, &move_req.board))
}

/// POST /end endpoint
/// Called when a game ends - allows cleanup and logging
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<MoveRequest>) -> Status {
    bot.end(end_req.turn, &end_req.board);

    Status::Ok
}
