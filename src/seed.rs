//! Seed Board
//!
//! The board the app starts with, embedded as JSON.

use serde::Deserialize;

use crate::board::{Board, BoardError};
use crate::models::Column;

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
struct BoardSeed {
    columns: Vec<Column>,
}

/// Parse a seed document; duplicate IDs are rejected like any other board
pub fn parse_board(json: &str) -> Result<Board, BoardError> {
    let seed: BoardSeed = serde_json::from_str(json)?;
    Board::new(seed.columns)
}

/// The embedded starting board
pub fn initial_board() -> Result<Board, BoardError> {
    parse_board(SEED_JSON)
}
