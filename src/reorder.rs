//! Reorder Engine
//!
//! Turns a completed drag into a new board snapshot. Moves that don't
//! resolve are declined with a reason; callers treat a declined move as
//! "keep the current board".

use im::Vector;
use thiserror::Error;

use crate::board::Board;
use crate::models::Card;

/// A completed drag, in board terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub card_id: String,
    pub source_column: String,
    /// None when the card was released outside every column
    pub destination_column: Option<String>,
    /// Final position in the destination column; None means the front
    pub destination_index: Option<usize>,
}

impl MoveDescriptor {
    pub fn new(card_id: impl Into<String>, source_column: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            source_column: source_column.into(),
            destination_column: None,
            destination_index: None,
        }
    }

    pub fn to(mut self, column: impl Into<String>, index: usize) -> Self {
        self.destination_column = Some(column.into());
        self.destination_index = Some(index);
        self
    }
}

/// Why a move left the board alone
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("source column not found: {id}")]
    UnknownSourceColumn { id: String },

    #[error("dropped outside any column")]
    NoDestination,

    #[error("destination column not found: {id}")]
    UnknownDestinationColumn { id: String },

    #[error("card {card} not found in column {column}")]
    CardNotInColumn { card: String, column: String },
}

/// Apply a move, producing the next board
///
/// The card is removed from its source column by ID, not by index, then
/// inserted at the destination index clamped into `[0, len]`. Only the
/// affected column(s) are replaced.
pub fn apply_move(board: &Board, mv: &MoveDescriptor) -> Result<Board, MoveRejected> {
    let source_index = board
        .column_index(&mv.source_column)
        .ok_or_else(|| MoveRejected::UnknownSourceColumn { id: mv.source_column.clone() })?;
    let destination_id = mv.destination_column.as_deref().ok_or(MoveRejected::NoDestination)?;
    let destination_index = board
        .column_index(destination_id)
        .ok_or_else(|| MoveRejected::UnknownDestinationColumn { id: destination_id.to_string() })?;

    let source = &board.columns()[source_index];
    let position = source.position_of(&mv.card_id).ok_or_else(|| MoveRejected::CardNotInColumn {
        card: mv.card_id.clone(),
        column: source.id.clone(),
    })?;

    let mut source_cards = source.cards.clone();
    let card = source_cards.remove(position);
    let at = mv.destination_index.unwrap_or(0);

    if source_index == destination_index {
        insert_clamped(&mut source_cards, at, card);
        let mut column = source.clone();
        column.cards = source_cards;
        return Ok(board.with_column(source_index, column));
    }

    let destination = &board.columns()[destination_index];
    let mut destination_cards = destination.cards.clone();
    insert_clamped(&mut destination_cards, at, card);

    let mut shortened = source.clone();
    shortened.cards = source_cards;
    let mut grown = destination.clone();
    grown.cards = destination_cards;

    Ok(board
        .with_column(source_index, shortened)
        .with_column(destination_index, grown))
}

fn insert_clamped(cards: &mut Vector<Card>, index: usize, card: Card) {
    let index = index.min(cards.len());
    cards.insert(index, card);
}
