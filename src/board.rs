//! Board State
//!
//! The whole board as one immutable snapshot. Every operation returns a new
//! `Board` and leaves the old one intact; columns that an operation doesn't
//! touch are shared between the two snapshots.

use std::collections::HashSet;

use im::Vector;
use thiserror::Error;

use crate::models::{Card, Column};

/// Value given to every card created by "Add item"
pub const NEW_CARD_VALUE: u64 = 50;

/// Label prefix for cards created by "Add item"
const NEW_CARD_LABEL: &str = "Novo Item";

/// Errors from building or extending a board
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("duplicate column ID: {id}")]
    DuplicateColumnId { id: String },

    #[error("duplicate card ID: {id}")]
    DuplicateCardId { id: String },

    #[error("board has no columns")]
    NoColumns,

    #[error("invalid seed board: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Ordered columns with their ordered cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: Vector<Column>,
}

impl Board {
    /// Build a board, rejecting duplicate column or card IDs
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self, BoardError> {
        let columns: Vector<Column> = columns.into_iter().collect();

        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for column in columns.iter() {
            if !column_ids.insert(column.id.as_str()) {
                return Err(BoardError::DuplicateColumnId { id: column.id.clone() });
            }
            for card in column.cards.iter() {
                if !card_ids.insert(card.id.as_str()) {
                    return Err(BoardError::DuplicateCardId { id: card.id.clone() });
                }
            }
        }

        Ok(Self { columns })
    }

    /// A board with no columns
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &Vector<Column> {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    /// All cards, column by column
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|column| column.cards.iter())
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    pub fn contains_card(&self, card_id: &str) -> bool {
        self.cards().any(|card| card.id == card_id)
    }

    /// New board with the column at `index` swapped out; `index` must be in range
    pub(crate) fn with_column(&self, index: usize, column: Column) -> Self {
        Self {
            columns: self.columns.update(index, column),
        }
    }
}

/// Mints card IDs "n", "n+1", ... for "Add item"
///
/// Lives next to the board in the state store; never a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardIdGenerator {
    next: u64,
}

impl CardIdGenerator {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Start above everything already on the board: past both the card count
    /// and the largest numeric card ID.
    pub fn after(board: &Board) -> Self {
        let count = board.card_count() as u64;
        let highest = board
            .cards()
            .filter_map(|card| card.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::starting_at(count.max(highest) + 1)
    }

    /// The number the next minted card will carry
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn mint(&mut self) -> Card {
        let n = self.next;
        self.next += 1;
        Card::new(n.to_string(), format!("{NEW_CARD_LABEL} {n}"), NEW_CARD_VALUE)
    }
}

/// Append a freshly minted card to the end of the first column
///
/// The generator advances even when the card is declined.
pub fn add_item(board: &Board, ids: &mut CardIdGenerator) -> Result<Board, BoardError> {
    let card = ids.mint();

    let first = board.columns.front().ok_or(BoardError::NoColumns)?;
    if board.contains_card(&card.id) {
        return Err(BoardError::DuplicateCardId { id: card.id });
    }

    let mut column = first.clone();
    column.cards.push_back(card);
    Ok(board.with_column(0, column))
}
