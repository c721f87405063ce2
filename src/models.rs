//! Frontend Models
//!
//! Cards and the columns that hold them.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A draggable card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub label: String,
    /// Whole currency units
    pub value: u64,
}

impl Card {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value,
        }
    }
}

/// A board column; `cards` order is display and drag order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    /// CSS color, e.g. "#97e794"
    pub color: String,
    #[serde(default)]
    pub cards: Vector<Card>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            cards: Vector::new(),
        }
    }

    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards = cards.into_iter().collect();
        self
    }

    /// Position of a card in this column
    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of() {
        let col = Column::new("A", "A", "#fff")
            .with_cards([Card::new("x", "X", 1), Card::new("y", "Y", 2)]);
        assert_eq!(col.position_of("y"), Some(1));
        assert_eq!(col.position_of("z"), None);
    }

    #[test]
    fn test_column_cards_default_when_missing() {
        let col: Column = serde_json::from_str(r##"{"id":"B","title":"Pagamento efetuado","color":"#8fafec"}"##).unwrap();
        assert!(col.cards.is_empty());
    }
}
