//! Derived Views
//!
//! Pure reads over the board: column totals, the filtered column list and
//! amount formatting. Nothing here is cached.

use im::Vector;

use crate::models::{Card, Column};

/// Sum of card values; an empty column totals 0
pub fn column_total(cards: &Vector<Card>) -> u64 {
    cards.iter().map(|card| card.value).sum()
}

/// Columns whose title contains `filter`, ignoring case
///
/// An empty filter keeps every column, in order.
pub fn filter_columns(columns: &Vector<Column>, filter: &str) -> Vector<Column> {
    if filter.is_empty() {
        return columns.clone();
    }
    let needle = filter.to_lowercase();
    columns
        .iter()
        .filter(|column| column.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// "150" -> "150,00"
pub fn format_amount(units: u64) -> String {
    format!("{units},00")
}

/// "150" -> "R$ 150,00"
pub fn format_total(units: u64) -> String {
    format!("R$ {}", format_amount(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn columns() -> Vector<Column> {
        Vector::from(vec![
            Column::new("Coluna_A", "Em negociação", "#97e794").with_cards([
                Card::new("1", "Item 1", 100),
                Card::new("2", "Item 2", 50),
                Card::new("3", "Item 3", 75),
            ]),
            Column::new("Coluna_B", "Pagamento efetuado", "#8fafec"),
            Column::new("Coluna_C", "Pedido finalizado", "#ad6ea8"),
        ])
    }

    fn titles(columns: &Vector<Column>) -> Vec<&str> {
        columns.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_column_total() {
        let cols = columns();
        assert_eq!(column_total(&cols[0].cards), 225);
        assert_eq!(column_total(&cols[1].cards), 0);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_columns(&columns(), "NEGOCI");
        assert_eq!(titles(&filtered), vec!["Em negociação"]);
    }

    #[test]
    fn test_filter_matches_non_ascii_case() {
        let filtered = filter_columns(&columns(), "NEGOCIAÇÃO");
        assert_eq!(titles(&filtered), vec!["Em negociação"]);
    }

    #[test]
    fn test_filter_substring_keeps_order() {
        let filtered = filter_columns(&columns(), "do");
        assert_eq!(titles(&filtered), vec!["Pagamento efetuado", "Pedido finalizado"]);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        assert!(filter_columns(&columns(), "xyz").is_empty());
    }

    #[test]
    fn test_empty_filter_is_identity() {
        assert_eq!(filter_columns(&columns(), ""), columns());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_amount(50), "50,00");
        assert_eq!(format_total(225), "R$ 225,00");
        assert_eq!(format_total(0), "R$ 0,00");
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_values(values in prop::collection::vec(0u64..1_000_000, 0..20)) {
            let cards: Vector<Card> = values
                .iter()
                .enumerate()
                .map(|(i, v)| Card::new(i.to_string(), format!("Item {i}"), *v))
                .collect();
            prop_assert_eq!(column_total(&cards), values.iter().sum::<u64>());
        }

        #[test]
        fn prop_filter_keeps_matching_subsequence(filter in "\\PC{0,6}") {
            let original = columns();
            let filtered = filter_columns(&original, &filter);

            // filtering never touches its input
            prop_assert_eq!(&original, &columns());

            let needle = filter.to_lowercase();
            let expected: Vec<&str> = original
                .iter()
                .filter(|c| c.title.to_lowercase().contains(&needle))
                .map(|c| c.title.as_str())
                .collect();
            prop_assert_eq!(titles(&filtered), expected);
        }
    }
}
