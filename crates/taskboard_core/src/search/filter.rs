//! Case-insensitive card filtering.

use crate::model::card::Card;
use crate::model::state::BoardState;

/// All cards of one column, in emergent (insertion) order.
pub fn column_cards<'state>(state: &'state BoardState, column_id: &str) -> Vec<&'state Card> {
    state
        .cards
        .iter()
        .filter(|card| card.column_id == column_id)
        .collect()
}

/// One column's cards whose title or description contains `query`,
/// case-insensitively. A blank query returns the column unfiltered.
pub fn filter_cards<'state>(
    state: &'state BoardState,
    column_id: &str,
    query: &str,
) -> Vec<&'state Card> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return column_cards(state, column_id);
    }

    state
        .cards
        .iter()
        .filter(|card| card.column_id == column_id)
        .filter(|card| {
            card.title.to_lowercase().contains(&needle)
                || card.description.to_lowercase().contains(&needle)
        })
        .collect()
}
