//! Derived progress metrics.
//!
//! Read-only projections computed from [`BoardState`] on demand; nothing
//! here is stored or persisted.
//!
//! [`BoardState`]: crate::model::state::BoardState

use crate::model::column::COMPLETED_COLUMN_ID;
use crate::model::state::BoardState;

/// Count of all cards on the board.
pub fn total_cards(state: &BoardState) -> usize {
    state.cards.len()
}

/// Count of cards sitting in the reserved `completed` column.
pub fn completed_cards(state: &BoardState) -> usize {
    state
        .cards
        .iter()
        .filter(|card| card.column_id == COMPLETED_COLUMN_ID)
        .count()
}

/// Completion percentage, rounded to the nearest integer.
///
/// Defined as 0 for an empty board to avoid dividing by zero.
pub fn progress_percent(state: &BoardState) -> u8 {
    let total = total_cards(state);
    if total == 0 {
        return 0;
    }
    let completed = completed_cards(state);
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
