//! Pure board mutation functions.
//!
//! # Responsibility
//! - Produce a new [`BoardState`] from an old state plus one intent.
//!
//! # Invariants
//! - Total for well-typed input: no panics, no errors, unknown ids return
//!   the input state unchanged.
//! - The input state is never mutated; callers holding a reference to it
//!   keep seeing the prior value.
//! - `now_ms` is supplied by the caller so these functions stay
//!   referentially transparent.

use crate::model::card::{Card, CardId, CardPatch};
use crate::model::column::{Column, ColumnId};
use crate::model::state::BoardState;

/// Appends `card` to the board.
///
/// Does not check id uniqueness or that `card.column_id` resolves; that is
/// the store boundary's job ([`BoardStore`](super::board_store::BoardStore)).
pub fn add_card(state: &BoardState, card: Card) -> BoardState {
    let mut next = state.clone();
    next.cards.push(card);
    next
}

/// Shallow-merges `patch` over the card with `card_id`, refreshing its
/// `updated_at`. Unknown id returns the state unchanged.
pub fn update_card(state: &BoardState, card_id: &str, patch: &CardPatch, now_ms: i64) -> BoardState {
    let mut next = state.clone();
    for card in &mut next.cards {
        if card.id == card_id {
            let mut merged = patch.apply_to(card);
            merged.updated_at = stamp(&merged, now_ms);
            *card = merged;
            break;
        }
    }
    next
}

/// Removes the card with `card_id`. Unknown id returns the state unchanged.
pub fn delete_card(state: &BoardState, card_id: &str) -> BoardState {
    let mut next = state.clone();
    next.cards.retain(|card| card.id != card_id);
    next
}

/// Appends `column` and re-sorts columns ascending by `order`.
///
/// The sort is stable, so columns sharing an `order` value keep their
/// relative insertion sequence.
pub fn add_column(state: &BoardState, column: Column) -> BoardState {
    let mut next = state.clone();
    next.columns.push(column);
    next.columns.sort_by_key(|column| column.order);
    next
}

/// Removes the column with `column_id` and cascade-deletes every card in
/// it. Unknown id returns the state unchanged.
///
/// The cascade is destructive and non-reversible; callers are expected to
/// confirm with the user before invoking it.
pub fn delete_column(state: &BoardState, column_id: &str) -> BoardState {
    let mut next = state.clone();
    next.columns.retain(|column| column.id != column_id);
    next.cards.retain(|card| card.column_id != column_id);
    next
}

/// Reassigns the card with `card_id` to `to_column_id`, refreshing its
/// `updated_at`.
///
/// A same-column move is a complete no-op: the state comes back unchanged
/// and the timestamp is untouched. Unknown `card_id` is likewise a no-op.
/// `from_column_id` and `position` are accepted for future intra-column
/// ordering and ignored here.
pub fn move_card(
    state: &BoardState,
    card_id: &str,
    _from_column_id: &str,
    to_column_id: &ColumnId,
    _position: usize,
    now_ms: i64,
) -> BoardState {
    let mut next = state.clone();
    for card in &mut next.cards {
        if card.id == card_id {
            if card.column_id == *to_column_id {
                return next;
            }
            card.column_id = to_column_id.clone();
            card.updated_at = stamp(card, now_ms);
            break;
        }
    }
    next
}

/// Returns whether any card with `card_id` exists in `state`.
pub fn card_exists(state: &BoardState, card_id: &CardId) -> bool {
    state.cards.iter().any(|card| card.id == *card_id)
}

// Clamp keeps updated_at monotone even when the wall clock steps backwards.
fn stamp(card: &Card, now_ms: i64) -> i64 {
    now_ms.max(card.updated_at).max(card.created_at)
}

#[cfg(test)]
mod tests {
    use super::{add_card, move_card, update_card};
    use crate::model::card::{Card, CardPatch};
    use crate::model::state::BoardState;

    #[test]
    fn mutations_leave_the_input_state_untouched() {
        let state = add_card(&BoardState::seed(), Card::with_id("c1", "todo", "task"));
        let before = state.clone();

        let _ = update_card(
            &state,
            "c1",
            &CardPatch {
                title: Some("renamed".to_string()),
                ..CardPatch::default()
            },
            i64::MAX,
        );
        let _ = move_card(&state, "c1", "todo", &"completed".to_string(), 0, i64::MAX);

        assert_eq!(state, before);
    }

    #[test]
    fn backwards_clock_never_regresses_updated_at() {
        let state = add_card(&BoardState::seed(), Card::with_id("c1", "todo", "task"));
        let original = state.card("c1").unwrap().updated_at;

        let patched = update_card(&state, "c1", &CardPatch::default(), original - 10_000);
        assert_eq!(patched.card("c1").unwrap().updated_at, original);
    }
}
