//! Whole-board state value.
//!
//! # Responsibility
//! - Hold the authoritative columns/cards value mutated by the store.
//! - Provide the seed bootstrap state and a referential-integrity check.
//!
//! # Invariants
//! - `columns` stays sorted ascending by `order` (stable across equal keys).
//! - Every `card.column_id` resolves to a column in the same state.
//! - Ids are unique within `columns` and within `cards`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use super::card::{Card, CardId, CardValidationError};
use super::column::{Column, ColumnId};

/// The full board: ordered columns plus the flat card collection.
///
/// Cards carry no rank field; a card's position inside its column is the
/// emergent iteration order of `cards`, matching the durable format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub columns: Vec<Column>,
    pub cards: Vec<Card>,
}

impl BoardState {
    /// Bootstrap state: the three seed columns and no cards.
    pub fn seed() -> Self {
        Self {
            columns: vec![
                Column::with_id("todo", "TODO", 0),
                Column::with_id("in-progress", "In Progress", 1),
                Column::with_id("completed", "Completed", 2),
            ],
            cards: Vec::new(),
        }
    }

    /// Looks up a column by id.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// Looks up a card by id.
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    /// Checks cross-entity invariants over the whole state.
    ///
    /// The pure mutation functions never call this; it is the explicit
    /// validation pass run at trust boundaries (store writes, loads from
    /// storage that bypass the seeded fallback).
    ///
    /// # Errors
    /// - [`StateValidationError::DuplicateColumnId`] / `DuplicateCardId`
    ///   when an id occurs twice in its collection.
    /// - [`StateValidationError::DanglingColumnRef`] when a card references
    ///   a column absent from this state.
    /// - [`StateValidationError::Card`] when a card fails its own checks.
    pub fn validate(&self) -> Result<(), StateValidationError> {
        let mut column_ids: HashSet<&str> = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(column.id.as_str()) {
                return Err(StateValidationError::DuplicateColumnId(column.id.clone()));
            }
        }

        let mut card_ids: HashSet<&str> = HashSet::with_capacity(self.cards.len());
        for card in &self.cards {
            if !card_ids.insert(card.id.as_str()) {
                return Err(StateValidationError::DuplicateCardId(card.id.clone()));
            }
            if !column_ids.contains(card.column_id.as_str()) {
                return Err(StateValidationError::DanglingColumnRef {
                    card_id: card.id.clone(),
                    column_id: card.column_id.clone(),
                });
            }
            card.validate()?;
        }

        Ok(())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seed()
    }
}

/// Whole-state invariant violation found by [`BoardState::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValidationError {
    DuplicateColumnId(ColumnId),
    DuplicateCardId(CardId),
    DanglingColumnRef { card_id: CardId, column_id: ColumnId },
    Card(CardValidationError),
}

impl Display for StateValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateColumnId(id) => write!(f, "duplicate column id `{id}`"),
            Self::DuplicateCardId(id) => write!(f, "duplicate card id `{id}`"),
            Self::DanglingColumnRef { card_id, column_id } => write!(
                f,
                "card `{card_id}` references nonexistent column `{column_id}`"
            ),
            Self::Card(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StateValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Card(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CardValidationError> for StateValidationError {
    fn from(value: CardValidationError) -> Self {
        Self::Card(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardState, StateValidationError};
    use crate::model::card::Card;

    #[test]
    fn seed_has_three_columns_in_order_and_no_cards() {
        let state = BoardState::seed();
        let ids: Vec<&str> = state.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["todo", "in-progress", "completed"]);
        let orders: Vec<i64> = state.columns.iter().map(|c| c.order).collect();
        assert_eq!(orders, [0, 1, 2]);
        assert!(state.cards.is_empty());
    }

    #[test]
    fn validate_rejects_dangling_column_reference() {
        let mut state = BoardState::seed();
        state.cards.push(Card::with_id("c1", "nowhere", "orphan"));

        assert!(matches!(
            state.validate(),
            Err(StateValidationError::DanglingColumnRef { .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_card_ids() {
        let mut state = BoardState::seed();
        state.cards.push(Card::with_id("c1", "todo", "first"));
        state.cards.push(Card::with_id("c1", "todo", "second"));

        assert!(matches!(
            state.validate(),
            Err(StateValidationError::DuplicateCardId(id)) if id == "c1"
        ));
    }
}
