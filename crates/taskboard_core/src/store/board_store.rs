//! Stateful board store: the trust boundary in front of the pure mutations.
//!
//! # Responsibility
//! - Own the authoritative [`BoardState`] for one board instance.
//! - Validate intents (id uniqueness, column references, blank titles)
//!   before applying the pure mutation.
//! - Persist best-effort after every successful mutation.
//!
//! # Invariants
//! - A rejected intent leaves both the in-memory and persisted state
//!   untouched.
//! - Unknown target ids on update/delete/move are no-ops, not errors.
//! - The store never panics on caller input.

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

use super::{metrics, mutations};
use crate::model::card::{now_epoch_ms, Card, CardId, CardPatch, CardValidationError};
use crate::model::column::{Column, ColumnId};
use crate::model::state::BoardState;
use crate::persist::StateSlot;
use crate::search::filter;

pub type StoreResult<T> = Result<T, StoreError>;

/// Intent rejected at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(CardValidationError),
    DuplicateCardId(CardId),
    DuplicateColumnId(ColumnId),
    UnknownColumn(ColumnId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateCardId(id) => write!(f, "card id `{id}` already exists"),
            Self::DuplicateColumnId(id) => write!(f, "column id `{id}` already exists"),
            Self::UnknownColumn(id) => write!(f, "column `{id}` does not exist"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CardValidationError> for StoreError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One board's state plus its injected persistence slot.
///
/// There is no global instance; hosts and tests construct as many stores
/// as they need, each with its own slot.
pub struct BoardStore<S: StateSlot> {
    state: BoardState,
    slot: S,
}

impl<S: StateSlot> BoardStore<S> {
    /// Loads the persisted state (or the seed default) from `slot` and
    /// takes ownership of it.
    pub fn open(slot: S) -> Self {
        let state = slot.load();
        Self { state, slot }
    }

    /// Read access to the current authoritative state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Adds a card after boundary checks.
    ///
    /// # Errors
    /// - [`StoreError::Validation`] for a blank title.
    /// - [`StoreError::DuplicateCardId`] when the id is already taken.
    /// - [`StoreError::UnknownColumn`] when `card.column_id` does not
    ///   resolve in the current state.
    pub fn add_card(&mut self, card: Card) -> StoreResult<CardId> {
        card.validate()?;
        if mutations::card_exists(&self.state, &card.id) {
            return Err(StoreError::DuplicateCardId(card.id));
        }
        if self.state.column(&card.column_id).is_none() {
            return Err(StoreError::UnknownColumn(card.column_id));
        }

        let id = card.id.clone();
        self.commit(mutations::add_card(&self.state, card));
        Ok(id)
    }

    /// Applies a partial update to the card with `card_id`.
    ///
    /// Returns `Ok(false)` when no such card exists (a no-op, not an
    /// error). The merged result is validated before anything changes.
    pub fn update_card(&mut self, card_id: &str, patch: &CardPatch) -> StoreResult<bool> {
        let Some(current) = self.state.card(card_id) else {
            return Ok(false);
        };

        let merged = patch.apply_to(current);
        merged.validate()?;
        if self.state.column(&merged.column_id).is_none() {
            return Err(StoreError::UnknownColumn(merged.column_id));
        }

        self.commit(mutations::update_card(
            &self.state,
            card_id,
            patch,
            now_epoch_ms(),
        ));
        Ok(true)
    }

    /// Deletes the card with `card_id`. Returns whether a card was
    /// removed; deleting an absent id is a no-op.
    pub fn delete_card(&mut self, card_id: &str) -> bool {
        if self.state.card(card_id).is_none() {
            return false;
        }
        self.commit(mutations::delete_card(&self.state, card_id));
        true
    }

    /// Adds a column, keeping the sequence sorted by `order`.
    ///
    /// # Errors
    /// - [`StoreError::DuplicateColumnId`] when the id is already taken.
    pub fn add_column(&mut self, column: Column) -> StoreResult<ColumnId> {
        if self.state.column(&column.id).is_some() {
            return Err(StoreError::DuplicateColumnId(column.id));
        }

        let id = column.id.clone();
        self.commit(mutations::add_column(&self.state, column));
        Ok(id)
    }

    /// Deletes the column with `column_id` and every card in it.
    ///
    /// Destructive and non-reversible; callers should confirm with the
    /// user first. Returns whether a column was removed.
    pub fn delete_column(&mut self, column_id: &str) -> bool {
        if self.state.column(column_id).is_none() {
            return false;
        }
        self.commit(mutations::delete_column(&self.state, column_id));
        true
    }

    /// Moves the card with `card_id` to `to_column_id`.
    ///
    /// Returns `Ok(false)` for an unknown card id or a same-column move
    /// (both no-ops; the timestamp is untouched). `from_column_id` and
    /// `position` are accepted for future intra-column ordering.
    ///
    /// # Errors
    /// - [`StoreError::UnknownColumn`] when the destination column does
    ///   not resolve in the current state.
    pub fn move_card(
        &mut self,
        card_id: &str,
        from_column_id: &str,
        to_column_id: &ColumnId,
        position: usize,
    ) -> StoreResult<bool> {
        let Some(card) = self.state.card(card_id) else {
            return Ok(false);
        };
        if self.state.column(to_column_id).is_none() {
            return Err(StoreError::UnknownColumn(to_column_id.clone()));
        }
        if card.column_id == *to_column_id {
            return Ok(false);
        }

        self.commit(mutations::move_card(
            &self.state,
            card_id,
            from_column_id,
            to_column_id,
            position,
            now_epoch_ms(),
        ));
        Ok(true)
    }

    /// Clears the persisted slot and reinstates the seed state.
    ///
    /// Destructive and irreversible; callers should confirm with the user
    /// first.
    pub fn reset(&mut self) {
        self.slot.clear();
        self.state = BoardState::seed();
        info!("event=board_reset module=store status=ok");
    }

    /// Count of all cards on the board.
    pub fn total_cards(&self) -> usize {
        metrics::total_cards(&self.state)
    }

    /// Count of cards in the reserved `completed` column.
    pub fn completed_cards(&self) -> usize {
        metrics::completed_cards(&self.state)
    }

    /// Completion percentage, rounded; 0 for an empty board.
    pub fn progress_percent(&self) -> u8 {
        metrics::progress_percent(&self.state)
    }

    /// One column's cards, narrowed by a case-insensitive query.
    pub fn filtered_cards(&self, column_id: &str, query: &str) -> Vec<&Card> {
        filter::filter_cards(&self.state, column_id, query)
    }

    fn commit(&mut self, next: BoardState) {
        self.state = next;
        self.slot.save(&self.state);
    }
}
