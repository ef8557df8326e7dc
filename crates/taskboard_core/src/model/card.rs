//! Card domain model.
//!
//! # Responsibility
//! - Define the card record and its partial-update patch type.
//! - Provide boundary validation for card writes.
//!
//! # Invariants
//! - `id` is stable and never reused for another card.
//! - `created_at` is set once; `updated_at >= created_at` always holds.
//! - `title` must be non-blank when a card crosses the store boundary.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use super::column::ColumnId;

/// Stable opaque identifier for a card.
///
/// Kept as a type alias to make semantic intent explicit in signatures;
/// generated ids are stringified UUIDs, but callers may supply any unique
/// opaque string.
pub type CardId = String;

/// A single task card on the board.
///
/// The serde shape matches the durable JSON format field for field, so one
/// struct serves both the in-memory state and the persisted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Opaque unique id, assigned at creation, immutable thereafter.
    pub id: CardId,
    /// Display title. Blank titles are rejected at the store boundary.
    pub title: String,
    /// Free-form text, may be empty.
    pub description: String,
    /// Must reference an existing column in the same board state.
    pub column_id: ColumnId,
    /// Free-form text, may be empty.
    pub notes: String,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every successful mutation.
    pub updated_at: i64,
    /// Cosmetic tag, no invariant attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Card {
    /// Creates a card with a generated id and both timestamps set to now.
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), column_id, title)
    }

    /// Creates a card with a caller-provided stable id.
    ///
    /// Used when identity already exists externally (import, tests). The
    /// caller is responsible for keeping the id unique within one board.
    pub fn with_id(
        id: impl Into<CardId>,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            notes: String::new(),
            created_at: now,
            updated_at: now,
            color: None,
        }
    }

    /// Checks boundary invariants for a card about to enter the store.
    ///
    /// # Errors
    /// - [`CardValidationError::BlankTitle`] when `title` is empty or
    ///   whitespace-only.
    /// - [`CardValidationError::TimestampOrder`] when `updated_at` precedes
    ///   `created_at`.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.title.trim().is_empty() {
            return Err(CardValidationError::BlankTitle {
                card_id: self.id.clone(),
            });
        }
        if self.updated_at < self.created_at {
            return Err(CardValidationError::TimestampOrder {
                card_id: self.id.clone(),
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}

/// Partial update for [`Card`], keeping the mutable field set closed.
///
/// `id` and `created_at` are intentionally absent: identity and creation
/// time never change. `updated_at` is managed by the mutation itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub column_id: Option<ColumnId>,
    pub color: Option<String>,
}

impl CardPatch {
    /// Returns the card produced by shallow-merging this patch over `card`.
    ///
    /// Timestamps are left untouched; the mutation layer owns `updated_at`.
    pub fn apply_to(&self, card: &Card) -> Card {
        let mut merged = card.clone();
        if let Some(title) = &self.title {
            merged.title = title.clone();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(notes) = &self.notes {
            merged.notes = notes.clone();
        }
        if let Some(column_id) = &self.column_id {
            merged.column_id = column_id.clone();
        }
        if let Some(color) = &self.color {
            merged.color = Some(color.clone());
        }
        merged
    }
}

/// Boundary validation failure for a card write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    BlankTitle {
        card_id: CardId,
    },
    TimestampOrder {
        card_id: CardId,
        created_at: i64,
        updated_at: i64,
    },
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle { card_id } => {
                write!(f, "card `{card_id}` has a blank title")
            }
            Self::TimestampOrder {
                card_id,
                created_at,
                updated_at,
            } => write!(
                f,
                "card `{card_id}` has updated_at {updated_at} earlier than created_at {created_at}"
            ),
        }
    }
}

impl Error for CardValidationError {}

/// Current wall-clock time as Unix epoch milliseconds.
///
/// Clamped to zero if the system clock reports a pre-epoch time, so model
/// constructors never panic.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Card, CardPatch, CardValidationError};

    #[test]
    fn new_card_has_equal_timestamps_and_generated_id() {
        let card = Card::new("todo", "write tests");
        assert!(!card.id.is_empty());
        assert_eq!(card.created_at, card.updated_at);
        assert_eq!(card.column_id, "todo");
    }

    #[test]
    fn blank_title_fails_validation() {
        let card = Card::with_id("c1", "todo", "   ");
        assert!(matches!(
            card.validate(),
            Err(CardValidationError::BlankTitle { .. })
        ));
    }

    #[test]
    fn patch_merges_only_provided_fields() {
        let card = Card::with_id("c1", "todo", "original");
        let patch = CardPatch {
            description: Some("details".to_string()),
            ..CardPatch::default()
        };

        let merged = patch.apply_to(&card);
        assert_eq!(merged.title, "original");
        assert_eq!(merged.description, "details");
        assert_eq!(merged.column_id, "todo");
        assert_eq!(merged.updated_at, card.updated_at);
    }
}
