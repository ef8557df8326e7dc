//! Column domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for a column.
///
/// The three seed columns use the reserved ids `todo`, `in-progress` and
/// `completed`; user-created columns get stringified UUIDs.
pub type ColumnId = String;

/// Reserved id of the column that feeds progress accounting.
pub const COMPLETED_COLUMN_ID: &str = "completed";

/// Ids of the three bootstrap columns, in board order.
pub const SEED_COLUMN_IDS: [&str; 3] = ["todo", "in-progress", COMPLETED_COLUMN_ID];

/// Returns whether `id` names one of the three seed columns.
///
/// The core does not block deleting them; this helper exists so a
/// presentation layer can choose to protect them.
pub fn is_seed_column(id: &str) -> bool {
    SEED_COLUMN_IDS.contains(&id)
}

/// A vertical lane on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Opaque unique id.
    pub id: ColumnId,
    /// Display title, editable.
    pub title: String,
    /// Left-to-right position; the board keeps columns sorted ascending.
    /// Uniqueness is not enforced; insertion order breaks ties.
    pub order: i64,
}

impl Column {
    /// Creates a column with a generated id.
    pub fn new(title: impl Into<String>, order: i64) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, order)
    }

    /// Creates a column with a caller-provided stable id.
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>, order: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order,
        }
    }
}
