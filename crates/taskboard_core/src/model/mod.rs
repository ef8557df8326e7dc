//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical card/column/board structures used by core logic.
//! - Keep the in-memory shape identical to the persisted JSON shape.
//!
//! # Invariants
//! - `Card.id` and `Column.id` are opaque strings, unique per collection.
//! - Card position inside a column is the emergent iteration order of
//!   `BoardState::cards`; there is no stored rank field.

pub mod card;
pub mod column;
pub mod state;
