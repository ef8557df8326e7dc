//! Core board state model for a single-user task board.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod persist;
pub mod search;
pub mod store;

pub use engine::drag::{DragEngine, DropOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{Card, CardId, CardPatch, CardValidationError};
pub use model::column::{
    is_seed_column, Column, ColumnId, COMPLETED_COLUMN_ID, SEED_COLUMN_IDS,
};
pub use model::state::{BoardState, StateValidationError};
pub use persist::{MemoryStateSlot, SqliteStateSlot, StateSlot, DEFAULT_SLOT_KEY};
pub use store::board_store::{BoardStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
