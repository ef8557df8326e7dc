//! Persistence adapter for the board state.
//!
//! # Responsibility
//! - Read/write the whole [`BoardState`] as one JSON payload under a fixed
//!   slot key.
//! - Supply the seed state whenever the slot is missing or unreadable.
//!
//! # Invariants
//! - The trait surface never propagates errors: failures are logged and
//!   the session continues with in-memory state (best-effort durability).
//! - `load` always returns a usable state; corrupt or invalid payloads
//!   fall back to [`BoardState::seed`].
//!
//! [`BoardState`]: crate::model::state::BoardState
//! [`BoardState::seed`]: crate::model::state::BoardState::seed

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::state::BoardState;
use crate::model::state::StateValidationError;

pub mod memory_slot;
pub mod sqlite_slot;

pub use memory_slot::MemoryStateSlot;
pub use sqlite_slot::SqliteStateSlot;

/// Fixed key the board payload is stored under.
pub const DEFAULT_SLOT_KEY: &str = "kanban_board_state";

pub type SlotResult<T> = Result<T, SlotError>;

/// Internal failure while reading or writing a slot.
///
/// Only the fallible internals surface this type; the [`StateSlot`] trait
/// swallows it after logging, per the never-crash contract.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    Payload(serde_json::Error),
    InvalidState(StateValidationError),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Payload(err) => write!(f, "invalid board payload: {err}"),
            Self::InvalidState(err) => write!(f, "persisted state violates invariants: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Payload(err) => Some(err),
            Self::InvalidState(err) => Some(err),
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for SlotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

/// Durable slot holding one board state.
///
/// All three operations are synchronous and best-effort; implementations
/// must log failures instead of propagating them.
pub trait StateSlot {
    /// Reads the persisted state, falling back to the seed default when
    /// the slot is empty, unreadable, or fails to parse.
    fn load(&self) -> BoardState;

    /// Writes the state. A failed write is logged and otherwise ignored;
    /// the in-memory state stays the source of truth for the session.
    fn save(&self, state: &BoardState);

    /// Empties the slot so the next `load` yields the seed state.
    fn clear(&self);
}

/// Decodes and integrity-checks one persisted payload.
pub(crate) fn decode_payload(payload: &str) -> SlotResult<BoardState> {
    let state: BoardState = serde_json::from_str(payload)?;
    state.validate().map_err(SlotError::InvalidState)?;
    Ok(state)
}
