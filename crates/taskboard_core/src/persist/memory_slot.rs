//! In-memory board slot for tests and hosts without durable storage.
//!
//! Goes through the same JSON encode/decode path as the SQLite slot, so
//! round-trip behavior stays identical across implementations.

use log::warn;
use std::cell::RefCell;

use super::{decode_payload, StateSlot};
use crate::model::state::BoardState;

/// Volatile slot backed by an owned JSON string.
///
/// Single-threaded by design, like the rest of the core; interior
/// mutability keeps the [`StateSlot`] surface `&self`.
#[derive(Default)]
pub struct MemoryStateSlot {
    payload: RefCell<Option<String>>,
}

impl MemoryStateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the slot with a raw payload, parseable or not. Test hook
    /// for exercising the corrupt-payload fallback.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }

    /// Returns a copy of the raw stored payload, if any.
    pub fn raw_payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl StateSlot for MemoryStateSlot {
    fn load(&self) -> BoardState {
        let stored = self.payload.borrow();
        let Some(payload) = stored.as_deref() else {
            return BoardState::seed();
        };

        match decode_payload(payload) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    "event=board_load module=persist status=error source=seed key=memory error={}",
                    err
                );
                BoardState::seed()
            }
        }
    }

    fn save(&self, state: &BoardState) {
        match serde_json::to_string(state) {
            Ok(payload) => *self.payload.borrow_mut() = Some(payload),
            Err(err) => warn!(
                "event=board_save module=persist status=error key=memory error={}",
                err
            ),
        }
    }

    fn clear(&self) {
        *self.payload.borrow_mut() = None;
    }
}
