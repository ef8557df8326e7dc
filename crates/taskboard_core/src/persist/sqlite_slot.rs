//! SQLite-backed board slot.
//!
//! # Responsibility
//! - Keep the serialized board under one row of the `board_slots` table.
//! - Honor the best-effort contract: log failures, never propagate them.
//!
//! # Invariants
//! - One slot key maps to at most one row.
//! - The payload column holds the exact JSON shape of [`BoardState`].
//!
//! [`BoardState`]: crate::model::state::BoardState

use log::{error, info, warn};
use rusqlite::{params, Connection, OptionalExtension};

use super::{decode_payload, SlotResult, StateSlot, DEFAULT_SLOT_KEY};
use crate::model::state::BoardState;

/// Board slot persisted in a SQLite key-value table.
pub struct SqliteStateSlot<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteStateSlot<'conn> {
    /// Creates a slot over the fixed default key.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, DEFAULT_SLOT_KEY)
    }

    /// Creates a slot over a caller-chosen key, letting multiple boards
    /// share one database.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    /// Fallible read used by [`StateSlot::load`]; `None` means the slot
    /// row does not exist yet.
    pub fn try_load(&self) -> SlotResult<Option<BoardState>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM board_slots WHERE slot_key = ?1;",
                params![self.key.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => Ok(Some(decode_payload(&payload)?)),
            None => Ok(None),
        }
    }

    /// Fallible write used by [`StateSlot::save`].
    pub fn try_save(&self, state: &BoardState) -> SlotResult<()> {
        let payload = serde_json::to_string(state)?;
        self.conn.execute(
            "INSERT INTO board_slots (slot_key, payload, written_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot_key) DO UPDATE SET
                payload = excluded.payload,
                written_at = excluded.written_at;",
            params![self.key.as_str(), payload],
        )?;
        Ok(())
    }

    /// Fallible clear used by [`StateSlot::clear`].
    pub fn try_clear(&self) -> SlotResult<()> {
        self.conn.execute(
            "DELETE FROM board_slots WHERE slot_key = ?1;",
            params![self.key.as_str()],
        )?;
        Ok(())
    }
}

impl StateSlot for SqliteStateSlot<'_> {
    fn load(&self) -> BoardState {
        match self.try_load() {
            Ok(Some(state)) => {
                info!(
                    "event=board_load module=persist status=ok source=slot key={} cards={} columns={}",
                    self.key,
                    state.cards.len(),
                    state.columns.len()
                );
                state
            }
            Ok(None) => {
                info!(
                    "event=board_load module=persist status=ok source=seed key={}",
                    self.key
                );
                BoardState::seed()
            }
            Err(err) => {
                warn!(
                    "event=board_load module=persist status=error source=seed key={} error={}",
                    self.key, err
                );
                BoardState::seed()
            }
        }
    }

    fn save(&self, state: &BoardState) {
        if let Err(err) = self.try_save(state) {
            error!(
                "event=board_save module=persist status=error key={} error={}",
                self.key, err
            );
        }
    }

    fn clear(&self) {
        if let Err(err) = self.try_clear() {
            error!(
                "event=board_clear module=persist status=error key={} error={}",
                self.key, err
            );
        }
    }
}
