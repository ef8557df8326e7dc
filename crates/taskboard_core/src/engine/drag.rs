//! Single-gesture drag state machine.

use crate::model::card::CardId;
use crate::model::column::ColumnId;
use crate::model::state::BoardState;
use crate::persist::StateSlot;
use crate::store::board_store::{BoardStore, StoreResult};

/// Gesture phase: nothing in flight, or one card being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging {
        card_id: CardId,
        from_column_id: ColumnId,
    },
}

/// What a drop resolved to, after the engine returned to Idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Cross-column drop; the store move was applied.
    Moved {
        card_id: CardId,
        from_column_id: ColumnId,
        to_column_id: ColumnId,
    },
    /// No target, same-column target, or the card vanished mid-gesture;
    /// no state was mutated and the card visually returns to its origin.
    ReturnedToOrigin,
    /// Drop reported without a preceding pick-up.
    NotDragging,
}

/// Tracks one drag gesture between pick-up and drop.
///
/// The presentation layer feeds it lifecycle events; the engine decides
/// whether a drop becomes a [`BoardStore::move_card`] call.
#[derive(Debug, Default)]
pub struct DragEngine {
    phase: DragPhase,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a gesture for `card_id`, recording its current column.
    ///
    /// Returns `false` and stays Idle when the card does not exist. A
    /// pick-up while already dragging replaces the previous gesture, which
    /// can never have mutated state before its drop.
    pub fn pick_up(&mut self, state: &BoardState, card_id: &str) -> bool {
        match state.card(card_id) {
            Some(card) => {
                self.phase = DragPhase::Dragging {
                    card_id: card.id.clone(),
                    from_column_id: card.column_id.clone(),
                };
                true
            }
            None => {
                self.phase = DragPhase::Idle;
                false
            }
        }
    }

    /// Ends the gesture over `target` (or `None` when released outside any
    /// column) and applies the move when the target is a different column.
    ///
    /// The engine is Idle again when this returns, whatever the outcome.
    /// Cards default to position 0 in their new column; the base model has
    /// no intra-column rank, so the value is carried but unused.
    pub fn drop<S: StateSlot>(
        &mut self,
        store: &mut BoardStore<S>,
        target: Option<&str>,
    ) -> StoreResult<DropOutcome> {
        let phase = std::mem::take(&mut self.phase);
        let DragPhase::Dragging {
            card_id,
            from_column_id,
        } = phase
        else {
            return Ok(DropOutcome::NotDragging);
        };

        let Some(to_column_id) = target else {
            return Ok(DropOutcome::ReturnedToOrigin);
        };
        if to_column_id == from_column_id {
            return Ok(DropOutcome::ReturnedToOrigin);
        }

        let to_column_id = to_column_id.to_string();
        if store.move_card(&card_id, &from_column_id, &to_column_id, 0)? {
            Ok(DropOutcome::Moved {
                card_id,
                from_column_id,
                to_column_id,
            })
        } else {
            Ok(DropOutcome::ReturnedToOrigin)
        }
    }

    /// Aborts the gesture (focus loss, escape) without touching state.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// The card currently in flight, if any.
    pub fn dragging(&self) -> Option<(&CardId, &ColumnId)> {
        match &self.phase {
            DragPhase::Dragging {
                card_id,
                from_column_id,
            } => Some((card_id, from_column_id)),
            DragPhase::Idle => None,
        }
    }
}
