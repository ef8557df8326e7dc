//! Drag-and-drop gesture engine.
//!
//! # Responsibility
//! - Track a single pick-up/drop gesture reported by the presentation
//!   layer and translate a cross-column drop into a store move.
//!
//! # Invariants
//! - The engine holds gesture state only; the board state lives in the
//!   store and is mutated exclusively through it.
//! - Every `drop` and `cancel` returns the engine to Idle; an aborted
//!   gesture never leaves a card with an inconsistent column.

pub mod drag;
