//! Board state store: pure mutations plus the stateful boundary service.
//!
//! # Responsibility
//! - Apply user intents as pure, total functions over [`BoardState`].
//! - Own the authoritative in-memory state and persist it best-effort.
//!
//! # Invariants
//! - Pure mutations never fail and never mutate their input; unknown ids
//!   are no-ops returning the input unchanged.
//! - Boundary validation (id uniqueness, column references, blank titles)
//!   lives in [`BoardStore`], never inside the pure functions.
//!
//! [`BoardState`]: crate::model::state::BoardState
//! [`BoardStore`]: board_store::BoardStore

pub mod board_store;
pub mod metrics;
pub mod mutations;
