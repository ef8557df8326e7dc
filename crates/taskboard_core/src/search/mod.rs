//! Read-only card projections for the presentation layer.
//!
//! # Responsibility
//! - Narrow a column's cards by a user query without touching state.
//!
//! # Invariants
//! - Projections never mutate or persist anything.
//! - Returned order is the emergent insertion order of the card
//!   collection, which is the visual intra-column position.

pub mod filter;
