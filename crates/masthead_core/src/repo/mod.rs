//! Repository layer: the explicit registry that owns every entity.
//!
//! # Responsibility
//! - Own the canonical author, magazine and article collections.
//! - Answer identity lookups and per-entity article listings.
//!
//! # Invariants
//! - Listings preserve insertion order.
//! - A rejected insert leaves every collection untouched.

pub mod catalog_repo;
