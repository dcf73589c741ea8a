//! Domain model for the author/magazine/article relationship graph.
//!
//! # Responsibility
//! - Define the three entity records and their field constraints.
//! - Keep validation next to the data it guards.
//!
//! # Invariants
//! - Every entity is identified by a stable `Uuid`; identity equality is id equality.
//! - Entities hold no back-references. Traversal goes through the catalog.
//! - Author name and article title are locked after construction.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
