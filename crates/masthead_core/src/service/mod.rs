//! Catalog use-case services.
//!
//! # Responsibility
//! - Expose entity creation, the single article registration point, and
//!   the author/magazine aggregate queries.
//! - Keep callers decoupled from the registry implementation.

pub mod author_queries;
pub mod catalog_service;
pub mod magazine_queries;
