//! Core domain logic for Masthead: authors, magazines and the articles
//! that link them.
//! This crate is the single source of truth for entity invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId, AuthorRole};
pub use model::magazine::{Magazine, MagazineId, MagazineKind};
pub use model::validation::{
    EntityKind, ImmutableFieldError, ValidationError, ARTICLE_TITLE_MAX_CHARS,
    ARTICLE_TITLE_MIN_CHARS, AUTHOR_NAME_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS,
};
pub use repo::catalog_repo::{
    CatalogError, CatalogRepository, CatalogResult, InMemoryCatalogRepository,
};
pub use service::catalog_service::CatalogService;
pub use service::magazine_queries::CONTRIBUTING_AUTHOR_MIN_ARTICLES;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
