//! Field constraints and model-level errors.
//!
//! Two error kinds live here: `ValidationError` for a value that fails its
//! constraint, and `ImmutableFieldError` for a write to a locked field.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum author name length in characters.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Minimum magazine name length in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length in characters.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length in characters.
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Entity kinds known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Author,
    Magazine,
    Article,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Magazine => "magazine",
            Self::Article => "article",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value failed its format or range constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    MagazineNameLength { chars: usize },
    EmptyCategory,
    ArticleTitleLength { chars: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { chars } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and \
                 {MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be a non-empty string"),
            Self::ArticleTitleLength { chars } => write!(
                f,
                "article title must be between {ARTICLE_TITLE_MIN_CHARS} and \
                 {ARTICLE_TITLE_MAX_CHARS} characters, got {chars}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// A write targeted a field that is locked after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutableFieldError {
    pub entity: EntityKind,
    pub field: &'static str,
}

impl ImmutableFieldError {
    pub const fn author_name() -> Self {
        Self {
            entity: EntityKind::Author,
            field: "name",
        }
    }

    pub const fn article_title() -> Self {
        Self {
            entity: EntityKind::Article,
            field: "title",
        }
    }
}

impl Display for ImmutableFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} cannot be changed after construction",
            self.entity, self.field
        )
    }
}

impl Error for ImmutableFieldError {}

pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if char_len(name) < AUTHOR_NAME_MIN_CHARS {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let chars = char_len(name);
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::MagazineNameLength { chars });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_article_title(title: &str) -> Result<(), ValidationError> {
    let chars = char_len(title);
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::ArticleTitleLength { chars });
    }
    Ok(())
}
