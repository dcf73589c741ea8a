//! Magazine domain model.
//!
//! # Invariants
//! - `name` is 2..=16 characters and `category` is non-empty at all times.
//! - A failed setter leaves the previous value in place.
//! - `kind` is fixed at construction.

use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier of a magazine.
pub type MagazineId = Uuid;

/// Publication classifier carried by a magazine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MagazineKind {
    Tech,
    Lifestyle,
    #[default]
    General,
}

impl MagazineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::Lifestyle => "Lifestyle",
            Self::General => "General",
        }
    }
}

/// A named, categorized publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    kind: MagazineKind,
}

impl Magazine {
    /// Creates a `General` magazine.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_kind(name, category, MagazineKind::General)
    }

    /// Creates a magazine with an explicit kind.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside 2..=16 chars.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn with_kind(
        name: impl Into<String>,
        category: impl Into<String>,
        kind: MagazineKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
            kind,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> MagazineKind {
        self.kind
    }

    /// Replaces the name after re-validating it.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category after re-validating it.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Magazine, MagazineKind};
    use crate::model::validation::ValidationError;

    #[test]
    fn with_kind_keeps_classifier() {
        let magazine = Magazine::with_kind("Wired", "Technology", MagazineKind::Tech).unwrap();
        assert_eq!(magazine.kind(), MagazineKind::Tech);
        assert_eq!(magazine.kind().as_str(), "Tech");
        assert_eq!(magazine.category(), "Technology");
    }

    #[test]
    fn constructor_rejects_bad_name_and_category() {
        assert_eq!(
            Magazine::new("V", "Fashion"),
            Err(ValidationError::MagazineNameLength { chars: 1 })
        );
        assert_eq!(
            Magazine::new("Vogue", ""),
            Err(ValidationError::EmptyCategory)
        );
    }

    #[test]
    fn failed_setters_keep_previous_values() {
        let mut magazine = Magazine::new("Vogue", "Fashion").unwrap();

        magazine.set_name("Vanity Fair").unwrap();
        assert_eq!(magazine.name(), "Vanity Fair");

        let err = magazine
            .set_name("Much Too Long A Name")
            .expect_err("17+ chars must fail");
        assert!(matches!(err, ValidationError::MagazineNameLength { .. }));
        assert_eq!(magazine.name(), "Vanity Fair");

        assert_eq!(magazine.set_category(""), Err(ValidationError::EmptyCategory));
        assert_eq!(magazine.category(), "Fashion");
    }
}
