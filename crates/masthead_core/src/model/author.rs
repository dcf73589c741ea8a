//! Author domain model.
//!
//! # Invariants
//! - `name` is non-empty and locked once the author exists.
//! - `role` is fixed at construction.

use crate::model::validation::{validate_author_name, ImmutableFieldError, ValidationError};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier of an author.
pub type AuthorId = Uuid;

/// Seniority classifier carried by an author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorRole {
    Senior,
    Junior,
    #[default]
    General,
}

impl AuthorRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Junior => "Junior",
            Self::General => "General",
        }
    }
}

/// A named contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    role: AuthorRole,
}

impl Author {
    /// Creates a `General` author.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_role(name, AuthorRole::General)
    }

    /// Creates an author with an explicit role.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn with_role(name: impl Into<String>, role: AuthorRole) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            role,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> AuthorRole {
        self.role
    }

    /// Author names are set once; every rename attempt fails and the stored
    /// name is left as is.
    pub fn rename(&mut self, _new_name: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError::author_name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Author, AuthorRole};
    use crate::model::validation::{EntityKind, ValidationError};

    #[test]
    fn new_author_defaults_to_general_role() {
        let author = Author::new("Carry Bradshaw").expect("valid author");
        assert_eq!(author.name(), "Carry Bradshaw");
        assert_eq!(author.role(), AuthorRole::General);
        assert!(!author.id().is_nil());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(Author::new(""), Err(ValidationError::EmptyAuthorName));
    }

    #[test]
    fn rename_is_always_rejected() {
        let mut author = Author::with_role("Nathaniel Hawthorne", AuthorRole::Senior).unwrap();
        let err = author.rename("Someone Else").unwrap_err();
        assert_eq!(err.entity, EntityKind::Author);
        assert_eq!(err.field, "name");
        assert_eq!(author.name(), "Nathaniel Hawthorne");
    }
}
