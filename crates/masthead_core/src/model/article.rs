//! Article domain model: the join record between one author and one magazine.
//!
//! # Invariants
//! - `author`, `magazine` and `title` are fixed at construction.
//! - `title` is 5..=50 characters.
//! - Construction takes typed references, so a built `Article` always points
//!   at an existing `Author` and `Magazine` value.

use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{validate_article_title, ImmutableFieldError, ValidationError};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier of an article.
pub type ArticleId = Uuid;

/// A titled piece linking one author to one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Builds an unregistered article.
    ///
    /// Registration happens only through the catalog; an `Article` value
    /// on its own is invisible to every query.
    ///
    /// # Errors
    /// - `ValidationError::ArticleTitleLength` when `title` is outside 5..=50 chars.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_article_title(&title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            author: author.id(),
            magazine: magazine.id(),
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Titles are locked once set; always fails.
    pub fn set_title(&mut self, _title: impl Into<String>) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError::article_title())
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::author::Author;
    use crate::model::magazine::Magazine;
    use crate::model::validation::ValidationError;

    #[test]
    fn new_article_links_both_sides() {
        let author = Author::new("Carry Bradshaw").unwrap();
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();
        let article = Article::new(&author, &magazine, "How to wear a tutu with style").unwrap();

        assert_eq!(article.author_id(), author.id());
        assert_eq!(article.magazine_id(), magazine.id());
        assert_eq!(article.title(), "How to wear a tutu with style");
    }

    #[test]
    fn title_bounds_are_enforced() {
        let author = Author::new("Carry Bradshaw").unwrap();
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();

        assert!(Article::new(&author, &magazine, "Short").is_ok());
        assert!(Article::new(&author, &magazine, "x".repeat(50)).is_ok());
        assert_eq!(
            Article::new(&author, &magazine, "x".repeat(51)).unwrap_err(),
            ValidationError::ArticleTitleLength { chars: 51 }
        );
    }

    #[test]
    fn set_title_is_rejected_and_title_is_kept() {
        let author = Author::new("Carry Bradshaw").unwrap();
        let magazine = Magazine::new("Vogue", "Fashion").unwrap();
        let mut article = Article::new(&author, &magazine, "Dating life in NYC").unwrap();

        assert!(article.set_title("Another title").is_err());
        assert_eq!(article.title(), "Dating life in NYC");
    }
}
