//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Register authors, magazines and articles under stable ids.
//! - Keep author->articles and magazine->articles indexes current on insert.
//!
//! # Invariants
//! - Ids are unique across all three entity kinds.
//! - An article is only stored when its author id resolves to an `Author`
//!   and its magazine id resolves to a `Magazine`.
//! - Index order equals registry insertion order.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{EntityKind, ImmutableFieldError, ValidationError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error for catalog registration, mutation and query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed its constraint.
    Validation(ValidationError),
    /// A locked field was written.
    Immutable(ImmutableFieldError),
    /// An id did not resolve to the required entity kind.
    /// `found` is `None` when the id is not registered at all.
    TypeMismatch {
        id: Uuid,
        expected: EntityKind,
        found: Option<EntityKind>,
    },
    /// An entity with this id is already registered.
    DuplicateId(Uuid),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Immutable(err) => write!(f, "{err}"),
            Self::TypeMismatch {
                id,
                expected,
                found: Some(found),
            } => write!(f, "expected {expected}, found {found}: {id}"),
            Self::TypeMismatch {
                id,
                expected,
                found: None,
            } => write!(f, "expected {expected}, found unregistered id: {id}"),
            Self::DuplicateId(id) => write!(f, "entity already registered: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Immutable(err) => Some(err),
            Self::TypeMismatch { .. } | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImmutableFieldError> for CatalogError {
    fn from(value: ImmutableFieldError) -> Self {
        Self::Immutable(value)
    }
}

/// Registry interface for the author/magazine/article graph.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> CatalogResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId>;
    /// Stores an article after re-checking both references.
    fn insert_article(&mut self, article: Article) -> CatalogResult<ArticleId>;

    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn get_magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;

    fn list_authors(&self) -> &[Author];
    fn list_magazines(&self) -> &[Magazine];
    /// All registered articles in insertion order.
    fn list_articles(&self) -> &[Article];

    /// Articles written by `id`, in insertion order.
    fn articles_by_author(&self, id: AuthorId) -> Vec<&Article>;
    /// Articles published in `id`, in insertion order.
    fn articles_in_magazine(&self, id: MagazineId) -> Vec<&Article>;

    /// Classifies an arbitrary id; `None` when nothing is registered under it.
    fn entity_kind(&self, id: Uuid) -> Option<EntityKind>;

    fn expect_author(&self, id: AuthorId) -> CatalogResult<&Author> {
        self.get_author(id)
            .ok_or_else(|| self.type_mismatch(id, EntityKind::Author))
    }

    fn expect_magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        self.get_magazine(id)
            .ok_or_else(|| self.type_mismatch(id, EntityKind::Magazine))
    }

    fn expect_article(&self, id: ArticleId) -> CatalogResult<&Article> {
        self.get_article(id)
            .ok_or_else(|| self.type_mismatch(id, EntityKind::Article))
    }

    fn type_mismatch(&self, id: Uuid, expected: EntityKind) -> CatalogError {
        CatalogError::TypeMismatch {
            id,
            expected,
            found: self.entity_kind(id),
        }
    }
}

/// In-process catalog backed by insertion-ordered vectors.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    positions: HashMap<Uuid, (EntityKind, usize)>,
    by_author: HashMap<AuthorId, Vec<usize>>,
    by_magazine: HashMap<MagazineId, Vec<usize>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: Uuid, kind: EntityKind) -> Option<usize> {
        match self.positions.get(&id) {
            Some((found, index)) if *found == kind => Some(*index),
            _ => None,
        }
    }

    fn ensure_unregistered(&self, id: Uuid) -> CatalogResult<()> {
        if self.positions.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }
        Ok(())
    }

    fn resolve_indexed(&self, indexes: Option<&Vec<usize>>) -> Vec<&Article> {
        indexes
            .map(|indexes| indexes.iter().map(|&index| &self.articles[index]).collect())
            .unwrap_or_default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> CatalogResult<AuthorId> {
        let id = author.id();
        self.ensure_unregistered(id)?;
        self.positions
            .insert(id, (EntityKind::Author, self.authors.len()));
        self.authors.push(author);
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId> {
        let id = magazine.id();
        self.ensure_unregistered(id)?;
        self.positions
            .insert(id, (EntityKind::Magazine, self.magazines.len()));
        self.magazines.push(magazine);
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> CatalogResult<ArticleId> {
        let id = article.id();
        self.ensure_unregistered(id)?;
        self.expect_author(article.author_id())?;
        self.expect_magazine(article.magazine_id())?;

        let index = self.articles.len();
        self.positions.insert(id, (EntityKind::Article, index));
        self.by_author
            .entry(article.author_id())
            .or_default()
            .push(index);
        self.by_magazine
            .entry(article.magazine_id())
            .or_default()
            .push(index);
        self.articles.push(article);
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.position(id, EntityKind::Author)
            .map(|index| &self.authors[index])
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.position(id, EntityKind::Magazine)
            .map(|index| &self.magazines[index])
    }

    fn get_magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.position(id, EntityKind::Magazine)
            .map(|index| &mut self.magazines[index])
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.position(id, EntityKind::Article)
            .map(|index| &self.articles[index])
    }

    fn list_authors(&self) -> &[Author] {
        &self.authors
    }

    fn list_magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn list_articles(&self) -> &[Article] {
        &self.articles
    }

    fn articles_by_author(&self, id: AuthorId) -> Vec<&Article> {
        self.resolve_indexed(self.by_author.get(&id))
    }

    fn articles_in_magazine(&self, id: MagazineId) -> Vec<&Article> {
        self.resolve_indexed(self.by_magazine.get(&id))
    }

    fn entity_kind(&self, id: Uuid) -> Option<EntityKind> {
        self.positions.get(&id).map(|(kind, _)| *kind)
    }
}
