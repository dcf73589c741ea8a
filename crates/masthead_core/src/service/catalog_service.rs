//! Catalog use-case service.
//!
//! # Responsibility
//! - Create and register authors, magazines and articles.
//! - Route field updates through model validation.
//!
//! # Invariants
//! - Article checks run in order: author kind, magazine kind, title.
//! - Nothing is registered when any check fails.
//! - Log lines carry ids and outcomes only, never names or titles.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId, AuthorRole};
use crate::model::magazine::{Magazine, MagazineId, MagazineKind};
use crate::model::validation::{EntityKind, ImmutableFieldError};
use crate::repo::catalog_repo::{
    CatalogError, CatalogRepository, CatalogResult, InMemoryCatalogRepository,
};
use log::{info, warn};

/// Service facade over a catalog repository.
pub struct CatalogService<R: CatalogRepository = InMemoryCatalogRepository> {
    pub(crate) repo: R,
}

impl CatalogService<InMemoryCatalogRepository> {
    /// Creates a service over a fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalogRepository::new())
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers an author.
    pub fn create_author(
        &mut self,
        name: impl Into<String>,
        role: AuthorRole,
    ) -> CatalogResult<AuthorId> {
        let author = Author::with_role(name, role)?;
        let id = self.repo.insert_author(author)?;
        info!(
            "event=author_create module=catalog status=ok author_id={id} role={}",
            role.as_str()
        );
        Ok(id)
    }

    /// Creates and registers a magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        kind: MagazineKind,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::with_kind(name, category, kind)?;
        let id = self.repo.insert_magazine(magazine)?;
        info!(
            "event=magazine_create module=catalog status=ok magazine_id={id} kind={}",
            kind.as_str()
        );
        Ok(id)
    }

    /// Creates and registers an article linking `author` to `magazine`.
    ///
    /// # Errors
    /// - `CatalogError::TypeMismatch` when `author` is not a registered author
    ///   or `magazine` is not a registered magazine.
    /// - `CatalogError::Validation` when `title` is outside 5..=50 chars.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let article = match self.build_article(author, magazine, title) {
            Ok(article) => article,
            Err(err) => {
                warn!(
                    "event=article_create module=catalog status=error author_id={author} \
                     magazine_id={magazine} error_kind={}",
                    error_kind(&err)
                );
                return Err(err);
            }
        };

        let id = self.repo.insert_article(article)?;
        info!(
            "event=article_create module=catalog status=ok article_id={id} \
             author_id={author} magazine_id={magazine}"
        );
        Ok(id)
    }

    /// Author-side convenience over `create_article`; returns the stored article.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<&Article> {
        let id = self.create_article(author, magazine, title)?;
        self.repo.expect_article(id)
    }

    fn build_article(
        &self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<Article> {
        let author = self.repo.expect_author(author)?;
        let magazine = self.repo.expect_magazine(magazine)?;
        Ok(Article::new(author, magazine, title)?)
    }

    pub fn author(&self, id: AuthorId) -> CatalogResult<&Author> {
        self.repo.expect_author(id)
    }

    pub fn magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        self.repo.expect_magazine(id)
    }

    pub fn article(&self, id: ArticleId) -> CatalogResult<&Article> {
        self.repo.expect_article(id)
    }

    pub fn authors(&self) -> &[Author] {
        self.repo.list_authors()
    }

    pub fn magazines(&self) -> &[Magazine] {
        self.repo.list_magazines()
    }

    /// Every registered article in registry order.
    pub fn articles(&self) -> &[Article] {
        self.repo.list_articles()
    }

    pub fn author_count(&self) -> usize {
        self.repo.list_authors().len()
    }

    pub fn magazine_count(&self) -> usize {
        self.repo.list_magazines().len()
    }

    pub fn article_count(&self) -> usize {
        self.repo.list_articles().len()
    }

    /// Author names are locked; fails with `CatalogError::Immutable` for
    /// every registered author.
    pub fn rename_author(
        &mut self,
        id: AuthorId,
        _new_name: impl Into<String>,
    ) -> CatalogResult<()> {
        self.repo.expect_author(id)?;
        warn!("event=author_rename module=catalog status=rejected author_id={id}");
        Err(ImmutableFieldError::author_name().into())
    }

    /// Article titles are locked; fails with `CatalogError::Immutable` for
    /// every registered article.
    pub fn retitle_article(
        &mut self,
        id: ArticleId,
        _new_title: impl Into<String>,
    ) -> CatalogResult<()> {
        self.repo.expect_article(id)?;
        warn!("event=article_retitle module=catalog status=rejected article_id={id}");
        Err(ImmutableFieldError::article_title().into())
    }

    /// Renames a magazine; the prior name is kept when validation fails.
    pub fn set_magazine_name(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        let Some(magazine) = self.repo.get_magazine_mut(id) else {
            return Err(self.repo.type_mismatch(id, EntityKind::Magazine));
        };
        magazine.set_name(name)?;
        info!("event=magazine_update module=catalog status=ok magazine_id={id} field=name");
        Ok(())
    }

    /// Re-categorizes a magazine; the prior category is kept when validation fails.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        let Some(magazine) = self.repo.get_magazine_mut(id) else {
            return Err(self.repo.type_mismatch(id, EntityKind::Magazine));
        };
        magazine.set_category(category)?;
        info!("event=magazine_update module=catalog status=ok magazine_id={id} field=category");
        Ok(())
    }
}

impl Default for CatalogService<InMemoryCatalogRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn error_kind(err: &CatalogError) -> &'static str {
    match err {
        CatalogError::Validation(_) => "validation",
        CatalogError::Immutable(_) => "immutable",
        CatalogError::TypeMismatch { .. } => "type_mismatch",
        CatalogError::DuplicateId(_) => "duplicate_id",
    }
}
