//! Author-side queries over the catalog.
//!
//! Each query resolves the author id first, so an id registered as some
//! other entity fails with `CatalogError::TypeMismatch`.

use crate::model::article::Article;
use crate::model::author::AuthorId;
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::{CatalogRepository, CatalogResult};
use crate::service::catalog_service::CatalogService;
use std::collections::HashSet;

impl<R: CatalogRepository> CatalogService<R> {
    /// Articles written by `author`, in registry order.
    pub fn author_articles(&self, author: AuthorId) -> CatalogResult<Vec<&Article>> {
        self.repo.expect_author(author)?;
        Ok(self.repo.articles_by_author(author))
    }

    /// Distinct magazines `author` has written for, by first appearance.
    pub fn author_magazines(&self, author: AuthorId) -> CatalogResult<Vec<&Magazine>> {
        let mut seen = HashSet::new();
        Ok(self
            .author_articles(author)?
            .into_iter()
            .filter(|article| seen.insert(article.magazine_id()))
            .filter_map(|article| self.repo.get_magazine(article.magazine_id()))
            .collect())
    }

    /// Distinct categories across `author`'s magazines.
    ///
    /// Returns `Ok(None)` rather than an empty list when the author has not
    /// written anything yet.
    pub fn author_topic_areas(&self, author: AuthorId) -> CatalogResult<Option<Vec<&str>>> {
        let mut seen = HashSet::new();
        let areas: Vec<&str> = self
            .author_magazines(author)?
            .into_iter()
            .map(Magazine::category)
            .filter(|category| seen.insert(*category))
            .collect();
        Ok((!areas.is_empty()).then_some(areas))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::author::AuthorRole;
    use crate::model::magazine::MagazineKind;
    use crate::service::catalog_service::CatalogService;

    #[test]
    fn topic_areas_are_deduplicated_in_first_seen_order() {
        let mut catalog = CatalogService::in_memory();
        let author = catalog
            .create_author("Carry Bradshaw", AuthorRole::General)
            .unwrap();
        let vogue = catalog
            .create_magazine("Vogue", "Fashion", MagazineKind::Lifestyle)
            .unwrap();
        let wired = catalog
            .create_magazine("Wired", "Technology", MagazineKind::Tech)
            .unwrap();
        let gq = catalog
            .create_magazine("GQ", "Fashion", MagazineKind::Lifestyle)
            .unwrap();

        catalog.create_article(author, wired, "Gadgets of 2024").unwrap();
        catalog.create_article(author, vogue, "Tutus in the city").unwrap();
        catalog.create_article(author, gq, "Suits for every body").unwrap();

        let areas = catalog.author_topic_areas(author).unwrap();
        assert_eq!(areas, Some(vec!["Technology", "Fashion"]));
    }
}
