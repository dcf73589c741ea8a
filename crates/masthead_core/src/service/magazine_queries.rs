//! Magazine-side and registry-wide aggregate queries.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{CatalogRepository, CatalogResult};
use crate::service::catalog_service::CatalogService;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Minimum number of articles in one magazine for an author to count as a
/// contributing author of it.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 3;

impl<R: CatalogRepository> CatalogService<R> {
    /// Articles published in `magazine`, in registry order.
    pub fn magazine_articles(&self, magazine: MagazineId) -> CatalogResult<Vec<&Article>> {
        self.repo.expect_magazine(magazine)?;
        Ok(self.repo.articles_in_magazine(magazine))
    }

    /// Distinct authors who wrote for `magazine`, by first appearance.
    pub fn contributors(&self, magazine: MagazineId) -> CatalogResult<Vec<&Author>> {
        let mut seen = HashSet::new();
        Ok(self
            .magazine_articles(magazine)?
            .into_iter()
            .filter(|article| seen.insert(article.author_id()))
            .filter_map(|article| self.repo.get_author(article.author_id()))
            .collect())
    }

    /// Titles published in `magazine`; `Ok(None)` when there are none.
    pub fn article_titles(&self, magazine: MagazineId) -> CatalogResult<Option<Vec<&str>>> {
        let titles: Vec<&str> = self
            .magazine_articles(magazine)?
            .into_iter()
            .map(Article::title)
            .collect();
        Ok((!titles.is_empty()).then_some(titles))
    }

    /// Authors with at least `CONTRIBUTING_AUTHOR_MIN_ARTICLES` articles in
    /// `magazine`, by first appearance; `Ok(None)` when nobody qualifies.
    pub fn contributing_authors(
        &self,
        magazine: MagazineId,
    ) -> CatalogResult<Option<Vec<&Author>>> {
        let articles = self.magazine_articles(magazine)?;
        let authors: Vec<&Author> = tally(articles.iter().map(|article| article.author_id()))
            .into_iter()
            .filter(|(_, count)| *count >= CONTRIBUTING_AUTHOR_MIN_ARTICLES)
            .filter_map(|(author, _)| self.repo.get_author(author))
            .collect();
        Ok((!authors.is_empty()).then_some(authors))
    }

    /// Magazine with the most articles across the whole registry.
    ///
    /// Ties go to the magazine whose first article appears earliest in the
    /// registry. `None` when no article exists.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut top: Option<(MagazineId, usize)> = None;
        for (magazine, count) in tally(
            self.repo
                .list_articles()
                .iter()
                .map(|article| article.magazine_id()),
        ) {
            let leads = match top {
                Some((_, best)) => count > best,
                None => true,
            };
            if leads {
                top = Some((magazine, count));
            }
        }
        top.and_then(|(magazine, _)| self.repo.get_magazine(magazine))
    }
}

/// Counts keys, keeping the order in which each key was first seen.
fn tally<K: Copy + Eq + Hash>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        let slot = *slots.entry(key).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts
}
