//! Article records and the in-memory article collection

use std::fmt;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

/// Seed articles shown when the board starts
const SEED_ARTICLES: &str = include_str!("../../assets/seed_articles.json");

/// Stable identifier assigned to an article when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    /// Identifier, never part of the seed file
    #[serde(skip, default)]
    pub id: ArticleId,
    pub title: String,
    pub author: String,
    /// Local wall-clock time the article was posted
    pub date: NaiveDateTime,
    pub content: String,
}

impl Article {
    /// Create an article with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDateTime,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: ArticleId::new(),
            title: title.into(),
            author: author.into(),
            date,
            content: content.into(),
        }
    }
}

/// Ordered list of articles. Titles are not unique.
#[derive(Debug, Clone, Default)]
pub struct ArticleCollection {
    articles: Vec<Article>,
}

impl ArticleCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the bundled seed articles
    pub fn seed() -> Result<Self> {
        Self::from_json(SEED_ARTICLES).context("Failed to parse seed articles")
    }

    /// Parse a JSON array of articles, assigning each a new id
    pub fn from_json(json: &str) -> Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Ok(Self { articles })
    }

    /// Append an article at the end
    pub fn append(&mut self, article: Article) {
        self.articles.push(article);
    }

    /// Remove every article whose title matches exactly, returning how many went
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.articles.len();
        self.articles.retain(|article| article.title != title);
        before - self.articles.len()
    }

    /// Remove the article with the given id
    pub fn remove_by_id(&mut self, id: ArticleId) -> Option<Article> {
        let index = self.articles.iter().position(|article| article.id == id)?;
        Some(self.articles.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Titles in collection order, used for logging
    pub fn titles(&self) -> Vec<&str> {
        self.articles.iter().map(|a| a.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_seed_articles() {
        let seed = ArticleCollection::seed().unwrap();
        assert_eq!(seed.titles(), vec!["CSS Selectors", "Cascading", "CSS Grid"]);

        let first = seed.iter().next().unwrap();
        assert_eq!(first.author, "Tyrone");
        assert_eq!(
            first.date.date(),
            NaiveDate::from_ymd_opt(2023, 2, 20).unwrap()
        );
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let seed = ArticleCollection::seed().unwrap();
        let ids: Vec<_> = seed.iter().map(|a| a.id).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(ArticleCollection::from_json("[{\"title\": 3}]").is_err());
    }

    #[test]
    fn test_remove_by_title_removes_all_matches() {
        let mut articles = ArticleCollection::new();
        articles.append(Article::new("Duplicate", "Ava", date(), "one"));
        articles.append(Article::new("Other", "Ava", date(), "two"));
        articles.append(Article::new("Duplicate", "Lucas", date(), "three"));

        assert_eq!(articles.remove_by_title("Duplicate"), 2);
        assert_eq!(articles.titles(), vec!["Other"]);
        assert_eq!(articles.remove_by_title("Missing"), 0);
    }

    #[test]
    fn test_remove_by_id() {
        let mut articles = ArticleCollection::new();
        let first = Article::new("Duplicate", "Ava", date(), "one");
        let second = Article::new("Duplicate", "Ava", date(), "two");
        let second_id = second.id;
        articles.append(first);
        articles.append(second);

        let removed = articles.remove_by_id(second_id).unwrap();
        assert_eq!(removed.content, "two");
        assert_eq!(articles.len(), 1);
        assert!(articles.remove_by_id(second_id).is_none());
    }
}
