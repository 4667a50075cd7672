//! Article board controller
//!
//! Owns the article collection and the entries displayed for it, and applies
//! user actions to both.

use anyhow::Result;
use chrono::{Local, NaiveDateTime};

use super::article::{ArticleCollection, ArticleId};
use super::authors::AuthorRegistry;
use super::config::{BoardConfig, DeletionMode};
use super::entry::EntryList;
use super::form::{ArticleForm, FormError};

/// Action emitted by an interactive control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Submit the create form
    Submit,
    /// Delete control of an entry
    Delete(ArticleId),
    /// Read More / Read Less control of an entry
    ToggleReadMore(ArticleId),
}

/// The article board
pub struct ArticleBoard {
    articles: ArticleCollection,
    entries: EntryList,
    authors: AuthorRegistry,
    settings: BoardConfig,
}

impl ArticleBoard {
    /// Create an empty board
    pub fn new(settings: BoardConfig) -> Self {
        Self {
            articles: ArticleCollection::new(),
            entries: EntryList::default(),
            authors: AuthorRegistry::default(),
            settings,
        }
    }

    /// Create a board holding the seed articles
    pub fn seeded(settings: BoardConfig) -> Result<Self> {
        let seed = ArticleCollection::seed()?;
        let mut board = Self::new(settings);
        for article in seed.iter() {
            board.entries.add_entry(article, &board.authors, board.settings.truncation_threshold);
        }
        board.articles = seed;
        tracing::info!("Rendered {} seed articles", board.articles.len());
        Ok(board)
    }

    pub fn articles(&self) -> &ArticleCollection {
        &self.articles
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn settings(&self) -> &BoardConfig {
        &self.settings
    }

    pub fn set_deletion_mode(&mut self, mode: DeletionMode) {
        if self.settings.deletion_mode != mode {
            tracing::info!("Deletion mode set to {:?}", mode);
            self.settings.deletion_mode = mode;
        }
    }

    /// Apply an action coming from the UI
    pub fn dispatch(&mut self, action: BoardAction, form: &mut ArticleForm) {
        match action {
            BoardAction::Submit => {
                // Failures stay recorded on the form for display
                let _ = self.submit(form);
            }
            BoardAction::Delete(id) => self.delete(id),
            BoardAction::ToggleReadMore(id) => self.toggle_read_more(id),
        }
    }

    /// Submit the form, dating the article now
    pub fn submit(&mut self, form: &mut ArticleForm) -> Result<ArticleId, FormError> {
        self.submit_at(form, Local::now().naive_local())
    }

    /// Submit the form with an explicit posting time
    pub fn submit_at(
        &mut self,
        form: &mut ArticleForm,
        date: NaiveDateTime,
    ) -> Result<ArticleId, FormError> {
        let article = match form.take_article(date) {
            Ok(article) => article,
            Err(e) => {
                tracing::debug!("Rejected submit: {}", e);
                return Err(e);
            }
        };

        let id = article.id;
        tracing::info!("Added article '{}' by {}", article.title, article.author);
        self.entries
            .add_entry(&article, &self.authors, self.settings.truncation_threshold);
        self.articles.append(article);
        Ok(id)
    }

    /// Handle the delete control of the entry rendered for `id`
    pub fn delete(&mut self, id: ArticleId) {
        let Some(entry) = self.entries.remove(id) else {
            tracing::warn!("Delete requested for missing entry {}", id);
            return;
        };

        let removed = match self.settings.deletion_mode {
            DeletionMode::ById => usize::from(self.articles.remove_by_id(id).is_some()),
            DeletionMode::ByTitle => self.articles.remove_by_title(&entry.title),
        };

        tracing::info!("Deleted entry '{}', {} article(s) removed", entry.title, removed);
        if self.articles.is_empty() {
            tracing::debug!("No articles remain");
        } else {
            tracing::debug!("Remaining articles: {:?}", self.articles.titles());
        }
    }

    /// Flip the expanded state of the entry rendered for `id`
    pub fn toggle_read_more(&mut self, id: ArticleId) {
        match self.entries.get_mut(id) {
            Some(entry) if entry.body.has_toggle() => {
                entry.expanded = !entry.expanded;
            }
            Some(_) => {}
            None => tracing::warn!("Toggle requested for missing entry {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::Article;
    use crate::core::entry::Entry;
    use crate::core::form::FormField;
    use chrono::NaiveDate;

    fn board() -> ArticleBoard {
        ArticleBoard::seeded(BoardConfig::default()).unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 7)
            .unwrap()
            .and_hms_opt(8, 9, 10)
            .unwrap()
    }

    fn form(title: &str, author: &str, content: &str) -> ArticleForm {
        ArticleForm {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
            error: None,
        }
    }

    fn entry(board: &ArticleBoard, id: ArticleId) -> &Entry {
        board.entries().iter().find(|e| e.article_id == id).unwrap()
    }

    fn entry_id(board: &ArticleBoard, title: &str) -> ArticleId {
        board
            .entries()
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.article_id)
            .unwrap()
    }

    fn entry_titles(board: &ArticleBoard) -> Vec<String> {
        board.entries().iter().map(|e| e.title.clone()).collect()
    }

    fn in_sync(board: &ArticleBoard) -> bool {
        board.articles().len() == board.entries().len()
            && board
                .articles()
                .iter()
                .zip(board.entries().iter())
                .all(|(a, e)| a.id == e.article_id)
    }

    #[test]
    fn test_seed_renders_every_article_in_order() {
        let board = board();
        assert_eq!(board.entries().len(), 3);
        assert_eq!(entry_titles(&board), vec!["CSS Selectors", "Cascading", "CSS Grid"]);
        assert!(in_sync(&board));

        let toggles: Vec<_> = board.entries().iter().map(|e| e.body.has_toggle()).collect();
        assert_eq!(toggles, vec![true, false, true]);
    }

    #[test]
    fn test_submit_appends_article() {
        let mut board = board();
        let mut form = form("Flexbox", "Ava", "short text");

        let id = board.submit_at(&mut form, now()).unwrap();

        assert_eq!(board.articles().len(), 4);
        let article = board.articles().iter().find(|a| a.id == id).unwrap();
        assert_eq!(article.title, "Flexbox");
        assert_eq!(article.author, "Ava");
        assert_eq!(article.content, "short text");
        assert_eq!(article.date, now());
        assert!(form.title.is_empty() && form.author.is_empty() && form.content.is_empty());

        assert_eq!(board.entries().len(), 4);
        let rendered = board.entries().iter().last().unwrap();
        assert_eq!(rendered.article_id, id);
        assert_eq!(rendered.header.byline, "Ava · Fri Jun 07 2024");
        assert!(in_sync(&board));
    }

    #[test]
    fn test_submit_with_empty_title_changes_nothing() {
        let mut board = board();
        let mut form = form("", "Ava", "short text");

        let err = board.submit_at(&mut form, now()).unwrap_err();

        assert_eq!(err, FormError::MissingField(FormField::Title));
        assert_eq!(board.articles().len(), 3);
        assert_eq!(board.entries().len(), 3);
        assert_eq!(form.author, "Ava");
        assert_eq!(form.content, "short text");
    }

    #[test]
    fn test_dispatch_submit_records_error() {
        let mut board = board();
        let mut form = form("Flexbox", "", "text");

        board.dispatch(BoardAction::Submit, &mut form);
        assert_eq!(form.error, Some(FormError::MissingField(FormField::Author)));
        assert_eq!(board.articles().len(), 3);

        form.author = "Ava".to_string();
        board.dispatch(BoardAction::Submit, &mut form);
        assert!(form.error.is_none());
        assert_eq!(board.articles().len(), 4);
    }

    #[test]
    fn test_delete_single_article() {
        let mut board = board();
        let grid = entry_id(&board, "CSS Grid");

        board.dispatch(BoardAction::Delete(grid), &mut ArticleForm::default());

        assert_eq!(entry_titles(&board), vec!["CSS Selectors", "Cascading"]);
        assert_eq!(board.articles().titles(), vec!["CSS Selectors", "Cascading"]);
        assert!(in_sync(&board));
    }

    fn board_with_duplicates(mode: DeletionMode) -> (ArticleBoard, ArticleId) {
        let settings = BoardConfig {
            deletion_mode: mode,
            ..BoardConfig::default()
        };
        let mut board = ArticleBoard::new(settings);
        let first = board
            .submit_at(&mut form("Duplicate", "Ava", "one"), now())
            .unwrap();
        board
            .submit_at(&mut form("Duplicate", "Lucas", "two"), now())
            .unwrap();
        (board, first)
    }

    #[test]
    fn test_delete_by_title_removes_all_duplicates() {
        let (mut board, first) = board_with_duplicates(DeletionMode::ByTitle);

        board.delete(first);

        assert!(board.articles().is_empty());
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries().iter().next().unwrap().body.visible, "two");

        // The stale entry can still be deleted
        let stale = board.entries().iter().next().unwrap().article_id;
        board.delete(stale);
        assert!(board.entries().is_empty());
    }

    #[test]
    fn test_delete_by_id_keeps_duplicates() {
        let (mut board, first) = board_with_duplicates(DeletionMode::ById);

        board.delete(first);

        assert_eq!(board.articles().len(), 1);
        assert_eq!(board.articles().iter().next().unwrap().content, "two");
        assert!(in_sync(&board));
    }

    #[test]
    fn test_delete_missing_entry_is_ignored() {
        let mut board = board();
        let stray = Article::new("Stray", "Ava", now(), "x");
        board.delete(stray.id);
        assert_eq!(board.articles().len(), 3);
        assert_eq!(board.entries().len(), 3);
    }

    #[test]
    fn test_toggle_read_more_round_trip() {
        let mut board = board();
        let selectors = entry_id(&board, "CSS Selectors");
        let original = entry(&board, selectors).clone();
        assert_eq!(original.toggle_label(), Some("Read More"));

        board.toggle_read_more(selectors);
        let expanded = entry(&board, selectors);
        assert_eq!(expanded.toggle_label(), Some("Read Less"));
        assert!(expanded.shows_suffix());
        assert!(!expanded.shows_ellipsis());

        board.dispatch(BoardAction::ToggleReadMore(selectors), &mut ArticleForm::default());
        assert_eq!(entry(&board, selectors), &original);
    }

    #[test]
    fn test_toggle_short_entry_is_noop() {
        let mut board = board();
        let cascading = entry_id(&board, "Cascading");

        board.toggle_read_more(cascading);
        assert!(!entry(&board, cascading).expanded);
    }

    #[test]
    fn test_custom_threshold() {
        let settings = BoardConfig {
            truncation_threshold: 5,
            ..BoardConfig::default()
        };
        let mut board = ArticleBoard::new(settings);
        let id = board
            .submit_at(&mut form("Tiny", "Ava", "abcdefg"), now())
            .unwrap();

        let rendered = entry(&board, id);
        assert_eq!(rendered.body.visible, "abcde");
        assert_eq!(rendered.displayed_content(), "abcde...");
    }

    #[test]
    fn test_set_deletion_mode() {
        let mut board = board();
        board.set_deletion_mode(DeletionMode::ByTitle);
        assert_eq!(board.settings().deletion_mode, DeletionMode::ByTitle);
    }
}
