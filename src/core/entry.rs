//! Rendering articles into entries
//!
//! An [`Entry`] is the displayed form of one article: a delete control, a
//! header with avatar and byline, and a body whose long content is folded
//! behind a "Read More" toggle. Entries carry their article's id and title
//! so handlers never have to inspect the layout to find them.

use chrono::NaiveDateTime;

use super::article::{Article, ArticleId};
use super::authors::{AuthorRegistry, Avatar};

/// Content longer than this many characters is collapsed by default
pub const TRUNCATION_THRESHOLD: usize = 200;

/// Marker shown after the visible prefix of collapsed content
pub const ELLIPSIS: &str = "...";

/// Entry header: avatar and "author · date" byline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    pub avatar: Avatar,
    pub author: String,
    pub byline: String,
}

/// Part of the content hidden while the entry is collapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenContent {
    pub suffix: String,
}

/// Entry body: title line and content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBody {
    pub title: String,
    /// Always-visible start of the content
    pub visible: String,
    /// Present only when the content exceeded the threshold
    pub hidden: Option<HiddenContent>,
}

impl EntryBody {
    /// Whether a Read More / Read Less control is shown
    pub fn has_toggle(&self) -> bool {
        self.hidden.is_some()
    }
}

/// Displayed form of one article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub article_id: ArticleId,
    /// Title the entry was rendered with
    pub title: String,
    pub header: EntryHeader,
    pub body: EntryBody,
    pub expanded: bool,
}

impl Entry {
    /// Label of the toggle control, if the entry has one
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.body.has_toggle() {
            return None;
        }
        Some(if self.expanded { "Read Less" } else { "Read More" })
    }

    /// Whether the ellipsis marker is currently shown
    pub fn shows_ellipsis(&self) -> bool {
        self.body.has_toggle() && !self.expanded
    }

    /// Whether the hidden suffix is currently shown
    pub fn shows_suffix(&self) -> bool {
        self.body.has_toggle() && self.expanded
    }

    /// Content text as currently displayed
    pub fn displayed_content(&self) -> String {
        let mut text = self.body.visible.clone();
        if self.shows_ellipsis() {
            text.push_str(ELLIPSIS);
        }
        if let (true, Some(hidden)) = (self.shows_suffix(), &self.body.hidden) {
            text.push_str(&hidden.suffix);
        }
        text
    }
}

/// Format a date like `Mon Feb 20 2023`
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Build the header for an article by `author` posted at `date`
pub fn build_header(author: &str, date: &NaiveDateTime, registry: &AuthorRegistry) -> EntryHeader {
    EntryHeader {
        avatar: registry.avatar_for(author),
        author: author.to_string(),
        byline: format!("{} · {}", author, format_date(date)),
    }
}

/// Split `text` after `index` characters. The cut ignores word boundaries.
pub fn split_text(text: &str, index: usize) -> (&str, &str) {
    let byte_index = text
        .char_indices()
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text.split_at(byte_index)
}

/// Build the body, folding content longer than `threshold` characters
pub fn build_body(title: &str, content: &str, threshold: usize) -> EntryBody {
    if content.chars().count() > threshold {
        let (visible, suffix) = split_text(content, threshold);
        EntryBody {
            title: title.to_string(),
            visible: visible.to_string(),
            hidden: Some(HiddenContent {
                suffix: suffix.to_string(),
            }),
        }
    } else {
        EntryBody {
            title: title.to_string(),
            visible: content.to_string(),
            hidden: None,
        }
    }
}

/// Compose the full entry for an article
pub fn build_entry(article: &Article, registry: &AuthorRegistry, threshold: usize) -> Entry {
    Entry {
        article_id: article.id,
        title: article.title.clone(),
        header: build_header(&article.author, &article.date, registry),
        body: build_body(&article.title, &article.content, threshold),
        expanded: false,
    }
}

/// Ordered entries currently on the page
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// Render `article` and append it at the end of the list
    pub fn add_entry(&mut self, article: &Article, registry: &AuthorRegistry, threshold: usize) {
        self.entries.push(build_entry(article, registry, threshold));
    }

    pub fn get_mut(&mut self, id: ArticleId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.article_id == id)
    }

    /// Remove the entry rendered for `id`
    pub fn remove(&mut self, id: ArticleId) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.article_id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
