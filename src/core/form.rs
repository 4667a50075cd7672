//! Create-article form state and validation

use chrono::NaiveDateTime;
use thiserror::Error;

use super::article::Article;

/// Fields of the create form, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Content,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Content => "Content",
        }
    }
}

/// Validation failure reported next to the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill out the {} field.", .0.label())]
    MissingField(FormField),
}

/// Values typed into the create form
#[derive(Debug, Clone, Default)]
pub struct ArticleForm {
    pub title: String,
    pub author: String,
    pub content: String,
    /// Last validation failure, shown until the next edit or submit
    pub error: Option<FormError>,
}

impl ArticleForm {
    /// Check the required fields, stopping at the first empty one
    pub fn validate(&self) -> Result<(), FormError> {
        for field in [FormField::Title, FormField::Author, FormField::Content] {
            if self.value(field).is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Content => &self.content,
        }
    }

    /// Validate and drain the fields into a new article dated `date`.
    ///
    /// On failure the fields are left untouched and the error is recorded.
    pub fn take_article(&mut self, date: NaiveDateTime) -> Result<Article, FormError> {
        if let Err(e) = self.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }

        self.error = None;
        let title = std::mem::take(&mut self.title);
        let author = std::mem::take(&mut self.author);
        let content = std::mem::take(&mut self.content);
        Ok(Article::new(title, author, date, content))
    }
}
