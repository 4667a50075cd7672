//! UI components for the article board

pub mod article_form;
pub mod article_list;
pub mod avatar;
