//! Article collection, rendering into entries, and board configuration

pub mod article;
pub mod authors;
pub mod board;
pub mod config;
pub mod entry;
pub mod form;
