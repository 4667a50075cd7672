//! Application configuration management

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::entry::TRUNCATION_THRESHOLD;

/// How the delete control picks the articles to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionMode {
    /// Remove only the article the entry was rendered from
    #[default]
    ById,
    /// Remove every article sharing the entry's title
    ByTitle,
}

impl DeletionMode {
    pub fn label(&self) -> &'static str {
        match self {
            DeletionMode::ById => "Delete clicked article",
            DeletionMode::ByTitle => "Delete all with same title",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board behaviour
    pub board: BoardConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Board-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Content longer than this many characters gets a Read More toggle
    pub truncation_threshold: usize,
    pub deletion_mode: DeletionMode,
    /// Directory holding avatar images
    pub avatar_dir: Option<PathBuf>,
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Width of the create form panel
    pub form_width: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            truncation_threshold: TRUNCATION_THRESHOLD,
            deletion_mode: DeletionMode::default(),
            avatar_dir: None,
        }
    }
}

impl BoardConfig {
    /// Avatar directory, `images` unless configured
    pub fn avatar_dir(&self) -> PathBuf {
        self.avatar_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("images"))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            form_width: 300.0,
        }
    }
}

impl UiConfig {
    pub fn is_dark(&self) -> bool {
        self.theme != "light"
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "articleboard", "ArticleBoard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }
}
