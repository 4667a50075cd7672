//! Known authors and avatar lookup

use std::path::{Path, PathBuf};

/// Authors with a dedicated avatar image, in avatar index order
const KNOWN_AUTHORS: [&str; 8] = [
    "Tyrone", "Ava", "Elijah", "Lucas", "Ebony", "Keisha", "Jemila", "Daniel",
];

/// Avatar picked for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar {
    /// Image `avatar{index}.png`
    Known(usize),
    /// Fallback image for unknown authors
    Default,
}

impl Avatar {
    /// File name of the avatar image
    pub fn file_name(&self) -> String {
        match self {
            Avatar::Known(index) => format!("avatar{}.png", index),
            Avatar::Default => "default.jpeg".to_string(),
        }
    }

    /// Full path of the avatar image inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Fixed list of authors used to select avatars
#[derive(Debug, Clone)]
pub struct AuthorRegistry {
    names: Vec<String>,
}

impl Default for AuthorRegistry {
    fn default() -> Self {
        Self {
            names: KNOWN_AUTHORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AuthorRegistry {
    /// Look up the avatar for an author. Unknown names get the default avatar.
    pub fn avatar_for(&self, name: &str) -> Avatar {
        self.names
            .iter()
            .position(|known| known == name)
            .map(Avatar::Known)
            .unwrap_or(Avatar::Default)
    }
}
