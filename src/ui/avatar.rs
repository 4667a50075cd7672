//! Author avatars
//!
//! Uses the avatar image when it exists on disk and falls back to a colored
//! badge with the author's initial.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32};

use crate::core::authors::Avatar;

const AVATAR_SIZE: f32 = 36.0;

const BADGE_COLORS: [Color32; 8] = [
    Color32::from_rgb(224, 108, 117),
    Color32::from_rgb(97, 175, 239),
    Color32::from_rgb(152, 195, 121),
    Color32::from_rgb(229, 192, 123),
    Color32::from_rgb(198, 120, 221),
    Color32::from_rgb(86, 182, 194),
    Color32::from_rgb(209, 154, 102),
    Color32::from_rgb(129, 162, 190),
];

const DEFAULT_BADGE_COLOR: Color32 = Color32::from_rgb(120, 120, 120);

/// Remembers which avatar images exist so the disk is checked once per file
#[derive(Debug, Default)]
pub struct AvatarCache {
    exists: HashMap<PathBuf, bool>,
}

impl AvatarCache {
    fn image_exists(&mut self, path: &Path) -> bool {
        *self
            .exists
            .entry(path.to_path_buf())
            .or_insert_with(|| {
                let found = path.is_file();
                if !found {
                    tracing::debug!("Avatar image not found: {}", path.display());
                }
                found
            })
    }

    /// Paint the avatar for `author`
    pub fn show(&mut self, ui: &mut egui::Ui, avatar: Avatar, author: &str, dir: &Path) {
        let path = avatar.path_in(dir);
        if self.image_exists(&path) {
            ui.add(
                egui::Image::new(format!("file://{}", path.display()))
                    .fit_to_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE)),
            );
        } else {
            Self::show_badge(ui, avatar, author);
        }
    }

    fn show_badge(ui: &mut egui::Ui, avatar: Avatar, author: &str) {
        let color = match avatar {
            Avatar::Known(index) => BADGE_COLORS[index % BADGE_COLORS.len()],
            Avatar::Default => DEFAULT_BADGE_COLOR,
        };
        let initial = author
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();

        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, color);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(18.0),
            Color32::WHITE,
        );
    }
}
