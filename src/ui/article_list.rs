//! Article entry list

use std::path::Path;

use eframe::egui;

use super::avatar::AvatarCache;
use crate::core::board::{ArticleBoard, BoardAction};
use crate::core::entry::Entry;

/// Scrollable list of article entries
pub struct ArticleListPanel;

impl ArticleListPanel {
    /// Show every entry, returning the actions triggered this frame
    pub fn show(
        ui: &mut egui::Ui,
        board: &ArticleBoard,
        avatars: &mut AvatarCache,
    ) -> Vec<BoardAction> {
        let mut actions = Vec::new();
        let avatar_dir = board.settings().avatar_dir();

        egui::ScrollArea::vertical()
            .id_salt("article_list_scroll")
            .show(ui, |ui| {
                if board.entries().is_empty() {
                    Self::show_empty(ui);
                    return;
                }

                for entry in board.entries().iter() {
                    ui.push_id(entry.article_id, |ui| {
                        Self::show_entry(ui, entry, avatars, &avatar_dir, &mut actions);
                    });
                    ui.add_space(12.0);
                }
            });

        actions
    }

    /// Show one entry: delete control, header, body
    fn show_entry(
        ui: &mut egui::Ui,
        entry: &Entry,
        avatars: &mut AvatarCache,
        avatar_dir: &Path,
        actions: &mut Vec<BoardAction>,
    ) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                if ui.button("\u{2715}").on_hover_text("Delete").clicked() {
                    actions.push(BoardAction::Delete(entry.article_id));
                }

                avatars.show(ui, entry.header.avatar, &entry.header.author, avatar_dir);
                ui.label(egui::RichText::new(&entry.header.byline).weak());
            });

            ui.add_space(6.0);
            ui.label(egui::RichText::new(&entry.body.title).heading().strong());
            ui.add_space(4.0);

            Self::show_content(ui, entry);

            if let Some(label) = entry.toggle_label() {
                ui.add_space(4.0);
                if ui.button(label).clicked() {
                    actions.push(BoardAction::ToggleReadMore(entry.article_id));
                }
            }
        });
    }

    fn show_content(ui: &mut egui::Ui, entry: &Entry) {
        ui.add(egui::Label::new(entry.displayed_content()).wrap());
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("No articles yet");
            ui.label("Use the form to post the first one");
        });
    }
}
