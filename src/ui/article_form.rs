//! Create-article form panel

use eframe::egui;

use crate::core::board::BoardAction;
use crate::core::form::{ArticleForm, FormError, FormField};

/// Form for posting a new article
pub struct ArticleFormPanel;

impl ArticleFormPanel {
    /// Show the form, returning the submit action when the button is pressed
    pub fn show(ui: &mut egui::Ui, form: &mut ArticleForm) -> Option<BoardAction> {
        let mut action = None;

        ui.vertical(|ui| {
            ui.heading("New Article");
            ui.separator();
            ui.add_space(8.0);

            let mut changed = false;

            Self::field_label(ui, FormField::Title, form.error.as_ref());
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut form.title)
                        .hint_text("Title")
                        .desired_width(f32::INFINITY),
                )
                .changed();
            ui.add_space(6.0);

            Self::field_label(ui, FormField::Author, form.error.as_ref());
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut form.author)
                        .hint_text("Author")
                        .desired_width(f32::INFINITY),
                )
                .changed();
            ui.add_space(6.0);

            Self::field_label(ui, FormField::Content, form.error.as_ref());
            changed |= ui
                .add(
                    egui::TextEdit::multiline(&mut form.content)
                        .hint_text("Write your article...")
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                )
                .changed();

            if changed {
                form.error = None;
            }

            ui.add_space(10.0);
            if ui.button("Submit").on_hover_text("Ctrl+Enter").clicked() {
                action = Some(BoardAction::Submit);
            }

            if let Some(ref error) = form.error {
                ui.add_space(6.0);
                ui.colored_label(ui.visuals().error_fg_color, error.to_string());
            }
        });

        action
    }

    /// Field caption, highlighted when it is the field that failed validation
    fn field_label(ui: &mut egui::Ui, field: FormField, error: Option<&FormError>) {
        let failed = matches!(error, Some(FormError::MissingField(f)) if *f == field);
        let text = egui::RichText::new(format!("{} *", field.label()));
        if failed {
            ui.label(text.color(ui.visuals().error_fg_color));
        } else {
            ui.label(text);
        }
    }
}
