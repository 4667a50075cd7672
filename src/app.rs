//! Main application state and UI coordination

use eframe::egui;

use crate::core::board::{ArticleBoard, BoardAction};
use crate::core::config::{AppConfig, DeletionMode};
use crate::core::form::ArticleForm;
use crate::ui::{article_form::ArticleFormPanel, article_list::ArticleListPanel, avatar::AvatarCache};

/// Main application state
pub struct BoardApp {
    /// Articles and their displayed entries
    pub board: ArticleBoard,
    /// Create form contents
    pub form: ArticleForm,
    /// Application configuration
    pub config: AppConfig,
    /// Avatar image lookups
    pub avatars: AvatarCache,
}

impl BoardApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        });
        Self::apply_theme(&cc.egui_ctx, &config);

        let board = ArticleBoard::seeded(config.board.clone()).unwrap_or_else(|e| {
            tracing::error!("Failed to load seed articles: {:#}", e);
            ArticleBoard::new(config.board.clone())
        });

        Self {
            board,
            form: ArticleForm::default(),
            config,
            avatars: AvatarCache::default(),
        }
    }

    fn apply_theme(ctx: &egui::Context, config: &AppConfig) {
        if config.ui.is_dark() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    fn set_theme(&mut self, ctx: &egui::Context, theme: &str) {
        self.config.ui.theme = theme.to_string();
        Self::apply_theme(ctx, &self.config);
        self.save_config();
    }

    fn set_deletion_mode(&mut self, mode: DeletionMode) {
        self.board.set_deletion_mode(mode);
        self.config.board.deletion_mode = mode;
        self.save_config();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        self.save_config();
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let dark = self.config.ui.is_dark();
                    if ui.selectable_label(dark, "Dark Theme").clicked() {
                        self.set_theme(ctx, "dark");
                        ui.close();
                    }
                    if ui.selectable_label(!dark, "Light Theme").clicked() {
                        self.set_theme(ctx, "light");
                        ui.close();
                    }
                });

                ui.menu_button("Board", |ui| {
                    let current = self.board.settings().deletion_mode;
                    for mode in [DeletionMode::ById, DeletionMode::ByTitle] {
                        if ui.selectable_label(current == mode, mode.label()).clicked() {
                            self.set_deletion_mode(mode);
                            ui.close();
                        }
                    }
                });
            });
        });
    }

    /// Render the bottom status bar
    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} articles", self.board.articles().len()));
                ui.separator();
                ui.label(format!("{} shown", self.board.entries().len()));
                ui.separator();
                ui.label(self.board.settings().deletion_mode.label());
            });
        });
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(egui::Key::Enter) {
                actions.push(BoardAction::Submit);
            }
        });

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        // Create form on the left
        let form_panel = egui::SidePanel::left("form_panel")
            .resizable(true)
            .default_width(self.config.ui.form_width)
            .min_width(220.0)
            .show(ctx, |ui| ArticleFormPanel::show(ui, &mut self.form));
        actions.extend(form_panel.inner);
        self.config.ui.form_width = form_panel.response.rect.width();

        // Article entries
        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(ArticleListPanel::show(ui, &self.board, &mut self.avatars));
        });

        for action in actions {
            self.board.dispatch(action, &mut self.form);
        }
    }
}
