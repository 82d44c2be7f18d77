//! Panel orchestration and layout management.
//!
//! Lays out the shell: navigation panel on the left, then the main column with
//! the status bar on top, footer at the bottom and the routed page in between.

use crate::app::{AppState, ShellEvent};
use crate::routing::RouteOutcome;
use crate::ui::pages::{self, PageRegistry};
use crate::ui::{footer, loading_screen, sidebar, top_bar};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the loading splash and nothing else.
    pub fn render_loading(ctx: &egui::Context) {
        loading_screen::render_loading_screen(ctx);
    }

    /// Renders the interactive shell.
    ///
    /// Called from `eframe::App::update()` once the shell is ready. Returns the
    /// event produced by this frame's input, if any.
    pub fn render_shell(
        ctx: &egui::Context,
        state: &AppState,
        pages: &mut PageRegistry,
    ) -> Option<ShellEvent> {
        let mut event: Option<ShellEvent> = None;
        let tokens = state.theme.tokens().clone();

        // Side panel first so it spans the full height
        if let Some(e) = sidebar::render_sidebar(ctx, state) {
            event = Some(e);
        }

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(e) = top_bar::render_top_bar(ui, state) {
                event = Some(e);
            }
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::render_footer(ui, &tokens);
        });

        let content_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(16))
            .fill(tokens.background);

        egui::CentralPanel::default()
            .frame(content_frame)
            .show(ctx, |ui| match state.router.outcome() {
                RouteOutcome::Page(route) => {
                    if let Some(page) = pages.page_mut(*route) {
                        page.ui(ui, &tokens);
                    }
                }
                RouteOutcome::NotFound(path) => {
                    if let Some(e) =
                        pages::render_not_found(ui, path, state.router.default_route(), &tokens)
                    {
                        event = Some(e);
                    }
                }
            });

        if let Some(e) = top_bar::render_overlays(ctx, state) {
            event = Some(e);
        }

        event
    }
}
