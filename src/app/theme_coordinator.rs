//! Theme application.
//!
//! Pushes the token set of the active mode into the egui context.

use crate::app::AppState;

/// Coordinates applying the active theme to egui.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current mode's visuals to the egui context.
    ///
    /// Called every frame once the shell is ready; the loading splash keeps
    /// egui's defaults for the configured initial mode.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let visuals = state.theme.theme_manager().visuals(state.theme.mode());
        ctx.set_visuals(visuals);
    }

    /// Base visuals for the loading splash.
    pub fn apply_loading_theme(ctx: &egui::Context, state: &AppState) {
        let visuals = if state.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}
