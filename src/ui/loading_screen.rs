//! Loading splash shown until the boot delay elapses.

use eframe::egui;
use egui::RichText;

/// Renders only the loading indicator. Nothing else is drawn while loading.
pub fn render_loading_screen(ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.add(egui::Spinner::new().size(48.0));
            ui.add_space(12.0);
            ui.label(RichText::new("Loading AI Research Agent…").strong());
        });
    });
}
