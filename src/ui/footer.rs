//! Footer credit line at the bottom of the main column.

use eframe::egui;
use egui::RichText;
use crate::theme::ThemeTokens;

const CREDIT: &str = "AI Research Agent • Retrieval-augmented research assistant";

pub fn render_footer(ui: &mut egui::Ui, tokens: &ThemeTokens) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(CREDIT).small().color(tokens.text_secondary));
    });
}
