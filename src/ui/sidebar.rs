//! Navigation surface rendering.

use eframe::egui;
use crate::app::{AppState, ShellEvent};
use crate::routing::Route;

const REGULAR_WIDTH: f32 = 240.0;
const COMPACT_WIDTH: f32 = 64.0;

/// Renders the navigation panel when the sidebar is open.
///
/// On a compact viewport the panel shows icons only. Selecting an entry emits
/// a navigation event; the open/closed state is left to the sidebar state.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Option<ShellEvent> {
    if !state.sidebar.is_open() {
        return None;
    }

    let compact = state.is_compact();
    let width = if compact { COMPACT_WIDTH } else { REGULAR_WIDTH };
    let current = state.router.current_route();

    egui::SidePanel::left("navigation")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            let mut event = None;
            ui.add_space(8.0);
            if !compact {
                ui.heading("Navigation");
                ui.separator();
            }

            for route in Route::ALL {
                let text = if compact {
                    route.icon().to_string()
                } else {
                    format!("{}  {}", route.icon(), route.label())
                };
                let response = ui.selectable_label(current == Some(route), text);
                let response = if compact {
                    response.on_hover_text(route.label())
                } else {
                    response
                };
                if response.clicked() {
                    event = Some(ShellEvent::Navigate(route.path().to_string()));
                }
            }
            event
        })
        .inner
}
