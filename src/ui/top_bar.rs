//! Status bar UI rendering
//!
//! The top bar with the sidebar toggle, title, theme toggle, notifications,
//! settings and user menu, plus the dialogs and menu those controls open.

use eframe::egui;
use egui::{Color32, RichText};
use crate::app::{AppState, ShellEvent};
use crate::state::{SettingKey, UserMenuEntry};

const APP_TITLE: &str = "AI Research Agent";
const DIALOG_WIDTH: f32 = 420.0;

/// Renders the top bar controls.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<ShellEvent>` - Event triggered by a control, if any
pub fn render_top_bar(ui: &mut egui::Ui, state: &AppState) -> Option<ShellEvent> {
    let mut event = None;
    let tokens = state.theme.tokens();

    ui.horizontal(|ui| {
        if ui.button("☰").on_hover_text("Toggle navigation").clicked() {
            event = Some(ShellEvent::ToggleSidebar);
        }

        ui.label(RichText::new(APP_TITLE).heading().strong());

        // Right side, added right to left
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let avatar = ui.add(
                egui::Button::new(RichText::new("U").strong().color(Color32::WHITE))
                    .fill(tokens.primary),
            );
            if avatar.clicked() {
                event = Some(ShellEvent::OpenUserMenu(avatar.rect.right_bottom()));
            }

            if ui.button("⚙").on_hover_text("Settings").clicked() {
                event = Some(ShellEvent::OpenSettings);
            }

            let badge = state.status_bar.badge_count();
            let bell = if badge > 0 {
                format!("🔔 {}", badge)
            } else {
                "🔔".to_string()
            };
            if ui.button(bell).on_hover_text("Notifications").clicked() {
                event = Some(ShellEvent::OpenNotifications);
            }

            let mode = state.theme.mode();
            if ui.button(mode.toggle_icon()).on_hover_text(mode.toggle_hint()).clicked() {
                event = Some(ShellEvent::ToggleTheme);
            }
        });
    });

    event
}

/// Renders whichever of the notifications dialog, settings dialog and user
/// menu are open. Any combination may be open at once.
pub fn render_overlays(ctx: &egui::Context, state: &AppState) -> Option<ShellEvent> {
    let mut event = None;

    if state.status_bar.notifications_dialog.is_open() {
        if let Some(e) = render_notifications_dialog(ctx, state) {
            event = Some(e);
        }
    }

    if state.status_bar.settings_dialog.is_open() {
        if let Some(e) = render_settings_dialog(ctx, state) {
            event = Some(e);
        }
    }

    if state.status_bar.user_menu.is_open() {
        if let Some(e) = render_user_menu(ctx, state) {
            event = Some(e);
        }
    }

    event
}

fn render_notifications_dialog(ctx: &egui::Context, state: &AppState) -> Option<ShellEvent> {
    let tokens = state.theme.tokens();

    let response = egui::Modal::new(egui::Id::new("notifications_dialog")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Notifications");
        ui.separator();

        for item in state.status_bar.notifications.items() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(item.severity.icon())
                        .size(18.0)
                        .color(item.severity.color(tokens)),
                );
                ui.vertical(|ui| {
                    ui.label(RichText::new(&item.title).strong());
                    ui.label(RichText::new(&item.message).color(tokens.text_secondary));
                    ui.label(
                        RichText::new(&item.relative_time)
                            .small()
                            .color(tokens.text_disabled),
                    );
                });
            });
            ui.add_space(6.0);
        }

        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button("Close").clicked()
        })
        .inner
    });

    if response.inner || response.should_close() {
        Some(ShellEvent::CloseNotifications)
    } else {
        None
    }
}

fn render_settings_dialog(ctx: &egui::Context, state: &AppState) -> Option<ShellEvent> {
    let response = egui::Modal::new(egui::Id::new("settings_dialog")).show(ctx, |ui| {
        let mut event = None;
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Settings");
        ui.separator();

        for key in SettingKey::ALL {
            ui.horizontal(|ui| {
                ui.label(key.icon());
                ui.label(key.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut value = state.status_bar.settings.get(key);
                    if ui.checkbox(&mut value, "").changed() {
                        event = Some(ShellEvent::ToggleSetting(key));
                    }
                });
            });
        }

        ui.separator();

        // Same toggle as the status bar icon
        let mut dark = state.theme.is_dark();
        if ui.checkbox(&mut dark, "Dark Mode").changed() {
            event = Some(ShellEvent::ToggleTheme);
        }

        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Close").clicked() {
                event = Some(ShellEvent::CloseSettings);
            }
        });

        event
    });

    if response.should_close() {
        Some(ShellEvent::CloseSettings)
    } else {
        response.inner
    }
}

fn render_user_menu(ctx: &egui::Context, state: &AppState) -> Option<ShellEvent> {
    let anchor = state.status_bar.user_menu.anchor()?;

    let area = egui::Area::new(egui::Id::new("user_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor)
        .pivot(egui::Align2::RIGHT_TOP)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .show(ui, |ui| {
                    let mut selected = None;
                    for entry in UserMenuEntry::ALL {
                        if entry == UserMenuEntry::Logout {
                            ui.separator();
                        }
                        let label = format!("{}  {}", entry.icon(), entry.label());
                        if ui.button(label).clicked() {
                            selected = Some(entry);
                        }
                    }
                    selected
                })
                .inner
        });

    if let Some(entry) = area.inner {
        return Some(ShellEvent::SelectUserMenuEntry(entry));
    }

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    if area.response.clicked_elsewhere() || escape {
        return Some(ShellEvent::DismissUserMenu);
    }

    None
}
