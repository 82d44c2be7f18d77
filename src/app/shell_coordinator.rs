//! Shell-level coordination.
//!
//! Applies discrete events to `AppState` and runs the per-frame sequencing
//! (boot polling, viewport observation). Every transition is total.

use crate::app::AppState;
use crate::routing::RouteOutcome;
use crate::state::{MenuAnchor, SettingKey, ShellVisibility, UserMenuEntry};

/// A discrete input to the shell, produced by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Status bar menu button
    ToggleSidebar,
    /// Status bar icon or the settings dialog's dark-mode switch
    ToggleTheme,
    OpenNotifications,
    CloseNotifications,
    OpenSettings,
    CloseSettings,
    /// Avatar clicked; the menu attaches to this position
    OpenUserMenu(MenuAnchor),
    /// Click outside the open menu
    DismissUserMenu,
    SelectUserMenuEntry(UserMenuEntry),
    ToggleSetting(SettingKey),
    /// Navigation to a path
    Navigate(String),
}

/// Coordinates shell-level operations.
pub struct ShellCoordinator;

impl ShellCoordinator {
    /// Runs once per frame before rendering.
    ///
    /// Feeds the viewport width to the observer and hands any class edge to
    /// the sidebar, then polls the boot timer. On the frame the shell becomes
    /// ready, a queued initial path is navigated to.
    pub fn begin_frame(state: &mut AppState, viewport_width: f32) -> ShellVisibility {
        if let Some(change) = state.viewport.observe(viewport_width) {
            state.sidebar.on_viewport_change(change);
        }

        if state.boot.poll() {
            if let Some(path) = state.pending_navigation.take() {
                Self::navigate(state, &path);
            }
        }

        state.boot.visibility()
    }

    /// Applies one event.
    pub fn handle_event(state: &mut AppState, event: ShellEvent) {
        tracing::debug!(?event, "handling shell event");
        match event {
            ShellEvent::ToggleSidebar => state.sidebar.toggle(),
            ShellEvent::ToggleTheme => {
                state.theme.toggle();
            }
            ShellEvent::OpenNotifications => state.status_bar.notifications_dialog.open(),
            ShellEvent::CloseNotifications => state.status_bar.notifications_dialog.close(),
            ShellEvent::OpenSettings => state.status_bar.settings_dialog.open(),
            ShellEvent::CloseSettings => state.status_bar.settings_dialog.close(),
            ShellEvent::OpenUserMenu(anchor) => state.status_bar.user_menu.open_at(anchor),
            ShellEvent::DismissUserMenu => state.status_bar.user_menu.close(),
            ShellEvent::SelectUserMenuEntry(entry) => Self::select_user_menu_entry(state, entry),
            ShellEvent::ToggleSetting(key) => {
                state.status_bar.settings.toggle(key);
            }
            ShellEvent::Navigate(path) => Self::navigate(state, &path),
        }
    }

    /// Every entry closes the menu; Settings also opens the settings dialog.
    fn select_user_menu_entry(state: &mut AppState, entry: UserMenuEntry) {
        state.status_bar.user_menu.close();
        match entry {
            UserMenuEntry::Settings => state.status_bar.settings_dialog.open(),
            UserMenuEntry::Profile | UserMenuEntry::Logout => {
                tracing::info!(entry = entry.label(), "user menu entry selected");
            }
        }
    }

    fn navigate(state: &mut AppState, path: &str) {
        if let RouteOutcome::Page(route) = state.router.navigate(path) {
            tracing::debug!(path = route.path(), "navigated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::routing::Route;
    use crate::state::LoadedFlag;
    use std::sync::Arc;

    fn new_state() -> AppState {
        let config = ShellConfig {
            boot_delay_ms: 60_000,
            ..ShellConfig::default()
        };
        AppState::from_config(&config, Arc::new(LoadedFlag::new()), None).unwrap()
    }

    #[test]
    fn test_user_menu_settings_entry_opens_settings() {
        let mut state = new_state();
        ShellCoordinator::handle_event(
            &mut state,
            ShellEvent::OpenUserMenu(egui::pos2(10.0, 10.0)),
        );
        assert!(state.status_bar.user_menu.is_open());

        ShellCoordinator::handle_event(
            &mut state,
            ShellEvent::SelectUserMenuEntry(UserMenuEntry::Settings),
        );
        assert!(!state.status_bar.user_menu.is_open());
        assert!(state.status_bar.settings_dialog.is_open());
    }

    #[test]
    fn test_user_menu_other_entries_only_close() {
        for entry in [UserMenuEntry::Profile, UserMenuEntry::Logout] {
            let mut state = new_state();
            ShellCoordinator::handle_event(
                &mut state,
                ShellEvent::OpenUserMenu(egui::pos2(0.0, 0.0)),
            );
            ShellCoordinator::handle_event(&mut state, ShellEvent::SelectUserMenuEntry(entry));
            assert!(!state.status_bar.user_menu.is_open());
            assert!(!state.status_bar.settings_dialog.is_open());
        }
    }

    #[test]
    fn test_both_theme_entry_points_share_one_mode() {
        let mut state = new_state();
        let initial = state.theme.mode();

        // status bar icon
        ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleTheme);
        assert_eq!(state.theme.mode(), initial.toggled());

        // settings dialog switch
        ShellCoordinator::handle_event(&mut state, ShellEvent::OpenSettings);
        ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleTheme);
        assert_eq!(state.theme.mode(), initial);
    }

    #[test]
    fn test_begin_frame_feeds_sidebar_on_class_edges_only() {
        let mut state = new_state();
        ShellCoordinator::begin_frame(&mut state, 1280.0);
        assert!(state.sidebar.is_open());

        ShellCoordinator::begin_frame(&mut state, 700.0);
        assert!(!state.sidebar.is_open());

        ShellCoordinator::handle_event(&mut state, ShellEvent::ToggleSidebar);
        ShellCoordinator::begin_frame(&mut state, 690.0);
        ShellCoordinator::begin_frame(&mut state, 710.0);
        assert!(state.sidebar.is_open());
    }

    #[test]
    fn test_navigate_event() {
        let mut state = new_state();
        ShellCoordinator::handle_event(&mut state, ShellEvent::Navigate("/upload".to_string()));
        assert_eq!(state.router.current_route(), Some(Route::Upload));
        ShellCoordinator::handle_event(&mut state, ShellEvent::Navigate("/".to_string()));
        assert_eq!(state.router.current_route(), Some(Route::Query));
    }
}
