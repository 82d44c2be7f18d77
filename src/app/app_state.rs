//! Centralized shell state.
//!
//! Composes the focused state components. Each component keeps its own
//! invariants; `AppState` only wires them together.

use crate::config::ShellConfig;
use crate::error::Result;
use crate::routing::Router;
use crate::state::{
    DialogState, NotificationFeed, SessionMarker, SettingsState, ShellBootstrap, SidebarState,
    ThemeState, UserMenuState, ViewportObserver, Waker,
};
use std::sync::Arc;

/// State owned by the status bar: one entry per affordance plus the data the
/// dialogs show.
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub notifications_dialog: DialogState,
    pub settings_dialog: DialogState,
    pub user_menu: UserMenuState,
    pub settings: SettingsState,
    pub notifications: NotificationFeed,
}

impl StatusBarState {
    /// Status bar state with the fixture notification list.
    pub fn new() -> Self {
        Self {
            notifications: NotificationFeed::fixture(),
            ..Self::default()
        }
    }

    pub fn badge_count(&self) -> usize {
        self.notifications.badge_count()
    }
}

/// Main shell state composed of focused state components.
#[derive(Debug)]
pub struct AppState {
    /// Loading splash vs. interactive shell
    pub boot: ShellBootstrap,

    /// Light/dark mode shared by every entry point
    pub theme: ThemeState,

    /// Compact-viewport signal source
    pub viewport: ViewportObserver,

    /// Navigation surface open/closed
    pub sidebar: SidebarState,

    /// Notifications, settings and user menu
    pub status_bar: StatusBarState,

    /// Current location
    pub router: Router,

    /// Path requested before the shell was ready, applied on the ready frame
    pub pending_navigation: Option<String>,
}

impl AppState {
    /// Builds the shell state from configuration and starts the boot timer.
    ///
    /// # Arguments
    /// * `config` - Validated shell configuration
    /// * `marker` - Receives the "loaded" signal on the ready transition
    /// * `waker` - Called from the timer thread when the boot delay elapses
    pub fn from_config(
        config: &ShellConfig,
        marker: Arc<dyn SessionMarker>,
        waker: Option<Waker>,
    ) -> Result<Self> {
        config.validate()?;
        let default_route = config.default_route()?;

        Ok(Self {
            boot: ShellBootstrap::start(config.boot_delay(), marker, waker),
            theme: ThemeState::with_mode(config.initial_theme),
            viewport: ViewportObserver::new(config.compact_breakpoint),
            sidebar: SidebarState::new(),
            status_bar: StatusBarState::new(),
            router: Router::new(default_route),
            pending_navigation: None,
        })
    }

    /// Queues a path to open once the shell is ready.
    pub fn with_initial_path(mut self, path: Option<String>) -> Self {
        self.pending_navigation = path;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.boot.is_loading()
    }

    /// Current `isCompact` signal.
    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;
    use crate::state::LoadedFlag;
    use crate::theme::ThemeMode;

    #[test]
    fn test_from_config_initial_state() {
        let config = ShellConfig {
            initial_theme: ThemeMode::Dark,
            default_route: "/metrics".to_string(),
            ..ShellConfig::default()
        };
        let state = AppState::from_config(&config, Arc::new(LoadedFlag::new()), None).unwrap();

        assert!(state.is_loading());
        assert!(state.sidebar.is_open());
        assert!(!state.is_compact());
        assert!(state.theme.is_dark());
        assert_eq!(state.router.current_route(), Some(Route::Metrics));
        assert_eq!(state.status_bar.badge_count(), 3);
        assert!(!state.status_bar.notifications_dialog.is_open());
        assert!(!state.status_bar.settings_dialog.is_open());
        assert!(!state.status_bar.user_menu.is_open());
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = ShellConfig {
            default_route: "/missing".to_string(),
            ..ShellConfig::default()
        };
        assert!(AppState::from_config(&config, Arc::new(LoadedFlag::new()), None).is_err());
    }
}
