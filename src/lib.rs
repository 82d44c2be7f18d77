pub mod app;
pub mod config;
pub mod error;
pub mod routing;
pub mod state;
pub mod theme;
pub mod ui;

// Export shell state and coordination
pub use app::{AppState, ShellCoordinator, ShellEvent, StatusBarState, ThemeCoordinator};

// Export configuration and errors
pub use config::ShellConfig;
pub use error::ShellError;

// Export routing
pub use routing::{Resolution, Route, RouteOutcome, Router};

// Export focused state components
pub use state::{
    DialogState, LoadedFlag, NotificationFeed, NotificationItem, SessionMarker, SettingKey,
    SettingsState, Severity, ShellBootstrap, ShellVisibility, SidebarState, ThemeState,
    UserMenuEntry, UserMenuState, ViewportChange, ViewportClass, ViewportObserver,
};

// Export theme support
pub use theme::{ThemeManager, ThemeMode, ThemeTokens, adjust_brightness, hex_to_color32};
