//! State management modules for the application shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Boot state (loading splash vs. interactive shell)
//! - Viewport observation (compact/regular class edges)
//! - Sidebar state (open/closed, compact reaction)
//! - Theme state (light/dark mode, token resolution)
//! - Dialog state (notifications, settings, user menu)
//! - Settings state (boolean toggles)
//! - Notifications (fixture feed, severity table)

mod boot;
mod viewport;
mod sidebar;
mod theme_state;
mod dialogs;
mod settings;
mod notifications;

pub use boot::{
    BootTimer, LoadedFlag, SessionMarker, ShellBootstrap, ShellVisibility, Waker,
    DEFAULT_BOOT_DELAY,
};
pub use viewport::{ViewportChange, ViewportClass, ViewportObserver, DEFAULT_COMPACT_BREAKPOINT};
pub use sidebar::SidebarState;
pub use theme_state::ThemeState;
pub use dialogs::{DialogState, MenuAnchor, UserMenuEntry, UserMenuState};
pub use settings::{SettingKey, SettingsState};
pub use notifications::{NotificationFeed, NotificationItem, Severity};
