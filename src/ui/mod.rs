//! UI panel rendering subsystem
//!
//! Rendering functions read `AppState` and return a `ShellEvent` for the
//! coordinator to apply; none of them mutate shell state:
//! - Top bar (sidebar toggle, theme toggle, notifications, settings, user menu)
//! - Sidebar (route navigation)
//! - Pages (route collaborators and the not-found page)
//! - Loading screen (boot splash)
//! - Footer (credit line)
//! - Panel manager (panel orchestration and layout)

pub mod top_bar;
pub mod sidebar;
pub mod pages;
pub mod loading_screen;
pub mod footer;
pub mod panel_manager;
