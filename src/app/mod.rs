//! Application-level modules for the shell.
//!
//! This module contains the shell coordinator and centralized state composition.

mod app_state;
mod shell_coordinator;
mod theme_coordinator;

pub use app_state::{AppState, StatusBarState};
pub use shell_coordinator::{ShellCoordinator, ShellEvent};
pub use theme_coordinator::ThemeCoordinator;
