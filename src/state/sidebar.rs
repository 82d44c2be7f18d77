//! Navigation surface open/closed state.

use crate::state::ViewportChange;

/// Open/closed state of the collapsible navigation surface.
///
/// The automatic close is edge-triggered: it fires once per transition into
/// the compact class and never again until the viewport leaves and re-enters
/// compact. Leaving compact leaves the value as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    /// Creates an open sidebar.
    pub fn new() -> Self {
        Self { open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the open flag.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "sidebar toggled");
    }

    /// Reacts to a viewport class edge.
    pub fn on_viewport_change(&mut self, change: ViewportChange) {
        if change.entered_compact() && self.open {
            tracing::debug!("compact viewport entered, closing sidebar");
            self.open = false;
        }
    }
}
