//! Open/closed state for the status bar affordances.
//!
//! Each affordance is independent; opening one never closes another.

/// Binary open/closed state of a dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogState {
    open: bool,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Screen position the user menu is attached to.
pub type MenuAnchor = egui::Pos2;

/// Entries offered by the user menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuEntry {
    Profile,
    Settings,
    Logout,
}

impl UserMenuEntry {
    pub const ALL: [UserMenuEntry; 3] = [
        UserMenuEntry::Profile,
        UserMenuEntry::Settings,
        UserMenuEntry::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserMenuEntry::Profile => "Profile",
            UserMenuEntry::Settings => "Settings",
            UserMenuEntry::Logout => "Logout",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            UserMenuEntry::Profile => "👤",
            UserMenuEntry::Settings => "⚙",
            UserMenuEntry::Logout => "⎋",
        }
    }
}

/// User menu state. The anchor is present exactly while the menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserMenuState {
    anchor: Option<MenuAnchor>,
}

impl UserMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<MenuAnchor> {
        self.anchor
    }

    /// Opens the menu attached to `anchor`.
    pub fn open_at(&mut self, anchor: MenuAnchor) {
        self.anchor = Some(anchor);
    }

    pub fn close(&mut self) {
        self.anchor = None;
    }
}
