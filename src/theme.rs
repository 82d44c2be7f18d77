//! Theme support for the application shell.
//!
//! The shell knows exactly two modes, light and dark. Every visual component
//! resolves its colours from the [`ThemeTokens`] returned for the active mode;
//! there is no intermediate "system" mode.
//!
//! # Examples
//!
//! ```
//! use agent_shell::theme::{ThemeManager, ThemeMode};
//!
//! let manager = ThemeManager::new();
//! let dark = manager.tokens(ThemeMode::Dark);
//! println!("Dark background: {:?}", dark.background);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The active colour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Icon for the toggle affordance. It depicts the mode a click will
    /// produce, not the current one.
    pub fn toggle_icon(self) -> &'static str {
        match self.toggled() {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "🌙",
        }
    }

    /// Hover text for the toggle affordance.
    pub fn toggle_hint(self) -> String {
        format!("Switch to {} mode", self.toggled())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// Complete token set for one mode, covering every element the shell draws.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    // Surfaces
    pub background: Color32,
    pub paper: Color32,
    pub divider: Color32,

    // Text
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_disabled: Color32,

    // Accents
    pub primary: Color32,
    pub selection: Color32,
    pub hover: Color32,

    // Status colours
    pub success: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub error: Color32,
}

/// Token provider mapping a [`ThemeMode`] to its complete token set.
pub struct ThemeManager {
    light: ThemeTokens,
    dark: ThemeTokens,
}

impl ThemeManager {
    /// Creates a manager holding the built-in light and dark palettes.
    pub fn new() -> Self {
        Self {
            light: light_tokens(),
            dark: dark_tokens(),
        }
    }

    /// Returns the token set for `mode`.
    pub fn tokens(&self, mode: ThemeMode) -> &ThemeTokens {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Builds egui visuals for `mode` from the matching egui base visuals.
    pub fn visuals(&self, mode: ThemeMode) -> egui::Visuals {
        let mut visuals = match mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        self.apply_tokens(self.tokens(mode), &mut visuals);
        visuals
    }

    /// Applies a token set to egui visuals.
    pub fn apply_tokens(&self, tokens: &ThemeTokens, visuals: &mut egui::Visuals) {
        visuals.panel_fill = tokens.paper;
        visuals.window_fill = tokens.paper;
        visuals.extreme_bg_color = tokens.background;
        visuals.faint_bg_color = tokens.hover;

        visuals.override_text_color = Some(tokens.text_primary);

        visuals.selection.bg_fill = tokens.selection;
        visuals.selection.stroke.color = tokens.primary;

        visuals.widgets.noninteractive.bg_fill = tokens.paper;
        visuals.widgets.noninteractive.bg_stroke.color = tokens.divider;
        visuals.widgets.inactive.bg_fill = tokens.hover;
        visuals.widgets.hovered.bg_fill = adjust_brightness(tokens.hover, 1.1);
        visuals.widgets.active.bg_fill = tokens.selection;

        visuals.hyperlink_color = tokens.primary;
        visuals.error_fg_color = tokens.error;
        visuals.warn_fg_color = tokens.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_tokens() -> ThemeTokens {
    ThemeTokens {
        background: hex_to_color32("#f5f7fa"),
        paper: hex_to_color32("#ffffff"),
        divider: hex_to_color32("#e0e0e0"),

        text_primary: hex_to_color32("#1a1a1a"),
        text_secondary: hex_to_color32("#5f6368"),
        text_disabled: hex_to_color32("#9e9e9e"),

        primary: hex_to_color32("#1976d2"),
        selection: hex_to_color32("#bbdefb"),
        hover: hex_to_color32("#eeeeee"),

        success: hex_to_color32("#2e7d32"),
        warning: hex_to_color32("#ed6c02"),
        info: hex_to_color32("#0288d1"),
        error: hex_to_color32("#d32f2f"),
    }
}

fn dark_tokens() -> ThemeTokens {
    ThemeTokens {
        background: hex_to_color32("#0f1115"),
        paper: hex_to_color32("#1a1d23"),
        divider: hex_to_color32("#2f333b"),

        text_primary: hex_to_color32("#e8eaed"),
        text_secondary: hex_to_color32("#a0a4ab"),
        text_disabled: hex_to_color32("#6b7078"),

        primary: hex_to_color32("#90caf9"),
        selection: hex_to_color32("#2d4a6b"),
        hover: hex_to_color32("#2a2e36"),

        success: hex_to_color32("#66bb6a"),
        warning: hex_to_color32("#ffa726"),
        info: hex_to_color32("#29b6f6"),
        error: hex_to_color32("#f44336"),
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
