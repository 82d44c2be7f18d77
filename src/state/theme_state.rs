//! Theme mode state management.
//!
//! Single owner of the light/dark mode. The status bar icon and the dark-mode
//! switch in the settings dialog both mutate it through [`ThemeState::toggle`].

use crate::theme::{ThemeManager, ThemeMode, ThemeTokens};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Holding the one active [`ThemeMode`]
/// - Resolving the token set for that mode
pub struct ThemeState {
    /// Token provider
    theme_manager: ThemeManager,
    /// Currently active mode
    mode: ThemeMode,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state in light mode.
    pub fn new() -> Self {
        Self::with_mode(ThemeMode::default())
    }

    /// Creates a new theme state starting in `mode`.
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            mode,
        }
    }

    // ===== Theme Queries =====

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Returns the token set for the active mode.
    pub fn tokens(&self) -> &ThemeTokens {
        self.theme_manager.tokens(self.mode)
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    // ===== Theme Mutations =====

    /// Flips the mode unconditionally and returns the new value.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "theme mode toggled");
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_toggles_change_mode_even_restore_it() {
        for initial in [ThemeMode::Light, ThemeMode::Dark] {
            let mut state = ThemeState::with_mode(initial);
            for count in 1..=7 {
                state.toggle();
                if count % 2 == 1 {
                    assert_ne!(state.mode(), initial);
                } else {
                    assert_eq!(state.mode(), initial);
                }
            }
        }
    }

    #[test]
    fn test_tokens_track_mode() {
        let mut state = ThemeState::new();
        let light_bg = state.tokens().background;
        state.toggle();
        assert!(state.is_dark());
        assert_ne!(state.tokens().background, light_bg);
    }
}
