//! Settings dialog toggles.

use crate::error::ShellError;
use std::str::FromStr;

/// The fixed set of boolean settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Notifications,
    AutoSave,
    SoundEffects,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::Notifications,
        SettingKey::AutoSave,
        SettingKey::SoundEffects,
    ];

    /// Stable key name used by external callers.
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Notifications => "notifications",
            SettingKey::AutoSave => "autoSave",
            SettingKey::SoundEffects => "soundEffects",
        }
    }

    /// Row label in the settings dialog.
    pub fn label(self) -> &'static str {
        match self {
            SettingKey::Notifications => "Enable Notifications",
            SettingKey::AutoSave => "Auto-save Conversations",
            SettingKey::SoundEffects => "Sound Effects",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SettingKey::Notifications => "🔔",
            SettingKey::AutoSave => "⚡",
            SettingKey::SoundEffects => "🔊",
        }
    }
}

impl FromStr for SettingKey {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ShellError::UnknownSetting(s.to_string()))
    }
}

/// Values for every [`SettingKey`]. Each key flips independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    notifications: bool,
    auto_save: bool,
    sound_effects: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_save: true,
            sound_effects: false,
        }
    }
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Notifications => self.notifications,
            SettingKey::AutoSave => self.auto_save,
            SettingKey::SoundEffects => self.sound_effects,
        }
    }

    fn slot_mut(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::AutoSave => &mut self.auto_save,
            SettingKey::SoundEffects => &mut self.sound_effects,
        }
    }

    /// Flips one setting and returns its new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let slot = self.slot_mut(key);
        *slot = !*slot;
        let value = *slot;
        tracing::debug!(setting = key.name(), value, "setting toggled");
        value
    }

    /// Flips a setting addressed by its key name.
    pub fn toggle_named(&mut self, name: &str) -> Result<bool, ShellError> {
        let key = name.parse::<SettingKey>()?;
        Ok(self.toggle(key))
    }
}
