//! Shell configuration.
//!
//! Read-only JSON input; every field is optional. Runtime settings toggled in
//! the settings dialog are not written back.

use crate::error::{Result, ShellError};
use crate::routing::{normalize_path, Route, ROOT_PATH};
use crate::state::{DEFAULT_BOOT_DELAY, DEFAULT_COMPACT_BREAKPOINT};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "AGENT_SHELL_CONFIG";

const CONFIG_DIR_NAME: &str = "agent-shell";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Loading splash duration in milliseconds
    pub boot_delay_ms: u64,
    /// Widths below this many logical pixels are compact
    pub compact_breakpoint: f32,
    pub initial_theme: ThemeMode,
    /// Path the root path redirects to
    pub default_route: String,
    /// Initial window size [width, height]
    pub window_size: [f32; 2],
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            boot_delay_ms: DEFAULT_BOOT_DELAY.as_millis() as u64,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            initial_theme: ThemeMode::Light,
            default_route: Route::Query.path().to_string(),
            window_size: [1280.0, 800.0],
        }
    }
}

impl ShellConfig {
    /// Location of the per-user configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Picks the configuration file: explicit path, then the environment
    /// variable. Returns `None` when neither is set.
    pub fn explicit_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
        cli_path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, the per-user default file is
    /// used when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and validates a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ShellConfig =
            serde_json::from_str(&text).map_err(|source| ShellError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Checks value ranges and that the default route is registered.
    pub fn validate(&self) -> Result<()> {
        if !self.compact_breakpoint.is_finite() || self.compact_breakpoint <= 0.0 {
            return Err(ShellError::InvalidConfig(format!(
                "compact_breakpoint must be a positive number, got {}",
                self.compact_breakpoint
            )));
        }
        if self.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ShellError::InvalidConfig(format!(
                "window_size must be positive, got {:?}",
                self.window_size
            )));
        }
        if normalize_path(&self.default_route) == ROOT_PATH {
            return Err(ShellError::InvalidConfig(
                "default_route cannot be the root path".to_string(),
            ));
        }
        Route::from_path(&self.default_route)?;
        Ok(())
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_delay_ms)
    }

    /// Route the root path redirects to.
    pub fn default_route(&self) -> Result<Route> {
        Route::from_path(&self.default_route)
    }
}
