//! Shared desktop types
//!
//! Plain data used by the desktop shell:
//! - the static app registry entries
//! - the open-window snapshot handed to the render layer
//! - the shell configuration embedded in the host page
//!
//! Serializable with serde so snapshots and config travel as JSON.

use serde::{Deserialize, Serialize};

// ============================================================================
// App Registry
// ============================================================================

/// Static definition of a launchable mini-app
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id: String,
    pub title: String,
    pub icon: String, // asset path, resolved by the host page
}

impl AppDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// A displayed app window, copied from its descriptor at open time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenWindow {
    pub id: String,
    pub title: String,
    pub icon: String,
}

impl From<&AppDescriptor> for OpenWindow {
    fn from(app: &AppDescriptor) -> Self {
        Self {
            id: app.id.clone(),
            title: app.title.clone(),
            icon: app.icon.clone(),
        }
    }
}

/// Desktop state - open windows, bottom of the stack first
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: Vec<OpenWindow>,
}

impl DesktopState {
    pub fn position_of(&self, app_id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == app_id)
    }

    pub fn is_open(&self, app_id: &str) -> bool {
        self.position_of(app_id).is_some()
    }

    /// Window at the top of the stack, if any
    pub fn topmost(&self) -> Option<&OpenWindow> {
        self.windows.last()
    }
}

// ============================================================================
// Shell Configuration
// ============================================================================

pub const DEFAULT_BACKGROUND: &str = "/assets/bg/y2k_desktop.jpg";
pub const DEFAULT_QUICK_LAUNCH_COUNT: usize = 3;
pub const DEFAULT_BASE_Z_INDEX: u32 = 100;
pub const DEFAULT_CLOCK_REFRESH_MS: u32 = 15_000;
pub const DEFAULT_HINT: &str = "아이콘을 클릭하거나 더블클릭하여 창을 엽니다.";

/// Shell configuration embedded in the host page.
///
/// Every field is optional in the JSON form; missing fields take the default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Desktop background image path
    pub background: String,
    /// How many registry apps get a taskbar button
    pub quick_launch_count: usize,
    /// Stacking value of the bottom-most window
    pub base_z_index: u32,
    /// Footer instruction text
    pub hint: String,
    pub clock_refresh_ms: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            quick_launch_count: DEFAULT_QUICK_LAUNCH_COUNT,
            base_z_index: DEFAULT_BASE_Z_INDEX,
            hint: DEFAULT_HINT.to_string(),
            clock_refresh_ms: DEFAULT_CLOCK_REFRESH_MS,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid shell config: {0}")]
    Parse(String),
    #[error("clock_refresh_ms must be positive")]
    ZeroClockRefresh,
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.clock_refresh_ms == 0 {
            return Err(ConfigError::ZeroClockRefresh);
        }
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
