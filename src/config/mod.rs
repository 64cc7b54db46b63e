//! Stack configuration, including loading and saving user preferences to a
//! `toast-stack.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_toasts = 5;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

use defaults::{
    DEFAULT_DURATION_MS, DEFAULT_GAP, DEFAULT_MAX_TOASTS, DEFAULT_VIEWPORT_OFFSET, DEFAULT_WIDTH,
    MIN_DURATION_MS, MIN_MAX_TOASTS,
};

const CONFIG_FILE: &str = "toast-stack.toml";
const APP_NAME: &str = "ToastStack";

/// Color scheme handed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Vertical corner the stack anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YPosition {
    Top,
    #[default]
    Bottom,
}

/// Horizontal corner the stack anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XPosition {
    Left,
    #[default]
    Right,
}

/// Stack configuration.
///
/// `max_toasts`, `duration_ms`, and `gap` drive the lifecycle core; the
/// remaining fields are placement and appearance values handed through to
/// the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of toasts rendered at once.
    pub max_toasts: usize,
    /// Auto-dismiss duration of unpaused display time, in milliseconds.
    pub duration_ms: u64,
    /// Vertical spacing between stacked toasts.
    pub gap: f32,
    /// Toast width.
    pub width: f32,
    /// Distance between the stack and the viewport edge.
    pub viewport_offset: f32,
    /// Start in expanded layout.
    pub expanded_by_default: bool,
    /// Color scheme.
    pub theme: Theme,
    /// Vertical anchor corner.
    pub y_position: YPosition,
    /// Horizontal anchor corner.
    pub x_position: XPosition,
}

impl Config {
    /// Clamps the lifecycle values to their minimum bounds; a hand-edited
    /// file must not produce a stack that renders nothing or dismisses
    /// instantly.
    fn clamped(mut self) -> Self {
        self.max_toasts = self.max_toasts.max(MIN_MAX_TOASTS);
        self.duration_ms = self.duration_ms.max(MIN_DURATION_MS);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            duration_ms: DEFAULT_DURATION_MS,
            gap: DEFAULT_GAP,
            width: DEFAULT_WIDTH,
            viewport_offset: DEFAULT_VIEWPORT_OFFSET,
            expanded_by_default: false,
            theme: Theme::default(),
            y_position: YPosition::default(),
            x_position: XPosition::default(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)
        .map(Config::clamped)
        .unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
