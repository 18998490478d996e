// ABOUTME: Static icon theme for the notification widget, optionally loaded from TOML

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alerts::request::AlertStatus;

/// Icon mapping consumed by the renderer. Kept external to the rendering
/// logic so the icon set can be swapped without touching it. Icons are plain
/// strings; the default set uses unicode glyphs, but any token (e.g. an asset
/// path) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub images: IconSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub error: String,
    pub success: String,
    pub notify: String,
    pub close: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            images: IconSet {
                error: "✗".to_string(),
                success: "✓".to_string(),
                notify: "ℹ".to_string(),
                close: "×".to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse theme file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Theme {
    /// Loads a theme from a TOML file of the shape
    /// `[images] error = "..." success = "..." notify = "..." close = "..."`.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The category icon used for a notification of the given status.
    pub fn icon(&self, status: AlertStatus) -> &str {
        match status {
            AlertStatus::Error => &self.images.error,
            AlertStatus::Success => &self.images.success,
            AlertStatus::Notify => &self.images.notify,
        }
    }
}
