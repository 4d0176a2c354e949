pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted user settings: the default filter strings that pre-fill a
/// classic-mode run, the artifact filename, and the last scanned directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// `|`-separated folder/file names excluded by default in classic mode.
    pub default_ignore_items: String,
    /// `|`-separated extensions (leading dot included) excluded by default.
    pub default_ignore_extensions: String,
    /// Artifact filename, resolved against the working directory.
    pub output_filename: String,
    /// The root of the most recent run, reused when none is given.
    pub last_directory: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_ignore_items: ".git|node_modules|target|__pycache__|.idea|.vscode"
                .to_string(),
            default_ignore_extensions:
                ".png|.jpg|.jpeg|.gif|.ico|.exe|.dll|.so|.pdf|.zip|.lock".to_string(),
            output_filename: "output.txt".to_string(),
            last_directory: None,
        }
    }
}
