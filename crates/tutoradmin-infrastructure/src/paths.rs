//! Unified path management for tutoradmin files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/tutoradmin/        # Config directory (platform default via `dirs`)
//! ├── config.toml              # Client configuration
//! └── session.json             # Persisted session entries
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "tutoradmin";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves where tutoradmin keeps its files.
///
/// With no base path the platform config directory is used
/// (`$XDG_CONFIG_HOME` on Linux, `~/Library/Application Support` on macOS,
/// `%APPDATA%` on Windows). A base path replaces that root, which is how tests
/// and the `--config-dir` flag redirect storage.
#[derive(Debug, Clone, Default)]
pub struct AdminPaths {
    base: Option<PathBuf>,
}

impl AdminPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the tutoradmin configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path to the persisted session entries.
    ///
    /// # Security Note
    ///
    /// The file holds a bearer token; it is created with mode 600 on Unix.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(SESSION_FILE_NAME))
    }
}
