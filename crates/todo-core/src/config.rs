use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

pub const DEFAULT_FILENAME: &str = ".todo";
pub const CONFIG_FILENAME: &str = ".todo.toml";
pub const FILE_ENV: &str = "TODO_FILE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Storage file. Relative paths are taken from the home directory.
    pub file: Option<String>,
}

pub fn resolve_user_home_dir() -> Option<PathBuf> {
    for var in ["HOME", "USERPROFILE"] {
        if let Ok(value) = std::env::var(var) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILENAME)
}

pub fn load_config(home: &Path) -> Result<Option<TodoConfig>, TodoError> {
    let path = config_path(home);
    if !path.is_file() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path).map_err(|source| TodoError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    let config = toml::from_str::<TodoConfig>(&text).map_err(|source| TodoError::ConfigParse {
        path: path.clone(),
        source,
    })?;
    Ok(Some(config))
}

/// Picks the storage file: explicit path, then `TODO_FILE`, then the
/// `file` key of `~/.todo.toml`, then `~/.todo`.
pub fn resolve_todo_path(explicit: Option<&Path>) -> Result<PathBuf, TodoError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(value) = std::env::var(FILE_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }
    let home = resolve_user_home_dir().ok_or(TodoError::HomeDirUnavailable)?;
    resolve_in_home(&home)
}

pub fn resolve_in_home(home: &Path) -> Result<PathBuf, TodoError> {
    let configured = load_config(home)?
        .and_then(|config| config.file)
        .map(|file| file.trim().to_string())
        .filter(|file| !file.is_empty());
    Ok(match configured {
        Some(file) => home.join(file),
        None => home.join(DEFAULT_FILENAME),
    })
}
