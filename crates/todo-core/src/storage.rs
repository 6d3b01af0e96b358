use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec;
use crate::error::TodoError;
use crate::list::TodoList;

/// The file that holds the list between invocations.
#[derive(Debug, Clone)]
pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TodoFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the list, creating an empty file when there is none yet.
    pub fn load(&self) -> Result<TodoList, TodoError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| TodoError::storage(&self.path, err))?;
        let mut raw = Vec::new();
        file.read_to_end(&mut raw)
            .map_err(|err| TodoError::storage(&self.path, err))?;
        let list = codec::decode(&String::from_utf8_lossy(&raw));
        debug!(path = %self.path.display(), items = list.len(), "loaded todos");
        Ok(list)
    }

    /// Overwrites the whole file.
    pub fn save(&self, list: &TodoList) -> Result<(), TodoError> {
        fs::write(&self.path, codec::encode(list))
            .map_err(|err| TodoError::storage(&self.path, err))?;
        debug!(path = %self.path.display(), items = list.len(), "saved todos");
        Ok(())
    }
}
