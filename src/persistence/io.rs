//! Save file location and text I/O.

use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PersistenceError;
use crate::core::ShopConfig;
use crate::inventory::PlayerInventory;

/// Where a save file lives: `<dir>/<name>.<format>`.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SaveLocation {
    pub dir: PathBuf,
    pub name: String,
    pub format: String,
}

impl SaveLocation {
    pub fn new(
        dir: impl Into<PathBuf>,
        name: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            format: format.into(),
        }
    }

    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(&config.save_dir, &config.save_name, &config.save_format)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, self.format))
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir() && self.path().is_file()
    }

    /// Write `text`, creating the directory if needed.
    pub fn write(&self, text: &str) -> Result<(), PersistenceError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| io_error(&self.dir, source))?;
        }
        let path = self.path();
        fs::write(&path, text).map_err(|source| io_error(&path, source))
    }

    pub fn read(&self) -> Result<String, PersistenceError> {
        let path = self.path();
        if !self.exists() {
            return Err(PersistenceError::FileNotFound(path.display().to_string()));
        }
        fs::read_to_string(&path).map_err(|source| io_error(&path, source))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Serialize the inventory to the save file.
pub fn save_inventory(
    location: &SaveLocation,
    inventory: &PlayerInventory,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(inventory).map_err(|source| PersistenceError::Format {
        path: location.path().display().to_string(),
        source,
    })?;
    location.write(&json)
}

/// Read the inventory back from the save file.
pub fn load_inventory(location: &SaveLocation) -> Result<PlayerInventory, PersistenceError> {
    let text = location.read()?;
    serde_json::from_str(&text).map_err(|source| PersistenceError::Format {
        path: location.path().display().to_string(),
        source,
    })
}
