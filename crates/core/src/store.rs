//! Settings persistence
//!
//! [`SettingsStore`] is the seam to whatever keeps the settings between runs.
//! [`JsonFileStore`] writes them as a pretty-printed JSON object.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::Result;

pub trait SettingsStore {
    /// Persisted values, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Map<String, Value>>>;

    fn save(&mut self, values: &Map<String, Value>) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Map<String, Value>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let values: Map<String, Value> = serde_json::from_str(&content)?;
        log::debug!(
            "Loaded {} settings from {}",
            values.len(),
            self.path.display()
        );

        Ok(Some(values))
    }

    /// Writes a sibling temp file, then renames it over the target.
    fn save(&mut self, values: &Map<String, Value>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut json = serde_json::to_string_pretty(values)?;
        json.push('\n');

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
