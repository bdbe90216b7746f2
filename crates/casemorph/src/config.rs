use crate::prelude::{eprintln, *};
use casemorph_core::{JsonFileStore, SettingsManager};
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.json";

/// Resolve the settings file: `--settings`/`CASEMORPH_SETTINGS`, else the
/// platform config directory.
pub fn settings_path(global: &crate::Global) -> Result<PathBuf> {
    if let Some(path) = &global.settings {
        return Ok(path.clone());
    }

    let config_dir = dirs_next::config_dir()
        .ok_or_else(|| eyre!("Unable to determine config directory"))?
        .join("casemorph");

    Ok(config_dir.join(SETTINGS_FILE))
}

pub fn open_settings(global: &crate::Global) -> Result<SettingsManager<JsonFileStore>> {
    let path = settings_path(global)?;

    if global.verbose {
        eprintln!("Settings file: {}", path.display());
    }

    SettingsManager::open(JsonFileStore::new(&path))
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}
