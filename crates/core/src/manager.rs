//! Single owner of the user's settings
//!
//! Every change goes through [`SettingsManager::update`], which re-syncs the
//! order string with the toggles and persists the result before it becomes
//! visible. Taking `&mut self` there keeps writers serialized.

use crate::error::Result;
use crate::settings::{OutputCommand, Settings};
use crate::store::SettingsStore;

#[derive(Debug)]
pub struct SettingsManager<S: SettingsStore> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> SettingsManager<S> {
    /// Load persisted settings, or start from the defaults.
    pub fn open(store: S) -> Result<Self> {
        let settings = match store.load()? {
            Some(values) => Settings::from_map(&values),
            None => Settings::default(),
        };

        Ok(Self { store, settings })
    }

    /// Apply `mutate`, sync the order and persist.
    ///
    /// Nothing changes in memory if `mutate` or the save fails.
    pub fn update<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Settings) -> Result<()>,
    {
        let mut next = self.settings.clone();
        mutate(&mut next)?;
        next.sync_order();

        self.store.save(&next.to_map())?;
        self.settings = next;

        Ok(())
    }

    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<()> {
        log::info!("Setting {name} enabled={enabled}");
        self.update(|settings| settings.toggles.set(name, enabled))
    }

    /// Replace the order. An empty spec reverts to the registry order.
    pub fn set_order(&mut self, spec: &str) -> Result<()> {
        self.update(|settings| {
            settings.order = spec.to_string();
            Ok(())
        })
    }

    pub fn reset_order(&mut self) -> Result<()> {
        self.set_order("")
    }

    pub fn set_default_output(&mut self, output: OutputCommand) -> Result<()> {
        self.update(|settings| {
            settings.default_output = output;
            Ok(())
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ordered_enabled(&self) -> Vec<&'static str> {
        self.settings.ordered_enabled()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.settings.is_enabled(name)
    }

    pub fn order(&self) -> &str {
        &self.settings.order
    }

    pub fn default_output(&self) -> OutputCommand {
        self.settings.default_output
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
