//! Settings model and its flat, namespaced key/value representation
//!
//! On disk the settings are a single JSON object:
//!
//! ```json
//! {
//!   "casemorph.defaultOutput": "copy",
//!   "casemorph.camelCase": true,
//!   "casemorph.order": "camelCase, lowercase"
//! }
//! ```
//!
//! Toggles are always rebuilt from the registry, so a file written by an older
//! version with since-removed transformations loads cleanly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::order;
use crate::transform::{Transformation, TRANSFORMATIONS};

pub const NAMESPACE: &str = "casemorph";

pub fn namespaced(property: &str) -> String {
    format!("{NAMESPACE}.{property}")
}

/// Enabled flag for every registered transformation, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState {
    entries: Vec<(&'static str, bool)>,
}

impl ToggleState {
    /// Every transformation of `registry`, enabled.
    pub fn from_registry(registry: &'static [Transformation]) -> Self {
        Self {
            entries: registry.iter().map(|t| (t.name, true)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registered spelling of `name`, if it has a toggle.
    pub fn key(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(key, _)| *key)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, enabled)| *enabled)
    }

    /// Unknown names are never enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, enabled: bool) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(key, _)| *key == name)
            .ok_or_else(|| Error::UnknownTransformation(name.to_string()))?;
        entry.1 = enabled;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.entries.iter().copied()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut bool)> + '_ {
        self.entries
            .iter_mut()
            .map(|(name, enabled)| (*name, enabled))
    }

    /// Enabled names in registry order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter_map(|(name, enabled)| enabled.then_some(name))
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::from_registry(TRANSFORMATIONS)
    }
}

/// What a launcher does with the chosen result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputCommand {
    /// Copy the result to the clipboard
    #[default]
    Copy,
    /// Type the result into the focused window
    Type,
}

impl fmt::Display for OutputCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputCommand::Copy => write!(f, "copy"),
            OutputCommand::Type => write!(f, "type"),
        }
    }
}

impl FromStr for OutputCommand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "copy" => Ok(OutputCommand::Copy),
            "type" => Ok(OutputCommand::Type),
            other => Err(format!("Invalid output command: {other}. Valid values: copy, type")),
        }
    }
}

/// Everything the user can configure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub toggles: ToggleState,
    pub order: String,
    pub default_output: OutputCommand,
}

impl Default for Settings {
    fn default() -> Self {
        let toggles = ToggleState::default();
        let order = order::sync_order(&toggles, "");

        Self {
            toggles,
            order,
            default_output: OutputCommand::default(),
        }
    }
}

impl Settings {
    const DEFAULT_OUTPUT_PROPERTY: &'static str = "defaultOutput";
    const ORDER_PROPERTY: &'static str = "order";

    /// Build settings from persisted values.
    ///
    /// Missing or mistyped values fall back to their defaults; unknown keys are
    /// ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut toggles = ToggleState::default();
        for (name, enabled) in toggles.iter_mut() {
            match map.get(&namespaced(name)) {
                Some(Value::Bool(value)) => *enabled = *value,
                Some(other) => log::warn!("Ignoring non-boolean toggle for {name}: {other}"),
                None => {}
            }
        }

        let default_output = match map.get(&namespaced(Self::DEFAULT_OUTPUT_PROPERTY)) {
            Some(Value::String(value)) => value.parse().unwrap_or_else(|e| {
                log::warn!("{e}; falling back to copy");
                OutputCommand::default()
            }),
            _ => OutputCommand::default(),
        };

        let order = match map.get(&namespaced(Self::ORDER_PROPERTY)) {
            Some(Value::String(order)) => order.clone(),
            _ => order::sync_order(&toggles, ""),
        };

        Self {
            toggles,
            order,
            default_output,
        }
    }

    /// Flatten into namespaced keys, one entry per registered transformation.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert(
            namespaced(Self::DEFAULT_OUTPUT_PROPERTY),
            Value::String(self.default_output.to_string()),
        );
        for (name, enabled) in self.toggles.iter() {
            map.insert(namespaced(name), Value::Bool(enabled));
        }
        map.insert(
            namespaced(Self::ORDER_PROPERTY),
            Value::String(self.order.clone()),
        );

        map
    }

    pub fn ordered_enabled(&self) -> Vec<&'static str> {
        order::resolve(&self.toggles, &self.order)
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.toggles.is_enabled(name)
    }

    /// Rewrite `order` so it lists exactly the enabled names.
    pub fn sync_order(&mut self) {
        self.order = order::sync_order(&self.toggles, &self.order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_namespaced() {
        assert_eq!(namespaced("order"), "casemorph.order");
        assert_eq!(namespaced("Title Case"), "casemorph.Title Case");
    }

    #[test]
    fn test_toggles_default_all_enabled() {
        let toggles = ToggleState::default();
        assert_eq!(toggles.len(), TRANSFORMATIONS.len());
        assert!(toggles.iter().all(|(_, enabled)| enabled));
    }

    #[test]
    fn test_toggles_set_unknown_name() {
        let mut toggles = ToggleState::default();
        let err = toggles.set("Wide Case", false).unwrap_err();
        assert!(matches!(err, Error::UnknownTransformation(_)));
    }

    #[test]
    fn test_toggles_unknown_name_is_disabled() {
        let toggles = ToggleState::default();
        assert!(!toggles.is_enabled("Wide Case"));
        assert_eq!(toggles.get("Wide Case"), None);
        assert_eq!(toggles.key("Wide Case"), None);
    }

    #[test]
    fn test_toggles_enabled_keeps_registry_order() {
        let mut toggles = ToggleState::default();
        toggles.set("lowercase", false).unwrap();
        let enabled: Vec<_> = toggles.enabled().take(2).collect();
        assert_eq!(enabled, vec!["Sentence case", "UPPERCASE"]);
    }

    #[test]
    fn test_toggles_iter_mut_updates_in_place() {
        let mut toggles = ToggleState::default();
        for (name, enabled) in toggles.iter_mut() {
            *enabled = name.ends_with("case");
        }

        assert!(toggles.is_enabled("kebab-case"));
        assert!(!toggles.is_enabled("UPPERCASE"));
        assert_eq!(toggles.len(), TRANSFORMATIONS.len());
    }

    #[test]
    fn test_from_map_applies_every_boolean_toggle() {
        let mut values = Map::new();
        for name in crate::transform::names() {
            values.insert(namespaced(name), Value::Bool(false));
        }
        values.insert(namespaced("Title Case"), Value::Bool(true));

        let settings = Settings::from_map(&values);

        let enabled: Vec<_> = settings.toggles.enabled().collect();
        assert_eq!(enabled, vec!["Title Case"]);
    }

    #[test]
    fn test_output_command_parse_and_display() {
        assert_eq!("copy".parse::<OutputCommand>(), Ok(OutputCommand::Copy));
        assert_eq!("type".parse::<OutputCommand>(), Ok(OutputCommand::Type));
        assert!("paste".parse::<OutputCommand>().is_err());
        assert_eq!(OutputCommand::Type.to_string(), "type");
    }

    #[test]
    fn test_output_command_serde() {
        assert_eq!(serde_json::to_value(OutputCommand::Copy).unwrap(), json!("copy"));
        let parsed: OutputCommand = serde_json::from_value(json!("type")).unwrap();
        assert_eq!(parsed, OutputCommand::Type);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_output, OutputCommand::Copy);
        assert!(settings.order.starts_with("Sentence case, lowercase, UPPERCASE"));
        assert_eq!(settings.ordered_enabled().len(), TRANSFORMATIONS.len());
    }

    #[test]
    fn test_from_map_empty_is_default() {
        assert_eq!(Settings::from_map(&Map::new()), Settings::default());
    }

    #[test]
    fn test_from_map_reads_values() {
        let settings = Settings::from_map(&map(json!({
            "casemorph.defaultOutput": "type",
            "casemorph.camelCase": false,
            "casemorph.order": "snake_case, lowercase",
        })));

        assert_eq!(settings.default_output, OutputCommand::Type);
        assert!(!settings.is_enabled("camelCase"));
        assert!(settings.is_enabled("snake_case"));
        assert_eq!(settings.order, "snake_case, lowercase");
        assert_eq!(&settings.ordered_enabled()[..2], &["snake_case", "lowercase"]);
    }

    #[test]
    fn test_from_map_ignores_unknown_and_mistyped_values() {
        let settings = Settings::from_map(&map(json!({
            "casemorph.defaultOutput": "paste",
            "casemorph.Rèmòvè àccènts": false,
            "casemorph.lowercase": "no",
            "casemorph.order": 42,
            "other.key": true,
        })));

        assert_eq!(settings.default_output, OutputCommand::Copy);
        assert!(settings.is_enabled("lowercase"));
        assert_eq!(settings.order, Settings::default().order);
    }

    #[test]
    fn test_from_map_default_order_skips_disabled() {
        let settings = Settings::from_map(&map(json!({
            "casemorph.Sentence case": false,
        })));
        assert!(settings.order.starts_with("lowercase, UPPERCASE"));
    }

    #[test]
    fn test_to_map_has_no_orphan_toggles() {
        let mut source = map(json!({ "casemorph.Old Case": true }));
        source.insert("casemorph.lowercase".to_string(), Value::Bool(false));

        let written = Settings::from_map(&source).to_map();
        assert!(!written.contains_key("casemorph.Old Case"));
        assert_eq!(written.get("casemorph.lowercase"), Some(&json!(false)));
        // defaultOutput + order + one toggle per transformation
        assert_eq!(written.len(), TRANSFORMATIONS.len() + 2);
    }

    #[test]
    fn test_to_map_from_map_keeps_settings() {
        let mut settings = Settings::default();
        settings.toggles.set("Title Case", false).unwrap();
        settings.default_output = OutputCommand::Type;
        settings.order = "dot.case".to_string();
        settings.sync_order();

        assert_eq!(Settings::from_map(&settings.to_map()), settings);
    }

    #[test]
    fn test_sync_order_drops_disabled() {
        let mut settings = Settings::default();
        settings.order = "kebab-case, camelCase".to_string();
        settings.toggles.set("kebab-case", false).unwrap();
        settings.sync_order();

        assert!(settings.order.starts_with("camelCase, Sentence case"));
        assert!(!settings.order.contains("kebab-case"));
    }
}
