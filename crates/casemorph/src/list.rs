use crate::prelude::{println, *};
use casemorph_core::{Settings, TRANSFORMATIONS};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Include disabled transformations, in registry order
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// 1-based display position, absent for disabled transformations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<&'static str>,
    pub enabled: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let manager = crate::config::open_settings(&global)?;
    let entries = list_data(manager.settings(), options.all);

    if options.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        output_table(&entries);
    }

    Ok(())
}

/// Enabled transformations in display order; with `all`, every registered
/// transformation in registry order.
pub fn list_data(settings: &Settings, all: bool) -> Vec<ListEntry> {
    let ordered = settings.ordered_enabled();
    let position = |name: &str| ordered.iter().position(|n| *n == name).map(|i| i + 1);

    if all {
        TRANSFORMATIONS
            .iter()
            .map(|t| ListEntry {
                position: position(t.name),
                name: t.name,
                glyph: t.glyph,
                enabled: settings.is_enabled(t.name),
            })
            .collect()
    } else {
        ordered
            .iter()
            .enumerate()
            .filter_map(|(i, name)| casemorph_core::transform::find(name).map(|t| (i, t)))
            .map(|(i, t)| ListEntry {
                position: Some(i + 1),
                name: t.name,
                glyph: t.glyph,
                enabled: true,
            })
            .collect()
    }
}

fn output_table(entries: &[ListEntry]) {
    if entries.is_empty() {
        println!("No transformations enabled. Use `casemorph settings enable <NAME>`.");
        return;
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["#", "Transformation", "Enabled"]);

    for entry in entries {
        let position = entry
            .position
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let enabled = if entry.enabled {
            "yes".green().to_string()
        } else {
            "no".red().to_string()
        };
        table.add_row(prettytable::row![position, entry.name, enabled]);
    }

    table.printstd();
}
