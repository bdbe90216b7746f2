//! Ordering and selection of enabled transformations
//!
//! The persisted order is a free-text, comma-separated list of names. It can
//! mention names that were disabled or removed since it was written, and it can
//! leave out names that were enabled later. [`resolve`] reconciles it with the
//! current toggles; [`sync_order`] produces the canonical string to persist.

use std::collections::HashSet;

use crate::settings::ToggleState;

/// Split an order string on commas, trimming entries and dropping empty ones.
pub fn parse_order(spec: &str) -> Vec<&str> {
    spec.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// The enabled transformation names, in display order.
///
/// Names listed in `spec` come first, in the order given, then every other
/// enabled name in registry order. Unknown, disabled and repeated names in
/// `spec` are skipped.
pub fn resolve(toggles: &ToggleState, spec: &str) -> Vec<&'static str> {
    let mut resolved = Vec::with_capacity(toggles.len());
    let mut seen = HashSet::with_capacity(toggles.len());

    for token in parse_order(spec) {
        match toggles.key(token) {
            Some(name) if toggles.is_enabled(name) => {
                if seen.insert(name) {
                    resolved.push(name);
                }
            }
            Some(_) => {}
            None => log::debug!("Ignoring unknown transformation in order: {token}"),
        }
    }

    for name in toggles.enabled() {
        if seen.insert(name) {
            resolved.push(name);
        }
    }

    resolved
}

/// Canonical order string for the current toggles.
pub fn sync_order(toggles: &ToggleState, spec: &str) -> String {
    resolve(toggles, spec).join(", ")
}
