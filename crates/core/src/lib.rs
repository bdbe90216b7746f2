//! Core library for casemorph
//!
//! This crate implements the **Functional Core** of the casemorph application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`casemorph_core`** (this crate): text transformations, the ordering
//!   resolver and the settings model
//! - **`casemorph`**: CLI commands, settings location and the MCP server (the
//!   Imperative Shell)
//!
//! Everything except [`store`] is pure: same input, same output, no I/O.
//! [`store`] is the only place that touches the filesystem, behind the
//! [`store::SettingsStore`] trait.
//!
//! # Module Organization
//!
//! - [`transform`]: the registry of named transformations and the functions behind it
//! - [`order`]: resolves which enabled transformations are shown, and in what order
//! - [`settings`]: toggles, order and default output, and their persisted key/value form
//! - [`store`]: persistence of the settings
//! - [`manager`]: the single writer that syncs and persists every change
//! - [`morph`]: applies a list of transformations to one input
//!
//! # Example Usage
//!
//! ```rust
//! use casemorph_core::order::resolve;
//! use casemorph_core::settings::ToggleState;
//! use casemorph_core::transform::transform;
//!
//! let mut toggles = ToggleState::default();
//! toggles.set("lowercase", false).unwrap();
//!
//! let names = resolve(&toggles, "snake_case, lowercase");
//! assert_eq!(names[0], "snake_case");
//! assert!(!names.contains(&"lowercase"));
//!
//! assert_eq!(transform(names[0], "Hello World").unwrap(), "hello_world");
//! ```

pub mod error;
pub mod manager;
pub mod morph;
pub mod order;
pub mod settings;
pub mod store;
pub mod transform;

pub use error::{Error, Result};
pub use manager::SettingsManager;
pub use settings::{OutputCommand, Settings, ToggleState};
pub use store::{JsonFileStore, SettingsStore};
pub use transform::{transform, Transformation, TRANSFORMATIONS};
