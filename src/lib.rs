//! Picksheet: a headless overlay and select engine.
//!
//! Picksheet provides the behavior behind a bottom-sheet picker:
//! - Overlays whose visibility is either owned by the caller (controlled) or
//!   kept internally (uncontrolled), with an imperative open/close handle
//! - A searchable list with single or multiple selection over arbitrary
//!   records, matched by dot-separated field paths
//! - Overridable presentation: every part of the view has a default renderer
//!   and receives the wiring it needs to talk back to the engine
//! - Checkbox groups sharing the multi-select membership rules

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo CLI (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Select Layer (select/)                             │  ← Engine
//! │  - Event handling                                   │
//! │  - Filtering and selection reconciliation           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Overlay Layer │   │ Checkbox      │
//! │ (ui/)         │   │ (overlay/)    │   │ (checkbox/)   │
//! │ - Compose     │   │ - Visibility  │   │ - Groups      │
//! │ - Overrides   │   │ - Handles     │   │               │
//! │ - Theming     │   │ - Modal       │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error types                                      │
//! │  - Field paths and search specs                     │
//! │  - Selection values                                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core types (errors, field paths, selection values)
//! - [`overlay`]: Controlled/uncontrolled visibility, handles, modal
//! - [`select`]: The select engine and component
//! - [`checkbox`]: Checkbox groups
//! - [`ui`]: View models, renderer seam, text renderer, themes
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```toml
//! theme = "dark"
//! trace_level = "debug"
//!
//! [labels]
//! search_placeholder = "Find a fruit"
//! submit = "Done"
//! no_results = "Nothing matches \"{term}\""
//! ```
//!
//! # Examples
//!
//! ```rust
//! use picksheet::domain::{SearchSpec, SelectionValue};
//! use picksheet::select::{Event, Select, SelectProps};
//! use serde_json::json;
//!
//! let data = vec![json!({"name": "Apple"}), json!({"name": "Banana"})];
//! let mut select = Select::new(
//!     SelectProps::new(data)
//!         .multiple(true)
//!         .searchable(SearchSpec::fields(["name"])),
//! );
//!
//! select.handle().open();
//! select.dispatch(Event::Search("ban".to_string()));
//! assert_eq!(select.with_state(|s| s.filtered_len()), 1);
//!
//! select.dispatch(Event::Select("banana"));
//! assert_eq!(select.selection(), SelectionValue::Multiple(vec!["banana"]));
//! ```

pub mod checkbox;
pub mod domain;
pub mod overlay;
pub mod select;

pub mod ui;

pub mod observability;

pub use domain::{PicksheetError, Result, SelectionValue};
pub use overlay::{Modal, OverlayHandle};
pub use select::{Event, Select, SelectProps};
pub use ui::{Labels, Theme};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Runtime configuration.
///
/// Loaded from a TOML file or a flat key/value map. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in theme name (`light` or `dark`). Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,

    /// User-facing strings of the default presentation.
    pub labels: Labels,
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// # Keys
    ///
    /// - `theme`, `theme_file`, `trace_level`
    /// - `search_placeholder`, `submit_label`, `no_results` (override labels)
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use picksheet::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// map.insert("submit_label".to_string(), "Done".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("dark"));
    /// assert_eq!(config.labels.submit, "Done");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut labels = Labels::default();
        if let Some(placeholder) = map.get("search_placeholder") {
            labels.search_placeholder.clone_from(placeholder);
        }
        if let Some(submit) = map.get("submit_label") {
            labels.submit.clone_from(submit);
        }
        if let Some(no_results) = map.get("no_results") {
            labels.no_results.clone_from(no_results);
        }

        Self {
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
            labels,
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PicksheetError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PicksheetError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PicksheetError::Io`] if the file cannot be read and
    /// [`PicksheetError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Resolves the theme named by `config`.
///
/// `theme_file` wins over `theme_name`; any failure falls back to the default
/// theme with a debug log.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn toml_config_with_partial_labels() {
        let config = Config::from_toml_str(
            r#"
            theme = "dark"

            [labels]
            submit = "Done"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("dark"));
        assert_eq!(config.labels.submit, "Done");
        assert_eq!(config.labels.search_placeholder, "Search items");
    }

    #[test]
    fn unknown_toml_key_is_config_error() {
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(PicksheetError::Config(_))
        ));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        assert!(matches!(Config::from_file("/no/such/picksheet.toml"), Err(PicksheetError::Io(_))));
    }

    #[test]
    fn config_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"trace_level = \"debug\"\n").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn theme_resolution_order() {
        assert_eq!(load_theme(&Config::default()).name, "light");

        let named = Config {
            theme_name: Some("dark".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&named).name, "dark");

        let unknown = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&unknown).name, "light");

        let broken_file = Config {
            theme_name: Some("dark".to_string()),
            theme_file: Some("/no/such/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&broken_file).name, "light");
    }
}
