//! Theme provider and style resolver.
//!
//! A [`Theme`] is a named palette of hex colors, loaded from an embedded
//! built-in or a TOML file. [`resolve_style`] is the pure style resolver that
//! maps a theme and a [`StyleRole`] to a [`Style`]; presentations call it once
//! per part and never keep state of their own.
//!
//! # Built-in Themes
//!
//! - `light`: White sheet with dark text (default)
//! - `dark`: Dark sheet with light text
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#1f2937"
//! text_normal = "#374151"
//! text_dim = "#9ca3af"
//! selection_fg = "#ffffff"
//! selection_bg = "#2563eb"
//! search_bar_border = "#e5e7eb"
//! empty_state_fg = "#6b7280"
//! submit_fg = "#ffffff"
//! submit_bg = "#16a34a"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{PicksheetError, Result};

/// Color scheme configuration for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all parts of a select.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#2563eb"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub title_fg: String,
    /// Normal text color (message, rows).
    pub text_normal: String,
    /// Dimmed text color (placeholder, secondary info).
    pub text_dim: String,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Search input border color.
    pub search_bar_border: String,

    /// No-results message color.
    pub empty_state_fg: String,

    /// Submit control foreground color.
    pub submit_fg: String,
    /// Submit control background color.
    pub submit_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PicksheetError::Theme`] if the file cannot be read or the TOML
    /// cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| PicksheetError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| PicksheetError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `light` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("light").expect("built-in light theme should always parse")
    }
}

/// The part of a select being styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Title,
    Message,
    SearchInput { placeholder: bool },
    Row { selected: bool },
    NoResults,
    Submit,
}

/// A computed style descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub fg: String,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    /// Wraps `text` in the ANSI sequences for this style.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(Theme::bold());
        }
        if self.dim {
            out.push_str(Theme::dim());
        }
        out.push_str(&Theme::fg(&self.fg));
        if let Some(bg) = &self.bg {
            out.push_str(&Theme::bg(bg));
        }
        out.push_str(text);
        out.push_str(Theme::reset());
        out
    }
}

/// Resolves the style for one part of a select.
#[must_use]
pub fn resolve_style(theme: &Theme, role: StyleRole) -> Style {
    let colors = &theme.colors;
    let plain = |fg: &str| Style {
        fg: fg.to_string(),
        bg: None,
        bold: false,
        dim: false,
    };

    match role {
        StyleRole::Title => Style {
            bold: true,
            ..plain(&colors.title_fg)
        },
        StyleRole::Message => plain(&colors.text_normal),
        StyleRole::SearchInput { placeholder: true } => Style {
            dim: true,
            ..plain(&colors.text_dim)
        },
        StyleRole::SearchInput { placeholder: false } => plain(&colors.text_normal),
        StyleRole::Row { selected: true } => Style {
            bg: Some(colors.selection_bg.clone()),
            bold: true,
            ..plain(&colors.selection_fg)
        },
        StyleRole::Row { selected: false } => plain(&colors.text_normal),
        StyleRole::NoResults => plain(&colors.empty_state_fg),
        StyleRole::Submit => Style {
            bg: Some(colors.submit_bg.clone()),
            bold: true,
            ..plain(&colors.submit_fg)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtins_parse() {
        assert_eq!(Theme::from_name("light").map(|t| t.name), Some("light".to_string()));
        assert_eq!(Theme::from_name("dark").map(|t| t.name), Some("dark".to_string()));
        assert!(Theme::from_name("neon").is_none());
        assert_eq!(Theme::default().name, "light");
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let dark = toml::to_string(&Theme::from_name("dark").unwrap()).unwrap();
        let custom = dark.replace("name = \"dark\"", "name = \"custom\"");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn invalid_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(PicksheetError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/definitely/missing.toml"),
            Err(PicksheetError::Theme(_))
        ));
    }

    #[test]
    fn hex_colors_become_ansi() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("nonsense"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn resolver_marks_selected_rows() {
        let theme = Theme::default();
        let selected = resolve_style(&theme, StyleRole::Row { selected: true });
        assert_eq!(selected.bg.as_deref(), Some(theme.colors.selection_bg.as_str()));
        assert!(resolve_style(&theme, StyleRole::Row { selected: false }).bg.is_none());
        assert!(resolve_style(&theme, StyleRole::Title).bold);
    }
}
