//! Configuration types for DSA Guide
//!
//! Every field has a default, so a partial or empty file is valid.

use dsa_content::Page;
use serde::{Deserialize, Serialize};

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub code: CodeSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Page the terminal UI opens on when none is given on the command line
    #[serde(default)]
    pub start_page: Page,

    /// Number the lines of code snippets
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_page: Page::default(),
            show_line_numbers: true,
        }
    }
}

/// Code snippet settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodeSettings {
    /// Label shown for snippets authored in a single language
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback_language(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fallback_language() -> String {
    "JavaScript".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.ui.show_line_numbers);
        assert_eq!(settings.code.fallback_language, "JavaScript");
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
start_page = "trees"
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.start_page, Page::Trees);
        assert!(settings.ui.show_line_numbers);
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[ui]\nstart_page = \"graphs\"\n");
        assert!(result.is_err());
    }
}
