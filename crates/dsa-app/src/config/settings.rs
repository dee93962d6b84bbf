//! Settings loading and writing

use std::path::{Path, PathBuf};

use dsa_core::prelude::*;

use super::types::Settings;

pub const CONFIG_DIR_NAME: &str = "dsa-guide";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# DSA Guide Configuration

[ui]
start_page = "frameworks"   # frameworks | recursion | strings | trees
show_line_numbers = true

[code]
# Label shown for snippets written in a single language
fallback_language = "JavaScript"
"#;

/// `<config_dir>/dsa-guide/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Read and parse the settings file
///
/// Fails with [`Error::ConfigNotFound`] when the file is absent and
/// [`Error::ConfigParse`] when it is not valid TOML for [`Settings`].
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings, falling back to defaults when the file is missing or invalid
pub fn load_settings(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(Error::ConfigNotFound { .. }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Write the commented default file. Returns false if one already exists.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    ensure_parent(path)?;
    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}

/// Serialize settings, replacing the file atomically
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    ensure_parent(path)?;

    let content = toml::to_string_pretty(settings)?;
    let full_content = format!("# DSA Guide Configuration\n\n{}", content);

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", path);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display())),
        _ => Ok(()),
    }
}
