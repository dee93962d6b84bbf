//! Configuration file handling for DSA Guide
//!
//! A single optional file, `<config_dir>/dsa-guide/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config, load_settings, read_settings, save_settings,
    CONFIG_DIR_NAME, CONFIG_FILENAME,
};
pub use types::*;
