//! Configuration file parsing for mealdeck
//!
//! A single optional TOML file, by default `<config dir>/mealdeck/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CONFIG_FILENAME};
pub use types::*;
