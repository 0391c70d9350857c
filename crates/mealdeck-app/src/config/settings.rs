//! Settings file loading

use std::path::{Path, PathBuf};

use mealdeck_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

const APP_DIR: &str = "mealdeck";

/// `<config dir>/mealdeck/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults
///
/// A missing file is normal; an unreadable or unparsable one is logged and
/// ignored.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        let missing = Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        };
        debug!("{}, using defaults", missing);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file at `config_path`
///
/// Returns `false` when a file already exists; it is never overwritten.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    let default_content = r#"# mealdeck configuration

[api]
base_url = "https://www.themealdb.com/api/json/v1/1"
timeout_secs = 10

[ui]
start_view = "home"     # home | category | details
drawer_width = 28
browser = ""            # Empty = system default
"#;

    std::fs::write(config_path, default_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiSettings;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        let config = r#"
[api]
base_url = "http://localhost:8080/api"
timeout_secs = 3

[ui]
start_view = "category"
drawer_width = 40
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.api.base_url, "http://localhost:8080/api");
        assert_eq!(settings.api.timeout_secs, 3);
        assert_eq!(settings.ui.start_view, "category");
        assert_eq!(settings.ui.drawer_width, 40);
        assert!(settings.ui.browser.is_empty());
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is [not valid toml").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_wrong_type_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api]\ntimeout_secs = \"soon\"\n").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.api, ApiSettings::default());
    }

    #[test]
    fn test_init_config_file_creates_parseable_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_does_not_overwrite() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ndrawer_width = 50\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path).ui.drawer_width, 50);
    }

    #[test]
    fn test_init_config_file_reports_io_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config_file(&blocker.join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("mealdeck/config.toml"));
        }
    }
}
