use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{from_str, to_string_pretty};
use std::{fs, path::PathBuf};

use crate::settings::consts::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, SETTINGS_FILE};

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct Settings {
    /// Base URL of the platform API, `DEFAULT_BASE_URL` when unset.
    #[serde(rename = "baseUrl")]
    pub base_url: Option<String>,
    #[serde(rename = "username")]
    pub username: Option<String>,
    /// Only honored when the user placed it in a credentials file themselves;
    /// the CLI never writes it.
    #[serde(rename = "password")]
    pub password: Option<String>,
}

pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

pub struct FileSettingsStore {
    directory: PathBuf, // platform config directory (from ProjectDirs)
    file: &'static str, // "settings.json"
}

impl FileSettingsStore {
    /// Build from ProjectDirs config directory:
    ///   - Windows:   %APPDATA%\<qualifier>\<org>\<app>\settings.json
    ///   - macOS:     ~/Library/Application Support/<app>/settings.json
    ///   - Linux:     ~/.config/<app>/settings.json
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine project directories"))?;

        Ok(Self {
            directory: project_dirs.config_dir().to_path_buf(),
            file: SETTINGS_FILE,
        })
    }

    fn path(&self) -> PathBuf {
        self.directory.join(self.file)
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create settings directory: {}",
                self.directory.display()
            )
        })?;
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                let defaults = Settings::default();
                self.save(&defaults)?;
                return Ok(defaults);
            }
        };
        from_str(&content).context("Failed to deserialize settings")
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create settings directory: {}",
                self.directory.display()
            )
        })?;
        fs::write(self.path(), to_string_pretty(settings)?)
            .with_context(|| format!("Failed to persist settings file: {}", self.path().display()))
    }
}

pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        from_str(&content).context("Failed to deserialize settings")
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        fs::write(&self.path, to_string_pretty(settings)?)
            .with_context(|| format!("Failed to persist settings file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_store_round_trip() {
        let path = std::env::temp_dir().join("quantdesk-settings-round-trip.json");
        let store = JsonFileSettingsStore::new(path.clone());

        store
            .save(&Settings {
                base_url: Some("http://localhost:8000/api".to_string()),
                username: Some("admin".to_string()),
                password: None,
            })
            .unwrap();

        let settings = store.load().unwrap();
        assert_eq!(
            settings.base_url.as_deref(),
            Some("http://localhost:8000/api")
        );
        assert_eq!(settings.username.as_deref(), Some("admin"));
        assert!(settings.password.is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_settings_file_keys_are_stable() {
        let json = to_string_pretty(&Settings {
            base_url: Some("http://localhost:8000/api".to_string()),
            username: Some("admin".to_string()),
            password: None,
        })
        .unwrap();
        assert!(json.contains("\"baseUrl\""));
        assert!(json.contains("\"username\""));
    }
}
