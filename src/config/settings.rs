use crate::config::SearchConfig;
use crate::utils::error::{OpportunityError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "fapesp_opportunities";
pub const CONFIG_FILE: &str = "config.json";

/// Keys every settings file must carry before a search can run.
pub const REQUIRED_KEYS: &[&str] = &["url", "title-contents", "body-contents"];

/// JSON settings file holding the url and the two keyword sets.
///
/// Keys this crate does not know about are left untouched, so the file can be
/// shared with other front-ends.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/fapesp_opportunities/config.json`
    pub fn default_path() -> PathBuf {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_default();
        home.join(".config").join(APP_DIR).join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the file exists and carries every default key.
    ///
    /// Returns `true` when the file had to be written.
    pub fn ensure_defaults(&self) -> Result<bool> {
        let existed = self.path.exists();
        let mut current = if existed {
            match serde_json::from_str::<Value>(&fs::read_to_string(&self.path)?) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    tracing::warn!(
                        "Settings file {} is not a JSON object, rebuilding it from defaults",
                        self.path.display()
                    );
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        let defaults = match serde_json::to_value(SearchConfig::default())? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut updated = false;
        for (key, value) in defaults {
            if !current.contains_key(&key) {
                tracing::debug!("Adding missing settings key '{}'", key);
                current.insert(key, value);
                updated = true;
            }
        }

        if !existed || updated {
            self.write_value(&Value::Object(current))?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn load(&self) -> Result<SearchConfig> {
        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;

        let object = value.as_object().ok_or_else(|| OpportunityError::ConfigError {
            message: format!("{} must contain a JSON object", self.path.display()),
        })?;
        for key in REQUIRED_KEYS {
            if !object.contains_key(*key) {
                return Err(OpportunityError::MissingConfigError {
                    field: key.to_string(),
                });
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Write `config` back, keeping keys of the existing file that
    /// `SearchConfig` does not model.
    pub fn save(&self, config: &SearchConfig) -> Result<()> {
        let mut merged = fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();

        if let Value::Object(fields) = serde_json::to_value(config)? {
            merged.extend(fields);
        }

        self.write_value(&Value::Object(merged))
    }

    fn write_value(&self, value: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}
