pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    BusinessNameConfigItem, ConfigItem, DurationConfigItem, FileLoggingConfigItem,
    SeedDemoConfigItem,
};
use crate::core::types::JobLength;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    DefaultDuration,
    SeedDemoBookings,
    BusinessName,
    FileLoggingEnabled,
}

impl ConfigKey {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                s.trim(),
                valid_csv::<ConfigKey>()
            ))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub default_duration: DurationConfigItem,
    #[serde(default)]
    pub seed_demo_bookings: SeedDemoConfigItem,
    #[serde(default)]
    pub business_name: BusinessNameConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

impl ConfigFile {
    fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DefaultDuration => self.default_duration.get_value().to_string(),
            ConfigKey::SeedDemoBookings => self.seed_demo_bookings.get_value().to_string(),
            ConfigKey::BusinessName => self.business_name.get_value().clone(),
            ConfigKey::FileLoggingEnabled => self.file_logging_enabled.get_value().to_string(),
        }
    }

    fn description_of(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::DefaultDuration => self.default_duration.description(),
            ConfigKey::SeedDemoBookings => self.seed_demo_bookings.description(),
            ConfigKey::BusinessName => self.business_name.description(),
            ConfigKey::FileLoggingEnabled => self.file_logging_enabled.description(),
        }
    }

    fn apply(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        match key {
            ConfigKey::DefaultDuration => self.default_duration.set_value(new_value),
            ConfigKey::SeedDemoBookings => self.seed_demo_bookings.set_value(new_value),
            ConfigKey::BusinessName => self.business_name.set_value(new_value),
            ConfigKey::FileLoggingEnabled => self.file_logging_enabled.set_value(new_value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

/// `(KEY, description, value)` triples in `ConfigKey` order.
#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Parse(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Loads `path`, writing a default config there first if it is missing.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Self::write_default(path)
        }
    }

    /// Writes a config with every item at its default value.
    pub fn write_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cfg = Self {
            path: path.as_ref().to_path_buf(),
            data: ConfigFile::default(),
            last_change: None,
        };
        cfg.save()?;
        Ok(cfg)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_duration(&self) -> JobLength {
        *self.data.default_duration.get_value()
    }
    pub fn seed_demo_bookings(&self) -> bool {
        self.data.seed_demo_bookings.get_value().0
    }
    pub fn business_name(&self) -> &str {
        self.data.business_name.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    (
                        key.to_string(),
                        self.data.description_of(key).to_string(),
                        self.data.value_of(key),
                    )
                })
                .collect(),
        )
    }

    /// Edits the item at row `index` of the config table.
    pub fn set_by_index(&mut self, index: usize, new_value: &str) -> Result<ConfigKey> {
        let key = ConfigKey::iter()
            .nth(index)
            .ok_or_else(|| Error::Parse(format!("Invalid ID: {index}")))?;
        self.set_key(key, new_value)?;
        Ok(key)
    }

    /// `key_str` is a key name or a row ID from the config table.
    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<ConfigKey> {
        if let Ok(index) = key_str.trim().parse::<usize>() {
            return self.set_by_index(index, new_value);
        }
        let key = ConfigKey::try_from(key_str)?;
        self.set_key(key, new_value)?;
        Ok(key)
    }

    /// Applies and persists one edit. On failure nothing changes, in memory
    /// or on disk.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.data.value_of(key);
        let mut next = self.data.clone();
        next.apply(key, new_value)?;
        let previous = std::mem::replace(&mut self.data, next);
        if let Err(e) = self.save() {
            self.data = previous;
            return Err(e);
        }
        self.last_change = Some((key.to_string(), old, self.data.value_of(key)));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
