use crate::core::types::{Bool, JobLength};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationConfigItem {
    pub value: JobLength,
    pub description: String,
}

impl Default for DurationConfigItem {
    fn default() -> Self {
        Self {
            value: JobLength::default(),
            description: "Job duration in hours selected at startup.".into(),
        }
    }
}

impl ConfigItem<JobLength> for DurationConfigItem {
    fn get_value(&self) -> &JobLength {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = JobLength::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDemoConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for SeedDemoConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Load sample bookings into the current week at startup.".into(),
        }
    }
}

impl ConfigItem<Bool> for SeedDemoConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessNameConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for BusinessNameConfigItem {
    fn default() -> Self {
        Self {
            value: "J L Electrical Services".into(),
            description: "Title shown in the banner.".into(),
        }
    }
}

impl ConfigItem<String> for BusinessNameConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let trimmed = new_value.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("Business name cannot be empty.".into()));
        }
        self.value = trimmed.to_string();
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
