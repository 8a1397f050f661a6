use crate::error::{Result, TrackListError};
use crate::model::Section;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Default store file name for the text format.
pub const TEXT_DATA_FILE: &str = "records.txt";
/// Default store file name for the JSON format.
pub const JSON_DATA_FILE: &str = "tracklist.json";

const DEFAULT_SECTIONS: [&str; 3] = ["TASKS", "HABITS", "EXPENSES"];

/// Which on-disk format backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    Text,
    Json,
}

/// Configuration for tracklist, stored in the data directory as
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackListConfig {
    /// On-disk store format
    #[serde(default = "default_format")]
    pub format: StoreFormat,

    /// Override for the store file name inside the data directory
    #[serde(default)]
    pub data_file: Option<String>,

    /// Known sections for the text format, in file order
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

fn default_format() -> StoreFormat {
    StoreFormat::Text
}

fn default_sections() -> Vec<String> {
    DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for TrackListConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            data_file: None,
            sections: default_sections(),
        }
    }
}

impl TrackListConfig {
    /// Load config from the given directory, or return defaults if not
    /// found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrackListError::StorageRead)?;
        let config: TrackListConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TrackListError::StorageWrite)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(TrackListError::StorageWrite)?;
        Ok(())
    }

    /// The store file name for the active format, honoring the override.
    pub fn data_file_name(&self) -> &str {
        match &self.data_file {
            Some(name) => name,
            None => match self.format {
                StoreFormat::Text => TEXT_DATA_FILE,
                StoreFormat::Json => JSON_DATA_FILE,
            },
        }
    }

    /// The configured sections as validated `Section` values.
    pub fn section_list(&self) -> Result<Vec<Section>> {
        self.sections.iter().map(|s| Section::new(s)).collect()
    }
}
