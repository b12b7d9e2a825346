use std::fs;
use std::path::{Path, PathBuf};

use restorer_engine::{DEFAULT_ANNOTATIONS_ENDPOINT, DEFAULT_ARCHIVE_ENDPOINT};
use restorer_logging::restorer_warn;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "restorer.ron";

/// Remote endpoints, overridable through a RON config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub annotations_endpoint: String,
    pub archive_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            annotations_endpoint: DEFAULT_ANNOTATIONS_ENDPOINT.to_string(),
            archive_endpoint: DEFAULT_ARCHIVE_ENDPOINT.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the config from `path`, or `./restorer.ron` when absent.
    /// A missing file yields the defaults; unreadable or unparseable files
    /// are logged and also yield the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path: PathBuf = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                restorer_warn!("Failed to read config from {:?}: {}", path, err);
                return Self::default();
            }
        };

        match ron::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                restorer_warn!("Failed to parse config from {:?}: {}", path, err);
                Self::default()
            }
        }
    }
}
