//! Plugin configuration.
//!
//! A single JSON document, loaded once at activation and replaced wholesale
//! on reload. `serverList` elements may be written as bare name strings or
//! as full objects; both resolve to [`ServerEntry`] while the file is being
//! read, so nothing downstream ever sees the polymorphic form.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConfigError;

/// Relative path the host convention places plugin configuration at
pub const CONFIG_FILE_PATH: &str = "config/joinMOTD.json";

/// Raw shape of a `serverList` element as written in the file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServerListEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        category: String,
    },
}

/// One selectable sub-server. Entries with an empty category render without
/// a category header.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "ServerListEntry")]
pub struct ServerEntry {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
}

impl ServerEntry {
    /// An entry carrying nothing but its name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            category: String::new(),
        }
    }
}

impl From<ServerListEntry> for ServerEntry {
    fn from(raw: ServerListEntry) -> Self {
        match raw {
            ServerListEntry::Name(name) => Self::named(name),
            ServerListEntry::Detailed {
                name,
                description,
                category,
            } => Self {
                name,
                description,
                category,
            },
        }
    }
}

// Name-only entries write back in the bare-string form, so an initialized
// default file round-trips to the shape a hand-written one would use.
impl Serialize for ServerEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.description.is_none() && self.category.is_empty() {
            serializer.serialize_str(&self.name)
        } else {
            let mut map = serializer.serialize_map(None)?;
            map.serialize_entry("name", &self.name)?;
            if let Some(description) = &self.description {
                map.serialize_entry("description", description)?;
            }
            if !self.category.is_empty() {
                map.serialize_entry("category", &self.category)?;
            }
            map.end()
        }
    }
}

/// The persisted plugin configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotdConfig {
    /// Display name shown in the first banner line
    #[serde(rename = "serverName", default = "default_server_name")]
    pub server_name: String,

    /// Display name shown in the day-counter banner
    #[serde(rename = "mainServerName", default = "default_server_name")]
    pub main_server_name: String,

    /// Sub-servers offered in the rendered list, in display order
    #[serde(rename = "serverList", default = "default_server_list")]
    pub server_list: Vec<ServerEntry>,

    /// `YYYY-MM-DD` date the day counter runs from. An explicit `null`
    /// degrades the counter to `"?"`; an absent field takes the default.
    #[serde(default = "default_start_day")]
    pub start_day: Option<String>,
}

fn default_server_name() -> String {
    "HLCC".to_string()
}

fn default_server_list() -> Vec<ServerEntry> {
    ["Main", "Mirror", "Creative"]
        .into_iter()
        .map(ServerEntry::named)
        .collect()
}

fn default_start_day() -> Option<String> {
    Some("2025-02-01".to_string())
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            main_server_name: default_server_name(),
            server_list: default_server_list(),
            start_day: default_start_day(),
        }
    }
}

impl MotdConfig {
    /// Load the configuration from a given file path
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConfigError::IoError(e, path.to_owned()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| ConfigError::JsonError(e, path.to_owned()))
    }

    /// Load the configuration, writing the defaults to `path` and returning
    /// them if no file exists there yet
    pub fn load_or_init(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load_file(path) {
            Err(ConfigError::IoError(e, _)) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.write_file(path)?;
                tracing::info!("Wrote default configuration to {}", path.display());
                Ok(config)
            }
            other => other,
        }
    }

    fn write_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::IoError(e, path.to_owned()))?;
            }
        }
        let file = File::create(path).map_err(|e| ConfigError::IoError(e, path.to_owned()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| ConfigError::JsonError(e, path.to_owned()))
    }
}
