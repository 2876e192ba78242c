/// Server configuration
use crate::error::{Result, ServerError};
use jukebox_playback::{CatalogSource, MusicSource, SourceKind, SourceRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_events")]
    pub events: EventSettings,

    #[serde(default = "default_sources")]
    pub sources: Vec<SourceSettings>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventSettings {
    /// Events buffered per stream subscriber before it starts lagging
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// One stub song source
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSettings {
    pub name: String,
    pub kind: SourceKind,
    #[serde(default)]
    pub songs: Vec<String>,
}

impl SourceSettings {
    pub fn to_source(&self) -> CatalogSource {
        CatalogSource::new(self.name.clone(), self.kind, self.songs.iter().cloned())
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` is read when
    /// present. `JUKEBOX_`-prefixed variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with JUKEBOX_)
        settings = settings.add_source(
            config::Environment::with_prefix("JUKEBOX")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Parse configuration from a TOML document, without environment overrides
    pub fn from_toml(contents: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Server port must be non-zero (set JUKEBOX_SERVER_PORT)".to_string(),
            ));
        }

        if self.events.capacity == 0 {
            return Err(ServerError::Config(
                "Event capacity must be at least 1".to_string(),
            ));
        }

        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(ServerError::Config("Source name cannot be empty".to_string()));
            }
            if source.songs.iter().any(|song| song.trim().is_empty()) {
                return Err(ServerError::Config(format!(
                    "Source {:?} lists an empty song name",
                    source.name
                )));
            }
        }

        Ok(())
    }

    /// Build the source registry described by `sources`
    pub fn registry(&self) -> SourceRegistry {
        let mut registry = SourceRegistry::new();
        for source in &self.sources {
            registry.add_source(Box::new(source.to_source()));
        }
        registry
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_events() -> EventSettings {
    EventSettings {
        capacity: default_capacity(),
    }
}

fn default_capacity() -> usize {
    64
}

fn default_sources() -> Vec<SourceSettings> {
    [CatalogSource::streaming(), CatalogSource::local_files()]
        .iter()
        .map(|source| SourceSettings {
            name: source.name().to_string(),
            kind: source.kind(),
            songs: source.catalog().to_vec(),
        })
        .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            events: default_events(),
            sources: default_sources(),
        }
    }
}
