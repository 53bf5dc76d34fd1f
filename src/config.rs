use crate::core::Gazetteer;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
    pub database: Option<DatabaseSettings>,
    pub appwrite: Option<AppwriteSettings>,
    pub memory: Option<MemorySettings>,
    #[serde(default)]
    pub matching: MatchingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Which candidate repository backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    Postgres,
    Appwrite,
    #[default]
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySettings {
    #[serde(default)]
    pub backend: RepositoryBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppwriteSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub candidates_collection: String,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemorySettings {
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_gazetteer")]
    pub gazetteer: Vec<String>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout_secs(),
            gazetteer: default_gazetteer(),
        }
    }
}

impl MatchingSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn build_gazetteer(&self) -> Gazetteer {
        Gazetteer::new(&self.gazetteer)
    }
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

/// Localities recognized when no gazetteer is configured
fn default_gazetteer() -> Vec<String> {
    [
        // Cities
        "bangalore", "bengaluru", "mumbai", "delhi", "chennai", "hyderabad", "pune", "kolkata",
        // Bangalore neighborhoods
        "koramangala", "indiranagar", "whitefield", "hsr layout", "btm layout", "jayanagar",
        "jp nagar", "electronic city", "marathahalli", "malleshwaram", "hebbal", "yelahanka",
        "banashankari", "rajajinagar", "bellandur", "sarjapur", "mg road",
        // Mumbai neighborhoods
        "andheri", "bandra", "powai", "juhu", "dadar", "colaba", "thane",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn environment() -> Environment {
    // e.g., HELPER__SERVER__PORT -> server.port
    Environment::with_prefix("HELPER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("matching.gazetteer")
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HELPER__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply conventional environment variables on top of the layered config
///
/// `DATABASE_URL` and `APPWRITE_API_KEY` are honored when set, so secrets do
/// not need the HELPER__ prefix.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(database_url) = env::var("DATABASE_URL") {
        builder = builder.set_override("database.url", database_url)?;
    }
    if let Ok(api_key) = env::var("APPWRITE_API_KEY") {
        builder = builder.set_override("appwrite.api_key", api_key)?;
    }

    builder.build()
}
