/// API configuration
use crate::error::{ApiError, Result};
use coinsextra_storage::PoolSettings;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_database")]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// `SQLite` URL of the database to bind; unset leaves the API unbound
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

impl DatabaseSettings {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            busy_timeout: Duration::from_secs(self.busy_timeout_secs),
        }
    }
}

impl ApiConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. COINSEXTRA_DATABASE__URL
        settings = settings.add_source(
            config::Environment::with_prefix("COINSEXTRA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ApiError::Config("server.port must be non-zero".to_string()));
        }

        if self.database.max_connections == 0 {
            return Err(ApiError::Config(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        self.socket_addr().map(|_| ())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ApiError::Config(format!("invalid server.host: {}", e)))?;
        Ok(SocketAddr::from((ip, self.server.port)))
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
    8787
}

fn default_database() -> DatabaseSettings {
    DatabaseSettings {
        url: None,
        max_connections: default_max_connections(),
        busy_timeout_secs: default_busy_timeout_secs(),
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            database: default_database(),
        }
    }
}
