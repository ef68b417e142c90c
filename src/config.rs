//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::{Endpoints, DEFAULT_API_ROOT};
use crate::model::EntityKind;
use crate::store::DEFAULT_SEED;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Demo API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL used in the API root listing and pagination links
    pub public_url: Option<String>,

    /// Serve collections paginated when set
    pub page_size: Option<usize>,

    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: None,
            page_size: None,
            seed: default_seed(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }
}

/// Where the dashboard fetches its collections from
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_api_root")]
    pub api_root: String,

    pub users_url: Option<String>,
    pub teams_url: Option<String>,
    pub activities_url: Option<String>,
    pub leaderboard_url: Option<String>,
    pub workouts_url: Option<String>,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_root: default_api_root(),
            users_url: None,
            teams_url: None,
            activities_url: None,
            leaderboard_url: None,
            workouts_url: None,
        }
    }
}

impl DashboardConfig {
    /// Endpoint set for the controllers: derived from the root, then overridden
    pub fn endpoints(&self) -> Endpoints {
        let overrides = [
            (EntityKind::Users, &self.users_url),
            (EntityKind::Teams, &self.teams_url),
            (EntityKind::Activities, &self.activities_url),
            (EntityKind::Leaderboard, &self.leaderboard_url),
            (EntityKind::Workouts, &self.workouts_url),
        ];

        overrides.into_iter().fold(
            Endpoints::from_api_root(&self.api_root),
            |endpoints, (kind, url)| match url {
                Some(url) => endpoints.with_override(kind, url.clone()),
                None => endpoints,
            },
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("/etc/octofit/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("OCTOFIT_API_URL") {
            self.dashboard.api_root = url;
        }

        if let Some(host) = lookup("OCTOFIT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("OCTOFIT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid OCTOFIT_PORT {:?}", port),
            }
        }
        if let Some(size) = lookup("OCTOFIT_PAGE_SIZE") {
            match size.parse::<usize>() {
                Ok(0) => self.server.page_size = None,
                Ok(n) => self.server.page_size = Some(n),
                Err(_) => tracing::warn!("Ignoring invalid OCTOFIT_PAGE_SIZE {:?}", size),
            }
        }

        if let Some(level) = lookup("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Configuration
#
# Environment variables override these settings:
# - OCTOFIT_API_URL
# - OCTOFIT_HOST
# - OCTOFIT_PORT
# - OCTOFIT_PAGE_SIZE
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[server]
# Demo API host
host = "0.0.0.0"

# Demo API port
port = 8000

# Public base URL for links in responses (defaults to http://localhost:<port>)
# public_url = "https://octofit.example.com"

# Serve {count, next, previous, results} pages of this size
# page_size = 10

# Seed for the generated demo data
seed = 8000

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[dashboard]
# Base URL of the API the dashboard reads from
api_root = "http://localhost:8000"

# Per-collection overrides
# users_url = "http://localhost:8000/api/users/"
# teams_url = "http://localhost:8000/api/teams/"
# activities_url = "http://localhost:8000/api/activities/"
# leaderboard_url = "http://localhost:8000/api/leaderboard/"
# workouts_url = "http://localhost:8000/api/workouts/"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
