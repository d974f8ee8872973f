use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Config file read from the working directory at startup.
pub const CONFIG_FILE: &str = "catalog.toml";

/// Top-level server configuration, loaded from `catalog.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub service: ServiceConfig,
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            service: ServiceConfig::default(),
            catalog: CatalogConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

/// Identity reported by the root and health endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub docs_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "bib".to_string(),
            docs_url: "/docs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Start with the three demo titles instead of an empty catalog.
    pub seed_demo_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

/// HTTP middleware settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub request_timeout_secs: u64,
    pub cors_permissive: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            cors_permissive: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("listen_addr {0:?} is not a valid socket address")]
    InvalidListenAddr(String),
    #[error("http.request_timeout_secs must be > 0")]
    ZeroTimeout,
    #[error("service.docs_url {0:?} must start with '/' and not shadow an API route")]
    InvalidDocsUrl(String),
}

/// Paths served by the API itself; the docs page must not take one of them.
const RESERVED_PATHS: [&str; 4] = ["/", "/health", "/openapi.json", "/games"];

impl ServerConfig {
    /// Check the config and return the parsed listen address.
    pub fn validate(&self) -> Result<SocketAddr, ConfigError> {
        let addr = self
            .listen_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr(self.listen_addr.clone()))?;

        if self.http.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let docs_url = &self.service.docs_url;
        if !docs_url.starts_with('/')
            || RESERVED_PATHS.contains(&docs_url.as_str())
            || docs_url.starts_with("/games/")
        {
            return Err(ConfigError::InvalidDocsUrl(docs_url.clone()));
        }

        if !self.catalog.seed_demo_data {
            tracing::info!("Demo data disabled, catalog starts empty");
        }

        Ok(addr)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.request_timeout_secs)
    }

    /// Load config from `catalog.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = Self::from_file(Path::new(CONFIG_FILE));
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    cfg
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to parse config: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "No config file found, using defaults");
                ServerConfig::default()
            },
        }
    }

    /// Apply `CATALOG_*` overrides; `lookup` resolves a variable name.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("CATALOG_LISTEN_ADDR")
            && !addr.is_empty()
        {
            self.listen_addr = addr;
        }
        if let Some(name) = lookup("CATALOG_SERVICE_NAME")
            && !name.is_empty()
        {
            self.service.name = name;
        }
        if let Some(val) = lookup("CATALOG_SEED_DEMO_DATA")
            && let Ok(seed) = val.parse::<bool>()
        {
            self.catalog.seed_demo_data = seed;
        }
        if let Some(val) = lookup("CATALOG_REQUEST_TIMEOUT_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            self.http.request_timeout_secs = n;
        }
    }
}
