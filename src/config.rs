// config.rs
use crate::catalog::Candidate;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub probe: ProbeConfig,
    pub relay: RelayConfig,
    pub storefront: StorefrontConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: String,
    pub max_workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_candidates")]
    pub candidates: Vec<Candidate>,
    pub timeout_secs: u64,
    /// Whether `{status: "success", data: []}` counts as an answer.
    pub accept_empty_success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub upstream_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    pub currency: String,
    pub description_limit: usize,
}

fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("https://mohamedalamin.wuaze.com/api/products", "Direct API"),
        Candidate::new("http://127.0.0.1:3000/api/products", "Local relay"),
    ]
}

impl AppConfig {
    /// File (optional) → `STOREFRONT__*` env vars → defaults.
    /// `STOREFRONT_CONFIG` overrides the file path.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix("STOREFRONT")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.addr", "127.0.0.1:3000")?
            .set_default("server.max_workers", 8)?
            .set_default("logging.level", "info")?
            .set_default("probe.timeout_secs", 8)?
            .set_default("probe.accept_empty_success", false)?
            .set_default(
                "relay.upstream_url",
                "http://mohamedalamin.wuaze.com/api/real-products",
            )?
            .set_default("relay.timeout_secs", 10)?
            .set_default("storefront.currency", "SAR")?
            .set_default("storefront.description_limit", 120)?
            .build()?;

        let cfg: AppConfig = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.candidates.is_empty() {
            return Err(ConfigError::Invalid("probe.candidates is empty".into()));
        }

        for candidate in &self.probe.candidates {
            Url::parse(&candidate.url).map_err(|e| {
                ConfigError::Invalid(format!("candidate {:?}: {e}", candidate.label))
            })?;
        }

        Url::parse(&self.relay.upstream_url)
            .map_err(|e| ConfigError::Invalid(format!("relay.upstream_url: {e}")))?;

        if self.probe.timeout_secs == 0 || self.relay.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeouts must be at least 1s".into()));
        }

        if self.server.max_workers == 0 {
            return Err(ConfigError::Invalid("server.max_workers must be > 0".into()));
        }

        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .addr
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server.addr: {e}")))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe.timeout_secs)
    }

    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay.timeout_secs)
    }
}
