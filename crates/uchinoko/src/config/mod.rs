//! Environment-driven settings for the API binary.
//!
//! Every key has a default so a bare checkout serves on `127.0.0.1:3000`.

use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};

use crate::profiles::ProfileLimits;

const ENV_KEY: &str = "APP_ENV";
const HOST_KEY: &str = "APP_HOST";
const PORT_KEY: &str = "APP_PORT";
const LOG_LEVEL_KEY: &str = "APP_LOG_LEVEL";
const PHOTO_LIMIT_KEY: &str = "APP_DIARY_PHOTO_LIMIT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage. Only affects log formatting today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Unrecognized names fall back to development.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub profiles: ProfileLimits,
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(ENV_KEY)
            .map(|raw| AppEnvironment::parse(&raw))
            .unwrap_or_default();

        let port = match lookup(PORT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let max_diary_photos = match lookup(PHOTO_LIMIT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidPhotoLimit(raw))?,
            None => ProfileLimits::default().max_diary_photos,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: lookup(HOST_KEY).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: lookup(LOG_LEVEL_KEY).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            profiles: ProfileLimits { max_diary_photos },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    host: self.host.clone(),
                    source,
                })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16 (found '{0}')")]
    InvalidPort(String),
    #[error("APP_HOST '{host}' must be an IPv4/IPv6 address or localhost")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
    #[error("APP_DIARY_PHOTO_LIMIT must be a positive integer (found '{0}')")]
    InvalidPhotoLimit(String),
}
