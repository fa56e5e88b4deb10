use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variables read by [`AppConfig::load`].
pub mod vars {
    pub const ENV: &str = "ECRP_ENV";
    pub const HOST: &str = "ECRP_HOST";
    pub const PORT: &str = "ECRP_PORT";
    pub const LOG_LEVEL: &str = "ECRP_LOG_LEVEL";

    pub const ALL: [&str; 4] = [ENV, HOST, PORT, LOG_LEVEL];
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage the appraisal service is running in. Unknown values read
/// as development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
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
}

impl AppConfig {
    /// Reads `.env` if present, then the `ECRP_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source; blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let environment = read(vars::ENV)
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let port = match read(vars::PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: read(vars::HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: read(vars::LOG_LEVEL)
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
        })
    }

    /// Applies `serve --host/--port` on top of the loaded values.
    pub fn with_server_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let ip = if host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            host.parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: host.to_string(),
                    source,
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter applied when `RUST_LOG` is not set.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{} must be a port number between 0 and 65535 (got '{value}')", vars::PORT)]
    InvalidPort { value: String },
    #[error("{} must be localhost or an IP address (got '{value}')", vars::HOST)]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
}
