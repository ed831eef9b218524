//! Server configuration: defaults, an optional TOML file, then CLI/env overrides.

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Server configuration (TOML).
///
/// Missing fields take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to listen on.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,

    /// The only origin allowed to call `/api` from a browser.
    pub frontend_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3001,
            frontend_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub frontend_origin: Option<String>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        self.bind
            .parse::<IpAddr>()
            .map_err(|_| anyhow!("bind must be an IP address, got '{}'", self.bind))?;
        self.allowed_origin()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("parse bind address '{}'", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// The configured origin as a CORS header value.
    pub fn allowed_origin(&self) -> Result<HeaderValue> {
        let origin = self.frontend_origin.trim();
        if origin.is_empty() {
            return Err(anyhow!("frontend_origin must not be empty"));
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(anyhow!(
                "frontend_origin must start with http:// or https://, got '{}'",
                origin
            ));
        }
        HeaderValue::from_str(origin)
            .with_context(|| format!("frontend_origin is not a valid header value: '{}'", origin))
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(bind) = &overrides.bind {
            self.bind = bind.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(origin) = &overrides.frontend_origin {
            self.frontend_origin = origin.clone();
        }
    }
}

/// Resolve the effective config.
///
/// A missing file is treated as empty. Overrides win over the file.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<ServerConfig> {
    let mut cfg: ServerConfig = match path {
        Some(path) if path.exists() => {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?
        }
        Some(path) => {
            info!(path = %path.display(), "config file not found, using defaults");
            ServerConfig::default()
        }
        None => ServerConfig::default(),
    };
    cfg.apply(overrides);
    cfg.validate()?;
    Ok(cfg)
}
