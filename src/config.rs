//! Server configuration from environment variables.
//!
//! | Variable                   | Default     |
//! |----------------------------|-------------|
//! | `HOST`                     | `127.0.0.1` |
//! | `PORT`                     | `8081`      |
//! | `NL2CODE_API_KEY`          | unset       |
//! | `NL2CODE_SESSION_TTL_SECS` | `3600`      |
//! | `NL2CODE_WEB_DIR`          | `web`       |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Required on every API request when set (blank values count as unset).
    pub api_key: Option<String>,
    pub session_ttl: Duration,
    pub web_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8081,
            api_key: None,
            session_ttl: Duration::from_secs(3600),
            web_dir: PathBuf::from("web"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(host) = lookup("HOST").filter(|s| !s.trim().is_empty()) {
            cfg.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            cfg.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT '{port}'"))?;
        }
        cfg.api_key = lookup("NL2CODE_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if let Some(ttl) = lookup("NL2CODE_SESSION_TTL_SECS") {
            let secs: u64 = ttl
                .trim()
                .parse()
                .with_context(|| format!("invalid NL2CODE_SESSION_TTL_SECS '{ttl}'"))?;
            cfg.session_ttl = Duration::from_secs(secs);
        }
        if let Some(dir) = lookup("NL2CODE_WEB_DIR").filter(|s| !s.trim().is_empty()) {
            cfg.web_dir = PathBuf::from(dir);
        }

        Ok(cfg)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .with_context(|| format!("invalid HOST/PORT combination '{raw}'"))
    }
}
