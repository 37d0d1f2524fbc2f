//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Public Google Translate endpoint used by the default provider
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Browser-like user agent; the endpoint refuses some bare clients
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the translation provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Translation endpoint URL
    pub api_endpoint: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_endpoint = std::env::var("TRANSLATE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_ENDPOINT.to_string());

        let user_agent = std::env::var("TRANSLATE_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Self {
            api_endpoint,
            user_agent,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if !self.api_endpoint.starts_with("http://") && !self.api_endpoint.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "API endpoint must be an http(s) URL, got {}",
                self.api_endpoint
            ));
        }

        Ok(())
    }
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid number: {}", e))?,
            Err(_) => defaults.port,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}
