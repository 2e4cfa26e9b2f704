//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Cross-origin settings for the browser frontend.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Whether the CORS layer is installed at all.
    pub enabled: bool,

    /// Origins allowed to call the API (credentials are allowed, so no wildcard).
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:5174".to_string(),
    ]
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_origins(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config for the given address.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load HTTP config from environment variables.
    ///
    /// Reads `HOST`, `PORT`, `CORS_ORIGIN` (comma-separated) and `CORS_ENABLED`.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());

        let allowed_origins = std::env::var("CORS_ORIGIN")
            .ok()
            .map(|v| parse_origins(&v))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_origins);
        let enabled = std::env::var("CORS_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            cors: CorsConfig {
                enabled,
                allowed_origins,
            },
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        let cors = if self.cors.enabled {
            format!("CORS for {}", self.cors.allowed_origins.join(", "))
        } else {
            "CORS disabled".to_string()
        };
        format!("HTTP on {} ({})", self.address(), cors)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address() {
        let config = HttpConfig::default();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://a.example ,https://b.example,, "),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_description_mentions_origins() {
        let config = HttpConfig::new(9000, "127.0.0.1");
        let description = config.description();
        assert!(description.contains("127.0.0.1:9000"));
        assert!(description.contains("http://localhost:5173"));
    }
}
