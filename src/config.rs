//! Runtime configuration, read from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `SALES_CHAT_HOST` | `127.0.0.1` |
//! | `SALES_CHAT_PORT` | `8000` |
//! | `SALES_DATA_PATH` | `./dummyData.json` |
//! | `SALES_CHAT_CORS_ORIGIN` | `http://localhost:3000` |
//! | `GEMINI_API_KEY` | unset |
//! | `GEMINI_MODEL` | `gemini-2.0-flash` |
//! | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
//! | `GEMINI_TIMEOUT_SECS` | `30` |

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the outbound Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// Model name used in the endpoint path.
    pub model: String,
    /// Scheme and host of the API.
    pub base_url: String,
    /// Upper bound for a single generation request.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Sales data JSON document.
    pub data_path: PathBuf,
    /// Origin allowed by CORS (the frontend).
    pub cors_origin: String,
    pub gemini: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            data_path: PathBuf::from("./dummyData.json"),
            cors_origin: "http://localhost:3000".into(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("SALES_CHAT_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let timeout = non_empty("GEMINI_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.gemini.timeout);

        Self {
            host: non_empty("SALES_CHAT_HOST").unwrap_or(defaults.host),
            port,
            data_path: non_empty("SALES_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            cors_origin: non_empty("SALES_CHAT_CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            gemini: GeminiConfig {
                api_key: non_empty("GEMINI_API_KEY"),
                model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.gemini.base_url),
                timeout,
            },
        }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
