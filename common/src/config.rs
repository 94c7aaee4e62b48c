//! Configuration parsing – reads a KEY=VALUE file (`isocert.conf`).
//!
//! Site address and asset paths are not configured here; Leptos reads those
//! from `[package.metadata.leptos]` (or its `LEPTOS_*` environment variables).

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ISOCERT_CONFIG";
/// Environment variable overriding `API_BASE_URL`.
pub const API_URL_ENV: &str = "ISOCERT_API_URL";

/// Settings for the web server.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ── backend API ──────────────────────────────────────────────────
    /// Base URL of the backend API, without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // ── logging ──────────────────────────────────────────────────────
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "http://localhost:8001/api".into(),
            request_timeout_secs: 15,
            log_filter: "isocert_web=info,tower_http=info".into(),
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/isocert/isocert.conf"
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply `ISOCERT_API_URL` if it is set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = normalise_url(&url);
            }
        }
        self
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(from_map(&parse_conf(&text)))
}

/// Load the file named by `ISOCERT_CONFIG` (or the default path).  A missing
/// file means defaults; an unreadable one is an error.
pub fn load_from_env() -> Result<Config> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| Config::default_path().into());
    let path = Path::new(&path);
    let config = if path.exists() {
        load(path)?
    } else {
        info!("No config at {}, using defaults", path.display());
        Config::default()
    };
    Ok(config.with_env_overrides())
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let defaults = Config::default();
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|v| !v.is_empty()) };

    Config {
        api_base_url: get("API_BASE_URL")
            .map(|u| normalise_url(&u))
            .unwrap_or(defaults.api_base_url),
        request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs),
        log_filter: get("LOG_FILTER").unwrap_or(defaults.log_filter),
    }
}

fn normalise_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# backend
API_BASE_URL="https://api.example.com/api/"
REQUEST_TIMEOUT_SECS=30
LOG_FILTER=isocert_web=debug
"#;
        let config = from_map(&parse_conf(text));
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_filter, "isocert_web=debug");
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let config = from_map(&parse_conf("REQUEST_TIMEOUT_SECS=soon\nAPI_BASE_URL=\n"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let path = tempfile("API_BASE_URL=http://backend:8001/api\n");
        let config = load(&path).unwrap();
        assert_eq!(config.api_base_url, "http://backend:8001/api");
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(load(Path::new("/nonexistent/isocert.conf")).is_err());
    }

    fn tempfile(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("isocert_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.conf");
        std::fs::write(&path, content).unwrap();
        path
    }
}
