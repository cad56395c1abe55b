//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::download::remux::DEFAULT_PROGRAM;
use crate::error::{Error, Result};

/// On-disk configuration.
///
/// Consulted only when no cookie arrives via CLI or environment; carries the
/// session cookie plus a couple of optional overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bilibili session cookie (the browser's `Cookie` header value).
    #[serde(default)]
    pub cookie: String,

    /// Browser user agent attached to every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Remux program override.
    #[serde(default)]
    pub ffmpeg: Option<String>,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {} (needed because no cookie was supplied \
                     via --cookie or BILI_COOKIE). Create one from config.example.json",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cookie: String::new(),
            user_agent: default_user_agent(),
            ffmpeg: None,
        }
    }
}

/// Resolved run credentials and overrides.
///
/// The pipeline receives these as plain values; nothing downstream of the
/// resolution step reads credential files.
#[derive(Debug, Clone)]
pub struct Session {
    pub cookie: Option<String>,
    pub user_agent: String,
    pub ffmpeg: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            cookie: None,
            user_agent: default_user_agent(),
            ffmpeg: DEFAULT_PROGRAM.to_string(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Safari/605.1.15".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = Config::load(&tmp.path().join("config.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_applies_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"cookie": "SESSDATA=abc123"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.cookie, "SESSDATA=abc123");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.ffmpeg.is_none());
    }

    #[test]
    fn test_load_reads_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"cookie": "SESSDATA=abc123", "user_agent": "custom-agent", "ffmpeg": "/opt/ffmpeg/bin/ffmpeg"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.user_agent, "custom-agent");
        assert_eq!(config.ffmpeg.as_deref(), Some("/opt/ffmpeg/bin/ffmpeg"));
    }

    #[test]
    fn test_load_malformed_json_is_json_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "cookie = not json").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_cookie_field_parses_to_empty() {
        // The loader stays lenient; validation turns the empty cookie into
        // a missing-config error
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.cookie.is_empty());
    }
}
