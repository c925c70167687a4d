//! Server configuration from environment variables.
//!
//! | Variable                | Default                    |
//! |-------------------------|----------------------------|
//! | `HOST`                  | `0.0.0.0`                  |
//! | `PORT`                  | `8080`                     |
//! | `FOOTLE_DATA`           | `data/footle_players.csv`  |
//! | `SECRET_KEY`            | generated per process      |
//! | `SESSION_TIMEOUT_HOURS` | `12`                       |

use std::path::PathBuf;
use std::time::Duration;

/// Cookie signing keys must be at least this many bytes.
pub const MIN_SECRET_KEY_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    /// `None` when unset or too short; the server then generates a key.
    pub secret_key: Option<String>,
    pub session_timeout: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/footle_players.csv")
}

fn default_session_timeout_hours() -> u64 {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_path: default_dataset_path(),
            secret_key: None,
            session_timeout: Duration::from_secs(default_session_timeout_hours() * 3600),
        }
    }
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`. Unparseable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = parse_or(&lookup, "PORT", default_port());
        let dataset_path = lookup("FOOTLE_DATA")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_dataset_path);
        let secret_key = lookup("SECRET_KEY").and_then(|k| {
            if k.len() >= MIN_SECRET_KEY_LEN {
                Some(k)
            } else {
                log::warn!(
                    "SECRET_KEY is shorter than {} bytes; ignoring it",
                    MIN_SECRET_KEY_LEN
                );
                None
            }
        });
        let hours = parse_or(&lookup, "SESSION_TIMEOUT_HOURS", default_session_timeout_hours());
        Self {
            host,
            port,
            dataset_path,
            secret_key,
            session_timeout: Duration::from_secs(hours * 3600),
        }
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {}={:?}; using default", key, raw);
            default
        }),
        None => default,
    }
}
