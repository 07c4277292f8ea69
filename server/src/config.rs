use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_DATABASE_PATH: &str = "pantry_finder.db";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },

    #[error("mount prefix {0:?} still contains a scheme or colon")]
    UnsafePrefix(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_path: PathBuf,
    /// Normalized mount point for the API routes, `/` or `/segment[/...]`
    pub api_prefix: String,
    pub geocoder_url: String,
    pub seed_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Bad values are logged and replaced by
    /// defaults so startup never fails here.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut addr = match var("PANTRY_ADDR") {
            Some(raw) => parse_value::<SocketAddr>("PANTRY_ADDR", &raw).unwrap_or_else(|e| {
                warn!("{e}, using default: {DEFAULT_ADDR}");
                default_addr()
            }),
            None => {
                info!("PANTRY_ADDR not set, using default: {DEFAULT_ADDR}");
                default_addr()
            }
        };
        if let Some(port) = var("PORT") {
            match parse_value::<u16>("PORT", &port) {
                Ok(port) => addr.set_port(port),
                Err(e) => warn!("{e}, keeping port {}", addr.port()),
            }
        }

        let raw_prefix = var("API_PREFIX")
            .or_else(|| var("BASE_PATH"))
            .or_else(|| var("BASE_URL"));
        let api_prefix = match raw_prefix {
            Some(raw) => {
                let prefix = normalize_prefix(&raw).unwrap_or_else(|e| {
                    warn!("{e}; mounting API at /");
                    "/".to_string()
                });
                info!("API prefix {raw:?} normalized to {prefix:?}");
                prefix
            }
            None => DEFAULT_API_PREFIX.to_string(),
        };

        Self {
            addr,
            database_path: var("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),
            api_prefix,
            geocoder_url: var("GEOCODER_URL").unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string()),
            seed_file: var("SEED_FILE").map(PathBuf::from),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        }
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}

/// Turn a user-supplied base path or URL into a route prefix.
///
/// `api`, `/api/`, `https://host/api` and `host/api` all become `/api`;
/// empty input becomes `/`.
pub fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok("/".to_string());
    }

    let path = if let Some((_, rest)) = raw.split_once("://") {
        match rest.find('/') {
            Some(i) => &rest[i..],
            None => "/",
        }
    } else if let Some(i) = raw.find('/').filter(|&i| i > 0) {
        &raw[i..]
    } else {
        raw
    };

    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    if !is_mountable(&normalized) {
        return Err(ConfigError::UnsafePrefix(normalized));
    }
    Ok(normalized)
}

/// Only plain path segments can be nested in the router; captures (`:`),
/// wildcards (`*`), braces and empty segments are refused.
fn is_mountable(prefix: &str) -> bool {
    prefix == "/"
        || prefix.split('/').skip(1).all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '%'))
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_addr_matches_constant() {
        assert_eq!(default_addr(), DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.addr, "0.0.0.0:3001".parse().unwrap());
        assert_eq!(config.database_path, PathBuf::from("pantry_finder.db"));
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
        assert!(config.seed_file.is_none());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_port_overrides_addr() {
        let config = config_from(&[("PANTRY_ADDR", "127.0.0.1:8000"), ("PORT", "9090")]);
        assert_eq!(config.addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[("PANTRY_ADDR", "nowhere"), ("PORT", "99999")]);
        assert_eq!(config.addr, "0.0.0.0:3001".parse().unwrap());
    }

    #[test]
    fn test_prefix_precedence() {
        let config = config_from(&[("BASE_URL", "/from-url"), ("BASE_PATH", "/from-path")]);
        assert_eq!(config.api_prefix, "/from-path");

        let config = config_from(&[("API_PREFIX", "v1"), ("BASE_PATH", "/from-path")]);
        assert_eq!(config.api_prefix, "/v1");
    }

    #[test]
    fn test_unsafe_prefix_mounts_at_root() {
        let config = config_from(&[("API_PREFIX", "/a:b")]);
        assert_eq!(config.api_prefix, "/");
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("").unwrap(), "/");
        assert_eq!(normalize_prefix("/").unwrap(), "/");
        assert_eq!(normalize_prefix("api").unwrap(), "/api");
        assert_eq!(normalize_prefix("/api/").unwrap(), "/api");
        assert_eq!(normalize_prefix("/api//").unwrap(), "/api");
        assert_eq!(normalize_prefix("https://example.com/pantry/").unwrap(), "/pantry");
        assert_eq!(normalize_prefix("https://example.com").unwrap(), "/");
        assert_eq!(normalize_prefix("git.example.com/base/path").unwrap(), "/base/path");
        assert_eq!(normalize_prefix("https://example.com/app?x=1").unwrap(), "/app");
    }

    #[test]
    fn test_normalize_prefix_rejects_colons() {
        assert_eq!(
            normalize_prefix("/https:/x"),
            Err(ConfigError::UnsafePrefix("/https:/x".to_string()))
        );
        assert!(normalize_prefix("localhost:3000").is_err());
    }

    #[test]
    fn test_normalize_prefix_rejects_router_syntax() {
        assert_eq!(
            normalize_prefix("/api*"),
            Err(ConfigError::UnsafePrefix("/api*".to_string()))
        );
        assert!(normalize_prefix("/*rest").is_err());
        assert!(normalize_prefix("/{id}").is_err());
        assert!(normalize_prefix("/a//b").is_err());
        assert!(normalize_prefix("/a b").is_err());
        assert_eq!(normalize_prefix("/v1/pantry-finder_2.0").unwrap(), "/v1/pantry-finder_2.0");
    }

    #[test]
    fn test_wildcard_prefix_mounts_at_root() {
        let config = config_from(&[("API_PREFIX", "/api*")]);
        assert_eq!(config.api_prefix, "/");
    }
}
