// src/config.rs
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid value '{value}' for {name}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Process settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub max_workers: usize,
    pub max_sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            data_path: PathBuf::from("query-results.txt"),
            max_workers: 8,
            max_sessions: 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; unset or blank variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            data_path: lookup("DASHBOARD_DATA")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            max_workers: parse_nonzero(&lookup, "DASHBOARD_WORKERS", defaults.max_workers)?,
            max_sessions: parse_var(&lookup, "DASHBOARD_SESSIONS", defaults.max_sessions)?,
        })
    }

    /// Listens on every interface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| ConfigError {
            name,
            value: raw,
        }),
        _ => Ok(default),
    }
}

/// Like `parse_var`, but zero is rejected; astra starts no workers for it.
fn parse_nonzero<F>(lookup: &F, name: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var(lookup, name, default)? {
        0 => Err(ConfigError {
            name,
            value: lookup(name).unwrap_or_default(),
        }),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("DASHBOARD_DATA", "/data/cars.tsv"),
            ("DASHBOARD_WORKERS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("/data/cars.tsv"));
        assert_eq!(config.max_workers, 2);
        assert_eq!(config.max_sessions, 1024);
    }

    #[test]
    fn unparseable_port_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err.name, "PORT");
        assert_eq!(err.to_string(), "invalid value 'http' for PORT");
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("DASHBOARD_WORKERS", "0")])).unwrap_err();
        assert_eq!(err.name, "DASHBOARD_WORKERS");
        assert_eq!(err.to_string(), "invalid value '0' for DASHBOARD_WORKERS");

        let err = Config::from_lookup(lookup_from(&[("DASHBOARD_WORKERS", " 0 ")])).unwrap_err();
        assert_eq!(err.name, "DASHBOARD_WORKERS");
    }
}
