//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: default `3000`
//! - `PUBLIC_DIR`: static public assets, default `public/` at the workspace root
//! - `COMPRESSION`: gzip responses, default `true`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
    #[error("invalid COMPRESSION {0:?}: expected true or false")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
    pub compression: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns the first variable that is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |key: &str| std::env::var(key).ok();
        Ok(Self {
            host: parse_host(var("HOST").as_deref())?,
            port: parse_port(var("PORT").as_deref())?,
            public_dir: parse_public_dir(var("PUBLIC_DIR").as_deref()),
            compression: parse_flag(var("COMPRESSION").as_deref(), true)?,
        })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT, public_dir: default_public_dir(), compression: true }
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_HOST),
        Some(s) => s.parse().map_err(|_| ConfigError::InvalidHost(s.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(s) => match s.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidPort(s.to_owned())),
            Ok(port) => Ok(port),
        },
    }
}

fn parse_public_dir(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(default_public_dir, PathBuf::from)
}

fn parse_flag(raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(s) => match s.as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidFlag(s)),
        },
    }
}
