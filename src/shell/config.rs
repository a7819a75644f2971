use crate::modules::attendance::core::calendar::{DEFAULT_LEAVES_ALLOWED, WorkPolicy};
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub upload_limit_bytes: usize,
    pub leaves_allowed: u32,
}

impl Config {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server_addr: parse_or(&lookup, "SERVER_ADDR", DEFAULT_SERVER_ADDR.parse().ok())?,
            upload_limit_bytes: parse_or(
                &lookup,
                "UPLOAD_LIMIT_BYTES",
                Some(DEFAULT_UPLOAD_LIMIT_BYTES),
            )?,
            leaves_allowed: parse_or(&lookup, "LEAVES_ALLOWED", Some(DEFAULT_LEAVES_ALLOWED))?,
        })
    }

    pub fn policy(&self) -> WorkPolicy {
        WorkPolicy::default().with_leaves_allowed(self.leaves_allowed)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Invalid {
            name,
            value: String::new(),
        }),
    }
}
