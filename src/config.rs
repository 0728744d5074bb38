//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `SHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOP_PORT` - Listen port (default: 8080)
//! - `SHOP_PRODUCTS_FILE` - Product collection file (default: productos.json)
//! - `SHOP_CARTS_FILE` - Cart file (default: carrito.json)
//! - `SHOP_WRITE_DISCIPLINE` - `unguarded` or `serialized` (default: unguarded)
//! - `SHOP_STORE_BUFFER` - Queue capacity of each serialized store task (default: 32)
//! - `SHOP_FALLBACK_ON_CORRUPT` - Read undecodable files as empty (default: false)
//! - `SHOP_CREATE_MISSING` - Read missing files as empty (default: false)

use crate::framework::{CodecOptions, WriteDiscipline};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the product collection (JSON array)
    pub products_file: PathBuf,
    /// Path of the cart file (single JSON object)
    pub carts_file: PathBuf,
    /// Coordination of concurrent operations on one file
    pub write_discipline: WriteDiscipline,
    /// Queue capacity of each serialized store task
    pub store_buffer: usize,
    /// Handling of missing and undecodable files
    pub codec: CodecOptions,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            products_file: PathBuf::from("productos.json"),
            carts_file: PathBuf::from("carrito.json"),
            write_discipline: WriteDiscipline::Unguarded,
            store_buffer: 32,
            codec: CodecOptions::default(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parse_or(&lookup, "SHOP_HOST", defaults.host)?,
            port: parse_or(&lookup, "SHOP_PORT", defaults.port)?,
            products_file: lookup("SHOP_PRODUCTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.products_file),
            carts_file: lookup("SHOP_CARTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.carts_file),
            write_discipline: parse_or(&lookup, "SHOP_WRITE_DISCIPLINE", defaults.write_discipline)?,
            store_buffer: parse_or(&lookup, "SHOP_STORE_BUFFER", defaults.store_buffer)?,
            codec: CodecOptions {
                fallback_on_corrupt: parse_or(&lookup, "SHOP_FALLBACK_ON_CORRUPT", false)?,
                create_missing: parse_or(&lookup, "SHOP_CREATE_MISSING", false)?,
            },
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
