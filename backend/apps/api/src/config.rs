//! Server Configuration
//!
//! Everything is read from the environment (after `.env` is loaded), with
//! defaults suited to a local PostgreSQL.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Configuration errors; all of them abort startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Which hero store backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStoreKind {
    Postgres,
    /// Volatile, seeded store; data is lost on restart
    Memory,
}

impl FromStr for HeroStoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgres" => Ok(HeroStoreKind::Postgres),
            "memory" => Ok(HeroStoreKind::Memory),
            _ => Err(()),
        }
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub credentials_file: PathBuf,
    pub hero_store: HeroStoreKind,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Read from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Set-but-empty counts as unset
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let ip: IpAddr = parse("BIND_ADDR", get("BIND_ADDR", "0.0.0.0"), "an IP address")?;
        let port: u16 = parse("PORT", get("PORT", "8080"), "a port number")?;

        let database = DatabaseConfig {
            host: get("DB_HOST", "localhost"),
            port: parse("DB_PORT", get("DB_PORT", "5432"), "a port number")?,
            user: get("DB_USER", "postgres"),
            password: get("DB_PASSWORD", "password"),
            name: get("DB_NAME", "heroes_db"),
            ssl_mode: parse(
                "DB_SSLMODE",
                get("DB_SSLMODE", "disable"),
                "one of disable, allow, prefer, require, verify-ca, verify-full",
            )?,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            credentials_file: PathBuf::from(get("CREDENTIALS_FILE", "config.yaml")),
            hero_store: parse("HERO_STORE", get("HERO_STORE", "postgres"), "postgres or memory")?,
            database,
        })
    }
}

fn parse<T: FromStr>(
    key: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { key, expected, value })
}
