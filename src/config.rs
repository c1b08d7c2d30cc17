//! Tracker configuration
//!
//! Host, port, user and database name are fixed constants; only the password
//! comes from the environment (`DB_PASSWORD`, loaded via `.env` if present).

use crate::error::{Result, TrackerError};

pub const DB_HOST: &str = "localhost";
pub const DB_PORT: u16 = 5432;
pub const DB_USER: &str = "tracker";
pub const DB_NAME: &str = "employee_tracker";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: &'static str,
    pub port: u16,
    pub user: &'static str,
    pub database: &'static str,
    pub password: String,
    /// Verbose diagnostics, enabled by the `debug` positional argument
    pub debug: bool,
}

impl Config {
    /// Load configuration from the environment. Fails fast if `DB_PASSWORD`
    /// is unset or empty.
    pub fn from_env() -> Result<Self> {
        let password = std::env::var("DB_PASSWORD")
            .map_err(|_| TrackerError::Validation("DB_PASSWORD must be set".into()))?;
        if password.is_empty() {
            return Err(TrackerError::Validation(
                "DB_PASSWORD must not be empty".into(),
            ));
        }

        let debug = std::env::args().nth(1).is_some_and(|arg| arg == "debug");

        Ok(Self {
            host: DB_HOST,
            port: DB_PORT,
            user: DB_USER,
            database: DB_NAME,
            password,
            debug,
        })
    }
}
