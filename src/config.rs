use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::error::StudentError;

/// Prefix for environment overrides, e.g. `STUDENTS_DATABASE_URL`.
pub const ENV_PREFIX: &str = "STUDENTS_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://students.db".to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `STUDENTS_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, StudentError> {
        Ok(Self::figment().extract()?)
    }
}
