//! Environment-driven server configuration.

use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`BIND_ADDR`).
    pub bind_addr: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self { bind_addr }
    }
}
