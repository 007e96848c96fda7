//! Configuration for the broker TCP server.
//!
//! For now this is intentionally simple: you can either use defaults
//! or override via a few environment variables:
//!
//! - `BROKER_BIND_ADDR`        (default: "0.0.0.0")
//! - `BROKER_PORT`             (default: "8080")
//! - `BROKER_MAX_CLIENTS`      (default: "1024")
//! - `BROKER_CONNECTIONS_SECS` (default: "2")

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Maximum number of simultaneously connected clients.
    pub max_clients: usize,

    /// How often the periodic driver pushes a connections listing.
    pub connections_interval: Duration,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to reasonable defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BROKER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = read_env_or_default("BROKER_PORT", 8080u16)?;
        let max_clients = read_env_or_default("BROKER_MAX_CLIENTS", 1024usize)?;
        let connections_secs = read_env_or_default("BROKER_CONNECTIONS_SECS", 2u64)?;

        Ok(Config {
            bind_addr,
            port,
            max_clients,
            connections_interval: Duration::from_secs(connections_secs),
        })
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {val}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // Uses a key that is never set in the test environment.
        let port: u16 = read_env_or_default("BROKER_TEST_UNSET_PORT", 9999).unwrap();
        assert_eq!(port, 9999);
    }
}
