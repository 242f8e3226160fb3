//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `SURFSUP_DATABASE` | `Resources/hawaii.sqlite` |
//! | `SURFSUP_HOST` | `127.0.0.1` |
//! | `SURFSUP_PORT` | `3000` |
//! | `SURFSUP_MAX_CONNECTIONS` | `5` |
//! | `SURFSUP_ACQUIRE_TIMEOUT_SECS` | `30` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::store::{DEFAULT_DATABASE_PATH, StoreConfig};

/// Default bind host.
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Default bind port.
const DEFAULT_PORT: u16 = 3000;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Observation store settings
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// Unset variables fall back to defaults; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let database = get("SURFSUP_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        let host: IpAddr = parse_var(&get, "SURFSUP_HOST")?.unwrap_or(DEFAULT_HOST);
        let port: u16 = parse_var(&get, "SURFSUP_PORT")?.unwrap_or(DEFAULT_PORT);

        let mut store = StoreConfig::new(database);
        if let Some(n) = parse_var::<u32, _>(&get, "SURFSUP_MAX_CONNECTIONS")? {
            if n == 0 {
                return Err(ConfigError::Invalid {
                    var: "SURFSUP_MAX_CONNECTIONS",
                    value: n.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            store = store.with_max_connections(n);
        }
        if let Some(secs) = parse_var::<u64, _>(&get, "SURFSUP_ACQUIRE_TIMEOUT_SECS")? {
            store = store.with_acquire_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            store,
        })
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
            store: StoreConfig::default(),
        }
    }
}

fn parse_var<T, G>(get: &G, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(var)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}
