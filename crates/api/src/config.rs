//! Runtime configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BIND_ADDR` | `0.0.0.0:8080` | Listen address |
//! | `USE_PERSISTENT_STORES` | `false` | `true` selects Postgres |
//! | `DATABASE_URL` | none | Required when persistent |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | Pool size |
//! | `SEED_ON_START` | `true` in-memory, `false` Postgres | Load the fixture at startup |

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be set when USE_PERSISTENT_STORES=true")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Which catalog backend to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory,
    Postgres {
        database_url: String,
        max_connections: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub seed_on_start: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let use_persistent = parse_bool(&lookup, "USE_PERSISTENT_STORES")?.unwrap_or(false);

        let store = if use_persistent {
            let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing { var: "DATABASE_URL" })?;
            let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "DATABASE_MAX_CONNECTIONS",
                    value: raw,
                })?,
                None => DEFAULT_MAX_CONNECTIONS,
            };
            StoreBackend::Postgres {
                database_url,
                max_connections,
            }
        } else {
            StoreBackend::InMemory
        };

        // An empty in-memory catalog is rarely useful, so it is seeded unless told otherwise.
        let seed_on_start = parse_bool(&lookup, "SEED_ON_START")?.unwrap_or(!use_persistent);

        Ok(Self {
            bind_addr,
            store,
            seed_on_start,
        })
    }

    /// Seeded in-memory config (tests/dev).
    pub fn in_memory() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            store: StoreBackend::InMemory,
            seed_on_start: true,
        }
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<bool>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .to_lowercase()
            .parse::<bool>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
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
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_to_seeded_in_memory() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.store, StoreBackend::InMemory);
        assert!(cfg.seed_on_start);
    }

    #[test]
    fn persistent_requires_database_url() {
        let err = AppConfig::from_lookup(lookup_from(&[("USE_PERSISTENT_STORES", "true")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
    }

    #[test]
    fn persistent_store_is_not_seeded_by_default() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("USE_PERSISTENT_STORES", "TRUE"),
            ("DATABASE_URL", "postgres://localhost/cerebral_beers"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/cerebral_beers".to_string(),
                max_connections: 12,
            }
        );
        assert!(!cfg.seed_on_start);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("SEED_ON_START", "sometimes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "SEED_ON_START",
                value: "sometimes".to_string()
            }
        );
        assert!(AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "nope")])).is_err());
    }
}
