//! Service settings, read from the environment (a `.env` file is honoured):
//! - `TASK_LIFECYCLE_HOST` - bind address. Defaults to `127.0.0.1`.
//! - `TASK_LIFECYCLE_PORT` - bind port. Defaults to `8902`.
//! - `TASK_LIFECYCLE_TABLE` - transition table, `console` or `backend`.
//!   Defaults to `console`.

use crate::error::{ConfigError, RegistryError};
use crate::registry::{StatusRegistry, TransitionTable};

fn table_error(e: RegistryError) -> ConfigError {
    ConfigError::InvalidValue("TASK_LIFECYCLE_TABLE".to_string(), e.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub table: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8902,
            table: "console".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("TASK_LIFECYCLE_HOST").unwrap_or(defaults.host);

        let port = match lookup("TASK_LIFECYCLE_PORT") {
            Some(v) => v.parse().map_err(|e| {
                ConfigError::InvalidValue("TASK_LIFECYCLE_PORT".to_string(), format!("{}", e))
            })?,
            None => defaults.port,
        };

        let table = lookup("TASK_LIFECYCLE_TABLE").unwrap_or(defaults.table);
        // fail here rather than at registry construction
        TransitionTable::by_name(&table).map_err(table_error)?;

        Ok(Self { host, port, table })
    }

    pub fn build_registry(&self) -> Result<StatusRegistry, ConfigError> {
        let table = TransitionTable::by_name(&self.table).map_err(table_error)?;
        StatusRegistry::with_table(table).map_err(table_error)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup_in(&[
            ("TASK_LIFECYCLE_HOST", "0.0.0.0"),
            ("TASK_LIFECYCLE_PORT", "9000"),
            ("TASK_LIFECYCLE_TABLE", "backend"),
        ]))
        .unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9000);
        let registry = settings.build_registry().unwrap();
        assert!(registry.can_transition("approved", "cancelled"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Settings::from_lookup(lookup_in(&[("TASK_LIFECYCLE_PORT", "http")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for TASK_LIFECYCLE_PORT"));
    }

    #[test]
    fn rejects_unknown_table() {
        let err =
            Settings::from_lookup(lookup_in(&[("TASK_LIFECYCLE_TABLE", "strict")])).unwrap_err();
        assert!(err.to_string().contains("strict"));
    }
}
