//! Process configuration read from the environment.
//!
//! | Variable             | Meaning                                         |
//! |----------------------|-------------------------------------------------|
//! | `BLIPKIN_LOG`        | tracing filter when `RUST_LOG` is unset          |
//! | `BLIPKIN_SIM_CONFIG` | JSON file overriding the simulation constants   |

use std::path::{Path, PathBuf};

use blipkin_domain::SimulationConfig;

const DEFAULT_LOG_FILTER: &str = "blipkin_engine=info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid simulation config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub simulation: SimulationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `.env.local` / `.env` from the repo root, then read the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log_filter = non_empty("BLIPKIN_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        let simulation = match non_empty("BLIPKIN_SIM_CONFIG") {
            Some(path) => read_simulation_config(Path::new(&path))?,
            None => SimulationConfig::default(),
        };

        Ok(Self {
            log_filter,
            simulation,
        })
    }
}

/// Parse a simulation override file. Missing fields keep their defaults.
pub fn read_simulation_config(path: &Path) -> Result<SimulationConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "blipkin_engine=info");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup(&[("BLIPKIN_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, "blipkin_engine=info");
    }

    #[test]
    fn simulation_overrides_come_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"decay": {{"hungerPerHour": 9}}, "missedYouHours": 12}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = AppConfig::from_lookup(lookup(&[
            ("BLIPKIN_LOG", "blipkin_engine=debug"),
            ("BLIPKIN_SIM_CONFIG", path.as_str()),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "blipkin_engine=debug");
        assert_eq!(config.simulation.decay.hunger_per_hour, 9);
        assert_eq!(config.simulation.decay.energy_per_hour, 3);
        assert_eq!(config.simulation.missed_you_hours, 12);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::from_lookup(lookup(&[("BLIPKIN_SIM_CONFIG", "/nonexistent/sim.json")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_simulation_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
