//! `skillsprout.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::AgeRange;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "skillsprout.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config {}: default_age {age} is not one of 3-4, 4-5, 5-6", path.display())]
    UnselectableAge { path: PathBuf, age: AgeRange },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File holding the persisted session.
    pub storage_path: PathBuf,
    /// Directory with `<category>.json` files replacing the bundled puzzles.
    pub data_dir: Option<PathBuf>,
    /// Where log output goes while the terminal UI is running.
    pub log_file: Option<PathBuf>,
    /// Age bracket preselected on the home screen.
    pub default_age: AgeRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(".skillsprout/storage.json"),
            data_dir: None,
            log_file: None,
            default_age: AgeRange::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // The home screen can only show these brackets.
        if !AgeRange::SELECTABLE.contains(&config.default_age) {
            return Err(ConfigError::UnselectableAge {
                path: path.to_path_buf(),
                age: config.default_age,
            });
        }
        Ok(config)
    }

    /// Load `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] if it
    /// exists, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skillsprout.toml");
        fs::write(
            &path,
            r#"
storage_path = "/tmp/session.json"
data_dir = "puzzles"
log_file = "skillsprout.log"
default_age = "5-6"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/session.json"));
        assert_eq!(config.data_dir, Some(PathBuf::from("puzzles")));
        assert_eq!(config.log_file, Some(PathBuf::from("skillsprout.log")));
        assert_eq!(config.default_age, AgeRange::FiveToSix);
    }

    #[test]
    fn rejects_unknown_age() {
        let err = toml::from_str::<Config>(r#"default_age = "1-2""#).unwrap_err();
        assert!(err.to_string().contains("1-2"));
    }

    #[test]
    fn rejects_age_the_home_screen_cannot_offer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skillsprout.toml");
        fs::write(&path, r#"default_age = "3-5""#).unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnselectableAge { age: AgeRange::ThreeToFive, .. }));
        assert!(err.to_string().contains("3-5"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("no/such/skillsprout.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
