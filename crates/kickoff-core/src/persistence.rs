//! JSON import/export
//!
//! Match configuration is read from JSON and validated before use.
//! Presentation snapshots can be written out for debugging or for an
//! external viewer. Nothing about match history is stored.

use std::io::{Read, Write};

use kickoff_logic::config::{validate_config, ConfigError, MatchConfig};

use crate::snapshot::MatchSnapshot;

/// Parse a match configuration and reject it if validation finds problems.
///
/// Missing fields fall back to the defaults, so `{}` is a valid file.
pub fn load_config<R: Read>(reader: R) -> Result<MatchConfig, PersistenceError> {
    let config: MatchConfig = serde_json::from_reader(reader)?;
    checked(config)
}

pub fn load_config_str(json: &str) -> Result<MatchConfig, PersistenceError> {
    let config: MatchConfig = serde_json::from_str(json)?;
    checked(config)
}

fn checked(config: MatchConfig) -> Result<MatchConfig, PersistenceError> {
    let errors = validate_config(&config);
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(PersistenceError::InvalidConfig(errors))
    }
}

/// Write a snapshot as pretty-printed JSON.
pub fn write_snapshot<W: Write>(mut writer: W, snapshot: &MatchSnapshot) -> Result<(), PersistenceError> {
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_snapshot<R: Read>(reader: R) -> Result<MatchSnapshot, PersistenceError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Errors that can occur during import/export
#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidConfig(Vec<ConfigError>),
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Json(e)
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "IO error: {}", e),
            PersistenceError::Json(e) => write!(f, "JSON error: {}", e),
            PersistenceError::InvalidConfig(errors) => {
                write!(f, "invalid match config:")?;
                for e in errors {
                    write!(f, " {};", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Json(e) => Some(e),
            PersistenceError::InvalidConfig(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchEngine;
    use crate::input::{Key, KeyboardState};

    #[test]
    fn empty_object_gives_defaults() {
        let config = load_config_str("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = load_config("{\"match_duration_ms\": 30000, \"player_speed\": 3.0}".as_bytes()).unwrap();
        assert_eq!(config.match_duration_ms, 30_000);
        assert_eq!(config.player_speed, 3.0);
        assert_eq!(config.field_width, 800.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = load_config_str("{\"match_duration_ms\": 0}").unwrap_err();
        match err {
            PersistenceError::InvalidConfig(errors) => {
                assert!(errors.contains(&ConfigError::ZeroDuration));
            }
            other => panic!("expected InvalidConfig, got {other}"),
        }
    }

    #[test]
    fn malformed_json() {
        let err = load_config_str("{ not json").unwrap_err();
        assert!(matches!(err, PersistenceError::Json(_)));
    }

    #[test]
    fn snapshot_survives_export() {
        let mut engine = MatchEngine::new(MatchConfig::default(), 0);
        engine.update(&KeyboardState::new().hold(Key::D), 16);
        let snapshot = engine.snapshot(16);

        let mut buffer = Vec::new();
        write_snapshot(&mut buffer, &snapshot).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("\"remaining_secs\": 59"));

        let loaded = read_snapshot(&buffer[..]).unwrap();
        assert_eq!(loaded, snapshot);
    }
}
