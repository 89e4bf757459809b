//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TETRIS_REPEAT_DELAY_MS` | 150 |
//! | `TETRIS_REPEAT_RATE_MS` | 100 |
//! | `TETRIS_ROTATE_DEBOUNCE_MS` | 150 |
//! | `TETRIS_STICK_DEADZONE` | 0.3 |
//! | `TETRIS_KEY_RELEASE_TIMEOUT_MS` | unset |
//! | `TETRIS_RECORDS_PATH` | `versus-tetris-records.json` |
//! | `TETRIS_LOG_PATH` | unset |
//! | `TETRIS_SEED` | unset |
//!
//! Unset, empty or unparsable values fall back to the default.

use std::path::PathBuf;

use crate::input::InputTiming;

pub const DEFAULT_RECORDS_PATH: &str = "versus-tetris-records.json";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub timing: InputTiming,
    pub records_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timing: InputTiming::default(),
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            log_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source (`None` = unset).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let parsed = |name: &str| value(name).and_then(|s| s.parse::<u64>().ok());

        let defaults = InputTiming::default();
        let timing = InputTiming {
            repeat_delay_ms: parsed("TETRIS_REPEAT_DELAY_MS").unwrap_or(defaults.repeat_delay_ms),
            repeat_rate_ms: parsed("TETRIS_REPEAT_RATE_MS")
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.repeat_rate_ms),
            rotate_debounce_ms: parsed("TETRIS_ROTATE_DEBOUNCE_MS")
                .unwrap_or(defaults.rotate_debounce_ms),
            stick_deadzone: value("TETRIS_STICK_DEADZONE")
                .and_then(|s| s.parse::<f32>().ok())
                .filter(|v| (0.0..1.0).contains(v))
                .unwrap_or(defaults.stick_deadzone),
            key_release_timeout_ms: parsed("TETRIS_KEY_RELEASE_TIMEOUT_MS"),
        };

        Self {
            timing,
            records_path: value("TETRIS_RECORDS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_PATH)),
            log_path: value("TETRIS_LOG_PATH").map(PathBuf::from),
            seed: parsed("TETRIS_SEED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_of(vars: &[(&str, &str)]) -> GameConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_of(&[]), GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_of(&[
            ("TETRIS_REPEAT_DELAY_MS", "200"),
            ("TETRIS_KEY_RELEASE_TIMEOUT_MS", " 120 "),
            ("TETRIS_STICK_DEADZONE", "0.5"),
            ("TETRIS_LOG_PATH", "/tmp/tetris.log"),
            ("TETRIS_SEED", "42"),
        ]);
        assert_eq!(config.timing.repeat_delay_ms, 200);
        assert_eq!(config.timing.key_release_timeout_ms, Some(120));
        assert_eq!(config.timing.stick_deadzone, 0.5);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/tetris.log")));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_of(&[
            ("TETRIS_REPEAT_RATE_MS", "0"),
            ("TETRIS_ROTATE_DEBOUNCE_MS", "soon"),
            ("TETRIS_STICK_DEADZONE", "2.0"),
            ("TETRIS_RECORDS_PATH", "   "),
        ]);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
