//! Runtime configuration for sessions and logging.
//!
//! # Responsibility
//! - Hold the knobs the FFI layer needs when bootstrapping sessions.
//! - Resolve environment overrides with strict validation.
//!
//! # Invariants
//! - `swipe_threshold` is finite and positive.
//! - `log_level` is always one of `trace|debug|info|warn|error`.

use crate::logging::{default_log_level, normalize_level};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "PLANNER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PLANNER_LOG_DIR";
pub const ENV_SEED_WELCOME: &str = "PLANNER_SEED_WELCOME";
pub const ENV_SWIPE_THRESHOLD: &str = "PLANNER_SWIPE_THRESHOLD";

/// Horizontal drag distance, in logical pixels, that flips the month.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;

/// Session and logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub log_level: &'static str,
    /// Directory for rolling log files; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    /// Whether the notes screen starts with the welcome note.
    pub seed_welcome_note: bool,
    pub swipe_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed_welcome_note: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl PlannerConfig {
    /// Builds config from process environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds config from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = read(ENV_SEED_WELCOME) {
            config.seed_welcome_note = parse_flag(ENV_SEED_WELCOME, &flag)?;
        }
        if let Some(raw) = read(ENV_SWIPE_THRESHOLD) {
            config.swipe_threshold = parse_threshold(&raw)?;
        }
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!(
            "unsupported value `{other}` for {name}; expected true|false"
        )),
    }
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let parsed = value
        .parse::<f64>()
        .map_err(|err| format!("invalid {ENV_SWIPE_THRESHOLD} `{value}`: {err}"))?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(format!(
            "{ENV_SWIPE_THRESHOLD} must be a positive number, got `{value}`"
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::{PlannerConfig, DEFAULT_SWIPE_THRESHOLD, ENV_SEED_WELCOME, ENV_SWIPE_THRESHOLD};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
        assert!(config.seed_welcome_note);
    }

    #[test]
    fn overrides_are_normalized() {
        let config = PlannerConfig::from_lookup(lookup(&[
            ("PLANNER_LOG_LEVEL", " WARNING "),
            ("PLANNER_LOG_DIR", "/var/log/planner"),
            (ENV_SEED_WELCOME, "off"),
            (ENV_SWIPE_THRESHOLD, "60"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/planner")));
        assert!(!config.seed_welcome_note);
        assert_eq!(config.swipe_threshold, 60.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(PlannerConfig::from_lookup(lookup(&[(ENV_SWIPE_THRESHOLD, "-5")])).is_err());
        assert!(PlannerConfig::from_lookup(lookup(&[(ENV_SWIPE_THRESHOLD, "NaN")])).is_err());
        assert!(PlannerConfig::from_lookup(lookup(&[(ENV_SEED_WELCOME, "maybe")])).is_err());
        assert!(PlannerConfig::from_lookup(lookup(&[("PLANNER_LOG_LEVEL", "verbose")])).is_err());
    }
}
