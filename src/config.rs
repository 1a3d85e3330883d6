use std::time::Duration;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const USAGE: &str = "Usage: bank-console [--log-level <level>] [--pause-ms <millis>]\n\
Available log levels: error, warn, info, debug, trace (default: error)\n\
Pause after each menu action defaults to 1000 ms";

const DEFAULT_PAUSE: Duration = Duration::from_millis(1000);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),
    #[error("Missing value for '{0}'")]
    MissingValue(String),
    #[error("Invalid pause '{0}', expected a whole number of milliseconds")]
    InvalidPause(String)
}

/// Command-line settings for a console session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub menu_pause: Duration
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::ERROR,
            menu_pause: DEFAULT_PAUSE
        }
    }
}

impl Config {
    //NOTE: Two flags do not justify pulling in clap; revisit if the surface grows.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-level" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.log_level = parse_log_level(&value);
                }
                "--pause-ms" => {
                    let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    let millis: u64 = value.parse().map_err(|_| ConfigError::InvalidPause(value.clone()))?;
                    config.menu_pause = Duration::from_millis(millis);
                }
                _ => return Err(ConfigError::UnknownArgument(arg))
            }
        }

        Ok(config)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_log_level, Config, ConfigError};
    use anyhow::Result;
    use std::time::Duration;
    use tracing::level_filters::LevelFilter;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_arguments() -> Result<()> {
        let config = Config::from_args(args(&[]))?;

        assert_eq!(config.log_level, LevelFilter::ERROR);
        assert_eq!(config.menu_pause, Duration::from_secs(1));

        Ok(())
    }

    #[test]
    fn test_flags_override_defaults() -> Result<()> {
        let config = Config::from_args(args(&["--pause-ms", "0", "--log-level", "DEBUG"]))?;

        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.menu_pause, Duration::ZERO);

        Ok(())
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_error() {
        assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
        assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    }

    #[test]
    fn test_malformed_arguments_are_rejected() {
        assert_eq!(Config::from_args(args(&["input.csv"])), Err(ConfigError::UnknownArgument("input.csv".to_string())));
        assert_eq!(Config::from_args(args(&["--pause-ms"])), Err(ConfigError::MissingValue("--pause-ms".to_string())));
        assert_eq!(Config::from_args(args(&["--pause-ms", "soon"])), Err(ConfigError::InvalidPause("soon".to_string())));
    }
}
