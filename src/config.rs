//! Runtime settings read from the environment (and `.env` via dotenv).

use crate::output::OutputFormat;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_COLOR: &str = "SUBNET_CALC_COLOR";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs yaml file, console fallback when it does not exist.
    pub log_config: String,
    /// Used when no `--format` is given on the command line.
    pub default_format: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            default_format: OutputFormat::Table,
            color: true,
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    ///
    /// Call `dotenv::dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = path.trim().to_string();
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.default_format = format
                .parse()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(color) = lookup(ENV_COLOR) {
            config.color = !matches!(color.trim().to_lowercase().as_str(), "0" | "false" | "no");
        }
        Ok(config)
    }
}

/// Initialize log4rs from `path`, or a warn level stderr logger when the
/// file does not exist. stdout is left to the rendered output.
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, "log4rs.yml");
        assert!(config.color);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_LOG_CONFIG, "/etc/subnet/log.yml"),
            (ENV_FORMAT, "json"),
            (ENV_COLOR, "false"),
        ]))
        .unwrap();
        assert_eq!(config.log_config, "/etc/subnet/log.yml");
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_bad_format() {
        let err = Config::from_lookup(lookup(&[(ENV_FORMAT, "xml")])).unwrap_err();
        assert!(err.to_string().starts_with("SUBNET_CALC_FORMAT:"));
    }
}
