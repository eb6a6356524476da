// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::models::CharClass;

// Configuration for the strength checker and generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_classes: Vec<CharClass>,
    pub default_batch_count: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_classes: CharClass::ALL.to_vec(),
            default_batch_count: 5,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_CLASSES") {
            let mut classes = Vec::new();
            for token in val.split(',').filter(|s| !s.trim().is_empty()) {
                match token.parse::<CharClass>() {
                    Ok(class) => {
                        if !classes.contains(&class) {
                            classes.push(class);
                        }
                    }
                    Err(e) => log::warn!("Ignoring DEFAULT_PASSWORD_CLASSES entry: {}", e),
                }
            }
            if !classes.is_empty() {
                config.default_classes = classes;
            }
        }

        if let Ok(val) = env::var("DEFAULT_BATCH_COUNT") {
            if let Ok(count) = val.parse() {
                config.default_batch_count = count;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_generator_defaults() {
        let config = Config::default();
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.default_classes, CharClass::ALL.to_vec());
        assert_eq!(config.default_batch_count, 5);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
