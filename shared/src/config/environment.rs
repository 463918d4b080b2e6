//! Deployment environment and logging presets

use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};

use super::{env_or, ConfigError};

/// Deployment environment, selected by `ENVIRONMENT` (or `APP_ENV`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Reads the environment, defaulting to development when unset or unknown
    pub fn from_env() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Reads the environment, defaulting to development only when unset
    pub fn try_from_env() -> Result<Self, ConfigError> {
        match env::var("ENVIRONMENT") {
            Ok(_) => env_or("ENVIRONMENT", Self::default()),
            Err(_) => env_or("APP_ENV", Self::default()),
        }
    }

    /// Dotenv file loaded at startup for this environment
    pub fn env_file(&self) -> &'static str {
        match self {
            Environment::Development => ".env",
            Environment::Staging => ".env.staging",
            Environment::Production => ".env.production",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Subscriber output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Logging configuration
///
/// `RUST_LOG`, when set, overrides `level` at subscriber setup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `taskhub_core=debug,info`
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Preset for an environment: verbose and pretty in development, terse
    /// elsewhere
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: String::from("debug"),
                format: LogFormat::Pretty,
            },
            Environment::Staging => Self {
                level: String::from("info"),
                format: LogFormat::Compact,
            },
            Environment::Production => Self {
                level: String::from("warn"),
                format: LogFormat::Compact,
            },
        }
    }

    /// Environment preset with `LOG_LEVEL` and `LOG_FORMAT` overrides
    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let preset = Self::for_environment(env);
        Ok(Self {
            level: env::var("LOG_LEVEL").unwrap_or(preset.level),
            format: env_or("LOG_FORMAT", preset.format)?,
        })
    }
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}
