use crate::constants::LOG_LEVELS;
use crate::error::{ConfigError, Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// PostgreSQL default host
fn default_db_host() -> String {
    "localhost".to_string()
}

/// PostgreSQL default port
fn default_db_port() -> u16 {
    5432
}

/// PostgreSQL default username
fn default_db_username() -> String {
    "postgres".to_string()
}

/// PostgreSQL default password
fn default_db_password() -> String {
    "postgres".to_string()
}

/// PostgreSQL default database
fn default_db_database() -> String {
    "taller4".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::Config(ConfigError::NotFound(path.to_path_buf())))?;
        Self::from_str(&content, path.to_path_buf())
    }

    /// Parse configuration from a string
    pub fn from_str(content: &str, path: PathBuf) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            Error::Config(ConfigError::ParseFailed {
                path,
                reason: e.to_string(),
            })
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

/// Database connection configuration
///
/// The defaults reproduce the connection parameters the tool has always
/// used, so running without a configuration file connects to the local
/// taller4 database.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL host
    #[serde(default = "default_db_host")]
    pub host: String,
    /// PostgreSQL port
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Username
    #[serde(default = "default_db_username")]
    pub username: String,
    /// Password
    #[serde(default = "default_db_password")]
    pub password: String,
    /// Database name
    #[serde(default = "default_db_database")]
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            username: default_db_username(),
            password: default_db_password(),
            database: default_db_database(),
        }
    }
}

impl DatabaseConfig {
    /// Build the libpq-style connection string
    pub fn connection_string(&self) -> String {
        if self.password.is_empty() {
            format!(
                "host={} port={} user={} dbname={}",
                self.host, self.port, self.username, self.database
            )
        } else {
            format!(
                "host={} port={} user={} password={} dbname={}",
                self.host, self.port, self.username, self.password, self.database
            )
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "database.host".to_string(),
                value: self.host.clone(),
                reason: "Host cannot be empty".to_string(),
            }));
        }
        if self.database.trim().is_empty() {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "database.database".to_string(),
                value: self.database.clone(),
                reason: "Database name cannot be empty".to_string(),
            }));
        }
        if self.username.trim().is_empty() {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "database.username".to_string(),
                value: self.username.clone(),
                reason: "Username cannot be empty".to_string(),
            }));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Application log output file path
    pub file: String,
    pub level: String,
}

impl LoggingConfig {
    /// Log output file path
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Log level
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Validate the log level
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS
            .iter()
            .any(|&l| l.eq_ignore_ascii_case(self.level.as_str()))
        {
            return Err(Error::Config(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
                valid_levels: LOG_LEVELS.iter().map(|s| s.to_string()).collect(),
            }));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: "logs/tiendatech.log".to_string(),
            level: "info".to_string(),
        }
    }
}

/// Calibration chart output configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    /// Rendered HTML output path
    pub file: String,
}

impl ChartConfig {
    /// Chart output file path
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            file: "export/curva_voltaje_corriente.html".to_string(),
        }
    }
}
