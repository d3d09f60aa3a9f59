use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration related error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File operation error
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Database operation error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Chart rendering error
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Configuration file parse failed
    #[error("Failed to parse configuration file {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// Invalid log level
    #[error("Invalid log level '{level}', valid values: {}", valid_levels.join(", "))]
    InvalidLogLevel {
        level: String,
        valid_levels: Vec<String>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value {field} = '{value}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// File operation errors
#[derive(Debug, Error)]
pub enum FileError {
    /// File already exists
    #[error("File already exists: {path} (use --force to replace)")]
    AlreadyExists { path: PathBuf },

    /// File write failed
    #[error("Failed to write file {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Create directory failed
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirectoryFailed { path: PathBuf, reason: String },
}

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connecting to the server failed
    #[error("Failed to connect to PostgreSQL at {host}:{port}/{database}: {reason}")]
    ConnectFailed {
        host: String,
        port: u16,
        database: String,
        reason: String,
    },

    /// A report query failed
    #[error("Report query '{report}' failed: {reason}")]
    QueryFailed { report: &'static str, reason: String },
}

/// Chart errors
#[derive(Debug, Error)]
pub enum ChartError {
    /// Writing the rendered chart failed
    #[error("Failed to write chart {path}: {reason}")]
    RenderFailed { path: PathBuf, reason: String },
}

/// Crate-wide Result alias
pub type Result<T> = std::result::Result<T, Error>;
