/// Error type tests
use std::path::PathBuf;
use tiendatech::error::*;

// ==================== ConfigError Tests ====================

#[test]
fn test_config_error_not_found() {
    let path = PathBuf::from("/nonexistent/config.toml");
    let error = ConfigError::NotFound(path);
    let error_msg = format!("{error}");
    assert!(error_msg.contains("not found"));
}

#[test]
fn test_config_error_parse_failed() {
    let error = ConfigError::ParseFailed {
        path: PathBuf::from("config.toml"),
        reason: "invalid syntax".to_string(),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("parse"));
    assert!(error_msg.contains("invalid syntax"));
}

#[test]
fn test_config_error_invalid_log_level() {
    let error = ConfigError::InvalidLogLevel {
        level: "loud".to_string(),
        valid_levels: vec!["info".to_string(), "debug".to_string()],
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("loud"));
    assert!(error_msg.contains("info"));
    assert!(error_msg.contains("debug"));
}

#[test]
fn test_config_error_invalid_value() {
    let error = ConfigError::InvalidValue {
        field: "database.host".to_string(),
        value: String::new(),
        reason: "Host cannot be empty".to_string(),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("database.host"));
    assert!(error_msg.contains("Host cannot be empty"));
}

// ==================== FileError Tests ====================

#[test]
fn test_file_error_already_exists() {
    let error = FileError::AlreadyExists {
        path: PathBuf::from("config.toml"),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("already exists"));
    assert!(error_msg.contains("--force"));
}

#[test]
fn test_file_error_write_failed() {
    let error = FileError::WriteFailed {
        path: PathBuf::from("logs/app.log"),
        reason: "permission denied".to_string(),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("app.log"));
    assert!(error_msg.contains("permission denied"));
}

// ==================== DatabaseError Tests ====================

#[test]
fn test_database_error_connect_failed() {
    let error = DatabaseError::ConnectFailed {
        host: "localhost".to_string(),
        port: 5432,
        database: "taller4".to_string(),
        reason: "connection refused".to_string(),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("localhost:5432/taller4"));
    assert!(error_msg.contains("connection refused"));
}

#[test]
fn test_database_error_query_failed() {
    let error = DatabaseError::QueryFailed {
        report: "top_spenders",
        reason: "relation does not exist".to_string(),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("top_spenders"));
    assert!(error_msg.contains("relation does not exist"));
}

// ==================== Top-level Error Tests ====================

#[test]
fn test_error_from_config_error() {
    let error: Error = ConfigError::NotFound(PathBuf::from("x.toml")).into();
    let error_msg = format!("{error}");
    assert!(error_msg.starts_with("Configuration error:"));
}

#[test]
fn test_error_from_database_error() {
    let error: Error = DatabaseError::QueryFailed {
        report: "stock_report",
        reason: "timeout".to_string(),
    }
    .into();
    let error_msg = format!("{error}");
    assert!(error_msg.starts_with("Database error:"));
}

#[test]
fn test_error_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: Error = io.into();
    let error_msg = format!("{error}");
    assert!(error_msg.starts_with("IO error:"));
}

#[test]
fn test_chart_error_render_failed() {
    let error = ChartError::RenderFailed {
        path: PathBuf::from("export/chart.html"),
        reason: "disk full".to_string(),
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("chart.html"));
    assert!(error_msg.contains("disk full"));
}
