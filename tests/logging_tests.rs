/// Logging initialization tests
///
/// The log facade allows a single global logger per process, so exactly one
/// test here performs a successful initialization.
use tiendatech::config::LoggingConfig;
use tiendatech::logging::init_logging;

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        file: "logs/never-created.log".to_string(),
        level: "shout".to_string(),
    };
    // level parsing fails before any logger is installed
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs/tiendatech.log");
    let config = LoggingConfig {
        file: path.to_str().unwrap().to_string(),
        level: "info".to_string(),
    };

    init_logging(&config).unwrap();
    log::info!("logging smoke test");

    assert!(path.exists());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Logging initialized"));
}
