use log::{debug, error, info, warn};

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Default configuration file contents written by `init`
const DEFAULT_CONFIG: &str = r#"# TiendaTech reporting tool configuration

[database]
# PostgreSQL connection parameters
host = "localhost"
port = 5432
username = "postgres"
password = "postgres"
database = "taller4"

[logging]
# Application log output path
file = "logs/tiendatech.log"
# Log level: trace, debug, info, warn, error
level = "info"

[chart]
# Calibration chart HTML output path
file = "export/curva_voltaje_corriente.html"
"#;

/// Generate a default configuration file
pub fn handle_init(output_path: &str, force: bool) -> Result<()> {
    let path = Path::new(output_path);

    info!("Generating configuration file: {output_path}");

    if path.exists() && !force {
        error!("Configuration file already exists: {output_path}");
        info!("Hint: use --force to overwrite");
        return Err(crate::error::Error::File(
            crate::error::FileError::AlreadyExists {
                path: path.to_path_buf(),
            },
        ));
    }

    if path.exists() && force {
        warn!("Overwriting existing configuration file");
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                crate::error::Error::File(crate::error::FileError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })
            })?;
        }
    }

    debug!("Writing configuration file...");
    fs::write(path, DEFAULT_CONFIG).map_err(|e| {
        crate::error::Error::File(crate::error::FileError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    info!("Configuration file written: {output_path}");
    info!("Next steps:");
    info!("  1. Edit the configuration: {output_path}");
    info!("  2. Validate it: tiendatech validate -c {output_path}");
    info!("  3. Start the menu: tiendatech run -c {output_path}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let result = handle_init(path_str, false);
        assert!(result.is_ok());
        assert!(path.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[database]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("[chart]"));
        assert!(content.contains("database = \"taller4\""));
    }

    #[test]
    fn test_init_fails_if_exists_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "existing content").unwrap();

        let result = handle_init(path.to_str().unwrap(), false);
        assert!(result.is_err());

        // the original content is untouched
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "old content").unwrap();

        let result = handle_init(path.to_str().unwrap(), true);
        assert!(result.is_ok());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[database]"));
        assert!(!content.contains("old content"));
    }

    #[test]
    fn test_init_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/config.toml");

        let result = handle_init(path.to_str().unwrap(), false);
        assert!(result.is_ok());
        assert!(path.exists());
    }
}
