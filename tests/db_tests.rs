/// Session connection behavior against an unreachable server
use tiendatech::config::{Config, DatabaseConfig};
use tiendatech::db::Session;
use tiendatech::error::{DatabaseError, Error};

fn unreachable_config() -> DatabaseConfig {
    // nothing listens on port 1
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..DatabaseConfig::default()
    }
}

#[test]
fn test_connect_failure_returns_structured_error() {
    let result = Session::connect(&unreachable_config());
    match result {
        Err(Error::Database(DatabaseError::ConnectFailed {
            host,
            port,
            database,
            ..
        })) => {
            assert_eq!(host, "127.0.0.1");
            assert_eq!(port, 1);
            assert_eq!(database, "taller4");
        }
        other => panic!("expected ConnectFailed, got {other:?}"),
    }
}

#[test]
fn test_run_aborts_before_menu_on_connect_failure() {
    // with an unreachable database the run handler must fail before the
    // menu loop ever reads stdin
    let cfg = Config {
        database: unreachable_config(),
        ..Config::default()
    };
    let result = tiendatech::cli::run::handle_run(&cfg);
    assert!(result.is_err());
}
