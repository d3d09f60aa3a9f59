//! Database session handling
//!
//! One synchronous connection per program run, owned by [`Session`] and
//! passed explicitly to the report functions. No pooling, no retry.

use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Error, Result};
use log::{debug, info, warn};
use postgres::{Client, NoTls};

/// An open connection to the TiendaTech database.
pub struct Session {
    client: Client,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Open a connection with the configured parameters and log the server
    /// version. A failure here aborts startup; there is no retry.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        debug!(
            "Connecting to PostgreSQL {}:{}/{}",
            config.host, config.port, config.database
        );

        let client = Client::connect(&config.connection_string(), NoTls).map_err(|e| {
            Error::Database(DatabaseError::ConnectFailed {
                host: config.host.clone(),
                port: config.port,
                database: config.database.clone(),
                reason: e.to_string(),
            })
        })?;

        let mut session = Self { client };

        let version = session.server_version()?;
        info!("Connected to PostgreSQL: {version}");

        Ok(session)
    }

    /// `SELECT version()` on the open connection.
    pub fn server_version(&mut self) -> Result<String> {
        let row = self
            .client
            .query_one("SELECT version();", &[])
            .map_err(|e| {
                Error::Database(DatabaseError::QueryFailed {
                    report: "server_version",
                    reason: e.to_string(),
                })
            })?;
        Ok(row.get(0))
    }

    /// Run one fixed report statement and return every row.
    pub(crate) fn run_report(
        &mut self,
        report: &'static str,
        sql: &str,
    ) -> Result<Vec<postgres::Row>> {
        debug!("Running report query: {report}");
        self.client.query(sql, &[]).map_err(|e| {
            Error::Database(DatabaseError::QueryFailed {
                report,
                reason: e.to_string(),
            })
        })
    }

    /// Close the connection. Best-effort: a failure is logged, never
    /// propagated.
    pub fn close(self) {
        if let Err(e) = self.client.close() {
            warn!("Error while closing database connection: {e}");
        } else {
            info!("Database connection closed");
        }
    }
}
