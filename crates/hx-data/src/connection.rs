//! Lazily opened, explicitly closed handle to the heritage store

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use tracing::{error, info};

use crate::{DataError, Result};

/// Owns the single read-only connection used by every query
pub struct ConnectionProvider {
    path: PathBuf,
    /// Extra database attached under a schema name on open
    attachment: Option<(String, PathBuf)>,
    conn: Mutex<Option<Connection>>,
}

impl ConnectionProvider {
    /// Create a provider; nothing is opened until the first query
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            attachment: None,
            conn: Mutex::new(None),
        }
    }

    /// Attach `database` as `schema` every time the store is opened
    pub fn with_attachment(mut self, schema: impl Into<String>, database: impl AsRef<Path>) -> Self {
        self.attachment = Some((schema.into(), database.as_ref().to_path_buf()));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.lock().is_some()
    }

    /// Run `f` against the connection, opening it on first use
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut guard = self.conn.lock();
        let conn = match guard.take() {
            Some(conn) => conn,
            None => self.open()?,
        };
        let result = f(&conn);
        *guard = Some(conn);
        result
    }

    fn open(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&self.path, flags).map_err(|source| {
            DataError::Connection {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        info!("Opened heritage store {:?}", self.path);

        if let Some((schema, database)) = &self.attachment {
            // Attached files inherit the read-only open flags
            let sql = format!("ATTACH DATABASE ?1 AS \"{}\"", schema.replace('"', "\"\""));
            conn.execute(&sql, [database.to_string_lossy().into_owned()])
                .map_err(|source| DataError::Connection {
                    path: database.display().to_string(),
                    source,
                })?;
            info!("Attached {:?} as {}", database, schema);
        }
        Ok(conn)
    }

    /// Close the connection if it is open. A later query reopens it.
    pub fn close(&self) -> Result<()> {
        let Some(conn) = self.conn.lock().take() else {
            return Ok(());
        };
        conn.close().map_err(|(_, e)| {
            error!("Failed to close heritage store {:?}: {}", self.path, e);
            DataError::Sqlite(e)
        })?;
        info!("Closed heritage store {:?}", self.path);
        Ok(())
    }
}

impl Drop for ConnectionProvider {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
