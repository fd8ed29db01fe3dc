//! Storage layer
//!
//! Owns the on-disk SQLite file and connection lifecycle. The schema
//! (two tables, one foreign-key relationship) is ensured idempotently on
//! every open; the auth and bookmark modules borrow the connection per
//! operation and never hold state of their own.
//!
//! There is no connection pooling and no migration system. Write safety
//! relies entirely on SQLite's own file locking.

pub mod error;
pub mod schema;

pub use error::{StorageError, StorageResult};

use std::path::Path;

use rusqlite::{Connection, Transaction};
use tracing::debug;

use crate::config::Config;

/// Handle to the bookmark database
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database, creating the file and schema if absent
    ///
    /// Safe to call on every startup: schema creation is additive and
    /// idempotent. Fails with [`StorageError::Unavailable`] when the file
    /// cannot be opened or created.
    pub fn open(config: &Config) -> StorageResult<Self> {
        let db = Self::open_file(&config.database_path())?;
        schema::init_schema(db.connection())?;
        Ok(db)
    }

    /// Connect to the database without schema side effects
    ///
    /// Assumes [`Database::open`] has run at least once; a missing schema
    /// is not an error here.
    pub fn connect(config: &Config) -> StorageResult<Self> {
        Self::open_file(&config.database_path())
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Liveness probe: healthy iff the file opens and the schema ensures
    ///
    /// The sole health signal exposed upward; a failure is reported, not
    /// retried.
    pub fn probe(config: &Config) -> StorageResult<()> {
        Self::open(config).map(|_| ())
    }

    /// Borrow the underlying connection for an ad-hoc query
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Begin a transaction spanning one logical operation
    pub(crate) fn transaction(&mut self) -> rusqlite::Result<Transaction<'_>> {
        self.conn.transaction()
    }

    fn open_file(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StorageError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        debug!("opened database at {:?}", path);
        Ok(Self { conn })
    }
}
