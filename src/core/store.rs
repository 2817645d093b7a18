//! SQLite-backed store for leads, clients and uploaded assets.
//!
//! There is no process-wide connection: callers open a [`Store`] once and pass
//! it to every lead/client operation. Creating the schema is an explicit step
//! ([`Store::initialize`]), run by `leadctl init`; opening a database that was
//! never initialized is an error rather than an implicit setup.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{Error, Result};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS leads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    current_website TEXT,
    source TEXT DEFAULT 'landing_page',
    status TEXT DEFAULT 'new',
    notes TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    lead_id INTEGER,
    slug TEXT UNIQUE NOT NULL,
    business_name TEXT NOT NULL,
    business_type TEXT,
    phone TEXT,
    email TEXT,
    address TEXT,
    services TEXT,
    status TEXT DEFAULT 'intake',
    tier TEXT DEFAULT 'website_only',
    notes TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (lead_id) REFERENCES leads (id)
);

CREATE TABLE IF NOT EXISTS assets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL,
    asset_type TEXT NOT NULL,
    filename TEXT NOT NULL,
    filepath TEXT NOT NULL,
    uploaded_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (client_id) REFERENCES clients (id)
);
";

pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open an existing database. Fails with `store.not_initialized` when the
    /// file is missing.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::store_not_initialized(path.display().to_string()));
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::store_query(e, Some(format!("open {}", path.display()))))?;
        Self::configure(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Create (or upgrade in place) the database at `path`. Safe to re-run.
    pub fn initialize(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
                })?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::store_query(e, Some(format!("open {}", path.display()))))?;
        Self::configure(&conn)?;
        Self::apply_schema(&conn)?;

        log_status!("store", "Initialized database at {}", path.display());

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Fresh in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::store_query(e, Some("open in-memory database".to_string())))?;
        Self::configure(&conn)?;
        Self::apply_schema(&conn)?;

        Ok(Self { conn, path: None })
    }

    /// Borrow the underlying connection for queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Database file location, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn configure(conn: &Connection) -> Result<()> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| Error::store_query(e, Some("enable foreign keys".to_string())))
    }

    fn apply_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| Error::store_query(e, Some("create schema".to_string())))
    }
}

/// True when a rusqlite error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
