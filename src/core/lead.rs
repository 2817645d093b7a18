use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::Store;
use crate::time;

pub const DEFAULT_SOURCE: &str = "landing_page";
pub const STATUS_CONVERTED: &str = "converted";

const LEAD_COLUMNS: &str = "id, first_name, last_name, email, phone, current_website, source, \
                            status, notes, created_at, updated_at";

/// A prospect who submitted contact details but is not yet a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_website: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            current_website: row.get("current_website")?,
            source: row.get("source")?,
            status: row.get("status")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Fields accepted when recording a new lead.
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub current_website: Option<String>,
    pub source: Option<String>,
}

pub fn add(store: &Store, lead: &NewLead) -> Result<i64> {
    let source = lead.source.as_deref().unwrap_or(DEFAULT_SOURCE);

    store
        .conn()
        .execute(
            "INSERT INTO leads (first_name, last_name, email, phone, current_website, source)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                lead.first_name,
                lead.last_name,
                lead.email,
                lead.phone,
                lead.current_website,
                source,
            ],
        )
        .map_err(|e| Error::store_query(e, Some("insert lead".to_string())))?;

    Ok(store.conn().last_insert_rowid())
}

/// Look up a lead, returning `None` when the id is unknown.
pub fn find(store: &Store, id: i64) -> Result<Option<Lead>> {
    store
        .conn()
        .query_row(
            &format!("SELECT {} FROM leads WHERE id = ?1", LEAD_COLUMNS),
            [id],
            Lead::from_row,
        )
        .optional()
        .map_err(|e| Error::store_query(e, Some(format!("load lead {}", id))))
}

pub fn load(store: &Store, id: i64) -> Result<Lead> {
    find(store, id)?.ok_or_else(|| Error::lead_not_found(id))
}

/// All leads, newest first, optionally restricted to one status.
pub fn list(store: &Store, status: Option<&str>) -> Result<Vec<Lead>> {
    let sql = match status {
        Some(_) => format!(
            "SELECT {} FROM leads WHERE status = ?1 ORDER BY created_at DESC, id DESC",
            LEAD_COLUMNS
        ),
        None => format!(
            "SELECT {} FROM leads ORDER BY created_at DESC, id DESC",
            LEAD_COLUMNS
        ),
    };

    let mut stmt = store
        .conn()
        .prepare(&sql)
        .map_err(|e| Error::store_query(e, Some("list leads".to_string())))?;

    let rows = match status {
        Some(status) => stmt.query_map([status], Lead::from_row),
        None => stmt.query_map([], Lead::from_row),
    }
    .map_err(|e| Error::store_query(e, Some("list leads".to_string())))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::store_query(e, Some("read lead row".to_string())))
}

/// Set a lead's status. Notes are only overwritten when non-empty notes are given.
pub fn update_status(store: &Store, id: i64, status: &str, notes: Option<&str>) -> Result<()> {
    let updated_at = time::iso(&time::now());
    let notes = notes.filter(|n| !n.is_empty());

    let changed = match notes {
        Some(notes) => store.conn().execute(
            "UPDATE leads SET status = ?1, notes = ?2, updated_at = ?3 WHERE id = ?4",
            params![status, notes, updated_at, id],
        ),
        None => store.conn().execute(
            "UPDATE leads SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status, updated_at, id],
        ),
    }
    .map_err(|e| Error::store_query(e, Some(format!("update lead {}", id))))?;

    if changed == 0 {
        return Err(Error::lead_not_found(id));
    }

    Ok(())
}

/// Mark a lead as converted into the given client.
pub fn mark_converted(store: &Store, id: i64, client_id: i64) -> Result<()> {
    update_status(
        store,
        id,
        STATUS_CONVERTED,
        Some(&format!("Converted to client #{}", client_id)),
    )
}
