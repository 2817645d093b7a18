use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lead;
use crate::store::{self, Store};
use crate::time;

const CLIENT_COLUMNS: &str = "id, lead_id, slug, business_name, business_type, phone, email, \
                              address, services, status, tier, notes, created_at, updated_at";

/// A converted lead with a site being built. Only `slug` and `business_name`
/// are guaranteed; everything else may be absent in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub lead_id: Option<i64>,
    pub slug: String,
    pub business_name: String,
    pub business_type: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Free-text, comma-separated service names.
    pub services: Option<String>,
    pub status: Option<String>,
    pub tier: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Client {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            lead_id: row.get("lead_id")?,
            slug: row.get("slug")?,
            business_name: row.get("business_name")?,
            business_type: row.get("business_type")?,
            phone: row.get("phone")?,
            email: row.get("email")?,
            address: row.get("address")?,
            services: row.get("services")?,
            status: row.get("status")?,
            tier: row.get("tier")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// Fields accepted when registering a client.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub slug: String,
    pub business_name: String,
    pub business_type: Option<String>,
    pub lead_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub services: Option<String>,
}

/// Partial update: only fields set to `Some` are written.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub lead_id: Option<i64>,
    pub slug: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub services: Option<String>,
    pub status: Option<String>,
    pub tier: Option<String>,
    pub notes: Option<String>,
}

impl ClientUpdate {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }

    /// Column/value pairs for every present field, in schema order.
    fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        let text = |column: &'static str, value: &Option<String>| {
            value
                .as_ref()
                .map(|v| (column, SqlValue::Text(v.clone())))
        };

        [
            self.lead_id.map(|id| ("lead_id", SqlValue::Integer(id))),
            text("slug", &self.slug),
            text("business_name", &self.business_name),
            text("business_type", &self.business_type),
            text("phone", &self.phone),
            text("email", &self.email),
            text("address", &self.address),
            text("services", &self.services),
            text("status", &self.status),
            text("tier", &self.tier),
            text("notes", &self.notes),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn slug_taken(slug: &str) -> Error {
    Error::validation_invalid_argument(
        "slug",
        format!("Slug '{}' is already used by another client", slug),
        Some(slug.to_string()),
        None,
    )
}

pub fn add(store: &Store, client: &NewClient) -> Result<i64> {
    store
        .conn()
        .execute(
            "INSERT INTO clients (slug, business_name, business_type, lead_id, phone, email, address, services)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                client.slug,
                client.business_name,
                client.business_type,
                client.lead_id,
                client.phone,
                client.email,
                client.address,
                client.services,
            ],
        )
        .map_err(|e| {
            if store::is_unique_violation(&e) {
                slug_taken(&client.slug)
            } else {
                Error::store_query(e, Some("insert client".to_string()))
            }
        })?;

    Ok(store.conn().last_insert_rowid())
}

/// Add a client and, when it names a lead, mark that lead converted. Both
/// writes commit together or not at all.
pub fn register(store: &Store, client: &NewClient) -> Result<i64> {
    let tx = store
        .conn()
        .unchecked_transaction()
        .map_err(|e| Error::store_query(e, Some("begin client registration".to_string())))?;

    let id = add(store, client)?;
    if let Some(lead_id) = client.lead_id {
        lead::mark_converted(store, lead_id, id)?;
    }

    tx.commit()
        .map_err(|e| Error::store_query(e, Some("commit client registration".to_string())))?;

    Ok(id)
}

fn find_where(store: &Store, clause: &str, key: &dyn rusqlite::ToSql) -> Result<Option<Client>> {
    store
        .conn()
        .query_row(
            &format!("SELECT {} FROM clients WHERE {} = ?1", CLIENT_COLUMNS, clause),
            [key],
            Client::from_row,
        )
        .optional()
        .map_err(|e| Error::store_query(e, Some("load client".to_string())))
}

pub fn load(store: &Store, id: i64) -> Result<Client> {
    find_where(store, "id", &id)?.ok_or_else(|| Error::client_not_found(id.to_string()))
}

pub fn load_by_slug(store: &Store, slug: &str) -> Result<Client> {
    find_where(store, "slug", &slug)?.ok_or_else(|| Error::client_not_found(slug))
}

/// All clients, newest first, optionally restricted to one status.
pub fn list(store: &Store, status: Option<&str>) -> Result<Vec<Client>> {
    let sql = match status {
        Some(_) => format!(
            "SELECT {} FROM clients WHERE status = ?1 ORDER BY created_at DESC, id DESC",
            CLIENT_COLUMNS
        ),
        None => format!(
            "SELECT {} FROM clients ORDER BY created_at DESC, id DESC",
            CLIENT_COLUMNS
        ),
    };

    let mut stmt = store
        .conn()
        .prepare(&sql)
        .map_err(|e| Error::store_query(e, Some("list clients".to_string())))?;

    let rows = match status {
        Some(status) => stmt.query_map([status], Client::from_row),
        None => stmt.query_map([], Client::from_row),
    }
    .map_err(|e| Error::store_query(e, Some("list clients".to_string())))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::store_query(e, Some("read client row".to_string())))
}

/// Apply a partial update. Returns the names of the columns written; an empty
/// update leaves the row untouched.
pub fn update(store: &Store, id: i64, changes: &ClientUpdate) -> Result<Vec<String>> {
    let assignments = changes.assignments();

    if assignments.is_empty() {
        load(store, id)?;
        return Ok(Vec::new());
    }

    let fields: Vec<String> = assignments.iter().map(|(c, _)| c.to_string()).collect();

    let set_clause = assignments
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
        .chain(std::iter::once(format!(
            "updated_at = ?{}",
            assignments.len() + 1
        )))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE clients SET {} WHERE id = ?{}",
        set_clause,
        assignments.len() + 2
    );

    let values = assignments
        .into_iter()
        .map(|(_, value)| value)
        .chain([SqlValue::Text(time::iso(&time::now())), SqlValue::Integer(id)]);

    let changed = store
        .conn()
        .execute(&sql, params_from_iter(values))
        .map_err(|e| match (&changes.slug, store::is_unique_violation(&e)) {
            (Some(slug), true) => slug_taken(slug),
            _ => Error::store_query(e, Some(format!("update client {}", id))),
        })?;

    if changed == 0 {
        return Err(Error::client_not_found(id.to_string()));
    }

    Ok(fields)
}

pub fn update_status(store: &Store, id: i64, status: &str) -> Result<()> {
    update(store, id, &ClientUpdate::status(status)).map(|_| ())
}

/// Preview URL the front-end serves this client's site under.
pub fn preview_url(base_url: &str, slug: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), slug)
}
