//! Preview site config generation.
//!
//! - `colors` - business-type palette lookup
//! - `services` - free-text services field normalization
//! - `document` - config document assembly
//! - `sink` - per-slug JSON file output

pub mod colors;
pub mod document;
pub mod services;
pub mod sink;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::client::{self, Client};
use crate::error::Result;

pub use document::{assemble, ConfigDocument};
pub use sink::save;

/// Outcome of generating one client's preview config.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPreview {
    pub client_id: i64,
    pub business_name: String,
    pub slug: String,
    pub path: PathBuf,
    pub preview_url: String,
}

/// Assemble and write the preview config for `client`.
pub fn generate(
    client: &Client,
    output_dir: &Path,
    preview_base_url: &str,
    now: &NaiveDateTime,
) -> Result<GeneratedPreview> {
    let document = assemble(client, now);
    let path = save(output_dir, &client.slug, &document)?;

    Ok(GeneratedPreview {
        client_id: client.id,
        business_name: client.business_name.clone(),
        slug: client.slug.clone(),
        path,
        preview_url: client::preview_url(preview_base_url, &client.slug),
    })
}
