use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Root configuration structure for leadctl.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadctlConfig {
    /// SQLite database file. Falls back to the config directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<String>,

    /// Directory that receives `<slug>.json` preview configs.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Base URL the preview front-end serves client sites under.
    #[serde(default = "default_preview_base_url")]
    pub preview_base_url: String,
}

impl Default for LeadctlConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            output_dir: default_output_dir(),
            preview_base_url: default_preview_base_url(),
        }
    }
}

/// Fully resolved settings after applying CLI overrides.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub database_path: PathBuf,
    pub output_dir: PathBuf,
    pub preview_base_url: String,
}

impl LeadctlConfig {
    /// Resolve paths, letting explicit overrides win over file values.
    pub fn resolve(
        &self,
        database_override: Option<&str>,
        output_dir_override: Option<&str>,
    ) -> crate::Result<Settings> {
        let database_path = match database_override.or(self.database_path.as_deref()) {
            Some(raw) => paths::expand(raw),
            None => paths::database()?,
        };

        let output_dir = paths::expand(output_dir_override.unwrap_or(&self.output_dir));

        let preview_base_url = self.preview_base_url.trim().trim_end_matches('/');
        if preview_base_url.is_empty() {
            return Err(crate::Error::config_invalid_value(
                "preview_base_url",
                "preview_base_url cannot be empty",
            ));
        }

        Ok(Settings {
            database_path,
            output_dir,
            preview_base_url: preview_base_url.to_string(),
        })
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_output_dir() -> String {
    "src/data/clients".to_string()
}

fn default_preview_base_url() -> String {
    "http://localhost:5000/preview".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the full leadctl.json config, falling back to defaults on any error.
pub fn load_config() -> LeadctlConfig {
    paths::leadctl_json()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_default()
}

/// Attempt to load config from an explicit file.
pub fn load_config_from(path: &Path) -> crate::Result<LeadctlConfig> {
    if !path.exists() {
        return Err(crate::Error::internal_io(
            format!("File not found: {}", path.display()),
            Some("read config".to_string()),
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Get the path to leadctl.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::leadctl_json()?.display().to_string())
}
