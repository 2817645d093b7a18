use std::path::{Path, PathBuf};

use super::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::{io, paths};

/// Write `document` to `<output_dir>/<slug>.json`, creating the directory as
/// needed. Any existing file for the slug is replaced wholesale.
pub fn save(output_dir: &Path, slug: &str, document: &ConfigDocument) -> Result<PathBuf> {
    io::ensure_dir(output_dir, "create preview output directory")?;

    let content = serde_json::to_string_pretty(document).map_err(|e| {
        Error::internal_json(e.to_string(), Some(format!("serialize preview for {}", slug)))
    })?;

    let path = paths::client_json(output_dir, slug);
    io::write_file_atomic(&path, &content, "write preview config")?;

    log_status!("generate", "Wrote {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::preview::document::assemble;
    use chrono::NaiveDate;

    fn doc(business_type: Option<&str>) -> ConfigDocument {
        let client = Client {
            id: 3,
            slug: "bright-sparks".to_string(),
            business_name: "Bright Sparks".to_string(),
            business_type: business_type.map(str::to_string),
            ..Default::default()
        };
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assemble(&client, &now)
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("src").join("data").join("clients");

        let path = save(&out, "bright-sparks", &doc(None)).unwrap();

        assert_eq!(path, out.join("bright-sparks.json"));
        assert!(path.exists());
    }

    #[test]
    fn writes_two_space_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), "bright-sparks", &doc(None)).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"id\": \"3\",\n  \"slug\": \"bright-sparks\""));
    }

    #[test]
    fn second_save_fully_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), "bright-sparks", &doc(Some("restaurant"))).unwrap();
        let path = save(dir.path(), "bright-sparks", &doc(Some("electrician"))).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("restaurant"));
        assert!(!raw.contains("#dc2626"));

        let reread: ConfigDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(reread, doc(Some("electrician")));
        assert!(!dir.path().join("bright-sparks.json.tmp").exists());
    }
}
