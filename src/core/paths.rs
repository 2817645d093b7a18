use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base leadctl config directory (~/.config/leadctl/ on Unix, %APPDATA%\leadctl on Windows)
pub fn leadctl() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("leadctl"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("leadctl"))
    }
}

/// Global leadctl.json config file path
pub fn leadctl_json() -> Result<PathBuf> {
    Ok(leadctl()?.join("leadctl.json"))
}

/// Default SQLite database path
pub fn database() -> Result<PathBuf> {
    Ok(leadctl()?.join("leadctl.db"))
}

/// Generated preview config path for a client slug
pub fn client_json(output_dir: &std::path::Path, slug: &str) -> PathBuf {
    output_dir.join(format!("{}.json", slug))
}

/// Expand `~` in a user-supplied path.
pub fn expand(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
