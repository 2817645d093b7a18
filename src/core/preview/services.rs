use serde::{Deserialize, Serialize};

/// Upper bound on parsed service entries; extras are dropped silently.
pub const MAX_SERVICES: usize = 6;

/// Icon assigned to every parsed service.
pub const DEFAULT_ICON: &str = "Wrench";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl ServiceEntry {
    fn from_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: format!(
                "Professional {} services for your home or business.",
                title.to_lowercase()
            ),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

const PLACEHOLDERS: [(&str, &str, &str); 3] = [
    ("Service 1", "Description of your first service.", "Wrench"),
    ("Service 2", "Description of your second service.", "Shield"),
    ("Service 3", "Description of your third service.", "Clock"),
];

/// Generic entries used when a client has not listed any services.
pub fn placeholders() -> Vec<ServiceEntry> {
    PLACEHOLDERS
        .iter()
        .map(|(title, description, icon)| ServiceEntry {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

/// Parse a comma-separated services field into at most six entries, keeping
/// input order. Yields the placeholder list when nothing usable remains.
pub fn normalize(raw: Option<&str>) -> Vec<ServiceEntry> {
    let services: Vec<ServiceEntry> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .take(MAX_SERVICES)
        .map(ServiceEntry::from_title)
        .collect();

    if services.is_empty() {
        placeholders()
    } else {
        services
    }
}
