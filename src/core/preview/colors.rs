use serde::{Deserialize, Serialize};

/// Three-color brand palette keyed by business type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Page background, identical for every business type.
pub const BACKGROUND: &str = "#ffffff";
/// Body text color, identical for every business type.
pub const TEXT: &str = "#1f2937";

pub const DEFAULT_KEY: &str = "default";

pub const DEFAULT_SCHEME: ColorScheme = ColorScheme {
    primary: "#2563eb",
    secondary: "#1e40af",
    accent: "#fbbf24",
};

const SCHEMES: &[(&str, ColorScheme)] = &[
    (
        "plumber",
        ColorScheme {
            primary: "#2563eb",
            secondary: "#1e40af",
            accent: "#fbbf24",
        },
    ),
    (
        "electrician",
        ColorScheme {
            primary: "#f59e0b",
            secondary: "#d97706",
            accent: "#1f2937",
        },
    ),
    (
        "hvac",
        ColorScheme {
            primary: "#0891b2",
            secondary: "#0e7490",
            accent: "#f97316",
        },
    ),
    (
        "landscaping",
        ColorScheme {
            primary: "#16a34a",
            secondary: "#15803d",
            accent: "#84cc16",
        },
    ),
    (
        "cleaning",
        ColorScheme {
            primary: "#06b6d4",
            secondary: "#0891b2",
            accent: "#f0abfc",
        },
    ),
    (
        "restaurant",
        ColorScheme {
            primary: "#dc2626",
            secondary: "#b91c1c",
            accent: "#fbbf24",
        },
    ),
    (
        "salon",
        ColorScheme {
            primary: "#ec4899",
            secondary: "#db2777",
            accent: "#fbbf24",
        },
    ),
    (
        "auto",
        ColorScheme {
            primary: "#1f2937",
            secondary: "#111827",
            accent: "#ef4444",
        },
    ),
    (
        "legal",
        ColorScheme {
            primary: "#1e3a5f",
            secondary: "#0f172a",
            accent: "#c9a227",
        },
    ),
    (
        "medical",
        ColorScheme {
            primary: "#0ea5e9",
            secondary: "#0284c7",
            accent: "#22c55e",
        },
    ),
    (DEFAULT_KEY, DEFAULT_SCHEME),
];

/// Lower-cased business type, or `"default"` when absent or empty.
pub fn business_type_key(business_type: Option<&str>) -> String {
    match business_type {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => DEFAULT_KEY.to_string(),
    }
}

/// Palette for a business type. Unknown types get the default palette.
pub fn resolve(business_type: Option<&str>) -> ColorScheme {
    let key = business_type_key(business_type);

    SCHEMES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, scheme)| *scheme)
        .unwrap_or(DEFAULT_SCHEME)
}

/// Palette plus the fixed background/text colors, as written to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl From<ColorScheme> for SiteColors {
    fn from(scheme: ColorScheme) -> Self {
        Self {
            primary: scheme.primary.to_string(),
            secondary: scheme.secondary.to_string(),
            accent: scheme.accent.to_string(),
            background: BACKGROUND.to_string(),
            text: TEXT.to_string(),
        }
    }
}
