//! Input validation primitives.
//!
//! Only presence is checked; values are otherwise stored as given.

use crate::error::{Error, Result};

/// Require an Option to hold a non-blank value, returning it trimmed.
///
/// Missing or whitespace-only values become a `validation.missing_argument`
/// error naming `field`.
pub fn require_value(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(Error::validation_missing_argument(vec![field.to_string()])),
    }
}

/// Treat blank input as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_value_returns_trimmed_value() {
        let result = require_value(Some("  hello  ".to_string()), "field");
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn require_value_fails_for_none() {
        let err = require_value(None, "business_name").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.missing_argument");
        assert_eq!(err.details["args"][0], "business_name");
    }

    #[test]
    fn require_value_fails_for_whitespace_only() {
        assert!(require_value(Some("   ".to_string()), "field").is_err());
    }

    #[test]
    fn non_blank_drops_empty_strings() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" x ".to_string())), Some("x".to_string()));
    }
}
