/// Convert a business name into a URL-friendly slug.
///
/// Letters are lower-cased, punctuation is dropped, and runs of whitespace,
/// underscores and dashes collapse into a single `-`. Leading and trailing
/// dashes are trimmed. Input with no letters or digits yields an empty string.
pub fn slugify(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_dash = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_name() {
        assert_eq!(slugify("Joe's Plumbing"), "joes-plumbing");
    }

    #[test]
    fn slugify_preserves_numbers() {
        assert_eq!(slugify("A1 Auto Repair"), "a1-auto-repair");
    }

    #[test]
    fn slugify_trims_separators() {
        assert_eq!(slugify("  --Green Thumb Landscaping__ "), "green-thumb-landscaping");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("foo--bar__baz   qux"), "foo-bar-baz-qux");
    }

    #[test]
    fn slugify_strips_punctuation_without_splitting() {
        assert_eq!(slugify("Smith & Sons, LLC."), "smith-sons-llc");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Café Olé"), "café-olé");
    }

    #[test]
    fn slugify_only_punctuation_is_empty() {
        assert_eq!(slugify("!@#$%"), "");
        assert_eq!(slugify(""), "");
    }
}
