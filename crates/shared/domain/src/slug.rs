//! URL slug normalization shared by authors and posts.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Derive a URL slug from a display string.
///
/// The input is trimmed and lowercased, every run of characters outside
/// `[a-z0-9]` becomes a single hyphen, and hyphens at either end are dropped.
/// Applying it to its own output yields the same slug.
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_display_name() {
        assert_eq!(slugify("Evelyn Harper"), "evelyn-harper");
    }

    #[test]
    fn test_slugify_collapses_and_strips_separators() {
        assert_eq!(slugify("  A--B!! "), "a-b");
        assert_eq!(slugify("--Hello,   World--"), "hello-world");
    }

    #[test]
    fn test_slugify_title() {
        assert_eq!(
            slugify("Why Product Thinking Belongs In Service Firms"),
            "why-product-thinking-belongs-in-service-firms"
        );
    }

    #[test]
    fn test_slugify_non_ascii_becomes_separator() {
        assert_eq!(slugify("Café Crème"), "caf-cr-me");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in ["Evelyn Harper", "  A--B!! ", "Revenue Ops Metrics That Actually Matter", ""] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_slugify_only_separators() {
        assert_eq!(slugify("!!!"), "");
    }
}
