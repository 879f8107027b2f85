use regex::Regex;
use std::sync::OnceLock;

/// Turns display text into a lowercase, hyphen-delimited path segment.
///
/// Every maximal run of characters outside `[a-z0-9]` (after ASCII
/// lowercasing) collapses into a single `-`, and one leading and one trailing
/// hyphen are stripped. Non-ASCII characters count as separators.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_separator = false;
    for ch in text.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            out.push(lower);
            in_separator = false;
        } else if !in_separator {
            out.push('-');
            in_separator = true;
        }
    }

    let out = out.strip_prefix('-').unwrap_or(&out);
    let out = out.strip_suffix('-').unwrap_or(out);
    out.to_string()
}

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern"))
}

pub fn is_slug(s: &str) -> bool {
    slug_pattern().is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("SEO & Content"), "seo-content");
        assert_eq!(slugify("SEO: Content"), "seo-content");
        assert_eq!(slugify("  Title Tag Optimization!! "), "title-tag-optimization");
    }

    #[test]
    fn non_ascii_is_a_separator() {
        assert_eq!(slugify("Café Marketing"), "caf-marketing");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn pattern_rejects_edge_hyphens() {
        assert!(is_slug("on-page-seo"));
        assert!(!is_slug("-seo"));
        assert!(!is_slug("seo--content"));
        assert!(!is_slug(""));
    }
}
