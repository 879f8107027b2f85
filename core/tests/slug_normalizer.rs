use dibull_core::slug::{is_slug, slugify, CollisionPolicy, SlugScope};

const SAMPLES: &[&str] = &[
    "",
    "-",
    "---",
    "Title Tag Optimization",
    "SEO & Content",
    "  Leading and trailing  ",
    "--already-hyphenated--",
    "A/B Testing",
    "Header Structure (H1-H6)",
    "XML Sitemaps & Robots.txt",
    "Café — Résumé",
    "100% Growth!!!",
    "UPPER lower 123",
    "emoji 🚀 launch",
    "tab\tand\nnewline",
];

#[test]
fn slugify_is_deterministic() {
    for s in SAMPLES {
        assert_eq!(slugify(s), slugify(s), "input {:?}", s);
    }
}

#[test]
fn slugify_output_matches_slug_charset_or_is_empty() {
    for s in SAMPLES {
        let slug = slugify(s);
        assert!(slug.is_empty() || is_slug(&slug), "{:?} -> {:?}", s, slug);
    }
}

#[test]
fn slugify_is_idempotent() {
    for s in SAMPLES {
        let once = slugify(s);
        assert_eq!(slugify(&once), once, "input {:?}", s);
    }
}

#[test]
fn distinct_labels_can_collide() {
    assert_eq!(slugify("SEO & Content"), slugify("SEO: Content"));
    assert_eq!(slugify("A/B Testing"), "a-b-testing");
    assert_eq!(slugify("Header Structure (H1-H6)"), "header-structure-h1-h6");
}

#[test]
fn preserve_policy_keeps_duplicates() {
    let mut scope = SlugScope::new("/services/seo/on-page-seo/feature", CollisionPolicy::Preserve);
    assert_eq!(scope.claim("seo-content".to_string()), "seo-content");
    assert_eq!(scope.claim("seo-content".to_string()), "seo-content");
    assert_eq!(scope.collisions(), 1);
}

#[test]
fn warn_policy_keeps_duplicates() {
    let mut scope = SlugScope::new("/x", CollisionPolicy::Warn);
    assert_eq!(scope.claim("a".to_string()), "a");
    assert_eq!(scope.claim("a".to_string()), "a");
    assert_eq!(scope.collisions(), 1);
}

#[test]
fn disambiguate_policy_suffixes_and_skips_taken_suffixes() {
    let mut scope = SlugScope::new("/x", CollisionPolicy::Disambiguate);
    assert_eq!(scope.claim("seo-content".to_string()), "seo-content");
    assert_eq!(scope.claim("seo-content-2".to_string()), "seo-content-2");
    assert_eq!(scope.claim("seo-content".to_string()), "seo-content-3");
    assert_eq!(scope.claim("seo-content".to_string()), "seo-content-4");
    assert_eq!(scope.collisions(), 2);
}
