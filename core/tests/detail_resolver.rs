use dibull_core::content::details::{DetailResolver, DEFAULT_KEY_BENEFITS};
use dibull_core::content::model::SubcategoryDetail;
use std::collections::BTreeMap;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn curated_entry_ignores_other_arguments() {
    let resolver = DetailResolver::curated();
    let a = resolver.resolve(
        "on-page-seo",
        "On-Page SEO",
        "Search Engine Optimization",
        &names(&["Title Tag Optimization"]),
    );
    let b = resolver.resolve(
        "on-page-seo",
        "Something Else",
        "Web Development",
        &names(&["Unrelated", "Items"]),
    );
    assert_eq!(a, b);
    assert_eq!(a.key_benefits.len(), 6);
    assert_eq!(a.title, "On-Page SEO");
}

#[test]
fn injected_table_takes_precedence() {
    let mut table = BTreeMap::new();
    table.insert(
        "custom".to_string(),
        SubcategoryDetail {
            title: "Custom".to_string(),
            description: "d".to_string(),
            features: vec![],
            key_benefits: names(&["Only benefit"]),
            ideal_for: vec![],
        },
    );
    let resolver = DetailResolver::new(table);
    let d = resolver.resolve("custom", "x", "y", &[]);
    assert_eq!(d.key_benefits, names(&["Only benefit"]));
    assert!(resolver.is_curated("custom"));
    assert!(!resolver.is_curated("on-page-seo"));
}

#[test]
fn default_fallback_has_six_constant_benefits() {
    let resolver = DetailResolver::curated();
    let a = resolver.resolve("not-curated", "Email Marketing", "Content Marketing", &names(&["Drip"]));
    let b = resolver.resolve("also-missing", "Logo Design", "Branding", &[]);
    assert_eq!(a.key_benefits.len(), 6);
    assert_eq!(a.key_benefits, b.key_benefits);
    assert_eq!(a.key_benefits, names(&DEFAULT_KEY_BENEFITS));
}

#[test]
fn default_fallback_carries_inputs_into_other_fields() {
    let resolver = DetailResolver::empty();
    let d = resolver.resolve("meta-ads", "Meta Ads", "Performance Marketing", &names(&["Retargeting"]));
    assert_eq!(d.title, "Meta Ads");
    assert!(d.description.contains("Performance Marketing"));
    assert_eq!(d.features, names(&["Retargeting"]));
}

#[test]
fn curated_table_validates() {
    DetailResolver::curated().validate().unwrap();
}

#[test]
fn benefit_without_slug_is_rejected() {
    let mut table = BTreeMap::new();
    table.insert(
        "bad".to_string(),
        SubcategoryDetail {
            title: "Bad".to_string(),
            description: String::new(),
            features: vec![],
            key_benefits: names(&["!!!"]),
            ideal_for: vec![],
        },
    );
    let err = DetailResolver::new(table).validate().unwrap_err();
    assert!(err.to_string().contains("empty slug"));
}
