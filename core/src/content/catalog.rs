use crate::error::{CoreError, CoreResult};
use crate::slug::{is_slug, slugify};
use std::collections::BTreeSet;
use std::path::Path;

use super::model::ContentGraph;

/// The site's services, free tools, case studies and impact pages, compiled
/// into the binary.
pub fn default_content_graph() -> CoreResult<ContentGraph> {
    let json = include_str!("catalog.json");
    let graph: ContentGraph = serde_json::from_str(json)?;
    Ok(graph)
}

pub fn load_content_graph(path: impl AsRef<Path>) -> CoreResult<ContentGraph> {
    let bytes = std::fs::read(path.as_ref())?;
    let graph: ContentGraph = serde_json::from_slice(&bytes)?;
    Ok(graph)
}

fn check_slug(kind: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidContent(format!("{} has an empty slug", kind)));
    }
    // Lowercase-with-hyphens is a convention, not a requirement.
    if !is_slug(value) {
        tracing::warn!(kind = %kind, slug = %value, "slug is not lowercase-with-hyphens");
    }
    Ok(())
}

fn check_unique<'a>(kind: &str, values: impl Iterator<Item = &'a str>) -> CoreResult<()> {
    let mut seen = BTreeSet::new();
    for v in values {
        if !seen.insert(v) {
            return Err(CoreError::InvalidContent(format!(
                "duplicate {} slug '{}'",
                kind, v
            )));
        }
    }
    Ok(())
}

impl ContentGraph {
    /// Rejects records that would otherwise produce empty path segments, and
    /// duplicate slugs within one collection. Feature names only need to
    /// normalize to a non-empty slug.
    pub fn validate(&self) -> CoreResult<()> {
        for service in &self.services {
            check_slug("service", &service.slug)?;
            for sub in &service.subcategories {
                check_slug(&format!("subcategory of {}", service.slug), &sub.id)?;
                for item in &sub.items {
                    if slugify(&item.name).is_empty() {
                        return Err(CoreError::InvalidContent(format!(
                            "feature '{}' in {}/{} normalizes to an empty slug",
                            item.name, service.slug, sub.id
                        )));
                    }
                }
            }
            check_unique(
                &format!("subcategory of {}", service.slug),
                service.subcategories.iter().map(|s| s.id.as_str()),
            )?;
        }
        check_unique("service", self.services.iter().map(|s| s.slug.as_str()))?;

        for tool in &self.free_tools {
            check_slug("free tool", &tool.slug)?;
        }
        check_unique("free tool", self.free_tools.iter().map(|t| t.slug.as_str()))?;

        for cs in &self.case_studies {
            check_slug("case study", &cs.slug)?;
        }
        check_unique("case study", self.case_studies.iter().map(|c| c.slug.as_str()))?;

        for ip in &self.impact_points {
            check_slug("impact point", &ip.slug)?;
        }
        check_unique(
            "impact point",
            self.impact_points.iter().map(|i| i.slug.as_str()),
        )?;

        Ok(())
    }

    pub fn subcategory_count(&self) -> usize {
        self.services.iter().map(|s| s.subcategories.len()).sum()
    }

    pub fn feature_count(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| s.subcategories.iter())
            .map(|sub| sub.items.len())
            .sum()
    }
}
