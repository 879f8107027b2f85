use crate::content::details::DetailResolver;
use crate::content::model::ContentGraph;
use crate::slug::{slugify, SlugScope};
use serde::Serialize;

use super::config::SitemapConfig;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EnumerationStats {
    pub static_routes: usize,
    pub services: usize,
    pub subcategories: usize,
    pub features: usize,
    pub benefits: usize,
    pub free_tools: usize,
    pub case_studies: usize,
    pub impact_points: usize,
    /// Subcategories served by the generated default detail record.
    pub default_detail_subcategories: usize,
    pub slug_collisions: usize,
}

impl EnumerationStats {
    pub fn total(&self) -> usize {
        self.static_routes
            + self.services
            + self.subcategories
            + self.features
            + self.benefits
            + self.free_tools
            + self.case_studies
            + self.impact_points
    }
}

#[derive(Debug, Clone)]
pub struct Enumeration {
    pub urls: Vec<String>,
    pub stats: EnumerationStats,
}

/// Walks the content graph in declaration order and emits absolute URLs.
pub struct UrlEnumerator<'a> {
    config: &'a SitemapConfig,
    resolver: &'a DetailResolver,
}

impl<'a> UrlEnumerator<'a> {
    pub fn new(config: &'a SitemapConfig, resolver: &'a DetailResolver) -> Self {
        Self { config, resolver }
    }

    pub fn generate_all_urls(&self, graph: &ContentGraph) -> Vec<String> {
        self.enumerate(graph).urls
    }

    pub fn enumerate(&self, graph: &ContentGraph) -> Enumeration {
        let mut urls = Vec::new();
        let mut stats = EnumerationStats::default();

        for route in &self.config.static_routes {
            urls.push(self.config.url_for(route));
            stats.static_routes += 1;
        }

        for service in &graph.services {
            let service_path = format!("/services/{}", service.slug);
            urls.push(self.config.url_for(&service_path));
            stats.services += 1;

            for sub in &service.subcategories {
                let sub_path = format!("{}/{}", service_path, sub.id);
                urls.push(self.config.url_for(&sub_path));
                stats.subcategories += 1;

                let mut features = SlugScope::new(
                    format!("{}/feature", sub_path),
                    self.config.collision_policy,
                );
                for item in &sub.items {
                    let segment = features.claim(slugify(&item.name));
                    urls.push(self.config.url_for(&format!("{}/feature/{}", sub_path, segment)));
                    stats.features += 1;
                }

                if !self.resolver.is_curated(&sub.id) {
                    tracing::debug!(subcategory = %sub_path, "using default subcategory detail");
                    stats.default_detail_subcategories += 1;
                }
                let detail =
                    self.resolver
                        .resolve(&sub.id, &sub.title, &service.title, &sub.item_names());

                let mut benefits = SlugScope::new(
                    format!("{}/benefit", sub_path),
                    self.config.collision_policy,
                );
                for benefit in &detail.key_benefits {
                    let segment = benefits.claim(slugify(benefit));
                    urls.push(self.config.url_for(&format!("{}/benefit/{}", sub_path, segment)));
                    stats.benefits += 1;
                }

                stats.slug_collisions += features.collisions() + benefits.collisions();
            }
        }

        for tool in &graph.free_tools {
            urls.push(self.config.url_for(&format!("/free-tools/{}", tool.slug)));
            stats.free_tools += 1;
        }

        for cs in &graph.case_studies {
            urls.push(self.config.url_for(&format!("/case-studies/{}", cs.slug)));
            stats.case_studies += 1;
        }

        for ip in &graph.impact_points {
            urls.push(self.config.url_for(&format!("/business-impact/{}", ip.slug)));
            stats.impact_points += 1;
        }

        tracing::debug!(
            static_routes = stats.static_routes,
            services = stats.services,
            subcategories = stats.subcategories,
            features = stats.features,
            benefits = stats.benefits,
            "enumerated content graph"
        );

        Enumeration { urls, stats }
    }
}

pub fn generate_all_urls(
    config: &SitemapConfig,
    graph: &ContentGraph,
    resolver: &DetailResolver,
) -> Vec<String> {
    UrlEnumerator::new(config, resolver).generate_all_urls(graph)
}

/// Number of URLs `generate_all_urls` emits for the same inputs.
pub fn expected_url_count(
    config: &SitemapConfig,
    graph: &ContentGraph,
    resolver: &DetailResolver,
) -> usize {
    let services: usize = graph
        .services
        .iter()
        .map(|service| {
            let subs: usize = service
                .subcategories
                .iter()
                .map(|sub| {
                    let benefits = resolver
                        .resolve(&sub.id, &sub.title, &service.title, &sub.item_names())
                        .key_benefits
                        .len();
                    1 + sub.items.len() + benefits
                })
                .sum();
            1 + subs
        })
        .sum();

    config.static_routes.len()
        + services
        + graph.free_tools.len()
        + graph.case_studies.len()
        + graph.impact_points.len()
}
