use crate::error::{CoreError, CoreResult};
use crate::slug::slugify;
use std::collections::BTreeMap;

use super::model::{ContentGraph, SubcategoryDetail};

/// Benefits advertised by every subcategory without a curated entry.
pub const DEFAULT_KEY_BENEFITS: [&str; 6] = [
    "Increased online visibility",
    "Higher quality leads",
    "Better return on investment",
    "Data-driven decision making",
    "Competitive advantage",
    "Scalable growth strategy",
];

const DEFAULT_IDEAL_FOR: [&str; 3] = [
    "Startups building their first marketing engine",
    "Growing businesses ready to scale acquisition",
    "Established brands refreshing their digital presence",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn curated_entry(
    title: &str,
    description: &str,
    features: &[&str],
    key_benefits: &[&str],
    ideal_for: &[&str],
) -> SubcategoryDetail {
    SubcategoryDetail {
        title: title.to_string(),
        description: description.to_string(),
        features: strings(features),
        key_benefits: strings(key_benefits),
        ideal_for: strings(ideal_for),
    }
}

fn curated_table() -> BTreeMap<String, SubcategoryDetail> {
    let mut table = BTreeMap::new();
    table.insert(
        "on-page-seo".to_string(),
        curated_entry(
            "On-Page SEO",
            "Optimize every element of your pages so search engines understand them and users click through.",
            &[
                "Title Tag Optimization",
                "Meta Description Writing",
                "Header Structure (H1-H6)",
                "Internal Linking",
                "Image Alt Text",
            ],
            &[
                "Higher rankings for target keywords",
                "Improved click-through rates from search results",
                "Better user engagement and lower bounce rates",
                "Clear content hierarchy for search engines",
                "Stronger topical relevance signals",
                "Faster indexing of new content",
            ],
            &[
                "Websites with existing traffic but poor rankings",
                "Businesses launching new service pages",
                "Blogs that need better search visibility",
            ],
        ),
    );
    table.insert(
        "technical-seo".to_string(),
        curated_entry(
            "Technical SEO",
            "Fix the crawling, indexing and performance issues that hold your site back.",
            &[
                "Site Speed Optimization",
                "Core Web Vitals",
                "XML Sitemaps & Robots.txt",
                "Schema Markup",
                "Crawl Error Fixes",
            ],
            &[
                "Faster page load times",
                "Passing Core Web Vitals scores",
                "Complete and accurate indexing",
                "Rich results in search listings",
                "Fewer crawl budget leaks",
            ],
            &[
                "Large sites with thousands of pages",
                "E-commerce stores with faceted navigation",
            ],
        ),
    );
    table.insert(
        "google-ads".to_string(),
        curated_entry(
            "Google Ads",
            "Full-funnel Google Ads management focused on profitable conversions.",
            &[
                "Search Campaigns",
                "Performance Max",
                "Shopping Ads",
                "YouTube Ads",
            ],
            &[
                "Immediate visibility for high-intent searches",
                "Lower cost per acquisition",
                "Transparent conversion tracking",
                "Weekly bid and budget optimization",
            ],
            &[
                "E-commerce brands with clear margins",
                "Lead generation businesses",
                "Local services competing on search",
            ],
        ),
    );
    table.insert(
        "content-creation".to_string(),
        curated_entry(
            "Content Creation",
            "Thumb-stopping social content produced on a consistent calendar.",
            &["Reels & Short Video", "Carousel Design", "Content Calendars"],
            &[
                "Consistent posting without the overhead",
                "Higher reach through native formats",
                "On-brand visuals across every channel",
            ],
            &["Brands without an in-house creative team"],
        ),
    );
    table
}

/// Looks up curated subcategory details, falling back to a generated record.
#[derive(Debug, Clone)]
pub struct DetailResolver {
    curated: BTreeMap<String, SubcategoryDetail>,
}

impl DetailResolver {
    pub fn new(curated: BTreeMap<String, SubcategoryDetail>) -> Self {
        Self { curated }
    }

    /// The site's hand-authored detail table.
    pub fn curated() -> Self {
        Self::new(curated_table())
    }

    /// No curated entries; every subcategory resolves to the default record.
    pub fn empty() -> Self {
        Self::new(BTreeMap::new())
    }

    pub fn is_curated(&self, subcategory_id: &str) -> bool {
        self.curated.contains_key(subcategory_id)
    }

    pub fn curated_ids(&self) -> impl Iterator<Item = &str> {
        self.curated.keys().map(|k| k.as_str())
    }

    /// Curated ids that no subcategory in `graph` uses, in sorted order.
    pub fn unmatched_ids(&self, graph: &ContentGraph) -> Vec<String> {
        self.curated_ids()
            .filter(|id| {
                !graph
                    .services
                    .iter()
                    .flat_map(|s| s.subcategories.iter())
                    .any(|sub| sub.id == *id)
            })
            .map(|id| id.to_string())
            .collect()
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (id, detail) in &self.curated {
            for benefit in &detail.key_benefits {
                if slugify(benefit).is_empty() {
                    return Err(CoreError::InvalidContent(format!(
                        "benefit '{}' of {} normalizes to an empty slug",
                        benefit, id
                    )));
                }
            }
        }
        Ok(())
    }

    /// A curated hit is returned verbatim and the remaining arguments are
    /// ignored. Never fails.
    pub fn resolve(
        &self,
        subcategory_id: &str,
        subcategory_title: &str,
        service_title: &str,
        item_names: &[String],
    ) -> SubcategoryDetail {
        if let Some(detail) = self.curated.get(subcategory_id) {
            return detail.clone();
        }
        default_detail(subcategory_title, service_title, item_names)
    }
}

impl Default for DetailResolver {
    fn default() -> Self {
        Self::curated()
    }
}

pub fn default_detail(
    subcategory_title: &str,
    service_title: &str,
    item_names: &[String],
) -> SubcategoryDetail {
    SubcategoryDetail {
        title: subcategory_title.to_string(),
        description: format!(
            "Expert {} services as part of our {} offering, tailored to your business goals.",
            subcategory_title, service_title
        ),
        features: item_names.to_vec(),
        key_benefits: strings(&DEFAULT_KEY_BENEFITS),
        ideal_for: strings(&DEFAULT_IDEAL_FOR),
    }
}
