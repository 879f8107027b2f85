use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureItem {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSubcategory {
    /// Unique within the parent service only.
    pub id: String,
    pub title: String,
    pub items: Vec<FeatureItem>,
}

impl ServiceSubcategory {
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceCategory {
    pub slug: String,
    pub title: String,
    pub subcategories: Vec<ServiceSubcategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreeTool {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: String,
    pub client: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub headline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpactPoint {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub metric: String,
}

/// Extended record for a subcategory page, either curated or synthesized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDetail {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub key_benefits: Vec<String>,
    pub ideal_for: Vec<String>,
}

/// The four content collections the sitemap is enumerated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentGraph {
    pub services: Vec<ServiceCategory>,
    #[serde(default)]
    pub free_tools: Vec<FreeTool>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudy>,
    #[serde(default)]
    pub impact_points: Vec<ImpactPoint>,
}
