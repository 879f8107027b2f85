use crate::content::details::DetailResolver;
use crate::content::model::ContentGraph;
use crate::determinism::digest::sha256_hex;
use crate::error::CoreResult;
use serde::Serialize;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};

use super::config::SitemapConfig;
use super::enumerate::{Enumeration, EnumerationStats, UrlEnumerator};
use super::render::{render_robots_txt, render_sitemap};
use super::writer::write_output;

#[derive(Debug, Clone)]
pub struct SitemapRequest {
    pub config: SitemapConfig,
    pub content: ContentGraph,
    pub resolver: DetailResolver,
    /// Pinned `<lastmod>`; today's UTC date when absent.
    pub lastmod: Option<Date>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SitemapReport {
    pub output_path: PathBuf,
    pub robots_path: Option<PathBuf>,
    pub url_count: usize,
    pub sha256: String,
    pub stats: EnumerationStats,
    pub unmatched_curated_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RenderedSitemap {
    pub xml: String,
    pub enumeration: Enumeration,
}

/// Validates, enumerates and renders without touching the filesystem.
pub fn build_sitemap(req: &SitemapRequest) -> CoreResult<RenderedSitemap> {
    req.config.validate()?;
    req.content.validate()?;
    req.resolver.validate()?;

    let enumeration = UrlEnumerator::new(&req.config, &req.resolver).enumerate(&req.content);
    let lastmod = req
        .lastmod
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let xml = render_sitemap(
        &enumeration.urls,
        lastmod,
        req.config.changefreq,
        req.config.priority_tenths,
    )?;
    Ok(RenderedSitemap { xml, enumeration })
}

pub fn generate_sitemap(req: &SitemapRequest) -> CoreResult<SitemapReport> {
    let rendered = build_sitemap(req)?;
    let stats = rendered.enumeration.stats;

    if stats.default_detail_subcategories > 0 {
        tracing::warn!(
            count = stats.default_detail_subcategories,
            "subcategories without curated details share the default benefit list"
        );
    }

    let unmatched_curated_ids = req.resolver.unmatched_ids(&req.content);
    if !unmatched_curated_ids.is_empty() {
        tracing::warn!(
            ids = ?unmatched_curated_ids,
            "curated subcategory details match no subcategory"
        );
    }

    write_output(&req.config.output_path, &rendered.xml)?;

    let robots_path = if req.config.write_robots_txt {
        let file_name = req
            .config
            .output_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "sitemap.xml".to_string());
        let robots = render_robots_txt(&req.config.base_url, &file_name);
        write_output(&req.config.robots_path, &robots)?;
        Some(req.config.robots_path.clone())
    } else {
        None
    };

    let report = SitemapReport {
        output_path: req.config.output_path.clone(),
        robots_path,
        url_count: rendered.enumeration.urls.len(),
        sha256: sha256_hex(rendered.xml.as_bytes()),
        stats,
        unmatched_curated_ids,
    };
    tracing::info!(
        url_count = report.url_count,
        path = %report.output_path.display(),
        sha256 = %report.sha256,
        "sitemap generated"
    );
    Ok(report)
}
