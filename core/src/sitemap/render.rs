use crate::error::{CoreError, CoreResult};
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// sitemaps.org protocol limits for a single (non-index) sitemap file.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;
pub const MAX_LOC_LEN: usize = 2_048;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Date,
    pub changefreq: ChangeFrequency,
    pub priority_tenths: u8,
}

pub fn format_lastmod(date: Date) -> CoreResult<String> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| CoreError::Date(e.to_string()))
}

/// Parses a `YYYY-MM-DD` date for a pinned `<lastmod>`.
pub fn parse_lastmod(s: &str) -> CoreResult<Date> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| CoreError::Date(format!("invalid lastmod '{}': {}", s, e)))
}

pub fn format_priority(tenths: u8) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

pub fn render_entries(entries: &[SitemapEntry]) -> CoreResult<String> {
    if entries.len() > MAX_URLS_PER_SITEMAP {
        return Err(CoreError::SitemapLimit(format!(
            "{} urls exceeds the {} per-file maximum",
            entries.len(),
            MAX_URLS_PER_SITEMAP
        )));
    }

    let mut out = Vec::with_capacity(entries.len() * 6 + 3);
    out.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    out.push(format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE));
    for entry in entries {
        if entry.loc.len() > MAX_LOC_LEN {
            return Err(CoreError::SitemapLimit(format!(
                "loc longer than {} characters: {}",
                MAX_LOC_LEN, entry.loc
            )));
        }
        out.push("  <url>".to_string());
        out.push(format!("    <loc>{}</loc>", escape(entry.loc.as_str())));
        out.push(format!("    <lastmod>{}</lastmod>", format_lastmod(entry.lastmod)?));
        out.push(format!(
            "    <changefreq>{}</changefreq>",
            entry.changefreq.as_str()
        ));
        out.push(format!(
            "    <priority>{}</priority>",
            format_priority(entry.priority_tenths)
        ));
        out.push("  </url>".to_string());
    }
    out.push("</urlset>".to_string());
    out.push("".to_string());
    Ok(out.join("\n"))
}

/// One `<url>` per input, in input order, all sharing the same metadata.
pub fn render_sitemap(
    urls: &[String],
    lastmod: Date,
    changefreq: ChangeFrequency,
    priority_tenths: u8,
) -> CoreResult<String> {
    let entries: Vec<SitemapEntry> = urls
        .iter()
        .map(|loc| SitemapEntry {
            loc: loc.clone(),
            lastmod,
            changefreq,
            priority_tenths,
        })
        .collect();
    render_entries(&entries)
}

pub fn render_robots_txt(base_url: &str, sitemap_file_name: &str) -> String {
    let mut out = Vec::new();
    out.push("User-agent: *".to_string());
    out.push("Allow: /".to_string());
    out.push("".to_string());
    out.push(format!("Sitemap: {}/{}", base_url, sitemap_file_name));
    out.push("".to_string());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn priority_renders_one_decimal() {
        assert_eq!(format_priority(8), "0.8");
        assert_eq!(format_priority(10), "1.0");
        assert_eq!(format_priority(0), "0.0");
    }

    #[test]
    fn lastmod_is_zero_padded() {
        let d = Date::from_calendar_date(2026, Month::March, 7).unwrap();
        assert_eq!(format_lastmod(d).unwrap(), "2026-03-07");
        assert_eq!(parse_lastmod("2026-03-07").unwrap(), d);
        assert!(parse_lastmod("07/03/2026").is_err());
    }

    #[test]
    fn loc_is_escaped() {
        let d = Date::from_calendar_date(2026, Month::January, 1).unwrap();
        let xml = render_sitemap(
            &["https://dibull.com/?a=1&b=2".to_string()],
            d,
            ChangeFrequency::Weekly,
            8,
        )
        .unwrap();
        assert!(xml.contains("<loc>https://dibull.com/?a=1&amp;b=2</loc>"));
    }
}
