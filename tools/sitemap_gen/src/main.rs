use clap::Parser;
use dibull_core::content::catalog::{default_content_graph, load_content_graph};
use dibull_core::content::details::DetailResolver;
use dibull_core::error::CoreResult;
use dibull_core::sitemap::config::SitemapConfig;
use dibull_core::sitemap::render::parse_lastmod;
use dibull_core::sitemap::workflow::{generate_sitemap, SitemapReport, SitemapRequest};
use std::path::PathBuf;

/// Generates the site's sitemap.xml from the compiled-in content graph.
#[derive(Parser, Debug)]
#[command(name = "sitemap_gen")]
struct Cli {
    /// JSON config overriding the default base URL, routes and output paths.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON content graph to use instead of the embedded one.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output file (defaults to public/sitemap.xml).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pin <lastmod> to YYYY-MM-DD instead of today's UTC date.
    #[arg(long)]
    lastmod: Option<String>,

    /// Also write robots.txt pointing at the sitemap.
    #[arg(long)]
    robots: bool,
}

fn run(cli: &Cli) -> CoreResult<SitemapReport> {
    let mut config = match &cli.config {
        Some(path) => SitemapConfig::load(path)?,
        None => SitemapConfig::default(),
    };
    if let Some(out) = &cli.out {
        config.output_path = out.clone();
    }
    if cli.robots {
        config.write_robots_txt = true;
    }

    let content = match &cli.content {
        Some(path) => load_content_graph(path)?,
        None => default_content_graph()?,
    };
    let lastmod = cli.lastmod.as_deref().map(parse_lastmod).transpose()?;

    generate_sitemap(&SitemapRequest {
        config,
        content,
        resolver: DetailResolver::curated(),
        lastmod,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitemap_gen=info,dibull_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            tracing::info!(
                url_count = report.url_count,
                path = %report.output_path.display(),
                "generated {} urls",
                report.url_count
            );
        }
        Err(e) => {
            tracing::error!("sitemap generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
