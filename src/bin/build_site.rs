// Static export + SEO audit
//
// Usage: cargo run --bin build_site -- --out dist
//        cargo run --bin build_site -- --audit-only

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use practice_pages::seo::Severity;
use practice_pages::{logging, Site, SiteConfig};

#[derive(Parser)]
#[command(name = "build_site")]
#[command(about = "Render every page to static HTML and audit page metadata")]
struct Args {
    /// Output directory (overrides OUTPUT_DIR)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Absolute site origin for canonical URLs (overrides SITE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Directory of JSON page overrides (overrides CONTENT_DIR)
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Run the SEO audit without writing any files
    #[arg(long)]
    audit_only: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SiteConfig::from_env();
    logging::init(config.log_format);

    if let Some(out) = args.out {
        config.output_dir = out;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(dir) = args.content_dir {
        config.content_dir = Some(dir);
    }

    let out_dir = config.output_dir.clone();
    let site = Site::new(config).context("Failed to load site content")?;

    let findings = site.audit();
    for finding in &findings {
        println!("{}", finding);
    }
    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    println!(
        "Audit: {} pages, {} findings ({} errors)",
        site.registry().len(),
        findings.len(),
        errors
    );

    if errors > 0 {
        anyhow::bail!("SEO audit found {} errors", errors);
    }
    if args.audit_only {
        return Ok(());
    }

    let summary = site
        .export(&out_dir)
        .with_context(|| format!("Failed to export to {}", out_dir.display()))?;
    println!(
        "Wrote {} pages ({} bytes) to {}",
        summary.pages_written,
        summary.bytes_written,
        summary.out_dir.display()
    );

    Ok(())
}
