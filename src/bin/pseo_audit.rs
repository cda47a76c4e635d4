use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, info};

use silho_pseo::model::RepurposeTier;
use silho_pseo::pseo::{audit, Catalog};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Check that every pSEO path resolves and that Tier 1/2 copy is unique"
)]
struct Args {
    /// Print the full audit report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let catalog = Catalog::build();

    println!("Tier 1 (source to target):        {}", catalog.count_tier(RepurposeTier::SourceToTarget));
    println!("Tier 2 (source to target, persona): {}", catalog.count_tier(RepurposeTier::SourceToTargetForPersona));
    println!("Tier 3 (persona x use case):       {}", catalog.tier3_pages().len());
    println!("Tier 4 (curated outcomes):         {}", catalog.tier4_pages().len());

    let report = audit::audit(&catalog);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    println!(
        "Paths: {} total, {} resolved, {} missing",
        report.total, report.resolved, report.missing
    );
    for detail in report.details.iter().flatten() {
        error!(path = %detail.path, reason = %detail.reason, "unresolved path");
    }

    let unique = audit::uniqueness(&catalog);
    for (h1, slugs) in &unique.duplicate_h1 {
        error!(%h1, ?slugs, "duplicate h1");
    }
    for (intro, slugs) in &unique.duplicate_intro {
        error!(%intro, ?slugs, "duplicate intro");
    }

    if !report.ok || !unique.is_clean() {
        bail!(
            "pSEO audit failed: {} missing paths, {} duplicate h1 groups, {} duplicate intro groups",
            report.missing,
            unique.duplicate_h1.len(),
            unique.duplicate_intro.len()
        );
    }
    info!("pSEO audit passed");
    Ok(())
}
