use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use silho_pseo::model::RepurposeTier;
use silho_pseo::pseo::Catalog;
use silho_pseo::{build_router, config, overrides, AppState};

#[derive(Debug, Parser)]
#[command(author, version, about = "Serve the pSEO landing pages as JSON")]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;
    cfg.ensure_dirs()?;

    let catalog = Arc::new(Catalog::build());
    info!(
        tier1 = catalog.count_tier(RepurposeTier::SourceToTarget),
        tier2 = catalog.count_tier(RepurposeTier::SourceToTargetForPersona),
        tier3 = catalog.tier3_pages().len(),
        tier4 = catalog.tier4_pages().len(),
        "catalog built"
    );

    let overrides = overrides::from_config(&cfg).await;
    let state = AppState::new(catalog, overrides, cfg.base_url()).with_sitemap(&cfg.sitemap);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.app.bind)
        .await
        .with_context(|| format!("failed to bind {}", cfg.app.bind))?;
    info!(bind = %cfg.app.bind, base_url = cfg.base_url(), "serving pSEO pages");
    axum::serve(listener, app).await?;

    Ok(())
}
