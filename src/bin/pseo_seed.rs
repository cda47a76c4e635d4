use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use silho_pseo::model::PseoLandingOverride;
use silho_pseo::pseo::Catalog;
use silho_pseo::{config, db};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Export generated Tier 1/2 copy as override rows and optionally seed the override table"
)]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Fetch rows from a running server's /api/pseo-export instead of the
    /// in-process catalog
    #[arg(long, value_name = "BASE_URL")]
    from: Option<String>,

    /// Where to write the rows as a JSON array
    #[arg(long, default_value = "pseo-landing-content.json")]
    out: PathBuf,

    /// Upsert the rows into the override table
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let rows = match &args.from {
        Some(base_url) => fetch_export(base_url).await?,
        None => Catalog::build().export_rows(),
    };
    info!(rows = rows.len(), "collected export rows");

    let json = serde_json::to_string_pretty(&rows)?;
    tokio::fs::write(&args.out, json)
        .await
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    println!("Wrote {} rows to {}", rows.len(), args.out.display());

    if args.seed {
        let cfg = config::load(Some(&args.config))?;
        cfg.ensure_dirs()?;
        let pool = db::init_pool(&cfg.database_url()).await?;
        db::run_migrations(&pool).await?;

        let written = db::upsert_overrides(&pool, &rows).await?;
        let total = db::count_overrides(&pool).await?;
        println!("Upserted {written} rows; override table now holds {total}");
    }

    Ok(())
}

async fn fetch_export(base_url: &str) -> Result<Vec<PseoLandingOverride>> {
    let url = format!("{}/api/pseo-export", base_url.trim_end_matches('/'));
    let http = reqwest::Client::builder()
        .user_agent("silho-pseo/pseo-seed")
        .build()?;
    let res = http
        .get(&url)
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?;
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        return Err(anyhow!("export request failed {}: {}", status, text));
    }
    Ok(res.json::<Vec<PseoLandingOverride>>().await?)
}
