//! Where curated landing overrides come from.
//!
//! Sources are read-only and fail open: a lookup error is logged and treated
//! as "no override" so a page always renders from generated copy.

use crate::config::Config;
use crate::db::{self, Pool};
use crate::model::PseoLandingOverride;
use crate::pseo::merge;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[async_trait]
pub trait OverrideSource: Send + Sync {
    async fn fetch(&self, slug: &str) -> Result<Option<PseoLandingOverride>>;
}

/// No overrides at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

#[async_trait]
impl OverrideSource for NoOverrides {
    async fn fetch(&self, _slug: &str) -> Result<Option<PseoLandingOverride>> {
        Ok(None)
    }
}

/// Rows of the `pseo_landing_content` table.
#[derive(Debug, Clone)]
pub struct SqliteOverrideSource {
    pool: Pool,
}

impl SqliteOverrideSource {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OverrideSource for SqliteOverrideSource {
    async fn fetch(&self, slug: &str) -> Result<Option<PseoLandingOverride>> {
        db::fetch_override(&self.pool, slug).await
    }
}

/// A JSON array of override rows on disk. The file is read on every lookup so
/// edits show up without a restart.
#[derive(Debug, Clone)]
pub struct FileOverrideSource {
    path: PathBuf,
}

impl FileOverrideSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OverrideSource for FileOverrideSource {
    async fn fetch(&self, slug: &str) -> Result<Option<PseoLandingOverride>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let rows: Vec<PseoLandingOverride> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid override file {}", self.path.display()))?;
        Ok(rows.into_iter().find(|r| r.slug == slug))
    }
}

/// Ask each source in order; the first row with usable content after
/// [`merge::sanitize`] wins and is returned sanitized. A failing source is
/// skipped.
#[derive(Clone, Default)]
pub struct ChainedOverrideSource {
    sources: Vec<Arc<dyn OverrideSource>>,
}

impl ChainedOverrideSource {
    pub fn new(sources: Vec<Arc<dyn OverrideSource>>) -> Self {
        Self { sources }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[async_trait]
impl OverrideSource for ChainedOverrideSource {
    async fn fetch(&self, slug: &str) -> Result<Option<PseoLandingOverride>> {
        for source in &self.sources {
            match source.fetch(slug).await {
                Ok(Some(row)) => {
                    if let Some(clean) = merge::sanitize(&row) {
                        return Ok(Some(clean));
                    }
                    debug!(slug, "override row has nothing usable; trying next source");
                }
                Ok(None) => {}
                Err(err) => warn!(slug, error = %format!("{err:#}"), "override source failed"),
            }
        }
        Ok(None)
    }
}

/// Fetch an override, mapping any failure to `None`.
pub async fn fetch_or_none(source: &dyn OverrideSource, slug: &str) -> Option<PseoLandingOverride> {
    match source.fetch(slug).await {
        Ok(row) => {
            debug!(slug, found = row.is_some(), "override lookup");
            row
        }
        Err(err) => {
            warn!(slug, error = %format!("{err:#}"), "override lookup failed; using generated copy");
            None
        }
    }
}

/// Database first, then the scraped file. A database that cannot be opened is
/// logged and left out of the chain.
pub async fn from_config(cfg: &Config) -> Arc<dyn OverrideSource> {
    let mut sources: Vec<Arc<dyn OverrideSource>> = Vec::new();

    let database_url = cfg.database_url();
    match open_database(&database_url).await {
        Ok(pool) => {
            info!(%database_url, "override table enabled");
            sources.push(Arc::new(SqliteOverrideSource::new(pool)));
        }
        Err(err) => warn!(%database_url, error = %format!("{err:#}"), "override table unavailable"),
    }

    if let Some(path) = cfg.scraped_file() {
        info!(path = %path.display(), "override file enabled");
        sources.push(Arc::new(FileOverrideSource::new(path)));
    }

    if sources.is_empty() {
        Arc::new(NoOverrides)
    } else {
        Arc::new(ChainedOverrideSource::new(sources))
    }
}

async fn open_database(url: &str) -> Result<Pool> {
    let pool = db::init_pool(url).await?;
    db::run_migrations(&pool).await?;
    Ok(pool)
}
