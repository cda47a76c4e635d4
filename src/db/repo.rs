use crate::model::PseoLandingOverride;
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::instrument;

pub type Pool = SqlitePool;

pub async fn init_pool(database_url: &str) -> Result<Pool> {
    let normalized = prepare_sqlite_url(database_url);
    let pool = SqlitePool::connect(&normalized)
        .await
        .with_context(|| format!("failed to open database {normalized}"))?;
    sqlx::query("PRAGMA journal_mode=WAL;")
        .execute(&pool)
        .await?;
    Ok(pool)
}

/// Expand a leading `~/` in a file-backed SQLite URL, create its parent
/// directory and ask SQLite to create the file. In-memory and non-sqlite URLs
/// pass through untouched.
fn prepare_sqlite_url(url: &str) -> String {
    let Some(rest) = url.strip_prefix("sqlite:") else {
        return url.to_string();
    };
    if rest.starts_with(":memory") {
        return url.to_string();
    }

    let path_with_query = rest.strip_prefix("//").unwrap_or(rest);
    let (path_part, query_part) = match path_with_query.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_with_query, None),
    };
    if path_part.is_empty() {
        return url.to_string();
    }

    let expanded_path = match (path_part.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{}/{}", home.trim_end_matches('/'), rest),
        _ => path_part.to_string(),
    };

    if let Some(parent) = std::path::Path::new(&expanded_path).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let query = query_part.unwrap_or("mode=rwc");
    format!("sqlite://{expanded_path}?{query}")
}

pub async fn run_migrations(pool: &Pool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[instrument(skip(pool))]
pub async fn fetch_override(pool: &Pool, slug: &str) -> Result<Option<PseoLandingOverride>> {
    let row = sqlx::query_as::<_, PseoLandingOverride>(
        "SELECT slug, h1, intro, meta_description, why_manual_fails, how_we_solve, example_snippet, best_for \
         FROM pseo_landing_content WHERE slug = ?",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

#[instrument(skip_all, fields(slug = %row.slug))]
pub async fn upsert_override(pool: &Pool, row: &PseoLandingOverride) -> Result<()> {
    upsert_overrides(pool, std::slice::from_ref(row)).await?;
    Ok(())
}

/// Upsert every row in one transaction. Returns the number of rows written.
#[instrument(skip_all, fields(rows = rows.len()))]
pub async fn upsert_overrides(pool: &Pool, rows: &[PseoLandingOverride]) -> Result<usize> {
    let mut tx = pool.begin().await?;
    for row in rows {
        sqlx::query(
            "INSERT INTO pseo_landing_content \
               (slug, h1, intro, meta_description, why_manual_fails, how_we_solve, example_snippet, best_for) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(slug) DO UPDATE SET \
               h1 = excluded.h1, \
               intro = excluded.intro, \
               meta_description = excluded.meta_description, \
               why_manual_fails = excluded.why_manual_fails, \
               how_we_solve = excluded.how_we_solve, \
               example_snippet = excluded.example_snippet, \
               best_for = excluded.best_for, \
               updated_at = strftime('%Y-%m-%dT%H:%M:%SZ', 'now')",
        )
        .bind(&row.slug)
        .bind(&row.h1)
        .bind(&row.intro)
        .bind(&row.meta_description)
        .bind(&row.why_manual_fails)
        .bind(&row.how_we_solve)
        .bind(&row.example_snippet)
        .bind(&row.best_for)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("failed to upsert {}", row.slug))?;
    }
    tx.commit().await?;
    Ok(rows.len())
}

#[instrument(skip_all)]
pub async fn count_overrides(pool: &Pool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pseo_landing_content")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_pool() -> Pool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn upsert_then_fetch_keeps_nulls() {
        let pool = setup_pool().await;
        assert!(fetch_override(&pool, "repurpose-tweet-to-reddit").await.unwrap().is_none());

        let row = PseoLandingOverride {
            slug: "repurpose-tweet-to-reddit".into(),
            h1: Some("Tweets that work on Reddit".into()),
            ..Default::default()
        };
        upsert_override(&pool, &row).await.unwrap();
        let got = fetch_override(&pool, &row.slug).await.unwrap().unwrap();
        assert_eq!(got, row);

        let updated = PseoLandingOverride {
            intro: Some("new intro".into()),
            ..row.clone()
        };
        upsert_override(&pool, &updated).await.unwrap();
        assert_eq!(fetch_override(&pool, &row.slug).await.unwrap().unwrap(), updated);
        assert_eq!(count_overrides(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn bulk_upsert_is_idempotent() {
        let pool = setup_pool().await;
        let rows: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|s| PseoLandingOverride {
                slug: s.to_string(),
                best_for: Some("everyone".into()),
                ..Default::default()
            })
            .collect();
        assert_eq!(upsert_overrides(&pool, &rows).await.unwrap(), 3);
        assert_eq!(upsert_overrides(&pool, &rows).await.unwrap(), 3);
        assert_eq!(count_overrides(&pool).await.unwrap(), 3);
    }

    #[test]
    fn sqlite_url_normalisation() {
        assert_eq!(prepare_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(prepare_sqlite_url("postgres://x"), "postgres://x");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/pseo.db");
        let url = prepare_sqlite_url(&format!("sqlite://{}", path.display()));
        assert_eq!(url, format!("sqlite://{}?mode=rwc", path.display()));
        assert!(path.parent().unwrap().is_dir());
    }
}
