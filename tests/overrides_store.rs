use std::sync::Arc;

use silho_pseo::db;
use silho_pseo::model::PseoLandingOverride;
use silho_pseo::overrides::{
    fetch_or_none, ChainedOverrideSource, FileOverrideSource, NoOverrides, OverrideSource,
    SqliteOverrideSource,
};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::tempdir;

async fn setup_pool() -> sqlx::SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn row(slug: &str, h1: Option<&str>) -> PseoLandingOverride {
    PseoLandingOverride {
        slug: slug.to_string(),
        h1: h1.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn sqlite_source_reads_seeded_rows() {
    let pool = setup_pool().await;
    db::upsert_override(&pool, &row("repurpose-tweet-to-email", Some("From DB"))).await.unwrap();

    let source = SqliteOverrideSource::new(pool);
    let got = source.fetch("repurpose-tweet-to-email").await.unwrap().unwrap();
    assert_eq!(got.h1.as_deref(), Some("From DB"));
    assert!(source.fetch("repurpose-tweet-to-blog").await.unwrap().is_none());
}

#[tokio::test]
async fn file_source_reads_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scraped.json");
    std::fs::write(
        &path,
        r#"[{"slug": "repurpose-podcast-to-reddit", "h1": "From file", "intro": null},
            {"slug": "repurpose-webinar-to-email"}]"#,
    )
    .unwrap();

    let source = FileOverrideSource::new(&path);
    let got = source.fetch("repurpose-podcast-to-reddit").await.unwrap().unwrap();
    assert_eq!(got.h1.as_deref(), Some("From file"));
    assert!(got.intro.is_none());
    let empty = source.fetch("repurpose-webinar-to-email").await.unwrap().unwrap();
    assert!(!empty.has_content());
    assert!(source.fetch("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn missing_file_is_an_error_but_fetch_or_none_fails_open() {
    let dir = tempdir().unwrap();
    let source = FileOverrideSource::new(dir.path().join("absent.json"));
    assert!(source.fetch("anything").await.is_err());
    assert!(fetch_or_none(&source, "anything").await.is_none());
}

#[tokio::test]
async fn chain_prefers_database_then_file() {
    let pool = setup_pool().await;
    db::upsert_overrides(
        &pool,
        &[
            row("repurpose-blog-post-to-twitter", Some("DB wins")),
            row("repurpose-blog-post-to-reddit", None),
        ],
    )
    .await
    .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("scraped.json");
    let file_rows = vec![
        row("repurpose-blog-post-to-twitter", Some("file loses")),
        row("repurpose-blog-post-to-reddit", Some("file fills the gap")),
    ];
    std::fs::write(&path, serde_json::to_string(&file_rows).unwrap()).unwrap();

    let chain = ChainedOverrideSource::new(vec![
        Arc::new(SqliteOverrideSource::new(pool)),
        Arc::new(FileOverrideSource::new(&path)),
    ]);
    assert!(!chain.is_empty());

    let got = chain.fetch("repurpose-blog-post-to-twitter").await.unwrap().unwrap();
    assert_eq!(got.h1.as_deref(), Some("DB wins"));
    // An all-null database row does not shadow the file.
    let got = chain.fetch("repurpose-blog-post-to-reddit").await.unwrap().unwrap();
    assert_eq!(got.h1.as_deref(), Some("file fills the gap"));
    assert!(chain.fetch("repurpose-blog-post-to-email").await.unwrap().is_none());
}

#[tokio::test]
async fn chain_skips_failing_sources() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.json");
    std::fs::write(&good, r#"[{"slug": "s", "best_for": "Founders"}]"#).unwrap();

    let chain = ChainedOverrideSource::new(vec![
        Arc::new(FileOverrideSource::new(dir.path().join("absent.json"))),
        Arc::new(NoOverrides),
        Arc::new(FileOverrideSource::new(&good)),
    ]);
    let got = chain.fetch("s").await.unwrap().unwrap();
    assert_eq!(got.best_for.as_deref(), Some("Founders"));
}

#[tokio::test]
async fn chain_judges_rows_after_sanitizing() {
    let pool = setup_pool().await;
    db::upsert_override(&pool, &row("repurpose-podcast-to-linkedin", Some("KAPWING")))
        .await
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("scraped.json");
    let intro = "Scraped intro that easily clears the sixty character minimum length.";
    let file_row = PseoLandingOverride {
        intro: Some(format!("  {intro}  ")),
        ..row("repurpose-podcast-to-linkedin", None)
    };
    std::fs::write(&path, serde_json::to_string(&[file_row]).unwrap()).unwrap();

    let chain = ChainedOverrideSource::new(vec![
        Arc::new(SqliteOverrideSource::new(pool)),
        Arc::new(FileOverrideSource::new(&path)),
    ]);
    // The database row only carries a denylisted h1, so the file answers.
    let got = chain.fetch("repurpose-podcast-to-linkedin").await.unwrap().unwrap();
    assert!(got.h1.is_none());
    assert_eq!(got.intro.as_deref(), Some(intro));
}
