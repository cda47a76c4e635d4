//! Configuration loader and validator for the pSEO server and tools.
use crate::pseo::sitemap::ChangeFrequency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub app: App,
    #[serde(default)]
    pub overrides: Overrides,
    #[serde(default)]
    pub sitemap: Sitemap,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    pub data_dir: String,
    /// Socket address the HTTP server listens on.
    pub bind: String,
    /// Public origin used for canonical URLs, the sitemap and robots.txt.
    pub base_url: String,
}

/// Where curated landing overrides are read from. Both are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Overrides {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub scraped_file: Option<String>,
}

/// Crawl hints for pSEO entries in sitemap.xml.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sitemap {
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl Default for Sitemap {
    fn default() -> Self {
        Self {
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        }
    }
}

impl Config {
    /// Ensure required directories exist (creates `app.data_dir` if missing).
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        if self.app.data_dir.trim().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.app.data_dir)
    }

    /// `base_url` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.app.base_url.trim_end_matches('/')
    }

    /// `DATABASE_URL` wins, then `overrides.database_url`, then a SQLite file
    /// in the data directory.
    pub fn database_url(&self) -> String {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                return url;
            }
        }
        match &self.overrides.database_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!(
                "sqlite://{}",
                Path::new(&self.app.data_dir).join("pseo.db").display()
            ),
        }
    }

    pub fn scraped_file(&self) -> Option<PathBuf> {
        self.overrides
            .scraped_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.data_dir.trim().is_empty() {
        return Err(ConfigError::Invalid("app.data_dir must be non-empty"));
    }
    if cfg.app.bind.parse::<std::net::SocketAddr>().is_err() {
        return Err(ConfigError::Invalid("app.bind must be a socket address like 127.0.0.1:8080"));
    }
    let base = cfg.app.base_url.trim();
    let has_host = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .is_some_and(|rest| !rest.trim_matches('/').is_empty());
    if !has_host {
        return Err(ConfigError::Invalid("app.base_url must be an absolute http(s) URL"));
    }

    if !(0.0..=1.0).contains(&cfg.sitemap.priority) {
        return Err(ConfigError::Invalid("sitemap.priority must be between 0.0 and 1.0"));
    }

    Ok(())
}

/// Returns the canonical example configuration.
pub fn example() -> &'static str {
    r#"app:
  data_dir: "./data"
  bind: "127.0.0.1:8080"
  base_url: "http://localhost:3000"

overrides:
  # DATABASE_URL takes precedence when set.
  database_url: "sqlite://./data/pseo.db"
  scraped_file: "./pseo-landing-content-scraped.json"

sitemap:
  change_frequency: monthly
  priority: 0.7
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn example_config() -> Config {
        serde_yaml::from_str(example()).unwrap()
    }

    #[test]
    fn parse_example_ok() {
        let cfg = example_config();
        validate(&cfg).unwrap();
        assert_eq!(cfg.sitemap.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(cfg.scraped_file(), Some(PathBuf::from("./pseo-landing-content-scraped.json")));
    }

    #[test]
    fn overrides_and_sitemap_sections_are_optional() {
        let cfg: Config = serde_yaml::from_str(
            "app:\n  data_dir: d\n  bind: \"0.0.0.0:80\"\n  base_url: \"https://silho.ai/\"\n",
        )
        .unwrap();
        validate(&cfg).unwrap();
        assert_eq!(cfg.overrides, Overrides::default());
        assert_eq!(cfg.sitemap, Sitemap::default());
        assert_eq!(cfg.base_url(), "https://silho.ai");
        assert!(cfg.scraped_file().is_none());
    }

    #[test]
    fn invalid_bind() {
        let mut cfg = example_config();
        cfg.app.bind = "localhost".into();
        let err = validate(&cfg).unwrap_err();
        match err { ConfigError::Invalid(msg) => assert!(msg.contains("app.bind")), _ => panic!("wrong error") }
    }

    #[test]
    fn invalid_base_url() {
        for bad in ["", "silho.ai", "ftp://silho.ai", "https://"] {
            let mut cfg = example_config();
            cfg.app.base_url = bad.into();
            let err = validate(&cfg).unwrap_err();
            match err { ConfigError::Invalid(msg) => assert!(msg.contains("app.base_url")), _ => panic!("wrong error") }
        }
    }

    #[test]
    fn invalid_priority_and_frequency() {
        let mut cfg = example_config();
        cfg.sitemap.priority = 1.5;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(msg)) if msg.contains("sitemap.priority")));

        let yaml = example().replace("change_frequency: monthly", "change_frequency: fortnightly");
        assert!(serde_yaml::from_str::<Config>(&yaml).is_err());
    }

    #[test]
    fn ensure_dirs_creates_data_dir() {
        let td = tempdir().unwrap();
        let data_path = td.path().join("data");
        let mut cfg = example_config();
        cfg.app.data_dir = data_path.to_string_lossy().to_string();
        cfg.ensure_dirs().unwrap();
        assert!(data_path.exists());
    }

    #[test]
    fn load_from_file_ok() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.yaml");
        fs::write(&p, example()).unwrap();
        let cfg = load(Some(&p)).unwrap();
        assert_eq!(cfg.app.bind, "127.0.0.1:8080");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let td = tempdir().unwrap();
        let err = load(Some(&td.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
