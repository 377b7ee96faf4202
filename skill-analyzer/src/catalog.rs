use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;

use crate::api::{Error, Result};

/// Curated list of python frameworks and libraries, its link labels become skills
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/vinta/awesome-python/master/README.md";
pub const DEFAULT_CACHE_FILE: &str = "raw_technologies_source.txt";

/// Keywords searched for regardless of the downloaded catalog
const SEED_SKILLS: &[&str] = &[
    "SQL",
    "NoSQL",
    "Git",
    "Bash",
    "Django",
    "Flask",
    "FastAPI",
    "PostgreSQL",
    "Docker",
    "Linux",
    "REST API",
    "Redis",
    "JSON",
    "JavaScript",
    "Celery",
    "MySQL",
    "Rest Framework",
    "AWS",
    "Jira",
    "API",
    "REST",
    "HTML",
    "CSS",
    "asyncio",
    "OOP",
    "scraping",
    "regex",
    "React",
    "Angular",
    "Node.js",
    "Unix",
    "Heroku",
    "Odoo",
    "Azure",
    "PEP",
    "SQLAlchemy",
    "nginx",
    "SQLite",
    "TCP",
    "Kafka",
    "Pytest",
];

/// Skill names, matched case-insensitively but displayed as written
pub type SkillCatalog = BTreeSet<String>;

pub fn seed_skills() -> SkillCatalog {
    SEED_SKILLS.iter().map(|s| s.to_string()).collect()
}

/// Labels of all markdown links pointing to an http(s) url
pub fn parse_catalog(markdown: &str) -> SkillCatalog {
    lazy_static! {
        static ref LINK_LABEL: Regex = Regex::new(r"\[([^\]]*)\]\(http").unwrap();
    }
    LINK_LABEL
        .captures_iter(markdown)
        .filter_map(|caps| caps.get(1))
        .map(|label| label.as_str())
        .filter(|label| !label.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Seed skills plus the labels of the catalog document.
///
/// The document is read from `cache_path`. Only when that file does not
/// exist it is downloaded from `source_url` and written there, an existing
/// cache is never refreshed.
pub async fn load_catalog(
    client: &Client,
    cache_path: &Path,
    source_url: &str,
) -> Result<SkillCatalog> {
    let markdown = match tokio::fs::read_to_string(cache_path).await {
        Ok(markdown) => {
            log::debug!("using cached skill catalog {}", cache_path.display());
            markdown
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!(
                "no cached skill catalog at {}, downloading {}",
                cache_path.display(),
                source_url
            );
            let markdown = download(client, source_url).await?;
            tokio::fs::write(cache_path, &markdown).await?;
            markdown
        }
        Err(e) => return Err(e.into()),
    };

    let mut catalog = seed_skills();
    catalog.extend(parse_catalog(&markdown));
    log::info!("skill catalog contains {} entries", catalog.len());
    Ok(catalog)
}

async fn download(client: &Client, url: &str) -> Result<String> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        log::error!(
            "failed to download skill catalog from {}, status: {}",
            url,
            resp.status()
        );
        return Err(Error::RequestNotOk(url.to_owned()));
    }
    Ok(resp.text().await?)
}
