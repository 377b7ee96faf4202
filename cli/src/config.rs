use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Args;
use job_scraper::djinni::PagePolicy;
use job_scraper::dou::DEFAULT_WEBDRIVER_URL;
use job_scraper::fetch::DEFAULT_CONCURRENCY;
use skill_analyzer::catalog::{DEFAULT_CACHE_FILE, DEFAULT_SOURCE_URL};

pub const DEFAULT_BANNED: [&str; 7] = [
    "Senior",
    "Lead",
    "QA",
    "Automation",
    "Data",
    "Data Engineer",
    "DevOps",
];

/// Settings shared by all commands, each can also be set through the environment or `.env`
#[derive(Args, Debug)]
pub struct Settings {
    /// Technology to search vacancies for
    #[arg(long, env = "JOB_CATEGORY", default_value = "Python")]
    pub category: String,

    /// Skip postings whose title contains this text, can be repeated
    #[arg(long = "banned", value_name = "KEYWORD", default_values = DEFAULT_BANNED)]
    pub banned: Vec<String>,

    /// Maximum number of concurrent requests
    #[arg(long, env = "SCRAPER_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// WebDriver server used to browse dou.ua
    #[arg(long, env = "WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Local copy of the skill catalog, downloaded when missing
    #[arg(long, env = "SKILLS_CACHE_FILE", default_value = DEFAULT_CACHE_FILE)]
    pub skills_cache: PathBuf,

    #[arg(long, env = "SKILLS_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub skills_source: String,

    #[arg(long, env = "VACANCIES_FILE", default_value = "relevant_jobs.json")]
    pub vacancies_file: PathBuf,

    #[arg(long, env = "RESULTS_FILE", default_value = "results.json")]
    pub results_file: PathBuf,

    /// Also harvest the first djinni result page
    #[arg(long, env = "INCLUDE_FIRST_PAGE", value_parser = FalseyValueParser::new())]
    pub include_first_page: bool,

    /// Also request the last djinni result page
    #[arg(long, env = "INCLUDE_LAST_PAGE", value_parser = FalseyValueParser::new())]
    pub include_last_page: bool,
}

impl Settings {
    pub fn page_policy(&self) -> PagePolicy {
        PagePolicy {
            include_first: self.include_first_page,
            include_last: self.include_last_page,
        }
    }
}
