use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Scraping failed: {0}")]
    Scraper(#[from] job_scraper::Error),
    #[error("Skill analysis failed: {0}")]
    Analyzer(#[from] skill_analyzer::Error),
    #[error("Saving results failed: {0}")]
    Persistence(#[from] persistence::Error),
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),
}
