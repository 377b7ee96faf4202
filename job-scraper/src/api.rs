use async_trait::async_trait;
use scraper::Selector;
use thiserror::Error;
use thirtyfour::error::WebDriverError;

use crate::Vacancy;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{0}'")]
    RequestNotOk(String),
    #[error("Browser session error: '{0}'")]
    Browser(#[from] WebDriverError),
    #[error("Content not found in html: '{0}'")]
    ContentNotFound(&'static str),
    #[error("Unknown job site: '{0}'")]
    UnknownSource(String),
}

/// A job board that can list vacancies for a technology category.
///
/// Implementations only collect titles and links, descriptions are
/// downloaded afterwards by [`crate::fetch::fetch_descriptions`] using
/// the selector returned by [`ListingCollector::description_selector`].
#[async_trait]
pub trait ListingCollector: Send + Sync {
    /// Collect every posting for `category` whose title contains none of the `banned` substrings
    async fn collect(&self, category: &str, banned: &[String]) -> Result<Vec<Vacancy>>;

    /// Selector of the element holding the description on a vacancy page
    fn description_selector(&self) -> &Selector;
}
