pub mod api;
pub mod djinni;
pub mod dou;
pub mod fetch;
pub mod listing;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use api::{Error, ListingCollector, Result};

/// One scraped job posting
///
/// The link identifies the posting, duplicates are kept as separate entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub job_title: String,
    pub link: String,
    /// Filled in by the description fetch, stays empty when the page could not be scraped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Vacancy {
    pub fn new(job_title: String, link: String) -> Self {
        Self {
            job_title,
            link,
            description: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Dou,
    Djinni,
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "dou" | "dou.ua" => Ok(Source::Dou),
            "2" | "djinni" | "djinni.co" => Ok(Source::Djinni),
            other => Err(Error::UnknownSource(other.to_owned())),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Dou => write!(f, "dou.ua"),
            Source::Djinni => write!(f, "djinni.co"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_source_from_menu_choice_and_name() {
        assert_eq!("1".parse::<Source>().unwrap(), Source::Dou);
        assert_eq!("Djinni".parse::<Source>().unwrap(), Source::Djinni);
        assert_eq!(" dou.ua \n".parse::<Source>().unwrap(), Source::Dou);
        assert!(matches!(
            "3".parse::<Source>(),
            Err(Error::UnknownSource(s)) if s == "3"
        ));
    }

    #[test]
    fn test_missing_description_is_omitted_from_json() {
        let vacancy = Vacancy::new("Python Dev".to_owned(), "https://a/1".to_owned());
        let json = serde_json::to_value(&vacancy).unwrap();
        assert!(json.get("description").is_none());

        let parsed: Vacancy =
            serde_json::from_str(r#"{"job_title": "Python Dev", "link": "https://a/1"}"#).unwrap();
        assert_eq!(parsed, vacancy);
    }
}
