use std::ops::Range;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::fetch::{fetch_page, run_bounded, DEFAULT_CONCURRENCY};
use crate::listing::parse_listing;
use crate::{Error, ListingCollector, Result, Vacancy};

pub const DJINNI_BASE_URL: &str = "https://djinni.co";

lazy_static! {
    static ref PAGE_LINK_SELECTOR: Selector = Selector::parse("a.page-link").unwrap();
    static ref POSTING_SELECTOR: Selector = Selector::parse("a.profile").unwrap();
    static ref DESCRIPTION_SELECTOR: Selector = Selector::parse("div.row-mobile-order-2").unwrap();
}

/// Which result pages get harvested once the page count is known.
///
/// The default requests pages `2..max`: the first page is only used to read
/// the page count and the last page is never requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagePolicy {
    /// Take the postings of the first page, which is fetched anyway
    pub include_first: bool,
    /// Request page `max` as well
    pub include_last: bool,
}

impl PagePolicy {
    /// Page numbers requested after the first page
    pub fn follow_up_pages(&self, max_page: u32) -> Range<u32> {
        let end = if self.include_last {
            max_page.saturating_add(1)
        } else {
            max_page
        };
        2..end.max(2)
    }
}

/// Collects djinni.co postings through numbered result pages
pub struct DjinniCollector {
    client: Client,
    base_url: String,
    concurrency: usize,
    pages: PagePolicy,
}

impl DjinniCollector {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: DJINNI_BASE_URL.to_owned(),
            concurrency: DEFAULT_CONCURRENCY,
            pages: PagePolicy::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_page_policy(mut self, pages: PagePolicy) -> Self {
        self.pages = pages;
        self
    }

    fn search_url(&self, category: &str) -> String {
        format!(
            "{}/jobs/keyword-{}/",
            self.base_url,
            urlencoding::encode(&category.to_lowercase())
        )
    }
}

/// Highest numeric label among the pagination links
fn max_page(html: &str) -> Option<u32> {
    let doc = Html::parse_document(html);
    let max = doc
        .select(&PAGE_LINK_SELECTOR)
        .filter_map(|el| el.text().collect::<String>().trim().parse::<u32>().ok())
        .max();
    max
}

#[async_trait]
impl ListingCollector for DjinniCollector {
    async fn collect(&self, category: &str, banned: &[String]) -> Result<Vec<Vacancy>> {
        let search_url = self.search_url(category);
        log::info!("launching djinni parser for {}", search_url);
        let first_page = fetch_page(&self.client, &search_url).await?;
        let max_page = max_page(&first_page).ok_or(Error::ContentNotFound("Pagination links"))?;
        log::info!("djinni reports {} result pages", max_page);

        let mut vacancies = Vec::new();
        if self.pages.include_first {
            vacancies.extend(parse_listing(
                &first_page,
                &POSTING_SELECTOR,
                Some(self.base_url.as_str()),
                banned,
            ));
        }

        let client = &self.client;
        let search_url = search_url.as_str();
        let pages = run_bounded(
            self.pages.follow_up_pages(max_page),
            self.concurrency,
            |page| async move {
                let url = format!("{}?page={}", search_url, page);
                let html = fetch_page(client, &url).await;
                (url, html)
            },
        )
        .await;

        let link_prefix = Some(self.base_url.as_str());
        for (url, html) in pages {
            match html {
                Ok(html) => {
                    let found = parse_listing(&html, &POSTING_SELECTOR, link_prefix, banned);
                    log::debug!("collected {} postings from {}", found.len(), url);
                    vacancies.extend(found);
                }
                Err(e) => log::warn!("skipping result page {}, error: {}", url, e),
            }
        }
        log::info!("collected {} djinni postings", vacancies.len());
        Ok(vacancies)
    }

    fn description_selector(&self) -> &Selector {
        &DESCRIPTION_SELECTOR
    }
}
