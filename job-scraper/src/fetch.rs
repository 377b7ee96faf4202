use std::future::Future;

use futures::{stream, StreamExt};
use reqwest::{header::USER_AGENT, Client};
use scraper::{Html, Selector};

use crate::{Error, Result, Vacancy};

/// Maximum number of requests in flight, for listing pages and descriptions alike
pub const DEFAULT_CONCURRENCY: usize = 15;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Run `op` for every item with at most `limit` operations in flight.
///
/// Every operation is driven to completion, a failing one does not cancel
/// the others, so errors have to be part of the output type.
/// Results come back in completion order. A limit of 0 is treated as 1.
pub async fn run_bounded<I, F, Fut>(items: I, limit: usize, op: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(op)
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}

/// GET a page with a browser-like user agent and return its body
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    log::debug!("GET {}", url);
    let resp = client
        .get(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await?;
    if !resp.status().is_success() {
        log::debug!("request to {} returned status {}", url, resp.status());
        return Err(Error::RequestNotOk(url.to_owned()));
    }
    Ok(resp.text().await?)
}

/// Text content of the first element matching `selector`
pub fn extract_text(html: &str, selector: &Selector) -> Option<String> {
    let doc = Html::parse_document(html);
    let text = doc
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned());
    text
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched { description: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub link: String,
    pub reason: String,
}

/// Summary of a description batch, failures keep the link they belong to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    pub requested: usize,
    pub fetched: usize,
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

pub async fn fetch_description(client: &Client, url: &str, selector: &Selector) -> FetchOutcome {
    let description = fetch_page(client, url).await.and_then(|html| {
        extract_text(&html, selector).ok_or(Error::ContentNotFound("Vacancy description"))
    });
    match description {
        Ok(description) => FetchOutcome::Fetched { description },
        Err(e) => FetchOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

/// Download the description of every vacancy, `limit` pages at a time.
///
/// The returned vacancies keep their input order. A vacancy whose page
/// could not be fetched or has no element matching `selector` keeps an
/// empty description and is listed in the report.
pub async fn fetch_descriptions(
    client: &Client,
    mut vacancies: Vec<Vacancy>,
    selector: &Selector,
    limit: usize,
) -> (Vec<Vacancy>, FetchReport) {
    let links = vacancies
        .iter()
        .enumerate()
        .map(|(index, vacancy)| (index, vacancy.link.clone()))
        .collect::<Vec<_>>();
    let outcomes = run_bounded(links, limit, |(index, link)| async move {
        let outcome = fetch_description(client, &link, selector).await;
        (index, link, outcome)
    })
    .await;

    let mut report = FetchReport {
        requested: vacancies.len(),
        ..Default::default()
    };
    for (index, link, outcome) in outcomes {
        match outcome {
            FetchOutcome::Fetched { description } => {
                log::debug!("scraped description for {}", link);
                vacancies[index].description = Some(description);
                report.fetched += 1;
            }
            FetchOutcome::Failed { reason } => {
                log::error!(
                    "failed to scrape description for url: {}, error: {}",
                    link,
                    reason
                );
                report.failures.push(FetchFailure { link, reason });
            }
        }
    }
    (vacancies, report)
}
