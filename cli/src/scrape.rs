use job_scraper::djinni::DjinniCollector;
use job_scraper::dou::DouCollector;
use job_scraper::fetch::fetch_descriptions;
use job_scraper::{ListingCollector, Source, Vacancy};
use reqwest::Client;

use crate::config::Settings;
use crate::error::Result;

fn collector(client: &Client, site: Source, settings: &Settings) -> Box<dyn ListingCollector> {
    match site {
        Source::Dou => Box::new(DouCollector::new(settings.webdriver_url.as_str())),
        Source::Djinni => Box::new(
            DjinniCollector::new(client.clone())
                .with_concurrency(settings.concurrency)
                .with_page_policy(settings.page_policy()),
        ),
    }
}

/// Collect the vacancy links of `site`, download their descriptions and save them
pub async fn scrape(client: &Client, site: Source, settings: &Settings) -> Result<Vec<Vacancy>> {
    let collector = collector(client, site, settings);
    log::info!("collecting {} vacancies from {}", settings.category, site);
    let listings = collector
        .collect(&settings.category, &settings.banned)
        .await?;
    log::info!(
        "collected {} links, downloading descriptions with {} concurrent requests",
        listings.len(),
        settings.concurrency
    );

    let (vacancies, report) = fetch_descriptions(
        client,
        listings,
        collector.description_selector(),
        settings.concurrency,
    )
    .await;
    log::info!(
        "downloaded {} of {} descriptions, {} failed",
        report.fetched,
        report.requested,
        report.failed()
    );

    persistence::save_vacancies(&settings.vacancies_file, &vacancies).await?;
    Ok(vacancies)
}
