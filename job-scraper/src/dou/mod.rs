use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use scraper::Selector;
use thirtyfour::prelude::*;
use tokio::time::sleep;

use crate::listing::parse_listing;
use crate::{ListingCollector, Result, Vacancy};

pub const DOU_BASE_URL: &str = "https://jobs.dou.ua";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Label of the link that appends the next batch of vacancies
const MORE_BUTTON_TEXT: &str = "Більше вакансій";
const CLICK_DELAY: Duration = Duration::from_millis(500);

lazy_static! {
    static ref POSTING_SELECTOR: Selector = Selector::parse("a.vt").unwrap();
    static ref DESCRIPTION_SELECTOR: Selector = Selector::parse("div.vacancy-section").unwrap();
}

/// Collects dou.ua postings from the "load more" search page.
///
/// The page only renders further results after clicking, so this drives a
/// headless Chrome through a WebDriver server (e.g. chromedriver).
pub struct DouCollector {
    webdriver_url: String,
    base_url: String,
    click_delay: Duration,
}

impl DouCollector {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            base_url: DOU_BASE_URL.to_owned(),
            click_delay: CLICK_DELAY,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    fn search_url(&self, category: &str) -> String {
        format!(
            "{}/vacancies/?category={}",
            self.base_url,
            urlencoding::encode(&category.to_lowercase())
        )
    }

    /// Click "more vacancies" until the link is gone, then return the page source
    async fn expand_results(&self, driver: &WebDriver, url: &str) -> Result<String> {
        driver.goto(url).await?;
        let mut clicks = 0;
        loop {
            let buttons = driver.find_all(By::LinkText(MORE_BUTTON_TEXT)).await?;
            let more_button = match buttons.into_iter().next() {
                Some(button) => button,
                None => break,
            };
            if !more_button.is_displayed().await? {
                break;
            }
            more_button.click().await?;
            clicks += 1;
            log::debug!("clicked \"more vacancies\" {} times", clicks);
            sleep(self.click_delay).await;
        }
        log::info!("expanded dou results after {} clicks", clicks);
        Ok(driver.source().await?)
    }
}

/// Postings of a fully expanded dou.ua search page
pub fn parse_vacancies(html: &str, banned: &[String]) -> Vec<Vacancy> {
    parse_listing(html, &POSTING_SELECTOR, None, banned)
}

#[async_trait]
impl ListingCollector for DouCollector {
    async fn collect(&self, category: &str, banned: &[String]) -> Result<Vec<Vacancy>> {
        let url = self.search_url(category);
        log::info!("opening browser session at {} for {}", self.webdriver_url, url);
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;
        let driver = WebDriver::new(&self.webdriver_url, caps).await?;

        let html = self.expand_results(&driver, &url).await;
        if let Err(e) = driver.quit().await {
            log::warn!("failed to close browser session: {}", e);
        }
        let vacancies = parse_vacancies(&html?, banned);
        log::info!("collected {} dou postings", vacancies.len());
        Ok(vacancies)
    }

    fn description_selector(&self) -> &Selector {
        &DESCRIPTION_SELECTOR
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_search_url() {
        let collector = DouCollector::new(DEFAULT_WEBDRIVER_URL);
        assert_eq!(
            collector.search_url("Python"),
            "https://jobs.dou.ua/vacancies/?category=python"
        );
        let collector = collector.with_base_url("http://localhost:8080/");
        assert_eq!(
            collector.search_url("Front End"),
            "http://localhost:8080/vacancies/?category=front%20end"
        );
    }

    #[test]
    fn test_parse_expanded_page() {
        let html = r#"
            <ul class="lt">
              <li class="l-vacancy">
                <div class="title">
                  <a class="vt" href="https://jobs.dou.ua/companies/acme/vacancies/1/">Python Developer</a>
                  <strong>at <a class="company" href="https://jobs.dou.ua/companies/acme/">Acme</a></strong>
                </div>
              </li>
              <li class="l-vacancy">
                <div class="title">
                  <a class="vt" href="https://jobs.dou.ua/companies/acme/vacancies/2/">Lead Python Engineer</a>
                </div>
              </li>
              <li class="l-vacancy">
                <div class="title">
                  <a class="vt" href="https://jobs.dou.ua/companies/initech/vacancies/3/">Middle Python/Django Developer</a>
                </div>
              </li>
            </ul>
            <div class="more-btn"><a href="javascript:">Більше вакансій</a></div>
        "#;
        let vacancies = parse_vacancies(html, &["Lead".to_owned()]);
        assert_eq!(
            vacancies,
            vec![
                Vacancy::new(
                    "Python Developer".to_owned(),
                    "https://jobs.dou.ua/companies/acme/vacancies/1/".to_owned()
                ),
                Vacancy::new(
                    "Middle Python/Django Developer".to_owned(),
                    "https://jobs.dou.ua/companies/initech/vacancies/3/".to_owned()
                ),
            ]
        );
    }

    /// Run with `chromedriver --port=9515` and `cargo test -p job-scraper -- --ignored`
    #[tokio::test]
    #[ignore = "needs chromedriver listening on localhost:9515"]
    async fn test_collect_clicks_until_more_button_hides() {
        let mut server = mockito::Server::new_async().await;
        let page = r#"<html><body>
            <ul class="lt">
              <li><a class="vt" href="/vacancies/0/">Python Developer 0</a></li>
            </ul>
            <div class="more-btn"><a href="javascript:" onclick="more()">Більше вакансій</a></div>
            <script>
              var clicks = 0;
              function more() {
                clicks += 1;
                var li = document.createElement("li");
                li.innerHTML = '<a class="vt" href="/vacancies/' + clicks + '/">Python Developer ' + clicks + '</a>';
                document.querySelector("ul.lt").appendChild(li);
                if (clicks == 2) {
                  document.querySelector(".more-btn").style.display = "none";
                }
              }
            </script>
        </body></html>"#;
        let mock = server
            .mock("GET", "/vacancies/")
            .match_query(mockito::Matcher::UrlEncoded(
                "category".into(),
                "python".into(),
            ))
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(page)
            .create_async()
            .await;

        let collector = DouCollector::new(DEFAULT_WEBDRIVER_URL).with_base_url(server.url());
        let vacancies = collector.collect("Python", &[]).await.unwrap();

        mock.assert_async().await;
        let titles = vacancies
            .iter()
            .map(|v| v.job_title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Python Developer 0", "Python Developer 1", "Python Developer 2"]
        );
    }
}
