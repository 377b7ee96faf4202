use scraper::{Html, Selector};

use crate::Vacancy;

/// A title is banned when it contains any of the keywords, case-sensitive
pub fn is_banned(title: &str, banned: &[String]) -> bool {
    banned.iter().any(|keyword| title.contains(keyword.as_str()))
}

/// Parse the posting anchors of a search results page in document order.
///
/// The anchor text becomes the job title and its `href` the link,
/// prefixed with `link_prefix` for sites that use relative links.
/// Anchors without `href` and postings with a banned title are skipped.
pub fn parse_listing(
    html: &str,
    anchor_selector: &Selector,
    link_prefix: Option<&str>,
    banned: &[String],
) -> Vec<Vacancy> {
    let doc = Html::parse_document(html);
    doc.select(anchor_selector)
        .filter_map(|el| {
            let title = el.text().collect::<String>().trim().to_owned();
            let href = match el.value().attr("href") {
                Some(href) => href,
                None => {
                    log::debug!("skipping posting without link: {}", title);
                    return None;
                }
            };
            if is_banned(&title, banned) {
                log::debug!("skipping banned posting: {}", title);
                return None;
            }
            let link = match link_prefix {
                Some(prefix) => format!("{}{}", prefix, href),
                None => href.to_owned(),
            };
            Some(Vacancy::new(title, link))
        })
        .collect()
}
