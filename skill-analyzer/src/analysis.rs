use chrono::Utc;
use job_scraper::Vacancy;
use regex::Regex;

use crate::catalog::SkillCatalog;
use crate::models::{SkillReport, SkillScore};

/// Whole word pattern of a skill, to be matched against lower-cased text
fn keyword_pattern(skill: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(&skill.to_lowercase())))
}

/// Round to 2 decimals, ties to even on the exact binary value (0.125 -> 0.12)
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Rank every catalog skill by the share of vacancies mentioning it.
///
/// Vacancies without a description count towards the total but never
/// match. Skills that are not mentioned at all are left out. The ranking
/// is ordered by importance, equal scores by name.
pub fn analyze(vacancies: &[Vacancy], catalog: &SkillCatalog) -> SkillReport {
    let total = vacancies.len();
    let descriptions = vacancies
        .iter()
        .map(|v| v.description.as_deref().unwrap_or_default().to_lowercase())
        .collect::<Vec<_>>();

    let mut skills = catalog
        .iter()
        .filter_map(|skill| {
            let pattern = match keyword_pattern(skill) {
                Ok(pattern) => pattern,
                Err(e) => {
                    log::warn!("skipping skill {}, invalid pattern: {}", skill, e);
                    return None;
                }
            };
            let mentions = descriptions.iter().filter(|d| pattern.is_match(d)).count();
            if mentions == 0 {
                return None;
            }
            Some(SkillScore {
                name: skill.to_owned(),
                mentioned_in_jobs: mentions as u32,
                importance: round2(mentions as f64 / total as f64),
            })
        })
        .collect::<Vec<_>>();

    skills.sort_by(|a, b| {
        b.importance
            .total_cmp(&a.importance)
            .then_with(|| a.name.cmp(&b.name))
    });
    log::info!(
        "{} of {} skills are mentioned in {} vacancies",
        skills.len(),
        catalog.len(),
        total
    );

    SkillReport {
        total_vacancies: total,
        generated_at: Utc::now(),
        skills,
    }
}
