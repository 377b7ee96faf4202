use job_scraper::Vacancy;
use reqwest::Client;
use skill_analyzer::{load_catalog, SkillCatalog};

use crate::config::Settings;
use crate::error::Result;

pub async fn catalog(client: &Client, settings: &Settings) -> Result<SkillCatalog> {
    let catalog = load_catalog(client, &settings.skills_cache, &settings.skills_source).await?;
    Ok(catalog)
}

/// Rank the catalog skills across `vacancies` and save the report
pub async fn analyze(
    vacancies: &[Vacancy],
    catalog: &SkillCatalog,
    settings: &Settings,
) -> Result<()> {
    log::info!("analyzing tech skills frequency in {} vacancies", vacancies.len());
    let report = skill_analyzer::analyze(vacancies, catalog);
    persistence::save_report(&settings.results_file, &report).await?;
    if let Some(top) = report.skills.first() {
        log::info!(
            "most requested skill: {} ({} vacancies, importance {})",
            top.name,
            top.mentioned_in_jobs,
            top.importance
        );
    }
    log::info!(
        "check {} for the skills statistics",
        settings.results_file.display()
    );
    Ok(())
}
