use std::path::Path;

use job_scraper::Vacancy;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use skill_analyzer::SkillReport;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File error: '{0}'")]
    IoError(#[from] std::io::Error),
    #[error("Json error: '{0}'")]
    Json(#[from] serde_json::Error),
}

/// Layout of the vacancies file, the list lives under `results`
#[derive(Serialize, Deserialize)]
pub struct VacancyFile {
    pub results: Vec<Vacancy>,
}

#[derive(Serialize)]
struct VacancyFileRef<'a> {
    results: &'a [Vacancy],
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write all vacancies, replacing the file if it exists
pub async fn save_vacancies(path: impl AsRef<Path>, vacancies: &[Vacancy]) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(&VacancyFileRef { results: vacancies })?;
    tokio::fs::write(path, json).await?;
    log::info!("saved {} vacancies to {}", vacancies.len(), path.display());
    Ok(())
}

pub async fn load_vacancies(path: impl AsRef<Path>) -> Result<Vec<Vacancy>> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    let file: VacancyFile = serde_json::from_slice(&data)?;
    log::info!("loaded {} vacancies from {}", file.results.len(), path.display());
    Ok(file.results)
}

/// Write the skill ranking, replacing the file if it exists
pub async fn save_report(path: impl AsRef<Path>, report: &SkillReport) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(report)?;
    tokio::fs::write(path, json).await?;
    log::info!("saved {} skill scores to {}", report.skills.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_analyzer::SkillScore;

    fn vacancies() -> Vec<Vacancy> {
        vec![
            Vacancy {
                job_title: "Python Dev".to_owned(),
                link: "https://jobs.example/1".to_owned(),
                description: Some("Docker and SQL".to_owned()),
            },
            Vacancy::new("Django Dev".to_owned(), "https://jobs.example/2".to_owned()),
        ]
    }

    #[tokio::test]
    async fn test_saved_vacancies_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relevant_jobs.json");
        save_vacancies(&path, &vacancies()).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.starts_with("{\n    \"results\": ["));
        assert_eq!(raw.matches("\"description\"").count(), 1);
        assert_eq!(load_vacancies(&path).await.unwrap(), vacancies());
    }

    #[tokio::test]
    async fn test_report_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        tokio::fs::write(&path, "previous run, much longer than the new content ".repeat(20))
            .await
            .unwrap();
        let report = SkillReport {
            total_vacancies: 3,
            generated_at: chrono::Utc::now(),
            skills: vec![SkillScore {
                name: "Docker".to_owned(),
                mentioned_in_jobs: 2,
                importance: 0.67,
            }],
        };
        save_report(&path, &report).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: SkillReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, report);
    }

    #[tokio::test]
    async fn test_loading_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_vacancies(dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
