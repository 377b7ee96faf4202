use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a skill shows up across the collected vacancies
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillScore {
    pub name: String,
    /// Number of vacancies whose description mentions the skill
    pub mentioned_in_jobs: u32,
    /// `mentioned_in_jobs` divided by all vacancies, rounded to 2 decimals
    pub importance: f64,
}

/// Skill ranking of one run, most important skills first
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillReport {
    pub total_vacancies: usize,
    pub generated_at: DateTime<Utc>,
    pub skills: Vec<SkillScore>,
}
