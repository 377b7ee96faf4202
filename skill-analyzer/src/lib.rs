pub mod analysis;
pub mod api;
pub mod catalog;
pub mod models;

pub use analysis::analyze;
pub use api::{Error, Result};
pub use catalog::{load_catalog, SkillCatalog};
pub use models::{SkillReport, SkillScore};
