// src/export/mod.rs
//! View export module
//!
//! Writes every derived view to a single JSON document. The document is a
//! hand-off for a static site build; nothing here renders markup.

pub mod utils;

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::entity::{Experience, Project, ProjectCategory, Skill, SkillCategory};
use crate::query::{Portfolio, ProjectStats, SkillStats};
use crate::Result;

pub use self::utils::{format_timestamp, write_export_file};

/// Key used for the unfiltered listing in the per-category maps
pub const ALL_KEY: &str = "all";

/// Every derived view, borrowed from a loaded portfolio
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBundle<'a> {
    pub generated_at: String,
    pub project_stats: ProjectStats,
    pub projects_by_category: BTreeMap<String, Vec<&'a Project>>,
    pub featured: Vec<&'a Project>,
    pub in_work: Vec<&'a Project>,
    pub tech_stack: Vec<String>,
    pub skill_stats: SkillStats,
    pub skills_by_category: BTreeMap<String, Vec<&'a Skill>>,
    pub advanced_skills: Vec<&'a Skill>,
    pub total_experience: Experience,
}

impl<'a> ViewBundle<'a> {
    pub fn from_portfolio(portfolio: &'a Portfolio) -> Self {
        let projects = portfolio.projects();
        let skills = portfolio.skills();

        let mut projects_by_category = BTreeMap::new();
        projects_by_category.insert(ALL_KEY.to_string(), projects.by_category(None));
        for category in ProjectCategory::ALL {
            let name = category.to_string();
            let listing = projects.by_category(Some(name.as_str()));
            projects_by_category.insert(name, listing);
        }

        let mut skills_by_category = BTreeMap::new();
        skills_by_category.insert(ALL_KEY.to_string(), skills.by_category(None));
        for category in SkillCategory::ALL {
            let name = category.to_string();
            let listing = skills.by_category(Some(name.as_str()));
            skills_by_category.insert(name, listing);
        }

        Self {
            generated_at: format_timestamp(&Utc::now()),
            project_stats: projects.stats(),
            projects_by_category,
            featured: projects.featured(),
            in_work: projects.in_work(),
            tech_stack: projects.all_tech_stack(),
            skill_stats: skills.stats(),
            skills_by_category,
            advanced_skills: skills.advanced(),
            total_experience: skills.total_experience(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write all views of `portfolio` to `path` as pretty JSON
pub fn write_bundle<'a>(portfolio: &'a Portfolio, path: &Path) -> Result<ViewBundle<'a>> {
    let bundle = ViewBundle::from_portfolio(portfolio);
    write_export_file(path, &bundle.to_json()?)?;
    info!("Exported views to {}", path.display());
    Ok(bundle)
}
