//! Derived views over the loaded collections
//!
//! Every view is recomputed on each call from an immutable catalog, so
//! repeated calls return equal results.

mod projects;
mod skills;

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::ContentConfig;
use crate::content::load_entities;
use crate::entity::{Project, Skill};
use crate::Result;

pub use projects::{ProjectCatalog, ProjectStats, StatusCounts};
pub use skills::{CategoryCounts, LevelCounts, SkillCatalog, SkillStats};

/// Category argument accepted by the `by_category` views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    /// No category, an empty string, or `"all"`
    All,
    Only(C),
    /// A string that names no category; matches nothing
    Unknown,
}

impl<C: FromStr + PartialEq> CategoryFilter<C> {
    pub fn parse(category: Option<&str>) -> Self {
        match category {
            None | Some("") | Some("all") => CategoryFilter::All,
            Some(name) => match name.parse() {
                Ok(c) => CategoryFilter::Only(c),
                Err(_) => CategoryFilter::Unknown,
            },
        }
    }

    pub fn matches(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
            CategoryFilter::Unknown => false,
        }
    }
}

/// Parse a content date leniently.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, `YYYY-MM-DDTHH:MM[:SS]`,
/// `YYYY-MM` and `YYYY`. Anything else yields `None`.
pub fn parse_content_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"))
        .ok()
        .or_else(|| parse_year(value))?;

    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn parse_year(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1)
}

/// Both catalogs, loaded once during startup
#[derive(Debug, Clone)]
pub struct Portfolio {
    projects: ProjectCatalog,
    skills: SkillCatalog,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>, skills: Vec<Skill>) -> Self {
        Self {
            projects: ProjectCatalog::new(projects),
            skills: SkillCatalog::new(skills),
        }
    }

    /// Load and normalize all content described by `config`
    pub fn load(config: &ContentConfig) -> Result<Self> {
        let projects = load_entities::<Project>(&config.projects_path(), &config.extensions)?;
        let skills = load_entities::<Skill>(&config.skills_path(), &config.extensions)?;
        Ok(Self::new(projects, skills))
    }

    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    pub fn skills(&self) -> &SkillCatalog {
        &self.skills
    }
}
