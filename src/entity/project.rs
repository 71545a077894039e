// src/entity/project.rs
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Actual,
    History,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Actual,
        ProjectCategory::History,
        ProjectCategory::Other,
    ];
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectCategory::Actual => write!(f, "actual"),
            ProjectCategory::History => write!(f, "history"),
            ProjectCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actual" => Ok(ProjectCategory::Actual),
            "history" => Ok(ProjectCategory::History),
            "other" => Ok(ProjectCategory::Other),
            _ => Err(format!("Invalid project category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    Paused,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::InProgress => write!(f, "in-progress"),
            ProjectStatus::Planned => write!(f, "planned"),
            ProjectStatus::Paused => write!(f, "paused"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(ProjectStatus::Completed),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "planned" => Ok(ProjectStatus::Planned),
            "paused" => Ok(ProjectStatus::Paused),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: ProjectCategory,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// ISO date; the only key project listings sort on
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Project {
    /// Absent and `false` both mean "not featured"
    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }
}

impl Entity for Project {
    const KIND: &'static str = "project";

    const ALIASES: &'static [(&'static str, &'static str)] =
        &[("demoUrl", "liveDemo"), ("sourceUrl", "sourceCode")];

    fn id(&self) -> &str {
        &self.id
    }
}
