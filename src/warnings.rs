//! Content quality warnings.
//!
//! Loading only rejects content that cannot be typed. This module reports
//! problems that load fine but are probably authoring mistakes. Warnings
//! never change any derived view.

use std::collections::HashSet;

use crate::query::{parse_content_date, Portfolio};

/// A suspicious but loadable piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A skill lists a project id that was not loaded.
    UnknownProject { skill: String, project: String },
    /// A skill's experience months were not carried into years.
    MonthsOverflow { skill: String, months: u32 },
    /// A project start date that cannot be parsed; it sorts last.
    InvalidStartDate { project: String, value: String },
}

/// Check loaded content and return any warnings.
///
/// Order: project dates first, then skills in source order.
pub fn check_content(portfolio: &Portfolio) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for project in portfolio.projects().all() {
        if parse_content_date(&project.start_date).is_none() {
            warnings.push(Warning::InvalidStartDate {
                project: project.id.clone(),
                value: project.start_date.clone(),
            });
        }
    }

    let project_ids: HashSet<&str> = portfolio
        .projects()
        .all()
        .iter()
        .map(|p| p.id.as_str())
        .collect();

    for skill in portfolio.skills().all() {
        for project in skill.projects.iter().flatten() {
            if !project_ids.contains(project.as_str()) {
                warnings.push(Warning::UnknownProject {
                    skill: skill.id.clone(),
                    project: project.clone(),
                });
            }
        }

        if skill.experience.months >= 12 {
            warnings.push(Warning::MonthsOverflow {
                skill: skill.id.clone(),
                months: skill.experience.months,
            });
        }
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::UnknownProject { skill, project } => {
            format!(
                "Warning: skill '{}' references unknown project '{}'",
                skill, project
            )
        }
        Warning::MonthsOverflow { skill, months } => {
            format!(
                "Warning: skill '{}' has {} months of experience - consider carrying into years",
                skill, months
            )
        }
        Warning::InvalidStartDate { project, value } => {
            format!(
                "Warning: project '{}' has unparsable startDate '{}' - it will sort last",
                project, value
            )
        }
    }
}
