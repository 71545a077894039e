// src/query/projects.rs
//! Project views

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::{Project, ProjectCategory, ProjectStatus};

use super::{parse_content_date, CategoryFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
    pub paused: usize,
}

impl StatusCounts {
    pub fn sum(&self) -> usize {
        self.completed + self.in_progress + self.planned + self.paused
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub by_status: StatusCounts,
}

/// Query component over the immutable project collection
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// All projects in source order
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn stats(&self) -> ProjectStats {
        let mut by_status = StatusCounts::default();
        for project in &self.projects {
            match project.status {
                ProjectStatus::Completed => by_status.completed += 1,
                ProjectStatus::InProgress => by_status.in_progress += 1,
                ProjectStatus::Planned => by_status.planned += 1,
                ProjectStatus::Paused => by_status.paused += 1,
            }
        }

        ProjectStats {
            total: self.projects.len(),
            by_status,
        }
    }

    /// General listing for a category, newest first.
    ///
    /// Featured and in-progress projects are left out; they have their
    /// own sections (`featured`, `in_work`).
    pub fn by_category(&self, category: Option<&str>) -> Vec<&Project> {
        let filter = CategoryFilter::<ProjectCategory>::parse(category);

        let mut projects: Vec<_> = self
            .projects
            .iter()
            .filter(|p| filter.matches(&p.category))
            .filter(|p| !p.is_featured() && p.status != ProjectStatus::InProgress)
            .collect();
        sort_newest_first(&mut projects);
        projects
    }

    /// Projects flagged `featured: true`, in source order
    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_featured()).collect()
    }

    /// In-progress projects that are not featured, newest first
    pub fn in_work(&self) -> Vec<&Project> {
        let mut projects: Vec<_> = self
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress && !p.is_featured())
            .collect();
        sort_newest_first(&mut projects);
        projects
    }

    /// Every tech stack entry, most used first.
    ///
    /// Ties go to the tech used by the most recently started project, then
    /// to whichever appeared first in source order.
    pub fn all_tech_stack(&self) -> Vec<String> {
        struct TechUsage<'a> {
            name: &'a str,
            count: usize,
            latest: Option<DateTime<Utc>>,
        }

        let mut usage: Vec<TechUsage<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for project in &self.projects {
            let started = parse_content_date(&project.start_date);
            for tech in &project.tech_stack {
                match index.get(tech.as_str()).copied() {
                    Some(i) => {
                        let entry = &mut usage[i];
                        entry.count += 1;
                        entry.latest = entry.latest.max(started);
                    }
                    None => {
                        index.insert(tech.as_str(), usage.len());
                        usage.push(TechUsage {
                            name: tech.as_str(),
                            count: 1,
                            latest: started,
                        });
                    }
                }
            }
        }

        usage.sort_by(|a, b| b.count.cmp(&a.count).then(b.latest.cmp(&a.latest)));
        usage.into_iter().map(|u| u.name.to_string()).collect()
    }
}

/// Stable sort by start date, newest first; unparsable dates go last
pub fn sort_newest_first(projects: &mut [&Project]) {
    projects.sort_by_cached_key(|p| Reverse(parse_content_date(&p.start_date)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, start: &str) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            image: format!("/img/{}.png", id),
            category: ProjectCategory::Actual,
            tech_stack: Vec::new(),
            status: ProjectStatus::Completed,
            demo_url: None,
            source_url: None,
            start_date: start.to_string(),
            end_date: None,
            featured: None,
            tags: None,
        }
    }

    fn with(
        mut p: Project,
        category: ProjectCategory,
        status: ProjectStatus,
        featured: Option<bool>,
    ) -> Project {
        p.category = category;
        p.status = status;
        p.featured = featured;
        p
    }

    fn with_tech(mut p: Project, tech: &[&str]) -> Project {
        p.tech_stack = tech.iter().map(|t| t.to_string()).collect();
        p
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    fn mixed_catalog() -> ProjectCatalog {
        use ProjectCategory::*;
        use ProjectStatus::*;

        ProjectCatalog::new(vec![
            with(project("alpha", "2023-01-01"), Actual, Completed, None),
            with(project("beta", "2024-06-15"), History, Completed, Some(false)),
            with(project("gamma", "2022-03-01"), Actual, Planned, None),
            with(project("delta", "2024-01-01"), Actual, Completed, Some(true)),
            with(project("epsilon", "2021-05-01"), Other, InProgress, None),
            with(project("zeta", "2020-01-01"), Other, Paused, None),
            with(project("eta", "2024-09-01"), History, InProgress, Some(true)),
        ])
    }

    #[test]
    fn test_stats_counts_every_status() {
        let stats = mixed_catalog().stats();

        assert_eq!(stats.total, 7);
        assert_eq!(
            stats.by_status,
            StatusCounts {
                completed: 3,
                in_progress: 2,
                planned: 1,
                paused: 1,
            }
        );
        assert_eq!(stats.by_status.sum(), stats.total);
    }

    #[test]
    fn test_stats_serializes_camel_case() {
        let json = serde_json::to_value(mixed_catalog().stats()).unwrap();
        assert_eq!(json["total"], 7);
        assert_eq!(json["byStatus"]["inProgress"], 2);
        assert_eq!(json["byStatus"]["paused"], 1);
    }

    #[test]
    fn test_by_category_all_excludes_featured_and_in_progress() {
        let catalog = mixed_catalog();
        let all = catalog.by_category(None);

        assert_eq!(ids(&all), vec!["beta", "alpha", "gamma", "zeta"]);
        assert_eq!(ids(&catalog.by_category(Some("all"))), ids(&all));
    }

    #[test]
    fn test_by_category_filters_to_one_category() {
        let catalog = mixed_catalog();

        let actual = catalog.by_category(Some("actual"));
        assert_eq!(ids(&actual), vec!["alpha", "gamma"]);
        assert!(actual.iter().all(|p| p.category == ProjectCategory::Actual));

        assert_eq!(ids(&catalog.by_category(Some("history"))), vec!["beta"]);
        assert_eq!(ids(&catalog.by_category(Some("other"))), vec!["zeta"]);
    }

    #[test]
    fn test_by_category_unknown_is_empty() {
        let catalog = mixed_catalog();
        assert!(catalog.by_category(Some("mobile")).is_empty());
        assert!(catalog.by_category(Some("Actual")).is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let a = project("a", "2023-01-01");
        let b = project("b", "2024-06-15");
        let c = project("c", "2022-03-01");
        let mut projects = vec![&a, &b, &c];

        sort_newest_first(&mut projects);
        assert_eq!(ids(&projects), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_puts_invalid_dates_last_and_is_stable() {
        let bad = project("bad", "someday");
        let first = project("first", "2023-01-01");
        let second = project("second", "2023-01-01");
        let newer = project("newer", "2024-01-01");
        let worse = project("worse", "");
        let mut projects = vec![&bad, &first, &second, &worse, &newer];

        sort_newest_first(&mut projects);
        assert_eq!(ids(&projects), vec!["newer", "first", "second", "bad", "worse"]);
    }

    #[test]
    fn test_featured_only_true_flags() {
        let catalog = mixed_catalog();
        let featured = catalog.featured();

        assert_eq!(ids(&featured), vec!["delta", "eta"]);
        assert!(featured.iter().all(|p| p.featured == Some(true)));
    }

    #[test]
    fn test_in_work_excludes_featured() {
        let catalog = ProjectCatalog::new(vec![
            with(project("old", "2021-01-01"), ProjectCategory::Actual, ProjectStatus::InProgress, None),
            with(project("new", "2024-01-01"), ProjectCategory::Other, ProjectStatus::InProgress, Some(false)),
            with(project("star", "2025-01-01"), ProjectCategory::Actual, ProjectStatus::InProgress, Some(true)),
            with(project("done", "2025-02-01"), ProjectCategory::Actual, ProjectStatus::Completed, None),
        ]);

        assert_eq!(ids(&catalog.in_work()), vec!["new", "old"]);
    }

    #[test]
    fn test_tech_stack_ranked_by_usage() {
        let catalog = ProjectCatalog::new(vec![
            with_tech(project("a", "2022-01-01"), &["Vue", "React"]),
            with_tech(project("b", "2023-01-01"), &["React"]),
            with_tech(project("c", "2021-01-01"), &["React", "Node"]),
        ]);

        let ranked = catalog.all_tech_stack();
        assert_eq!(ranked[0], "React");
        let react = ranked.iter().position(|t| t == "React").unwrap();
        let vue = ranked.iter().position(|t| t == "Vue").unwrap();
        assert!(react < vue);
    }

    #[test]
    fn test_tech_stack_ties_broken_by_latest_project() {
        let catalog = ProjectCatalog::new(vec![
            with_tech(project("a", "2020-01-01"), &["Svelte"]),
            with_tech(project("b", "2024-01-01"), &["Go"]),
            with_tech(project("c", "bogus"), &["Perl"]),
            with_tech(project("d", "2022-01-01"), &["Elm"]),
        ]);

        assert_eq!(catalog.all_tech_stack(), vec!["Go", "Elm", "Svelte", "Perl"]);
    }

    #[test]
    fn test_tech_stack_full_tie_keeps_source_order() {
        let catalog = ProjectCatalog::new(vec![
            with_tech(project("a", "2024-01-01"), &["Zig"]),
            with_tech(project("b", "2024-01-01"), &["Ada"]),
        ]);

        assert_eq!(catalog.all_tech_stack(), vec!["Zig", "Ada"]);
    }

    #[test]
    fn test_tech_stack_has_no_duplicates_and_keeps_casing() {
        let catalog = ProjectCatalog::new(vec![
            with_tech(project("a", "2022-01-01"), &["rust", "Rust"]),
            with_tech(project("b", "2022-01-01"), &["Rust"]),
        ]);

        assert_eq!(catalog.all_tech_stack(), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_views_are_idempotent() {
        let catalog = mixed_catalog();

        assert_eq!(catalog.stats(), catalog.stats());
        assert_eq!(catalog.by_category(None), catalog.by_category(None));
        assert_eq!(catalog.featured(), catalog.featured());
        assert_eq!(catalog.in_work(), catalog.in_work());
        assert_eq!(catalog.all_tech_stack(), catalog.all_tech_stack());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProjectCatalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.stats(), ProjectStats::default());
        assert!(catalog.by_category(None).is_empty());
        assert!(catalog.all_tech_stack().is_empty());
    }
}
