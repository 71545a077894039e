use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::ContentConfig;
use crate::entity::{Project, Skill};
use crate::error::Result;
use crate::export::write_bundle;
use crate::query::Portfolio;
use crate::warnings::{check_content, format_warning};

/// Resolve configuration and load all content
fn load_portfolio(content: Option<PathBuf>) -> Result<Portfolio> {
    let config = ContentConfig::resolve(content)?;
    debug!("Using content directory {}", config.content_dir.display());
    Portfolio::load(&config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_projects(heading: &str, projects: &[&Project]) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    println!("{}:\n", heading);
    for p in projects {
        let featured = if p.is_featured() { " *" } else { "" };
        println!(
            "  {} [{}|{}] {}{}",
            p.start_date, p.category, p.status, p.title, featured
        );
        if !p.tech_stack.is_empty() {
            println!("      tech: {}", p.tech_stack.join(", "));
        }
    }
}

fn print_skills(heading: &str, skills: &[&Skill]) {
    if skills.is_empty() {
        println!("No skills found.");
        return;
    }

    println!("{}:\n", heading);
    for s in skills {
        println!(
            "  {:<24} [{}|{}] {}",
            s.name, s.category, s.level, s.experience
        );
    }
}

pub fn handle_stats(content: Option<PathBuf>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let projects = portfolio.projects().stats();
    let skills = portfolio.skills().stats();

    if json {
        return print_json(&serde_json::json!({
            "projects": projects,
            "skills": skills,
        }));
    }

    println!("Projects: {}", projects.total);
    println!("  completed:   {}", projects.by_status.completed);
    println!("  in-progress: {}", projects.by_status.in_progress);
    println!("  planned:     {}", projects.by_status.planned);
    println!("  paused:      {}", projects.by_status.paused);
    println!();
    println!("Skills: {}", skills.total);
    println!(
        "  beginner: {}  intermediate: {}  advanced: {}  expert: {}",
        skills.by_level.beginner,
        skills.by_level.intermediate,
        skills.by_level.advanced,
        skills.by_level.expert
    );

    Ok(())
}

pub fn handle_projects(content: Option<PathBuf>, category: Option<String>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let projects = portfolio.projects().by_category(category.as_deref());

    if json {
        print_json(&projects)
    } else {
        print_projects("Projects", &projects);
        Ok(())
    }
}

pub fn handle_featured(content: Option<PathBuf>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let projects = portfolio.projects().featured();

    if json {
        print_json(&projects)
    } else {
        print_projects("Featured projects", &projects);
        Ok(())
    }
}

pub fn handle_in_work(content: Option<PathBuf>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let projects = portfolio.projects().in_work();

    if json {
        print_json(&projects)
    } else {
        print_projects("In work", &projects);
        Ok(())
    }
}

pub fn handle_tech(content: Option<PathBuf>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let tech = portfolio.projects().all_tech_stack();

    if json {
        print_json(&tech)
    } else if tech.is_empty() {
        println!("No technologies found.");
        Ok(())
    } else {
        for (rank, name) in tech.iter().enumerate() {
            println!("  {:>3}. {}", rank + 1, name);
        }
        Ok(())
    }
}

pub fn handle_skills(content: Option<PathBuf>, category: Option<String>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let skills = portfolio.skills().by_category(category.as_deref());

    if json {
        print_json(&skills)
    } else {
        print_skills("Skills", &skills);
        Ok(())
    }
}

pub fn handle_advanced(content: Option<PathBuf>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let skills = portfolio.skills().advanced();

    if json {
        print_json(&skills)
    } else {
        print_skills("Advanced skills", &skills);
        Ok(())
    }
}

pub fn handle_experience(content: Option<PathBuf>, json: bool) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let total = portfolio.skills().total_experience();

    if json {
        print_json(&total)
    } else {
        println!("Total experience: {} years, {} months", total.years, total.months);
        Ok(())
    }
}

pub fn handle_export(content: Option<PathBuf>, output: &Path) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let bundle = write_bundle(&portfolio, output)?;

    println!(
        "Exported {} projects and {} skills to {}",
        bundle.project_stats.total,
        bundle.skill_stats.total,
        output.display()
    );
    Ok(())
}

pub fn handle_check(content: Option<PathBuf>) -> Result<()> {
    let portfolio = load_portfolio(content)?;
    let warnings = check_content(&portfolio);

    for warning in &warnings {
        eprintln!("{}", format_warning(warning));
    }

    println!(
        "Checked {} projects and {} skills: {} warning(s)",
        portfolio.projects().len(),
        portfolio.skills().len(),
        warnings.len()
    );
    Ok(())
}
