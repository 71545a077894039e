// src/query/skills.rs
//! Skill views

use serde::Serialize;

use crate::entity::{Experience, Skill, SkillCategory, SkillLevel};

use super::CategoryFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
    pub expert: usize,
}

impl LevelCounts {
    pub fn sum(&self) -> usize {
        self.beginner + self.intermediate + self.advanced + self.expert
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub ai: usize,
    pub frontend: usize,
    pub backend: usize,
    pub native: usize,
    pub devops: usize,
    pub ide: usize,
    pub tools: usize,
    pub softskills: usize,
    pub others: usize,
}

impl CategoryCounts {
    fn bucket_mut(&mut self, category: SkillCategory) -> &mut usize {
        match category {
            SkillCategory::Ai => &mut self.ai,
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Native => &mut self.native,
            SkillCategory::Devops => &mut self.devops,
            SkillCategory::Ide => &mut self.ide,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Softskills => &mut self.softskills,
            SkillCategory::Others => &mut self.others,
        }
    }

    pub fn sum(&self) -> usize {
        self.ai
            + self.frontend
            + self.backend
            + self.native
            + self.devops
            + self.ide
            + self.tools
            + self.softskills
            + self.others
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStats {
    pub total: usize,
    pub by_level: LevelCounts,
    pub by_category: CategoryCounts,
}

/// Query component over the immutable skill collection
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn stats(&self) -> SkillStats {
        let mut stats = SkillStats {
            total: self.skills.len(),
            ..SkillStats::default()
        };

        for skill in &self.skills {
            match skill.level {
                SkillLevel::Beginner => stats.by_level.beginner += 1,
                SkillLevel::Intermediate => stats.by_level.intermediate += 1,
                SkillLevel::Advanced => stats.by_level.advanced += 1,
                SkillLevel::Expert => stats.by_level.expert += 1,
            }
            *stats.by_category.bucket_mut(skill.category) += 1;
        }

        stats
    }

    /// Skills in a category, source order preserved
    pub fn by_category(&self, category: Option<&str>) -> Vec<&Skill> {
        let filter = CategoryFilter::<SkillCategory>::parse(category);
        self.skills
            .iter()
            .filter(|s| filter.matches(&s.category))
            .collect()
    }

    pub fn advanced(&self) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| matches!(s.level, SkillLevel::Advanced | SkillLevel::Expert))
            .collect()
    }

    /// Sum of every skill's experience, carried into whole years
    pub fn total_experience(&self) -> Experience {
        let total: u64 = self.skills.iter().map(|s| s.experience.total_months()).sum();
        // Years saturate rather than wrap; months is always < 12
        Experience {
            years: u32::try_from(total / 12).unwrap_or(u32::MAX),
            months: (total % 12) as u32,
        }
    }
}
