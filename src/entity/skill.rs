// src/entity/skill.rs
use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Ai,
    Frontend,
    Backend,
    Native,
    Devops,
    Ide,
    Tools,
    Softskills,
    Others,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::Ai,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Native,
        SkillCategory::Devops,
        SkillCategory::Ide,
        SkillCategory::Tools,
        SkillCategory::Softskills,
        SkillCategory::Others,
    ];
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkillCategory::Ai => "ai",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Native => "native",
            SkillCategory::Devops => "devops",
            SkillCategory::Ide => "ide",
            SkillCategory::Tools => "tools",
            SkillCategory::Softskills => "softskills",
            SkillCategory::Others => "others",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| format!("Invalid skill category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "beginner"),
            SkillLevel::Intermediate => write!(f, "intermediate"),
            SkillLevel::Advanced => write!(f, "advanced"),
            SkillLevel::Expert => write!(f, "expert"),
        }
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            _ => Err(format!("Invalid skill level: {}", s)),
        }
    }
}

/// Time spent with a skill. `months` is not normalized below 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Experience {
    pub years: u32,
    pub months: u32,
}

impl Experience {
    pub fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }
}

impl std::fmt::Display for Experience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Iconify icon name
    pub icon: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub experience: Experience,
    /// Related project ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Entity for Skill {
    const KIND: &'static str = "skill";

    fn id(&self) -> &str {
        &self.id
    }
}
