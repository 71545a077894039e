mod project;
mod skill;

pub use project::{Project, ProjectCategory, ProjectStatus};
pub use skill::{Experience, Skill, SkillCategory, SkillLevel};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Content kind shared by the load and normalize pipeline.
pub trait Entity: Serialize + DeserializeOwned {
    /// Singular name used in errors and logs ("project", "skill")
    const KIND: &'static str;

    /// Legacy field names accepted on read, as `(canonical, legacy)` pairs
    const ALIASES: &'static [(&'static str, &'static str)] = &[];

    fn id(&self) -> &str;
}
