pub mod cli;
pub mod config;
pub mod content;
pub mod entity;
pub mod error;
pub mod export;
pub mod query;
pub mod warnings;

pub use config::ContentConfig;
pub use error::{Result, ShowcaseError};
pub use query::{Portfolio, ProjectCatalog, SkillCatalog};
