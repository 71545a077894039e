mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_advanced, handle_check, handle_experience, handle_export, handle_featured,
    handle_in_work, handle_projects, handle_skills, handle_stats, handle_tech,
};
