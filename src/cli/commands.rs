use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(version, about = "Portfolio content loader and view generator")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Content directory (overrides SHOWCASE_CONTENT_DIR and .showcase/config.yaml)
    #[arg(long, global = true, value_name = "DIR")]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show project and skill statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List projects for a category (featured and in-progress projects are listed separately)
    Projects {
        /// Category (actual, history, other, or all)
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List featured projects
    Featured {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List in-progress projects that are not featured
    InWork {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List technologies, most used first
    Tech {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List skills for a category
    Skills {
        /// Category (ai, frontend, backend, native, devops, ide, tools, softskills, others, or all)
        #[arg(value_name = "CATEGORY")]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List advanced and expert skills
    Advanced {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show total experience across all skills
    Experience {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write every derived view to a JSON file
    Export {
        /// Output file
        #[arg(value_name = "FILE")]
        output: PathBuf,
    },

    /// Load content and report content warnings
    Check,
}
