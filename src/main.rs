use clap::Parser;
use showcase::cli::{
    handle_advanced, handle_check, handle_experience, handle_export, handle_featured,
    handle_in_work, handle_projects, handle_skills, handle_stats, handle_tech, Cli, Commands,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let content = cli.content;

    let result = match cli.command {
        Commands::Stats { json } => handle_stats(content, json),
        Commands::Projects { category, json } => handle_projects(content, category, json),
        Commands::Featured { json } => handle_featured(content, json),
        Commands::InWork { json } => handle_in_work(content, json),
        Commands::Tech { json } => handle_tech(content, json),
        Commands::Skills { category, json } => handle_skills(content, category, json),
        Commands::Advanced { json } => handle_advanced(content, json),
        Commands::Experience { json } => handle_experience(content, json),
        Commands::Export { output } => handle_export(content, &output),
        Commands::Check => handle_check(content),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
