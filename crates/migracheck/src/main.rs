mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Log(args) => commands::log::run(data_dir, &args),
        Commands::Delete { date } => commands::delete::run(data_dir, &date),
        Commands::Show { date } => commands::show::run(data_dir, &date),
        Commands::Calendar { month } => commands::calendar::run(data_dir, month.as_deref()),
        Commands::Month { month, json } => commands::month::run(data_dir, month.as_deref(), json),
        Commands::Year { year, json } => commands::year::run(data_dir, year.as_deref(), json),
        Commands::Version => commands::version::run(),
    }
}
