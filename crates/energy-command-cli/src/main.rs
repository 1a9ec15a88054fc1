use clap::{Parser, Subcommand};
use energy_command_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "energy-command-cli", version, about = "Energy Command Center CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Month calendar, totals and events
    Month {
        #[command(subcommand)]
        action: commands::month::MonthAction,
    },
    /// Daily breakdown with session task edits
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Task and action log for a month
    Log(commands::log::LogArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_tracing(&config);

    let result = match cli.command {
        Commands::Month { action } => commands::month::run(action, &config),
        Commands::Day { action } => commands::day::run(action, &config),
        Commands::Log(args) => commands::log::run(args, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
