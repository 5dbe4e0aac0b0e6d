mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Lottery simulation: fill tickets, draw numbers, collect prizes")]
#[command(version)]
struct Cli {
    /// Game config file (JSON), defaults to the user config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, ticket by ticket
    Play,
    /// Play a single round with tickets given on the command line
    Quick {
        /// Comma separated guesses, repeat for more tickets (e.g. --ticket 1,2,3,4)
        #[arg(short, long = "ticket", value_parser = commands::parse_ticket)]
        tickets: Vec<commands::TicketGuesses>,
        /// Print the round result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the prize table
    Prizes,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_engine={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = config::CliConfig::new(cli.config)
        .load_game_config()
        .and_then(|game_config| match cli.command {
            Commands::Play => commands::play(game_config, cli.seed),
            Commands::Quick { tickets, json } => {
                commands::quick(game_config, cli.seed, tickets, json)
            }
            Commands::Prizes => commands::show_prizes(&game_config),
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
