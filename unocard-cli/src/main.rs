mod commands;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect UNO cards written as `COLOR [VALUE]` tags
#[derive(Parser, Debug)]
#[command(name = "unocard")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse each card and print its color and value
    Show {
        /// Cards such as `RED 7`, `BLUE SKIP`, `WILD` or `WILD4+`, quoted or not
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// List the card colors
    Colors,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let lines = match args.command {
        Command::Show { cards } => commands::show::lines(&cards)?,
        Command::Colors => commands::colors::lines(),
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
