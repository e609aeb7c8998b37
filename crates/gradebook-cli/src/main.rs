//! gradebook CLI — runs the course grading scenario.

use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Course grading simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the grading scenario and print the report
    Run {
        #[command(flatten)]
        scenario: commands::ScenarioArgs,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run the scenario and list every participant
    Roster {
        #[command(flatten)]
        scenario: commands::ScenarioArgs,
    },

    /// Generate random participant identities
    People {
        /// How many identities to generate
        #[arg(long, default_value = "5")]
        count: usize,

        /// Seed for the random source
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { scenario, format } => commands::run::execute(scenario, format),
        Commands::Roster { scenario } => commands::roster::execute(scenario),
        Commands::People { count, seed } => commands::people::execute(count, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
