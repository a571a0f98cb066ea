use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "reveal-cli", version, about = "Reveal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deadline countdown
    Countdown {
        #[command(subcommand)]
        action: commands::countdown::CountdownAction,
    },
    /// Evasive gate simulation
    Gate {
        #[command(subcommand)]
        action: commands::gate::GateAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Countdown { action } => commands::countdown::run(action),
        Commands::Gate { action } => commands::gate::run(action),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
