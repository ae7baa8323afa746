use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nextup-cli", version, about = "Nextup CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a task list by computed priority
    Analyze(commands::analyze::AnalyzeArgs),
    /// Suggest the top tasks to work on next
    Suggest(commands::suggest::SuggestArgs),
    /// List available sorting strategies
    Strategies,
    /// Inspect the dependency structure of a task list
    Deps(commands::deps::DepsArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Suggest(args) => commands::suggest::run(args),
        Commands::Strategies => commands::strategies::run(),
        Commands::Deps(args) => commands::deps::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
