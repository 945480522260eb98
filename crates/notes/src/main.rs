//! Notes CLI - course notes code viewer.
//!
//! Provides commands for:
//! - `render`: Render a notes file as a code viewer fragment or JSON
//! - `outline`: Print the section outline of a notes file
//! - `highlight`: Highlight a source file with a language's rules
//! - `languages`: List languages with highlight rules

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{HighlightArgs, LanguagesArgs, OutlineArgs, RenderArgs};
use output::Output;

/// Notes - course notes code viewer.
#[derive(Parser)]
#[command(name = "notes", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a notes file as a code viewer fragment.
    Render(RenderArgs),
    /// Print the section outline of a notes file.
    Outline(OutlineArgs),
    /// Highlight a source file.
    Highlight(HighlightArgs),
    /// List languages with highlight rules.
    Languages(LanguagesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Outline(args) => args.execute(),
        Commands::Highlight(args) => args.execute(),
        Commands::Languages(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
