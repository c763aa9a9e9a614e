mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, export, init, theme, CheckArgs, ExportArgs, InitArgs, ThemeArgs};
use tracing_subscriber::EnvFilter;

/// Folio CLI - build a portfolio page from a form's worth of content
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config, a starter content file and the page template
    Init(InitArgs),

    /// Validate a content file and list every field error
    Check(CheckArgs),

    /// Render the content into the template and write index.html
    Export(ExportArgs),

    /// Show or change the stored theme preference
    Theme(ThemeArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match std::env::current_dir() {
        Ok(cwd) => match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Check(args) => check(args, &cwd),
            Command::Export(args) => export(args, &cwd).await,
            Command::Theme(args) => theme(args, &cwd).map(|_| ()),
        },
        Err(err) => Err(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
