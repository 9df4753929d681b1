mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    components, init, migrate, render, validate, ComponentsArgs, InitArgs, MigrateArgs,
    RenderArgs, ValidateArgs,
};
use tracing_subscriber::EnvFilter;

/// puckblocks CLI - migrate and render page-builder documents
#[derive(Parser, Debug)]
#[command(name = "puckblocks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log routine events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a puckblocks.config.json in the current directory
    Init(InitArgs),

    /// Convert legacy content (text, HTML, JSON) into page documents
    Migrate(MigrateArgs),

    /// Render page content to static HTML
    Render(RenderArgs),

    /// Check whether a JSON file is a valid page document
    Validate(ValidateArgs),

    /// Print the field configuration of the built-in components
    Components(ComponentsArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Migrate(args) => migrate(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Components(args) => components(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
