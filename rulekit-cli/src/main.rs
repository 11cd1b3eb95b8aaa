//! rulekit: generate Cursor rule files for your stack.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rulekit_cli_lib::commands::{CheckCommand, GenerateCommand, InitCommand, ListCommand};

#[derive(Parser)]
#[command(name = "rulekit")]
#[command(version)]
#[command(about = "Generate Cursor rule files for your stack", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive wizard and write the rule set
    Init(InitCommand),
    /// Generate a rule set from flags or a profile, no prompts
    Generate(GenerateCommand),
    /// List the identifiers profiles and flags accept
    List,
    /// Check existing rule files for well-formed frontmatter
    Check(CheckCommand),
}

fn main() -> Result<()> {
    // Logs go to stderr so `generate --stdout` output stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rulekit=warn,rulekit_cli_lib=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Init(cmd) => cmd.execute()?,
        Commands::Generate(cmd) => cmd.execute()?,
        Commands::List => ListCommand::execute(),
        Commands::Check(cmd) => cmd.execute()?,
    }

    Ok(())
}
