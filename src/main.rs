use action_snippets::cli::commands::{cmd_complete, cmd_resolve, cmd_snippets};
use action_snippets::cli::config::{Cli, Commands, load_config};
use action_snippets::context::position::Position;
use clap::Parser;
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // stdout carries command output; logs go to stderr.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Snippets {
            catalog,
            format,
            output,
        } => {
            // Resolve format: CLI > config > default
            let format = format.unwrap_or_else(|| config.snippets.format.clone());
            cmd_snippets(&catalog, &format, output.as_deref(), &config)?;
        }
        Commands::Complete {
            catalog,
            document,
            line,
            column,
        } => {
            cmd_complete(&catalog, &document, Position::new(line, column), &config)?;
        }
        Commands::Resolve { catalog, text } => {
            if !cmd_resolve(&catalog, &text, &config)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
