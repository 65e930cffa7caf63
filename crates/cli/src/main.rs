//! textbench CLI
//!
//! Command-line front end for the textbench text tools

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod input;

#[derive(Debug, Parser)]
#[command(name = "textbench", author, version)]
#[command(about = "Compare, count and transform text", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two files line by line, word by word
    Compare(commands::compare::CompareArgs),
    /// Count characters, words, sentences and paragraphs
    Count(commands::count::CountArgs),
    /// Run text transforms in order
    Transform(commands::transform::TransformArgs),
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Count(args) => commands::count::execute(args),
        Commands::Transform(args) => commands::transform::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("textbench").chain(args.iter().cloned()))
    }

    #[test]
    fn verifies_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compare() {
        let cli = parse(&["compare", "a.txt", "b.txt", "--chars", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.left.to_str(), Some("a.txt"));
                assert!(args.chars);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_transform_chain() {
        let cli = parse(&["transform", "lower", "remove-extra-spaces"]);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.tools, vec!["lower", "remove-extra-spaces"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn transform_requires_tool_or_list() {
        let result = Cli::try_parse_from(["textbench", "transform"]);
        assert!(result.is_err());
    }
}
