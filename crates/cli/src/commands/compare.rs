//! Compare command
//!
//! Usage: textbench compare <LEFT> <RIGHT> [--chars] [--format text|json]

use super::OutputFormat;
use crate::input::{load_config, read_text};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textbench_core::{CompareEngine, Granularity};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original text file
    pub left: PathBuf,

    /// Changed text file
    pub right: PathBuf,

    /// Compare character by character instead of word by word
    #[arg(long)]
    pub chars: bool,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(short, long, env = "TEXTBENCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.compare;
    if args.chars {
        config = config.with_granularity(Granularity::Char);
    }
    if let Some(limit) = args.max_bytes {
        config = config.with_max_input_bytes(limit);
    }

    let left = read_text(Some(&args.left))?;
    let right = read_text(Some(&args.right))?;

    let engine = CompareEngine::new(config);
    let result = engine.compare_checked(&left, &right)?;
    tracing::info!(summary = %result.summary(), "comparison finished");

    match args.format {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
