//! Transform command
//!
//! Usage: textbench transform <TOOL>... [--input <FILE>] [--steps]

use crate::input::read_text;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use textbench_core::transforms;
use textbench_core::TextPipeline;

#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Transforms to apply, in order
    #[arg(required_unless_present = "list")]
    pub tools: Vec<String>,

    /// Input file (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print every intermediate result, not only the final text
    #[arg(long)]
    pub steps: bool,

    /// List the available transforms and exit
    #[arg(long)]
    pub list: bool,
}

/// Execute transform command
pub fn execute(args: TransformArgs) -> Result<()> {
    if args.list {
        for name in transforms::available() {
            println!("{name}");
        }
        return Ok(());
    }

    let pipeline = TextPipeline::from_names(&args.tools[..])?;
    let text = read_text(args.input.as_deref())?;

    if args.steps {
        let layers = pipeline.process(&text);
        for layer in layers.transform_layers() {
            println!("== {}", layer.transform_name);
            println!("{}", layer.text);
        }
    } else {
        print!("{}", pipeline.run(&text));
    }

    Ok(())
}
