pub mod compare;
pub mod count;
pub mod transform;

use clap::ValueEnum;

/// Output rendering shared by the subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
