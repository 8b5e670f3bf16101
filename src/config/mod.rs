pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{Operation, SqrtMethod};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sigma-calc")]
#[command(about = "Standard deviation and summation over a short list of numbers")]
pub struct CliConfig {
    /// Comma-separated numbers; skips the interactive prompts
    #[arg(long, allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Operation applied to --values
    #[arg(long, value_enum, default_value = "std-dev")]
    pub operation: Operation,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Minimum number of values (2-100)")]
    pub min_count: Option<usize>,

    #[arg(long, help = "Maximum number of values (2-100)")]
    pub max_count: Option<usize>,

    #[arg(long, help = "Newton-Raphson iteration cap")]
    pub max_iterations: Option<usize>,

    #[arg(long, value_enum)]
    pub sqrt_method: Option<SqrtMethod>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
