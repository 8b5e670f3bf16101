pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::ConsolePresenter, toml_config::SigmaConfig};
pub use core::{calculator::SigmaCalculator, prompt::PromptSession};
pub use domain::model::{
    ComputationResult, InputBounds, NumberSequence, Operation, SqrtMethod,
};
pub use utils::error::{Result, SigmaError};
