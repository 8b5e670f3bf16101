use crate::core::numeric::DEFAULT_MAX_ITERATIONS;
use crate::core::ConfigProvider;
use crate::domain::model::{InputBounds, SqrtMethod, DEFAULT_MAX_COUNT, DEFAULT_MIN_COUNT};
use crate::utils::error::{SigmaError, Result};
use crate::utils::validation::{
    validate_ordered_bounds, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigmaConfig {
    pub input: InputConfig,
    pub numeric: NumericConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub min_count: usize,
    pub max_count: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_count: DEFAULT_MIN_COUNT,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    pub max_iterations: usize,
    pub sqrt_method: SqrtMethod,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            sqrt_method: SqrtMethod::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    /// Emit log lines as JSON instead of the compact text format.
    pub json: bool,
}

impl SigmaConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SigmaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SigmaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SigmaError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line flags win over file values.
    #[cfg(feature = "cli")]
    pub fn with_overrides(mut self, cli: &crate::config::CliConfig) -> Self {
        if let Some(min) = cli.min_count {
            self.input.min_count = min;
        }
        if let Some(max) = cli.max_count {
            self.input.max_count = max;
        }
        if let Some(iterations) = cli.max_iterations {
            self.numeric.max_iterations = iterations;
        }
        if let Some(method) = cli.sqrt_method {
            self.numeric.sqrt_method = method;
        }
        self.output.json |= cli.json;
        self.logging.verbose |= cli.verbose;
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range(
            "input.min_count",
            self.input.min_count,
            DEFAULT_MIN_COUNT,
            DEFAULT_MAX_COUNT,
        )?;
        validate_range(
            "input.max_count",
            self.input.max_count,
            DEFAULT_MIN_COUNT,
            DEFAULT_MAX_COUNT,
        )?;
        validate_ordered_bounds(
            "input.min_count",
            self.input.min_count,
            "input.max_count",
            self.input.max_count,
        )?;
        validate_positive_number("numeric.max_iterations", self.numeric.max_iterations, 1)?;
        Ok(())
    }
}

impl ConfigProvider for SigmaConfig {
    fn input_bounds(&self) -> InputBounds {
        InputBounds::new(self.input.min_count, self.input.max_count)
    }

    fn max_iterations(&self) -> usize {
        self.numeric.max_iterations
    }

    fn sqrt_method(&self) -> SqrtMethod {
        self.numeric.sqrt_method
    }
}

impl Validate for SigmaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
