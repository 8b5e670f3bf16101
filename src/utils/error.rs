use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigmaError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Too few values: at least {min} required, found {found}")]
    TooFew { min: usize, found: usize },

    #[error("Too many values: at most {max} allowed, found {found}")]
    TooMany { max: usize, found: usize },

    #[error("Malformed number: '{token}'")]
    MalformedNumber { token: String },

    #[error("Square root of {value} did not converge within {iterations} iterations")]
    ConvergenceFailure { value: f64, iterations: usize },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Numeric,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SigmaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SigmaError::EmptyInput
            | SigmaError::TooFew { .. }
            | SigmaError::TooMany { .. }
            | SigmaError::MalformedNumber { .. } => ErrorCategory::Input,
            SigmaError::ConvergenceFailure { .. } => ErrorCategory::Numeric,
            SigmaError::ConfigValidationError { .. }
            | SigmaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SigmaError::IoError(_) | SigmaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Numeric => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::System => ErrorSeverity::High,
        }
    }

    /// Whether the user can simply resubmit different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Input | ErrorCategory::Numeric
        )
    }

    /// Message shown in the result area of the form or on stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SigmaError::EmptyInput => "Input cannot be empty.".to_string(),
            SigmaError::TooFew { min, .. } => {
                if *min == 2 {
                    "At least two values are required.".to_string()
                } else {
                    format!("At least {} values are required.", min)
                }
            }
            SigmaError::TooMany { max, .. } => {
                format!("Too many values. Maximum allowed is {}.", max)
            }
            SigmaError::MalformedNumber { .. } => {
                "Invalid input. Please enter only real numbers.".to_string()
            }
            SigmaError::ConvergenceFailure { value, iterations } => format!(
                "Square root did not converge for {} within {} iterations.",
                value, iterations
            ),
            SigmaError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SigmaError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid setting {} = '{}': {}", field, value, reason),
            SigmaError::IoError(e) => format!("Input/output failure: {}", e),
            SigmaError::SerializationError(e) => format!("Could not render result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SigmaError::EmptyInput => "Type at least two numbers separated by commas",
            SigmaError::TooFew { .. } => "Add more comma-separated values",
            SigmaError::TooMany { .. } => "Remove values until the list fits the maximum",
            SigmaError::MalformedNumber { .. } => {
                "Check for empty entries, stray characters, NaN or Infinity"
            }
            SigmaError::ConvergenceFailure { .. } => {
                "Use values of smaller magnitude, raise max_iterations or use --sqrt-method builtin"
            }
            SigmaError::ConfigValidationError { .. }
            | SigmaError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and retry"
            }
            SigmaError::IoError(_) => "Check that standard input is still open",
            SigmaError::SerializationError(_) => "Retry without --json",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SigmaError>;
