use crate::utils::error::{Result, SigmaError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_COUNT: usize = 2;
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Inclusive bounds on how many values a sequence may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBounds {
    pub min_count: usize,
    pub max_count: usize,
}

impl InputBounds {
    pub fn new(min_count: usize, max_count: usize) -> Self {
        Self {
            min_count,
            max_count,
        }
    }

    pub fn check_count(&self, found: usize) -> Result<()> {
        if found < self.min_count {
            return Err(SigmaError::TooFew {
                min: self.min_count,
                found,
            });
        }
        if found > self.max_count {
            return Err(SigmaError::TooMany {
                max: self.max_count,
                found,
            });
        }
        Ok(())
    }

    pub fn contains(&self, count: usize) -> bool {
        self.check_count(count).is_ok()
    }
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COUNT, DEFAULT_MAX_COUNT)
    }
}

/// An ordered list of finite values whose length lies within [`InputBounds`].
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberSequence {
    values: Vec<f64>,
}

impl NumberSequence {
    pub fn new(values: Vec<f64>, bounds: &InputBounds) -> Result<Self> {
        bounds.check_count(values.len())?;
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(SigmaError::MalformedNumber {
                token: bad.to_string(),
            });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Operation {
    #[cfg_attr(feature = "cli", value(name = "std-dev"))]
    StandardDeviation,
    #[cfg_attr(feature = "cli", value(name = "sum"))]
    Summation,
}

impl Operation {
    /// Maps the interactive menu entry; only `"1"` and `"2"` are accepted.
    pub fn from_menu_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Operation::StandardDeviation),
            2 => Some(Operation::Summation),
            _ => None,
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Operation::StandardDeviation => "Standard Deviation (σ)",
            Operation::Summation => "Summation (∑x)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "operation", content = "value", rename_all = "snake_case")]
pub enum ComputationResult {
    Summation(f64),
    StandardDeviation(f64),
}

impl ComputationResult {
    pub fn value(&self) -> f64 {
        match self {
            ComputationResult::Summation(v) | ComputationResult::StandardDeviation(v) => *v,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ComputationResult::Summation(_) => Operation::Summation,
            ComputationResult::StandardDeviation(_) => Operation::StandardDeviation,
        }
    }
}

/// How square roots are taken inside the numeric core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SqrtMethod {
    /// Newton-Raphson iteration seeded at `x / 2`.
    #[default]
    #[serde(alias = "newton")]
    #[cfg_attr(feature = "cli", value(name = "newton"))]
    NewtonRaphson,
    /// The platform `f64::sqrt`.
    Builtin,
}
