use crate::domain::model::{InputBounds, NumberSequence, Operation};
use crate::utils::error::{Result, SigmaError};
use thiserror::Error;

/// Why a single interactive line was refused. The display text is the
/// re-prompt message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineRejection {
    #[error("Invalid input. Please enter an integer.")]
    NotAnInteger,

    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { min: usize, max: usize },

    #[error("Invalid input. Please enter a real number.")]
    NotARealNumber,

    #[error("Invalid choice. Please select 1 or 2.")]
    InvalidChoice,

    #[error("Invalid input. Please enter 1 or 2.")]
    NotAChoice,
}

/// Parses one token as a finite real number, locale-independent.
pub fn parse_value(token: &str) -> Result<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(SigmaError::MalformedNumber {
            token: token.to_string(),
        });
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SigmaError::MalformedNumber {
            token: trimmed.to_string(),
        }),
    }
}

/// Parses comma-separated numbers into a [`NumberSequence`].
///
/// The count is checked before any token is parsed, and parsing stops at the
/// first bad token.
pub fn parse_list(raw: &str, bounds: &InputBounds) -> Result<NumberSequence> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(SigmaError::EmptyInput);
    }

    let tokens: Vec<&str> = input.split(',').collect();
    bounds.check_count(tokens.len())?;

    let values = tokens
        .iter()
        .map(|token| parse_value(token))
        .collect::<Result<Vec<f64>>>()?;

    NumberSequence::new(values, bounds)
}

pub fn parse_count_line(line: &str, bounds: &InputBounds) -> std::result::Result<usize, LineRejection> {
    let count = line
        .trim()
        .parse::<i64>()
        .map_err(|_| LineRejection::NotAnInteger)?;

    let out_of_range = LineRejection::OutOfRange {
        min: bounds.min_count,
        max: bounds.max_count,
    };
    let count = usize::try_from(count).map_err(|_| out_of_range.clone())?;
    if !bounds.contains(count) {
        return Err(out_of_range);
    }
    Ok(count)
}

pub fn parse_value_line(line: &str) -> std::result::Result<f64, LineRejection> {
    parse_value(line).map_err(|_| LineRejection::NotARealNumber)
}

pub fn parse_choice_line(line: &str) -> std::result::Result<Operation, LineRejection> {
    let trimmed = line.trim();
    // only the bare digits are menu entries; "01" or "+1" are other integers
    let choice = match trimmed {
        "1" => 1,
        "2" => 2,
        _ if trimmed.parse::<i64>().is_ok() => return Err(LineRejection::InvalidChoice),
        _ => return Err(LineRejection::NotAChoice),
    };
    Operation::from_menu_choice(choice).ok_or(LineRejection::InvalidChoice)
}
