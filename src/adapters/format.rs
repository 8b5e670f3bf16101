use crate::domain::model::ComputationResult;
use crate::utils::error::{Result, SigmaError};
use serde_json::json;

/// Line printed at the end of an interactive session.
pub fn format_cli_result(result: &ComputationResult) -> String {
    match result {
        ComputationResult::StandardDeviation(v) => format!("Standard Deviation (σ): {:.4}", v),
        ComputationResult::Summation(v) => format!("Summation (∑x): {:.4}", v),
    }
}

/// Text for the form's result area.
pub fn format_form_result(result: &ComputationResult) -> String {
    match result {
        ComputationResult::StandardDeviation(v) => format!("Result: σ = {:.4}", v),
        ComputationResult::Summation(v) => format!("Result: ∑x = {:.4}", v),
    }
}

pub fn format_error(error: &SigmaError) -> String {
    error.user_friendly_message()
}

pub fn format_json_result(result: &ComputationResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

pub fn format_json_error(error: &SigmaError) -> Result<String> {
    let body = json!({
        "error": format!("{:?}", error.category()).to_lowercase(),
        "message": error.user_friendly_message(),
    });
    Ok(serde_json::to_string(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_result_lines() {
        assert_eq!(
            format_cli_result(&ComputationResult::StandardDeviation(2.0_f64.sqrt())),
            "Standard Deviation (σ): 1.4142"
        );
        assert_eq!(
            format_cli_result(&ComputationResult::Summation(15.0)),
            "Summation (∑x): 15.0000"
        );
    }

    #[test]
    fn test_form_result_lines() {
        assert_eq!(
            format_form_result(&ComputationResult::StandardDeviation(0.0)),
            "Result: σ = 0.0000"
        );
        assert_eq!(
            format_form_result(&ComputationResult::Summation(-1.23456)),
            "Result: ∑x = -1.2346"
        );
    }

    #[test]
    fn test_json_output() {
        let text = format_json_result(&ComputationResult::Summation(15.0)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["operation"], "summation");
        assert_eq!(parsed["value"], 15.0);

        let text = format_json_error(&SigmaError::EmptyInput).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["error"], "input");
        assert_eq!(parsed["message"], "Input cannot be empty.");
    }
}
