use anyhow::Result;
use sigma_calc::core::prompt::PromptState;
use sigma_calc::utils::validation::Validate;
use sigma_calc::{ComputationResult, PromptSession, SigmaCalculator, SigmaConfig, SqrtMethod};
use std::io::Cursor;
use tempfile::TempDir;

#[test]
fn test_session_with_configured_bounds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("sigma.toml");
    std::fs::write(
        &config_path,
        r#"
[input]
min_count = 3
max_count = 4

[numeric]
sqrt_method = "builtin"
"#,
    )?;

    let config = SigmaConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.numeric.sqrt_method, SqrtMethod::Builtin);

    let calculator = SigmaCalculator::from_config(&config);
    let script = "2\n5\n3\n2\n4\n9\n1\n";
    let mut session = PromptSession::new(&calculator, Cursor::new(script), Vec::new());
    let result = session.run()?;

    assert_eq!(session.state(), PromptState::Done);
    assert_eq!(session.rejections(), 2);

    // population deviation of [2, 4, 9]
    let expected = (((2.0_f64 - 5.0).powi(2) + (4.0_f64 - 5.0).powi(2) + (9.0_f64 - 5.0).powi(2)) / 3.0).sqrt();
    assert!((result.value() - expected).abs() < 1e-12);

    let output = String::from_utf8(session.into_output())?;
    assert!(output.contains("Enter the number of values (min 3, max 4):"));
    assert_eq!(output.matches("Please enter a number between 3 and 4.").count(), 2);
    Ok(())
}

#[test]
fn test_invalid_input_never_aborts_session() -> Result<()> {
    let calculator = SigmaCalculator::default();
    let script = "\n-1\n1e3\n2\n  \n1,5\n10\n-10\nthree\n9\n2\n";
    let mut session = PromptSession::new(&calculator, Cursor::new(script), Vec::new());

    let result = session.run()?;
    assert_eq!(result, ComputationResult::Summation(0.0));
    assert_eq!(session.rejections(), 7);
    Ok(())
}

#[test]
fn test_unfinished_session_reports_error() {
    let calculator = SigmaCalculator::default();
    let mut session = PromptSession::new(&calculator, Cursor::new("4\n1\n2\n"), Vec::new());

    let err = session.run().unwrap_err();
    assert!(!err.is_recoverable());
    assert_eq!(session.state(), PromptState::AwaitingValue(3));
}
