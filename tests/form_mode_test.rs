use sigma_calc::adapters::format::format_cli_result;
use sigma_calc::core::numeric::{newton_square_root, square, DEFAULT_MAX_ITERATIONS};
use sigma_calc::{
    ComputationResult, ConsolePresenter, InputBounds, Operation, SigmaCalculator, SigmaError,
};

fn submit(raw: &str, operation: Operation) -> (Result<ComputationResult, SigmaError>, String, String) {
    let calculator = SigmaCalculator::default();
    let mut presenter = ConsolePresenter::with_writers(Vec::new(), Vec::new());
    let outcome = calculator.submit_form(raw, operation, &mut presenter);
    let (out, err) = presenter.into_writers();
    (
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_reference_list_through_both_operations() {
    let calculator = SigmaCalculator::default();
    let sequence = calculator.parse("1,2,3,4,5").unwrap();
    assert_eq!(sequence.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);

    let sd = calculator
        .compute(&sequence, Operation::StandardDeviation)
        .unwrap();
    assert_eq!(format_cli_result(&sd), "Standard Deviation (σ): 1.4142");

    let sum = calculator.compute(&sequence, Operation::Summation).unwrap();
    assert_eq!(format_cli_result(&sum), "Summation (∑x): 15.0000");
}

#[test]
fn test_form_result_text() {
    let (outcome, out, err) = submit(" 1, 2 ,3,4,5 ", Operation::StandardDeviation);
    assert!(outcome.is_ok());
    assert_eq!(out, "Result: σ = 1.4142\n");
    assert!(err.is_empty());
}

#[test]
fn test_form_error_texts() {
    let cases = [
        ("", "Input cannot be empty."),
        ("1", "At least two values are required."),
        ("1,,3", "Invalid input. Please enter only real numbers."),
        ("1,abc", "Invalid input. Please enter only real numbers."),
        ("1,NaN", "Invalid input. Please enter only real numbers."),
        ("1,Infinity", "Invalid input. Please enter only real numbers."),
    ];

    for (raw, message) in cases {
        let (outcome, out, err) = submit(raw, Operation::StandardDeviation);
        assert!(outcome.is_err(), "{:?} should be rejected", raw);
        assert!(out.is_empty(), "no partial result for {:?}", raw);
        assert_eq!(err, format!("❌ {}\n", message));
    }

    let too_many = (0..101).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
    let (outcome, _, err) = submit(&too_many, Operation::Summation);
    assert!(matches!(outcome, Err(SigmaError::TooMany { found: 101, .. })));
    assert_eq!(err, "❌ Too many values. Maximum allowed is 100.\n");
}

#[test]
fn test_identical_values_have_zero_deviation() {
    let calculator = SigmaCalculator::default();
    for raw in ["7,7", "0.1,0.1,0.1", "-2.5,-2.5,-2.5,-2.5"] {
        let result = calculator
            .evaluate(raw, Operation::StandardDeviation)
            .unwrap();
        assert_eq!(result, ComputationResult::StandardDeviation(0.0));
    }
}

#[test]
fn test_custom_bounds() {
    let calculator = SigmaCalculator::new(InputBounds::new(3, 3), Default::default());
    assert!(matches!(
        calculator.evaluate("1,2", Operation::Summation),
        Err(SigmaError::TooFew { min: 3, found: 2 })
    ));
    assert_eq!(
        calculator.evaluate("1,2,3", Operation::Summation).unwrap(),
        ComputationResult::Summation(6.0)
    );
}

#[test]
fn test_square_root_edge_cases() {
    assert_eq!(newton_square_root(0.0, DEFAULT_MAX_ITERATIONS).unwrap(), 0.0);
    assert!(newton_square_root(-4.0, DEFAULT_MAX_ITERATIONS)
        .unwrap()
        .is_nan());
    for y in [0.0, 1e-4, 0.003, 0.5, 3.0, 17.25, 250.0] {
        let root = newton_square_root(square(y), DEFAULT_MAX_ITERATIONS).unwrap();
        assert!((root - y).abs() < 1e-4);
    }
}

#[test]
fn test_small_magnitude_deviation() {
    let cases = [
        ("0.01,0.02,0.03", "Result: σ = 0.0082\n"),
        ("0.001,0.002", "Result: σ = 0.0005\n"),
    ];
    for (raw, expected) in cases {
        let (outcome, out, _) = submit(raw, Operation::StandardDeviation);
        assert!(outcome.is_ok());
        assert_eq!(out, expected);
    }
}

#[test]
fn test_overflowing_deviation_is_infinite() {
    let calculator = SigmaCalculator::default();
    for raw in ["1e308,-1e308", "-1.7e308,1.7e308,0"] {
        let value = calculator
            .evaluate(raw, Operation::StandardDeviation)
            .unwrap()
            .value();
        assert!(value.is_infinite() && value > 0.0, "{} gave {}", raw, value);
    }
}
