//! Pure numeric routines behind the calculator.
//!
//! Square roots are taken by Newton-Raphson iteration unless
//! [`SqrtMethod::Builtin`] is selected. Negative input yields `NaN`.

use crate::domain::model::SqrtMethod;
use crate::utils::error::{Result, SigmaError};

/// Convergence tolerance on `|guess² - x|`. Fixed, not configurable.
pub const TOLERANCE: f64 = 1e-5;

/// Default cap on Newton-Raphson steps before giving up.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

pub fn absolute(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// May overflow to infinity for very large magnitudes.
pub fn square(x: f64) -> f64 {
    x * x
}

/// Newton-Raphson square root seeded at `x / 2`.
///
/// Returns `NaN` for negative (or NaN) input and exactly `0.0` for zero,
/// without entering the iteration. Iteration stops once
/// `|guess² - x| <= TOLERANCE` holds and the guess no longer moves, so small
/// inputs are resolved to full precision rather than accepted at the seed.
/// Fails with [`SigmaError::ConvergenceFailure`] once `max_iterations`
/// updates have been made without reaching that point.
pub fn newton_square_root(x: f64, max_iterations: usize) -> Result<f64> {
    if x.is_nan() || x < 0.0 {
        return Ok(f64::NAN);
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    if x.is_infinite() {
        return Ok(f64::INFINITY);
    }

    let mut guess = x / 2.0;
    if guess == 0.0 {
        // x / 2 underflows for the smallest subnormals
        guess = x;
    }
    let mut iterations = 0;
    loop {
        let next = (guess + x / guess) / 2.0;
        let settled = absolute(next - guess) <= 2.0 * f64::EPSILON * next;
        if settled && absolute(square(guess) - x) <= TOLERANCE {
            break;
        }
        if iterations >= max_iterations {
            tracing::warn!(
                "Square root of {} stalled at {} after {} iterations",
                x,
                guess,
                iterations
            );
            return Err(SigmaError::ConvergenceFailure {
                value: x,
                iterations,
            });
        }
        guess = next;
        iterations += 1;
    }

    tracing::trace!("sqrt({}) = {} in {} iterations", x, guess, iterations);
    Ok(guess)
}

/// Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    summation(values) / values.len() as f64
}

pub fn summation(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Settings for the operations that need a square root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericSettings {
    pub sqrt_method: SqrtMethod,
    pub max_iterations: usize,
}

impl Default for NumericSettings {
    fn default() -> Self {
        Self {
            sqrt_method: SqrtMethod::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl NumericSettings {
    pub fn square_root(&self, x: f64) -> Result<f64> {
        match self.sqrt_method {
            SqrtMethod::NewtonRaphson => newton_square_root(x, self.max_iterations),
            SqrtMethod::Builtin => Ok(x.sqrt()),
        }
    }

    /// Population standard deviation (divisor `n`, not `n - 1`).
    pub fn population_std_dev(&self, values: &[f64]) -> Result<f64> {
        if values.is_empty() {
            return Ok(f64::NAN);
        }
        // sum / n can miss a repeated value by an ulp
        if values.iter().all(|v| *v == values[0]) {
            return Ok(0.0);
        }
        let center = mean(values);
        let squared_diffs = values
            .iter()
            .fold(0.0, |acc, v| acc + square(v - center));
        self.square_root(squared_diffs / values.len() as f64)
    }
}
