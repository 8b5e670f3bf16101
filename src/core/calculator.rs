use crate::adapters::format::{format_error, format_form_result};
use crate::adapters::input::parse_list;
use crate::core::numeric::{summation, NumericSettings};
use crate::domain::model::{ComputationResult, InputBounds, NumberSequence, Operation};
use crate::domain::ports::{ConfigProvider, Presenter};
use crate::utils::error::Result;

/// Joins the input adapter to the numeric core.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigmaCalculator {
    bounds: InputBounds,
    numeric: NumericSettings,
}

impl SigmaCalculator {
    pub fn new(bounds: InputBounds, numeric: NumericSettings) -> Self {
        Self { bounds, numeric }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.input_bounds(),
            NumericSettings {
                sqrt_method: config.sqrt_method(),
                max_iterations: config.max_iterations(),
            },
        )
    }

    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    pub fn parse(&self, raw: &str) -> Result<NumberSequence> {
        parse_list(raw, &self.bounds)
    }

    pub fn compute(&self, sequence: &NumberSequence, operation: Operation) -> Result<ComputationResult> {
        let values = sequence.values();
        let result = match operation {
            Operation::StandardDeviation => {
                ComputationResult::StandardDeviation(self.numeric.population_std_dev(values)?)
            }
            Operation::Summation => ComputationResult::Summation(summation(values)),
        };
        tracing::debug!(
            "Computed {:?} over {} values: {}",
            operation,
            sequence.len(),
            result.value()
        );
        Ok(result)
    }

    pub fn evaluate(&self, raw: &str, operation: Operation) -> Result<ComputationResult> {
        let sequence = self.parse(raw).inspect_err(|e| {
            tracing::debug!("Rejected input {:?}: {}", raw, e);
        })?;
        self.compute(&sequence, operation)
    }

    /// One form submission: clears the presenter, then shows either the
    /// result or the error, never both.
    pub fn submit_form<P: Presenter>(
        &self,
        raw: &str,
        operation: Operation,
        presenter: &mut P,
    ) -> Result<ComputationResult> {
        presenter.clear();
        let outcome = self.evaluate(raw, operation);
        match &outcome {
            Ok(result) => presenter.show_result(&format_form_result(result)),
            Err(e) => presenter.show_error(&format_error(e)),
        }
        outcome
    }
}
