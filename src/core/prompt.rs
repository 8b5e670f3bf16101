use crate::adapters::format::format_cli_result;
use crate::adapters::input::{parse_choice_line, parse_count_line, parse_value_line, LineRejection};
use crate::core::calculator::SigmaCalculator;
use crate::domain::model::{ComputationResult, NumberSequence, Operation};
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    AwaitingCount,
    /// 1-based index of the value being asked for.
    AwaitingValue(usize),
    AwaitingChoice,
    Done,
}

/// The interactive question-and-answer session.
///
/// Invalid lines are answered with a message and asked again; the session
/// only ends with a result or when the input stream closes. If the chosen
/// computation fails, the session stays at the menu and `run` may be called
/// again to pick another operation.
pub struct PromptSession<'a, R, W> {
    calculator: &'a SigmaCalculator,
    input: R,
    output: W,
    state: PromptState,
    count: usize,
    values: Vec<f64>,
    rejections: usize,
}

impl<'a, R: BufRead, W: Write> PromptSession<'a, R, W> {
    pub fn new(calculator: &'a SigmaCalculator, input: R, output: W) -> Self {
        Self {
            calculator,
            input,
            output,
            state: PromptState::AwaitingCount,
            count: 0,
            values: Vec::new(),
            rejections: 0,
        }
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Number of lines refused so far.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<ComputationResult> {
        let bounds = *self.calculator.bounds();
        if self.state == PromptState::AwaitingCount {
            writeln!(self.output, "=== Sigma Function CLI ===")?;
            writeln!(
                self.output,
                "Enter the number of values (min {}, max {}):",
                bounds.min_count, bounds.max_count
            )?;
        }

        loop {
            match self.state {
                PromptState::AwaitingCount => {
                    let line = self.read_line()?;
                    match parse_count_line(&line, &bounds) {
                        Ok(count) => {
                            tracing::debug!("Session will read {} values", count);
                            self.count = count;
                            self.values = Vec::with_capacity(count);
                            self.state = PromptState::AwaitingValue(1);
                        }
                        Err(rejection) => self.reject(rejection)?,
                    }
                }
                PromptState::AwaitingValue(index) => {
                    write!(self.output, "Enter value {}: ", index)?;
                    self.output.flush()?;
                    let line = self.read_line()?;
                    match parse_value_line(&line) {
                        Ok(value) => {
                            self.values.push(value);
                            if index == self.count {
                                self.print_menu()?;
                                self.state = PromptState::AwaitingChoice;
                            } else {
                                self.state = PromptState::AwaitingValue(index + 1);
                            }
                        }
                        Err(rejection) => self.reject(rejection)?,
                    }
                }
                PromptState::AwaitingChoice => {
                    let line = self.read_line()?;
                    match parse_choice_line(&line) {
                        Ok(operation) => {
                            // values stay in place so a failed computation can be retried
                            let sequence = NumberSequence::new(self.values.clone(), &bounds)?;
                            let result = self.calculator.compute(&sequence, operation)?;
                            writeln!(self.output, "{}", format_cli_result(&result))?;
                            self.output.flush()?;
                            self.state = PromptState::Done;
                            return Ok(result);
                        }
                        Err(rejection) => self.reject(rejection)?,
                    }
                }
                PromptState::Done => {
                    return Err(io::Error::other("prompt session already finished").into());
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose Operation:")?;
        for (key, operation) in [(1, Operation::StandardDeviation), (2, Operation::Summation)] {
            writeln!(self.output, "{}. {}", key, operation.menu_label())?;
        }
        Ok(())
    }

    fn reject(&mut self, rejection: LineRejection) -> Result<()> {
        self.rejections += 1;
        tracing::debug!("Rejected line in state {:?}: {:?}", self.state, rejection);
        writeln!(self.output, "{}", rejection)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the session finished",
            )
            .into());
        }
        Ok(line)
    }
}
