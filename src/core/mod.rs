pub mod calculator;
pub mod numeric;
pub mod prompt;

pub use crate::domain::model::{ComputationResult, NumberSequence, Operation};
pub use crate::domain::ports::{ConfigProvider, Presenter};
pub use crate::utils::error::Result;
