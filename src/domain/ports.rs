use crate::domain::model::{InputBounds, SqrtMethod};

pub trait ConfigProvider {
    fn input_bounds(&self) -> InputBounds;
    fn max_iterations(&self) -> usize;
    fn sqrt_method(&self) -> SqrtMethod;
}

/// The display side of form mode. Exactly one of the two calls is made per
/// evaluation, after `clear`.
pub trait Presenter {
    fn clear(&mut self);
    fn show_result(&mut self, text: &str);
    fn show_error(&mut self, text: &str);
}
