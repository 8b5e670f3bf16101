// Adapters layer: raw text in, display strings out.

pub mod format;
pub mod input;
