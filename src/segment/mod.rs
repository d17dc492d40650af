pub mod classifier;
pub mod pattern;
pub mod segmenter;

pub use segmenter::{Segmenter, TokenizeOption};
