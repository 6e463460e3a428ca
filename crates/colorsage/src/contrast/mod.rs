pub mod luminance;
pub mod wcag;

pub use luminance::{contrast_ratio, relative_luminance};
pub use wcag::{ContrastResult, WcagLevel, evaluate, format_ratio};
