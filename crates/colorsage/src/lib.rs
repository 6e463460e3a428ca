//! WCAG 2.1 contrast analysis for sRGB hex color pairs.
//!
//! Three stateless layers: [`color`] parses and formats hex colors,
//! [`contrast`] computes relative luminance and contrast ratios and grades them
//! against the WCAG thresholds, and [`suggest`] searches lighter and darker
//! variants of a color for accessible alternatives.

pub mod color;
pub mod contrast;
pub mod error;
pub mod settings;
pub mod suggest;

pub use color::Color;
pub use contrast::{ContrastResult, WcagLevel, contrast_ratio, evaluate, relative_luminance};
pub use error::ColorError;
pub use suggest::{
    Analysis, DEFAULT_TARGET_CONTRAST, MAX_SUGGESTIONS, Suggestion, SuggestionGrade,
    SuggestionTarget, analyze, generate_accessible_colors,
};

/// Parse both colors and grade their contrast.
pub fn evaluate_contrast(text: &str, background: &str) -> Result<ContrastResult, ColorError> {
    let text = Color::parse(text)?;
    let background = Color::parse(background)?;
    Ok(evaluate(text, background))
}

/// Accessible alternatives to `base` measured against `target`.
///
/// Never fails: an unparseable color yields an empty list.
pub fn suggest_alternatives(base: &str, target: &str, min_contrast: f64) -> Vec<Suggestion> {
    let Ok(target) = Color::parse(target) else {
        log::debug!("suggest_alternatives: unparseable target {target:?}");
        return Vec::new();
    };
    generate_accessible_colors(base, target, min_contrast)
}
