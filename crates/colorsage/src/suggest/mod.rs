//! Lighten/darken search for accessible alternatives to a color.
//!
//! The base color is stepped toward white and toward black in ten equal
//! increments. Each variant is measured against the fixed target and kept if it
//! clears the requested ratio. The search is a best-effort heuristic: some
//! pairs (mid grays against each other at high targets) have no qualifying
//! variant and produce an empty list.

mod analysis;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::contrast::contrast_ratio;
use crate::contrast::wcag::{AA_NORMAL_THRESHOLD, AAA_NORMAL_THRESHOLD};

pub use analysis::{Analysis, SuggestionTarget, analyze};

/// Ratio a suggestion must reach unless the caller asks for something else.
pub const DEFAULT_TARGET_CONTRAST: f64 = AA_NORMAL_THRESHOLD;

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 6;

/// Number of lighten/darken increments (factors 0.1 through 1.0).
const STEPS: u32 = 10;

/// A candidate replacement color and its ratio against the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub color: Color,
    pub contrast: f64,
}

/// Badge shown next to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionGrade {
    Aa,
    Aaa,
}

impl SuggestionGrade {
    pub fn display_name(&self) -> &'static str {
        match self {
            SuggestionGrade::Aa => "AA",
            SuggestionGrade::Aaa => "AAA",
        }
    }
}

impl Suggestion {
    pub fn grade(&self) -> SuggestionGrade {
        if self.contrast >= AAA_NORMAL_THRESHOLD {
            SuggestionGrade::Aaa
        } else {
            SuggestionGrade::Aa
        }
    }
}

/// Parse `base` and search for variants of it that reach `target_contrast`
/// against `target`. An unparseable base yields no suggestions.
pub fn generate_accessible_colors(base: &str, target: Color, target_contrast: f64) -> Vec<Suggestion> {
    match Color::parse(base) {
        Ok(base) => suggest_for(base, target, target_contrast),
        Err(e) => {
            log::debug!("no suggestions: {e}");
            Vec::new()
        }
    }
}

/// Lighter and darker variants of `base` reaching `target_contrast` against
/// `target`, highest ratio first, deduplicated, at most [`MAX_SUGGESTIONS`].
pub fn suggest_for(base: Color, target: Color, target_contrast: f64) -> Vec<Suggestion> {
    let mut candidates: Vec<Suggestion> = Vec::with_capacity(2 * STEPS as usize);

    for i in 0..STEPS {
        let factor = f64::from(i + 1) * 0.1;
        for variant in [base.lighten(factor), base.darken(factor)] {
            let contrast = contrast_ratio(variant, target);
            if contrast >= target_contrast && !candidates.iter().any(|s| s.color == variant) {
                candidates.push(Suggestion {
                    color: variant,
                    contrast,
                });
            }
        }
    }

    // Stable, so equal ratios keep scan order
    candidates.sort_by(|a, b| b.contrast.total_cmp(&a.contrast));
    candidates.truncate(MAX_SUGGESTIONS);

    log::debug!(
        "{} suggestion(s) for {base} against {target} at {target_contrast}:1",
        candidates.len()
    );
    candidates
}
