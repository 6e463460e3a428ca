use serde::{Deserialize, Serialize};

use super::{DEFAULT_TARGET_CONTRAST, Suggestion, suggest_for};
use crate::color::Color;
use crate::contrast::{ContrastResult, evaluate};
use crate::error::ColorError;

/// Which color of the pair a suggestion replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SuggestionTarget {
    #[default]
    Text,
    Background,
}

impl SuggestionTarget {
    pub const ALL: &[SuggestionTarget] = &[SuggestionTarget::Text, SuggestionTarget::Background];

    pub fn display_name(&self) -> &'static str {
        match self {
            SuggestionTarget::Text => "Text Color",
            SuggestionTarget::Background => "Background",
        }
    }
}

/// Outcome of checking a text/background pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    /// Already meets AA for normal text; nothing to suggest.
    Passing { result: ContrastResult },
    NeedsImprovement {
        result: ContrastResult,
        /// Replacements for the text color, measured against the background.
        text: Vec<Suggestion>,
        /// Replacements for the background, measured against the text color.
        background: Vec<Suggestion>,
    },
}

impl Analysis {
    pub fn result(&self) -> &ContrastResult {
        match self {
            Analysis::Passing { result } | Analysis::NeedsImprovement { result, .. } => result,
        }
    }

    pub fn is_passing(&self) -> bool {
        matches!(self, Analysis::Passing { .. })
    }

    /// Suggestions for one side of the pair; empty when passing.
    pub fn suggestions_for(&self, target: SuggestionTarget) -> &[Suggestion] {
        match (self, target) {
            (Analysis::Passing { .. }, _) => &[],
            (Analysis::NeedsImprovement { text, .. }, SuggestionTarget::Text) => text.as_slice(),
            (Analysis::NeedsImprovement { background, .. }, SuggestionTarget::Background) => {
                background.as_slice()
            }
        }
    }
}

/// Evaluate the pair and, when it falls short of AA for normal text, search
/// for replacements of either color reaching `target_contrast`.
pub fn analyze(text: &str, background: &str, target_contrast: f64) -> Result<Analysis, ColorError> {
    let text = Color::parse(text)?;
    let background = Color::parse(background)?;
    let result = evaluate(text, background);

    if result.ratio >= DEFAULT_TARGET_CONTRAST {
        log::debug!("{text} on {background} passes at {:.2}:1", result.ratio);
        return Ok(Analysis::Passing { result });
    }

    Ok(Analysis::NeedsImprovement {
        result,
        text: suggest_for(text, background, target_contrast),
        background: suggest_for(background, text, target_contrast),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_target_all_count() {
        assert_eq!(SuggestionTarget::ALL.len(), 2);
        for t in SuggestionTarget::ALL {
            assert!(!t.display_name().is_empty());
        }
    }

    #[test]
    fn suggestion_target_default() {
        assert_eq!(SuggestionTarget::default(), SuggestionTarget::Text);
    }

    #[test]
    fn suggestion_target_serde_roundtrip() {
        for target in SuggestionTarget::ALL {
            let json = serde_json::to_string(target).unwrap();
            let t2: SuggestionTarget = serde_json::from_str(&json).unwrap();
            assert_eq!(*target, t2);
        }
    }

    #[test]
    fn passing_pair_skips_suggestions() {
        let a = analyze("#000000", "#ffffff", DEFAULT_TARGET_CONTRAST).unwrap();
        assert!(a.is_passing());
        assert!((a.result().ratio - 21.0).abs() < 1e-6);
        for &t in SuggestionTarget::ALL {
            assert!(a.suggestions_for(t).is_empty());
        }
    }

    #[test]
    fn failing_pair_suggests_both_sides() {
        let a = analyze("#777777", "#808080", DEFAULT_TARGET_CONTRAST).unwrap();
        assert!(!a.is_passing());
        assert!(a.result().ratio < 1.5);

        let bg = Color::parse("#808080").unwrap();
        let text = a.suggestions_for(SuggestionTarget::Text);
        assert!(!text.is_empty());
        assert!(text.iter().all(|s| crate::contrast_ratio(s.color, bg) >= 4.5));

        let fg = Color::parse("#777777").unwrap();
        let background = a.suggestions_for(SuggestionTarget::Background);
        assert!(!background.is_empty());
        assert!(background.iter().all(|s| crate::contrast_ratio(s.color, fg) >= 4.5));
    }

    #[test]
    fn gate_is_aa_normal() {
        // #777777 on white is 4.48:1, just under the gate
        let a = analyze("#777777", "#ffffff", DEFAULT_TARGET_CONTRAST).unwrap();
        assert!(!a.is_passing());
        // #767676 on white is 4.54:1
        let a = analyze("#767676", "#ffffff", DEFAULT_TARGET_CONTRAST).unwrap();
        assert!(a.is_passing());
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert!(matches!(
            analyze("#12345", "#ffffff", DEFAULT_TARGET_CONTRAST),
            Err(ColorError::InvalidColorFormat(_))
        ));
        assert!(analyze("#123456", "ffffff", DEFAULT_TARGET_CONTRAST).is_err());
    }

    #[test]
    fn analysis_serializes_with_status_tag() {
        let a = analyze("#000", "#fff", DEFAULT_TARGET_CONTRAST).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["status"], "passing");
        assert_eq!(json["result"]["aa_normal_pass"], true);

        let a = analyze("#777777", "#808080", DEFAULT_TARGET_CONTRAST).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["status"], "needs_improvement");
        assert_eq!(json["text"][0]["color"], "#000000");
    }
}
