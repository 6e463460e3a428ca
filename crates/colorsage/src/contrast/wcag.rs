use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::luminance::contrast_ratio;
use crate::color::Color;

/// Minimum ratios for each conformance level (WCAG 2.1 SC 1.4.3 / 1.4.6).
pub const AA_NORMAL_THRESHOLD: f64 = 4.5;
pub const AAA_NORMAL_THRESHOLD: f64 = 7.0;
pub const AA_LARGE_THRESHOLD: f64 = 3.0;
pub const AAA_LARGE_THRESHOLD: f64 = 4.5;

/// Conformance level and text size a ratio is graded against.
/// Large text is 18pt+ regular or 14pt+ bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    AaNormal,
    AaaNormal,
    AaLarge,
    AaaLarge,
}

impl WcagLevel {
    pub const ALL: &[WcagLevel] = &[
        WcagLevel::AaNormal,
        WcagLevel::AaaNormal,
        WcagLevel::AaLarge,
        WcagLevel::AaaLarge,
    ];

    pub fn threshold(&self) -> f64 {
        match self {
            WcagLevel::AaNormal => AA_NORMAL_THRESHOLD,
            WcagLevel::AaaNormal => AAA_NORMAL_THRESHOLD,
            WcagLevel::AaLarge => AA_LARGE_THRESHOLD,
            WcagLevel::AaaLarge => AAA_LARGE_THRESHOLD,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WcagLevel::AaNormal => "AA Normal",
            WcagLevel::AaaNormal => "AAA Normal",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::AaaLarge => "AAA Large",
        }
    }
}

/// Contrast ratio of a pair and its pass/fail state at each level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub aa_normal_pass: bool,
    pub aaa_normal_pass: bool,
    pub aa_large_pass: bool,
    pub aaa_large_pass: bool,
}

impl ContrastResult {
    /// Grade an already computed ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal_pass: ratio >= AA_NORMAL_THRESHOLD,
            aaa_normal_pass: ratio >= AAA_NORMAL_THRESHOLD,
            aa_large_pass: ratio >= AA_LARGE_THRESHOLD,
            aaa_large_pass: ratio >= AAA_LARGE_THRESHOLD,
        }
    }

    pub fn passes(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::AaNormal => self.aa_normal_pass,
            WcagLevel::AaaNormal => self.aaa_normal_pass,
            WcagLevel::AaLarge => self.aa_large_pass,
            WcagLevel::AaaLarge => self.aaa_large_pass,
        }
    }

    /// Plain-text report of the pair, one line per level.
    pub fn summary(&self, text: Color, background: Color) -> String {
        let mut out = format!(
            "Contrast Ratio: {}\nText: {text}\nBackground: {background}",
            format_ratio(self.ratio)
        );
        for &level in WcagLevel::ALL {
            let verdict = if self.passes(level) { "PASS" } else { "FAIL" };
            let _ = write!(out, "\nWCAG {}: {verdict}", level.display_name());
        }
        out
    }
}

/// Grade the contrast of `text` drawn on `background`.
pub fn evaluate(text: Color, background: Color) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio(text, background))
}

/// `4.5` -> `"4.50:1"`
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}
