use crate::color::Color;

// Weights for gamma-linearized R, G, B (WCAG 2.1 relative luminance)
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Linearization breakpoint as written in WCAG 2.1 (IEC 61966-2-1 uses 0.04045).
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Flare term added to both luminances before taking the ratio.
const FLARE: f64 = 0.05;

fn linearize(channel: u8) -> f64 {
    let cs = f64::from(channel) / 255.0;
    if cs <= LINEAR_THRESHOLD {
        cs / 12.92
    } else {
        ((cs + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1] per WCAG 2.1 §1.4.3.
pub fn relative_luminance(c: Color) -> f64 {
    RED_WEIGHT * linearize(c.r) + GREEN_WEIGHT * linearize(c.g) + BLUE_WEIGHT * linearize(c.b)
}

/// WCAG contrast ratio in [1, 21]. Order of the arguments does not matter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let brightest = la.max(lb);
    let darkest = la.min(lb);
    (brightest + FLARE) / (darkest + FLARE)
}
