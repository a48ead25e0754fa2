use derive_more::Display;

/// Results whose formatted percentage falls below this are not shown as a leaf.
pub const LOW_CONFIDENCE_GATE_PERCENT: f64 = 50.0;

/// Raw confidence below this triggers the advisory banner.
pub const ADVISORY_THRESHOLD: f64 = 0.7;

/// A [0, 1] confidence expressed as a percentage with two decimals.
///
/// The gate comparison is made against the rounded value, so `0.49996` reads
/// as `"50.00"` and passes.
#[derive(Clone, Debug, PartialEq, Display)]
#[display(fmt = "{}", text)]
pub struct FormattedConfidence {
    text: String,
    percent: f64,
}

impl FormattedConfidence {
    pub fn from_fraction(confidence: f64) -> Self {
        let text = format!("{:.2}", confidence * 100.0);
        let percent = text.parse().unwrap_or(f64::NAN);
        Self { text, percent }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_below_gate(&self) -> bool {
        self.percent < LOW_CONFIDENCE_GATE_PERCENT
    }

    /// Width for a progress bar, clamped to the drawable range.
    pub fn bar_width(&self) -> f64 {
        if self.percent.is_nan() {
            0.0
        } else {
            self.percent.clamp(0.0, 100.0)
        }
    }
}

pub fn needs_advisory(raw_confidence: f64) -> bool {
    raw_confidence < ADVISORY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(FormattedConfidence::from_fraction(0.4999).as_str(), "49.99");
        assert_eq!(FormattedConfidence::from_fraction(1.0).as_str(), "100.00");
        assert_eq!(FormattedConfidence::from_fraction(0.65).to_string(), "65.00");
        assert_eq!(FormattedConfidence::from_fraction(0.0).as_str(), "0.00");
    }

    #[test]
    fn gate_uses_rounded_value() {
        assert!(FormattedConfidence::from_fraction(0.4999).is_below_gate());
        assert!(!FormattedConfidence::from_fraction(0.49996).is_below_gate());
        assert!(!FormattedConfidence::from_fraction(0.5).is_below_gate());
    }

    #[test]
    fn advisory_threshold_is_independent_of_gate() {
        let confidence = 0.65;
        assert!(!FormattedConfidence::from_fraction(confidence).is_below_gate());
        assert!(needs_advisory(confidence));
        assert!(!needs_advisory(0.7));
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(FormattedConfidence::from_fraction(1.5).bar_width(), 100.0);
        assert_eq!(FormattedConfidence::from_fraction(-0.2).bar_width(), 0.0);
        assert_eq!(FormattedConfidence::from_fraction(f64::NAN).bar_width(), 0.0);
    }
}
