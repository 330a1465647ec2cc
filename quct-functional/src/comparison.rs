use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Critical parameter measured independently of the model.
///
/// Source: statistical analysis of the first 1,000,000 nontrivial zeros of
/// the Riemann zeta function, fitting the spectral form factor to the GUE
/// prediction. This value is a measurement, not a model parameter.
pub const GAMMA_STAR_MEASURED: f64 = 0.395_824_224_515_108_2;

/// Confirmation threshold for the relative error, 1 part per million
/// expressed in ppb.
pub const CONFIRMATION_THRESHOLD_PPB: f64 = 1000.0;

/// Comparison of an analytic prediction against an independent measurement.
///
/// Deviation, relative error, and the confirmation verdict are derived on
/// demand from the two stored values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Comparison {
    /// The analytically predicted critical parameter.
    pub predicted: f64,
    /// The measured critical parameter.
    pub measured: f64,
}

impl Comparison {
    /// Creates a comparison between a prediction and a measurement.
    #[must_use]
    pub fn new(predicted: f64, measured: f64) -> Self {
        Self {
            predicted,
            measured,
        }
    }

    /// Compares a prediction against [`GAMMA_STAR_MEASURED`].
    #[must_use]
    pub fn against_measurement(predicted: f64) -> Self {
        Self::new(predicted, GAMMA_STAR_MEASURED)
    }

    /// Absolute deviation between prediction and measurement.
    #[must_use]
    pub fn absolute_deviation(&self) -> f64 {
        (self.predicted - self.measured).abs()
    }

    /// Relative error in parts per billion, taken against the measurement.
    #[must_use]
    pub fn relative_error_ppb(&self) -> f64 {
        self.absolute_deviation() / self.measured.abs() * 1e9
    }

    /// Whether the relative error is below [`CONFIRMATION_THRESHOLD_PPB`].
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.relative_error_ppb() < CONFIRMATION_THRESHOLD_PPB
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<45} {:.16}",
            "QUCT Analytical Prediction (from F3(γ)=0):", self.predicted
        )?;
        writeln!(
            f,
            "{:<45} {:.16}",
            "Riemann Zeros Measurement (1e6 zeros):", self.measured
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<45} {:.2e}",
            "Absolute Deviation:",
            self.absolute_deviation()
        )?;
        writeln!(
            f,
            "{:<45} {:.2} ppb",
            "Relative Error:",
            self.relative_error_ppb()
        )?;
        writeln!(f)?;

        if self.is_confirmed() {
            writeln!(
                f,
                "✅ CONCLUSION: The agreement is within 1 part per million."
            )?;
            writeln!(
                f,
                "   This constitutes a high-precision confirmation of the prediction."
            )
        } else {
            writeln!(
                f,
                "❌ CONCLUSION: The deviation exceeds the threshold for confirmation."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn deviation_is_symmetric() {
        let forward = Comparison::new(1.001, 1.0);
        let backward = Comparison::new(1.0, 1.001);
        assert_relative_eq!(
            forward.absolute_deviation(),
            backward.absolute_deviation()
        );
        assert_relative_eq!(forward.absolute_deviation(), 1e-3, epsilon = 1e-12);
    }

    #[test]
    fn relative_error_scales_to_ppb() {
        // A deviation of 1e-9 against a measurement of 1.0 is exactly 1 ppb.
        let comparison = Comparison::new(1.0 + 1e-9, 1.0);
        assert_relative_eq!(comparison.relative_error_ppb(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn exact_agreement_is_confirmed() {
        let comparison = Comparison::against_measurement(GAMMA_STAR_MEASURED);
        assert_relative_eq!(comparison.relative_error_ppb(), 0.0);
        assert!(comparison.is_confirmed());
    }

    #[test]
    fn threshold_separates_verdicts() {
        let just_inside = Comparison::new(1.0 + 9.99e-7, 1.0);
        assert!(just_inside.is_confirmed());

        let just_outside = Comparison::new(1.0 + 1.01e-6, 1.0);
        assert!(!just_outside.is_confirmed());
    }

    #[test]
    fn report_states_a_conclusion() {
        let report = Comparison::new(1.0, 1.0).to_string();
        assert!(report.contains("CONCLUSION"));
        assert!(report.contains("ppb"));
    }
}
