use std::convert::Infallible;

use quct_solve::Model;

use crate::FunctionalParams;

/// Evaluates the third derivative of the QUCT functional,
/// `F3(γ) = −A·a³·e^(−aγ) − B·b³·e^(−bγ) + 2μ`.
///
/// The critical parameter γ* is defined as the root of this function.
/// Evaluation is pure: the same γ always produces the same value.
#[derive(Debug, Clone, Copy)]
pub struct ThirdDerivative {
    params: FunctionalParams,
}

impl ThirdDerivative {
    /// Creates the model for a given parameter set.
    #[must_use]
    pub fn new(params: FunctionalParams) -> Self {
        Self { params }
    }

    /// Returns the parameters the model evaluates.
    #[must_use]
    pub fn params(&self) -> &FunctionalParams {
        &self.params
    }
}

impl Model for ThirdDerivative {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let gamma = *input;
        Ok(self.params.geometric.third_derivative_term(gamma)
            + self.params.functional.third_derivative_term(gamma)
            + 2.0 * self.params.mu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(gamma: f64) -> f64 {
        let model = ThirdDerivative::new(FunctionalParams::gue());
        model.call(&gamma).expect("model is infallible")
    }

    #[test]
    fn has_opposite_signs_at_domain_endpoints() {
        assert!(eval(0.001) < 0.0);
        assert!(eval(1.0) > 0.0);
    }

    #[test]
    fn matches_reference_values_at_endpoints() {
        assert_relative_eq!(eval(0.001), -33.560_647_794_177_285, epsilon = 1e-9);
        assert_relative_eq!(eval(1.0), 12.369_402_709_464_831, epsilon = 1e-9);
    }

    #[test]
    fn large_gamma_approaches_twice_mu() {
        // Both exponential channels vanish as γ grows.
        let params = FunctionalParams::gue();
        assert_relative_eq!(eval(50.0), 2.0 * params.mu, epsilon = 1e-9);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let gamma = 0.395_924;
        assert_eq!(eval(gamma).to_bits(), eval(gamma).to_bits());
    }
}
