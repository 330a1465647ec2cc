use thiserror::Error;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// One exponential channel of the QUCT functional.
///
/// A channel contributes `amplitude · e^(−decay·γ)` to the functional and
/// therefore `−amplitude · decay³ · e^(−decay·γ)` to its third derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Channel {
    /// Amplitude of the exponential term.
    pub amplitude: f64,
    /// Decay rate of the exponential term.
    pub decay: f64,
}

impl Channel {
    /// Creates a new channel.
    #[must_use]
    pub fn new(amplitude: f64, decay: f64) -> Self {
        Self { amplitude, decay }
    }

    /// Contribution of this channel to the functional's third derivative.
    #[must_use]
    pub fn third_derivative_term(&self, gamma: f64) -> f64 {
        -self.amplitude * self.decay.powi(3) * (-self.decay * gamma).exp()
    }

    fn validate(&self) -> Result<(), ParamsError> {
        if !self.amplitude.is_finite() {
            return Err(ParamsError::NonFiniteAmplitude {
                value: self.amplitude,
            });
        }
        if !self.decay.is_finite() || self.decay <= 0.0 {
            return Err(ParamsError::NonPositiveDecay { value: self.decay });
        }
        Ok(())
    }
}

/// Parameters of the QUCT functional.
///
/// The values are derived analytically from the boundary conditions of the
/// variational problem for a given symmetry class; nothing here is fitted
/// to data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct FunctionalParams {
    /// Geometric channel (amplitude A, decay rate a).
    pub geometric: Channel,
    /// Functional channel (amplitude B, decay rate b).
    pub functional: Channel,
    /// Critical chemical potential μ.
    pub mu: f64,
}

/// Errors that can occur when validating functional parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamsError {
    #[error("channel amplitude is not finite: {value}")]
    NonFiniteAmplitude { value: f64 },

    #[error("channel decay rate must be finite and positive: {value}")]
    NonPositiveDecay { value: f64 },

    #[error("mu is not finite: {value}")]
    NonFiniteMu { value: f64 },
}

impl FunctionalParams {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(geometric: Channel, functional: Channel, mu: f64) -> Self {
        Self {
            geometric,
            functional,
            mu,
        }
    }

    /// Returns the parameters for the GUE (β = 2) symmetry class.
    ///
    /// A = 1.0, a = 3.2, B = 0.9, b = 2.6, with μ fixed by the requirement
    /// that the functional's third derivative has a root at the critical
    /// parameter.
    #[must_use]
    pub fn gue() -> Self {
        Self {
            geometric: Channel::new(1.0, 3.2),
            functional: Channel::new(0.9, 2.6),
            mu: 7.439_993_889_526_777,
        }
    }

    /// Validates that the parameters describe a usable functional.
    ///
    /// # Errors
    ///
    /// Returns an error if an amplitude or μ is non-finite, or a decay
    /// rate is not strictly positive.
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.geometric.validate()?;
        self.functional.validate()?;
        if !self.mu.is_finite() {
            return Err(ParamsError::NonFiniteMu { value: self.mu });
        }
        Ok(())
    }

    /// Returns `self` with the given μ, keeping other fields unchanged.
    #[must_use]
    pub fn with_mu(self, mu: f64) -> Self {
        Self { mu, ..self }
    }
}
