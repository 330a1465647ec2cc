use std::convert::Infallible;

use thiserror::Error;

use quct_solve::equation::{EquationProblem, bisection};

use crate::{FunctionalParams, ParamsError, ThirdDerivative};

/// Fixed search bracket for the critical parameter.
///
/// The physical domain for γ is (0, 1); the lower endpoint stays strictly
/// positive so the bracket never touches the γ = 0 boundary.
pub const SEARCH_BRACKET: [f64; 2] = [0.001, 1.0];

/// Equation problem defining the critical parameter: the residual is the
/// functional's third derivative itself, so the root satisfies F3(γ*) = 0.
#[derive(Debug, Clone, Copy)]
pub struct CriticalPoint;

impl EquationProblem for CriticalPoint {
    type Input = f64;
    type Output = f64;
    type InputError = Infallible;
    type ResidualError = Infallible;

    fn input(&self, x: f64) -> Result<Self::Input, Self::InputError> {
        Ok(x)
    }

    fn residual(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<f64, Self::ResidualError> {
        Ok(*output)
    }
}

/// Errors that can occur during the critical-point search.
#[derive(Debug, Error)]
pub enum CriticalPointError {
    /// The functional parameters fail validation.
    #[error("invalid functional parameters: {0}")]
    Params(#[from] ParamsError),

    /// The solver failed, most notably because the third derivative has no
    /// sign change inside the search bracket.
    #[error("critical-point search failed: {0}")]
    Solve(#[from] bisection::Error),

    /// The solver stopped before reaching the configured tolerances.
    #[error("critical-point search stopped after {iters} iterations without converging")]
    Unconverged { iters: usize },
}

/// Finds the critical parameter γ* where F3(γ*) = 0 inside [`SEARCH_BRACKET`].
///
/// # Errors
///
/// Returns an error if the parameters are invalid, the third derivative
/// has no sign change over the bracket, or the solver stops without
/// converging.
pub fn find_critical_point(
    params: FunctionalParams,
    config: &bisection::Config,
) -> Result<bisection::Solution<f64, f64>, CriticalPointError> {
    params.validate()?;

    let model = ThirdDerivative::new(params);
    let solution = bisection::solve_unobserved(&model, &CriticalPoint, SEARCH_BRACKET, config)?;

    match solution.status {
        bisection::Status::Converged => Ok(solution),
        _ => Err(CriticalPointError::Unconverged {
            iters: solution.iters,
        }),
    }
}
