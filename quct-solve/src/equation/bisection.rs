//! Root finding via the bisection method.
//!
//! Bisection trades speed for certainty: given endpoints whose residuals
//! differ in sign, the bracket always contains a root, and halving it each
//! iteration converges unconditionally.

mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use crate::{
    equation::{EquationProblem, Evaluation, evaluate},
    model::Model,
    observer::Observer,
};

use bracket::{Bounds, Bracket, Sign};

/// Control actions supported by the bisection solver.
pub enum Action {
    /// Stop the solver early and return the best evaluation seen so far.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based within the bisection loop).
    pub iter: usize,
    /// Current search bracket.
    pub bracket: [f64; 2],
    /// Evaluation at the current midpoint.
    pub eval: &'a Evaluation<I, O>,
}

/// Finds a root of the equation using the bisection method.
/// Observers see each iteration's evaluation and bracket state.
///
/// Endpoints whose residual is already within `residual_tol` short-circuit
/// to a converged solution without entering the loop.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the endpoint residuals
/// share a sign, a residual is non-finite, or the model or problem fails
/// during evaluation.
pub fn solve<I, O, Obs>(
    model: &impl Model<Input = I, Output = O>,
    problem: &impl EquationProblem<Input = I, Output = O>,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<I, O>, Error>
where
    Obs: for<'a> Observer<Event<'a, I, O>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_eval = evaluate(model, problem, left)?;
    let left_residual = left_eval.residual;
    if !left_residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x: left,
            residual: left_residual,
        });
    }
    if left_residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(left_eval, Status::Converged, 0));
    }

    let right_eval = evaluate(model, problem, right)?;
    let right_residual = right_eval.residual;
    if !right_residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x: right,
            residual: right_residual,
        });
    }
    if right_residual.abs() <= config.residual_tol() {
        return Ok(Solution::from_eval(right_eval, Status::Converged, 0));
    }

    let left_sign = Sign::of(left_residual);
    if left_sign == Sign::of(right_residual) {
        return Err(Error::NoSignChange {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let mut bracket = Bracket::new(bounds, left_sign);

    let (mut best, mut best_residual) = if left_residual.abs() <= right_residual.abs() {
        (left_eval, left_residual)
    } else {
        (right_eval, right_residual)
    };

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let mid_eval = evaluate(model, problem, mid)?;
        let mid_residual = mid_eval.residual;

        if !mid_residual.is_finite() {
            return Err(Error::NonFiniteResidual {
                x: mid,
                residual: mid_residual,
            });
        }

        let x_converged = bracket.is_x_converged(config.x_abs_tol(), config.x_rel_tol());
        let residual_converged = mid_residual.abs() <= config.residual_tol();
        let is_better = mid_residual.abs() < best_residual.abs();

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &mid_eval,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    let best_eval = if is_better { mid_eval } else { best };
                    return Ok(Solution::from_eval(
                        best_eval,
                        Status::StoppedByObserver,
                        iter,
                    ));
                }
            }
        }

        if x_converged || residual_converged {
            return Ok(Solution::from_eval(mid_eval, Status::Converged, iter));
        }

        if is_better {
            best = mid_eval;
            best_residual = mid_residual;
        }

        bracket.shrink(mid, Sign::of(mid_residual));
    }

    Ok(Solution::from_eval(
        best,
        Status::MaxIters,
        config.max_iters(),
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the endpoint residuals
/// share a sign, a residual is non-finite, or the model or problem fails
/// during evaluation.
pub fn solve_unobserved<I, O>(
    model: &impl Model<Input = I, Output = O>,
    problem: &impl EquationProblem<Input = I, Output = O>,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<I, O>, Error> {
    solve(model, problem, bracket, config, ())
}
