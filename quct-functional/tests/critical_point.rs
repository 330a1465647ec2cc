use approx::assert_relative_eq;

use quct_functional::{
    Comparison, CriticalPointError, FunctionalParams, ThirdDerivative, find_critical_point,
};
use quct_solve::{Model, equation::bisection};

/// Pinned independently of the solver (30-digit arithmetic).
const GAMMA_STAR_ANALYTIC: f64 = 0.395_946_714_408_127_1;

#[test]
fn sign_change_precondition_holds_for_gue() {
    let model = ThirdDerivative::new(FunctionalParams::gue());

    let at_lower = model.call(&0.001).expect("model is infallible");
    let at_upper = model.call(&1.0).expect("model is infallible");

    assert!(at_lower < 0.0);
    assert!(at_upper > 0.0);
}

#[test]
fn gue_critical_point_matches_pinned_fixture() {
    let solution = find_critical_point(FunctionalParams::gue(), &bisection::Config::default())
        .expect("search should converge");

    assert_eq!(solution.status, bisection::Status::Converged);
    assert_relative_eq!(solution.x, GAMMA_STAR_ANALYTIC, epsilon = 1e-11);
    assert!(solution.residual.abs() < 1e-10);
}

#[test]
fn search_is_deterministic() {
    let config = bisection::Config::default();

    let first = find_critical_point(FunctionalParams::gue(), &config).expect("should converge");
    let second = find_critical_point(FunctionalParams::gue(), &config).expect("should converge");

    assert_eq!(first.x.to_bits(), second.x.to_bits());
    assert_eq!(first.residual.to_bits(), second.residual.to_bits());
    assert_eq!(first.iters, second.iters);
}

#[test]
fn removing_sign_change_raises_bracket_error() {
    // With μ = 0 both channels pull the third derivative negative over the
    // whole bracket, so no root is guaranteed and the search must fail
    // loudly instead of returning a point estimate.
    let params = FunctionalParams::gue().with_mu(0.0);

    let result = find_critical_point(params, &bisection::Config::default());

    assert!(matches!(
        result,
        Err(CriticalPointError::Solve(
            bisection::Error::NoSignChange { .. }
        ))
    ));
}

#[test]
fn invalid_params_are_rejected_before_solving() {
    let gue = FunctionalParams::gue();
    let params = FunctionalParams::new(
        quct_functional::Channel::new(1.0, -3.2),
        gue.functional,
        gue.mu,
    );

    let result = find_critical_point(params, &bisection::Config::default());

    assert!(matches!(result, Err(CriticalPointError::Params(_))));
}

#[test]
fn gue_prediction_is_not_within_confirmation_threshold() {
    let solution = find_critical_point(FunctionalParams::gue(), &bisection::Config::default())
        .expect("search should converge");

    let comparison = Comparison::against_measurement(solution.x);

    assert_relative_eq!(comparison.absolute_deviation(), 1.224_9e-4, epsilon = 1e-8);
    assert_relative_eq!(comparison.relative_error_ppb(), 309_455.27, epsilon = 1.0);
    assert!(!comparison.is_confirmed());
}
