//! Comparison of the analytic QUCT prediction against the critical
//! parameter measured from Riemann-zeta zero statistics.
//!
//! This is not a fit: the prediction is computed from first principles and
//! compared to an independent measurement after the fact.

use std::error::Error;

use quct_functional::{Comparison, FunctionalParams, find_critical_point};
use quct_solve::equation::bisection::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let solution = find_critical_point(FunctionalParams::gue(), &Config::default())?;
    let comparison = Comparison::against_measurement(solution.x);

    println!("===============================================");
    println!("  QUCT THEORY vs. RIEMANN ZEROS               ");
    println!("===============================================");
    print!("{comparison}");
    println!("===============================================");

    Ok(())
}
