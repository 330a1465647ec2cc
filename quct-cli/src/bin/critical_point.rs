//! Core verification: locate the QUCT critical parameter for GUE (β = 2).

use std::error::Error;

use quct_functional::{FunctionalParams, find_critical_point};
use quct_solve::equation::bisection::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let solution = find_critical_point(FunctionalParams::gue(), &Config::default())?;

    println!("--- QUCT Core Verification ---");
    println!("Model: Analytical GUE (beta=2)");
    println!("QUCT Critical Parameter (gamma*): {:.16}", solution.x);
    println!("--- Success ---");

    Ok(())
}
