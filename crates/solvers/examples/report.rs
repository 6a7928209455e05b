//! Prints a short report for a few well-known critical points.
//!
//! Run with `cargo run -p critical-solvers --example report`.

use critical_solvers::newton::{Action, Config, Error, scalar, vector};

fn print_step(event: &vector::Event<'_>) -> Option<Action> {
    println!("  step {}: |Δx| = {:e}", event.iter, event.step);
    None
}

fn main() -> Result<(), Error> {
    let config = Config::default();

    let parabola = scalar::solve_unobserved(&|x: f64| x * x, 2.0, &config)?;
    println!("x² from 2: {parabola}");

    let sine = scalar::solve_unobserved(&f64::sin, 1.0, &config)?;
    println!("sin x from 1: {sine}");

    let nested = scalar::solve_unobserved(&|x: f64| (x.sin() + x.cos()).sin(), 1.0, &config)?;
    println!("sin(sin x + cos x) from 1: {nested}");

    let bowl = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
    let point = vector::solve(&bowl, &[1.0, 1.0], &config, print_step)?;
    println!(
        "x² + y² from (1, 1): critical point at ({:.6}, {:.6}) after {} steps, f = {:e}",
        point.x[0], point.x[1], point.iters, point.objective
    );

    Ok(())
}
