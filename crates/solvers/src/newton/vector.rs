//! Newton's method for multi-variable objectives.
//!
//! # Algorithm
//!
//! Starting from `x₀ ∈ ℝⁿ`, each iteration estimates the gradient `g` and
//! Hessian `H` with forward differences, solves `H d = g`, and moves to
//! `x - d`. The dimension `n` is fixed by the starting point for the whole
//! solve.
//!
//! The solve converges once `‖x_{k+1} - x_k‖₂ <= tolerance`. At least one
//! step is always taken.
//!
//! # Limitations
//!
//! - **No classification**: the solver reports the critical point and its
//!   value only. Minima, maxima, and saddles are all valid outcomes.
//! - **Cost**: each step evaluates the objective `O(n²)` times.
//!
//! # Example
//!
//! ```
//! use critical_solvers::newton::{Config, vector};
//!
//! let bowl = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
//! let solution = vector::solve_unobserved(&bowl, &[1.0, 1.0], &Config::default())?;
//!
//! assert!(solution.x.norm() < 1e-5);
//! # Ok::<(), critical_solvers::newton::Error>(())
//! ```

mod event;
mod solution;
mod step;


pub use event::Event;
pub use solution::Solution;
pub use step::{MIN_DETERMINANT, Step, step};

use critical_core::{Objective, Observer};
use nalgebra::DVector;

use super::{Action, ArgumentError, Config, Error, Status};

/// Locates a critical point of a multi-variable objective.
///
/// The observer receives an [`Event`] after every Newton step and may return
/// [`Action::StopEarly`] to end the solve at the new iterate.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] or [`Error::InvalidArgument`] if the config or
///   starting point is rejected (empty, or with non-finite components).
///   The objective is not evaluated.
/// - [`Error::DegenerateCurvature`] if a step's Hessian is numerically singular.
/// - [`Error::NonConvergence`] if `config.max_iters` steps do not converge.
/// - [`Error::Objective`] if the objective fails.
pub fn solve<O, Obs>(
    objective: &O,
    x0: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<[f64]> + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    validate_start(x0)?;

    let mut x = DVector::from_column_slice(x0);
    let mut step_size = config.tolerance + 1.0;

    for iter in 1..=config.max_iters {
        let newton = step(objective, &x, config.epsilon)?;
        step_size = (&newton.next - &x).norm();

        let event = Event {
            iter,
            x: &x,
            gradient: &newton.gradient,
            hessian: &newton.hessian,
            determinant: newton.determinant,
            next: &newton.next,
            step: step_size,
        };
        let action = observer.observe(&event);
        x = newton.next;

        if let Some(Action::StopEarly) = action {
            return Solution::new(objective, x, Status::StoppedByObserver, iter);
        }

        if step_size <= config.tolerance {
            return Solution::new(objective, x, Status::Converged, iter);
        }
    }

    Err(Error::NonConvergence {
        iters: config.max_iters,
        step: step_size,
    })
}

/// Locates a critical point without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<O>(objective: &O, x0: &[f64], config: &Config) -> Result<Solution, Error>
where
    O: Objective<[f64]> + ?Sized,
{
    solve(objective, x0, config, ())
}

/// Rejects empty or non-finite starting points.
fn validate_start(x0: &[f64]) -> Result<(), ArgumentError> {
    const EXPECTED: &str = "a non-empty vector of finite numbers";

    if x0.is_empty() {
        return Err(ArgumentError::bad_start(EXPECTED, "an empty vector"));
    }

    if x0.iter().any(|v| !v.is_finite()) {
        return Err(ArgumentError::bad_start(EXPECTED, format!("{x0:?}")));
    }

    Ok(())
}
