//! Newton's method for single-variable objectives.
//!
//! # Algorithm
//!
//! Starting from `x₀`, each iteration estimates the slope and curvature with
//! forward differences and moves to
//!
//! ```text
//! x_{k+1} = x_k - f'(x_k) / f''(x_k)
//! ```
//!
//! The solve converges once `|x_{k+1} - x_k| <= tolerance`. At least one step
//! is always taken, even when `x₀` is already a critical point.
//!
//! # Classification
//!
//! The curvature estimate from the final step (taken at the previous iterate,
//! not recomputed at the returned point) classifies the result. See
//! [`Classification::from_curvature`].
//!
//! # Example
//!
//! ```
//! use critical_solvers::newton::{Config, scalar};
//!
//! let solution = scalar::solve_unobserved(&f64::cos, 2.95, &Config::default())?;
//!
//! assert!((solution.x - std::f64::consts::PI).abs() < 1e-4);
//! assert_eq!(solution.classification, scalar::Classification::Minimum);
//! # Ok::<(), critical_solvers::newton::Error>(())
//! ```

mod classification;
mod event;
mod solution;
mod step;

#[cfg(test)]
mod tests;

pub use classification::Classification;
pub use event::Event;
pub use solution::Solution;
pub use step::{MIN_CURVATURE, Step, step};

use critical_core::{Objective, Observer};

use super::{Action, ArgumentError, Config, Error, Status};

/// Locates a critical point of a single-variable objective.
///
/// The observer receives an [`Event`] after every Newton step and may return
/// [`Action::StopEarly`] to end the solve at the new iterate.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] or [`Error::InvalidArgument`] if the config or
///   starting value is rejected. The objective is not evaluated.
/// - [`Error::DegenerateCurvature`] if a step's curvature is numerically zero.
/// - [`Error::NonConvergence`] if `config.max_iters` steps do not converge.
/// - [`Error::Objective`] if the objective fails.
pub fn solve<O, Obs>(
    objective: &O,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<f64> + ?Sized,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    if !x0.is_finite() {
        return Err(ArgumentError::bad_start("a finite real number", x0).into());
    }

    let mut x = x0;
    let mut step_size = config.tolerance + 1.0;

    for iter in 1..=config.max_iters {
        let newton = step(objective, x, config.epsilon)?;
        step_size = (newton.next - x).abs();

        let event = Event {
            iter,
            x,
            slope: newton.slope,
            curvature: newton.curvature,
            next: newton.next,
            step: step_size,
        };
        x = newton.next;

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Solution::new(
                objective,
                x,
                newton.curvature,
                Status::StoppedByObserver,
                iter,
                config,
            );
        }

        if step_size <= config.tolerance {
            return Solution::new(
                objective,
                x,
                newton.curvature,
                Status::Converged,
                iter,
                config,
            );
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
pub fn solve_unobserved<O>(objective: &O, x0: f64, config: &Config) -> Result<Solution, Error>
where
    O: Objective<f64> + ?Sized,
{
    solve(objective, x0, config, ())
}
