use critical_core::Objective;

use crate::derivative::{derivative, second_derivative};
use crate::newton::Error;

/// Curvature magnitudes below this make a scalar Newton step degenerate.
pub const MIN_CURVATURE: f64 = 1e-12;

/// A single scalar Newton step and the estimates that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Forward-difference estimate of `f'(x)`.
    pub slope: f64,

    /// Nested forward-difference estimate of `f''(x)`.
    pub curvature: f64,

    /// The next iterate, `x - slope / curvature`.
    pub next: f64,
}

/// Computes the Newton step from `x`.
///
/// # Errors
///
/// - [`Error::Objective`] if the objective fails at any perturbed point.
/// - [`Error::DegenerateCurvature`] if the curvature estimate is NaN or its
///   magnitude is below [`MIN_CURVATURE`].
pub fn step<O>(objective: &O, x: f64, epsilon: f64) -> Result<Step, Error>
where
    O: Objective<f64> + ?Sized,
{
    let f = |x: f64| objective.evaluate(&x);

    let slope = derivative(f, x, epsilon).map_err(Error::objective)?;
    let curvature = second_derivative(f, x, epsilon).map_err(Error::objective)?;

    if curvature.is_nan() || curvature.abs() < MIN_CURVATURE {
        return Err(Error::DegenerateCurvature { value: curvature });
    }

    Ok(Step {
        slope,
        curvature,
        next: x - slope / curvature,
    })
}
