//! Forward-difference derivative estimates.
//!
//! Every estimate here is built from the single forward difference
//!
//! ```text
//! f'(x) ≈ (f(x + ε) - f(x)) / ε
//! ```
//!
//! Second-order estimates are that same difference applied to itself at the
//! same `ε`. The truncation error compounds (the curvature estimate is closer
//! to `f''(x + ε)` than to `f''(x)`), which bounds the precision the Newton
//! solvers can reach.
//!
//! The functions take closures returning `Result` so that failures raised by
//! the objective propagate unchanged. None of them validate `epsilon`.

use nalgebra::{DMatrix, DVector};

/// Forward-difference estimate of `f'(x)`.
///
/// Evaluates `f` at `x + epsilon` and then at `x`.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn derivative<F, E>(f: F, x: f64, epsilon: f64) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let ahead = f(x + epsilon)?;
    let here = f(x)?;
    Ok((ahead - here) / epsilon)
}

/// Estimates `f''(x)` by differentiating the forward-difference derivative.
///
/// Uses four evaluations of `f`: at `x + 2ε`, `x + ε` (twice) and `x`.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn second_derivative<F, E>(f: F, x: f64, epsilon: f64) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    derivative(|y| derivative(&f, y, epsilon), x, epsilon)
}

/// Forward-difference estimate of `∂f/∂xᵢ` at `x`.
///
/// All coordinates other than `i` are held fixed.
///
/// # Errors
///
/// Returns the first error produced by `f`.
///
/// # Panics
///
/// Panics if `i` is out of bounds for `x`.
pub fn partial<F, E>(f: F, x: &[f64], i: usize, epsilon: f64) -> Result<f64, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    let mut ahead = x.to_vec();
    ahead[i] += epsilon;

    let ahead = f(&ahead)?;
    let here = f(x)?;
    Ok((ahead - here) / epsilon)
}

/// Forward-difference gradient of `f` at `x`, one [`partial`] per coordinate.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn gradient<F, E>(f: F, x: &[f64], epsilon: f64) -> Result<DVector<f64>, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    let mut grad = DVector::zeros(x.len());
    for i in 0..x.len() {
        grad[i] = partial(&f, x, i, epsilon)?;
    }
    Ok(grad)
}

/// Forward-difference Hessian of `f` at `x`.
///
/// Entry `(i, j)` is the partial along `j` of the partial along `i`:
///
/// ```text
/// (f(x + εeᵢ + εeⱼ) - f(x + εeⱼ) - f(x + εeᵢ) + f(x)) / ε²
/// ```
///
/// The formula is symmetric in `i` and `j`, so the matrix is symmetric up to
/// floating-point rounding in the perturbed coordinates.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn hessian<F, E>(f: F, x: &[f64], epsilon: f64) -> Result<DMatrix<f64>, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    let n = x.len();
    let mut hess = DMatrix::zeros(n, n);
    for i in 0..n {
        let partial_i = |y: &[f64]| partial(&f, y, i, epsilon);
        for j in 0..n {
            hess[(i, j)] = partial(partial_i, x, j, epsilon)?;
        }
    }
    Ok(hess)
}
