use std::convert::Infallible;

/// A real-valued function whose critical points a solver searches for.
///
/// `X` is the domain: `f64` for single-variable objectives and `[f64]` for
/// multi-variable ones. Objectives must be deterministic, always producing
/// the same value for a given point, since solvers re-evaluate them at
/// perturbed points to estimate derivatives.
///
/// Plain closures implement this trait directly:
///
/// ```
/// use critical_core::Objective;
///
/// let parabola = |x: f64| (x - 1.0).powi(2);
/// assert_eq!(parabola.evaluate(&3.0_f64), Ok(4.0));
///
/// let bowl = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(bowl.evaluate(&[1.0, 2.0][..]), Ok(5.0));
/// ```
pub trait Objective<X: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type for domain failures,
    /// such as evaluating outside the region where the function is defined.
    fn evaluate(&self, x: &X) -> Result<f64, Self::Error>;
}

impl<F> Objective<f64> for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    type Error = Infallible;

    fn evaluate(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(self(*x))
    }
}

impl<F> Objective<[f64]> for F
where
    F: Fn(&[f64]) -> f64 + ?Sized,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapter for closures that can fail.
///
/// Wraps a closure returning `Result<f64, E>` so that its errors reach the
/// caller of the solver unchanged.
///
/// ```
/// use critical_core::{Fallible, Objective};
///
/// #[derive(Debug, PartialEq)]
/// struct Undefined;
///
/// impl std::fmt::Display for Undefined {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("undefined")
///     }
/// }
///
/// impl std::error::Error for Undefined {}
///
/// let log = Fallible(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Undefined) });
/// assert_eq!(log.evaluate(&1.0_f64), Ok(0.0));
/// assert_eq!(log.evaluate(&-1.0_f64), Err(Undefined));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective<f64> for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: &f64) -> Result<f64, Self::Error> {
        (self.0)(*x)
    }
}

impl<F, E> Objective<[f64]> for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
