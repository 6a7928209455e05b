use nalgebra::{DMatrix, DVector};

/// Event emitted by the vector Newton solver after each step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// The iterate the step was taken from.
    pub x: &'a DVector<f64>,

    /// Gradient estimate at `x`.
    pub gradient: &'a DVector<f64>,

    /// Hessian estimate at `x`.
    pub hessian: &'a DMatrix<f64>,

    /// Determinant of `hessian`.
    pub determinant: f64,

    /// The new iterate.
    pub next: &'a DVector<f64>,

    /// Euclidean distance between `x` and `next`.
    pub step: f64,
}
