/// Event emitted by the scalar Newton solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,

    /// The iterate the step was taken from.
    pub x: f64,

    /// Slope estimate at `x`.
    pub slope: f64,

    /// Curvature estimate at `x`.
    pub curvature: f64,

    /// The new iterate.
    pub next: f64,

    /// Distance between `x` and `next`.
    pub step: f64,
}
