//! Objectives shared by the end-to-end tests.

use std::cell::Cell;

/// `x⁴/4 - x³ - x`, whose exact curvature vanishes at `x = 2`.
pub fn flat_quartic(x: f64) -> f64 {
    x.powi(4) / 4.0 - x.powi(3) - x
}

/// `sin(sin x + cos x)`, with a maximum at `π/4`.
pub fn nested_trig(x: f64) -> f64 {
    (x.sin() + x.cos()).sin()
}

/// The Rosenbrock function, minimized at `(1, 1)`.
pub fn rosenbrock(x: &[f64]) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

/// Sum of squares, minimized at the origin in any dimension.
pub fn bowl(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Wraps a scalar function and counts how often it is evaluated.
pub struct Counted<F> {
    f: F,
    calls: Cell<usize>,
}

impl<F: Fn(f64) -> f64> Counted<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            calls: Cell::new(0),
        }
    }

    pub fn call(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        (self.f)(x)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}
