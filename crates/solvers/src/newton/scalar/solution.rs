use std::fmt;

use critical_core::Objective;

use crate::newton::{Config, Error, Status};

use super::Classification;

/// The result of a scalar Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The final iterate.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Kind of critical point, from the last curvature estimate.
    pub classification: Classification,

    /// The last curvature estimate (taken at the previous iterate).
    pub curvature: f64,

    /// `[x - tolerance, x + tolerance]`, where the critical point is expected.
    pub interval: [f64; 2],

    /// Number of Newton steps taken.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new<O>(
        objective: &O,
        x: f64,
        curvature: f64,
        status: Status,
        iters: usize,
        config: &Config,
    ) -> Result<Self, Error>
    where
        O: Objective<f64> + ?Sized,
    {
        let value = objective.evaluate(&x).map_err(Error::objective)?;

        Ok(Self {
            status,
            x,
            objective: value,
            classification: Classification::from_curvature(curvature, config.flat_band()),
            curvature,
            interval: [x - config.tolerance, x + config.tolerance],
            iters,
        })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [low, high] = self.interval;
        match self.classification {
            Classification::Indeterminate => write!(
                f,
                "A critical point of indeterminate type occurs near the interval ({low}, {high})!"
            ),
            kind => write!(f, "A function {kind} occurs near the interval ({low}, {high})!"),
        }
    }
}
