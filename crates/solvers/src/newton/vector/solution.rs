use critical_core::Objective;
use nalgebra::DVector;

use crate::newton::{Error, Status};

/// The result of a vector Newton solve.
///
/// No minimum/maximum label is reported: the sign of the Hessian determinant
/// does not determine definiteness above two dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// The final iterate.
    pub x: DVector<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of Newton steps taken.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new<O>(
        objective: &O,
        x: DVector<f64>,
        status: Status,
        iters: usize,
    ) -> Result<Self, Error>
    where
        O: Objective<[f64]> + ?Sized,
    {
        let value = objective.evaluate(x.as_slice()).map_err(Error::objective)?;

        Ok(Self {
            status,
            x,
            objective: value,
            iters,
        })
    }
}
