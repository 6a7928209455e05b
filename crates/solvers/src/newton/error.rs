use std::error::Error as StdError;

use thiserror::Error;

use crate::value::ValueKind;

use super::ConfigError;

/// Errors that can occur while locating a critical point.
///
/// Every error ends the current solve; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The second derivative (scalar) or Hessian determinant (vector) is too
    /// close to zero for a trustworthy Newton step.
    #[error("second-order term {value:e} is too close to zero, Newton's method may diverge")]
    DegenerateCurvature { value: f64 },

    #[error("no convergence after {iters} iterations (last step {step:e})")]
    NonConvergence { iters: usize, step: f64 },

    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}

/// Arguments rejected before any objective evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("argument is not a function (found {found})")]
    NotCallable { found: ValueKind },

    #[error("starting value must be {expected} (found {found})")]
    BadStartingValue {
        expected: &'static str,
        found: String,
    },
}

impl ArgumentError {
    pub(crate) fn bad_start(expected: &'static str, found: impl ToString) -> Self {
        Self::BadStartingValue {
            expected,
            found: found.to_string(),
        }
    }
}
