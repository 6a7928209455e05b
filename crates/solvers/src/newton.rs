//! Newton's method for locating critical points.
//!
//! Both solvers iterate
//!
//! ```text
//! x_{k+1} = x_k - H(x_k)⁻¹ ∇f(x_k)
//! ```
//!
//! where the derivatives are forward-difference estimates recomputed at every
//! iterate (see [`derivative`](crate::derivative)). Iteration stops once the
//! distance between consecutive iterates is at most [`Config::tolerance`].
//!
//! # Solvers
//!
//! - [`scalar`]: single-variable objectives; classifies the critical point
//!   as a minimum, maximum, or indeterminate from the last curvature estimate
//! - [`vector`]: multi-variable objectives; reports the point and its value
//!
//! # Failure
//!
//! A step whose second-order term is numerically zero fails with
//! [`Error::DegenerateCurvature`]. The solvers never retry from a perturbed
//! point or fall back to another method. Errors raised by the objective are
//! returned as [`Error::Objective`] with the objective's error as the source.
//!
//! # Observer Events
//!
//! Each solver emits one event per Newton step. Observers can return
//! [`Action::StopEarly`] to end the run with the latest iterate.

mod action;
mod config;
mod error;
mod status;

pub mod scalar;
pub mod vector;

pub use action::Action;
pub use config::{Config, ConfigError, FLAT_CURVATURE_SCALE};
pub use error::{ArgumentError, Error};
pub use status::Status;
