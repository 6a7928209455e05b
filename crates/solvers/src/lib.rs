//! Newton solvers that locate critical points of real-valued functions.
//!
//! Derivatives are never supplied by the caller. Every solver estimates them
//! with forward differences (see [`derivative`]) and iterates Newton's method
//! until consecutive iterates are within a tolerance.
//!
//! # Modules
//!
//! - [`derivative`]: forward-difference derivative, gradient, and Hessian
//! - [`newton`]: the scalar and vector Newton solvers
//! - [`value`]: dynamically typed entry points with argument checks

pub mod derivative;
pub mod newton;
pub mod value;

pub use value::{Value, ValueKind, scalar_optimize, vector_optimize};
