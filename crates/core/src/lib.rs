//! Core traits shared by the critical-point solvers.
//!
//! This crate defines the abstractions that solvers and callers build on:
//!
//! - [`Objective`]: a deterministic real-valued function the solvers evaluate
//! - [`Fallible`]: adapts a closure returning `Result` into an [`Objective`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Fallible, Objective};
pub use observer::Observer;
