//! Dynamically typed entry points.
//!
//! Callers that hold arguments of unknown shape (for example, values parsed
//! from a script or a config file) pass them as [`Value`]s. Both entry points
//! check the argument kinds before the objective is ever evaluated.

use std::{fmt, sync::Arc};

use crate::newton::{ArgumentError, Config, Error, scalar, vector};

/// A shared objective over `ℝⁿ`.
pub type Function = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// An argument to [`scalar_optimize`] or [`vector_optimize`].
#[derive(Clone)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Vector(Vec<f64>),
    Text(String),
    Function(Function),
}

/// Represents the kind of a `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    Integer,
    Number,
    Vector,
    Text,
    Function,
}

impl Value {
    /// Wraps a closure as a [`Value::Function`].
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from(self)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Vector(v) => f.debug_tuple("Vector").field(v).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::Vector => "vector",
            ValueKind::Text => "text",
            ValueKind::Function => "function",
        };
        f.write_str(name)
    }
}

impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Number(_) => ValueKind::Number,
            Value::Vector(_) => ValueKind::Vector,
            Value::Text(_) => ValueKind::Text,
            Value::Function(_) => ValueKind::Function,
        }
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Boolean(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Integer(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Number(val)
    }
}

impl From<Vec<f64>> for Value {
    fn from(val: Vec<f64>) -> Self {
        Value::Vector(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Text(val.to_owned())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Text(val)
    }
}

/// Locates a critical point of a single-variable function.
///
/// The function is called with one-element slices. An `Integer` starting
/// value is widened to `f64`.
///
/// # Errors
///
/// - [`ArgumentError::NotCallable`] if `function` is not a `Function`.
/// - [`ArgumentError::BadStartingValue`] if `starting_value` is not a finite
///   `Integer` or `Number`.
/// - Any error from [`scalar::solve_unobserved`].
pub fn scalar_optimize(
    function: &Value,
    starting_value: &Value,
    config: &Config,
) -> Result<scalar::Solution, Error> {
    let f = callable(function)?;
    let x0 = real(starting_value).ok_or_else(|| {
        ArgumentError::bad_start("a real number", starting_value.kind())
    })?;

    let objective = |x: f64| f(std::slice::from_ref(&x));
    scalar::solve_unobserved(&objective, x0, config)
}

/// Locates a critical point of a multi-variable function.
///
/// An `Integer` or `Number` starting value is treated as a one-element vector.
///
/// # Errors
///
/// - [`ArgumentError::NotCallable`] if `function` is not a `Function`.
/// - [`ArgumentError::BadStartingValue`] if `starting_value` is neither a
///   non-empty `Vector` of finite numbers nor a finite scalar.
/// - Any error from [`vector::solve_unobserved`].
pub fn vector_optimize(
    function: &Value,
    starting_value: &Value,
    config: &Config,
) -> Result<vector::Solution, Error> {
    let f = callable(function)?;

    match starting_value {
        Value::Vector(x0) => vector::solve_unobserved(f, x0, config),
        other => {
            let x0 = real(other).ok_or_else(|| {
                ArgumentError::bad_start("a vector or real number", other.kind())
            })?;
            vector::solve_unobserved(f, &[x0], config)
        }
    }
}

fn callable(value: &Value) -> Result<&(dyn Fn(&[f64]) -> f64 + Send + Sync), ArgumentError> {
    match value {
        Value::Function(f) => Ok(f.as_ref()),
        other => Err(ArgumentError::NotCallable {
            found: other.kind(),
        }),
    }
}

#[allow(clippy::cast_precision_loss)]
fn real(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Number(n) => Some(*n),
        _ => None,
    }
}
