use thiserror::Error;

/// Configuration for the Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Perturbation used by the forward-difference estimates.
    pub epsilon: f64,

    /// The solver converges once a step is no larger than this.
    pub tolerance: f64,

    /// Upper bound on Newton steps before giving up.
    pub max_iters: usize,

    /// Curvature magnitude at or below which a scalar critical point is
    /// classified as indeterminate rather than a minimum or maximum.
    ///
    /// `None` uses [`FLAT_CURVATURE_SCALE`] times `epsilon`, which covers the
    /// `O(ε)` bias of the nested forward difference.
    pub flat_curvature: Option<f64>,
}

/// Multiple of `epsilon` used as the default flat-curvature band.
pub const FLAT_CURVATURE_SCALE: f64 = 10.0;

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("flat_curvature must be finite and non-negative")]
    FlatCurvature,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-5,
            tolerance: 1e-5,
            max_iters: 100,
            flat_curvature: None,
        }
    }
}

impl Config {
    /// Validates the perturbation, tolerances, and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if self
            .flat_curvature
            .is_some_and(|flat| !flat.is_finite() || flat < 0.0)
        {
            return Err(ConfigError::FlatCurvature);
        }
        Ok(())
    }

    /// The curvature band used to classify scalar critical points.
    #[must_use]
    pub fn flat_band(&self) -> f64 {
        self.flat_curvature
            .unwrap_or(FLAT_CURVATURE_SCALE * self.epsilon)
    }
}
