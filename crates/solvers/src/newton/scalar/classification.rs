use std::fmt;

/// The kind of critical point implied by the curvature at convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Positive curvature.
    Minimum,

    /// Negative curvature.
    Maximum,

    /// Curvature too close to zero to tell, as at an inflection point.
    Indeterminate,
}

impl Classification {
    /// Classifies a curvature estimate.
    ///
    /// Values within `flat` of zero (and NaN) are [`Classification::Indeterminate`].
    #[must_use]
    pub fn from_curvature(curvature: f64, flat: f64) -> Self {
        if curvature > flat {
            Self::Minimum
        } else if curvature < -flat {
            Self::Maximum
        } else {
            Self::Indeterminate
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Indeterminate => "indeterminate",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_curvature() {
        assert_eq!(Classification::from_curvature(2.0, 1e-3), Classification::Minimum);
        assert_eq!(Classification::from_curvature(-0.5, 1e-3), Classification::Maximum);
    }

    #[test]
    fn flat_band_is_indeterminate() {
        for curvature in [0.0, 1e-3, -1e-3, 6e-5, f64::NAN] {
            assert_eq!(
                Classification::from_curvature(curvature, 1e-3),
                Classification::Indeterminate,
                "curvature {curvature}"
            );
        }
    }

    #[test]
    fn zero_band_only_rejects_zero() {
        assert_eq!(Classification::from_curvature(1e-300, 0.0), Classification::Minimum);
        assert_eq!(Classification::from_curvature(0.0, 0.0), Classification::Indeterminate);
    }

    #[test]
    fn display_names() {
        assert_eq!(Classification::Minimum.to_string(), "minimum");
        assert_eq!(Classification::Maximum.to_string(), "maximum");
        assert_eq!(Classification::Indeterminate.to_string(), "indeterminate");
    }
}
