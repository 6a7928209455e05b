use critical_core::Objective;
use nalgebra::{DMatrix, DVector};

use crate::derivative;
use crate::newton::Error;

/// Hessian determinant magnitudes below this make a Newton step degenerate.
pub const MIN_DETERMINANT: f64 = 1e-7;

/// A single multi-variable Newton step and the estimates that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Forward-difference gradient at `x`.
    pub gradient: DVector<f64>,

    /// Forward-difference Hessian at `x`.
    pub hessian: DMatrix<f64>,

    /// Determinant of `hessian`.
    pub determinant: f64,

    /// The next iterate, `x - hessian⁻¹ · gradient`.
    pub next: DVector<f64>,
}

/// Computes the Newton step from `x`.
///
/// The linear system `H d = g` is solved by LU decomposition rather than by
/// forming `H⁻¹`.
///
/// # Errors
///
/// - [`Error::Objective`] if the objective fails at any perturbed point.
/// - [`Error::DegenerateCurvature`] if the Hessian determinant is NaN or its
///   magnitude is below [`MIN_DETERMINANT`].
pub fn step<O>(objective: &O, x: &DVector<f64>, epsilon: f64) -> Result<Step, Error>
where
    O: Objective<[f64]> + ?Sized,
{
    let f = |y: &[f64]| objective.evaluate(y);

    let gradient = derivative::gradient(f, x.as_slice(), epsilon).map_err(Error::objective)?;
    let hessian = derivative::hessian(f, x.as_slice(), epsilon).map_err(Error::objective)?;

    let lu = hessian.clone().lu();
    let determinant = lu.determinant();
    if determinant.is_nan() || determinant.abs() < MIN_DETERMINANT {
        return Err(Error::DegenerateCurvature { value: determinant });
    }

    let direction = lu
        .solve(&gradient)
        .ok_or(Error::DegenerateCurvature { value: determinant })?;

    Ok(Step {
        next: x - direction,
        gradient,
        hessian,
        determinant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn quadratic_step_lands_on_center() {
        let bowl = |x: &[f64]| (x[0] - 1.0).powi(2) + 2.0 * (x[1] + 2.0).powi(2);
        let x = DVector::from_vec(vec![0.0, 0.0]);

        let newton = step(&bowl, &x, 1e-5).expect("hessian is diag(2, 4)");

        assert_relative_eq!(newton.determinant, 8.0, epsilon = 1e-3);
        assert_relative_eq!(newton.next[0], 1.0, epsilon = 1e-4);
        assert_relative_eq!(newton.next[1], -2.0, epsilon = 1e-4);
    }

    #[test]
    fn saddle_has_negative_determinant_but_steps() {
        let saddle = |x: &[f64]| x[0] * x[0] - x[1] * x[1];
        let x = DVector::from_vec(vec![0.5, 0.5]);

        let newton = step(&saddle, &x, 1e-5).expect("determinant is -4");

        assert_relative_eq!(newton.determinant, -4.0, epsilon = 1e-3);
        assert_relative_eq!(newton.next.norm(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn flat_direction_is_degenerate() {
        // Independent of x[1], so the second row and column are exactly zero.
        let trough = |x: &[f64]| x[0] * x[0];
        let x = DVector::from_vec(vec![1.0, 1.0]);

        let result = step(&trough, &x, 1e-5);

        assert!(matches!(
            result,
            Err(Error::DegenerateCurvature { value }) if value == 0.0
        ));
    }

    #[test]
    fn small_determinant_is_degenerate() {
        // H = 2e-4·I, so det H = 4e-8 is nonzero but under the cutoff.
        let shallow = |x: &[f64]| 1e-4 * (x[0] * x[0] + x[1] * x[1]);
        let x = DVector::from_vec(vec![0.0, 0.0]);

        match step(&shallow, &x, 1e-5) {
            Err(Error::DegenerateCurvature { value }) => {
                assert_relative_eq!(value, 4e-8, max_relative = 1e-6);
            }
            other => panic!("expected degenerate curvature, got {other:?}"),
        }
    }

    #[test]
    fn determinant_above_cutoff_steps() {
        let shallow = |x: &[f64]| 1e-3 * (x[0] * x[0] + x[1] * x[1]);
        let x = DVector::from_vec(vec![1.0, 1.0]);

        let newton = step(&shallow, &x, 1e-5).expect("det H = 4e-6");

        assert_relative_eq!(newton.determinant, 4e-6, max_relative = 1e-4);
        assert!(newton.next.norm() < 1e-4);
    }

    #[test]
    fn cutoff_applies_to_determinant_magnitude() {
        let x = DVector::from_vec(vec![0.0, 0.0]);

        // det H = -4e-8: small in magnitude, so degenerate despite the sign.
        let flat_saddle = |x: &[f64]| 1e-4 * (x[0] * x[0] - x[1] * x[1]);
        assert!(matches!(
            step(&flat_saddle, &x, 1e-5),
            Err(Error::DegenerateCurvature { value }) if value < 0.0
        ));

        // det H = -4e-6: negative but large enough to step.
        let saddle = |x: &[f64]| 1e-3 * (x[0] * x[0] - x[1] * x[1]);
        let newton = step(&saddle, &x, 1e-5).expect("|det H| is above the cutoff");
        assert_relative_eq!(newton.determinant, -4e-6, max_relative = 1e-4);
    }
}
