use std::{cell::Cell, f64::consts::PI};

use approx::assert_relative_eq;
use critical_core::Fallible;
use thiserror::Error;

use super::{Action, Classification, Config, Error, Event, Status, solve, solve_unobserved};
use crate::newton::ArgumentError;

#[test]
fn finds_minimum_of_parabola() {
    let config = Config::default();

    let solution =
        solve_unobserved(&|x: f64| x * x, 2.0, &config).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x.abs() <= config.tolerance);
    assert_eq!(solution.classification, Classification::Minimum);
    assert_relative_eq!(solution.curvature, 2.0, epsilon = 1e-4);
    assert_relative_eq!(solution.objective, 0.0, epsilon = 1e-9);
}

#[test]
fn cosine_from_near_pi_converges_to_pi() {
    let solution =
        solve_unobserved(&f64::cos, 2.95, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, PI, epsilon = 1e-4);
    assert_relative_eq!(solution.objective, -1.0, epsilon = 1e-8);
    assert_eq!(solution.classification, Classification::Minimum);
}

#[test]
fn sine_from_one_is_a_maximum() {
    let solution = solve_unobserved(&f64::sin, 1.0, &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x, PI / 2.0, epsilon = 1e-4);
    assert_eq!(solution.classification, Classification::Maximum);
}

#[test]
fn nested_trigonometric_maximum() {
    // sin(sin x + cos x) peaks where sin x + cos x = √2, at x = π/4.
    let objective = |x: f64| (x.sin() + x.cos()).sin();

    let solution = solve_unobserved(&objective, 1.0, &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x, PI / 4.0, epsilon = 1e-4);
    assert_eq!(solution.classification, Classification::Maximum);
}

#[test]
fn quartic_with_flat_curvature_fails() {
    // f''(2) = 3x² - 6x is exactly zero, but the forward-difference estimate
    // there is about 8e-5, so the first step succeeds and jumps far from the
    // start. The iterate then wanders on rounding noise until a curvature
    // estimate rounds to exactly zero.
    let quartic = |x: f64| x.powi(4) / 4.0 - x.powi(3) - x;
    let mut events = 0;
    let observer = |_: &Event| {
        events += 1;
        None
    };

    let result = solve(&quartic, 2.0, &Config::default(), observer);

    assert!(
        matches!(result, Err(Error::DegenerateCurvature { .. })),
        "expected degenerate curvature, got {result:?}"
    );
    assert!(events > 1, "failed after {events} steps");
}

#[test]
fn shallow_parabola_is_a_minimum() {
    let shallow = |x: f64| 1e-4 * x * x;

    let solution = solve_unobserved(&shallow, 2.0, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.curvature, 2e-4, max_relative = 1e-6);
    assert_eq!(solution.classification, Classification::Minimum);
    assert!(solution.to_string().starts_with("A function minimum occurs"));
}

#[test]
fn shallow_hill_is_a_maximum() {
    let hill = |x: f64| -1e-4 * (x - 1.0).powi(2);

    let solution = solve_unobserved(&hill, 0.0, &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-4);
    assert_eq!(solution.classification, Classification::Maximum);
}

#[test]
fn explicit_flat_band_overrides_default() {
    let config = Config {
        flat_curvature: Some(1e-3),
        ..Config::default()
    };

    let solution = solve_unobserved(&|x: f64| 1e-4 * x * x, 2.0, &config).expect("should converge");

    assert_eq!(solution.classification, Classification::Indeterminate);
}

#[test]
fn curvature_just_below_threshold_fails() {
    // f'' = 2e-13 is nonzero but under the 1e-12 cutoff.
    let result = solve_unobserved(&|x: f64| 1e-13 * x * x, 0.0, &Config::default());

    match result {
        Err(Error::DegenerateCurvature { value }) => {
            assert_relative_eq!(value, 2e-13, max_relative = 1e-6);
        }
        other => panic!("expected degenerate curvature, got {other:?}"),
    }
}

#[test]
fn curvature_just_above_threshold_converges() {
    let solution = solve_unobserved(&|x: f64| 1e-11 * x * x, 0.0, &Config::default())
        .expect("f'' = 2e-11 is above the cutoff");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x.abs() <= 1e-5);
}

#[test]
fn constant_function_fails_on_first_step() {
    let mut events = 0;
    let observer = |_: &Event| {
        events += 1;
        None
    };

    let result = solve(&|_: f64| 5.0, 3.0, &Config::default(), observer);

    assert!(matches!(result, Err(Error::DegenerateCurvature { value }) if value == 0.0));
    assert_eq!(events, 0);
}

#[test]
fn inflection_point_is_indeterminate() {
    let solution =
        solve_unobserved(&|x: f64| x.powi(3), 0.0, &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.classification, Classification::Indeterminate);
}

#[test]
fn takes_one_step_when_starting_at_critical_point() {
    let mut steps = Vec::new();
    let observer = |event: &Event| {
        steps.push(*event);
        None
    };

    let solution =
        solve(&|x: f64| x * x, 0.0, &Config::default(), observer).expect("should converge");

    assert_eq!(solution.iters, 1);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].iter, 1);
    assert_relative_eq!(steps[0].x, 0.0);
}

#[test]
fn interval_brackets_reported_point() {
    let config = Config {
        tolerance: 1e-6,
        ..Config::default()
    };

    let solution = solve_unobserved(&f64::cos, 3.0, &config).expect("should converge");

    let [low, high] = solution.interval;
    assert_relative_eq!(low, solution.x - 1e-6);
    assert_relative_eq!(high, solution.x + 1e-6);
    assert!(low < PI && PI < high + 1e-5);
}

#[test]
fn repeated_runs_are_identical() {
    let objective = |x: f64| (x - 0.3).powi(2) + x.sin();

    let first = solve_unobserved(&objective, 1.7, &Config::default()).expect("should converge");
    let second = solve_unobserved(&objective, 1.7, &Config::default()).expect("should converge");

    assert_eq!(first, second);
}

#[test]
fn events_track_each_step() {
    let mut steps = Vec::new();
    let observer = |event: &Event| {
        steps.push(*event);
        None
    };

    let solution = solve(&f64::cos, 2.95, &Config::default(), observer).expect("should converge");

    assert_eq!(steps.len(), solution.iters);
    assert_relative_eq!(steps[0].x, 2.95);
    for pair in steps.windows(2) {
        assert_eq!(pair[0].next, pair[1].x);
        assert_eq!(pair[0].iter + 1, pair[1].iter);
    }
    let last = steps.last().expect("at least one step");
    assert_eq!(last.next, solution.x);
    assert!(last.step <= Config::default().tolerance);
    assert_eq!(last.curvature, solution.curvature);
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event| (event.iter >= 1).then_some(Action::StopEarly);

    let solution = solve(&f64::cos, 2.95, &Config::default(), observer).expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
}

#[test]
fn iteration_cap_reports_non_convergence() {
    let config = Config {
        max_iters: 1,
        ..Config::default()
    };

    let result = solve_unobserved(&f64::cos, 2.95, &config);

    match result {
        Err(Error::NonConvergence { iters, step }) => {
            assert_eq!(iters, 1);
            assert!(step > config.tolerance);
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn rejects_non_finite_start_before_evaluating() {
    let calls = Cell::new(0);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        x * x
    };

    for x0 in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = solve_unobserved(&counted, x0, &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidArgument(ArgumentError::BadStartingValue { .. }))
        ));
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn rejects_invalid_config_before_evaluating() {
    let calls = Cell::new(0);
    let counted = |x: f64| {
        calls.set(calls.get() + 1);
        x * x
    };
    let config = Config {
        epsilon: 0.0,
        ..Config::default()
    };

    let result = solve_unobserved(&counted, 1.0, &config);

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert_eq!(calls.get(), 0);
}

#[derive(Debug, Error, PartialEq)]
#[error("log is undefined at {0}")]
struct LogDomain(f64);

#[test]
fn objective_errors_propagate() {
    // x ln x is only defined for x > 0; the first evaluation is at x₀ + ε.
    let entropy = Fallible(|x: f64| {
        if x > 0.0 {
            Ok(x * x.ln())
        } else {
            Err(LogDomain(x))
        }
    });

    let result = solve_unobserved(&entropy, -0.5, &Config::default());

    let source = match result {
        Err(Error::Objective(source)) => source,
        other => panic!("expected objective error, got {other:?}"),
    };
    let domain = source
        .downcast_ref::<LogDomain>()
        .expect("source should be the objective's own error");
    assert_relative_eq!(domain.0, -0.5 + 1e-5);
}

#[test]
fn fallible_objective_converges_inside_domain() {
    let entropy = Fallible(|x: f64| {
        if x > 0.0 {
            Ok(x * x.ln())
        } else {
            Err(LogDomain(x))
        }
    });

    let solution = solve_unobserved(&entropy, 0.5, &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x, 1.0 / std::f64::consts::E, epsilon = 1e-4);
    assert_eq!(solution.classification, Classification::Minimum);
}

#[test]
fn display_matches_report() {
    let solution =
        solve_unobserved(&|x: f64| x * x, 2.0, &Config::default()).expect("should converge");

    let report = solution.to_string();
    assert!(report.starts_with("A function minimum occurs near the interval ("));
    assert!(report.ends_with(")!"));
}
