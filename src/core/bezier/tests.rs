use super::{evaluate, sample, sample_segments, CurveError};
use approx::assert_abs_diff_eq;
use glam::Vec2;

fn assert_vec_eq(actual: Vec2, expected: Vec2, epsilon: f32) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}

fn wave() -> Vec<Vec2> {
    vec![
        Vec2::new(12.0, 400.0),
        Vec2::new(150.0, 80.0),
        Vec2::new(320.0, 560.0),
        Vec2::new(510.0, 40.0),
        Vec2::new(700.0, 300.0),
    ]
}

// ── evaluate ──

#[test]
fn test_evaluate_interpolates_endpoints() {
    for points in [
        vec![Vec2::new(3.0, 4.0), Vec2::new(-7.0, 9.0)],
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 0.0),
        ],
        wave(),
    ] {
        let first = points[0];
        let last = *points.last().unwrap();
        assert_vec_eq(evaluate(&points, 0.0).unwrap(), first, 1e-4);
        assert_vec_eq(evaluate(&points, 1.0).unwrap(), last, 1e-3);
    }
}

#[test]
fn test_evaluate_single_point_is_constant() {
    let points = [Vec2::new(5.0, 5.0)];
    for t in [-2.0, 0.0, 0.3, 1.0, 7.5] {
        assert_eq!(evaluate(&points, t).unwrap(), Vec2::new(5.0, 5.0));
    }
}

#[test]
fn test_evaluate_linear_midpoint() {
    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
    assert_vec_eq(evaluate(&points, 0.5).unwrap(), Vec2::new(5.0, 0.0), 1e-6);
}

#[test]
fn test_evaluate_symmetric_quadratic_apex() {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 0.0),
    ];
    assert_vec_eq(evaluate(&points, 0.5).unwrap(), Vec2::new(10.0, 5.0), 1e-5);
}

#[test]
fn test_evaluate_matches_cubic_bernstein_form() {
    let p = [
        Vec2::new(0.0, 0.0),
        Vec2::new(3.0, 10.0),
        Vec2::new(7.0, 10.0),
        Vec2::new(10.0, 0.0),
    ];
    for t in [0.1f32, 0.25, 0.6, 0.9] {
        let inv = 1.0 - t;
        let expected = inv * inv * inv * p[0]
            + 3.0 * inv * inv * t * p[1]
            + 3.0 * inv * t * t * p[2]
            + t * t * t * p[3];
        assert_vec_eq(evaluate(&p, t).unwrap(), expected, 1e-4);
    }
}

#[test]
fn test_evaluate_extrapolates_linear_case() {
    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
    assert_vec_eq(evaluate(&points, 1.5).unwrap(), Vec2::new(15.0, 0.0), 1e-5);
    assert_vec_eq(
        evaluate(&points, -1.0).unwrap(),
        Vec2::new(-10.0, 0.0),
        1e-5,
    );
}

#[test]
fn test_evaluate_empty_is_error() {
    assert_eq!(evaluate(&[], 0.5), Err(CurveError::EmptyControlPoints));
}

// ── sample ──

#[test]
fn test_sample_count_for_dividing_steps() {
    let points = wave();
    for (step, expected) in [
        (0.5f32, 3usize),
        (0.25, 5),
        (0.125, 9),
        (0.1, 11),
        (0.01, 101),
    ] {
        let count = sample(&points, step).unwrap().count();
        assert_eq!(count, expected, "step {step}");
    }
}

#[test]
fn test_sample_first_and_last_match_endpoints() {
    let points = wave();
    let samples: Vec<Vec2> = sample(&points, 0.05).unwrap().collect();
    assert_eq!(samples.len(), 21);
    assert_vec_eq(samples[0], points[0], 1e-4);
    // Letzter Schritt landet durch Akkumulation minimal hinter 1.0
    assert_vec_eq(*samples.last().unwrap(), *points.last().unwrap(), 0.05);
}

#[test]
fn test_sample_non_dividing_step_stays_below_end() {
    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
    let samples: Vec<Vec2> = sample(&points, 0.3).unwrap().collect();
    assert_eq!(samples.len(), 4);
    assert_vec_eq(samples[3], Vec2::new(9.0, 0.0), 1e-4);
}

#[test]
fn test_sample_step_above_one_yields_only_start() {
    let points = wave();
    let samples: Vec<Vec2> = sample(&points, 1.5).unwrap().collect();
    assert_eq!(samples, vec![points[0]]);
}

#[test]
fn test_sample_is_restartable_and_deterministic() {
    let points = wave();
    let first: Vec<Vec2> = sample(&points, 0.07).unwrap().collect();
    let second: Vec<Vec2> = sample(&points, 0.07).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn test_sample_rejects_invalid_input() {
    let points = wave();
    assert_eq!(
        sample(&points, 0.0).err(),
        Some(CurveError::NonPositiveStep(0.0))
    );
    assert_eq!(
        sample(&points, -0.1).err(),
        Some(CurveError::NonPositiveStep(-0.1))
    );
    assert!(matches!(
        sample(&points, f32::NAN).err(),
        Some(CurveError::NonPositiveStep(_))
    ));
    assert_eq!(sample(&[], 0.1).err(), Some(CurveError::EmptyControlPoints));
}

// ── sample_segments ──

#[test]
fn test_segments_follow_sample_progression() {
    let points = wave();
    let step = 0.125;
    let segments: Vec<(Vec2, Vec2)> = sample_segments(&points, step).unwrap().collect();
    let samples: Vec<Vec2> = sample(&points, step).unwrap().collect();
    assert_eq!(segments.len(), samples.len());

    for (i, (begin, end)) in segments.iter().enumerate() {
        let p = i as f32 * step;
        assert_vec_eq(*begin, samples[i], 1e-4);
        assert_vec_eq(*end, evaluate(&points, p + step).unwrap(), 1e-3);
    }
}

#[test]
fn test_segments_last_end_extrapolates_past_curve() {
    let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
    let last = sample_segments(&points, 0.25).unwrap().last().unwrap();
    assert_vec_eq(last.0, Vec2::new(10.0, 0.0), 1e-5);
    assert_vec_eq(last.1, Vec2::new(12.5, 0.0), 1e-5);
}

#[test]
fn test_segments_reject_invalid_input() {
    assert_eq!(
        sample_segments(&[Vec2::ZERO], 0.0).err(),
        Some(CurveError::NonPositiveStep(0.0))
    );
    assert_eq!(
        sample_segments(&[], 0.5).err(),
        Some(CurveError::EmptyControlPoints)
    );
}
