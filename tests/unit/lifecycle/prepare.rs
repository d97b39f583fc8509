use super::*;
use crate::foundation::{core::Point, error::ErrorKind};

struct FixedSampler(Vec<Point>);

impl PointSampler for FixedSampler {
    fn sample(&self, _source: &ShapeSource, _target_count: usize) -> FourierResult<Vec<Point>> {
        Ok(self.0.clone())
    }
}

/// Samples an ellipse at exactly the requested resolution.
struct EllipseSampler;

impl PointSampler for EllipseSampler {
    fn sample(&self, _source: &ShapeSource, target_count: usize) -> FourierResult<Vec<Point>> {
        Ok((0..target_count)
            .map(|i| {
                let a = std::f64::consts::TAU * (i as f64) / (target_count as f64);
                Point::new(200.0 + 100.0 * a.cos(), 50.0 + 40.0 * a.sin())
            })
            .collect())
    }
}

fn source() -> ShapeSource {
    ShapeSource::path_data("M0,0 L1,1")
}

#[test]
fn ellipse_prepares_both_resolutions() {
    let cfg = FourierConfig {
        sample_count_low: 32,
        sample_count_high: 96,
        coefficient_budget: 20,
        ..FourierConfig::default()
    };
    let shape = prepare_shape(&EllipseSampler, &source(), &cfg).unwrap();
    assert_eq!(shape.low.len(), 20);
    assert_eq!(shape.high.len(), 20);
    assert!((shape.norm_width - 1.0).abs() < 1e-9);
    assert!((shape.norm_height - 0.4).abs() < 1e-2);
    for w in shape.low.as_slice().windows(2) {
        assert!(w[0].amp >= w[1].amp);
    }
    assert!(std::ptr::eq(shape.morph_target(), &shape.high));
}

#[test]
fn single_point_is_a_geometry_error() {
    let err = prepare_shape(
        &FixedSampler(vec![Point::new(1.0, 1.0)]),
        &source(),
        &FourierConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Geometry);
}

#[test]
fn motionless_selection_is_empty_coefficients() {
    let cfg = FourierConfig {
        coefficient_budget: 1,
        ..FourierConfig::default()
    };
    let err = prepare_shape(
        &FixedSampler(vec![Point::new(2.0, 2.0), Point::new(2.0, 2.0)]),
        &source(),
        &cfg,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyCoefficients);
}

#[test]
fn token_is_decided_once() {
    let t = CompletionToken::new();
    assert!(t.cancel());
    assert!(!t.commit());
    assert!(t.is_cancelled());

    let t = CompletionToken::new();
    assert!(t.commit());
    assert!(!t.cancel());
    assert!(!t.is_cancelled());
}

#[test]
fn spawned_task_commits_its_result() {
    let task = PreparationTask::spawn(
        Arc::new(EllipseSampler),
        source(),
        FourierConfig {
            sample_count_low: 16,
            sample_count_high: 32,
            ..FourierConfig::default()
        },
    );
    match task.wait() {
        Completion::Committed(Ok(shape)) => assert!(!shape.low.is_empty()),
        other => panic!("unexpected completion {other:?}"),
    }
}

#[test]
fn cancelled_task_discards_its_result() {
    let task = PreparationTask::spawn(
        Arc::new(EllipseSampler),
        source(),
        FourierConfig::default(),
    );
    assert!(task.token().cancel());
    assert!(matches!(task.wait(), Completion::Discarded));
}

struct PanickingSampler;

impl PointSampler for PanickingSampler {
    fn sample(&self, _source: &ShapeSource, _target_count: usize) -> FourierResult<Vec<Point>> {
        panic!("sampler blew up")
    }
}

#[test]
fn panicking_sampler_commits_an_error() {
    let task = PreparationTask::spawn(
        Arc::new(PanickingSampler),
        source(),
        FourierConfig::default(),
    );
    match task.wait() {
        Completion::Committed(Err(err)) => {
            assert_eq!(err.kind(), ErrorKind::Other);
            assert!(err.to_string().contains("sampler blew up"));
        }
        other => panic!("unexpected completion {other:?}"),
    }
}
