use super::*;

fn sample(i: usize) -> TraceSample {
    let p = Point::new(i as f64, 0.0);
    TraceSample::new(p, p)
}

#[test]
fn push_evicts_oldest_first() {
    let mut trace = Trace::with_capacity(3);
    for i in 0..5 {
        trace.push(sample(i));
        assert!(trace.len() <= 3);
    }
    let xs: Vec<f64> = trace.samples().map(|s| s.pos.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
}

#[test]
fn morph_converges_to_target() {
    let mut s = TraceSample::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    for _ in 0..1000 {
        s.morph(0.005);
    }
    assert!((s.pos.x - 1.0).abs() < 0.01);
    assert!((s.pos.y - 1.0).abs() < 0.01);
    // Target never moves.
    assert_eq!(s.target, Point::new(1.0, 1.0));
}

#[test]
fn trace_morph_touches_every_sample() {
    let mut trace = Trace::with_capacity(4);
    trace.push(TraceSample::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
    trace.push(TraceSample::new(Point::new(0.0, 0.0), Point::new(0.0, -10.0)));
    trace.morph(0.5);
    assert_eq!(trace.positions(), vec![Point::new(5.0, 0.0), Point::new(0.0, -5.0)]);
}

#[test]
fn clear_keeps_capacity() {
    let mut trace = Trace::with_capacity(0);
    assert_eq!(trace.capacity(), 1);
    trace.push(sample(1));
    trace.clear();
    assert!(trace.is_empty());
    assert_eq!(trace.capacity(), 1);
}
