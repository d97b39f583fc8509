use super::*;

fn coeff(freq: i64, amp: f64, phase: f64) -> Coefficient {
    Coefficient {
        freq,
        re: amp * phase.cos(),
        im: amp * phase.sin(),
        amp,
        phase,
    }
}

fn set(coeffs: Vec<Coefficient>) -> CoefficientSet {
    CoefficientSet::untruncated(coeffs)
}

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn dc_term_never_moves_the_tip() {
    let with_dc = set(vec![coeff(0, 5.0, 0.3), coeff(1, 1.0, 0.0), coeff(-2, 0.5, 1.0)]);
    let without_dc = set(vec![coeff(1, 1.0, 0.0), coeff(-2, 0.5, 1.0)]);
    for phase in [0.0, 0.1, 0.37, 0.9] {
        // Ranked index of the -2 term differs between the sets, so no reversal here.
        let a = endpoint(Point::new(10.0, 20.0), 3.0, phase, &with_dc, None);
        let b = endpoint(Point::new(10.0, 20.0), 3.0, phase, &without_dc, None);
        assert_close(a, b);
    }
}

#[test]
fn single_term_traces_a_circle() {
    let s = set(vec![coeff(1, 2.0, 0.0)]);
    assert_close(endpoint(Point::ZERO, 1.0, 0.0, &s, None), Point::new(2.0, 0.0));
    assert_close(endpoint(Point::ZERO, 1.0, 0.25, &s, None), Point::new(0.0, 2.0));
    assert_close(endpoint(Point::ZERO, 10.0, 0.5, &s, None), Point::new(-20.0, 0.0));
}

#[test]
fn reversal_mirrors_the_rotation_of_one_term() {
    let s = set(vec![coeff(1, 2.0, 0.0)]);
    assert_close(
        endpoint(Point::ZERO, 1.0, 0.25, &s, Some(0)),
        Point::new(0.0, -2.0),
    );
    // Out-of-range reversal is inert.
    assert_close(
        endpoint(Point::ZERO, 1.0, 0.25, &s, Some(5)),
        Point::new(0.0, 2.0),
    );
}

#[test]
fn empty_set_stays_at_origin() {
    let p = endpoint(Point::new(4.0, 5.0), 1.0, 0.3, &CoefficientSet::default(), None);
    assert_eq!(p, Point::new(4.0, 5.0));
}

#[test]
fn chain_links_are_contiguous_and_end_at_tip() {
    let s = set(vec![coeff(0, 9.0, 0.0), coeff(1, 2.0, 0.2), coeff(-3, 1.0, 0.5)]);
    let origin = Point::new(50.0, 50.0);
    let links = chain(origin, 4.0, 0.4, &s, Some(2));
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].center, origin);
    assert_eq!(links[1].center, links[0].end);
    assert!((links[0].radius - 8.0).abs() < 1e-12);
    assert_close(links[1].end, endpoint(origin, 4.0, 0.4, &s, Some(2)));
}
