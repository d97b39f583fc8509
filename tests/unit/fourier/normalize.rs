use super::*;

#[test]
fn wide_rectangle_is_centered_and_scaled_by_width() {
    let pts = [
        Point::new(10.0, 20.0),
        Point::new(50.0, 20.0),
        Point::new(50.0, 40.0),
        Point::new(10.0, 40.0),
    ];
    let n = normalize_points(&pts);
    assert_eq!(n.points[0], Point::new(-0.5, -0.25));
    assert_eq!(n.points[2], Point::new(0.5, 0.25));
    assert_eq!(n.width, 1.0);
    assert_eq!(n.height, 0.5);
}

#[test]
fn normalization_is_unit_independent() {
    let small = [Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0)];
    let big: Vec<Point> = small
        .iter()
        .map(|p| Point::new(p.x * 1000.0 + 7.0, p.y * 1000.0 - 3.0))
        .collect();
    let a = normalize_points(&small);
    let b = normalize_points(&big);
    for (pa, pb) in a.points.iter().zip(&b.points) {
        assert!((*pa - *pb).hypot() < 1e-12);
    }
}

#[test]
fn coincident_points_do_not_divide_by_zero() {
    let n = normalize_points(&[Point::new(3.0, 3.0), Point::new(3.0, 3.0)]);
    assert!(n.points.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    assert_eq!(n.width, 0.0);
}
