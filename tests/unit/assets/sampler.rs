use super::*;

const SQUARE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path d="M10,10 L90,10 L90,90 L10,90 Z"/>
</svg>"#;

#[test]
fn square_path_is_sampled_evenly() {
    let source = ShapeSource::path_data("M0,0 L100,0 L100,100 L0,100 Z");
    let pts = SvgPathSampler.sample(&source, 40).unwrap();
    assert_eq!(pts.len(), 40);
    assert!((pts[0] - Point::new(0.0, 0.0)).hypot() < 1e-6);
    // 400 units of perimeter over 40 samples.
    assert!((pts[1] - Point::new(10.0, 0.0)).hypot() < 1e-3);
    assert!((pts[10] - Point::new(100.0, 0.0)).hypot() < 1e-3);
    assert!((pts[20] - Point::new(100.0, 100.0)).hypot() < 1e-3);
}

#[test]
fn svg_document_paths_are_found() {
    let source = ShapeSource::svg_bytes(SQUARE_SVG.as_bytes().to_vec());
    let pts = SvgPathSampler.sample(&source, 16).unwrap();
    assert_eq!(pts.len(), 16);
    for p in &pts {
        assert!((10.0 - 1e-3..=90.0 + 1e-3).contains(&p.x), "{p:?}");
        assert!((10.0 - 1e-3..=90.0 + 1e-3).contains(&p.y), "{p:?}");
    }
}

#[test]
fn group_transform_is_applied() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="300">
      <g transform="translate(100,0)"><path d="M0,0 L10,0 L10,10 L0,10 Z"/></g>
    </svg>"#;
    let pts = SvgPathSampler
        .sample(&ShapeSource::svg_bytes(svg.as_bytes().to_vec()), 8)
        .unwrap();
    assert!(pts.iter().all(|p| p.x >= 100.0 - 1e-3));
}

#[test]
fn each_path_gets_a_minimum_share() {
    let paths = vec![
        BezPath::from_svg("M0,0 L1000,0").unwrap(),
        BezPath::from_svg("M0,10 L1,10").unwrap(),
    ];
    let pts = sample_paths(&paths, 100).unwrap();
    // 100 for the long path, floor of 8 for the short one.
    assert_eq!(pts.len(), 108);
}

#[test]
fn svg_without_paths_is_a_geometry_error() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;
    let err = SvgPathSampler
        .sample(&ShapeSource::svg_bytes(svg.as_bytes().to_vec()), 10)
        .unwrap_err();
    assert_eq!(err.kind(), crate::foundation::error::ErrorKind::Geometry);
}

#[test]
fn degenerate_path_is_a_geometry_error() {
    let err = SvgPathSampler
        .sample(&ShapeSource::path_data("M5,5 L5,5"), 10)
        .unwrap_err();
    assert!(err.to_string().contains("Path length is zero."));
}

#[test]
fn unreadable_sources_are_fetch_errors() {
    let missing = ShapeSource::svg_file("/definitely/not/here.svg");
    let err = SvgPathSampler.sample(&missing, 10).unwrap_err();
    assert_eq!(err.kind(), crate::foundation::error::ErrorKind::AssetFetch);

    let garbage = ShapeSource::svg_bytes(b"not an svg".to_vec());
    let err = SvgPathSampler.sample(&garbage, 10).unwrap_err();
    assert_eq!(err.kind(), crate::foundation::error::ErrorKind::AssetFetch);
}
