use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::{
    assets::source::ShapeSource,
    foundation::core::{Affine, BezPath, Point},
    foundation::error::{FourierError, FourierResult},
};

/// Minimum samples allotted to any single path.
const MIN_SAMPLES_PER_PATH: usize = 8;
/// Accuracy passed to kurbo arc-length routines.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// Turns a vector-path source into an ordered list of points spaced evenly by arc length.
///
/// Implementations run on a worker thread during preparation.
pub trait PointSampler: Send + Sync {
    /// Sample roughly `target_count` points along every path of `source`.
    fn sample(&self, source: &ShapeSource, target_count: usize) -> FourierResult<Vec<Point>>;
}

/// [`PointSampler`] backed by `usvg` parsing and kurbo arc-length measurement.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgPathSampler;

impl PointSampler for SvgPathSampler {
    #[tracing::instrument(skip(self, source))]
    fn sample(&self, source: &ShapeSource, target_count: usize) -> FourierResult<Vec<Point>> {
        let paths = load_paths(source)?;
        sample_paths(&paths, target_count)
    }
}

/// Collect every path of `source` in document space.
pub fn load_paths(source: &ShapeSource) -> FourierResult<Vec<BezPath>> {
    let paths = match source {
        ShapeSource::PathData(d) => {
            let path = BezPath::from_svg(d)
                .map_err(|e| FourierError::asset_fetch(format!("invalid svg path data: {e}")))?;
            vec![path]
        }
        _ => {
            let bytes = source
                .fetch_svg()?
                .ok_or_else(|| FourierError::asset_fetch("source has no SVG document"))?;
            let opts = usvg::Options::default();
            let tree = usvg::Tree::from_data(&bytes, &opts)
                .map_err(|e| FourierError::asset_fetch(format!("parse svg tree: {e}")))?;
            let mut out = Vec::new();
            collect_group(tree.root(), &mut out);
            out
        }
    };

    let paths: Vec<BezPath> = paths
        .into_iter()
        .filter(|p| p.segments().next().is_some())
        .collect();
    if paths.is_empty() {
        return Err(FourierError::geometry("No <path> element found in SVG."));
    }
    Ok(paths)
}

fn collect_group(group: &usvg::Group, out: &mut Vec<BezPath>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_group(g, out),
            usvg::Node::Path(p) => out.push(usvg_path_to_bez(p)),
            _ => {}
        }
    }
}

fn usvg_path_to_bez(path: &usvg::Path) -> BezPath {
    use usvg::tiny_skia_path::PathSegment;

    let pt = |p: usvg::tiny_skia_path::Point| Point::new(f64::from(p.x), f64::from(p.y));
    let mut bez = BezPath::new();
    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => bez.move_to(pt(p)),
            PathSegment::LineTo(p) => bez.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => bez.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => bez.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => bez.close_path(),
        }
    }

    let t = path.abs_transform();
    bez.apply_affine(Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ]));
    bez
}

struct MeasuredPath {
    segments: Vec<(PathSeg, f64)>,
    length: f64,
}

impl MeasuredPath {
    fn new(path: &BezPath) -> Self {
        let segments: Vec<(PathSeg, f64)> = path
            .segments()
            .map(|s| (s, s.arclen(ARCLEN_ACCURACY)))
            .collect();
        let length = segments.iter().map(|(_, l)| *l).sum();
        Self { segments, length }
    }

    fn point_at_length(&self, mut at: f64) -> Point {
        for (seg, len) in &self.segments {
            if at <= *len {
                let t = if *len > 0.0 {
                    seg.inv_arclen(at.max(0.0), ARCLEN_ACCURACY)
                } else {
                    0.0
                };
                return seg.eval(t);
            }
            at -= len;
        }
        // Rounding pushed us past the end: clamp to the final point.
        self.segments
            .last()
            .map(|(s, _)| s.eval(1.0))
            .unwrap_or(Point::ZERO)
    }
}

/// Distribute `target_count` samples across `paths` proportionally to their length.
pub fn sample_paths(paths: &[BezPath], target_count: usize) -> FourierResult<Vec<Point>> {
    let measured: Vec<MeasuredPath> = paths.iter().map(MeasuredPath::new).collect();
    let total: f64 = measured.iter().map(|m| m.length).sum();
    if total.is_nan() || total <= 0.0 {
        return Err(FourierError::geometry("Path length is zero."));
    }

    let mut points = Vec::with_capacity(target_count.max(MIN_SAMPLES_PER_PATH));
    for m in &measured {
        let share = (target_count as f64) * m.length / total;
        let count = (share.round() as usize).max(MIN_SAMPLES_PER_PATH);
        for s in 0..count {
            let t = (s as f64) / (count as f64);
            points.push(m.point_at_length(t * m.length));
        }
    }

    if points.len() < 2 {
        return Err(FourierError::geometry("Insufficient sampled points."));
    }
    tracing::trace!(paths = paths.len(), points = points.len(), "sampled paths");
    Ok(points)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sampler.rs"]
mod tests;
