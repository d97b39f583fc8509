use crate::{
    foundation::core::{Point, Vec2},
    fourier::dft::{Coefficient, CoefficientSet},
};

/// One rotating arm of the epicycle chain, in draw space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpicycleLink {
    /// Joint the arm rotates around.
    pub center: Point,
    /// Arm length (`amp * draw_scale`).
    pub radius: f64,
    /// Joint at the end of the arm.
    pub end: Point,
}

/// Angle of `c` at loop angle `t`; the reversed coefficient turns the other way.
fn term_angle(c: &Coefficient, t: f64, reversed: bool) -> f64 {
    let ft = t * c.freq as f64;
    if reversed { c.phase - ft } else { ft + c.phase }
}

fn links(
    origin: Point,
    draw_scale: f64,
    phase: f64,
    set: &CoefficientSet,
    reverse_index: Option<usize>,
) -> impl Iterator<Item = EpicycleLink> + '_ {
    let t = std::f64::consts::TAU * phase;
    let mut pos = origin;
    set.as_slice()
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_dc())
        .map(move |(i, c)| {
            let angle = term_angle(c, t, reverse_index == Some(i));
            let radius = c.amp * draw_scale;
            let center = pos;
            pos += Vec2::from_angle(angle) * radius;
            EpicycleLink {
                center,
                radius,
                end: pos,
            }
        })
}

/// Tip of the epicycle chain for `set` at `phase` in `[0, 1)`.
///
/// `reverse_index` is a ranked position in `set`; that coefficient rotates backwards.
pub fn endpoint(
    origin: Point,
    draw_scale: f64,
    phase: f64,
    set: &CoefficientSet,
    reverse_index: Option<usize>,
) -> Point {
    links(origin, draw_scale, phase, set, reverse_index)
        .last()
        .map_or(origin, |l| l.end)
}

/// Every arm of the chain, in set order, for drawing.
pub fn chain(
    origin: Point,
    draw_scale: f64,
    phase: f64,
    set: &CoefficientSet,
    reverse_index: Option<usize>,
) -> Vec<EpicycleLink> {
    links(origin, draw_scale, phase, set, reverse_index).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/epicycle.rs"]
mod tests;
