/// Smallest extent used where a divisor must stay positive.
pub(crate) const MIN_EXTENT: f64 = 1e-6;

/// Wrap any finite value into `[0, 1)`.
pub(crate) fn wrap01(v: f64) -> f64 {
    let w = v.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
