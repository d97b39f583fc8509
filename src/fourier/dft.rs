use rayon::prelude::*;

use crate::foundation::core::Point;

/// One term of the discrete Fourier series of a closed curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Coefficient {
    /// Signed integer frequency in `[-N/2, N/2]`.
    pub freq: i64,
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
    /// Magnitude, `hypot(re, im)`.
    pub amp: f64,
    /// Angle, `atan2(im, re)`.
    pub phase: f64,
}

impl Coefficient {
    /// The DC term encodes the centroid offset and never contributes to positions.
    pub fn is_dc(&self) -> bool {
        self.freq == 0
    }
}

/// Compute the O(N²) discrete Fourier transform of `points`, treating each point as
/// the complex number `x + iy`. Output is ordered by raw bin `k` in `[0, N)`.
#[tracing::instrument(skip(points), fields(n = points.len()))]
pub fn compute_dft(points: &[Point]) -> Vec<Coefficient> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }
    let nf = n as f64;

    (0..n)
        .into_par_iter()
        .map(|k| {
            let mut re = 0.0;
            let mut im = 0.0;
            for (t, p) in points.iter().enumerate() {
                // Reduce k*t mod n first so the angle stays small and accurate.
                let phi = std::f64::consts::TAU * (((k * t) % n) as f64) / nf;
                let (sin, cos) = phi.sin_cos();
                re += p.x * cos + p.y * sin;
                im += p.y * cos - p.x * sin;
            }
            re /= nf;
            im /= nf;
            let freq = if 2 * k <= n {
                k as i64
            } else {
                k as i64 - n as i64
            };
            Coefficient {
                freq,
                re,
                im,
                amp: re.hypot(im),
                phase: im.atan2(re),
            }
        })
        .collect()
}

/// Coefficients ordered by descending amplitude, truncated to a budget.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct CoefficientSet {
    coeffs: Vec<Coefficient>,
}

impl CoefficientSet {
    /// Rank `coeffs` by amplitude (stable, so ties keep transform order) and keep the
    /// first `budget`.
    pub fn select(mut coeffs: Vec<Coefficient>, budget: usize) -> Self {
        coeffs.sort_by(|a, b| b.amp.total_cmp(&a.amp));
        coeffs.truncate(budget);
        Self { coeffs }
    }

    /// Keep every coefficient, ranked by amplitude.
    pub fn untruncated(coeffs: Vec<Coefficient>) -> Self {
        let len = coeffs.len();
        Self::select(coeffs, len)
    }

    /// Ranked coefficients.
    pub fn as_slice(&self) -> &[Coefficient] {
        &self.coeffs
    }

    /// Number of coefficients kept.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// `true` when no coefficient was kept.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient at ranked position `idx`.
    pub fn get(&self, idx: usize) -> Option<&Coefficient> {
        self.coeffs.get(idx)
    }

    /// `true` when at least one coefficient moves the epicycle tip.
    pub fn has_moving_terms(&self) -> bool {
        self.coeffs.iter().any(|c| !c.is_dc())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/dft.rs"]
mod tests;
