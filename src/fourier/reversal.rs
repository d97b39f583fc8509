use rand::Rng;

use crate::fourier::dft::CoefficientSet;

/// Choose at most one ranked coefficient index to rotate backwards for the next cycle.
///
/// With probability `1 - probability` nothing is reversed. Otherwise an amplitude-weighted
/// roulette draw picks among coefficients with nonzero frequency and positive amplitude.
pub fn pick_reverse_index<R: Rng + ?Sized>(
    set: &CoefficientSet,
    probability: f64,
    rng: &mut R,
) -> Option<usize> {
    if set.is_empty() || !rng.gen_bool(probability.clamp(0.0, 1.0)) {
        return None;
    }

    let candidates: Vec<(usize, f64)> = set
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_dc() && c.amp.is_finite() && c.amp > 0.0)
        .map(|(i, c)| (i, c.amp))
        .collect();
    let total: f64 = candidates.iter().map(|(_, w)| w).sum();
    if candidates.is_empty() || !(total.is_finite() && total > 0.0) {
        return None;
    }

    let mut r = rng.gen_range(0.0..total);
    for &(idx, w) in &candidates {
        r -= w;
        if r <= 0.0 {
            return Some(idx);
        }
    }
    candidates.last().map(|(idx, _)| *idx)
}

/// `true` if `idx` may be reversed in `set`.
pub fn is_valid_reversal(set: &CoefficientSet, idx: Option<usize>) -> bool {
    match idx {
        None => true,
        Some(i) => set
            .get(i)
            .is_some_and(|c| !c.is_dc() && c.amp > 0.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/reversal.rs"]
mod tests;
