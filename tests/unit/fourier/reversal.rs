use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::*;
use crate::fourier::dft::Coefficient;

fn coeff(freq: i64, amp: f64) -> Coefficient {
    Coefficient {
        freq,
        re: amp,
        im: 0.0,
        amp,
        phase: 0.0,
    }
}

#[test]
fn zero_probability_never_reverses() {
    let set = CoefficientSet::untruncated(vec![coeff(1, 1.0), coeff(2, 0.5)]);
    let mut rng = Pcg32::seed_from_u64(1);
    for _ in 0..1000 {
        assert_eq!(pick_reverse_index(&set, 0.0, &mut rng), None);
    }
}

#[test]
fn picks_are_always_valid() {
    let set = CoefficientSet::untruncated(vec![
        coeff(0, 3.0),
        coeff(1, 1.0),
        coeff(-1, 0.0),
        coeff(2, 0.25),
    ]);
    let mut rng = Pcg32::seed_from_u64(42);
    let mut picked_any = false;
    for _ in 0..2000 {
        let idx = pick_reverse_index(&set, 1.0, &mut rng);
        assert!(is_valid_reversal(&set, idx), "{idx:?}");
        picked_any |= idx.is_some();
    }
    assert!(picked_any);
}

#[test]
fn draw_is_weighted_by_amplitude() {
    // Ranked order: amp 3 at index 0, amp 1 at index 1.
    let set = CoefficientSet::untruncated(vec![coeff(1, 3.0), coeff(2, 1.0)]);
    let mut rng = Pcg32::seed_from_u64(7);
    let mut counts = [0usize; 2];
    for _ in 0..4000 {
        if let Some(i) = pick_reverse_index(&set, 1.0, &mut rng) {
            counts[i] += 1;
        }
    }
    assert_eq!(counts[0] + counts[1], 4000);
    let share = counts[0] as f64 / 4000.0;
    assert!((share - 0.75).abs() < 0.05, "share {share}");
}

#[test]
fn only_dc_or_silent_terms_yield_none() {
    let set = CoefficientSet::untruncated(vec![coeff(0, 2.0), coeff(3, 0.0)]);
    let mut rng = Pcg32::seed_from_u64(3);
    for _ in 0..100 {
        assert_eq!(pick_reverse_index(&set, 1.0, &mut rng), None);
    }
    assert_eq!(
        pick_reverse_index(&CoefficientSet::default(), 1.0, &mut rng),
        None
    );
}

#[test]
fn validity_rejects_dc_and_out_of_range() {
    let set = CoefficientSet::untruncated(vec![coeff(0, 2.0), coeff(1, 1.0)]);
    assert!(is_valid_reversal(&set, None));
    assert!(!is_valid_reversal(&set, Some(0)));
    assert!(is_valid_reversal(&set, Some(1)));
    assert!(!is_valid_reversal(&set, Some(2)));
}
