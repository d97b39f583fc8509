use super::*;

#[test]
fn defaults_match_documented_constants() {
    let c = FourierConfig::default();
    assert_eq!(c.sample_count_low, 100);
    assert_eq!(c.sample_count_high, 720);
    assert_eq!(c.loop_frames, 300);
    assert_eq!(c.coefficient_budget, 120);
    assert_eq!(c.morph_rate, 0.005);
    assert_eq!(c.trace_capacity(), 400);
    assert_eq!(c.fade_window_ratio, 0.8);
    assert_eq!(c.reversal_probability, 0.5);
    assert_eq!(c.warmup_frames, 20);
    assert!(c.validate().is_ok());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let c = FourierConfig::from_json_str(r#"{"loop_frames": 60, "seed": 7}"#).unwrap();
    assert_eq!(c.loop_frames, 60);
    assert_eq!(c.seed, Some(7));
    assert_eq!(c.coefficient_budget, 120);
    assert!((c.phase_step() - 1.0 / 60.0).abs() < 1e-15);
}

#[test]
fn json_rejects_unknown_and_out_of_range() {
    assert!(FourierConfig::from_json_str(r#"{"loop_frame": 60}"#).is_err());
    assert!(FourierConfig::from_json_str(r#"{"morph_rate": 1.5}"#).is_err());
    assert!(FourierConfig::from_json_str(r#"{"loop_frames": 0}"#).is_err());
    assert!(FourierConfig::from_json_str(r#"{"style": {"fill_zero_pos": -0.1}}"#).is_err());
}

#[test]
fn capacity_has_floor_of_two() {
    let c = FourierConfig {
        trace_lifetime_frames: 1,
        sub_steps_per_frame: 1,
        ..FourierConfig::default()
    };
    assert_eq!(c.trace_capacity(), 2);
}
