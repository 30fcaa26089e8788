use impactcalc::model::percent_change;
use impactcalc::{Calculator, InputKey, KnownPreset};
use rstest::rstest;
use strum::IntoEnumIterator;

fn rel_close(actual: f64, expected: f64) -> bool {
    ((actual - expected) / expected).abs() < 1e-3
}

#[rstest]
#[case("2018")]
#[case("2025")]
fn test_calculate_is_deterministic(#[case] preset: &str) {
    let mut calc = Calculator::default();
    assert!(calc.load_preset(preset));
    let first = calc.calculate();
    let second = calc.calculate();
    assert_eq!(first, second);
    assert_eq!(first.grand_total.to_bits(), second.grand_total.to_bits());
}

#[rstest]
#[case("2018")]
#[case("2025")]
fn test_grand_total_decomposes_exactly(#[case] preset: &str) {
    let mut calc = Calculator::default();
    calc.load_preset(preset);
    let r = calc.calculate();
    assert_eq!(r.grand_total, r.cancer.total.total_cost + r.msd.total.cost);
}

#[test]
fn test_2025_scenario_matches_hand_calculation() {
    let mut calc = Calculator::default();
    calc.load_known(KnownPreset::Y2025);

    assert_eq!(calc.total_physicians(), 11626.0);
    assert_eq!(calc.total_support(), 24300.0);

    let r = calc.calculate();
    assert!(rel_close(r.cancer.physicians.total_cases, 4.6504));
    assert!(rel_close(r.cancer.physicians.fatal.cases, 2.3252));
    assert!(rel_close(r.cancer.physicians.non_fatal.cases, 2.3252));
    assert!(rel_close(r.cancer.physicians.fatal.cost, 31_622_720.0));
    assert!(rel_close(r.cancer.support.fatal.cost, 33_048_000.0));
    assert!(rel_close(r.msd.physicians.cases, 209.268));
    assert!(rel_close(r.grand_total, 106_286_371.78));
    assert_eq!(r.workforce.total, 35926.0);
    assert_eq!(r.breakdown.msd_support, r.msd.support.cost);
}

#[test]
fn test_default_inputs_equal_2025_preset() {
    let calc = Calculator::default();
    assert_eq!(calc.inputs(), KnownPreset::Y2025.inputs());
}

#[test]
fn test_unknown_preset_leaves_state_unchanged() {
    let mut calc = Calculator::default();
    calc.set(InputKey::Nurses, 1.0);
    let before = calc.inputs();

    assert!(!calc.load_preset("1999"));
    assert!(calc.inputs().bits_eq(&before));
    assert!(calc.try_load_preset("1999").is_err());
}

#[test]
fn test_loaded_preset_is_a_copy() {
    let mut calc = Calculator::default();
    calc.load_preset("2018");
    calc.set(InputKey::Vsl, 1.0);

    calc.load_preset("2018");
    assert_eq!(calc.get(InputKey::Vsl), 9_000_000.0);
    assert_eq!(calc.presets().get("2018"), Some(KnownPreset::Y2018.inputs()));
}

#[test]
fn test_update_input_stores_parsed_value() {
    let mut calc = Calculator::default();
    assert!(calc.update_input("vsl", " 11000000 "));
    assert_eq!(calc.get(InputKey::Vsl), 11_000_000.0);
    assert!(calc.update_input("cancerFatalityRate", "0.25"));
    assert_eq!(calc.get(InputKey::CancerFatalityRate), 0.25);
}

#[rstest]
#[case("notAnInput", "5")]
#[case("VSL", "5")]
#[case("vsl", "abc")]
#[case("vsl", "12abc")]
#[case("vsl", "")]
#[case("vsl", "NaN")]
#[case("vsl", "inf")]
fn test_update_input_ignores_bad_updates(#[case] key: &str, #[case] raw: &str) {
    let mut calc = Calculator::default();
    let before = calc.inputs();
    assert!(!calc.update_input(key, raw));
    assert!(calc.inputs().bits_eq(&before));
}

#[test]
fn test_every_key_round_trips_through_its_name() {
    for key in InputKey::iter() {
        let name = key.to_string();
        assert_eq!(InputKey::parse_name(&name).unwrap(), key);

        let mut calc = Calculator::default();
        assert!(calc.update_input(&name, "42"));
        assert_eq!(calc.get(key), 42.0);
    }
}

#[test]
fn test_compare_to_baseline_restores_inputs() {
    let mut calc = Calculator::default();
    calc.set(InputKey::Technicians, 777.0);
    calc.set(InputKey::MsdSupportCost, 0.1 + 0.2);
    let before = calc.inputs();

    let cmp = calc.compare_to_baseline();
    assert!(calc.inputs().bits_eq(&before));
    assert_eq!(cmp.current.workforce.support, 13_777.0);
    assert_eq!(cmp.baseline, impactcalc::model::calculate(&KnownPreset::Y2018.inputs()));
}

#[test]
fn test_2025_exceeds_2018_baseline() {
    let mut calc = Calculator::default();
    calc.load_known(KnownPreset::Y2025);
    let cmp = calc.compare_to_baseline();

    let pct = cmp.percent_change.expect("baseline total is non-zero");
    assert!(pct > 0.0);
    assert!(rel_close(cmp.baseline.grand_total, 50_230_500.0));
    assert_eq!(cmp.change, cmp.current.grand_total - cmp.baseline.grand_total);
    assert_eq!(cmp.formatted.percent_change, "+111.6%");
    assert_eq!(cmp.formatted.change, "$56.1M");
}

#[test]
fn test_baseline_against_itself_is_zero_change() {
    let mut calc = Calculator::default();
    calc.load_known(KnownPreset::Y2018);
    let cmp = calc.compare_to_baseline();
    assert_eq!(cmp.change, 0.0);
    assert_eq!(cmp.percent_change, Some(0.0));
    assert_eq!(cmp.formatted.percent_change, "+0.0%");
}

#[test]
fn test_percent_change_zero_baseline_is_unavailable() {
    assert_eq!(percent_change(10.0, 0.0), None);
    assert_eq!(percent_change(0.0, 0.0), None);
    assert_eq!(percent_change(f64::NAN, 1.0), None);
    assert_eq!(percent_change(150.0, 100.0), Some(50.0));
}

#[test]
fn test_zero_career_duration_propagates_non_finite_cancer_costs() {
    // Division by zero stays in the numbers; only percent change has a policy.
    let mut calc = Calculator::default();
    calc.set(InputKey::CareerDuration, 0.0);
    let r = calc.calculate();
    assert!(r.cancer.total.total_cost.is_infinite());
    assert!(r.msd.total.cost.is_finite());
}
