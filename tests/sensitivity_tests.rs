use impactcalc::projections::VSL_SWEEP;
use impactcalc::{CalcError, Calculator, InputKey};
use rstest::rstest;

#[rstest]
#[case(InputKey::Vsl, vec![1.0, 5e6, 2e7])]
#[case(InputKey::Nurses, vec![0.0, 20_000.0])]
#[case(InputKey::CareerDuration, vec![40.0, 10.0, 25.0, 30.0])]
fn test_sweep_restores_only_swept_key(#[case] key: InputKey, #[case] values: Vec<f64>) {
    let mut calc = Calculator::default();
    calc.set(key, 0.123_456_789);
    let before = calc.inputs();

    let points = calc.sensitivity_analysis(key, &values);

    assert_eq!(points.len(), values.len());
    for (p, v) in points.iter().zip(&values) {
        assert_eq!(p.value, *v);
    }
    assert!(calc.inputs().bits_eq(&before));
}

#[test]
fn test_sweep_totals_match_direct_calculation() {
    let mut calc = Calculator::default();
    let points = calc.sensitivity_analysis(InputKey::MsdPhysicianCost, &[10.0, 20.0]);

    let mut direct = Calculator::default();
    direct.set(InputKey::MsdPhysicianCost, 20.0);
    assert_eq!(points[1].grand_total, direct.calculate().grand_total);
}

#[test]
fn test_vsl_sweep_is_fixed_and_increasing() {
    let mut calc = Calculator::default();
    let points = calc.vsl_sensitivity();

    assert_eq!(points.len(), 7);
    assert_eq!(points[0].value, 6_300_000.0);
    assert_eq!(points[6].value, 20_700_000.0);
    assert_eq!(
        points.iter().map(|p| p.value).collect::<Vec<_>>(),
        VSL_SWEEP.to_vec()
    );
    assert!(points.windows(2).all(|w| w[1].grand_total > w[0].grand_total));
    // 13.6M is the live value, so that point equals the current total
    assert_eq!(points[3].grand_total, calc.calculate().grand_total);
}

#[test]
fn test_empty_sweep_returns_nothing() {
    let mut calc = Calculator::default();
    let before = calc.inputs();
    assert!(calc.sensitivity_analysis(InputKey::Vsl, &[]).is_empty());
    assert!(calc.inputs().bits_eq(&before));
}

#[test]
fn test_sweep_by_unknown_name_is_an_error() {
    let mut calc = Calculator::default();
    let before = calc.inputs();
    let res = calc.sensitivity_by_name("bogus", &[1.0]);
    assert!(matches!(res, Err(CalcError::UnknownInput(name)) if name == "bogus"));
    assert!(calc.inputs().bits_eq(&before));
}

#[test]
fn test_sweep_by_name() {
    let mut calc = Calculator::default();
    let points = calc.sensitivity_by_name("nonFatalCancerCost", &[0.0]).unwrap();
    assert_eq!(points.len(), 1);
    assert!(points[0].grand_total < calc.calculate().grand_total);
}
