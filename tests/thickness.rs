//! 배관 최소 두께 공식 테스트.
use piping_toolbox::piping::{
    compute_min_thickness, ThicknessError, ThicknessField, ThicknessInputs, ThicknessSession,
};
use piping_toolbox::session::DisplayValue;

fn sample() -> ThicknessInputs {
    ThicknessInputs {
        pressure: 1.5,
        outside_diameter: 114.3,
        allowable_stress: 137.9,
        quality_factor: 1.0,
        weld_joint_factor: 1.0,
        coefficient: 0.4,
        corrosion_allowance: 0.0,
    }
}

#[test]
fn thickness_matches_reference_value() {
    let t = compute_min_thickness(&sample()).expect("thickness");
    assert_eq!(t, 0.6189530685920577);
    assert_eq!(t, (1.5 * 114.3) / (2.0 * (137.9 * 1.0 * 1.0 + 1.5 * 0.4)) + 0.0);
}

#[test]
fn corrosion_allowance_is_added() {
    let inputs = ThicknessInputs::from_values([10.0, 219.1, 138.0, 1.0, 0.85, 0.4, 1.5]);
    let t = compute_min_thickness(&inputs).unwrap();
    assert!((t - 10.531327287716406).abs() < 1e-12, "t={t}");
}

#[test]
fn zero_denominator_is_degenerate() {
    let inputs = ThicknessInputs::default();
    assert_eq!(
        compute_min_thickness(&inputs),
        Err(ThicknessError::DegenerateInput { denominator: 0.0 })
    );
}

#[test]
fn negative_denominator_is_degenerate() {
    let mut inputs = sample();
    inputs.allowable_stress = -200.0;
    assert!(matches!(
        compute_min_thickness(&inputs),
        Err(ThicknessError::DegenerateInput { .. })
    ));
}

#[test]
fn blank_fields_read_as_zero() {
    let inputs =
        ThicknessInputs::from_texts(["1.5", "114.3", "137.9", "1", "1", "0.4", ""]).unwrap();
    assert_eq!(inputs, sample());
    assert_eq!(inputs.get(ThicknessField::Coefficient), 0.4);
}

#[test]
fn unparseable_field_is_reported() {
    let err = ThicknessInputs::from_texts(["1.5", "abc", "", "", "", "", ""]).unwrap_err();
    assert_eq!(
        err,
        ThicknessError::Parse {
            field: ThicknessField::OutsideDiameter,
            text: "abc".into(),
        }
    );
}

#[test]
fn field_metadata() {
    assert_eq!(ThicknessField::ALL.len(), 7);
    assert_eq!(ThicknessField::Pressure.unit(), "MPa");
    assert_eq!(ThicknessField::CorrosionAllowance.unit(), "mm");
    assert_eq!(ThicknessField::QualityFactor.unit(), "");
    assert_eq!(ThicknessField::WeldJointFactor.symbol(), 'W');
}

#[test]
fn session_keeps_previous_result_on_degenerate_input() {
    let mut session = ThicknessSession::new(4);
    assert_eq!(session.display(), &DisplayValue::Placeholder);

    let shown = session.update(["1.5", "114.3", "137.9", "1", "1", "0.4", "0"]);
    assert_eq!(shown.as_str(), "0.6190 mm");

    // 분모 0: 이전 결과 유지
    let shown = session.update(["", "", "", "", "", "", ""]);
    assert_eq!(shown.as_str(), "0.6190 mm");

    // 해석 불가: 자리표시
    let shown = session.update(["1.5", "-", "", "", "", "", ""]);
    assert_eq!(shown, &DisplayValue::Placeholder);
}

#[test]
fn non_numeric_field_shows_placeholder() {
    let mut session = ThicknessSession::new(4);
    let shown = session.update(["1.5", "abc", "", "", "", "", ""]);
    assert_eq!(shown.as_str(), "-");

    // 이전에 계산된 값이 있어도 자리표시로 바뀐다.
    session.update(["1.5", "114.3", "137.9", "1", "1", "0.4", "0"]);
    let shown = session.update(["1.5", "114.3", "137.9", "1", "1", "0.4", "1,0"]);
    assert_eq!(shown, &DisplayValue::Placeholder);
}

#[test]
fn nan_denominator_is_not_degenerate() {
    let inputs = ThicknessInputs::from_texts(["1", "1", "nan", "1", "1", "1", ""]).unwrap();
    let t = compute_min_thickness(&inputs).unwrap();
    assert!(t.is_nan());

    let mut session = ThicknessSession::new(2);
    let shown = session.update(["1", "1", "nan", "1", "1", "1", ""]);
    assert_eq!(shown.as_str(), "NaN mm");
}
