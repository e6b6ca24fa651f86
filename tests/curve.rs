use approx::assert_relative_eq;
use building_standards_toolbox::standards::{
    find_curve, Curve, CurveForm, ReferenceRecord, StandardsData,
};

fn curves() -> StandardsData {
    StandardsData::from_tables([(
        "curves",
        vec![
            ReferenceRecord::new()
                .with("name", "Boiler with Minimum Turndown")
                .with("form", "Cubic")
                .with("coeff_1", 0.975)
                .with("coeff_2", 0.025)
                .with("coeff_3", 0.0)
                .with("minimum_independent_variable_1", 0.0)
                .with("maximum_independent_variable_1", 1.0),
            ReferenceRecord::new()
                .with("name", "Biquad")
                .with("form", "BiQuadratic")
                .with("coeff_1", 1.0)
                .with("coeff_2", 0.1)
                .with("coeff_3", 0.01)
                .with("coeff_4", 0.2)
                .with("coeff_5", 0.02)
                .with("coeff_6", 0.001),
            ReferenceRecord::new()
                .with("name", "Weird")
                .with("form", "Exponent"),
        ],
    )])
}

#[test]
fn cubic_curve_clamps_input() {
    let curve = find_curve(&curves(), "Boiler with Minimum Turndown").expect("curve");
    assert_eq!(curve.form, CurveForm::Cubic);
    assert_eq!(curve.form.dimensions(), 1);
    assert_relative_eq!(curve.evaluate(0.5, 0.0), 0.975 + 0.025 * 0.5, epsilon = 1e-12);
    // 범위 밖 입력은 상한으로 자른다
    assert_relative_eq!(curve.evaluate(2.0, 0.0), 1.0, epsilon = 1e-12);
}

#[test]
fn biquadratic_uses_both_variables() {
    let curve = find_curve(&curves(), "Biquad").expect("curve");
    let (x, y) = (2.0, 3.0);
    let expected = 1.0 + 0.1 * x + 0.01 * x * x + 0.2 * y + 0.02 * y * y + 0.001 * x * y;
    assert_relative_eq!(curve.evaluate(x, y), expected, epsilon = 1e-12);
}

#[test]
fn missing_or_unsupported_curve() {
    assert!(find_curve(&curves(), "Nope").is_none());
    assert!(find_curve(&curves(), "Weird").is_none());
    let record = ReferenceRecord::new().with("form", "Linear");
    assert!(Curve::from_record(&record).is_none());
}
