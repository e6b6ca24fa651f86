use approx::assert_relative_eq;
use building_standards_toolbox::efficiency::*;

#[test]
fn seer_cop_round_trip() {
    // SEER 13 → 팬 제외 COP 약 3.65
    let cop = seer_to_cop_cooling_no_fan(13.0);
    assert_relative_eq!(cop, -0.0076 * 169.0 + 0.3796 * 13.0, epsilon = 1e-12);
    assert_relative_eq!(cop_to_seer(cop), 13.0, epsilon = 1e-9);
}

#[test]
fn seer_with_fan_is_higher_than_eer_ratio() {
    let cop = seer_to_cop_cooling_with_fan(13.0);
    let eer = -0.0182 * 169.0 + 1.1088 * 13.0;
    assert_relative_eq!(cop, (eer / 3.413 + 0.12) / 0.88, epsilon = 1e-12);
}

#[test]
fn hspf_conversions() {
    assert_relative_eq!(
        hspf_to_cop_heating_no_fan(7.7),
        -0.0296 * 7.7 * 7.7 + 0.7134 * 7.7,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        hspf_to_cop_heating_with_fan(7.7),
        -0.0255 * 7.7 * 7.7 + 0.6239 * 7.7,
        epsilon = 1e-12
    );
}

#[test]
fn eer_cop_inverse_with_and_without_capacity() {
    for capacity in [None, Some(10_000.0), Some(100_000.0)] {
        let cop = eer_to_cop(11.0, capacity);
        assert_relative_eq!(cop_to_eer(cop, capacity), 11.0, epsilon = 1e-9);
    }
    // 용량 없음: PNNL 팬 보정식
    assert_relative_eq!(eer_to_cop(11.0, None), (11.0 / 3.413 + 0.12) / 0.88, epsilon = 1e-12);
}

#[test]
fn heating_cop_capacity_adjustment() {
    // 10 kW ≈ 34121 Btu/h
    let adjusted = cop_heating_to_cop_heating_no_fan(3.3, 10_000.0);
    let btu = 10_000.0 / 0.293_071_07;
    assert_relative_eq!(adjusted, 1.48e-7 * 3.3 * btu + 1.062 * 3.3, epsilon = 1e-9);
}

#[test]
fn kw_per_ton_and_boiler_ratings() {
    assert_relative_eq!(kw_per_ton_to_cop(0.576), 3.517 / 0.576, epsilon = 1e-12);
    assert_relative_eq!(cop_to_kw_per_ton(kw_per_ton_to_cop(0.576)), 0.576, epsilon = 1e-12);
    assert_relative_eq!(afue_to_thermal_eff(0.82), 0.82);
    assert_relative_eq!(thermal_eff_to_afue(0.82), 0.82);
    assert_relative_eq!(combustion_eff_to_thermal_eff(0.82), 0.813, epsilon = 1e-12);
    assert_relative_eq!(thermal_eff_to_combustion_eff(0.813), 0.82, epsilon = 1e-12);
}
