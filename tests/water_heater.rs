use approx::assert_relative_eq;
use building_standards_toolbox::hvac::water_heater::{
    apply_efficiency, baseline_fuel_type, standard_efficiency_and_ua, WaterHeater, WaterHeaterFuel,
};
use building_standards_toolbox::hvac::ApplyError;

const TEMPLATE: &str = "90.1-2013";

fn heater(name: &str, fuel: &str, capacity_w: f64, volume_m3: f64) -> WaterHeater {
    WaterHeater {
        name: name.to_string(),
        fuel_type: fuel.to_string(),
        heater_maximum_capacity: Some(capacity_w),
        tank_volume: Some(volume_m3),
        thermal_efficiency: 0.9,
        loss_coefficient_w_per_k: None,
    }
}

#[test]
fn small_electric_uses_energy_factor() {
    // 0.2 m³ ≈ 52.8 gal, EF ≈ 0.900
    let result =
        standard_efficiency_and_ua(TEMPLATE, &heater("SWH", "Electricity", 5000.0, 0.2)).expect("ua");
    assert_eq!(result.thermal_efficiency, 1.0);
    assert_relative_eq!(result.ua_btu_per_hr_f, 2.810423, epsilon = 1e-5);
    assert_relative_eq!(result.ua_w_per_k, result.ua_btu_per_hr_f * 0.527528, epsilon = 1e-9);
    assert_eq!(result.new_name, "SWH 1 Therm Eff");
}

#[test]
fn large_electric_uses_standby_loss() {
    let result =
        standard_efficiency_and_ua(TEMPLATE, &heater("SWH", "Electricity", 18_000.0, 0.4)).expect("ua");
    assert_relative_eq!(result.ua_btu_per_hr_f, 5.425481, epsilon = 1e-5);
}

#[test]
fn gas_heaters_by_capacity() {
    // 15 kW ≈ 51 kBtu/h → 소형, 열효율 0.82
    let small =
        standard_efficiency_and_ua(TEMPLATE, &heater("SWH", "NaturalGas", 15_000.0, 0.15)).expect("small");
    assert_eq!(small.thermal_efficiency, 0.82);
    assert_relative_eq!(small.ua_btu_per_hr_f, 11.8253, epsilon = 1e-3);

    // 100 kW ≈ 341 kBtu/h → Et 0.8 + 대기 손실
    let large =
        standard_efficiency_and_ua(TEMPLATE, &heater("SWH", "NaturalGas", 100_000.0, 0.4)).expect("large");
    assert_relative_eq!(large.ua_btu_per_hr_f, 17.79733, epsilon = 1e-4);
    assert_relative_eq!(large.thermal_efficiency, 0.803651, epsilon = 1e-5);
    assert_eq!(large.new_name, "SWH 0.804 Therm Eff");
}

#[test]
fn doe_reference_gas_heater_is_fixed() {
    let result = standard_efficiency_and_ua("DOE Ref 1980-2004", &heater("SWH", "NaturalGas", 100_000.0, 0.4))
        .expect("doe");
    assert_eq!(result.thermal_efficiency, 0.78);
    assert_eq!(result.ua_btu_per_hr_f, 11.37);
}

#[test]
fn booster_doubles_ua() {
    let plain = standard_efficiency_and_ua(TEMPLATE, &heater("SWH", "Electricity", 5000.0, 0.2)).expect("plain");
    let booster =
        standard_efficiency_and_ua(TEMPLATE, &heater("Booster SWH", "Electricity", 5000.0, 0.2)).expect("booster");
    assert_relative_eq!(booster.ua_btu_per_hr_f, 2.0 * plain.ua_btu_per_hr_f, epsilon = 1e-12);
}

#[test]
fn apply_updates_heater() {
    let mut h = heater("SWH", "NaturalGas", 100_000.0, 0.4);
    let result = apply_efficiency(TEMPLATE, &mut h).expect("apply");
    assert_eq!(h.name, "SWH 0.804 Therm Eff");
    assert_eq!(h.thermal_efficiency, result.thermal_efficiency);
    assert_eq!(h.loss_coefficient_w_per_k, Some(result.ua_w_per_k));
}

#[test]
fn unsupported_fuel_and_missing_inputs() {
    let mut h = heater("SWH", "Propane", 100_000.0, 0.4);
    assert!(matches!(
        apply_efficiency(TEMPLATE, &mut h),
        Err(ApplyError::Unsupported { .. })
    ));
    // 실패하면 그대로
    assert_eq!(h.name, "SWH");

    let mut h = heater("SWH", "NaturalGas", 100_000.0, 0.4);
    h.tank_volume = None;
    assert!(matches!(
        standard_efficiency_and_ua(TEMPLATE, &h),
        Err(ApplyError::MissingInput { property: "tank_volume", .. })
    ));
}

#[test]
fn baseline_fuel_by_building_type() {
    assert_eq!(baseline_fuel_type("MediumOffice"), WaterHeaterFuel::Electricity);
    assert_eq!(baseline_fuel_type("Warehouse"), WaterHeaterFuel::Electricity);
    assert_eq!(baseline_fuel_type("Hospital"), WaterHeaterFuel::NaturalGas);
    assert_eq!(WaterHeaterFuel::parse("Electricity").map(|f| f.engine_name()), Some("Electricity"));
}
