mod common;

use approx::assert_relative_eq;
use building_standards_toolbox::hvac::pump::{
    apply_head_and_motor_efficiency, apply_standard_minimum_motor_efficiency, brake_horsepower,
    horsepower, pressure_for_target_power_per_flow, pump_power_w, rated_w_per_gpm,
    standard_minimum_motor_efficiency_and_size, Pump, WaterType, PUMP_IMPELLER_EFFICIENCY,
};
use building_standards_toolbox::hvac::{ApplyError, SizedValue};
use common::{motor_data, TEMPLATE};

const M3_PER_GAL: f64 = 0.003785411784;

#[test]
fn head_from_target_w_per_gpm() {
    let data = motor_data();
    let mut pump = Pump::new("CHW Pump", SizedValue::hard(0.01), 0.0);
    let result = apply_head_and_motor_efficiency(&data, TEMPLATE, &mut pump, 19.0).expect("apply");

    // 158.5 gpm × 19 W/gpm ≈ 4.04 hp → 5 hp 전동기
    assert_eq!(result.nominal_hp, 5.0);
    assert_eq!(result.motor_efficiency, 0.895);
    assert_eq!(pump.motor_efficiency, 0.895);

    let expected_pa = 19.0 * 60.0 / M3_PER_GAL * PUMP_IMPELLER_EFFICIENCY * 0.895;
    assert_relative_eq!(result.pressure_rise_pa, expected_pa, max_relative = 1e-9);
    assert_relative_eq!(pump.rated_pump_head_pa, expected_pa, max_relative = 1e-9);
    assert_relative_eq!(result.pressure_rise_ft_h2o, expected_pa / (248.84 * 12.0), max_relative = 1e-9);
}

#[test]
fn headered_pumps_split_flow() {
    let data = motor_data();
    let mut single = Pump::new("Single", SizedValue::hard(0.01), 0.0);
    let mut bank = Pump::new("Bank", SizedValue::hard(0.02), 0.0);
    bank.pumps_in_bank = 2;
    let a = apply_head_and_motor_efficiency(&data, TEMPLATE, &mut single, 19.0).expect("single");
    let b = apply_head_and_motor_efficiency(&data, TEMPLATE, &mut bank, 19.0).expect("bank");
    assert_eq!(a, b);
}

#[test]
fn missing_flow_is_error() {
    let data = motor_data();
    let mut pump = Pump::new("HW Pump", SizedValue::default(), 0.0);
    assert!(matches!(
        apply_head_and_motor_efficiency(&data, TEMPLATE, &mut pump, 19.0),
        Err(ApplyError::MissingInput { property: "rated_flow_rate", .. })
    ));
    assert!(pump_power_w(&pump).is_err());
}

#[test]
fn pressure_for_power_per_flow_by_water_type() {
    let eff = PUMP_IMPELLER_EFFICIENCY * 0.9;
    let chw = pressure_for_target_power_per_flow(22.0, eff, WaterType::Cooling);
    let ft = 22.0 * 33000.0 * eff / (745.7 * 8.345);
    assert_relative_eq!(chw, ft * 248.84 * 12.0, max_relative = 1e-9);
    // 온수는 밀도가 낮아 같은 W/gpm에서 양정이 크다
    let hw = pressure_for_target_power_per_flow(22.0, eff, WaterType::Heating);
    assert!(hw > chw);
}

#[test]
fn power_and_horsepower() {
    let mut pump = Pump::new("P-1", SizedValue::autosized(0.01), 100_000.0);
    assert_relative_eq!(pump_power_w(&pump).expect("power"), 1000.0 / (0.78 * 0.9), max_relative = 1e-12);
    assert_relative_eq!(brake_horsepower(&pump).expect("bhp"), 1000.0 / 0.78 / 745.7, max_relative = 1e-12);

    // 정격 소비전력이 없으면 0
    assert_eq!(horsepower(&pump), 0.0);
    assert_eq!(rated_w_per_gpm(&pump), 0.0);

    pump.rated_power = SizedValue::hard(1500.0);
    assert_relative_eq!(horsepower(&pump), 1500.0 / 745.7, max_relative = 1e-12);
    let gpm = 0.01 * 60.0 / M3_PER_GAL;
    assert_relative_eq!(rated_w_per_gpm(&pump), 1500.0 / gpm, max_relative = 1e-9);
}

#[test]
fn zero_bhp_motor_is_ideal() {
    let data = motor_data();
    let m = standard_minimum_motor_efficiency_and_size(&data, TEMPLATE, 0.0);
    assert_eq!((m.efficiency, m.nominal_hp), (1.0, 0.0));
}

#[test]
fn motor_efficiency_from_brake_horsepower() {
    let data = motor_data();
    // 100 kPa × 0.02 m³/s / 0.78 ≈ 3.44 hp → 5 hp
    let mut pump = Pump::new("P-2", SizedValue::hard(0.02), 100_000.0);
    let m = apply_standard_minimum_motor_efficiency(&data, TEMPLATE, &mut pump).expect("apply");
    assert_eq!(m.nominal_hp, 5.0);
    assert_eq!(pump.motor_efficiency, 0.895);
}
