mod common;

use approx::assert_relative_eq;
use building_standards_toolbox::hvac::cooling_tower::{
    apply_minimum_power_per_flow, fan_type, CoolingTower, TowerSpeed,
};
use building_standards_toolbox::hvac::{ApplyError, SizedValue};
use building_standards_toolbox::standards::{ReferenceRecord, StandardsData};
use common::{motors, TEMPLATE};

fn tower_data() -> StandardsData {
    let rejection = |fan: &str, gpm_per_hp: f64| {
        ReferenceRecord::new()
            .with("template", TEMPLATE)
            .with("equipment_type", "Open Cooling Tower")
            .with("fan_type", fan)
            .with("minimum_performance_gpm_per_hp", gpm_per_hp)
    };
    StandardsData::from_tables([
        ("motors", motors()),
        (
            "heat_rejection",
            vec![rejection("Propeller or Axial", 38.2), rejection("Centrifugal", 20.0)],
        ),
    ])
}

fn tower(name: &str, speed: TowerSpeed, flow_m3_per_s: f64) -> CoolingTower {
    CoolingTower {
        name: name.to_string(),
        speed,
        design_water_flow_rate: SizedValue::hard(flow_m3_per_s),
    }
}

#[test]
fn fan_type_from_name() {
    assert_eq!(fan_type("CT Centrifugal"), "Centrifugal");
    assert_eq!(fan_type("CT Axial"), "Propeller or Axial");
    assert_eq!(fan_type("Cooling Tower 1"), "Propeller or Axial");
}

#[test]
fn large_tower_is_capped_at_largest_motor() {
    let data = tower_data();
    // 0.05 m³/s ≈ 792.5 gpm → 20.7 hp → bhp 18.7 > 15 hp
    let mut ct = tower("Tower Propeller", TowerSpeed::TwoSpeed, 0.05);
    let result = apply_minimum_power_per_flow(&data, TEMPLATE, &mut ct).expect("apply");
    assert_eq!(result.min_gpm_per_hp, 38.2);
    assert_eq!(result.fan_bhp, 15.0);
    assert_eq!(result.nominal_hp, 15.0);
    assert_eq!(result.motor_efficiency, 0.924);
    let expected_w = 15.0 / 0.924 * 745.7;
    assert_relative_eq!(result.design_fan_power_w, expected_w, max_relative = 1e-12);
    assert_relative_eq!(result.low_speed_fan_power_w.expect("low speed"), 0.3 * expected_w, max_relative = 1e-12);
    assert_eq!(ct.name, "Tower Propeller 38.2 gpm/hp");
    assert_eq!(result.new_name, ct.name);
}

#[test]
fn centrifugal_tower_motor_from_bracket() {
    let data = tower_data();
    // 0.01 m³/s ≈ 158.5 gpm / 20 → 7.93 hp → bhp 7.13 → 7.5 hp 구간
    let mut ct = tower("Tower Centrifugal", TowerSpeed::SingleSpeed, 0.01);
    let result = apply_minimum_power_per_flow(&data, TEMPLATE, &mut ct).expect("apply");
    let gpm = 0.01 * 60.0 / 0.003785411784;
    assert_relative_eq!(result.fan_bhp, 0.9 * gpm / 20.0, max_relative = 1e-9);
    assert_eq!(result.motor_efficiency, 0.895);
    assert!(result.low_speed_fan_power_w.is_none());
}

#[test]
fn tower_errors() {
    let data = tower_data();
    let mut ct = tower("Tower", TowerSpeed::VariableSpeed, 0.05);
    ct.design_water_flow_rate = SizedValue::default();
    assert!(matches!(
        apply_minimum_power_per_flow(&data, TEMPLATE, &mut ct),
        Err(ApplyError::MissingInput { .. })
    ));

    let mut ct = tower("Tower", TowerSpeed::VariableSpeed, 0.05);
    assert!(matches!(
        apply_minimum_power_per_flow(&data, "90.1-2004", &mut ct),
        Err(ApplyError::NotFound { .. })
    ));
    // 실패하면 이름을 바꾸지 않는다
    assert_eq!(ct.name, "Tower");
}
