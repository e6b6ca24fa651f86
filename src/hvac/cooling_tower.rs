//! 개방형 냉각탑 팬 동력 (최소 gpm/hp 성능 기준).

use crate::standards::{SearchCriteria, StandardsData};
use crate::units::{convert_volume_flow, VolumeFlowUnit};

use super::motor::{self, DEFAULT_MOTOR_EFFICIENCY, MOTORS_TABLE};
use super::{missing_input, not_found, round_to, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::cooling_tower";
pub const HEAT_REJECTION_TABLE: &str = "heat_rejection";
/// 2단 냉각탑 저속 운전 동력비
const LOW_SPEED_POWER_FRACTION: f64 = 0.3;

/// 팬 속도 제어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerSpeed {
    SingleSpeed,
    TwoSpeed,
    VariableSpeed,
}

/// 냉각탑 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingTower {
    /// 이름. 팬 형식(Centrifugal/Propeller/Axial)을 이름에서 찾는다.
    pub name: String,
    pub speed: TowerSpeed,
    /// 설계 냉각수량 (m³/s)
    pub design_water_flow_rate: SizedValue,
}

/// 적용 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingTowerResult {
    pub new_name: String,
    pub min_gpm_per_hp: f64,
    pub nominal_hp: f64,
    pub fan_bhp: f64,
    pub motor_efficiency: f64,
    /// 설계(고속) 팬 동력 (W)
    pub design_fan_power_w: f64,
    /// 2단 냉각탑 저속 팬 동력 (W)
    pub low_speed_fan_power_w: Option<f64>,
}

/// 이름에서 팬 형식을 찾는다. 없으면 Propeller or Axial.
pub fn fan_type(name: &str) -> &'static str {
    if name.contains("Centrifugal") {
        "Centrifugal"
    } else if name.contains("Propeller") || name.contains("Axial") {
        "Propeller or Axial"
    } else {
        log::info!(
            target: LOG_TARGET,
            "{name}: 이름으로 팬 형식을 알 수 없어 Propeller or Axial로 가정함"
        );
        "Propeller or Axial"
    }
}

/// 최소 gpm/hp 성능에서 팬 동력을 정하고 이름에 성능값을 붙인다.
pub fn apply_minimum_power_per_flow(
    data: &StandardsData,
    template: &str,
    tower: &mut CoolingTower,
) -> Result<CoolingTowerResult, ApplyError> {
    let flow_m3_per_s = tower
        .design_water_flow_rate
        .hard_then_auto()
        .ok_or_else(|| missing_input(LOG_TARGET, &tower.name, "design_water_flow_rate"))?;
    let flow_gpm = convert_volume_flow(
        flow_m3_per_s,
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::Gpm,
    );

    let criteria = SearchCriteria::new()
        .with("template", template)
        .with("equipment_type", "Open Cooling Tower")
        .with("fan_type", fan_type(&tower.name));
    let min_gpm_per_hp = data
        .find(HEAT_REJECTION_TABLE, &criteria, None)
        .and_then(|r| r.number("minimum_performance_gpm_per_hp"))
        .ok_or_else(|| not_found(LOG_TARGET, &tower.name, HEAT_REJECTION_TABLE, &criteria))?;
    if min_gpm_per_hp <= 0.0 {
        return Err(ApplyError::Invalid {
            component: tower.name.clone(),
            detail: format!("minimum_performance_gpm_per_hp = {min_gpm_per_hp}"),
        });
    }

    let mut nominal_hp = flow_gpm / min_gpm_per_hp;
    let mut fan_bhp = 0.9 * nominal_hp;
    if let Some(max_hp) = motor::largest_motor_hp(data, template) {
        fan_bhp = fan_bhp.min(max_hp);
    }

    let motor_criteria = motor::motor_criteria(template);
    let mut motor_efficiency = DEFAULT_MOTOR_EFFICIENCY;
    match data.find(MOTORS_TABLE, &motor_criteria, Some(fan_bhp)) {
        Some(record) => {
            if let Some(eff) = record.number("nominal_full_load_efficiency") {
                motor_efficiency = eff;
            }
            match record.number("maximum_capacity") {
                Some(max) if max != motor::OPEN_ENDED_HP => nominal_hp = round_to(max, 1),
                _ => nominal_hp = fan_bhp,
            }
        }
        None => log::error!(
            target: LOG_TARGET,
            "{}: 전동기 조회 실패 {motor_criteria}, motor_hp = {nominal_hp} hp. 기본 효율 {DEFAULT_MOTOR_EFFICIENCY} 사용",
            tower.name
        ),
    }
    if nominal_hp >= 2.0 {
        nominal_hp = nominal_hp.round();
    }

    let motor_power_hp = fan_bhp / motor_efficiency;
    let design_fan_power_w = motor_power_hp * 745.7;
    let low_speed_fan_power_w = match tower.speed {
        TowerSpeed::TwoSpeed => Some(LOW_SPEED_POWER_FRACTION * design_fan_power_w),
        TowerSpeed::SingleSpeed | TowerSpeed::VariableSpeed => None,
    };
    log::info!(
        target: LOG_TARGET,
        "For {}: design water flow = {:.0} gpm, allowed fan motor nameplate hp = {:.1} hp, fan brake horsepower = {:.1}, fan motor actual power = {:.1} hp ({:.0} W) at {} motor efficiency",
        tower.name,
        flow_gpm,
        nominal_hp,
        fan_bhp,
        motor_power_hp,
        design_fan_power_w,
        motor_efficiency
    );

    tower.name = format!("{} {} gpm/hp", tower.name, round_to(min_gpm_per_hp, 1));
    Ok(CoolingTowerResult {
        new_name: tower.name.clone(),
        min_gpm_per_hp,
        nominal_hp,
        fan_bhp,
        motor_efficiency,
        design_fan_power_w,
        low_speed_fan_power_w,
    })
}
