//! 펌프 양정, 동력, 전동기 효율.

use crate::standards::StandardsData;
use crate::units::{
    convert_power_per_flow, convert_pressure, convert_volume_flow, PowerPerFlowUnit, PressureUnit,
    VolumeFlowUnit,
};

use super::motor::{self, MotorSelection};
use super::{missing_input, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::pump";
/// 기준 임펠러 효율
pub const PUMP_IMPELLER_EFFICIENCY: f64 = 0.78;

/// 순환수 종류. 밀도(lb/gal)가 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterType {
    /// 냉수 (44°F)
    Cooling,
    /// 냉각수 (85°F)
    Condenser,
    /// 온수 (180°F)
    Heating,
}

impl WaterType {
    pub fn density_lb_per_gal(self) -> f64 {
        match self {
            WaterType::Cooling => 8.345,
            WaterType::Condenser => 8.31,
            WaterType::Heating => 8.098,
        }
    }
}

/// 펌프 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct Pump {
    pub name: String,
    /// 정격 유량 (m³/s). 헤더 펌프는 전체 유량.
    pub rated_flow_rate: SizedValue,
    /// 정격 양정 (Pa)
    pub rated_pump_head_pa: f64,
    pub motor_efficiency: f64,
    /// 정격 소비전력 (W)
    pub rated_power: SizedValue,
    /// 헤더 펌프 대수. 단일 펌프는 1.
    pub pumps_in_bank: u32,
}

impl Pump {
    pub fn new(name: &str, rated_flow_rate: SizedValue, rated_pump_head_pa: f64) -> Self {
        Self {
            name: name.to_string(),
            rated_flow_rate,
            rated_pump_head_pa,
            motor_efficiency: 0.9,
            rated_power: SizedValue::default(),
            pumps_in_bank: 1,
        }
    }

    fn flow_m3_per_s(&self) -> Result<f64, ApplyError> {
        self.rated_flow_rate
            .auto_then_hard()
            .ok_or_else(|| missing_input(LOG_TARGET, &self.name, "rated_flow_rate"))
    }
}

/// 목표 W/gpm을 내는 양정 (Pa).
///
/// ft = W/gpm · 33000·η / (745.7 · ρ[lb/gal]).
pub fn pressure_for_target_power_per_flow(
    target_w_per_gpm: f64,
    pump_efficiency: f64,
    water: WaterType,
) -> f64 {
    let head_ft = target_w_per_gpm * (33000.0 * pump_efficiency)
        / (745.7 * water.density_lb_per_gal());
    convert_pressure(head_ft, PressureUnit::FootWater, PressureUnit::Pascal)
}

/// 펌프 소비전력 (W) = 양정·유량 / (η_imp·η_motor).
pub fn pump_power_w(pump: &Pump) -> Result<f64, ApplyError> {
    let flow = pump.flow_m3_per_s()?;
    let total_eff = PUMP_IMPELLER_EFFICIENCY * pump.motor_efficiency;
    Ok(pump.rated_pump_head_pa * flow / total_eff)
}

/// 축동력 (hp).
pub fn brake_horsepower(pump: &Pump) -> Result<f64, ApplyError> {
    let flow = pump.flow_m3_per_s()?;
    let power_w = pump.rated_pump_head_pa * flow / PUMP_IMPELLER_EFFICIENCY;
    Ok(power_w / 745.7)
}

/// 전동기 입력 동력 (hp). 정격 소비전력이 없으면 오류 로그 후 0.
pub fn horsepower(pump: &Pump) -> f64 {
    match pump.rated_power.auto_then_hard() {
        Some(w) => w / 745.7,
        None => {
            log::error!(
                target: LOG_TARGET,
                "{}: 정격 소비전력이 없어 마력을 계산할 수 없음",
                pump.name
            );
            0.0
        }
    }
}

/// 정격 W/gpm. 소비전력이나 유량이 없으면 오류 로그 후 0.
pub fn rated_w_per_gpm(pump: &Pump) -> f64 {
    let Some(power_w) = pump.rated_power.auto_then_hard() else {
        log::error!(
            target: LOG_TARGET,
            "{}: 정격 소비전력이 없어 W/gpm을 계산할 수 없음",
            pump.name
        );
        return 0.0;
    };
    let Some(flow) = pump.rated_flow_rate.hard_then_auto() else {
        log::error!(
            target: LOG_TARGET,
            "{}: 정격 유량이 없어 W/gpm을 계산할 수 없음",
            pump.name
        );
        return 0.0;
    };
    convert_power_per_flow(
        power_w / flow,
        PowerPerFlowUnit::WattSecondPerCubicMeter,
        PowerPerFlowUnit::WattPerGpm,
    )
}

/// 펌프용 전동기 선정. 축동력 0이면 효율 1.0.
pub fn standard_minimum_motor_efficiency_and_size(
    data: &StandardsData,
    template: &str,
    motor_bhp: f64,
) -> MotorSelection {
    if motor_bhp == 0.0 {
        return MotorSelection {
            efficiency: 1.0,
            nominal_hp: 0.0,
            from_table: false,
        };
    }
    motor::minimum_motor_efficiency_and_size(data, template, motor_bhp)
}

/// 현재 축동력에 맞는 최소 전동기 효율을 적용한다.
pub fn apply_standard_minimum_motor_efficiency(
    data: &StandardsData,
    template: &str,
    pump: &mut Pump,
) -> Result<MotorSelection, ApplyError> {
    let bhp = brake_horsepower(pump)?;
    let selection = standard_minimum_motor_efficiency_and_size(data, template, bhp);
    pump.motor_efficiency = selection.efficiency;
    log::info!(
        target: LOG_TARGET,
        "For {}: brake hp = {:.2}HP, motor nameplate = {:.2}HP, motor eff = {:.2}%",
        pump.name,
        bhp,
        selection.nominal_hp,
        selection.efficiency * 100.0
    );
    Ok(selection)
}

/// 양정/전동기 효율 적용 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpHeadResult {
    pub motor_efficiency: f64,
    pub nominal_hp: f64,
    pub pressure_rise_pa: f64,
    pub pressure_rise_ft_h2o: f64,
}

/// 목표 W/gpm이 되도록 전동기 효율과 양정을 정한다.
///
/// 전동기 입력 동력과 그에 해당하는 축동력 두 지점에서 전동기를 찾아 작은 쪽을 쓴다.
pub fn apply_head_and_motor_efficiency(
    data: &StandardsData,
    template: &str,
    pump: &mut Pump,
    target_w_per_gpm: f64,
) -> Result<PumpHeadResult, ApplyError> {
    let flow_per_pump = pump.flow_m3_per_s()? / f64::from(pump.pumps_in_bank.max(1));
    let flow_gpm = convert_volume_flow(
        flow_per_pump,
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::Gpm,
    );
    let target_motor_hp = target_w_per_gpm * flow_gpm / 745.7;

    let hi = standard_minimum_motor_efficiency_and_size(data, template, target_motor_hp);
    let lo = standard_minimum_motor_efficiency_and_size(data, template, target_motor_hp * hi.efficiency);
    let motor_efficiency = hi.efficiency.min(lo.efficiency);
    let nominal_hp = hi.nominal_hp.min(lo.nominal_hp);
    pump.motor_efficiency = motor_efficiency;

    let total_efficiency = PUMP_IMPELLER_EFFICIENCY * motor_efficiency;
    let w_per_m3_s = convert_power_per_flow(
        target_w_per_gpm,
        PowerPerFlowUnit::WattPerGpm,
        PowerPerFlowUnit::WattSecondPerCubicMeter,
    );
    let pressure_rise_pa = w_per_m3_s * total_efficiency;
    pump.rated_pump_head_pa = pressure_rise_pa;
    let pressure_rise_ft_h2o =
        convert_pressure(pressure_rise_pa, PressureUnit::Pascal, PressureUnit::FootWater);

    log::info!(
        target: LOG_TARGET,
        "For {}: motor nameplate = {}HP, motor eff = {:.2}%; {:.0} W/gpm translates to a pressure rise of {:.2} ftH2O",
        pump.name,
        nominal_hp,
        motor_efficiency * 100.0,
        target_w_per_gpm,
        pressure_rise_ft_h2o
    );
    Ok(PumpHeadResult {
        motor_efficiency,
        nominal_hp,
        pressure_rise_pa,
        pressure_rise_ft_h2o,
    })
}
