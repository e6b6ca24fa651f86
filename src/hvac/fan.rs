//! 팬 동력, 효율 기준 적용.

use crate::standards::StandardsData;
use crate::units::{
    convert_power_per_flow, convert_pressure, convert_volume_flow, PowerPerFlowUnit, PressureUnit,
    VolumeFlowUnit,
};

use super::motor::{self, MotorSelection};
use super::{missing_input, round_to, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::fan";
/// 배기팬은 전동기 효율을 따로 갖지 않으므로 이 값으로 본다.
const EXHAUST_MOTOR_EFFICIENCY: f64 = 0.7;
/// 소형 팬은 1 hp 미만 전동기 여러 대로 본다.
const SMALL_FAN_NOMINAL_HP: f64 = 0.5;

/// 팬이 어디에 붙어 있는지. 기준 임펠러 효율과 전동기 선정이 달라진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanKind {
    /// 공조기 급기/환기 팬
    Standard,
    /// 존 배기팬
    ZoneExhaust,
    /// 팬코일, PTAC/PTHP, 수열원 히트펌프, ERV 등 존 설비 내장 팬
    FanCoil,
    /// 병렬/직렬 팬 구동 터미널(PIU) 팬
    PoweredTerminal,
}

impl FanKind {
    /// 소형 팬 여부. 급기/환기 팬이 아니면 모두 소형으로 본다.
    pub fn is_small(self) -> bool {
        !matches!(self, FanKind::Standard)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "supply" => Some(FanKind::Standard),
            "exhaust" | "zone_exhaust" => Some(FanKind::ZoneExhaust),
            "fan-coil" | "fan_coil" | "fancoil" => Some(FanKind::FanCoil),
            "terminal" | "piu" | "powered_terminal" => Some(FanKind::PoweredTerminal),
            _ => None,
        }
    }
}

/// 팬 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct Fan {
    pub name: String,
    pub kind: FanKind,
    /// 최대 풍량 (m³/s)
    pub maximum_flow_rate: SizedValue,
    /// 정압 상승 (Pa)
    pub pressure_rise_pa: f64,
    /// 종합 효율 = 임펠러 효율 × 전동기 효율
    pub fan_efficiency: f64,
    /// 전동기 효율. 배기팬은 무시된다.
    pub motor_efficiency: f64,
    /// 시뮬레이션 결과의 정격 소비전력 (W). 없으면 계산값을 쓴다.
    pub rated_power_w: Option<f64>,
}

impl Fan {
    pub fn new(name: &str, kind: FanKind, maximum_flow_rate: SizedValue, pressure_rise_pa: f64) -> Self {
        Self {
            name: name.to_string(),
            kind,
            maximum_flow_rate,
            pressure_rise_pa,
            fan_efficiency: 0.6,
            motor_efficiency: 0.9,
            rated_power_w: None,
        }
    }

    fn effective_motor_efficiency(&self) -> f64 {
        match self.kind {
            FanKind::ZoneExhaust => EXHAUST_MOTOR_EFFICIENCY,
            _ => self.motor_efficiency,
        }
    }

    // 배기팬은 직접 입력된 풍량만 인정한다.
    fn design_flow_m3_per_s(&self) -> Result<f64, ApplyError> {
        let flow = match self.kind {
            FanKind::ZoneExhaust => self.maximum_flow_rate.hard_sized,
            _ => self.maximum_flow_rate.hard_then_auto(),
        };
        flow.ok_or_else(|| missing_input(LOG_TARGET, &self.name, "maximum_flow_rate"))
    }
}

/// 기준 효율 적용 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct FanEfficiencyResult {
    /// 허용 축동력 (hp)
    pub allowed_bhp: f64,
    pub impeller_efficiency: f64,
    pub motor: MotorSelection,
    pub total_efficiency: f64,
    pub flow_cfm: f64,
}

/// 팬 소비전력 (W) = ΔP·V/η.
pub fn fan_power_w(fan: &Fan) -> Result<f64, ApplyError> {
    let flow = fan.design_flow_m3_per_s()?;
    Ok(fan.pressure_rise_pa * flow / fan.fan_efficiency)
}

/// 축동력 (hp).
pub fn brake_horsepower(fan: &Fan) -> Result<f64, ApplyError> {
    let power_w = fan_power_w(fan)?;
    Ok(power_w * fan.effective_motor_efficiency() / 746.0)
}

/// 전동기 입력 동력 (hp).
pub fn motor_horsepower(fan: &Fan) -> Result<f64, ApplyError> {
    Ok(fan_power_w(fan)? / 745.7)
}

pub fn baseline_impeller_efficiency(fan: &Fan) -> f64 {
    if fan.kind.is_small() {
        0.55
    } else {
        0.65
    }
}

/// 전동기 효율을 바꾸고 임펠러 효율을 유지하도록 종합 효율을 다시 계산한다.
pub fn change_motor_efficiency(fan: &mut Fan, motor_eff: f64) {
    let impeller_eff = fan.fan_efficiency / fan.effective_motor_efficiency();
    fan.fan_efficiency = motor_eff * impeller_eff;
    if fan.kind != FanKind::ZoneExhaust {
        fan.motor_efficiency = motor_eff;
    }
}

/// 임펠러 효율을 바꾼다. 전동기 효율은 유지.
pub fn change_impeller_efficiency(fan: &mut Fan, impeller_eff: f64) {
    fan.fan_efficiency = fan.effective_motor_efficiency() * impeller_eff;
}

/// 팬 전동기 효율과 명판 마력. 소형 팬은 0.5 hp 전동기로 본다.
pub fn standard_minimum_motor_efficiency_and_size(
    data: &StandardsData,
    template: &str,
    fan: &Fan,
    motor_bhp: f64,
) -> MotorSelection {
    if fan.kind.is_small() && motor_bhp != 0.0 {
        return match motor::nominal_motor_efficiency(data, template, SMALL_FAN_NOMINAL_HP) {
            Some(efficiency) => MotorSelection {
                efficiency,
                nominal_hp: SMALL_FAN_NOMINAL_HP,
                from_table: true,
            },
            None => {
                log::error!(
                    target: LOG_TARGET,
                    "{}: {SMALL_FAN_NOMINAL_HP} hp 전동기 조회 실패",
                    fan.name
                );
                MotorSelection {
                    efficiency: motor::DEFAULT_MOTOR_EFFICIENCY,
                    nominal_hp: SMALL_FAN_NOMINAL_HP,
                    from_table: false,
                }
            }
        };
    }
    motor::minimum_motor_efficiency_and_size(data, template, motor_bhp)
}

/// 허용 축동력에 맞춰 전동기 효율만 바꾼다.
pub fn apply_standard_minimum_motor_efficiency(
    data: &StandardsData,
    template: &str,
    fan: &mut Fan,
    allowed_bhp: f64,
) -> MotorSelection {
    let selection = standard_minimum_motor_efficiency_and_size(data, template, fan, allowed_bhp);
    change_motor_efficiency(fan, selection.efficiency);
    if fan.kind.is_small() {
        log::info!(
            target: LOG_TARGET,
            "For {}: motor eff = {:.2}%; 1 hp 미만 전동기 여러 대로 가정",
            fan.name,
            selection.efficiency * 100.0
        );
    } else {
        log::info!(
            target: LOG_TARGET,
            "For {}: motor nameplate = {}HP, motor eff = {:.2}%",
            fan.name,
            selection.nominal_hp,
            selection.efficiency * 100.0
        );
    }
    selection
}

/// 기준 임펠러 효율과 전동기 효율을 적용한다.
///
/// 허용 축동력 = 1.1 × (ΔP[inH2O]·cfm / (η_imp·6356)).
pub fn apply_standard_efficiency(
    data: &StandardsData,
    template: &str,
    fan: &mut Fan,
) -> Result<FanEfficiencyResult, ApplyError> {
    let flow_m3_per_s = fan
        .maximum_flow_rate
        .hard_then_auto()
        .ok_or_else(|| missing_input(LOG_TARGET, &fan.name, "maximum_flow_rate"))?;
    let flow_cfm = convert_volume_flow(
        flow_m3_per_s,
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::Cfm,
    );
    let pressure_rise_in_h2o =
        convert_pressure(fan.pressure_rise_pa, PressureUnit::Pascal, PressureUnit::InchWater);

    let impeller_efficiency = baseline_impeller_efficiency(fan);
    let brake_hp = pressure_rise_in_h2o * flow_cfm / (impeller_efficiency * 6356.0);
    let mut allowed_bhp = brake_hp * 1.1;
    if allowed_bhp > 0.1 {
        allowed_bhp = round_to(allowed_bhp, 2) + 0.0001;
    } else if allowed_bhp < 0.01 {
        allowed_bhp = 0.01;
    }
    if !fan.kind.is_small() && allowed_bhp < 1.0 {
        allowed_bhp = 1.01;
    }

    let motor = standard_minimum_motor_efficiency_and_size(data, template, fan, allowed_bhp);
    let total_efficiency = impeller_efficiency * motor.efficiency;
    fan.fan_efficiency = total_efficiency;
    if fan.kind != FanKind::ZoneExhaust {
        fan.motor_efficiency = motor.efficiency;
    }

    log::info!(
        target: LOG_TARGET,
        "For {}: allowed_hp = {:.2}HP; motor eff = {:.2}%; total fan eff = {:.0}% based on {:.0} cfm",
        fan.name,
        allowed_bhp,
        motor.efficiency * 100.0,
        total_efficiency * 100.0,
        flow_cfm
    );
    Ok(FanEfficiencyResult {
        allowed_bhp,
        impeller_efficiency,
        motor,
        total_efficiency,
        flow_cfm,
    })
}

/// 목표 소비전력(W)이 되도록 정압을 조정한다. 새 정압(Pa)을 돌려준다.
pub fn adjust_pressure_rise_to_meet_fan_power(fan: &mut Fan, target_power_w: f64) -> Result<f64, ApplyError> {
    let flow = fan
        .maximum_flow_rate
        .auto_then_hard()
        .ok_or_else(|| missing_input(LOG_TARGET, &fan.name, "maximum_flow_rate"))?;
    let new_pressure_rise_pa = target_power_w * fan.fan_efficiency / flow;
    fan.pressure_rise_pa = new_pressure_rise_pa;
    log::info!(
        target: LOG_TARGET,
        "For {}: pressure rise = {:.1} in w.c., power = {:.0} W",
        fan.name,
        convert_pressure(new_pressure_rise_pa, PressureUnit::Pascal, PressureUnit::InchWater),
        target_power_w
    );
    Ok(new_pressure_rise_pa)
}

/// 정격 W/cfm. 정격 소비전력이 없으면 현재 정압과 효율로 계산한다.
pub fn rated_w_per_cfm(fan: &Fan) -> Result<f64, ApplyError> {
    let power_w = match fan.rated_power_w {
        Some(w) => w,
        None => {
            log::warn!(
                target: LOG_TARGET,
                "{}: 정격 소비전력이 없어 정압과 종합 효율로 계산함",
                fan.name
            );
            fan_power_w(fan)?
        }
    };
    let flow = fan
        .maximum_flow_rate
        .auto_then_hard()
        .ok_or_else(|| missing_input(LOG_TARGET, &fan.name, "maximum_flow_rate"))?;
    Ok(convert_power_per_flow(
        power_w / flow,
        PowerPerFlowUnit::WattSecondPerCubicMeter,
        PowerPerFlowUnit::WattPerCfm,
    ))
}
