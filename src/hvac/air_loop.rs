//! 공조 계통의 허용 팬 동력.

use crate::standards::StandardsData;
use crate::units::{convert_volume_flow, VolumeFlowUnit};

use super::fan::{self, Fan};
use super::{missing_input, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::air_loop";

/// 팬 동력 한도 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanControl {
    ConstantVolume,
    VariableVolume,
}

/// 공조 계통 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct AirLoop {
    pub name: String,
    /// 설계 급기 풍량 (m³/s)
    pub design_supply_air_flow: SizedValue,
    /// 급기 팬 제어 방식
    pub fan_control: FanControl,
    /// 담당 존 개수
    pub zones_served: usize,
    /// 환기/배기 덕트가 모두 덕트식인지
    pub fully_ducted_return: bool,
}

/// 압력 손실 보정 축동력 (hp). 완전 덕트식 환기/배기이면 0.5 in.w.c.를 더한다.
pub fn pressure_drop_adjustment_bhp(flow_cfm: f64, fully_ducted_return: bool) -> f64 {
    let mut adjustment_in_wc = 0.0;
    if fully_ducted_return {
        adjustment_in_wc += 0.5;
        log::info!(target: LOG_TARGET, "완전 덕트식 환기/배기: 0.5 in.w.c. 가산");
    }
    adjustment_in_wc * flow_cfm / 4131.0
}

/// 한도 계산에 쓸 팬 제어 방식. 90.1-2010 단일 존 VAV는 정풍량 한도를 쓴다.
pub fn fan_power_limit_type(air_loop: &AirLoop, template: &str) -> FanControl {
    if template.contains("90.1-2010")
        && air_loop.fan_control == FanControl::VariableVolume
        && air_loop.zones_served == 1
    {
        log::info!(
            target: LOG_TARGET,
            "For {}: 단일 존 VAV라 정풍량 한도를 사용함",
            air_loop.name
        );
        return FanControl::ConstantVolume;
    }
    air_loop.fan_control
}

/// 계통 허용 축동력 (hp). 정풍량 cfm·0.00094, 변풍량 cfm·0.0013에 보정값을 더한다.
pub fn allowable_system_bhp(air_loop: &AirLoop, template: &str) -> Result<f64, ApplyError> {
    let flow_m3_per_s = air_loop
        .design_supply_air_flow
        .auto_then_hard()
        .ok_or_else(|| missing_input(LOG_TARGET, &air_loop.name, "design_supply_air_flow"))?;
    let flow_cfm = convert_volume_flow(
        flow_m3_per_s,
        VolumeFlowUnit::CubicMeterPerSecond,
        VolumeFlowUnit::Cfm,
    );
    let adjustment_bhp = pressure_drop_adjustment_bhp(flow_cfm, air_loop.fully_ducted_return);
    let allowable = match fan_power_limit_type(air_loop, template) {
        FanControl::ConstantVolume => flow_cfm * 0.00094 + adjustment_bhp,
        FanControl::VariableVolume => flow_cfm * 0.0013 + adjustment_bhp,
    };
    log::info!(
        target: LOG_TARGET,
        "For {}: Allowable brake horsepower = {:.2}HP based on {:.0} cfm and {:.2} bhp of adjustment",
        air_loop.name,
        allowable,
        flow_cfm,
        adjustment_bhp
    );
    Ok(allowable)
}

/// 계통 팬 축동력 합 (hp).
pub fn system_fan_bhp(fans: &[Fan]) -> Result<f64, ApplyError> {
    fans.iter().map(fan::brake_horsepower).sum()
}

/// 허용 축동력을 팬 수로 나눠 각 팬의 전동기 효율과 정압을 맞춘다.
///
/// 팬마다 허용 소비전력(W) = bhp·746/η_motor 로 정압을 역산한다. 팬당 허용 bhp를 돌려준다.
pub fn apply_baseline_fan_power(
    data: &StandardsData,
    template: &str,
    air_loop: &AirLoop,
    fans: &mut [Fan],
) -> Result<f64, ApplyError> {
    if fans.is_empty() {
        return Err(missing_input(LOG_TARGET, &air_loop.name, "fans"));
    }
    let per_fan_bhp = allowable_system_bhp(air_loop, template)? / fans.len() as f64;
    for f in fans.iter_mut() {
        fan::apply_standard_minimum_motor_efficiency(data, template, f, per_fan_bhp);
        let allowable_power_w = per_fan_bhp * 746.0 / f.motor_efficiency;
        fan::adjust_pressure_rise_to_meet_fan_power(f, allowable_power_w)?;
    }
    Ok(per_fan_bhp)
}
