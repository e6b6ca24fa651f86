//! 급탕 저탕식 온수기 열효율과 외피 손실계수(UA).

use crate::units::{convert_conductance, convert_power, convert_volume, ConductanceUnit, PowerUnit, VolumeUnit};

use super::{missing_input, round_to, ApplyError};

const LOG_TARGET: &str = "standards::water_heater";
/// 소형 전기 온수기 한계 (kW)
const SMALL_ELECTRIC_LIMIT_KW: f64 = 12.0;
/// 소형 가스 온수기 한계 (Btu/h)
const SMALL_GAS_LIMIT_BTU_PER_HR: f64 = 75_000.0;
/// 대기 손실 시험 온도차 (°F)
const STANDBY_DELTA_F: f64 = 70.0;
/// 에너지 팩터 시험 온도차 (°F)
const ENERGY_FACTOR_DELTA_F: f64 = 67.5;
/// 에너지 팩터 시험 일일 급탕 부하 (Btu)
const ENERGY_FACTOR_DAILY_LOAD_BTU: f64 = 41_094.0;

/// 온수기 연료.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterHeaterFuel {
    NaturalGas,
    Electricity,
}

impl WaterHeaterFuel {
    /// 엔진 연료 이름에서 변환. 지원하지 않으면 None.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NaturalGas" => Some(WaterHeaterFuel::NaturalGas),
            "Electricity" => Some(WaterHeaterFuel::Electricity),
            _ => None,
        }
    }

    pub fn engine_name(self) -> &'static str {
        match self {
            WaterHeaterFuel::NaturalGas => "NaturalGas",
            WaterHeaterFuel::Electricity => "Electricity",
        }
    }
}

/// 온수기 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterHeater {
    pub name: String,
    /// 엔진 연료 이름
    pub fuel_type: String,
    /// 최대 가열 용량 (W)
    pub heater_maximum_capacity: Option<f64>,
    /// 저탕 용량 (m³)
    pub tank_volume: Option<f64>,
    pub thermal_efficiency: f64,
    /// 외피 손실계수 (W/K). 기준 적용 후 채워진다.
    pub loss_coefficient_w_per_k: Option<f64>,
}

/// 온수기 기준 적용 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterHeaterEfficiencyResult {
    pub thermal_efficiency: f64,
    pub ua_btu_per_hr_f: f64,
    pub ua_w_per_k: f64,
    pub new_name: String,
}

/// 90.1-2013 Table G3.1.1-2 기준 건물 용도별 기준 급탕 연료.
pub fn baseline_fuel_type(building_type: &str) -> WaterHeaterFuel {
    match building_type {
        "SmallOffice" | "MediumOffice" | "LargeOffice" | "RetailStandalone"
        | "RetailStripmall" | "Warehouse" => WaterHeaterFuel::Electricity,
        _ => WaterHeaterFuel::NaturalGas,
    }
}

fn is_doe_reference(template: &str) -> bool {
    template.starts_with("DOE Ref")
}

/// 전기 온수기 (열효율, UA[Btu/h·°F]).
pub fn electric_efficiency_and_ua(capacity_w: f64, volume_gal: f64) -> (f64, f64) {
    let capacity_kw = convert_power(capacity_w, PowerUnit::Watt, PowerUnit::Kilowatt);
    let ua = if capacity_kw <= SMALL_ELECTRIC_LIMIT_KW {
        let energy_factor = 0.97 - 0.00132 * volume_gal;
        ENERGY_FACTOR_DAILY_LOAD_BTU * (1.0 / energy_factor - 1.0)
            / (24.0 * ENERGY_FACTOR_DELTA_F)
    } else {
        let standby_loss = 20.0 + 35.0 * volume_gal.sqrt();
        standby_loss / STANDBY_DELTA_F
    };
    (1.0, ua)
}

/// 가스 온수기 (열효율, UA[Btu/h·°F]).
pub fn gas_efficiency_and_ua(template: &str, capacity_w: f64, volume_gal: f64) -> (f64, f64) {
    if is_doe_reference(template) {
        return (0.78, 11.37);
    }
    let capacity_btu_per_hr = convert_power(capacity_w, PowerUnit::Watt, PowerUnit::BtuPerHour);
    if capacity_btu_per_hr <= SMALL_GAS_LIMIT_BTU_PER_HR {
        let energy_factor = 0.67 - 0.0019 * volume_gal;
        let recovery_efficiency = 0.81;
        let ua = (1.0 / energy_factor - 1.0 / recovery_efficiency)
            / (ENERGY_FACTOR_DELTA_F
                * (24.0 / ENERGY_FACTOR_DAILY_LOAD_BTU
                    - 1.0 / (recovery_efficiency * capacity_btu_per_hr)));
        (0.82, ua)
    } else {
        let et = 0.8;
        let standby_loss = capacity_btu_per_hr / 800.0 + 110.0 * volume_gal.sqrt();
        let ua = standby_loss * et / STANDBY_DELTA_F;
        let efficiency = (ua * STANDBY_DELTA_F + capacity_btu_per_hr * et) / capacity_btu_per_hr;
        (efficiency, ua)
    }
}

/// 기준 열효율과 UA를 구한다. 온수기는 바꾸지 않는다.
///
/// 이름에 `Booster`가 들어간 보조 온수기는 UA를 두 배로 본다.
pub fn standard_efficiency_and_ua(
    template: &str,
    heater: &WaterHeater,
) -> Result<WaterHeaterEfficiencyResult, ApplyError> {
    let capacity_w = heater
        .heater_maximum_capacity
        .ok_or_else(|| missing_input(LOG_TARGET, &heater.name, "heater_maximum_capacity"))?;
    let volume_m3 = heater
        .tank_volume
        .ok_or_else(|| missing_input(LOG_TARGET, &heater.name, "tank_volume"))?;
    let volume_gal = convert_volume(volume_m3, VolumeUnit::CubicMeter, VolumeUnit::Gallon);

    let fuel = WaterHeaterFuel::parse(&heater.fuel_type).ok_or_else(|| {
        log::warn!(
            target: LOG_TARGET,
            "{}: 연료 {}는 아직 지원하지 않아 기준을 적용하지 않음",
            heater.name,
            heater.fuel_type
        );
        ApplyError::Unsupported {
            component: heater.name.clone(),
            detail: format!("연료 {}", heater.fuel_type),
        }
    })?;

    let (thermal_efficiency, mut ua_btu_per_hr_f) = match fuel {
        WaterHeaterFuel::Electricity => electric_efficiency_and_ua(capacity_w, volume_gal),
        WaterHeaterFuel::NaturalGas => gas_efficiency_and_ua(template, capacity_w, volume_gal),
    };
    if heater.name.contains("Booster") {
        ua_btu_per_hr_f *= 2.0;
    }
    let ua_w_per_k = convert_conductance(
        ua_btu_per_hr_f,
        ConductanceUnit::BtuPerHourR,
        ConductanceUnit::WPerK,
    );
    log::debug!(target: LOG_TARGET, "{}: skin-loss UA = {ua_w_per_k} W/K", heater.name);
    Ok(WaterHeaterEfficiencyResult {
        thermal_efficiency,
        ua_btu_per_hr_f,
        ua_w_per_k,
        new_name: format!("{} {} Therm Eff", heater.name, round_to(thermal_efficiency, 3)),
    })
}

/// 기준 열효율과 손실계수를 적용하고 이름을 바꾼다.
pub fn apply_efficiency(
    template: &str,
    heater: &mut WaterHeater,
) -> Result<WaterHeaterEfficiencyResult, ApplyError> {
    let result = standard_efficiency_and_ua(template, heater)?;
    heater.thermal_efficiency = result.thermal_efficiency;
    heater.loss_coefficient_w_per_k = Some(result.ua_w_per_k);
    heater.name = result.new_name.clone();
    log::info!(
        target: LOG_TARGET,
        "For {template}: {}; thermal efficiency = {}, skin-loss UA = {:.0}Btu/hr-R",
        heater.name,
        round_to(result.thermal_efficiency, 3),
        result.ua_btu_per_hr_f
    );
    Ok(result)
}
