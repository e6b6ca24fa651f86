use thiserror::Error;

use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 두 단위가 같은 물리량이 아님
    #[error("서로 다른 물리량의 단위: {from} -> {to}")]
    Incompatible { from: String, to: String },
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `W`, `Btu/h`, `cfm`, `inH2O`, `gal`, `W/gpm` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::VolumeFlow => {
            let from = parse_volume_flow_unit(from_unit_str)?;
            let to = parse_volume_flow_unit(to_unit_str)?;
            Ok(convert_volume_flow(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::HeatTransferCoeff => {
            let from = parse_heat_transfer_unit(from_unit_str)?;
            let to = parse_heat_transfer_unit(to_unit_str)?;
            Ok(convert_heat_transfer(value, from, to))
        }
        QuantityKind::ThermalResistance => {
            let from = parse_thermal_resistance_unit(from_unit_str)?;
            let to = parse_thermal_resistance_unit(to_unit_str)?;
            Ok(convert_thermal_resistance(value, from, to))
        }
        QuantityKind::Conductance => {
            let from = parse_conductance_unit(from_unit_str)?;
            let to = parse_conductance_unit(to_unit_str)?;
            Ok(convert_conductance(value, from, to))
        }
        QuantityKind::PowerPerFlow => {
            let from = parse_power_per_flow_unit(from_unit_str)?;
            let to = parse_power_per_flow_unit(to_unit_str)?;
            Ok(convert_power_per_flow(value, from, to))
        }
    }
}

/// 단위 쌍에서 물리량을 추론해 변환한다.
///
/// 두 단위를 모두 해석할 수 있는 첫 번째 물리량을 사용한다.
pub fn convert_units(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<QuantityValue, ConversionError> {
    for unit in [from_unit_str, to_unit_str] {
        if infer_kind(unit).is_none() {
            return Err(ConversionError::UnknownUnit(unit.to_string()));
        }
    }
    let kind = QuantityKind::ALL
        .into_iter()
        .find(|k| accepts(*k, from_unit_str) && accepts(*k, to_unit_str))
        .ok_or_else(|| ConversionError::Incompatible {
            from: from_unit_str.to_string(),
            to: to_unit_str.to_string(),
        })?;
    log::debug!(
        target: "standards::units",
        "{from_unit_str} -> {to_unit_str}: {}",
        kind.name()
    );
    let converted = convert(kind, value, from_unit_str, to_unit_str)?;
    Ok(QuantityValue {
        kind,
        value: converted,
    })
}

fn infer_kind(s: &str) -> Option<QuantityKind> {
    QuantityKind::ALL.into_iter().find(|k| accepts(*k, s))
}

fn accepts(kind: QuantityKind, s: &str) -> bool {
    match kind {
        QuantityKind::Power => parse_power_unit(s).is_ok(),
        QuantityKind::VolumeFlow => parse_volume_flow_unit(s).is_ok(),
        QuantityKind::Pressure => parse_pressure_unit(s).is_ok(),
        QuantityKind::Length => parse_length_unit(s).is_ok(),
        QuantityKind::Volume => parse_volume_unit(s).is_ok(),
        QuantityKind::HeatTransferCoeff => parse_heat_transfer_unit(s).is_ok(),
        QuantityKind::ThermalResistance => parse_thermal_resistance_unit(s).is_ok(),
        QuantityKind::Conductance => parse_conductance_unit(s).is_ok(),
        QuantityKind::PowerPerFlow => parse_power_per_flow_unit(s).is_ok(),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "btu/h" | "btu/hr" | "btuh" => Ok(PowerUnit::BtuPerHour),
        "kbtu/h" | "kbtu/hr" | "mbh" => Ok(PowerUnit::KiloBtuPerHour),
        "ton" | "tons" | "rt" => Ok(PowerUnit::Ton),
        "hp" | "bhp" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_flow_unit(s: &str) -> Result<VolumeFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/s" | "m^3/s" => Ok(VolumeFlowUnit::CubicMeterPerSecond),
        "l/s" => Ok(VolumeFlowUnit::LiterPerSecond),
        "m3/h" | "m^3/h" | "cmh" => Ok(VolumeFlowUnit::CubicMeterPerHour),
        "cfm" | "ft3/min" => Ok(VolumeFlowUnit::Cfm),
        "gpm" | "gal/min" => Ok(VolumeFlowUnit::Gpm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "inh2o" | "in.w.c." | "inwc" => Ok(PressureUnit::InchWater),
        "fth2o" | "ft" | "ft_h2o" => Ok(PressureUnit::FootWater),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "foot" | "feet" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        "gal" | "gallon" => Ok(VolumeUnit::Gallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_heat_transfer_unit(s: &str) -> Result<HeatTransferUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w/m2k" | "w/m^2k" | "w/m2-k" => Ok(HeatTransferUnit::WPerSquareMeterK),
        "btu/h-ft2-f" | "btu/hr*ft^2*r" | "btu/h-ft2-r" => {
            Ok(HeatTransferUnit::BtuPerHourSquareFootR)
        }
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_thermal_resistance_unit(s: &str) -> Result<ThermalResistanceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2k/w" | "m^2k/w" | "m2-k/w" => Ok(ThermalResistanceUnit::SquareMeterKPerW),
        "ft2-h-f/btu" | "ft^2*hr*r/btu" | "ft2-h-r/btu" => {
            Ok(ThermalResistanceUnit::SquareFootHourRPerBtu)
        }
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_conductance_unit(s: &str) -> Result<ConductanceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w/k" => Ok(ConductanceUnit::WPerK),
        "btu/h-f" | "btu/hr*r" | "btu/h-r" => Ok(ConductanceUnit::BtuPerHourR),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_per_flow_unit(s: &str) -> Result<PowerPerFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w*s/m3" | "w-s/m3" | "ws/m3" => Ok(PowerPerFlowUnit::WattSecondPerCubicMeter),
        "w/gpm" => Ok(PowerPerFlowUnit::WattPerGpm),
        "w/cfm" => Ok(PowerPerFlowUnit::WattPerCfm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
