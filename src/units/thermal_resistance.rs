use serde::{Deserialize, Serialize};

use super::heat_transfer::SI_PER_IP_U;

/// 열저항(R) 단위. 내부 기준은 m²·K/W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalResistanceUnit {
    SquareMeterKPerW,
    /// ft²·h·°R/Btu
    SquareFootHourRPerBtu,
}

fn to_base(value: f64, unit: ThermalResistanceUnit) -> f64 {
    match unit {
        ThermalResistanceUnit::SquareMeterKPerW => value,
        ThermalResistanceUnit::SquareFootHourRPerBtu => value / SI_PER_IP_U,
    }
}

fn from_base(value: f64, unit: ThermalResistanceUnit) -> f64 {
    match unit {
        ThermalResistanceUnit::SquareMeterKPerW => value,
        ThermalResistanceUnit::SquareFootHourRPerBtu => value * SI_PER_IP_U,
    }
}

/// 열저항을 변환한다.
pub fn convert_thermal_resistance(
    value: f64,
    from: ThermalResistanceUnit,
    to: ThermalResistanceUnit,
) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}

/// IP R값(ft²·h·°R/Btu)을 SI(m²·K/W)로 환산한다.
pub fn r_ip_to_si(r_ip: f64) -> f64 {
    convert_thermal_resistance(
        r_ip,
        ThermalResistanceUnit::SquareFootHourRPerBtu,
        ThermalResistanceUnit::SquareMeterKPerW,
    )
}

/// SI R값을 IP로 환산한다.
pub fn r_si_to_ip(r_si: f64) -> f64 {
    convert_thermal_resistance(
        r_si,
        ThermalResistanceUnit::SquareMeterKPerW,
        ThermalResistanceUnit::SquareFootHourRPerBtu,
    )
}
