use serde::{Deserialize, Serialize};

/// 열관류율(U) 단위. 내부 기준은 W/m²·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    /// Btu/(ft²·h·°R)
    BtuPerHourSquareFootR,
}

pub(crate) const SI_PER_IP_U: f64 = 5.678_263_34;

fn to_base(value: f64, unit: HeatTransferUnit) -> f64 {
    match unit {
        HeatTransferUnit::WPerSquareMeterK => value,
        HeatTransferUnit::BtuPerHourSquareFootR => value * SI_PER_IP_U,
    }
}

fn from_base(value: f64, unit: HeatTransferUnit) -> f64 {
    match unit {
        HeatTransferUnit::WPerSquareMeterK => value,
        HeatTransferUnit::BtuPerHourSquareFootR => value / SI_PER_IP_U,
    }
}

/// 열관류율을 변환한다.
pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
