use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeFlowUnit {
    CubicMeterPerSecond,
    LiterPerSecond,
    CubicMeterPerHour,
    /// ft³/min
    Cfm,
    /// US gal/min
    Gpm,
}

const M3_PER_FT3: f64 = 0.028_316_846_592;
const M3_PER_GAL: f64 = 0.003_785_411_784;

fn to_base(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::LiterPerSecond => value / 1000.0,
        VolumeFlowUnit::CubicMeterPerHour => value / 3600.0,
        VolumeFlowUnit::Cfm => value * M3_PER_FT3 / 60.0,
        VolumeFlowUnit::Gpm => value * M3_PER_GAL / 60.0,
    }
}

fn from_base(value: f64, unit: VolumeFlowUnit) -> f64 {
    match unit {
        VolumeFlowUnit::CubicMeterPerSecond => value,
        VolumeFlowUnit::LiterPerSecond => value * 1000.0,
        VolumeFlowUnit::CubicMeterPerHour => value * 3600.0,
        VolumeFlowUnit::Cfm => value * 60.0 / M3_PER_FT3,
        VolumeFlowUnit::Gpm => value * 60.0 / M3_PER_GAL,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_volume_flow(value: f64, from: VolumeFlowUnit, to: VolumeFlowUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
