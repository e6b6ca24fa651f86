use serde::{Deserialize, Serialize};

/// 유량당 동력 단위. 내부 기준은 W·s/m³ (= Pa/효율)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerPerFlowUnit {
    WattSecondPerCubicMeter,
    /// W/gpm (W·min/gal), 펌프 기준값 단위
    WattPerGpm,
    /// W/cfm (W·min/ft³), 팬 기준값 단위
    WattPerCfm,
}

const M3_PER_FT3: f64 = 0.028_316_846_592;
const M3_PER_GAL: f64 = 0.003_785_411_784;

fn to_base(value: f64, unit: PowerPerFlowUnit) -> f64 {
    match unit {
        PowerPerFlowUnit::WattSecondPerCubicMeter => value,
        PowerPerFlowUnit::WattPerGpm => value * 60.0 / M3_PER_GAL,
        PowerPerFlowUnit::WattPerCfm => value * 60.0 / M3_PER_FT3,
    }
}

fn from_base(value: f64, unit: PowerPerFlowUnit) -> f64 {
    match unit {
        PowerPerFlowUnit::WattSecondPerCubicMeter => value,
        PowerPerFlowUnit::WattPerGpm => value * M3_PER_GAL / 60.0,
        PowerPerFlowUnit::WattPerCfm => value * M3_PER_FT3 / 60.0,
    }
}

/// 유량당 동력을 변환한다.
pub fn convert_power_per_flow(value: f64, from: PowerPerFlowUnit, to: PowerPerFlowUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
