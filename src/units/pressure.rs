use serde::{Deserialize, Serialize};

/// 압력(정압 상승/양정) 단위. 내부 기준은 Pa이다.
///
/// 팬 정압과 펌프 양정은 모두 차압이므로 게이지/절대 구분 없이 배율만 적용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    /// inch of water (60°F 기준)
    InchWater,
    /// foot of water (60°F 기준)
    FootWater,
    Psi,
}

const PA_PER_IN_H2O: f64 = 248.84;
const PA_PER_FT_H2O: f64 = PA_PER_IN_H2O * 12.0;
const PA_PER_PSI: f64 = 6_894.757;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::InchWater => value * PA_PER_IN_H2O,
        PressureUnit::FootWater => value * PA_PER_FT_H2O,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::InchWater => value_pa / PA_PER_IN_H2O,
        PressureUnit::FootWater => value_pa / PA_PER_FT_H2O,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
