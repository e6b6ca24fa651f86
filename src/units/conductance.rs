use serde::{Deserialize, Serialize};

/// 열컨덕턴스(UA) 단위. 내부 기준은 W/K이다. 저탕조 외피 손실계수에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductanceUnit {
    WPerK,
    /// Btu/(h·°R), Btu/(h·°F)와 동일
    BtuPerHourR,
}

const W_PER_K_PER_BTU_PER_HOUR_R: f64 = 0.527_528;

/// 열컨덕턴스를 변환한다.
pub fn convert_conductance(value: f64, from: ConductanceUnit, to: ConductanceUnit) -> f64 {
    let w_per_k = match from {
        ConductanceUnit::WPerK => value,
        ConductanceUnit::BtuPerHourR => value * W_PER_K_PER_BTU_PER_HOUR_R,
    };
    match to {
        ConductanceUnit::WPerK => w_per_k,
        ConductanceUnit::BtuPerHourR => w_per_k / W_PER_K_PER_BTU_PER_HOUR_R,
    }
}
