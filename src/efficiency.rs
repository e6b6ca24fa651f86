//! 효율 등급 환산. 기준표의 EER/SEER/HSPF/AFUE 등을 시뮬레이션 입력값(COP, 열효율)으로 바꾼다.
//!
//! 용량 단위가 필요한 식은 W를 받아 내부에서 Btu/h로 바꾼다.

use crate::units::power::watt_to_btu_per_hour;

/// 3.413 Btu/h = 1 W
const BTU_PER_WH: f64 = 3.413;
/// 실내 팬 동력 비율 (PNNL 근사)
const FAN_POWER_FRACTION: f64 = 0.12;

/// SEER → 팬 동력을 뺀 냉방 COP.
pub fn seer_to_cop_cooling_no_fan(seer: f64) -> f64 {
    -0.0076 * seer.powi(2) + 0.3796 * seer
}

/// SEER → 팬 동력을 포함한 냉방 COP.
pub fn seer_to_cop_cooling_with_fan(seer: f64) -> f64 {
    let eer = -0.0182 * seer.powi(2) + 1.1088 * seer;
    (eer / BTU_PER_WH + FAN_POWER_FRACTION) / (1.0 - FAN_POWER_FRACTION)
}

/// 팬 제외 냉방 COP → SEER. `seer_to_cop_cooling_no_fan`의 역함수 (작은 근).
pub fn cop_to_seer(cop: f64) -> f64 {
    let a: f64 = 0.0076;
    let b: f64 = 0.3796;
    (b - (b.powi(2) - 4.0 * a * cop).sqrt()) / (2.0 * a)
}

/// HSPF → 팬 제외 난방 COP.
pub fn hspf_to_cop_heating_no_fan(hspf: f64) -> f64 {
    -0.0296 * hspf.powi(2) + 0.7134 * hspf
}

/// HSPF → 팬 포함 난방 COP.
pub fn hspf_to_cop_heating_with_fan(hspf: f64) -> f64 {
    -0.0255 * hspf.powi(2) + 0.6239 * hspf
}

/// 47°F 정격 난방 COP → 팬 제외 난방 COP. 용량은 W.
pub fn cop_heating_to_cop_heating_no_fan(coph47: f64, capacity_w: f64) -> f64 {
    let capacity_btu_per_hr = watt_to_btu_per_hour(capacity_w);
    1.48e-7 * coph47 * capacity_btu_per_hr + 1.062 * coph47
}

/// EER → COP.
///
/// 용량이 없으면 팬 동력 비율로 보정한 PNNL 식, 있으면 용량 회귀식을 쓴다.
pub fn eer_to_cop(eer: f64, capacity_w: Option<f64>) -> f64 {
    match capacity_w {
        None => (eer / BTU_PER_WH + FAN_POWER_FRACTION) / (1.0 - FAN_POWER_FRACTION),
        Some(cap) => {
            let capacity_btu_per_hr = watt_to_btu_per_hour(cap);
            7.84e-8 * eer * capacity_btu_per_hr + 0.338 * eer
        }
    }
}

/// COP → EER. `eer_to_cop`의 역함수.
pub fn cop_to_eer(cop: f64, capacity_w: Option<f64>) -> f64 {
    match capacity_w {
        None => BTU_PER_WH * (cop * (1.0 - FAN_POWER_FRACTION) - FAN_POWER_FRACTION),
        Some(cap) => {
            let capacity_btu_per_hr = watt_to_btu_per_hour(cap);
            cop / (7.84e-8 * capacity_btu_per_hr + 0.338)
        }
    }
}

/// kW/ton → COP.
pub fn kw_per_ton_to_cop(kw_per_ton: f64) -> f64 {
    3.517 / kw_per_ton
}

/// COP → kW/ton.
pub fn cop_to_kw_per_ton(cop: f64) -> f64 {
    3.517 / cop
}

/// AFUE → 열효율. 단순화를 위해 같은 값으로 본다.
pub fn afue_to_thermal_eff(afue: f64) -> f64 {
    afue
}

pub fn thermal_eff_to_afue(thermal_eff: f64) -> f64 {
    thermal_eff
}

/// 연소효율 → 열효율 (외피 손실 0.7%p 차감).
pub fn combustion_eff_to_thermal_eff(combustion_eff: f64) -> f64 {
    combustion_eff - 0.007
}

pub fn thermal_eff_to_combustion_eff(thermal_eff: f64) -> f64 {
    thermal_eff + 0.007
}
