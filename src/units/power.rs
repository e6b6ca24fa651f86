use serde::{Deserialize, Serialize};

/// 동력/열량률 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    BtuPerHour,
    KiloBtuPerHour,
    /// 냉동톤 (12,000 Btu/h)
    Ton,
    /// 기계 마력 (745.7 W)
    Horsepower,
}

pub const W_PER_BTU_PER_HOUR: f64 = 0.293_071_07;
pub const W_PER_TON: f64 = 3_516.852_842;
pub const W_PER_HP: f64 = 745.699_872;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::BtuPerHour => value * W_PER_BTU_PER_HOUR,
        PowerUnit::KiloBtuPerHour => value * W_PER_BTU_PER_HOUR * 1000.0,
        PowerUnit::Ton => value * W_PER_TON,
        PowerUnit::Horsepower => value * W_PER_HP,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / 1000.0,
        PowerUnit::BtuPerHour => value_w / W_PER_BTU_PER_HOUR,
        PowerUnit::KiloBtuPerHour => value_w / W_PER_BTU_PER_HOUR / 1000.0,
        PowerUnit::Ton => value_w / W_PER_TON,
        PowerUnit::Horsepower => value_w / W_PER_HP,
    }
}

/// 동력을 다른 단위로 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}

/// W → Btu/h 단축 함수. 용량 기반 조회에서 가장 자주 쓰인다.
pub fn watt_to_btu_per_hour(value_w: f64) -> f64 {
    convert_power(value_w, PowerUnit::Watt, PowerUnit::BtuPerHour)
}

/// W → kBtu/h
pub fn watt_to_kbtu_per_hour(value_w: f64) -> f64 {
    convert_power(value_w, PowerUnit::Watt, PowerUnit::KiloBtuPerHour)
}
