//! 전동기 최소 효율과 정격 마력 선정.

use crate::standards::{max_value, SearchCriteria, StandardsData};

pub const MOTORS_TABLE: &str = "motors";
/// 조회 실패 시 쓰는 효율
pub const DEFAULT_MOTOR_EFFICIENCY: f64 = 0.85;
/// 기준표의 "상한 없음" 표시값
pub(crate) const OPEN_ENDED_HP: f64 = 9999.0;

const LOG_TARGET: &str = "standards::motor";

/// 선정된 전동기.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorSelection {
    /// 정격 전부하 효율 (0~1)
    pub efficiency: f64,
    /// 명판 마력 (hp)
    pub nominal_hp: f64,
    /// 기준표에서 찾았는지 여부. false면 기본값이 쓰였다.
    pub from_table: bool,
}

/// 4극 밀폐형 전동기 조회 조건.
pub fn motor_criteria(template: &str) -> SearchCriteria {
    SearchCriteria::new()
        .with("template", template)
        .with("number_of_poles", 4.0)
        .with("type", "Enclosed")
}

/// 축동력(bhp)에 맞는 전동기 명판 마력과 최소 효율을 구한다.
///
/// 명판 마력은 bhp가 속한 구간의 상한이다. 효율은 명판 마력 바로 위 구간
/// (구간 하한 = 명판 마력) 레코드의 `nominal_full_load_efficiency`를 쓴다.
pub fn minimum_motor_efficiency_and_size(
    data: &StandardsData,
    template: &str,
    bhp: f64,
) -> MotorSelection {
    if bhp == 0.0 {
        return MotorSelection {
            efficiency: DEFAULT_MOTOR_EFFICIENCY,
            nominal_hp: 0.0,
            from_table: false,
        };
    }

    let criteria = motor_criteria(template);
    let Some(record) = data.find(MOTORS_TABLE, &criteria, Some(bhp)) else {
        log::error!(
            target: LOG_TARGET,
            "전동기 조회 실패: {criteria}, bhp = {bhp} hp. 기본 효율 {DEFAULT_MOTOR_EFFICIENCY} 사용"
        );
        return MotorSelection {
            efficiency: DEFAULT_MOTOR_EFFICIENCY,
            nominal_hp: bhp,
            from_table: false,
        };
    };

    let mut nominal_hp = record
        .number("maximum_capacity")
        .map_or(bhp, |max| super::round_to(max, 1));
    if nominal_hp == OPEN_ENDED_HP {
        log::warn!(
            target: LOG_TARGET,
            "bhp = {bhp} hp보다 큰 명판 마력이 없어 최대 구간 효율을 사용함"
        );
        nominal_hp = bhp;
    }
    if nominal_hp >= 2.0 {
        nominal_hp = nominal_hp.round();
    }

    let fallback = record
        .number("nominal_full_load_efficiency")
        .unwrap_or(DEFAULT_MOTOR_EFFICIENCY);
    match nominal_motor_efficiency(data, template, nominal_hp) {
        Some(efficiency) => MotorSelection {
            efficiency,
            nominal_hp,
            from_table: true,
        },
        None => {
            log::error!(
                target: LOG_TARGET,
                "명판 마력 {nominal_hp} hp 전동기 조회 실패: {criteria}"
            );
            MotorSelection {
                efficiency: fallback,
                nominal_hp,
                from_table: true,
            }
        }
    }
}

/// 명판 마력으로 전동기 효율을 찾는다.
pub fn nominal_motor_efficiency(data: &StandardsData, template: &str, nominal_hp: f64) -> Option<f64> {
    let criteria = motor_criteria(template);
    data.find(MOTORS_TABLE, &criteria, Some(nominal_hp + 0.01))
        .and_then(|r| r.number("nominal_full_load_efficiency"))
}

/// 기준표에 있는 가장 큰 전동기 구간 상한 (상한 없음 표시값 제외).
pub fn largest_motor_hp(data: &StandardsData, template: &str) -> Option<f64> {
    let criteria = motor_criteria(template);
    let records = data.find_all(MOTORS_TABLE, &criteria, None);
    max_value(
        records
            .into_iter()
            .filter(|r| r.number("maximum_capacity") != Some(OPEN_ENDED_HP)),
        "maximum_capacity",
    )
}
