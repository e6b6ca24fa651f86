//! 설비 규칙. 기준표 조회 결과를 모델 객체에 넣을 값으로 계산한다.
//!
//! 시뮬레이션 엔진의 객체 대신 엔진이 노출하는 속성만 담은 입력 구조체를 받는다.

use thiserror::Error;

pub mod air_loop;
pub mod air_terminal;
pub mod boiler;
pub mod chiller;
pub mod cooling_tower;
pub mod dx_coil;
pub mod fan;
pub mod motor;
pub mod pump;
pub mod water_heater;

/// 직접 입력값(hard-sized)과 자동 계산값(autosized)을 함께 가진 속성.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizedValue {
    pub hard_sized: Option<f64>,
    pub autosized: Option<f64>,
}

impl SizedValue {
    pub fn hard(value: f64) -> Self {
        Self {
            hard_sized: Some(value),
            autosized: None,
        }
    }

    pub fn autosized(value: f64) -> Self {
        Self {
            hard_sized: None,
            autosized: Some(value),
        }
    }

    /// 직접 입력값을 먼저 본다.
    pub fn hard_then_auto(&self) -> Option<f64> {
        self.hard_sized.or(self.autosized)
    }

    /// 자동 계산값을 먼저 본다.
    pub fn auto_then_hard(&self) -> Option<f64> {
        self.autosized.or(self.hard_sized)
    }
}

/// 설비 규칙 적용 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    /// 필요한 입력 속성이 없음
    #[error("{component}: {property} 값이 없어 기준을 적용할 수 없음")]
    MissingInput {
        component: String,
        property: &'static str,
    },
    /// 기준표에서 일치하는 레코드를 찾지 못함
    #[error("{component}: {table} 테이블에서 {criteria} 조건의 레코드를 찾을 수 없음")]
    NotFound {
        component: String,
        table: String,
        criteria: String,
    },
    /// 지원하지 않는 옵션
    #[error("{component}: 지원하지 않음: {detail}")]
    Unsupported { component: String, detail: String },
    /// 계산 결과가 물리적으로 유효하지 않음
    #[error("{component}: 계산 불가: {detail}")]
    Invalid { component: String, detail: String },
}

pub(crate) fn missing_input(target: &str, component: &str, property: &'static str) -> ApplyError {
    log::warn!(target: target, "{component}: {property} 값이 없어 기준을 적용할 수 없음");
    ApplyError::MissingInput {
        component: component.to_string(),
        property,
    }
}

pub(crate) fn not_found(
    target: &str,
    component: &str,
    table: &str,
    criteria: &crate::standards::SearchCriteria,
) -> ApplyError {
    log::warn!(target: target, "{component}: {table} 테이블에서 {criteria} 조건의 레코드를 찾을 수 없음");
    ApplyError::NotFound {
        component: component.to_string(),
        table: table.to_string(),
        criteria: criteria.to_string(),
    }
}

/// 소수 `digits`자리 반올림.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
