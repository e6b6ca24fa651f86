//! 조건 일치 + 용량 구간(bracket) 조회.
//!
//! 레코드는 조건 필드가 모두 정확히 일치해야 후보가 된다. 후보가 둘 이상이고
//! 구간 값이 주어지면 `minimum_capacity <= v <= maximum_capacity`인 레코드를 고른다.
//! 경계값에서 두 레코드가 겹치면 `v < maximum_capacity`인 쪽(반열린 구간)을 택한다.

use serde::{Deserialize, Serialize};

use super::criteria::SearchCriteria;
use super::record::ReferenceRecord;
use super::value::FieldValue;

pub const MINIMUM_CAPACITY: &str = "minimum_capacity";
pub const MAXIMUM_CAPACITY: &str = "maximum_capacity";
pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";

/// 어떤 구간에도 속하지 않는 값을 처리하는 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketPolicy {
    /// 찾지 못함으로 처리한다.
    #[default]
    NotFound,
    /// 경계가 가장 가까운 레코드를 고른다. 같으면 앞선 레코드.
    Nearest,
}

/// 조회 옵션.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupOptions {
    pub bracket_policy: BracketPolicy,
    /// 레코드 값이 이 문자열이면 어떤 조건 값과도 일치로 본다 (예: `"Any"`).
    pub wildcard: Option<String>,
    /// `YYYY-MM-DD`. 지정되면 `start_date < date <= end_date`인 레코드만 남긴다.
    pub date: Option<String>,
}

impl LookupOptions {
    pub fn with_policy(mut self, policy: BracketPolicy) -> Self {
        self.bracket_policy = policy;
        self
    }

    pub fn with_wildcard(mut self, wildcard: &str) -> Self {
        self.wildcard = Some(wildcard.to_string());
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }
}

/// 기본 옵션으로 레코드 하나를 찾는다.
pub fn find_record<'a>(
    table: &'a [ReferenceRecord],
    criteria: &SearchCriteria,
    bracket_value: Option<f64>,
) -> Option<&'a ReferenceRecord> {
    find_record_with(table, criteria, bracket_value, &LookupOptions::default())
}

/// 레코드 하나를 찾는다. 여러 개가 남으면 테이블 순서상 첫 레코드를 돌려주고 경고를 남긴다.
pub fn find_record_with<'a>(
    table: &'a [ReferenceRecord],
    criteria: &SearchCriteria,
    bracket_value: Option<f64>,
    options: &LookupOptions,
) -> Option<&'a ReferenceRecord> {
    let filtered = filter(table, criteria, options);
    if filtered.is_empty() {
        log::debug!(target: "standards::lookup", "조건 일치 레코드 없음: {criteria}");
        return None;
    }

    let candidates = match bracket_value {
        Some(v) if filtered.len() > 1 => {
            let bracketed = bracket(&filtered, v);
            if bracketed.is_empty() {
                return match options.bracket_policy {
                    BracketPolicy::NotFound => {
                        log::debug!(
                            target: "standards::lookup",
                            "구간 밖 값 {v}: {criteria}"
                        );
                        None
                    }
                    BracketPolicy::Nearest => nearest(&filtered, v),
                };
            }
            prefer_half_open(bracketed, v)
        }
        _ => filtered,
    };

    if candidates.len() > 1 {
        log::warn!(
            target: "standards::lookup",
            "조건 {criteria}에 {}개 레코드가 일치하여 첫 번째를 사용함",
            candidates.len()
        );
    }
    candidates.first().copied()
}

/// 조건과 구간을 모두 만족하는 레코드를 전부 돌려준다.
///
/// 구간 필터는 조건 일치 후보가 둘 이상일 때만 적용한다. 경계 중복은 정리하지 않는다.
pub fn find_records<'a>(
    table: &'a [ReferenceRecord],
    criteria: &SearchCriteria,
    bracket_value: Option<f64>,
    options: &LookupOptions,
) -> Vec<&'a ReferenceRecord> {
    let filtered = filter(table, criteria, options);
    match bracket_value {
        Some(v) if filtered.len() > 1 => bracket(&filtered, v),
        _ => filtered,
    }
}

/// 레코드들에서 숫자 필드의 최댓값을 구한다.
pub fn max_value<'a>(
    records: impl IntoIterator<Item = &'a ReferenceRecord>,
    field: &str,
) -> Option<f64> {
    records
        .into_iter()
        .filter_map(|r| r.number(field))
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

fn filter<'a>(
    table: &'a [ReferenceRecord],
    criteria: &SearchCriteria,
    options: &LookupOptions,
) -> Vec<&'a ReferenceRecord> {
    table
        .iter()
        .filter(|r| matches_criteria(r, criteria, options.wildcard.as_deref()))
        .filter(|r| match options.date.as_deref() {
            Some(date) => within_dates(r, date),
            None => true,
        })
        .collect()
}

fn matches_criteria(
    record: &ReferenceRecord,
    criteria: &SearchCriteria,
    wildcard: Option<&str>,
) -> bool {
    criteria.iter().all(|(key, wanted)| match record.get(key) {
        Some(actual) => {
            actual == wanted
                || matches!((actual, wildcard), (FieldValue::Text(s), Some(w)) if s == w)
        }
        None => false,
    })
}

fn within_dates(record: &ReferenceRecord, date: &str) -> bool {
    let after_start = record.text(START_DATE).map_or(true, |start| start < date);
    let before_end = record.text(END_DATE).map_or(true, |end| date <= end);
    after_start && before_end
}

fn bracket<'a>(records: &[&'a ReferenceRecord], v: f64) -> Vec<&'a ReferenceRecord> {
    records
        .iter()
        .copied()
        .filter(|r| {
            let min = r.number(MINIMUM_CAPACITY).unwrap_or(0.0);
            let max_ok = r.number(MAXIMUM_CAPACITY).map_or(true, |max| v <= max);
            min <= v && max_ok
        })
        .collect()
}

// 경계값 v가 앞 구간의 max이자 뒤 구간의 min이면 뒤 구간만 남긴다.
fn prefer_half_open(records: Vec<&ReferenceRecord>, v: f64) -> Vec<&ReferenceRecord> {
    if records.len() < 2 {
        return records;
    }
    let open: Vec<&ReferenceRecord> = records
        .iter()
        .copied()
        .filter(|r| r.number(MAXIMUM_CAPACITY).map_or(true, |max| v < max))
        .collect();
    if open.is_empty() {
        records
    } else {
        open
    }
}

fn nearest<'a>(records: &[&'a ReferenceRecord], v: f64) -> Option<&'a ReferenceRecord> {
    let mut best: Option<(&'a ReferenceRecord, f64)> = None;
    for &record in records {
        let min = record.number(MINIMUM_CAPACITY).unwrap_or(0.0);
        let distance = if v < min {
            min - v
        } else {
            match record.number(MAXIMUM_CAPACITY) {
                Some(max) if v > max => v - max,
                _ => 0.0,
            }
        };
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((record, distance));
        }
    }
    if let Some((record, distance)) = best {
        log::warn!(
            target: "standards::lookup",
            "값 {v}이(가) 모든 구간 밖이라 가장 가까운 레코드({})를 사용함 (거리 {distance})",
            record.name().unwrap_or("이름 없음")
        );
    }
    best.map(|(record, _)| record)
}
