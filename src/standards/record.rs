use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::FieldValue;

/// 기준 테이블의 한 행. 필드 이름 → 값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ReferenceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드를 추가한 레코드를 돌려준다. 테스트와 조립 코드에서 쓴다.
    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// 숫자 필드. 없거나 null이거나 숫자가 아니면 `None`.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_f64)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_str)
    }

    /// 레코드의 `name` 필드. 로그 출력용.
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for ReferenceRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
