use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::criteria::SearchCriteria;
use super::lookup::{find_record_with, find_records, LookupOptions};
use super::record::ReferenceRecord;

/// 데이터셋 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// 파일 입출력 오류
    #[error("데이터 파일 입출력 오류 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON 파싱 오류
    #[error("JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 최상위 구조가 `{ "테이블": [...] }` 형태가 아님
    #[error("테이블 구조 오류: {0}")]
    Layout(String),
}

/// 이름별 기준 테이블 묶음. 로드 후에는 변경하지 않는다.
#[derive(Debug, Clone, Default)]
pub struct StandardsData {
    tables: BTreeMap<String, Vec<ReferenceRecord>>,
    options: LookupOptions,
}

impl StandardsData {
    /// 이미 만들어진 테이블들로 데이터셋을 구성한다.
    pub fn from_tables<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<ReferenceRecord>)>,
        S: Into<String>,
    {
        let mut data = Self::default();
        for (name, records) in tables {
            data.merge_table(name.into(), records);
        }
        data
    }

    /// JSON 문자열 하나를 읽는다.
    ///
    /// `{"motors": [...]}`와 `{"motors": {"table": [...]}}` 두 형태를 모두 받는다.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let mut data = Self::default();
        data.merge_json_str(json)?;
        Ok(data)
    }

    /// 파일 하나 또는 `*.json` 파일이 든 디렉터리를 읽는다. 디렉터리는 파일 이름 순으로 합친다.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let mut data = Self::default();
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|source| DatasetError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                let p = entry.path();
                if p.extension().is_some_and(|ext| ext == "json") {
                    files.push(p);
                }
            }
            files.sort();
            for file in files {
                data.merge_file(&file)?;
            }
        } else {
            data.merge_file(path)?;
        }
        log::info!(
            target: "standards::dataset",
            "{}에서 테이블 {}개 로드",
            path.display(),
            data.len()
        );
        Ok(data)
    }

    /// 이후 `find`/`find_all`에 쓰일 조회 옵션을 지정한다.
    pub fn with_options(mut self, options: LookupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    pub fn table(&self, name: &str) -> Option<&[ReferenceRecord]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// 테이블 개수.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 이름으로 테이블을 찾아 레코드 하나를 조회한다. 테이블이 없으면 경고 후 `None`.
    pub fn find(
        &self,
        table: &str,
        criteria: &SearchCriteria,
        bracket_value: Option<f64>,
    ) -> Option<&ReferenceRecord> {
        let Some(records) = self.table(table) else {
            log::warn!(target: "standards::dataset", "테이블 없음: {table}");
            return None;
        };
        find_record_with(records, criteria, bracket_value, &self.options)
    }

    /// 이름으로 테이블을 찾아 일치하는 레코드를 모두 돌려준다.
    pub fn find_all(
        &self,
        table: &str,
        criteria: &SearchCriteria,
        bracket_value: Option<f64>,
    ) -> Vec<&ReferenceRecord> {
        match self.table(table) {
            Some(records) => find_records(records, criteria, bracket_value, &self.options),
            None => {
                log::warn!(target: "standards::dataset", "테이블 없음: {table}");
                Vec::new()
            }
        }
    }

    fn merge_file(&mut self, path: &Path) -> Result<(), DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(target: "standards::dataset", "읽는 중: {}", path.display());
        self.merge_json_str(&content)
    }

    fn merge_json_str(&mut self, json: &str) -> Result<(), DatasetError> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(map) = root else {
            return Err(DatasetError::Layout(
                "최상위 값이 객체가 아님".to_string(),
            ));
        };
        for (name, value) in map {
            let rows = match value {
                Value::Array(rows) => rows,
                Value::Object(mut inner) => match inner.remove("table") {
                    Some(Value::Array(rows)) => rows,
                    _ => {
                        return Err(DatasetError::Layout(format!(
                            "{name}: 객체 형태 테이블에는 \"table\" 배열이 필요함"
                        )))
                    }
                },
                _ => {
                    return Err(DatasetError::Layout(format!(
                        "{name}: 테이블은 배열이어야 함"
                    )))
                }
            };
            let mut records = Vec::with_capacity(rows.len());
            for row in rows {
                if !row.is_object() {
                    return Err(DatasetError::Layout(format!(
                        "{name}: 레코드는 객체여야 함"
                    )));
                }
                records.push(serde_json::from_value::<ReferenceRecord>(row)?);
            }
            self.merge_table(name, records);
        }
        Ok(())
    }

    fn merge_table(&mut self, name: String, records: Vec<ReferenceRecord>) {
        let table = self.tables.entry(name).or_default();
        table.extend(records);
    }
}
