//! 시트별 CSV 내보내기 → 테이블별 JSON 데이터 파일 변환.
//!
//! 각 CSV는 스프레드시트 한 장이다. 1~2행은 설명, 3행이 헤더, 4행부터 데이터이다.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use super::record::ReferenceRecord;
use super::value::FieldValue;

const HEADER_ROW: usize = 2;

/// 변환하지 않는 시트.
pub const SKIPPED_SHEETS: [&str; 5] = [
    "ventilation",
    "occupancy",
    "interior_lighting",
    "lookups",
    "sheetmap",
];

/// 결과에 넣지 않는 열.
pub const SKIPPED_COLUMNS: [&str; 9] = [
    "lookup",
    "lookupcolumn",
    "vlookupcolumn",
    "osm_lighting_per_person",
    "osm_lighting_per_area",
    "lighting_per_length",
    "exhaust_per_area",
    "exhaust_per_unit",
    "exhaust_fan_power_per_area",
];

/// 내보내기 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("입출력 오류 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV 읽기 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON 쓰기 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 헤더 행(3행)이 없음
    #[error("{0}: 헤더 행이 없음")]
    MissingHeader(String),
}

/// 시트 하나의 변환 결과.
#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub sheet: String,
    pub rows: usize,
    pub output: PathBuf,
}

/// `"Minimum Capacity (Btu/hr)"` → `"minimum_capacity"`.
pub fn field_name(header: &str) -> String {
    let mut stripped = String::with_capacity(header.len());
    let mut depth = 0usize;
    for ch in header.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => stripped.push(ch),
            _ => {}
        }
    }
    let mut out = String::with_capacity(stripped.len());
    let mut pending_sep = false;
    for ch in stripped.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// 시트 하나를 레코드 목록으로 바꾼다. 건너뛰는 시트면 `None`.
pub fn export_sheet<R: Read>(
    sheet: &str,
    reader: R,
) -> Result<Option<Vec<ReferenceRecord>>, ExportError> {
    if SKIPPED_SHEETS.contains(&sheet) {
        log::info!(target: "standards::export", "{sheet}: 건너뜀");
        return Ok(None);
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = csv_reader.records();

    let header = rows
        .nth(HEADER_ROW)
        .ok_or_else(|| ExportError::MissingHeader(sheet.to_string()))??;
    let columns: Vec<String> = header
        .iter()
        .take_while(|cell| !cell.trim().is_empty())
        .map(field_name)
        .collect();

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        if row.iter().take(columns.len()).all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut record = ReferenceRecord::new();
        for (column, cell) in columns.iter().zip(row.iter().chain(std::iter::repeat(""))) {
            if SKIPPED_COLUMNS.contains(&column.as_str()) {
                continue;
            }
            record.insert(column, cell_value(column, cell));
        }
        records.push(reshape(sheet, record));
    }

    sort_records(sheet, &mut records);
    log::debug!(target: "standards::export", "{sheet}: {}행", records.len());
    Ok(Some(records))
}

/// 디렉터리의 `*.csv`를 모두 변환해 `standards_<sheet>.json`으로 쓴다.
pub fn export_directory(input: &Path, output: &Path) -> Result<Vec<SheetSummary>, ExportError> {
    fs::create_dir_all(output).map_err(io_err(output))?;
    let mut files = Vec::new();
    for entry in fs::read_dir(input).map_err(io_err(input))? {
        let path = entry.map_err(io_err(input))?.path();
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
            files.push(path);
        }
    }
    files.sort();

    let mut summaries = Vec::new();
    for file in files {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let sheet = field_name(stem);
        let reader = fs::File::open(&file).map_err(io_err(&file))?;
        let Some(records) = export_sheet(&sheet, reader)? else {
            continue;
        };

        let mut root = Map::new();
        root.insert(sheet.clone(), serde_json::to_value(&records)?);
        let text = serde_json::to_string_pretty(&Value::Object(root))?;
        let out_path = output.join(format!("standards_{sheet}.json"));
        fs::write(&out_path, text).map_err(io_err(&out_path))?;
        log::info!(
            target: "standards::export",
            "{sheet}: {}행 → {}",
            records.len(),
            out_path.display()
        );
        summaries.push(SheetSummary {
            sheet,
            rows: records.len(),
            output: out_path,
        });
    }
    Ok(summaries)
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError {
    let path = path.to_path_buf();
    move |source| ExportError::Io { path, source }
}

fn cell_value(column: &str, cell: &str) -> FieldValue {
    let value = FieldValue::parse_loose(cell);
    if column == "hx" {
        return match value {
            FieldValue::Number(v) => FieldValue::Bool(v != 0.0),
            other => other,
        };
    }
    value
}

fn reshape(sheet: &str, record: ReferenceRecord) -> ReferenceRecord {
    match sheet {
        "climate_zone_sets" => collect_list(record, "climate_zones", |key| key != "name"),
        "constructions" => collect_list(record, "materials", |key| key.contains("material")),
        "schedules" => collect_list(record, "values", |key| key.contains("hr")),
        _ => record,
    }
}

// 조건에 맞는 열의 null 아닌 값을 열 순서대로 한 리스트로 모은다.
fn collect_list(
    record: ReferenceRecord,
    list_field: &str,
    belongs: impl Fn(&str) -> bool,
) -> ReferenceRecord {
    let mut kept = ReferenceRecord::new();
    let mut items: Vec<(usize, FieldValue)> = Vec::new();
    for (key, value) in record.iter() {
        if belongs(key) {
            if !value.is_null() {
                items.push((trailing_number(key), value.clone()));
            }
        } else {
            kept.insert(key, value.clone());
        }
    }
    items.sort_by_key(|(n, _)| *n);
    kept.insert(
        list_field,
        FieldValue::List(items.into_iter().map(|(_, v)| v).collect()),
    );
    kept
}

// 키 정렬이 사전순이라 "hr_10"이 "hr_2"보다 앞서므로 끝 번호로 다시 정렬한다.
fn trailing_number(key: &str) -> usize {
    let digits: String = key
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    digits.parse().unwrap_or(0)
}

fn sort_records(sheet: &str, records: &mut [ReferenceRecord]) {
    if sheet == "space_types" {
        let key = |r: &ReferenceRecord| {
            ["template", "climate_zone_set", "building_type", "space_type"]
                .map(|f| r.text(f).unwrap_or("").to_string())
        };
        records.sort_by_key(key);
    } else if records.iter().any(|r| r.name().is_some()) {
        records.sort_by(|a, b| a.name().unwrap_or("").cmp(b.name().unwrap_or("")));
    }
}
