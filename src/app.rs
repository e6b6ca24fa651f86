use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::envelope::{self, Construction, ConstructionError, IntendedSurfaceType};
use crate::hvac::boiler::{self, Boiler};
use crate::hvac::fan::{self, Fan, FanKind};
use crate::hvac::{motor, ApplyError, SizedValue};
use crate::standards::export::{self, ExportError};
use crate::standards::{BracketPolicy, DatasetError, SearchCriteria, StandardsData};
use crate::units::thermal_resistance::r_si_to_ip;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 기준 데이터 로드 오류
    #[error("기준 데이터 오류: {0}")]
    Dataset(#[from] DatasetError),
    /// 스프레드시트 내보내기 오류
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 설비 기준 적용 오류
    #[error("기준 적용 오류: {0}")]
    Apply(#[from] ApplyError),
    /// 구조체 조정 오류
    #[error("구조체 오류: {0}")]
    Construction(#[from] ConstructionError),
    /// 구조체 파일 파싱 오류
    #[error("구조체 파일 파싱 오류: {0}")]
    Toml(#[from] toml::de::Error),
    /// 결과 직렬화 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 잘못된 명령행 값
    #[error("잘못된 입력: {0}")]
    InvalidArgument(String),
    /// 조회 결과 없음
    #[error("{table} 테이블에서 {criteria} 조건의 레코드를 찾을 수 없음")]
    NotFound { table: String, criteria: String },
}

/// 설정과 명령행 인자에 따라 데이터 경로를 정한다. 명령행이 우선한다.
pub fn data_path(config: &Config, cli_data: Option<&Path>) -> PathBuf {
    cli_data
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.data_path.clone())
}

fn load_data(config: &Config, path: &Path) -> Result<StandardsData, AppError> {
    Ok(StandardsData::from_path(path)?.with_options(config.lookup.clone()))
}

/// 명령 하나를 실행하고 출력할 문자열을 돌려준다.
pub fn run(config: &Config, cli: Cli) -> Result<String, AppError> {
    let data_path = data_path(config, cli.data.as_deref());
    match cli.command {
        Command::Lookup {
            table,
            criteria,
            capacity,
            nearest,
            wildcard,
        } => {
            let mut options = config.lookup.clone();
            if nearest {
                options = options.with_policy(BracketPolicy::Nearest);
            }
            if let Some(w) = wildcard.as_deref() {
                options = options.with_wildcard(w);
            }
            let data = load_data(config, &data_path)?.with_options(options);
            let criteria = SearchCriteria::from_pairs(criteria.iter().map(String::as_str))
                .map_err(AppError::InvalidArgument)?;
            let record = data
                .find(&table, &criteria, capacity)
                .ok_or_else(|| AppError::NotFound {
                    table: table.clone(),
                    criteria: criteria.to_string(),
                })?;
            Ok(serde_json::to_string_pretty(record)?)
        }
        Command::Motor { bhp, template } => {
            let template = template.as_deref().unwrap_or(&config.template);
            let data = load_data(config, &data_path)?;
            let selection = motor::minimum_motor_efficiency_and_size(&data, template, bhp);
            Ok(format!(
                "축동력 {bhp} hp → 명판 {} hp, 전동기 효율 {:.1}%{}",
                selection.nominal_hp,
                selection.efficiency * 100.0,
                if selection.from_table { "" } else { " (기본값)" }
            ))
        }
        Command::Boiler {
            capacity_w,
            fuel,
            template,
        } => {
            let template = template.as_deref().unwrap_or(&config.template);
            let data = load_data(config, &data_path)?;
            let boiler = Boiler {
                name: "Boiler".to_string(),
                fuel_type: fuel,
                nominal_capacity: SizedValue::hard(capacity_w),
                nominal_thermal_efficiency: 0.8,
                efficiency_curve: None,
            };
            let result = boiler::standard_minimum_thermal_efficiency(&data, template, &boiler)?;
            Ok(format!(
                "{}: 열효율 {:.3} ({:?})",
                result.new_name, result.thermal_efficiency, result.basis
            ))
        }
        Command::Fan {
            flow_m3s,
            pressure_pa,
            kind,
            template,
        } => {
            let template = template.as_deref().unwrap_or(&config.template);
            let kind = FanKind::parse(&kind)
                .ok_or_else(|| AppError::InvalidArgument(format!("팬 종류 {kind}")))?;
            let data = load_data(config, &data_path)?;
            let mut f = Fan::new("Fan", kind, SizedValue::hard(flow_m3s), pressure_pa);
            let result = fan::apply_standard_efficiency(&data, template, &mut f)?;
            let mut out = String::new();
            let _ = writeln!(out, "풍량: {:.0} cfm", result.flow_cfm);
            let _ = writeln!(out, "허용 축동력: {:.2} hp", result.allowed_bhp);
            let _ = writeln!(out, "임펠러 효율: {:.1}%", result.impeller_efficiency * 100.0);
            let _ = writeln!(
                out,
                "전동기: {} hp, {:.1}%",
                result.motor.nominal_hp,
                result.motor.efficiency * 100.0
            );
            let _ = write!(out, "종합 효율: {:.1}%", result.total_efficiency * 100.0);
            Ok(out)
        }
        Command::Convert { value, from, to } => {
            let converted = conversion::convert_units(value, &from, &to)?;
            Ok(format!(
                "{value} {from} = {} {to} ({})",
                converted.value,
                converted.kind.name()
            ))
        }
        Command::UValue {
            target,
            layers,
            insulation,
            surface,
        } => {
            let surface = IntendedSurfaceType::parse(&surface)
                .ok_or_else(|| AppError::InvalidArgument(format!("표면 종류 {surface}")))?;
            let content = fs::read_to_string(&layers).map_err(|source| AppError::Io {
                path: layers.clone(),
                source,
            })?;
            let mut construction: Construction = toml::from_str(&content)?;
            let insulation_r_si =
                envelope::set_u_value(&mut construction, target, Some(&insulation), surface, true)?;
            let mut out = String::new();
            let _ = writeln!(out, "{}", construction.name);
            if let Some(r_si) = insulation_r_si {
                let _ = writeln!(out, "단열층 R: {:.3} m²·K/W (R-{:.2} IP)", r_si, r_si_to_ip(r_si));
            }
            let _ = write!(out, "U값: {:.4} W/m²·K", construction.u_value_si(surface));
            Ok(out)
        }
        Command::Export { input, output } => {
            let summaries = export::export_directory(&input, &output)?;
            let mut out = String::new();
            for s in &summaries {
                let _ = writeln!(out, "{}: {}행 → {}", s.sheet, s.rows, s.output.display());
            }
            let _ = write!(out, "시트 {}개 변환 완료", summaries.len());
            Ok(out)
        }
    }
}
