//! 전기 칠러 최소 전부하 효율과 성능 곡선 이름.

use crate::efficiency::{eer_to_cop, kw_per_ton_to_cop};
use crate::standards::{SearchCriteria, StandardsData};
use crate::units::{convert_power, PowerUnit};

use super::{missing_input, not_found, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::chiller";
pub const CHILLERS_TABLE: &str = "chillers";

/// 칠러 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct Chiller {
    /// 이름. 응축기/압축기 형식을 이름에서 추론한다.
    pub name: String,
    /// `AirCooled` 또는 `WaterCooled`
    pub condenser_type: String,
    /// 명시된 압축기 형식. 없으면 이름에서 찾는다.
    pub compressor_type: Option<String>,
    /// 기준 용량 (W)
    pub reference_capacity: SizedValue,
    pub reference_cop: f64,
}

/// 칠러 효율 적용 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ChillerEfficiencyResult {
    pub cop: f64,
    pub capacity_tons: f64,
    pub criteria: SearchCriteria,
    pub curves: ChillerCurveNames,
}

/// 용량/EIR 곡선 이름.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChillerCurveNames {
    pub cap_f_t: Option<String>,
    pub eir_f_t: Option<String>,
    pub eir_f_plr: Option<String>,
}

const COMPRESSOR_TYPES: [&str; 4] = ["Reciprocating", "Rotary Screw", "Scroll", "Centrifugal"];

/// 조회 조건: 냉각 방식, 응축기 유무 또는 압축기 형식, Path A.
pub fn search_criteria(template: &str, chiller: &Chiller) -> SearchCriteria {
    let mut criteria = SearchCriteria::new()
        .with("template", template)
        .with("cooling_type", chiller.condenser_type.as_str());
    match chiller.condenser_type.as_str() {
        "AirCooled" => {
            let condenser = if chiller.name.contains("WithoutCondenser") {
                "WithoutCondenser"
            } else {
                "WithCondenser"
            };
            criteria.insert("condenser_type", condenser);
        }
        "WaterCooled" => {
            let compressor = chiller.compressor_type.clone().or_else(|| {
                COMPRESSOR_TYPES
                    .iter()
                    .find(|t| chiller.name.contains(*t))
                    .map(|t| t.to_string())
            });
            if let Some(compressor) = compressor {
                criteria.insert("compressor_type", compressor);
            }
        }
        _ => {}
    }
    criteria.insert("compliance_path", "Path A");
    criteria
}

/// 냉각 방식/압축기 형식/용량에 따른 곡선 이름.
pub fn curve_names(cooling_type: &str, compressor_type: Option<&str>, tons: f64) -> ChillerCurveNames {
    match (cooling_type, compressor_type) {
        ("AirCooled", _) => ChillerCurveNames {
            cap_f_t: Some("AirCooled_Chiller_2010_PathA_CAPFT".to_string()),
            eir_f_t: Some("AirCooled_Chiller_2010_PathA_EIRFT".to_string()),
            eir_f_plr: Some("AirCooled_Chiller_AllCapacities_2004_2010_EIRFPLR".to_string()),
        },
        ("WaterCooled", Some("Centrifugal")) => {
            let size = if tons >= 150.0 { "GT150" } else { "LT150" };
            ChillerCurveNames {
                cap_f_t: Some(format!("WaterCooled_Centrifugal_Chiller_{size}_2004_CAPFT")),
                eir_f_t: Some(format!("WaterCooled_Centrifugal_Chiller_{size}_2004_EIRFT")),
                eir_f_plr: Some("ChlrWtrCentPathAAllEIRRatio_fQRatio".to_string()),
            }
        }
        ("WaterCooled", Some("Reciprocating" | "Rotary Screw" | "Scroll")) => ChillerCurveNames {
            cap_f_t: Some("ChlrWtrPosDispPathAAllQRatio_fTchwsTcwsSI".to_string()),
            eir_f_t: Some("ChlrWtrPosDispPathAAllEIRRatio_fTchwsTcwsSI".to_string()),
            eir_f_plr: Some("ChlrWtrCentPathAAllEIRRatio_fQRatio".to_string()),
        },
        _ => ChillerCurveNames::default(),
    }
}

/// 최소 전부하 COP. Path A로 못 찾으면 준수 경로 없이 다시 찾는다.
pub fn standard_minimum_full_load_efficiency(
    data: &StandardsData,
    template: &str,
    chiller: &Chiller,
) -> Result<ChillerEfficiencyResult, ApplyError> {
    let capacity_w = chiller
        .reference_capacity
        .hard_then_auto()
        .ok_or_else(|| missing_input(LOG_TARGET, &chiller.name, "reference_capacity"))?;
    let tons = convert_power(capacity_w, PowerUnit::Watt, PowerUnit::Ton);

    let mut criteria = search_criteria(template, chiller);
    let mut record = data.find(CHILLERS_TABLE, &criteria, Some(tons));
    if record.is_none() {
        criteria.remove("compliance_path");
        record = data.find(CHILLERS_TABLE, &criteria, Some(tons));
    }
    let record = record.ok_or_else(|| not_found(LOG_TARGET, &chiller.name, CHILLERS_TABLE, &criteria))?;

    let cop = if let Some(cop) = record.number("minimum_coefficient_of_performance") {
        cop
    } else if let Some(eer) = record.number("minimum_energy_efficiency_ratio") {
        eer_to_cop(eer, None)
    } else if let Some(kw_per_ton) = record.number("minimum_kilowatts_per_tons") {
        kw_per_ton_to_cop(kw_per_ton)
    } else {
        log::warn!(target: LOG_TARGET, "{}: 최소 전부하 효율 항목이 없음", chiller.name);
        return Err(ApplyError::Invalid {
            component: chiller.name.clone(),
            detail: "효율 항목 없음".to_string(),
        });
    };

    let compressor = criteria.get("compressor_type").and_then(|v| v.as_str());
    let curves = curve_names(&chiller.condenser_type, compressor, tons);
    Ok(ChillerEfficiencyResult {
        cop,
        capacity_tons: tons,
        criteria,
        curves,
    })
}

/// 최소 COP를 칠러에 적용한다.
pub fn apply_efficiency(
    data: &StandardsData,
    template: &str,
    chiller: &mut Chiller,
) -> Result<ChillerEfficiencyResult, ApplyError> {
    let result = standard_minimum_full_load_efficiency(data, template, chiller)?;
    chiller.reference_cop = result.cop;
    log::info!(
        target: LOG_TARGET,
        "For {}: {:.0} tons, COP = {:.3}, 조건 {}",
        chiller.name,
        result.capacity_tons,
        result.cop,
        result.criteria
    );
    Ok(result)
}
