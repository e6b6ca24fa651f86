//! 온수 보일러 최소 효율.

use crate::efficiency::{afue_to_thermal_eff, combustion_eff_to_thermal_eff};
use crate::standards::{find_curve, Curve, ReferenceRecord, SearchCriteria, StandardsData};
use crate::units::power::{watt_to_btu_per_hour, watt_to_kbtu_per_hour};

use super::{missing_input, not_found, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::boiler";
pub const BOILERS_TABLE: &str = "boilers";

/// 보일러 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct Boiler {
    pub name: String,
    /// 엔진 연료 이름 (`NaturalGas`, `Electricity`, `FuelOilNo2` 등)
    pub fuel_type: String,
    /// 정격 용량 (W)
    pub nominal_capacity: SizedValue,
    pub nominal_thermal_efficiency: f64,
    /// 부분부하 효율 곡선
    pub efficiency_curve: Option<Curve>,
}

/// 기준표 효율 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoilerEfficiencyBasis {
    Afue(f64),
    Thermal(f64),
    Combustion(f64),
}

/// 보일러 효율 조회 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct BoilerEfficiencyResult {
    pub thermal_efficiency: f64,
    pub basis: BoilerEfficiencyBasis,
    /// 용량과 효율을 붙인 새 이름
    pub new_name: String,
    pub capacity_kbtu_per_hr: f64,
}

/// 엔진 연료 이름 → 기준표 연료 구분. 모르는 연료는 경고 후 Gas.
pub fn standards_fuel_type(component: &str, fuel_type: &str) -> &'static str {
    match fuel_type {
        "NaturalGas" => "Gas",
        "Electricity" => "Electric",
        "FuelOilNo1" | "FuelOilNo2" | "FuelOil#1" | "FuelOil#2" => "Oil",
        other => {
            log::warn!(
                target: LOG_TARGET,
                "{component}: 연료 {other}는 지원하지 않아 Gas로 가정함"
            );
            "Gas"
        }
    }
}

pub fn search_criteria(template: &str, boiler: &Boiler) -> SearchCriteria {
    SearchCriteria::new()
        .with("template", template)
        .with("fuel_type", standards_fuel_type(&boiler.name, &boiler.fuel_type))
        .with("fluid_type", "Hot Water")
}

fn capacity_w(boiler: &Boiler) -> Result<f64, ApplyError> {
    boiler
        .nominal_capacity
        .hard_then_auto()
        .ok_or_else(|| missing_input(LOG_TARGET, &boiler.name, "nominal_capacity"))
}

fn find_properties<'a>(
    data: &'a StandardsData,
    template: &str,
    boiler: &Boiler,
) -> Result<(&'a ReferenceRecord, f64), ApplyError> {
    let capacity = capacity_w(boiler)?;
    let criteria = search_criteria(template, boiler);
    let record = data
        .find(BOILERS_TABLE, &criteria, Some(watt_to_btu_per_hour(capacity)))
        .ok_or_else(|| not_found(LOG_TARGET, &boiler.name, BOILERS_TABLE, &criteria))?;
    Ok((record, capacity))
}

// AFUE, 열효율, 연소효율 순으로 보고 뒤에 있는 항목이 우선한다.
fn efficiency_from_record(
    record: &ReferenceRecord,
    boiler: &Boiler,
    capacity_kbtu: f64,
) -> Option<BoilerEfficiencyResult> {
    let mut result = None;
    if let Some(afue) = record.number("minimum_annual_fuel_utilization_efficiency") {
        result = Some(BoilerEfficiencyResult {
            thermal_efficiency: afue_to_thermal_eff(afue),
            basis: BoilerEfficiencyBasis::Afue(afue),
            new_name: format!("{} {:.0}kBtu/hr {afue} AFUE", boiler.name, capacity_kbtu),
            capacity_kbtu_per_hr: capacity_kbtu,
        });
    }
    if let Some(et) = record.number("minimum_thermal_efficiency") {
        result = Some(BoilerEfficiencyResult {
            thermal_efficiency: et,
            basis: BoilerEfficiencyBasis::Thermal(et),
            new_name: format!("{} {:.0}kBtu/hr {et} Thermal Eff", boiler.name, capacity_kbtu),
            capacity_kbtu_per_hr: capacity_kbtu,
        });
    }
    if let Some(ec) = record.number("minimum_combustion_efficiency") {
        result = Some(BoilerEfficiencyResult {
            thermal_efficiency: combustion_eff_to_thermal_eff(ec),
            basis: BoilerEfficiencyBasis::Combustion(ec),
            new_name: format!("{} {:.0}kBtu/hr {ec} Combustion Eff", boiler.name, capacity_kbtu),
            capacity_kbtu_per_hr: capacity_kbtu,
        });
    }
    result
}

/// 용량 구간에 맞는 최소 열효율을 구한다. 보일러는 바꾸지 않는다.
pub fn standard_minimum_thermal_efficiency(
    data: &StandardsData,
    template: &str,
    boiler: &Boiler,
) -> Result<BoilerEfficiencyResult, ApplyError> {
    let (record, capacity) = find_properties(data, template, boiler)?;
    let capacity_kbtu = watt_to_kbtu_per_hour(capacity);
    let result = efficiency_from_record(record, boiler, capacity_kbtu).ok_or_else(|| {
        log::warn!(target: LOG_TARGET, "{}: 기준 레코드에 효율 항목이 없음", boiler.name);
        ApplyError::Invalid {
            component: boiler.name.clone(),
            detail: "효율 항목 없음".to_string(),
        }
    })?;
    log::info!(
        target: LOG_TARGET,
        "For {template}: {}: {} Hot Water Capacity = {:.0}kBtu/hr; {:?}",
        boiler.name,
        record.text("fuel_type").unwrap_or("-"),
        capacity_kbtu,
        result.basis
    );
    Ok(result)
}

/// 최소 효율과 부분부하 효율 곡선을 적용하고 이름을 바꾼다.
pub fn apply_efficiency_and_curves(
    data: &StandardsData,
    template: &str,
    boiler: &mut Boiler,
) -> Result<BoilerEfficiencyResult, ApplyError> {
    let (record, _) = find_properties(data, template, boiler)?;
    if let Some(curve_name) = record.text("efffplr") {
        match find_curve(data, curve_name) {
            Some(curve) => boiler.efficiency_curve = Some(curve),
            None => log::warn!(
                target: LOG_TARGET,
                "{}: 효율 곡선 {curve_name}을(를) 찾을 수 없어 설정하지 않음",
                boiler.name
            ),
        }
    }
    let result = standard_minimum_thermal_efficiency(data, template, boiler)?;
    boiler.name = result.new_name.clone();
    boiler.nominal_thermal_efficiency = result.thermal_efficiency;
    Ok(result)
}
