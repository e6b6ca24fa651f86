//! 직팽(DX) 냉방/난방 코일 최소 효율.

use crate::efficiency::{
    cop_heating_to_cop_heating_no_fan, eer_to_cop, hspf_to_cop_heating_no_fan,
    seer_to_cop_cooling_no_fan,
};
use crate::standards::{ReferenceRecord, SearchCriteria, StandardsData};
use crate::units::power::{watt_to_btu_per_hour, watt_to_kbtu_per_hour};
use crate::units::{convert_power, PowerUnit};

use super::{missing_input, not_found, ApplyError, SizedValue};

const LOG_TARGET: &str = "standards::dx_coil";
pub const UNITARY_ACS_TABLE: &str = "unitary_acs";
pub const HEAT_PUMPS_TABLE: &str = "heat_pumps";
pub const HEAT_PUMPS_HEATING_TABLE: &str = "heat_pumps_heating";

/// 패키지 터미널 설비 계수식의 용량 범위 (Btu/h)
const PACKAGED_TERMINAL_MIN_BTU_PER_HR: f64 = 7000.0;
const PACKAGED_TERMINAL_MAX_BTU_PER_HR: f64 = 15_000.0;

/// DX 코일 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct DxCoil {
    pub name: String,
    /// 정격 용량 (W)
    pub rated_capacity: SizedValue,
    /// `Air Cooled`, `Water Cooled` 등
    pub cooling_type: String,
    /// 보조 난방 구분 (`Electric Resistance or None`, `All Other`)
    pub heating_type: Option<String>,
    /// `Single Package`, `Split System` 등
    pub subcategory: Option<String>,
    pub heat_pump: bool,
    /// PTAC/PTHP
    pub packaged_terminal: bool,
    /// 정격 COP. 기준 적용 후 채워진다.
    pub rated_cop: Option<f64>,
}

impl DxCoil {
    pub fn new(name: &str, rated_capacity: SizedValue) -> Self {
        Self {
            name: name.to_string(),
            rated_capacity,
            cooling_type: "Air Cooled".to_string(),
            heating_type: None,
            subcategory: Some("Single Package".to_string()),
            heat_pump: false,
            packaged_terminal: false,
            rated_cop: None,
        }
    }

    fn capacity_w(&self) -> Result<f64, ApplyError> {
        self.rated_capacity
            .hard_then_auto()
            .ok_or_else(|| missing_input(LOG_TARGET, &self.name, "rated_capacity"))
    }

    fn packaged_terminal_type(&self) -> &'static str {
        if self.heat_pump {
            "PTHP"
        } else {
            "PTAC"
        }
    }
}

/// 효율 레코드에서 어떤 항목을 썼는지.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DxEfficiencyBasis {
    Seer(f64),
    Eer(f64),
    Hspf(f64),
    HeatingCop(f64),
}

impl DxEfficiencyBasis {
    fn suffix(self) -> String {
        match self {
            DxEfficiencyBasis::Seer(v) => format!("{v}SEER"),
            DxEfficiencyBasis::Eer(v) => format!("{v}EER"),
            DxEfficiencyBasis::Hspf(v) => format!("{v}HSPF"),
            DxEfficiencyBasis::HeatingCop(v) => format!("{v}COPH"),
        }
    }
}

/// DX 코일 효율 조회 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct DxCoilEfficiencyResult {
    /// 팬 동력을 뺀 COP
    pub cop: f64,
    pub basis: DxEfficiencyBasis,
    pub table: &'static str,
    pub capacity_btu_per_hr: f64,
    pub new_name: String,
}

/// 냉방 코일 조회 테이블. 히트펌프면 `heat_pumps`.
pub fn cooling_table(coil: &DxCoil) -> &'static str {
    if coil.heat_pump {
        HEAT_PUMPS_TABLE
    } else {
        UNITARY_ACS_TABLE
    }
}

/// 난방 코일 조회 테이블. 난방 전용 테이블이 없는 데이터셋은 `heat_pumps`를 쓴다.
pub fn heating_table(data: &StandardsData) -> &'static str {
    if data.table(HEAT_PUMPS_HEATING_TABLE).is_some() {
        HEAT_PUMPS_HEATING_TABLE
    } else {
        HEAT_PUMPS_TABLE
    }
}

/// 냉방 코일 검색 조건. 패키지 터미널 설비는 세부 구분 대신 설비 종류로 찾는다.
pub fn cooling_search_criteria(template: &str, coil: &DxCoil) -> SearchCriteria {
    let mut criteria = SearchCriteria::new()
        .with("template", template)
        .with("cooling_type", coil.cooling_type.as_str());
    if let Some(heating_type) = &coil.heating_type {
        criteria.insert("heating_type", heating_type.as_str());
    }
    if let Some(subcategory) = &coil.subcategory {
        criteria.insert("subcategory", subcategory.as_str());
    }
    if coil.packaged_terminal {
        criteria.insert("equipment_type", coil.packaged_terminal_type());
        criteria.remove("subcategory");
        if !template.starts_with("NECB") {
            criteria.remove("heating_type");
        }
    }
    criteria
}

/// 난방 코일 검색 조건.
pub fn heating_search_criteria(template: &str, coil: &DxCoil) -> SearchCriteria {
    let mut criteria = SearchCriteria::new().with("template", template);
    if coil.packaged_terminal {
        criteria.insert("equipment_type", coil.packaged_terminal_type());
    } else if let Some(subcategory) = &coil.subcategory {
        criteria.insert("subcategory", subcategory.as_str());
    }
    criteria
}

fn clamp_packaged_terminal_capacity(component: &str, capacity_btu_per_hr: f64) -> f64 {
    let clamped = capacity_btu_per_hr.clamp(
        PACKAGED_TERMINAL_MIN_BTU_PER_HR,
        PACKAGED_TERMINAL_MAX_BTU_PER_HR,
    );
    if clamped != capacity_btu_per_hr {
        log::debug!(
            target: LOG_TARGET,
            "{component}: 용량 {capacity_btu_per_hr:.0} Btu/h를 {clamped:.0} Btu/h로 보고 계수식을 적용함"
        );
    }
    clamped
}

/// 계수식 `c1 − c2·Btu/h/1000`. 계수가 둘 다 있어야 한다.
fn packaged_terminal_rating(
    record: &ReferenceRecord,
    coefficient_prefix: &str,
    component: &str,
    capacity_btu_per_hr: f64,
) -> Option<(f64, f64)> {
    let c1 = record.number(&format!("{coefficient_prefix}_1"))?;
    let c2 = record.number(&format!("{coefficient_prefix}_2"))?;
    let capacity = clamp_packaged_terminal_capacity(component, capacity_btu_per_hr);
    Some((c1 - c2 * capacity / 1000.0, capacity))
}

fn result_with_name(
    coil: &DxCoil,
    cop: f64,
    basis: DxEfficiencyBasis,
    table: &'static str,
    capacity_w: f64,
) -> DxCoilEfficiencyResult {
    DxCoilEfficiencyResult {
        cop,
        basis,
        table,
        capacity_btu_per_hr: watt_to_btu_per_hour(capacity_w),
        new_name: format!(
            "{} {:.0}kBtu/hr {}",
            coil.name,
            watt_to_kbtu_per_hour(capacity_w),
            basis.suffix()
        ),
    }
}

fn no_efficiency_field(coil: &DxCoil) -> ApplyError {
    log::warn!(target: LOG_TARGET, "{}: 기준 레코드에 효율 항목이 없음", coil.name);
    ApplyError::Invalid {
        component: coil.name.clone(),
        detail: "효율 항목 없음".to_string(),
    }
}

/// 냉방 코일 최소 COP (팬 제외). 코일은 바꾸지 않는다.
///
/// PTAC/PTHP 계수식, SEER, EER 순으로 보고 뒤에 있는 항목이 우선한다.
pub fn standard_minimum_cooling_cop(
    data: &StandardsData,
    template: &str,
    coil: &DxCoil,
) -> Result<DxCoilEfficiencyResult, ApplyError> {
    let capacity_w = coil.capacity_w()?;
    let capacity_btu_per_hr = watt_to_btu_per_hour(capacity_w);
    let table = cooling_table(coil);
    let criteria = cooling_search_criteria(template, coil);
    let record = data
        .find(table, &criteria, Some(capacity_btu_per_hr))
        .ok_or_else(|| not_found(LOG_TARGET, &coil.name, table, &criteria))?;

    let mut result = None;
    if coil.packaged_terminal {
        if let Some((eer, capacity)) =
            packaged_terminal_rating(record, "ptac_eer_coefficient", &coil.name, capacity_btu_per_hr)
        {
            let capacity_w = convert_power(capacity, PowerUnit::BtuPerHour, PowerUnit::Watt);
            result = Some(result_with_name(
                coil,
                eer_to_cop(eer, Some(capacity_w)),
                DxEfficiencyBasis::Eer(eer),
                table,
                capacity_w,
            ));
        }
    }
    if let Some(seer) = record.number("minimum_seasonal_energy_efficiency_ratio") {
        result = Some(result_with_name(
            coil,
            seer_to_cop_cooling_no_fan(seer),
            DxEfficiencyBasis::Seer(seer),
            table,
            capacity_w,
        ));
    }
    if let Some(eer) = record.number("minimum_energy_efficiency_ratio") {
        result = Some(result_with_name(
            coil,
            eer_to_cop(eer, Some(capacity_w)),
            DxEfficiencyBasis::Eer(eer),
            table,
            capacity_w,
        ));
    }
    let result = result.ok_or_else(|| no_efficiency_field(coil))?;
    log::info!(
        target: LOG_TARGET,
        "For {template}: {}: {} {:.0}kBtu/hr; {:?} → COP {:.2}",
        coil.name,
        criteria,
        watt_to_kbtu_per_hour(capacity_w),
        result.basis,
        result.cop
    );
    Ok(result)
}

/// 난방 코일 최소 COP (팬 제외). 코일은 바꾸지 않는다.
///
/// PTHP 계수식, HSPF, 47°F COPH 순으로 보고 뒤에 있는 항목이 우선한다.
pub fn standard_minimum_heating_cop(
    data: &StandardsData,
    template: &str,
    coil: &DxCoil,
) -> Result<DxCoilEfficiencyResult, ApplyError> {
    if !coil.heat_pump {
        log::warn!(target: LOG_TARGET, "{}: 히트펌프가 아닌 DX 난방 코일", coil.name);
        return Err(ApplyError::Unsupported {
            component: coil.name.clone(),
            detail: "히트펌프가 아닌 DX 난방 코일".to_string(),
        });
    }
    let capacity_w = coil.capacity_w()?;
    let capacity_btu_per_hr = watt_to_btu_per_hour(capacity_w);
    let table = heating_table(data);
    let criteria = heating_search_criteria(template, coil);
    let record = data
        .find(table, &criteria, Some(capacity_btu_per_hr))
        .ok_or_else(|| not_found(LOG_TARGET, &coil.name, table, &criteria))?;

    let mut result = None;
    if coil.packaged_terminal {
        if let Some((coph, capacity)) =
            packaged_terminal_rating(record, "pthp_cop_coefficient", &coil.name, capacity_btu_per_hr)
        {
            let capacity_w = convert_power(capacity, PowerUnit::BtuPerHour, PowerUnit::Watt);
            result = Some(result_with_name(
                coil,
                cop_heating_to_cop_heating_no_fan(coph, capacity_w),
                DxEfficiencyBasis::HeatingCop(coph),
                table,
                capacity_w,
            ));
        }
    }
    if let Some(hspf) = record.number("minimum_heating_seasonal_performance_factor") {
        result = Some(result_with_name(
            coil,
            hspf_to_cop_heating_no_fan(hspf),
            DxEfficiencyBasis::Hspf(hspf),
            table,
            capacity_w,
        ));
    }
    if let Some(coph) = record.number("minimum_coefficient_of_performance_heating") {
        result = Some(result_with_name(
            coil,
            cop_heating_to_cop_heating_no_fan(coph, capacity_w),
            DxEfficiencyBasis::HeatingCop(coph),
            table,
            capacity_w,
        ));
    }
    let result = result.ok_or_else(|| no_efficiency_field(coil))?;
    log::info!(
        target: LOG_TARGET,
        "For {template}: {}: {} {:.0}kBtu/hr; {:?} → COP {:.2}",
        coil.name,
        criteria,
        watt_to_kbtu_per_hour(capacity_w),
        result.basis,
        result.cop
    );
    Ok(result)
}

/// 냉방 최소 COP를 적용하고 이름을 바꾼다.
pub fn apply_cooling_efficiency(
    data: &StandardsData,
    template: &str,
    coil: &mut DxCoil,
) -> Result<DxCoilEfficiencyResult, ApplyError> {
    let result = standard_minimum_cooling_cop(data, template, coil)?;
    coil.rated_cop = Some(result.cop);
    coil.name = result.new_name.clone();
    Ok(result)
}

/// 난방 최소 COP를 적용하고 이름을 바꾼다.
pub fn apply_heating_efficiency(
    data: &StandardsData,
    template: &str,
    coil: &mut DxCoil,
) -> Result<DxCoilEfficiencyResult, ApplyError> {
    let result = standard_minimum_heating_cop(data, template, coil)?;
    coil.rated_cop = Some(result.cop);
    coil.name = result.new_name.clone();
    Ok(result)
}
