//! VAV 터미널 댐퍼 동작과 최소 댐퍼 개도 (다중 존 환기 효율 방식).

use crate::units::{convert_volume_flow, VolumeFlowUnit};

use super::{round_to, ApplyError};

const LOG_TARGET: &str = "standards::air_terminal";
/// 존 환기 효율 하한
const MIN_ZONE_VENTILATION_EFFECTIVENESS: f64 = 0.6;
/// Single Maximum 제어 시 재열 중 최대 풍량비
const SINGLE_MAXIMUM_REHEAT_FLOW_FRACTION: f64 = 0.5;

/// 난방 시 VAV 댐퍼 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamperAction {
    /// 최소 개도 유지 (EnergyPlus "Normal")
    SingleMaximum,
    /// 난방 시 다시 개도 증가 (EnergyPlus "Reverse")
    DualMaximum,
}

impl DamperAction {
    /// 시뮬레이션 엔진 입력 문자열.
    pub fn engine_name(self) -> &'static str {
        match self {
            DamperAction::SingleMaximum => "Normal",
            DamperAction::DualMaximum => "Reverse",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DamperAction::SingleMaximum => "Single Maximum",
            DamperAction::DualMaximum => "Dual Maximum",
        }
    }
}

/// 기준 버전별 댐퍼 동작.
pub fn vav_damper_action(template: &str) -> DamperAction {
    match template {
        "DOE Ref Pre-1980" | "DOE Ref 1980-2004" | "90.1-2004" | "NECB 2011" => {
            DamperAction::SingleMaximum
        }
        _ => DamperAction::DualMaximum,
    }
}

/// VAV 재열 터미널 속성.
#[derive(Debug, Clone, PartialEq)]
pub struct VavTerminal {
    pub name: String,
    /// 재열 코일이 온수식인지
    pub hot_water_reheat: bool,
    /// 엔진 댐퍼 난방 동작 문자열
    pub damper_heating_action: Option<String>,
    pub maximum_flow_fraction_during_reheat: Option<f64>,
}

/// 터미널들에 댐퍼 동작을 적용한다. Dual Maximum은 온수 재열 터미널에만 적용된다.
///
/// 적용된 터미널 수를 돌려준다.
pub fn apply_vav_damper_action(template: &str, loop_name: &str, terminals: &mut [VavTerminal]) -> usize {
    let action = vav_damper_action(template);
    let mut applied = 0;
    for term in terminals.iter_mut() {
        match action {
            DamperAction::DualMaximum if !term.hot_water_reheat => continue,
            DamperAction::DualMaximum => {}
            DamperAction::SingleMaximum => {
                term.maximum_flow_fraction_during_reheat = Some(SINGLE_MAXIMUM_REHEAT_FLOW_FRACTION);
            }
        }
        term.damper_heating_action = Some(action.engine_name().to_string());
        applied += 1;
    }
    if applied > 0 {
        log::info!(
            target: LOG_TARGET,
            "For {loop_name}: VAV damper action was set to {} control",
            action.label()
        );
    }
    applied
}

/// 존별 환기 입력. 유량은 모두 m³/s.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneVentilation {
    pub name: String,
    /// 존 외기 요구량 Voz
    pub outdoor_air_flow: f64,
    /// 존 설계 급기량 Vpz (냉방/난방 설계 풍량 중 큰 값)
    pub primary_air_flow: f64,
    /// 현재 최소 댐퍼 개도 (0~1)
    pub minimum_damper_position: f64,
    /// 터미널 고정 최소 풍량 (m³/s)
    pub fixed_minimum_flow: Option<f64>,
}

/// 존별 조정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDamperResult {
    pub name: String,
    pub ventilation_effectiveness: f64,
    pub minimum_damper_position: f64,
    pub adjusted: bool,
}

/// 계통 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct DamperPositionResult {
    pub zones: Vec<ZoneDamperResult>,
    /// 조정 전 계통 환기 효율 Ev
    pub system_effectiveness_before: f64,
    /// 조정 후 Ev
    pub system_effectiveness_after: f64,
    /// 조정 전 외기 도입량 Vot (m³/s)
    pub outdoor_air_intake_before: f64,
    /// 조정 후 Vot (m³/s). 계통 설계 외기량으로 쓴다.
    pub outdoor_air_intake_after: f64,
}

/// 다중 존 환기 효율이 0.6 미만인 존의 최소 댐퍼 개도를 올린다.
///
/// `Xs = Vou/Vps`, `Zd = Voz/(Vpz·mdp)`, `Evz = 1 + Xs − Zd`.
pub fn minimum_vav_damper_positions(
    loop_name: &str,
    system_supply_flow: f64,
    zones: &[ZoneVentilation],
) -> Result<DamperPositionResult, ApplyError> {
    if zones.is_empty() || system_supply_flow <= 0.0 {
        return Err(ApplyError::Invalid {
            component: loop_name.to_string(),
            detail: "존 또는 계통 급기량이 없음".to_string(),
        });
    }
    let v_ou: f64 = zones.iter().map(|z| z.outdoor_air_flow).sum();
    let x_s = v_ou / system_supply_flow;

    let mut results = Vec::with_capacity(zones.len());
    let mut e_vzs = Vec::with_capacity(zones.len());
    let mut e_vzs_adj = Vec::with_capacity(zones.len());
    for zone in zones {
        if zone.primary_air_flow <= 0.0 {
            return Err(ApplyError::Invalid {
                component: loop_name.to_string(),
                detail: format!("{}: 존 설계 급기량이 0", zone.name),
            });
        }
        let mut mdp = zone.minimum_damper_position;
        if let Some(min_flow) = zone.fixed_minimum_flow.filter(|f| *f > 0.0) {
            mdp = round_to(mdp.max(min_flow / system_supply_flow), 2);
        }
        let v_dz = zone.primary_air_flow * mdp;
        let z_d = zone.outdoor_air_flow / v_dz;
        let e_vz = 1.0 + x_s - z_d;
        e_vzs.push(e_vz);

        if e_vz < MIN_ZONE_VENTILATION_EFFECTIVENESS {
            let z_d_adj = 1.0 + x_s - MIN_ZONE_VENTILATION_EFFECTIVENESS;
            let v_dz_adj = zone.outdoor_air_flow / z_d_adj;
            let mdp_adj = round_to((v_dz_adj / zone.primary_air_flow).min(1.0), 11);
            let e_vz_adj = 1.0 + x_s - z_d_adj;
            e_vzs_adj.push(e_vz_adj);
            log::info!(
                target: LOG_TARGET,
                "For {loop_name}: Zone {} 환기 효율 {:.2} → {:.2}, 최소 댐퍼 개도 {:.2} → {:.2}",
                zone.name,
                e_vz,
                e_vz_adj,
                mdp,
                mdp_adj
            );
            results.push(ZoneDamperResult {
                name: zone.name.clone(),
                ventilation_effectiveness: e_vz_adj,
                minimum_damper_position: mdp_adj,
                adjusted: true,
            });
        } else {
            e_vzs_adj.push(e_vz);
            results.push(ZoneDamperResult {
                name: zone.name.clone(),
                ventilation_effectiveness: e_vz,
                minimum_damper_position: mdp,
                adjusted: false,
            });
        }
    }

    let e_v = e_vzs.iter().copied().fold(f64::INFINITY, f64::min);
    let e_v_adj = e_vzs_adj.iter().copied().fold(f64::INFINITY, f64::min);
    let v_ot = v_ou / e_v;
    let v_ot_adj = v_ou / e_v_adj;
    let to_cfm = |v: f64| {
        convert_volume_flow(v, VolumeFlowUnit::CubicMeterPerSecond, VolumeFlowUnit::Cfm)
    };
    log::info!(
        target: LOG_TARGET,
        "For {loop_name}: 존 외기 합 {:.0} cfm, 다중 존 방식 {:.0} cfm (Ev {:.2}), 조정 후 {:.0} cfm (Ev {:.2})",
        to_cfm(v_ou),
        to_cfm(v_ot),
        e_v,
        to_cfm(v_ot_adj),
        e_v_adj
    );

    Ok(DamperPositionResult {
        zones: results,
        system_effectiveness_before: e_v,
        system_effectiveness_after: e_v_adj,
        outdoor_air_intake_before: v_ot,
        outdoor_air_intake_after: v_ot_adj,
    })
}
