//! 불투명 구조체의 U값, 슬래브 F-factor, 지하벽 C-factor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hvac::round_to;
use crate::units::thermal_resistance::{r_ip_to_si, r_si_to_ip};
use crate::units::{convert_heat_transfer, HeatTransferUnit};

const LOG_TARGET: &str = "standards::construction";

/// 표면 열전달 저항 (IP, ft²·h·°F/Btu)
const FILM_EXTERIOR_R_IP: f64 = 0.17;
const FILM_SEMI_EXTERIOR_R_IP: f64 = 0.46;
const FILM_INTERIOR_FLOW_UP_R_IP: f64 = 0.61;
const FILM_INTERIOR_FLOW_DOWN_R_IP: f64 = 0.92;
const FILM_INTERIOR_VERTICAL_R_IP: f64 = 0.68;

/// 구조체 조정 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("{0}: 창호 구조체는 U값을 조정할 수 없음")]
    Fenestration(String),
    #[error("{0}: 단열층이 지정되지 않음")]
    NoInsulationLayer(String),
    #[error("{construction}: 단열층 {layer}을(를) 찾을 수 없음")]
    LayerNotFound { construction: String, layer: String },
    #[error("{construction}: 목표 U값 {target_u_ip}은(는) 다른 층만으로도 도달할 수 없음")]
    TargetTooLow {
        construction: String,
        target_u_ip: f64,
    },
    #[error("{0}: 목표값은 0보다 커야 함")]
    InvalidTarget(String),
}

/// 재료 층 종류.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerKind {
    /// 두께와 열전도율을 가진 일반 재료
    Standard { thickness_m: f64, conductivity: f64 },
    /// 열저항만 가진 재료 (m²·K/W)
    Massless { resistance: f64 },
    /// 공기층
    AirGap { thickness_m: f64, conductivity: f64 },
}

/// 구조체의 한 층.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    pub fn new(name: &str, kind: LayerKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    /// 열저항 (m²·K/W).
    pub fn thermal_resistance(&self) -> f64 {
        match self.kind {
            LayerKind::Standard {
                thickness_m,
                conductivity,
            }
            | LayerKind::AirGap {
                thickness_m,
                conductivity,
            } => thickness_m / conductivity,
            LayerKind::Massless { resistance } => resistance,
        }
    }

    // 두께나 열저항을 바꿔 목표 열저항을 맞춘다.
    fn set_thermal_resistance(&mut self, r_si: f64) {
        match &mut self.kind {
            LayerKind::Standard {
                thickness_m,
                conductivity,
            }
            | LayerKind::AirGap {
                thickness_m,
                conductivity,
            } => *thickness_m = r_si * *conductivity,
            LayerKind::Massless { resistance } => *resistance = r_si,
        }
    }
}

/// 재료 층으로 이루어진 구조체. 바깥쪽 층이 먼저 온다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    pub name: String,
    #[serde(default)]
    pub fenestration: bool,
    pub layers: Vec<Layer>,
}

impl Construction {
    pub fn new(name: &str, layers: Vec<Layer>) -> Self {
        Self {
            name: name.to_string(),
            fenestration: false,
            layers,
        }
    }

    /// 표면 저항을 뺀 층 열저항 합 (m²·K/W).
    pub fn layers_r_value_si(&self) -> f64 {
        self.layers.iter().map(Layer::thermal_resistance).sum()
    }

    /// 표면 저항을 포함한 U값 (W/m²·K).
    pub fn u_value_si(&self, surface: IntendedSurfaceType) -> f64 {
        1.0 / (self.layers_r_value_si() + film_coefficients_r_value_si(surface))
    }
}

/// 구조체가 쓰일 표면 종류. 안팎 표면 저항이 정해진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntendedSurfaceType {
    AtticFloor,
    AtticWall,
    AtticRoof,
    DemisingFloor,
    InteriorFloor,
    InteriorCeiling,
    DemisingWall,
    InteriorWall,
    InteriorPartition,
    InteriorWindow,
    InteriorDoor,
    DemisingRoof,
    ExteriorRoof,
    Skylight,
    TubularDaylightDome,
    TubularDaylightDiffuser,
    ExteriorFloor,
    ExteriorWall,
    ExteriorWindow,
    ExteriorDoor,
    GlassDoor,
    OverheadDoor,
    GroundContactFloor,
    GroundContactWall,
    GroundContactRoof,
}

impl IntendedSurfaceType {
    pub fn parse(s: &str) -> Option<Self> {
        use IntendedSurfaceType::*;
        let kind = match s {
            "AtticFloor" => AtticFloor,
            "AtticWall" => AtticWall,
            "AtticRoof" => AtticRoof,
            "DemisingFloor" => DemisingFloor,
            "InteriorFloor" => InteriorFloor,
            "InteriorCeiling" => InteriorCeiling,
            "DemisingWall" => DemisingWall,
            "InteriorWall" => InteriorWall,
            "InteriorPartition" => InteriorPartition,
            "InteriorWindow" => InteriorWindow,
            "InteriorDoor" => InteriorDoor,
            "DemisingRoof" => DemisingRoof,
            "ExteriorRoof" => ExteriorRoof,
            "Skylight" => Skylight,
            "TubularDaylightDome" => TubularDaylightDome,
            "TubularDaylightDiffuser" => TubularDaylightDiffuser,
            "ExteriorFloor" => ExteriorFloor,
            "ExteriorWall" => ExteriorWall,
            "ExteriorWindow" => ExteriorWindow,
            "ExteriorDoor" => ExteriorDoor,
            "GlassDoor" => GlassDoor,
            "OverheadDoor" => OverheadDoor,
            "GroundContactFloor" => GroundContactFloor,
            "GroundContactWall" => GroundContactWall,
            "GroundContactRoof" => GroundContactRoof,
            _ => return None,
        };
        Some(kind)
    }

    /// (바깥, 안쪽) 표면 저항 (IP).
    fn films_r_ip(self) -> (f64, f64) {
        use IntendedSurfaceType::*;
        match self {
            AtticFloor => (FILM_INTERIOR_FLOW_UP_R_IP, FILM_SEMI_EXTERIOR_R_IP),
            AtticWall | AtticRoof => (FILM_EXTERIOR_R_IP, FILM_SEMI_EXTERIOR_R_IP),
            DemisingFloor | InteriorFloor => {
                (FILM_INTERIOR_FLOW_UP_R_IP, FILM_INTERIOR_FLOW_DOWN_R_IP)
            }
            InteriorCeiling => (FILM_INTERIOR_FLOW_DOWN_R_IP, FILM_INTERIOR_FLOW_UP_R_IP),
            DemisingWall | InteriorWall | InteriorPartition | InteriorWindow | InteriorDoor => {
                (FILM_INTERIOR_VERTICAL_R_IP, FILM_INTERIOR_VERTICAL_R_IP)
            }
            DemisingRoof | ExteriorRoof | Skylight | TubularDaylightDome
            | TubularDaylightDiffuser => (FILM_EXTERIOR_R_IP, FILM_INTERIOR_FLOW_UP_R_IP),
            ExteriorFloor => (FILM_EXTERIOR_R_IP, FILM_INTERIOR_FLOW_DOWN_R_IP),
            ExteriorWall | ExteriorWindow | ExteriorDoor | GlassDoor | OverheadDoor => {
                (FILM_EXTERIOR_R_IP, FILM_INTERIOR_VERTICAL_R_IP)
            }
            GroundContactFloor => (0.0, FILM_INTERIOR_FLOW_DOWN_R_IP),
            GroundContactWall => (0.0, FILM_INTERIOR_VERTICAL_R_IP),
            GroundContactRoof => (0.0, FILM_INTERIOR_FLOW_UP_R_IP),
        }
    }
}

/// 표면 종류별 안팎 표면 저항 합 (m²·K/W).
pub fn film_coefficients_r_value_si(surface: IntendedSurfaceType) -> f64 {
    let (outside, inside) = surface.films_r_ip();
    r_ip_to_si(outside) + r_ip_to_si(inside)
}

/// 단열층 두께(또는 열저항)를 조정해 목표 U값(IP)을 맞춘다.
///
/// 목표가 0이면 단열층을 제거한다. 조정된 단열층 열저항(m²·K/W)을 돌려주며
/// 제거한 경우 `None`이다.
pub fn set_u_value(
    construction: &mut Construction,
    target_u_ip: f64,
    insulation_layer: Option<&str>,
    surface: IntendedSurfaceType,
    include_films: bool,
) -> Result<Option<f64>, ConstructionError> {
    log::debug!(target: LOG_TARGET, "Setting U-Value for {}", construction.name);
    if construction.fenestration {
        log::warn!(
            target: LOG_TARGET,
            "{}: 불투명 구조체만 U값을 조정할 수 있음",
            construction.name
        );
        return Err(ConstructionError::Fenestration(construction.name.clone()));
    }
    let Some(layer_name) = insulation_layer else {
        if target_u_ip == 0.0 {
            return Ok(None);
        }
        log::error!(
            target: LOG_TARGET,
            "{}: U값 {target_u_ip} 요청, 단열층이 지정되지 않아 적용하지 않음",
            construction.name
        );
        return Err(ConstructionError::NoInsulationLayer(construction.name.clone()));
    };
    let index = construction
        .layers
        .iter()
        .position(|l| l.name == layer_name)
        .ok_or_else(|| {
            log::error!(
                target: LOG_TARGET,
                "{}: 단열층 {layer_name}이(가) 없음",
                construction.name
            );
            ConstructionError::LayerNotFound {
                construction: construction.name.clone(),
                layer: layer_name.to_string(),
            }
        })?;

    if target_u_ip == 0.0 {
        construction.layers.remove(index);
        log::info!(
            target: LOG_TARGET,
            "{}: 단열층 {layer_name} 제거",
            construction.name
        );
        return Ok(None);
    }
    if target_u_ip < 0.0 {
        return Err(ConstructionError::InvalidTarget(construction.name.clone()));
    }

    let target_r_ip = 1.0 / target_u_ip;
    let target_u_si = convert_heat_transfer(
        target_u_ip,
        HeatTransferUnit::BtuPerHourSquareFootR,
        HeatTransferUnit::WPerSquareMeterK,
    );
    let target_r_si = 1.0 / target_u_si;
    log::debug!(
        target: LOG_TARGET,
        "{}: target U = {:.3} IP / {:.3} SI, target R = {:.2} IP / {:.2} SI",
        construction.name,
        target_u_ip,
        target_u_si,
        target_r_ip,
        target_r_si
    );

    let mut other_r_si: f64 = construction
        .layers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, l)| l.thermal_resistance())
        .sum();
    if include_films {
        other_r_si += film_coefficients_r_value_si(surface);
    }

    let insulation_r_si = target_r_si - other_r_si;
    if insulation_r_si <= 0.0 {
        log::warn!(
            target: LOG_TARGET,
            "{}: 요청한 U값 {target_u_ip}은(는) 다른 층만으로도 도달할 수 없어 단열층을 바꾸지 않음",
            construction.name
        );
        return Err(ConstructionError::TargetTooLow {
            construction: construction.name.clone(),
            target_u_ip,
        });
    }
    let insulation_r_ip = r_si_to_ip(insulation_r_si);

    let layer = &mut construction.layers[index];
    layer.set_thermal_resistance(insulation_r_si);
    layer.name = format!("{} R-{}", layer.name, round_to(insulation_r_ip, 2));
    construction.name = format!("{} R-{}", construction.name, round_to(target_r_ip, 2));
    Ok(Some(insulation_r_si))
}

/// 슬래브 F-factor(Btu/h·ft·°F) 목표를 U값으로 바꿔 적용한다. R = 1.0248·F^−2.186.
pub fn set_slab_f_factor(
    construction: &mut Construction,
    target_f_factor_ip: f64,
    insulation_layer: Option<&str>,
) -> Result<Option<f64>, ConstructionError> {
    if target_f_factor_ip <= 0.0 {
        return Err(ConstructionError::InvalidTarget(construction.name.clone()));
    }
    let r_value_ip = 1.0248 * target_f_factor_ip.powf(-2.186);
    let result = set_u_value(
        construction,
        1.0 / r_value_ip,
        insulation_layer,
        IntendedSurfaceType::GroundContactFloor,
        true,
    )?;
    construction.name = format!("{} F-{}", construction.name, round_to(target_f_factor_ip, 3));
    Ok(result)
}

/// 지하벽 C-factor(Btu/h·ft²·°F) 목표를 U값으로 바꿔 적용한다. R = 0.775·C^−1.067.
pub fn set_underground_wall_c_factor(
    construction: &mut Construction,
    target_c_factor_ip: f64,
    insulation_layer: Option<&str>,
) -> Result<Option<f64>, ConstructionError> {
    if target_c_factor_ip <= 0.0 {
        return Err(ConstructionError::InvalidTarget(construction.name.clone()));
    }
    let r_value_ip = 0.775 * target_c_factor_ip.powf(-1.067);
    let result = set_u_value(
        construction,
        1.0 / r_value_ip,
        insulation_layer,
        IntendedSurfaceType::GroundContactWall,
        true,
    )?;
    construction.name = format!("{} C-{}", construction.name, round_to(target_c_factor_ip, 3));
    Ok(result)
}
