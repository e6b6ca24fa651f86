//! 외피 규칙. 구조체(construction)의 단열층을 조정해 목표 열관류율을 맞춘다.

pub mod construction;

pub use construction::{
    film_coefficients_r_value_si, set_slab_f_factor, set_u_value, set_underground_wall_c_factor,
    Construction, ConstructionError, IntendedSurfaceType, Layer, LayerKind,
};
