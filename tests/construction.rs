use approx::assert_relative_eq;
use building_standards_toolbox::envelope::{
    film_coefficients_r_value_si, set_slab_f_factor, set_u_value, set_underground_wall_c_factor,
    Construction, ConstructionError, IntendedSurfaceType, Layer, LayerKind,
};

const SI_PER_IP_U: f64 = 5.67826334;

fn wall() -> Construction {
    Construction::new(
        "Wall",
        vec![
            Layer::new(
                "Brick",
                LayerKind::Standard {
                    thickness_m: 0.1,
                    conductivity: 0.8,
                },
            ),
            Layer::new("Insulation", LayerKind::Massless { resistance: 1.0 }),
            Layer::new(
                "Gypsum",
                LayerKind::Standard {
                    thickness_m: 0.0127,
                    conductivity: 0.16,
                },
            ),
        ],
    )
}

#[test]
fn u_value_with_films_hits_target() {
    let mut c = wall();
    let r = set_u_value(&mut c, 0.05, Some("Insulation"), IntendedSurfaceType::ExteriorWall, true)
        .expect("set")
        .expect("resized");
    assert_relative_eq!(
        c.u_value_si(IntendedSurfaceType::ExteriorWall),
        0.05 * SI_PER_IP_U,
        max_relative = 1e-9
    );
    assert_eq!(c.layers[1].kind, LayerKind::Massless { resistance: r });
    assert_eq!(c.name, "Wall R-20");
    assert!(c.layers[1].name.starts_with("Insulation R-"));
}

#[test]
fn u_value_without_films_resizes_thickness() {
    let mut c = wall();
    c.layers[1] = Layer::new(
        "Insulation",
        LayerKind::Standard {
            thickness_m: 0.05,
            conductivity: 0.04,
        },
    );
    set_u_value(&mut c, 0.05, Some("Insulation"), IntendedSurfaceType::ExteriorWall, false)
        .expect("set");
    // 표면 저항 없이 층 합만으로 목표 R
    assert_relative_eq!(c.layers_r_value_si(), 1.0 / (0.05 * SI_PER_IP_U), max_relative = 1e-9);
    match c.layers[1].kind {
        LayerKind::Standard { conductivity, .. } => assert_eq!(conductivity, 0.04),
        other => panic!("재료 종류가 바뀜: {other:?}"),
    }
}

#[test]
fn zero_target_removes_insulation() {
    let mut c = wall();
    let result = set_u_value(&mut c, 0.0, Some("Insulation"), IntendedSurfaceType::ExteriorWall, true)
        .expect("remove");
    assert!(result.is_none());
    assert_eq!(c.layers.len(), 2);
    assert!(c.layers.iter().all(|l| l.name != "Insulation"));

    // 단열층이 없어도 0이면 아무것도 하지 않는다
    let mut c = wall();
    assert_eq!(
        set_u_value(&mut c, 0.0, None, IntendedSurfaceType::ExteriorWall, true),
        Ok(None)
    );
    assert_eq!(c, wall());
}

#[test]
fn set_u_value_errors() {
    let mut c = wall();
    assert_eq!(
        set_u_value(&mut c, 0.05, None, IntendedSurfaceType::ExteriorWall, true),
        Err(ConstructionError::NoInsulationLayer("Wall".to_string()))
    );
    assert!(matches!(
        set_u_value(&mut c, 0.05, Some("Foam"), IntendedSurfaceType::ExteriorWall, true),
        Err(ConstructionError::LayerNotFound { .. })
    ));
    assert!(matches!(
        set_u_value(&mut c, 10.0, Some("Insulation"), IntendedSurfaceType::ExteriorWall, true),
        Err(ConstructionError::TargetTooLow { .. })
    ));
    // 실패하면 구조체를 바꾸지 않는다
    assert_eq!(c, wall());

    let mut window = wall();
    window.fenestration = true;
    assert!(matches!(
        set_u_value(&mut window, 0.5, Some("Insulation"), IntendedSurfaceType::ExteriorWindow, true),
        Err(ConstructionError::Fenestration(_))
    ));
}

#[test]
fn ground_contact_has_inside_film_only() {
    let ground = film_coefficients_r_value_si(IntendedSurfaceType::GroundContactWall);
    assert_relative_eq!(ground, 0.68 / SI_PER_IP_U, max_relative = 1e-9);
    let exterior = film_coefficients_r_value_si(IntendedSurfaceType::ExteriorWall);
    assert_relative_eq!(exterior, (0.17 + 0.68) / SI_PER_IP_U, max_relative = 1e-9);
}

#[test]
fn slab_f_factor() {
    let mut slab = Construction::new(
        "Slab",
        vec![
            Layer::new(
                "Concrete",
                LayerKind::Standard {
                    thickness_m: 0.1016,
                    conductivity: 1.311,
                },
            ),
            Layer::new("Slab Insulation", LayerKind::Massless { resistance: 0.5 }),
        ],
    );
    set_slab_f_factor(&mut slab, 0.73, Some("Slab Insulation")).expect("f-factor");
    let r_ip = 1.0248 * 0.73f64.powf(-2.186);
    assert_relative_eq!(
        slab.u_value_si(IntendedSurfaceType::GroundContactFloor),
        SI_PER_IP_U / r_ip,
        max_relative = 1e-9
    );
    assert!(slab.name.ends_with(" F-0.73"));
    assert!(set_slab_f_factor(&mut slab, 0.0, Some("Slab Insulation")).is_err());
}

#[test]
fn underground_wall_c_factor() {
    let mut c = wall();
    set_underground_wall_c_factor(&mut c, 0.119, Some("Insulation")).expect("c-factor");
    let r_ip = 0.775 * 0.119f64.powf(-1.067);
    assert_relative_eq!(
        c.u_value_si(IntendedSurfaceType::GroundContactWall),
        SI_PER_IP_U / r_ip,
        max_relative = 1e-9
    );
    assert!(c.name.ends_with(" C-0.119"));
}

#[test]
fn layers_from_json() {
    let json = r#"[
        {"name": "Brick", "kind": "standard", "thickness_m": 0.1, "conductivity": 0.8},
        {"name": "Insulation", "kind": "massless", "resistance": 2.0},
        {"name": "Cavity", "kind": "air_gap", "thickness_m": 0.02, "conductivity": 0.1}
    ]"#;
    let layers: Vec<Layer> = serde_json::from_str(json).expect("layers");
    assert_eq!(layers.len(), 3);
    assert_relative_eq!(layers[0].thermal_resistance(), 0.125, epsilon = 1e-12);
    assert_eq!(layers[1].kind, LayerKind::Massless { resistance: 2.0 });
    assert_relative_eq!(layers[2].thermal_resistance(), 0.2, epsilon = 1e-12);
}
