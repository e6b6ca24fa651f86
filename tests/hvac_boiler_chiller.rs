use approx::assert_relative_eq;
use building_standards_toolbox::efficiency::{afue_to_thermal_eff, eer_to_cop, kw_per_ton_to_cop};
use building_standards_toolbox::hvac::boiler::{
    apply_efficiency_and_curves, standard_minimum_thermal_efficiency, standards_fuel_type, Boiler,
    BoilerEfficiencyBasis,
};
use building_standards_toolbox::hvac::chiller::{self, Chiller};
use building_standards_toolbox::hvac::{ApplyError, SizedValue};
use building_standards_toolbox::standards::{ReferenceRecord, StandardsData};

const TEMPLATE: &str = "90.1-2013";

fn gas_boiler(min: f64, max: f64) -> ReferenceRecord {
    ReferenceRecord::new()
        .with("template", TEMPLATE)
        .with("fuel_type", "Gas")
        .with("fluid_type", "Hot Water")
        .with("minimum_capacity", min)
        .with("maximum_capacity", max)
}

fn boiler_data() -> StandardsData {
    StandardsData::from_tables([
        (
            "boilers",
            vec![
                gas_boiler(0.0, 300_000.0).with("minimum_annual_fuel_utilization_efficiency", 0.82),
                gas_boiler(300_000.0, 2_500_000.0)
                    .with("minimum_thermal_efficiency", 0.80)
                    .with("efffplr", "Boiler with Minimum Turndown"),
                gas_boiler(2_500_000.0, 1.0e12).with("minimum_combustion_efficiency", 0.82),
            ],
        ),
        (
            "curves",
            vec![ReferenceRecord::new()
                .with("name", "Boiler with Minimum Turndown")
                .with("form", "Quadratic")
                .with("coeff_1", 0.97)
                .with("coeff_2", 0.0633)
                .with("coeff_3", -0.0333)
                .with("minimum_independent_variable_1", 0.0)
                .with("maximum_independent_variable_1", 1.0)],
        ),
    ])
}

fn boiler(capacity_w: f64) -> Boiler {
    Boiler {
        name: "Boiler".to_string(),
        fuel_type: "NaturalGas".to_string(),
        nominal_capacity: SizedValue::autosized(capacity_w),
        nominal_thermal_efficiency: 0.7,
        efficiency_curve: None,
    }
}

#[test]
fn boiler_efficiency_by_capacity_bracket() {
    let data = boiler_data();

    let small = standard_minimum_thermal_efficiency(&data, TEMPLATE, &boiler(50_000.0)).expect("small");
    assert_eq!(small.basis, BoilerEfficiencyBasis::Afue(0.82));
    assert_relative_eq!(small.thermal_efficiency, afue_to_thermal_eff(0.82));
    assert_eq!(small.new_name, "Boiler 171kBtu/hr 0.82 AFUE");

    let medium = standard_minimum_thermal_efficiency(&data, TEMPLATE, &boiler(300_000.0)).expect("medium");
    assert_eq!(medium.basis, BoilerEfficiencyBasis::Thermal(0.8));
    assert_eq!(medium.thermal_efficiency, 0.8);
    assert_relative_eq!(medium.capacity_kbtu_per_hr, 1023.64, epsilon = 0.01);
    assert_eq!(medium.new_name, "Boiler 1024kBtu/hr 0.8 Thermal Eff");

    let large = standard_minimum_thermal_efficiency(&data, TEMPLATE, &boiler(1_000_000.0)).expect("large");
    assert_eq!(large.basis, BoilerEfficiencyBasis::Combustion(0.82));
    assert_eq!(large.new_name, "Boiler 3412kBtu/hr 0.82 Combustion Eff");
}

#[test]
fn boiler_apply_sets_curve_and_name() {
    let data = boiler_data();
    let mut b = boiler(300_000.0);
    apply_efficiency_and_curves(&data, TEMPLATE, &mut b).expect("apply");
    assert_eq!(b.name, "Boiler 1024kBtu/hr 0.8 Thermal Eff");
    assert_eq!(b.nominal_thermal_efficiency, 0.8);
    let curve = b.efficiency_curve.expect("curve");
    assert_eq!(curve.name, "Boiler with Minimum Turndown");
    assert_relative_eq!(curve.evaluate(1.0, 0.0), 0.97 + 0.0633 - 0.0333, epsilon = 1e-12);
}

#[test]
fn boiler_errors() {
    let data = boiler_data();
    let mut electric = boiler(300_000.0);
    electric.fuel_type = "Electricity".to_string();
    assert!(matches!(
        standard_minimum_thermal_efficiency(&data, TEMPLATE, &electric),
        Err(ApplyError::NotFound { .. })
    ));

    let mut unsized_boiler = boiler(0.0);
    unsized_boiler.nominal_capacity = SizedValue::default();
    assert!(matches!(
        standard_minimum_thermal_efficiency(&data, TEMPLATE, &unsized_boiler),
        Err(ApplyError::MissingInput { property: "nominal_capacity", .. })
    ));
}

#[test]
fn fuel_type_mapping() {
    assert_eq!(standards_fuel_type("B", "NaturalGas"), "Gas");
    assert_eq!(standards_fuel_type("B", "Electricity"), "Electric");
    assert_eq!(standards_fuel_type("B", "FuelOilNo2"), "Oil");
    // 모르는 연료는 Gas로 본다
    assert_eq!(standards_fuel_type("B", "Propane"), "Gas");
}

fn centrifugal(min: f64, max: f64) -> ReferenceRecord {
    ReferenceRecord::new()
        .with("template", TEMPLATE)
        .with("cooling_type", "WaterCooled")
        .with("compressor_type", "Centrifugal")
        .with("compliance_path", "Path A")
        .with("minimum_capacity", min)
        .with("maximum_capacity", max)
}

fn chiller_data() -> StandardsData {
    StandardsData::from_tables([(
        "chillers",
        vec![
            centrifugal(0.0, 150.0).with("minimum_kilowatts_per_tons", 0.61),
            centrifugal(150.0, 300.0).with("minimum_kilowatts_per_tons", 0.61),
            centrifugal(300.0, 100_000.0).with("minimum_coefficient_of_performance", 6.1),
            ReferenceRecord::new()
                .with("template", TEMPLATE)
                .with("cooling_type", "AirCooled")
                .with("condenser_type", "WithCondenser")
                .with("minimum_capacity", 0.0)
                .with("maximum_capacity", 9999.0)
                .with("minimum_energy_efficiency_ratio", 10.1),
        ],
    )])
}

fn water_cooled(capacity_w: f64) -> Chiller {
    Chiller {
        name: "Chiller WaterCooled Centrifugal".to_string(),
        condenser_type: "WaterCooled".to_string(),
        compressor_type: None,
        reference_capacity: SizedValue::autosized(capacity_w),
        reference_cop: 5.5,
    }
}

#[test]
fn water_cooled_centrifugal_from_name() {
    let data = chiller_data();
    let mut c = water_cooled(1_000_000.0);
    let result = chiller::apply_efficiency(&data, TEMPLATE, &mut c).expect("apply");
    assert_relative_eq!(result.capacity_tons, 284.345, epsilon = 1e-3);
    assert_relative_eq!(result.cop, kw_per_ton_to_cop(0.61), epsilon = 1e-12);
    assert_eq!(c.reference_cop, result.cop);
    assert_eq!(
        result.curves.cap_f_t.as_deref(),
        Some("WaterCooled_Centrifugal_Chiller_GT150_2004_CAPFT")
    );

    let big = chiller::standard_minimum_full_load_efficiency(&data, TEMPLATE, &water_cooled(2_000_000.0))
        .expect("big");
    assert_eq!(big.cop, 6.1);
}

#[test]
fn air_cooled_retries_without_compliance_path() {
    let data = chiller_data();
    let c = Chiller {
        name: "Chiller AirCooled".to_string(),
        condenser_type: "AirCooled".to_string(),
        compressor_type: None,
        reference_capacity: SizedValue::hard(350_000.0),
        reference_cop: 2.8,
    };
    let result = chiller::standard_minimum_full_load_efficiency(&data, TEMPLATE, &c).expect("air");
    assert_relative_eq!(result.cop, eer_to_cop(10.1, None), epsilon = 1e-12);
    assert!(result.criteria.get("compliance_path").is_none());
    assert_eq!(
        result.curves.eir_f_plr.as_deref(),
        Some("AirCooled_Chiller_AllCapacities_2004_2010_EIRFPLR")
    );
}

#[test]
fn chiller_curve_names_by_size() {
    let small = chiller::curve_names("WaterCooled", Some("Centrifugal"), 100.0);
    assert_eq!(
        small.eir_f_t.as_deref(),
        Some("WaterCooled_Centrifugal_Chiller_LT150_2004_EIRFT")
    );
    assert_eq!(chiller::curve_names("Evaporative", None, 100.0), Default::default());
}
