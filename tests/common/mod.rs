//! 통합 테스트 공용 기준표 픽스처.
#![allow(dead_code)]

use building_standards_toolbox::standards::{ReferenceRecord, StandardsData};

pub const TEMPLATE: &str = "90.1-2013";

/// 4극 밀폐형 전동기 레코드. 구간 하한이 그 레코드 효율의 명판 마력이다.
pub fn motor(min: f64, max: f64, efficiency: f64) -> ReferenceRecord {
    ReferenceRecord::new()
        .with("template", TEMPLATE)
        .with("number_of_poles", 4.0)
        .with("type", "Enclosed")
        .with("minimum_capacity", min)
        .with("maximum_capacity", max)
        .with("nominal_full_load_efficiency", efficiency)
}

pub fn motors() -> Vec<ReferenceRecord> {
    vec![
        motor(0.0, 1.0, 0.80),
        motor(1.0, 1.5, 0.855),
        motor(1.5, 2.0, 0.865),
        motor(2.0, 3.0, 0.865),
        motor(3.0, 5.0, 0.895),
        motor(5.0, 7.5, 0.895),
        motor(7.5, 10.0, 0.917),
        motor(10.0, 15.0, 0.917),
        motor(15.0, 9999.0, 0.924),
    ]
}

pub fn motor_data() -> StandardsData {
    StandardsData::from_tables([("motors", motors())])
}
