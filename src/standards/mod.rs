//! 기준 테이블 데이터 모델과 용량 구간 조회.
//!
//! 데이터셋은 한 번 로드된 뒤 변경되지 않으며, 필요한 곳에 참조로 전달한다.

pub mod criteria;
pub mod curve;
pub mod dataset;
pub mod export;
pub mod lookup;
pub mod record;
pub mod value;

pub use criteria::SearchCriteria;
pub use curve::{find_curve, Curve, CurveForm};
pub use dataset::{DatasetError, StandardsData};
pub use lookup::{find_record, find_record_with, find_records, max_value, BracketPolicy, LookupOptions};
pub use record::ReferenceRecord;
pub use value::FieldValue;
