//! 건축물 에너지 기준표 조회와 설비/외피 기준 적용 로직. CLI는 얇은 껍데기로 두고 계산은 라이브러리에 둔다.

pub mod app;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod efficiency;
pub mod envelope;
pub mod hvac;
pub mod quantity;
pub mod standards;
pub mod units;
