//! 단위 정의 및 변환 모듈 모음. 기준 데이터의 IP 단위와 모델의 SI 단위를 오간다.

pub mod conductance;
pub mod heat_transfer;
pub mod length;
pub mod power;
pub mod power_per_flow;
pub mod pressure;
pub mod thermal_resistance;
pub mod volume;
pub mod volume_flow;

pub use conductance::{convert_conductance, ConductanceUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use power_per_flow::{convert_power_per_flow, PowerPerFlowUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use thermal_resistance::{convert_thermal_resistance, ThermalResistanceUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use volume_flow::{convert_volume_flow, VolumeFlowUnit};
