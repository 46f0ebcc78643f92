//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod length;
pub mod pressure;
pub mod temperature;
pub mod velocity;
pub mod volume;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, convert_pressure_mode, PressureMode, PressureUnit, ATM_PSIA};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};
