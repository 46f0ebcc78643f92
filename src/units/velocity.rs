use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 ft/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    FootPerSecond,
    MeterPerSecond,
}

fn to_fps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::FootPerSecond => value,
        VelocityUnit::MeterPerSecond => value / 0.3048,
    }
}

fn from_fps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::FootPerSecond => value,
        VelocityUnit::MeterPerSecond => value * 0.3048,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_fps(value, from);
    from_fps(base, to)
}
