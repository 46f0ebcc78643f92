use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 피트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Foot,
    Inch,
    Meter,
    Millimeter,
    Centimeter,
}

fn to_foot(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value,
        LengthUnit::Inch => value / 12.0,
        LengthUnit::Meter => value / 0.3048,
        LengthUnit::Millimeter => value / 304.8,
        LengthUnit::Centimeter => value / 30.48,
    }
}

fn from_foot(value_ft: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Foot => value_ft,
        LengthUnit::Inch => value_ft * 12.0,
        LengthUnit::Meter => value_ft * 0.3048,
        LengthUnit::Millimeter => value_ft * 304.8,
        LengthUnit::Centimeter => value_ft * 30.48,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let ft = to_foot(value, from);
    from_foot(ft, to)
}
