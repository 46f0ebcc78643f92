use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 갤런(US)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Gallon,
    CubicFoot,
    CubicMeter,
    Liter,
}

const GAL_PER_FT3: f64 = 7.48052;

fn to_gallon(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Gallon => value,
        VolumeUnit::CubicFoot => value * GAL_PER_FT3,
        VolumeUnit::CubicMeter => value * GAL_PER_FT3 * 35.3147,
        VolumeUnit::Liter => value / 3.78541,
    }
}

fn from_gallon(value_gal: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Gallon => value_gal,
        VolumeUnit::CubicFoot => value_gal / GAL_PER_FT3,
        VolumeUnit::CubicMeter => value_gal / (GAL_PER_FT3 * 35.3147),
        VolumeUnit::Liter => value_gal * 3.78541,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let gal = to_gallon(value, from);
    from_gallon(gal, to)
}
