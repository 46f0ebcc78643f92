use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
    Kelvin,
    Rankine,
}

/// 주어진 값을 랭킨으로 변환한다.
pub fn to_rankine(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value + 459.67,
        TemperatureUnit::Celsius => (value + 273.15) * 9.0 / 5.0,
        TemperatureUnit::Kelvin => value * 9.0 / 5.0,
        TemperatureUnit::Rankine => value,
    }
}

/// 랭킨 값을 원하는 단위로 변환한다.
pub fn from_rankine(value_r: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value_r - 459.67,
        TemperatureUnit::Celsius => value_r * 5.0 / 9.0 - 273.15,
        TemperatureUnit::Kelvin => value_r * 5.0 / 9.0,
        TemperatureUnit::Rankine => value_r,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let r = to_rankine(value, from);
    from_rankine(r, to)
}
