use serde::{Deserialize, Serialize};

/// 표준 상태 체적 유량 단위. 내부 기준은 scfm이다.
/// 모든 값이 표준 상태 기준이므로 변환은 순수 배율로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    Scfm,
    Scfh,
    NormalCubicMeterPerHour,
    NormalCubicMeterPerMin,
    NormalLiterPerSecond,
}

const CF_PER_M3: f64 = 35.3147;

fn to_scfm(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::Scfm => value,
        FlowUnit::Scfh => value / 60.0,
        FlowUnit::NormalCubicMeterPerHour => value * CF_PER_M3 / 60.0,
        FlowUnit::NormalCubicMeterPerMin => value * CF_PER_M3,
        FlowUnit::NormalLiterPerSecond => value * CF_PER_M3 * 60.0 / 1000.0,
    }
}

fn from_scfm(value_scfm: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::Scfm => value_scfm,
        FlowUnit::Scfh => value_scfm * 60.0,
        FlowUnit::NormalCubicMeterPerHour => value_scfm * 60.0 / CF_PER_M3,
        FlowUnit::NormalCubicMeterPerMin => value_scfm / CF_PER_M3,
        FlowUnit::NormalLiterPerSecond => value_scfm * 1000.0 / (CF_PER_M3 * 60.0),
    }
}

/// 표준 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let scfm = to_scfm(value, from);
    from_scfm(scfm, to)
}
