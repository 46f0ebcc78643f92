use serde::{Deserialize, Serialize};

/// 계산 대상 가스 종류. 종류에 따라 적용 유량 상관식이 달라진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasKind {
    /// 압축공기. 반복법(Darcy-Weisbach) 상관식을 사용한다.
    Air,
    /// 연료가스(천연가스 계열). 배관 코드식(폐형식)을 사용한다.
    FuelGas,
}

/// 가스별 물성값.
#[derive(Debug, Clone, Copy)]
pub struct GasProperties {
    pub display_name: &'static str,
    /// 유량 상수. 공기는 기체상수 R [ft·lbf/(lbm·°R)],
    /// 연료가스는 코드식의 유량계수 K로 해석한다.
    pub flow_constant: f64,
    /// 동점성계수 ν [ft²/s]
    pub kinematic_viscosity_ft2_per_s: f64,
}

const AIR: GasProperties = GasProperties {
    display_name: "압축공기",
    flow_constant: 53.35,
    kinematic_viscosity_ft2_per_s: 1.64e-4,
};

const FUEL_GAS: GasProperties = GasProperties {
    display_name: "연료가스",
    flow_constant: 2237.0,
    kinematic_viscosity_ft2_per_s: 1.8e-4,
};

/// 가스 종류에 해당하는 물성값을 돌려준다. 전 종류에 대해 항상 존재한다.
pub fn properties(kind: GasKind) -> &'static GasProperties {
    match kind {
        GasKind::Air => &AIR,
        GasKind::FuelGas => &FUEL_GAS,
    }
}
