use crate::units::pressure::ATM_PSIA;
use crate::units::volume::{convert_volume, VolumeUnit};

/// 버퍼 리시버 탱크 계산 입력값.
#[derive(Debug, Clone)]
pub struct TankInput {
    /// 탱크 체적 [gal]. 0 이하이면 탱크 미설치로 본다.
    pub tank_volume_gal: f64,
    pub inlet_pressure_psig: f64,
    pub min_outlet_pressure_psig: f64,
    pub design_demand_scfm: f64,
    /// 공급 여유(+)/부족(-) [scfm]
    pub margin_scfm: f64,
}

/// 버퍼 탱크 커버리지 지표.
#[derive(Debug, Clone)]
pub struct TankMetrics {
    /// 입구압에서 최소압까지 블리드할 때 회수되는 표준 상태 등가 저장량 [scf]
    pub equivalent_storage_scf: f64,
    /// 커버리지 산정 기준 유량 [scfm]
    pub reference_flow_scfm: f64,
    /// 커버 가능 시간 [min]. 기준 유량이 0이면 무한대를 그대로 담는다.
    pub coverage_min: f64,
    /// 공급 부족분을 메우는 중인지 여부
    pub covering_deficit: bool,
}

/// 탱크 커버리지 지표를 계산한다. 탱크가 없으면(체적 <= 0) None.
pub fn tank_metrics(input: &TankInput) -> Option<TankMetrics> {
    if input.tank_volume_gal <= 0.0 {
        return None;
    }

    let volume_ft3 = convert_volume(input.tank_volume_gal, VolumeUnit::Gallon, VolumeUnit::CubicFoot);
    let p_in_abs = input.inlet_pressure_psig + ATM_PSIA;
    let p_min_abs = input.min_outlet_pressure_psig + ATM_PSIA;
    let equivalent_storage_scf = volume_ft3 * (p_in_abs - p_min_abs) / ATM_PSIA;

    if input.design_demand_scfm <= 0.0 {
        return Some(TankMetrics {
            equivalent_storage_scf,
            reference_flow_scfm: 0.0,
            coverage_min: f64::INFINITY,
            covering_deficit: false,
        });
    }

    let covering_deficit = input.margin_scfm < 0.0;
    let reference_flow_scfm = if covering_deficit {
        input.margin_scfm.abs()
    } else {
        input.design_demand_scfm
    };
    let coverage_min = if reference_flow_scfm > 0.0 {
        equivalent_storage_scf / reference_flow_scfm
    } else {
        f64::INFINITY
    };

    Some(TankMetrics {
        equivalent_storage_scf,
        reference_flow_scfm,
        coverage_min,
        covering_deficit,
    })
}
