use crate::gas::properties::GasKind;
use crate::gas::segment::{
    size_segment, AcceptancePolicy, CandidatePipe, SegmentSizingInput, SegmentSizingResult,
};

/// 헤더 기하 조건. 유속 한계/거칠기/온도는 드롭 세그먼트에도 공통 적용된다.
#[derive(Debug, Clone)]
pub struct HeaderGeometry {
    /// 헤더 등가 길이 [ft]
    pub equivalent_length_ft: f64,
    /// 최대 허용 관내 유속 [ft/s]
    pub velocity_limit_ft_per_s: f64,
    /// 절대 조도 [ft]
    pub roughness_ft: f64,
    /// 가스 온도 [°F]
    pub temperature_f: f64,
}

/// 헤더 사이징 입력값.
#[derive(Debug, Clone)]
pub struct HeaderSizingInput<'a> {
    pub design_flow_scfm: f64,
    pub inlet_pressure_psig: f64,
    /// 최소 허용 출구압 [psig]. 각 후보의 도달 출구압과 직접 비교한다.
    pub min_outlet_pressure_psig: f64,
    pub geometry: &'a HeaderGeometry,
    pub gas: GasKind,
    pub candidates: &'a [CandidatePipe],
}

/// 헤더 세그먼트를 사이징한다. 드롭과 달리 압력강하 예산이 아니라
/// 도달 출구압 >= 최소 허용 출구압 기준으로 판정하며, 각 행에 출구압을 채운다.
/// 설계유량이 0 이하이거나 포함된 후보가 없으면 결과 없음으로 건너뛴다.
pub fn size_header(input: &HeaderSizingInput) -> Option<SegmentSizingResult> {
    if input.design_flow_scfm <= 0.0 || !input.candidates.iter().any(|c| c.include) {
        return None;
    }
    Some(size_segment(&SegmentSizingInput {
        design_flow_scfm: input.design_flow_scfm,
        length_ft: input.geometry.equivalent_length_ft,
        inlet_pressure_psig: input.inlet_pressure_psig,
        downstream_pressure_psig: input.min_outlet_pressure_psig,
        velocity_limit_ft_per_s: input.geometry.velocity_limit_ft_per_s,
        temperature_f: input.geometry.temperature_f,
        roughness_ft: input.geometry.roughness_ft,
        gas: input.gas,
        policy: AcceptancePolicy::OutletPressureFloor,
        candidates: input.candidates,
    }))
}
