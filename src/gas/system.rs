use serde::{Deserialize, Serialize};

use crate::gas::drops::{size_drops, DemandDrop, DropResult, DropSizingContext};
use crate::gas::header::{size_header, HeaderGeometry, HeaderSizingInput};
use crate::gas::properties::GasKind;
use crate::gas::segment::{CandidatePipe, SegmentSizingResult, SizingTrace};
use crate::gas::tank::{tank_metrics, TankInput, TankMetrics};

/// 시스템 전역 입력값. 압력은 별도 표기가 없으면 게이지 기준이다.
#[derive(Debug, Clone)]
pub struct SystemInputs {
    pub inlet_pressure_psig: f64,
    /// 공급 가능 유량 [scfm]
    pub available_flow_scfm: f64,
    /// 최소 허용 출구압 [psig]
    pub min_outlet_pressure_psig: f64,
    /// 통상 출구압 [psig]. 참고 표시용이며 계산에는 쓰지 않는다.
    pub typical_outlet_pressure_psig: f64,
    /// 수요 안전율 (>= 1)
    pub safety_factor: f64,
    /// 버퍼 탱크 체적 [gal]
    pub tank_volume_gal: f64,
    pub gas: GasKind,
}

/// 공급 능력 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityStatus {
    /// 설계 수요가 0 이하
    NoDemand,
    /// 공급이 설계 수요를 충족
    Ok,
    /// 공급 부족
    Shortfall,
}

/// 첫 활성 드롭의 계산 근거 항목.
#[derive(Debug, Clone)]
pub struct DropTraceEntry {
    pub label: String,
    pub trace: SizingTrace,
}

/// 시스템 수준 진단 트레이스. 표시/디버깅용이며 제어 흐름에는 쓰지 않는다.
#[derive(Debug, Clone)]
pub struct SystemTrace {
    pub header: Option<SizingTrace>,
    /// 설계유량이 양수인 첫 드롭의 근거
    pub first_active_drop: Option<DropTraceEntry>,
}

/// 전체 계산 결과.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// 드롭 사용 유량 합계 [scfm]
    pub total_demand_scfm: f64,
    /// 안전율 반영 설계 수요 [scfm]
    pub design_demand_scfm: f64,
    pub capacity_status: CapacityStatus,
    /// 공급 여유(+)/부족(-) [scfm]
    pub margin_scfm: f64,
    pub header_design_flow_scfm: f64,
    /// 설계유량 0 이하 또는 검토 후보 없음이면 None (오류 아님)
    pub header: Option<SegmentSizingResult>,
    pub drops: Vec<DropResult>,
    /// 탱크 미설치면 None (오류 아님)
    pub tank: Option<TankMetrics>,
    pub trace: SystemTrace,
}

/// 전체 계산을 수행한다: 수요 트리 집계 → 공급 능력 판정 → 헤더 사이징 →
/// 탱크 커버리지 → 결과 조립. 입력만으로 결정되는 순수 계산이며
/// 호출 간 상태를 보관하지 않는다.
pub fn calculate(
    inputs: &SystemInputs,
    geometry: &HeaderGeometry,
    candidates: &[CandidatePipe],
    drops: &[DemandDrop],
) -> CalculationResult {
    let ctx = DropSizingContext {
        inlet_pressure_psig: inputs.inlet_pressure_psig,
        safety_factor: inputs.safety_factor,
        geometry,
        gas: inputs.gas,
        candidates,
    };
    let drop_results = size_drops(&ctx, drops);

    let total_demand_scfm: f64 = drop_results.iter().map(|d| d.used_flow_scfm).sum();
    let design_demand_scfm = total_demand_scfm * inputs.safety_factor;
    let margin_scfm = inputs.available_flow_scfm - design_demand_scfm;
    let capacity_status = if design_demand_scfm <= 0.0 {
        CapacityStatus::NoDemand
    } else if margin_scfm >= 0.0 {
        CapacityStatus::Ok
    } else {
        CapacityStatus::Shortfall
    };

    // 헤더는 실제로 흘릴 수 있는 유량까지만 설계한다.
    let header_design_flow_scfm = inputs.available_flow_scfm.min(design_demand_scfm);
    let header = size_header(&HeaderSizingInput {
        design_flow_scfm: header_design_flow_scfm,
        inlet_pressure_psig: inputs.inlet_pressure_psig,
        min_outlet_pressure_psig: inputs.min_outlet_pressure_psig,
        geometry,
        gas: inputs.gas,
        candidates,
    });

    let tank = tank_metrics(&TankInput {
        tank_volume_gal: inputs.tank_volume_gal,
        inlet_pressure_psig: inputs.inlet_pressure_psig,
        min_outlet_pressure_psig: inputs.min_outlet_pressure_psig,
        design_demand_scfm,
        margin_scfm,
    });

    let trace = SystemTrace {
        header: header.as_ref().and_then(|h| h.trace.clone()),
        first_active_drop: drop_results
            .iter()
            .find(|d| d.design_flow_scfm > 0.0)
            .and_then(|d| {
                d.sizing.trace.clone().map(|trace| DropTraceEntry {
                    label: d.label.clone(),
                    trace,
                })
            }),
    };

    CalculationResult {
        total_demand_scfm,
        design_demand_scfm,
        capacity_status,
        margin_scfm,
        header_design_flow_scfm,
        header,
        drops: drop_results,
        tank,
        trace,
    }
}
