use serde::{Deserialize, Serialize};

use crate::gas::header::HeaderGeometry;
use crate::gas::properties::GasKind;
use crate::gas::segment::{
    size_segment, AcceptancePolicy, CandidatePipe, SegmentSizingInput, SegmentSizingResult,
    Severity, SizingRow,
};

/// 서브드롭 수요 노드. 트리는 드롭→서브드롭 2단으로 고정이며 더 내려가지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubDrop {
    pub id: String,
    pub label: String,
    /// 공급 세그먼트 길이 [ft]
    pub length_ft: f64,
    /// 요구 유량 [scfm]
    pub required_flow_scfm: f64,
    /// 요구 출구압 [psig]
    pub required_outlet_pressure_psig: f64,
}

/// 드롭 수요 노드. 자기 요구 유량과 자식 합계 중 큰 쪽으로 사이징한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandDrop {
    pub id: String,
    pub label: String,
    pub length_ft: f64,
    pub required_flow_scfm: f64,
    pub required_outlet_pressure_psig: f64,
    #[serde(default)]
    pub sub_drops: Vec<SubDrop>,
}

/// 서브드롭 한 개의 사이징 결과.
#[derive(Debug, Clone)]
pub struct SubDropResult {
    pub id: String,
    pub label: String,
    pub design_flow_scfm: f64,
    pub sizing: SegmentSizingResult,
    /// 표시용 추천 옵션. 적합(ok) 등급 우선으로 최대 3개,
    /// 적합 행이 없으면 표의 앞 3행을 그대로 넣어 항상 비지 않게 한다.
    pub options: Vec<SizingRow>,
}

/// 드롭 한 개의 사이징 결과. 자식 결과를 내장한다.
#[derive(Debug, Clone)]
pub struct DropResult {
    pub id: String,
    pub label: String,
    pub declared_flow_scfm: f64,
    pub sub_total_scfm: f64,
    /// max(자기 요구 유량, 자식 합계)
    pub used_flow_scfm: f64,
    pub design_flow_scfm: f64,
    /// 자식 합계가 자기 요구 유량을 넘어 자식 기준으로 사이징되었음을 알리는
    /// 참고 플래그. 오류 조건이 아니다.
    pub sized_on_children: bool,
    pub sizing: SegmentSizingResult,
    pub sub_results: Vec<SubDropResult>,
}

/// 드롭/서브드롭 공통 사이징 조건.
#[derive(Debug, Clone)]
pub struct DropSizingContext<'a> {
    pub inlet_pressure_psig: f64,
    /// 수요 안전율 (>= 1)
    pub safety_factor: f64,
    pub geometry: &'a HeaderGeometry,
    pub gas: GasKind,
    pub candidates: &'a [CandidatePipe],
}

/// 수요 트리를 입력 순서대로 순회하며 각 노드의 설계유량을 상향 집계하고
/// 노드별 공급 세그먼트를 사이징한다.
pub fn size_drops(ctx: &DropSizingContext, drops: &[DemandDrop]) -> Vec<DropResult> {
    drops.iter().map(|drop| size_one_drop(ctx, drop)).collect()
}

fn size_one_drop(ctx: &DropSizingContext, drop: &DemandDrop) -> DropResult {
    let sub_total: f64 = drop.sub_drops.iter().map(|s| s.required_flow_scfm).sum();
    let used_flow = drop.required_flow_scfm.max(sub_total);
    let design_flow = used_flow * ctx.safety_factor;
    let sized_on_children = sub_total > drop.required_flow_scfm && drop.required_flow_scfm >= 0.0;

    let sizing = size_leg(
        ctx,
        design_flow,
        drop.length_ft,
        drop.required_outlet_pressure_psig,
    );

    let sub_results = drop
        .sub_drops
        .iter()
        .map(|sub| {
            let sub_design = sub.required_flow_scfm * ctx.safety_factor;
            let sub_sizing = size_leg(
                ctx,
                sub_design,
                sub.length_ft,
                sub.required_outlet_pressure_psig,
            );
            let options = presentable_options(&sub_sizing.rows);
            SubDropResult {
                id: sub.id.clone(),
                label: sub.label.clone(),
                design_flow_scfm: sub_design,
                sizing: sub_sizing,
                options,
            }
        })
        .collect();

    DropResult {
        id: drop.id.clone(),
        label: drop.label.clone(),
        declared_flow_scfm: drop.required_flow_scfm,
        sub_total_scfm: sub_total,
        used_flow_scfm: used_flow,
        design_flow_scfm: design_flow,
        sized_on_children,
        sizing,
        sub_results,
    }
}

fn size_leg(
    ctx: &DropSizingContext,
    design_flow_scfm: f64,
    length_ft: f64,
    required_outlet_pressure_psig: f64,
) -> SegmentSizingResult {
    size_segment(&SegmentSizingInput {
        design_flow_scfm,
        length_ft,
        inlet_pressure_psig: ctx.inlet_pressure_psig,
        downstream_pressure_psig: required_outlet_pressure_psig,
        velocity_limit_ft_per_s: ctx.geometry.velocity_limit_ft_per_s,
        temperature_f: ctx.geometry.temperature_f,
        roughness_ft: ctx.geometry.roughness_ft,
        gas: ctx.gas,
        policy: AcceptancePolicy::PressureDropBudget,
        candidates: ctx.candidates,
    })
}

/// 적합 등급 행을 후보 순서대로 최대 3개 고르고,
/// 하나도 없으면 표의 앞 3행으로 대체해 차선책이라도 보여준다.
fn presentable_options(rows: &[SizingRow]) -> Vec<SizingRow> {
    let ok_rows: Vec<SizingRow> = rows
        .iter()
        .filter(|r| r.severity == Severity::Ok)
        .take(3)
        .cloned()
        .collect();
    if !ok_rows.is_empty() {
        ok_rows
    } else {
        rows.iter().take(3).cloned().collect()
    }
}
