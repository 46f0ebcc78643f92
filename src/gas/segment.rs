use serde::{Deserialize, Serialize};

use crate::gas::friction::friction_factor;
use crate::gas::properties::{properties, GasKind};
use crate::units::pressure::ATM_PSIA;
use crate::units::temperature::{to_rankine, TemperatureUnit};

/// 허용 압력강하 하한 [psi]. 0 나눗셈 퇴화를 막기 위한 바닥값.
const MIN_ALLOWED_DROP_PSI: f64 = 1e-6;
/// 중력 환산계수 [lbm·ft/(lbf·s²)]
const G_C: f64 = 32.174;
/// 압축공기 반복 계산 패스 수. 수렴 판정 없이 기준 계산서와 동일하게 고정한다.
const AIR_PASSES: usize = 5;

/// 검토 후보 배관 한 종. 목록 순서가 곧 선호 순서이며,
/// "가장 작은 적정 배관" 의미를 위해 내경 오름차순으로 넘겨야 한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePipe {
    /// 호칭경 표기 (예: "1\"", "1-1/2\"")
    pub label: String,
    /// 내경 [in]
    pub inner_diameter_in: f64,
    /// 검토 대상 포함 여부
    pub include: bool,
}

/// 후보 한 종에 대한 판정 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Ok,
    HighVelocity,
    ExcessiveDrop,
    HighVelocityAndDrop,
}

/// 부적합 후보가 기준에서 얼마나 벗어났는지 구분하는 3단계 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Bad,
}

/// 후보 한 종의 평가 결과 행.
#[derive(Debug, Clone)]
pub struct SizingRow {
    pub label: String,
    pub inner_diameter_in: f64,
    pub velocity_ft_per_s: f64,
    pub pressure_drop_psi: f64,
    /// 도달 출구압 [psia]. 헤더 평가(출구압 기준 정책)에서만 채운다.
    pub outlet_pressure_psia: Option<f64>,
    pub status: RowStatus,
    pub severity: Severity,
}

/// 세그먼트 추천 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// 설계유량이 0 이하라 검토 대상이 아님.
    Inactive,
    /// 모든 후보가 기준 미달.
    NoFeasibleSize,
    /// 기준을 만족하는 첫 후보의 호칭경.
    Size(String),
}

/// 추천 후보에 대한 계산 근거. 진단 표시용이며 제어 흐름에는 쓰지 않는다.
#[derive(Debug, Clone)]
pub struct SizingTrace {
    pub formula: &'static str,
    pub mean_pressure_psia: f64,
    /// 밀도 [lbm/ft³]. 연료가스 폐형식에서는 계산하지 않는다.
    pub density_lb_per_ft3: Option<f64>,
    /// 운전 조건 실유량 [cfm]
    pub actual_flow_cfm: f64,
    pub velocity_ft_per_s: f64,
    pub reynolds: Option<f64>,
    pub friction_factor: Option<f64>,
}

/// 세그먼트 사이징 결과. 비교표 전체와 추천 후보, 계산 근거를 담는다.
#[derive(Debug, Clone)]
pub struct SegmentSizingResult {
    /// 후보 순서 그대로의 비교표 (include=false 후보는 제외)
    pub rows: Vec<SizingRow>,
    pub recommendation: Recommendation,
    /// 추천 행. 적합 후보가 없으면 첫 평가 행을 표시용으로 넣는다.
    pub representative: Option<SizingRow>,
    /// 추천 후보에 대해서만 기록한다.
    pub trace: Option<SizingTrace>,
}

/// 압력 기준 판정 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptancePolicy {
    /// 허용 압력강하 예산과 비교 (드롭/서브드롭)
    PressureDropBudget,
    /// 도달 출구압을 최소 허용 출구압과 직접 비교 (헤더)
    OutletPressureFloor,
}

/// 세그먼트 사이징 입력값. 유량은 안전율이 이미 반영된 표준 유량이다.
#[derive(Debug, Clone)]
pub struct SegmentSizingInput<'a> {
    pub design_flow_scfm: f64,
    pub length_ft: f64,
    pub inlet_pressure_psig: f64,
    /// 하류 기준 압력 [psig]. 예산 정책이면 허용 강하 산출 기준,
    /// 출구압 정책이면 최소 허용 출구압.
    pub downstream_pressure_psig: f64,
    pub velocity_limit_ft_per_s: f64,
    pub temperature_f: f64,
    pub roughness_ft: f64,
    pub gas: GasKind,
    pub policy: AcceptancePolicy,
    pub candidates: &'a [CandidatePipe],
}

struct CandidateEval {
    velocity_ft_per_s: f64,
    pressure_drop_psi: f64,
    outlet_pressure_psia: f64,
    trace: SizingTrace,
}

/// 후보 배관 목록을 평가해 비교표와 추천 호칭경을 돌려준다.
///
/// 설계유량이 0 이하이면 빈 표와 함께 즉시 비활성 결과를 돌려준다.
pub fn size_segment(input: &SegmentSizingInput) -> SegmentSizingResult {
    if input.design_flow_scfm <= 0.0 {
        return SegmentSizingResult {
            rows: Vec::new(),
            recommendation: Recommendation::Inactive,
            representative: None,
            trace: None,
        };
    }

    let p1_abs = input.inlet_pressure_psig + ATM_PSIA;
    let p2_ref_abs = input.downstream_pressure_psig + ATM_PSIA;
    let allowed_drop_psi = (p1_abs - p2_ref_abs).max(MIN_ALLOWED_DROP_PSI);

    let mut rows = Vec::new();
    let mut traces = Vec::new();
    for candidate in input.candidates.iter().filter(|c| c.include) {
        let eval = match input.gas {
            GasKind::Air => evaluate_air(input, candidate.inner_diameter_in, p1_abs, p2_ref_abs),
            GasKind::FuelGas => evaluate_fuel_gas(input, candidate.inner_diameter_in, p1_abs),
        };

        let velocity_ok = eval.velocity_ft_per_s <= input.velocity_limit_ft_per_s;
        let pressure_ok = match input.policy {
            AcceptancePolicy::PressureDropBudget => eval.pressure_drop_psi <= allowed_drop_psi,
            AcceptancePolicy::OutletPressureFloor => eval.outlet_pressure_psia >= p2_ref_abs,
        };
        let status = classify(velocity_ok, pressure_ok);
        let severity = severity_of(
            status,
            eval.velocity_ft_per_s,
            input.velocity_limit_ft_per_s,
            eval.pressure_drop_psi,
            allowed_drop_psi,
        );

        rows.push(SizingRow {
            label: candidate.label.clone(),
            inner_diameter_in: candidate.inner_diameter_in,
            velocity_ft_per_s: eval.velocity_ft_per_s,
            pressure_drop_psi: eval.pressure_drop_psi,
            outlet_pressure_psia: match input.policy {
                AcceptancePolicy::OutletPressureFloor => Some(eval.outlet_pressure_psia),
                AcceptancePolicy::PressureDropBudget => None,
            },
            status,
            severity,
        });
        traces.push(eval.trace);
    }

    match rows.iter().position(|r| r.status == RowStatus::Ok) {
        Some(idx) => SegmentSizingResult {
            recommendation: Recommendation::Size(rows[idx].label.clone()),
            representative: Some(rows[idx].clone()),
            trace: Some(traces[idx].clone()),
            rows,
        },
        None => SegmentSizingResult {
            recommendation: Recommendation::NoFeasibleSize,
            representative: rows.first().cloned(),
            trace: None,
            rows,
        },
    }
}

/// 압축공기: Darcy-Weisbach 기반 고정 5패스 반복.
/// 출구압 추정치를 하류 기준 압력으로 시드한 뒤 평균압 → 밀도 → 실유량 →
/// 유속 → Re → f → 압력강하 → 출구압 갱신을 반복한다.
fn evaluate_air(
    input: &SegmentSizingInput,
    diameter_in: f64,
    p1_abs: f64,
    p2_ref_abs: f64,
) -> CandidateEval {
    let props = properties(GasKind::Air);
    let t_rankine = to_rankine(input.temperature_f, TemperatureUnit::Fahrenheit);
    let d_ft = diameter_in / 12.0;
    let area_ft2 = std::f64::consts::PI * d_ft * d_ft / 4.0;

    let mut p2_abs = p2_ref_abs.max(0.0);
    let mut velocity = 0.0;
    let mut pressure_drop = 0.0;
    let mut mean_abs = p1_abs;
    let mut density = 0.0;
    let mut actual_cfm = 0.0;
    let mut reynolds = 0.0;
    let mut friction = 0.0;
    for _ in 0..AIR_PASSES {
        mean_abs = (p1_abs + p2_abs) / 2.0;
        density = mean_abs * 144.0 / (props.flow_constant * t_rankine);
        actual_cfm = input.design_flow_scfm * ATM_PSIA / mean_abs;
        velocity = actual_cfm / area_ft2 / 60.0;
        reynolds = velocity * d_ft / props.kinematic_viscosity_ft2_per_s;
        friction = friction_factor(input.roughness_ft, d_ft, reynolds);
        let drop_psf_per_ft = friction * density * velocity * velocity / (2.0 * G_C * d_ft);
        pressure_drop = drop_psf_per_ft * input.length_ft / 144.0;
        p2_abs = (p1_abs - pressure_drop).max(0.0);
    }

    CandidateEval {
        velocity_ft_per_s: velocity,
        pressure_drop_psi: pressure_drop,
        outlet_pressure_psia: p2_abs,
        trace: SizingTrace {
            formula: "압축공기 Darcy-Weisbach 5패스 반복",
            mean_pressure_psia: mean_abs,
            density_lb_per_ft3: Some(density),
            actual_flow_cfm: actual_cfm,
            velocity_ft_per_s: velocity,
            reynolds: Some(reynolds),
            friction_factor: Some(friction),
        },
    }
}

/// 연료가스: 배관 코드식 Q = K·d^2.582·((P1²-P2²)/L)^0.522 를
/// P2²에 대해 역산한 폐형식. P2²가 음수로 떨어지면 해당 후보가 이 유량을
/// 감당하지 못하는 것이므로 절대압 0으로 클램프해 최대 압력강하로 취급한다.
fn evaluate_fuel_gas(input: &SegmentSizingInput, diameter_in: f64, p1_abs: f64) -> CandidateEval {
    let props = properties(GasKind::FuelGas);
    let d_ft = diameter_in / 12.0;
    let area_ft2 = std::f64::consts::PI * d_ft * d_ft / 4.0;

    let flow_cfh = input.design_flow_scfm * 60.0;
    let term = (flow_cfh / (props.flow_constant * diameter_in.powf(2.582))).powf(1.0 / 0.522);
    let p2_sq = p1_abs * p1_abs - term * input.length_ft;
    let p2_abs = if p2_sq > 0.0 { p2_sq.sqrt() } else { 0.0 };
    let pressure_drop = p1_abs - p2_abs;

    // 유속은 평균압 기준 실유량으로 환산해 구한다 (압축성 보정).
    let mean_abs = (p1_abs + p2_abs) / 2.0;
    let actual_cfm = input.design_flow_scfm * ATM_PSIA / mean_abs;
    let velocity = actual_cfm / area_ft2 / 60.0;

    CandidateEval {
        velocity_ft_per_s: velocity,
        pressure_drop_psi: pressure_drop,
        outlet_pressure_psia: p2_abs,
        trace: SizingTrace {
            formula: "연료가스 배관 코드식 (폐형식)",
            mean_pressure_psia: mean_abs,
            density_lb_per_ft3: None,
            actual_flow_cfm: actual_cfm,
            velocity_ft_per_s: velocity,
            reynolds: None,
            friction_factor: None,
        },
    }
}

fn classify(velocity_ok: bool, pressure_ok: bool) -> RowStatus {
    match (velocity_ok, pressure_ok) {
        (true, true) => RowStatus::Ok,
        (false, true) => RowStatus::HighVelocity,
        (true, false) => RowStatus::ExcessiveDrop,
        (false, false) => RowStatus::HighVelocityAndDrop,
    }
}

/// 부적합 행의 등급 산정. 유속이 한계의 1.5배를 넘거나
/// 압력강하가 허용치의 1.5배를 넘으면 Bad, 그 외 부적합은 Warn.
fn severity_of(
    status: RowStatus,
    velocity: f64,
    velocity_limit: f64,
    pressure_drop: f64,
    allowed_drop: f64,
) -> Severity {
    if status == RowStatus::Ok {
        return Severity::Ok;
    }
    let velocity_bad = velocity > 1.5 * velocity_limit;
    let pressure_bad = allowed_drop > 0.0 && pressure_drop > 1.5 * allowed_drop;
    if velocity_bad || pressure_bad {
        Severity::Bad
    } else {
        Severity::Warn
    }
}
