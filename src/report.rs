use std::fmt::Write as _;

use crate::config::DefaultUnits;
use crate::gas::properties::properties;
use crate::gas::segment::{
    Recommendation, RowStatus, SegmentSizingResult, Severity, SizingRow, SizingTrace,
};
use crate::gas::system::{CalculationResult, CapacityStatus, SystemInputs};
use crate::gas::tank::TankMetrics;
use crate::units::*;

/// 계산 결과 전체를 보관/공유용 텍스트 표로 렌더링한다.
/// 내부 단위(psi/scfm/ft/s)로 계산된 값은 여기서 단 한 번 표시 단위로 환산하고,
/// 무한대 커버리지나 추천 불가 같은 경우는 명시적 문구로 적어
/// 수치 필드가 미정의 상태로 남지 않게 한다.
pub fn render(result: &CalculationResult, inputs: &SystemInputs, units: &DefaultUnits) -> String {
    let disp = Display { units };
    let mut out = String::new();

    let _ = writeln!(out, "=== 압축가스 배관망 계산 결과 ===");
    let _ = writeln!(out, "가스: {}", properties(inputs.gas).display_name);
    let _ = writeln!(
        out,
        "입구압 {} / 최소 허용 출구압 {} / 통상 출구압 {}",
        disp.gauge(inputs.inlet_pressure_psig),
        disp.gauge(inputs.min_outlet_pressure_psig),
        disp.gauge(inputs.typical_outlet_pressure_psig)
    );
    let _ = writeln!(
        out,
        "총 수요 {}, 설계 수요 {} (안전율 {:.2})",
        disp.flow(result.total_demand_scfm),
        disp.flow(result.design_demand_scfm),
        inputs.safety_factor
    );
    let _ = writeln!(
        out,
        "공급 {} → 판정: {}, 여유/부족 {}",
        disp.flow(inputs.available_flow_scfm),
        capacity_text(result.capacity_status),
        disp.flow(result.margin_scfm)
    );

    let _ = writeln!(
        out,
        "\n-- 헤더 (설계유량 {}) --",
        disp.flow(result.header_design_flow_scfm)
    );
    match &result.header {
        Some(sizing) => render_segment(&mut out, &disp, sizing, true),
        None => {
            let _ = writeln!(out, "검토 생략 (설계유량 없음 또는 검토 후보 없음)");
        }
    }

    for drop in &result.drops {
        let _ = writeln!(out, "\n-- 드롭: {} --", drop.label);
        let _ = writeln!(
            out,
            "요구 {}, 자식 합계 {} → 사용 {}, 설계 {}",
            disp.flow(drop.declared_flow_scfm),
            disp.flow(drop.sub_total_scfm),
            disp.flow(drop.used_flow_scfm),
            disp.flow(drop.design_flow_scfm)
        );
        if drop.sized_on_children {
            let _ = writeln!(out, "참고: 자식 합계 기준으로 사이징됨");
        }
        render_segment(&mut out, &disp, &drop.sizing, false);

        for sub in &drop.sub_results {
            let _ = writeln!(
                out,
                "  · 서브드롭 {} (설계 {}): {}",
                sub.label,
                disp.flow(sub.design_flow_scfm),
                recommendation_text(&sub.sizing.recommendation)
            );
            for opt in &sub.options {
                let _ = writeln!(
                    out,
                    "      옵션 {:8} {:>12} {:>12}  {}",
                    opt.label,
                    disp.velocity(opt.velocity_ft_per_s),
                    disp.dp(opt.pressure_drop_psi),
                    severity_text(opt.severity)
                );
            }
        }
    }

    let _ = writeln!(out, "\n-- 버퍼 탱크 --");
    match &result.tank {
        Some(tank) => render_tank(&mut out, &disp, tank),
        None => {
            let _ = writeln!(out, "탱크 미설정");
        }
    }

    let _ = writeln!(out, "\n-- 계산 근거 --");
    match &result.trace.header {
        Some(trace) => {
            let _ = writeln!(out, "[헤더]");
            render_trace(&mut out, trace);
        }
        None => {
            let _ = writeln!(out, "[헤더] 근거 없음");
        }
    }
    match &result.trace.first_active_drop {
        Some(entry) => {
            let _ = writeln!(out, "[드롭 {}]", entry.label);
            render_trace(&mut out, &entry.trace);
        }
        None => {
            let _ = writeln!(out, "[드롭] 근거 없음");
        }
    }

    out
}

/// 표시 단위 환산 헬퍼. 환산은 출력 직전 이 한 곳에서만 일어난다.
struct Display<'a> {
    units: &'a DefaultUnits,
}

impl Display<'_> {
    fn gauge(&self, psig: f64) -> String {
        let v = convert_pressure(psig, PressureUnit::Psi, self.units.pressure);
        format!("{:.2} {}(g)", v, pressure_label(self.units.pressure))
    }

    fn absolute(&self, psia: f64) -> String {
        let v = convert_pressure_mode(
            psia,
            PressureUnit::Psi,
            PressureMode::Absolute,
            self.units.pressure,
            PressureMode::Absolute,
        );
        format!("{:.2} {}(a)", v, pressure_label(self.units.pressure))
    }

    fn dp(&self, psi: f64) -> String {
        // 압력강하는 차압이므로 절대/게이지 보정 없이 배율만 적용한다.
        let scale = convert_pressure(1.0, PressureUnit::Psi, self.units.pressure)
            - convert_pressure(0.0, PressureUnit::Psi, self.units.pressure);
        format!("{:.3} {}", psi * scale, pressure_label(self.units.pressure))
    }

    fn flow(&self, scfm: f64) -> String {
        let v = convert_flow(scfm, FlowUnit::Scfm, self.units.flow);
        format!("{:.1} {}", v, flow_label(self.units.flow))
    }

    fn velocity(&self, fps: f64) -> String {
        let v = convert_velocity(fps, VelocityUnit::FootPerSecond, self.units.velocity);
        format!("{:.2} {}", v, velocity_label(self.units.velocity))
    }
}

fn render_segment(out: &mut String, disp: &Display, sizing: &SegmentSizingResult, with_outlet: bool) {
    if sizing.rows.is_empty() {
        let _ = writeln!(out, "비교표 없음 ({})", recommendation_text(&sizing.recommendation));
        return;
    }
    if with_outlet {
        let _ = writeln!(out, "호칭경      내경[in]  유속        강하        출구압      판정");
    } else {
        let _ = writeln!(out, "호칭경      내경[in]  유속        강하        판정");
    }
    for row in &sizing.rows {
        render_row(out, disp, row, with_outlet);
    }
    let _ = writeln!(out, "추천: {}", recommendation_text(&sizing.recommendation));
}

fn render_row(out: &mut String, disp: &Display, row: &SizingRow, with_outlet: bool) {
    if with_outlet {
        let outlet = row
            .outlet_pressure_psia
            .map(|p| disp.absolute(p))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:8}  {:8.3}  {:>12}  {:>12}  {:>12}  {} ({})",
            row.label,
            row.inner_diameter_in,
            disp.velocity(row.velocity_ft_per_s),
            disp.dp(row.pressure_drop_psi),
            outlet,
            status_text(row.status),
            severity_text(row.severity)
        );
    } else {
        let _ = writeln!(
            out,
            "{:8}  {:8.3}  {:>12}  {:>12}  {} ({})",
            row.label,
            row.inner_diameter_in,
            disp.velocity(row.velocity_ft_per_s),
            disp.dp(row.pressure_drop_psi),
            status_text(row.status),
            severity_text(row.severity)
        );
    }
}

fn render_tank(out: &mut String, disp: &Display, tank: &TankMetrics) {
    let _ = writeln!(out, "등가 저장량: {:.1} scf", tank.equivalent_storage_scf);
    if tank.coverage_min.is_infinite() {
        let _ = writeln!(out, "커버 가능 시간: 무제한 (기준 유량 없음)");
    } else {
        let _ = writeln!(
            out,
            "기준 유량 {} → 커버 가능 시간 {:.1} min{}",
            disp.flow(tank.reference_flow_scfm),
            tank.coverage_min,
            if tank.covering_deficit {
                " (공급 부족분 보전 중)"
            } else {
                ""
            }
        );
    }
}

// 계산 근거는 검산 편의를 위해 환산 없이 내부 단위 그대로 적는다.
fn render_trace(out: &mut String, trace: &SizingTrace) {
    let _ = writeln!(out, "  식: {}", trace.formula);
    let _ = writeln!(
        out,
        "  평균압 {:.2} psia, 실유량 {:.2} cfm, 유속 {:.2} ft/s",
        trace.mean_pressure_psia, trace.actual_flow_cfm, trace.velocity_ft_per_s
    );
    if let Some(density) = trace.density_lb_per_ft3 {
        let _ = writeln!(out, "  밀도 {:.4} lbm/ft3", density);
    }
    if let (Some(re), Some(f)) = (trace.reynolds, trace.friction_factor) {
        let _ = writeln!(out, "  Re {:.0}, f {:.4}", re, f);
    }
}

fn capacity_text(status: CapacityStatus) -> &'static str {
    match status {
        CapacityStatus::NoDemand => "수요 없음",
        CapacityStatus::Ok => "적정",
        CapacityStatus::Shortfall => "공급 부족",
    }
}

fn status_text(status: RowStatus) -> &'static str {
    match status {
        RowStatus::Ok => "적합",
        RowStatus::HighVelocity => "유속 초과",
        RowStatus::ExcessiveDrop => "압력강하 초과",
        RowStatus::HighVelocityAndDrop => "유속/압력강하 초과",
    }
}

fn severity_text(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "적합",
        Severity::Warn => "주의",
        Severity::Bad => "불량",
    }
}

fn recommendation_text(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Inactive => "비활성 (유량 없음)".to_string(),
        Recommendation::NoFeasibleSize => "적정 구경 없음".to_string(),
        Recommendation::Size(label) => label.clone(),
    }
}

fn pressure_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Psi | PressureUnit::PsiA => "psi",
        PressureUnit::Bar => "bar",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::MegaPascal => "MPa",
        PressureUnit::KgPerCm2 => "kgf/cm2",
        PressureUnit::Atm => "atm",
    }
}

fn flow_label(unit: FlowUnit) -> &'static str {
    match unit {
        FlowUnit::Scfm => "scfm",
        FlowUnit::Scfh => "scfh",
        FlowUnit::NormalCubicMeterPerHour => "Nm3/h",
        FlowUnit::NormalCubicMeterPerMin => "Nm3/min",
        FlowUnit::NormalLiterPerSecond => "NL/s",
    }
}

fn velocity_label(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::FootPerSecond => "ft/s",
        VelocityUnit::MeterPerSecond => "m/s",
    }
}
