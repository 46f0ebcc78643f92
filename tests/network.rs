use gas_network_toolbox::gas::drops::{size_drops, DemandDrop, DropSizingContext, SubDrop};
use gas_network_toolbox::gas::header::HeaderGeometry;
use gas_network_toolbox::gas::properties::GasKind;
use gas_network_toolbox::gas::segment::Recommendation;
use gas_network_toolbox::gas::system::{calculate, CapacityStatus, SystemInputs};
use gas_network_toolbox::gas::tank::{tank_metrics, TankInput};
use gas_network_toolbox::pipe_db;

fn geometry() -> HeaderGeometry {
    HeaderGeometry {
        equivalent_length_ft: 1000.0,
        velocity_limit_ft_per_s: 50.0,
        roughness_ft: 0.00015,
        temperature_f: 70.0,
    }
}

fn inputs(available_flow_scfm: f64, safety_factor: f64) -> SystemInputs {
    SystemInputs {
        inlet_pressure_psig: 130.0,
        available_flow_scfm,
        min_outlet_pressure_psig: 90.0,
        typical_outlet_pressure_psig: 100.0,
        safety_factor,
        tank_volume_gal: 0.0,
        gas: GasKind::Air,
    }
}

fn drop(label: &str, required_flow_scfm: f64, sub_flows: &[f64]) -> DemandDrop {
    DemandDrop {
        id: label.to_string(),
        label: label.to_string(),
        length_ft: 100.0,
        required_flow_scfm,
        required_outlet_pressure_psig: 95.0,
        sub_drops: sub_flows
            .iter()
            .enumerate()
            .map(|(i, flow)| SubDrop {
                id: format!("{label}-{i}"),
                label: format!("{label}-{i}"),
                length_ft: 50.0,
                required_flow_scfm: *flow,
                required_outlet_pressure_psig: 95.0,
            })
            .collect(),
    }
}

#[test]
fn drop_is_sized_on_children_when_their_sum_exceeds_declared() {
    let geometry = geometry();
    let candidates = pipe_db::default_candidates();
    let ctx = DropSizingContext {
        inlet_pressure_psig: 130.0,
        safety_factor: 1.0,
        geometry: &geometry,
        gas: GasKind::Air,
        candidates: &candidates,
    };
    let results = size_drops(&ctx, &[drop("d1", 50.0, &[30.0, 40.0])]);
    let d = &results[0];
    assert!((d.sub_total_scfm - 70.0).abs() < 1e-9);
    assert!((d.used_flow_scfm - 70.0).abs() < 1e-9);
    assert!(d.sized_on_children);
    assert_eq!(d.sub_results.len(), 2);
}

#[test]
fn drop_keeps_declared_flow_when_children_are_smaller() {
    let geometry = geometry();
    let candidates = pipe_db::default_candidates();
    let ctx = DropSizingContext {
        inlet_pressure_psig: 130.0,
        safety_factor: 1.0,
        geometry: &geometry,
        gas: GasKind::Air,
        candidates: &candidates,
    };
    let results = size_drops(&ctx, &[drop("d1", 100.0, &[30.0, 40.0])]);
    let d = &results[0];
    assert!((d.used_flow_scfm - 100.0).abs() < 1e-9);
    assert!(!d.sized_on_children);
}

#[test]
fn sub_drop_options_are_never_empty_when_table_is_not() {
    let geometry = geometry();
    let candidates = pipe_db::default_candidates();
    let ctx = DropSizingContext {
        inlet_pressure_psig: 130.0,
        safety_factor: 1.0,
        geometry: &geometry,
        gas: GasKind::Air,
        candidates: &candidates,
    };
    // 현실적 유량: 적합 행이 있으므로 옵션은 적합 등급으로만 구성된다.
    let results = size_drops(&ctx, &[drop("d1", 0.0, &[60.0])]);
    let options = &results[0].sub_results[0].options;
    assert!(!options.is_empty());
    assert!(options.len() <= 3);

    // 과대 유량: 적합 행이 전혀 없어도 표의 앞 3행이 옵션으로 남는다.
    let results = size_drops(&ctx, &[drop("d2", 0.0, &[100_000.0])]);
    let sub = &results[0].sub_results[0];
    assert_eq!(sub.sizing.recommendation, Recommendation::NoFeasibleSize);
    assert_eq!(sub.options.len(), 3);
}

#[test]
fn capacity_margin_and_status() {
    let geometry = geometry();
    let candidates = pipe_db::default_candidates();
    let drops = [drop("d1", 450.0, &[])];

    let ok = calculate(&inputs(500.0, 1.0), &geometry, &candidates, &drops);
    assert_eq!(ok.capacity_status, CapacityStatus::Ok);
    assert!((ok.margin_scfm - 50.0).abs() < 1e-9);
    assert!((ok.total_demand_scfm - 450.0).abs() < 1e-9);

    let short = calculate(&inputs(400.0, 1.0), &geometry, &candidates, &drops);
    assert_eq!(short.capacity_status, CapacityStatus::Shortfall);
    assert!((short.margin_scfm + 50.0).abs() < 1e-9);
    // 헤더는 공급 가능 유량까지만 설계한다.
    assert!((short.header_design_flow_scfm - 400.0).abs() < 1e-9);
}

#[test]
fn no_demand_skips_header() {
    let geometry = geometry();
    let candidates = pipe_db::default_candidates();
    let result = calculate(&inputs(500.0, 1.2), &geometry, &candidates, &[]);
    assert_eq!(result.capacity_status, CapacityStatus::NoDemand);
    assert!(result.header.is_none());
    assert!(result.trace.header.is_none());
    assert!(result.trace.first_active_drop.is_none());
}

#[test]
fn tank_absent_when_no_volume() {
    assert!(tank_metrics(&TankInput {
        tank_volume_gal: 0.0,
        inlet_pressure_psig: 130.0,
        min_outlet_pressure_psig: 90.0,
        design_demand_scfm: 120.0,
        margin_scfm: 380.0,
    })
    .is_none());
}

#[test]
fn tank_coverage_infinite_without_demand() {
    let metrics = tank_metrics(&TankInput {
        tank_volume_gal: 500.0,
        inlet_pressure_psig: 130.0,
        min_outlet_pressure_psig: 90.0,
        design_demand_scfm: 0.0,
        margin_scfm: 500.0,
    })
    .expect("tank metrics");
    assert!(metrics.coverage_min.is_infinite());
    assert!(!metrics.covering_deficit);
}

#[test]
fn tank_covers_deficit_with_its_magnitude() {
    // 748.052 gal = 100 ft³, 사용 가능 차압 40 psi
    let metrics = tank_metrics(&TankInput {
        tank_volume_gal: 748.052,
        inlet_pressure_psig: 130.0,
        min_outlet_pressure_psig: 90.0,
        design_demand_scfm: 450.0,
        margin_scfm: -50.0,
    })
    .expect("tank metrics");
    assert!(metrics.covering_deficit);
    assert!((metrics.reference_flow_scfm - 50.0).abs() < 1e-9);
    let expected_storage = 100.0 * 40.0 / 14.696;
    assert!((metrics.equivalent_storage_scf - expected_storage).abs() < 1e-6);
    assert!((metrics.coverage_min - expected_storage / 50.0).abs() < 1e-6);
}

#[test]
fn end_to_end_single_drop_scenario() {
    // 입구 130 psig, 공급 500 scfm, 최소 출구압 90 psig, 안전율 1.2,
    // 드롭 1개(100 ft, 95 psig, 100 scfm), 스케줄 40 전 구경, 공기.
    let geometry = geometry();
    let candidates = pipe_db::default_candidates();
    let drops = [drop("main", 100.0, &[])];
    let result = calculate(&inputs(500.0, 1.2), &geometry, &candidates, &drops);

    assert!((result.total_demand_scfm - 100.0).abs() < 1e-9);
    assert!((result.design_demand_scfm - 120.0).abs() < 1e-9);
    assert_eq!(result.capacity_status, CapacityStatus::Ok);
    assert!((result.margin_scfm - 380.0).abs() < 1e-9);
    assert!((result.header_design_flow_scfm - 120.0).abs() < 1e-9);

    // 드롭은 2" 미만 구경으로 수렴해야 한다 (유속/압력강하 모두 여유).
    let drop_result = &result.drops[0];
    let label = match &drop_result.sizing.recommendation {
        Recommendation::Size(label) => label.clone(),
        other => panic!("드롭 추천이 있어야 함: {other:?}"),
    };
    let spec = pipe_db::find_pipe(&label).expect("추천 구경이 치수표에 존재");
    assert!(spec.inner_diameter_in < 2.0);

    // 헤더 결과가 존재하고 추천 구경이 있어야 한다.
    let header = result.header.as_ref().expect("header result");
    assert!(matches!(header.recommendation, Recommendation::Size(_)));
    assert!(header.rows.iter().all(|r| r.outlet_pressure_psia.is_some()));

    // 진단 트레이스: 헤더와 첫 활성 드롭 양쪽의 근거가 남는다.
    assert!(result.trace.header.is_some());
    let entry = result.trace.first_active_drop.as_ref().expect("drop trace");
    assert_eq!(entry.label, "main");
}
