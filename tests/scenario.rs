use gas_network_toolbox::scenario::Scenario;

const SI_SCENARIO: &str = r#"
[units]
pressure = "Bar"
flow = "NormalCubicMeterPerHour"
length = "Meter"
temperature = "Celsius"
velocity = "MeterPerSecond"
volume = "Liter"

[system]
inlet_pressure = 9.0
available_flow = 850.0
min_outlet_pressure = 6.2
typical_outlet_pressure = 6.9
safety_factor = 1.2
tank_volume = 2000.0
gas = "Air"

[header]
equivalent_length = 300.0
velocity_limit = 15.0
roughness = 0.000045
temperature = 21.0

[[drops]]
label = "조립동"
length = 30.0
required_flow = 170.0
required_outlet_pressure = 6.5

[[drops.sub_drops]]
label = "조립동-라인1"
length = 10.0
required_flow = 90.0
required_outlet_pressure = 6.5
"#;

#[test]
fn si_scenario_converts_once_into_engine_units() {
    let scenario: Scenario = toml::from_str(SI_SCENARIO).expect("scenario parse");
    let (inputs, geometry, candidates, drops) = scenario.to_engine();

    // 9 bar g → psi g
    assert!((inputs.inlet_pressure_psig - 9.0 * 14.5038).abs() < 1e-3);
    // 850 Nm3/h → scfm
    assert!((inputs.available_flow_scfm - 850.0 * 35.3147 / 60.0).abs() < 1e-3);
    // 2000 L → gal
    assert!((inputs.tank_volume_gal - 2000.0 / 3.78541).abs() < 1e-3);

    // 300 m → ft, 15 m/s → ft/s, 21 °C → °F
    assert!((geometry.equivalent_length_ft - 300.0 / 0.3048).abs() < 1e-6);
    assert!((geometry.velocity_limit_ft_per_s - 15.0 / 0.3048).abs() < 1e-6);
    assert!((geometry.temperature_f - 69.8).abs() < 1e-9);

    // 후보 목록을 생략하면 스케줄 40 전 구경이 들어온다.
    assert_eq!(candidates.len(), 12);
    assert!(candidates.iter().all(|c| c.include));

    assert_eq!(drops.len(), 1);
    let d = &drops[0];
    assert_eq!(d.id, "조립동");
    assert!((d.length_ft - 30.0 / 0.3048).abs() < 1e-6);
    assert_eq!(d.sub_drops.len(), 1);
    assert!((d.sub_drops[0].required_flow_scfm - 90.0 * 35.3147 / 60.0).abs() < 1e-3);
}

#[test]
fn explicit_candidates_override_defaults() {
    let doc = r#"
[system]
inlet_pressure = 130.0
available_flow = 500.0
min_outlet_pressure = 90.0
safety_factor = 1.2
gas = "FuelGas"

[header]
equivalent_length = 1000.0
velocity_limit = 50.0
roughness = 0.00015
temperature = 70.0

[[candidates]]
label = "2\""
inner_diameter_in = 2.067

[[candidates]]
label = "3\""
inner_diameter_in = 3.068
include = false
"#;
    let scenario: Scenario = toml::from_str(doc).expect("scenario parse");
    let (inputs, _, candidates, drops) = scenario.to_engine();

    // units 테이블 생략 시 내부 단위 그대로 해석한다.
    assert!((inputs.inlet_pressure_psig - 130.0).abs() < 1e-9);
    assert!((inputs.tank_volume_gal - 0.0).abs() < 1e-9);
    assert!(drops.is_empty());

    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].include);
    assert!(!candidates[1].include);
}
