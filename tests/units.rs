use gas_network_toolbox::units::{
    convert_flow, convert_length, convert_pressure, convert_pressure_mode, convert_temperature,
    convert_volume, FlowUnit, LengthUnit, PressureMode, PressureUnit, TemperatureUnit, VolumeUnit,
    ATM_PSIA,
};

#[test]
fn pressure_bar_round_trip() {
    let psi = convert_pressure(1.0, PressureUnit::Bar, PressureUnit::Psi);
    assert!((psi - 14.5038).abs() < 1e-4);
    let back = convert_pressure(psi, PressureUnit::Psi, PressureUnit::Bar);
    assert!((back - 1.0).abs() < 1e-9);
}

#[test]
fn gauge_absolute_offset() {
    // 0 psig == 대기압 psia
    let psia = convert_pressure_mode(
        0.0,
        PressureUnit::Psi,
        PressureMode::Gauge,
        PressureUnit::Psi,
        PressureMode::Absolute,
    );
    assert!((psia - ATM_PSIA).abs() < 1e-9);

    let psig = convert_pressure(14.696, PressureUnit::PsiA, PressureUnit::Psi);
    assert!(psig.abs() < 1e-9);
}

#[test]
fn flow_scfh_to_scfm() {
    let scfm = convert_flow(600.0, FlowUnit::Scfh, FlowUnit::Scfm);
    assert!((scfm - 10.0).abs() < 1e-9);
    let nm3h = convert_flow(10.0, FlowUnit::Scfm, FlowUnit::NormalCubicMeterPerHour);
    assert!((nm3h - 600.0 / 35.3147).abs() < 1e-6);
}

#[test]
fn length_inch_to_foot() {
    let ft = convert_length(24.0, LengthUnit::Inch, LengthUnit::Foot);
    assert!((ft - 2.0).abs() < 1e-9);
    let mm = convert_length(1.0, LengthUnit::Foot, LengthUnit::Millimeter);
    assert!((mm - 304.8).abs() < 1e-9);
}

#[test]
fn temperature_fahrenheit_rankine() {
    let r = convert_temperature(70.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Rankine);
    assert!((r - 529.67).abs() < 1e-9);
    let c = convert_temperature(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
    assert!((c - 100.0).abs() < 1e-9);
}

#[test]
fn volume_gallon_cubic_foot() {
    let ft3 = convert_volume(748.052, VolumeUnit::Gallon, VolumeUnit::CubicFoot);
    assert!((ft3 - 100.0).abs() < 1e-6);
}
