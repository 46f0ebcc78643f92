use serde::{Deserialize, Serialize};

/// 대기압 [psia]. 표준 상태 환산과 게이지/절대 변환의 기준값.
pub const ATM_PSIA: f64 = 14.696;

/// 게이지/절대압을 구분하는 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureMode {
    Gauge,
    Absolute,
}

/// 압력 단위. 내부 기준은 항상 psi(게이지 기준)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    PsiA,
    Bar,
    KiloPascal,
    MegaPascal,
    KgPerCm2,
    Atm,
}

const PSI_PER_BAR: f64 = 14.5038;
const PSI_PER_KPA: f64 = 0.145038;
const PSI_PER_KGCM2: f64 = 14.2233;

/// 주어진 압력을 psi(게이지)로 변환한다.
/// 절대압 단위는 대기압(14.696 psia)을 보정하여 게이지로 환산한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::PsiA => value - ATM_PSIA,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KiloPascal => value * PSI_PER_KPA,
        PressureUnit::MegaPascal => value * PSI_PER_KPA * 1000.0,
        PressureUnit::KgPerCm2 => value * PSI_PER_KGCM2,
        // atm 은 절대압으로 간주
        PressureUnit::Atm => value * ATM_PSIA - ATM_PSIA,
    }
}

/// psi(게이지) 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::PsiA => value_psi + ATM_PSIA,
        PressureUnit::Bar => value_psi / PSI_PER_BAR,
        PressureUnit::KiloPascal => value_psi / PSI_PER_KPA,
        PressureUnit::MegaPascal => value_psi / (PSI_PER_KPA * 1000.0),
        PressureUnit::KgPerCm2 => value_psi / PSI_PER_KGCM2,
        PressureUnit::Atm => (value_psi + ATM_PSIA) / ATM_PSIA,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}

/// 게이지/절대 모드를 포함한 압력 변환. 내부에서 psia 기준으로 처리한다.
pub fn convert_pressure_mode(
    value: f64,
    from_unit: PressureUnit,
    from_mode: PressureMode,
    to_unit: PressureUnit,
    to_mode: PressureMode,
) -> f64 {
    let base = match from_unit {
        PressureUnit::Psi | PressureUnit::PsiA => value,
        PressureUnit::Bar => value * PSI_PER_BAR,
        PressureUnit::KiloPascal => value * PSI_PER_KPA,
        PressureUnit::MegaPascal => value * PSI_PER_KPA * 1000.0,
        PressureUnit::KgPerCm2 => value * PSI_PER_KGCM2,
        PressureUnit::Atm => value * ATM_PSIA,
    };
    let psia = match from_mode {
        PressureMode::Gauge => base + ATM_PSIA,
        PressureMode::Absolute => base,
    };

    let target_psi = match to_mode {
        PressureMode::Absolute => psia,
        PressureMode::Gauge => psia - ATM_PSIA,
    };
    match to_unit {
        PressureUnit::Psi | PressureUnit::PsiA => target_psi,
        PressureUnit::Bar => target_psi / PSI_PER_BAR,
        PressureUnit::KiloPascal => target_psi / PSI_PER_KPA,
        PressureUnit::MegaPascal => target_psi / (PSI_PER_KPA * 1000.0),
        PressureUnit::KgPerCm2 => target_psi / PSI_PER_KGCM2,
        PressureUnit::Atm => target_psi / ATM_PSIA,
    }
}
