use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::gas::drops::{DemandDrop, SubDrop};
use crate::gas::header::HeaderGeometry;
use crate::gas::properties::GasKind;
use crate::gas::segment::CandidatePipe;
use crate::gas::system::SystemInputs;
use crate::pipe_db;
use crate::units::*;

/// 시나리오 파일의 수치가 어떤 단위로 적혀 있는지 선언한다.
/// 엔진 내부 단위로의 환산은 로드 직후 이 선언을 기준으로 한 번만 수행한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioUnits {
    pub pressure: PressureUnit,
    pub flow: FlowUnit,
    pub length: LengthUnit,
    pub temperature: TemperatureUnit,
    pub velocity: VelocityUnit,
    pub volume: VolumeUnit,
}

impl Default for ScenarioUnits {
    fn default() -> Self {
        Self {
            pressure: PressureUnit::Psi,
            flow: FlowUnit::Scfm,
            length: LengthUnit::Foot,
            temperature: TemperatureUnit::Fahrenheit,
            velocity: VelocityUnit::FootPerSecond,
            volume: VolumeUnit::Gallon,
        }
    }
}

/// 시스템 전역 입력. 압력은 게이지 기준으로 해석한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSystem {
    pub inlet_pressure: f64,
    pub available_flow: f64,
    pub min_outlet_pressure: f64,
    #[serde(default)]
    pub typical_outlet_pressure: f64,
    pub safety_factor: f64,
    #[serde(default)]
    pub tank_volume: f64,
    pub gas: GasKind,
}

/// 헤더 기하 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioHeader {
    pub equivalent_length: f64,
    pub velocity_limit: f64,
    /// 절대 조도. length 단위로 해석한다.
    pub roughness: f64,
    pub temperature: f64,
}

/// 검토 후보 배관. 내경은 관례대로 항상 인치로 적는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCandidate {
    pub label: String,
    pub inner_diameter_in: f64,
    #[serde(default = "default_true")]
    pub include: bool,
}

fn default_true() -> bool {
    true
}

/// 서브드롭 입력.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSubDrop {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    pub length: f64,
    pub required_flow: f64,
    pub required_outlet_pressure: f64,
}

/// 드롭 입력. 서브드롭은 생략 가능하다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDrop {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    pub length: f64,
    pub required_flow: f64,
    pub required_outlet_pressure: f64,
    #[serde(default)]
    pub sub_drops: Vec<ScenarioSubDrop>,
}

/// 시나리오 문서 전체.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub units: ScenarioUnits,
    pub system: ScenarioSystem,
    pub header: ScenarioHeader,
    /// 비워두면 스케줄 40 전 구경을 검토한다.
    #[serde(default)]
    pub candidates: Vec<ScenarioCandidate>,
    #[serde(default)]
    pub drops: Vec<ScenarioDrop>,
}

/// 시나리오 로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ScenarioError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "시나리오 파일 입출력 오류: {e}"),
            ScenarioError::Parse(e) => write!(f, "시나리오 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(value: std::io::Error) -> Self {
        ScenarioError::Io(value)
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(value: toml::de::Error) -> Self {
        ScenarioError::Parse(value)
    }
}

/// 시나리오 TOML 파일을 로드한다.
pub fn load(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path)?;
    let scenario: Scenario = toml::from_str(&content)?;
    Ok(scenario)
}

impl Scenario {
    /// 선언된 단위로 적힌 값들을 엔진 내부 단위
    /// (psig/scfm/ft/°F/ft/s/gal)로 환산해 돌려준다.
    /// 단위 환산은 여기서 단 한 번만 일어난다.
    pub fn to_engine(&self) -> (SystemInputs, HeaderGeometry, Vec<CandidatePipe>, Vec<DemandDrop>) {
        let u = &self.units;
        let psi = |v: f64| convert_pressure(v, u.pressure, PressureUnit::Psi);
        let scfm = |v: f64| convert_flow(v, u.flow, FlowUnit::Scfm);
        let ft = |v: f64| convert_length(v, u.length, LengthUnit::Foot);

        let inputs = SystemInputs {
            inlet_pressure_psig: psi(self.system.inlet_pressure),
            available_flow_scfm: scfm(self.system.available_flow),
            min_outlet_pressure_psig: psi(self.system.min_outlet_pressure),
            typical_outlet_pressure_psig: psi(self.system.typical_outlet_pressure),
            safety_factor: self.system.safety_factor,
            tank_volume_gal: convert_volume(self.system.tank_volume, u.volume, VolumeUnit::Gallon),
            gas: self.system.gas,
        };

        let geometry = HeaderGeometry {
            equivalent_length_ft: ft(self.header.equivalent_length),
            velocity_limit_ft_per_s: convert_velocity(
                self.header.velocity_limit,
                u.velocity,
                VelocityUnit::FootPerSecond,
            ),
            roughness_ft: ft(self.header.roughness),
            temperature_f: convert_temperature(
                self.header.temperature,
                u.temperature,
                TemperatureUnit::Fahrenheit,
            ),
        };

        let candidates = if self.candidates.is_empty() {
            pipe_db::default_candidates()
        } else {
            self.candidates
                .iter()
                .map(|c| CandidatePipe {
                    label: c.label.clone(),
                    inner_diameter_in: c.inner_diameter_in,
                    include: c.include,
                })
                .collect()
        };

        let drops = self
            .drops
            .iter()
            .map(|d| DemandDrop {
                id: d.id.clone().unwrap_or_else(|| d.label.clone()),
                label: d.label.clone(),
                length_ft: ft(d.length),
                required_flow_scfm: scfm(d.required_flow),
                required_outlet_pressure_psig: psi(d.required_outlet_pressure),
                sub_drops: d
                    .sub_drops
                    .iter()
                    .map(|s| SubDrop {
                        id: s.id.clone().unwrap_or_else(|| s.label.clone()),
                        label: s.label.clone(),
                        length_ft: ft(s.length),
                        required_flow_scfm: scfm(s.required_flow),
                        required_outlet_pressure_psig: psi(s.required_outlet_pressure),
                    })
                    .collect(),
            })
            .collect();

        (inputs, geometry, candidates, drops)
    }
}
