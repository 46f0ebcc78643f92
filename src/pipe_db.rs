//! 스케줄 40 강관 호칭경-내경 테이블을 제공한다.
//! 값은 참고용이며 실제 설계 시 제조사 치수표로 확인해야 한다.

use crate::gas::segment::CandidatePipe;

#[derive(Debug, Clone, Copy)]
pub struct PipeSpec {
    pub nominal: &'static str,
    /// 내경 [in]
    pub inner_diameter_in: f64,
}

impl PipeSpec {
    pub const fn new(nominal: &'static str, inner_diameter_in: f64) -> Self {
        Self {
            nominal,
            inner_diameter_in,
        }
    }
}

// 내경 오름차순. 후보 목록의 순서가 곧 추천 선호 순서가 된다.
const SCHEDULE_40: &[PipeSpec] = &[
    PipeSpec::new("1/4\"", 0.364),
    PipeSpec::new("3/8\"", 0.493),
    PipeSpec::new("1/2\"", 0.622),
    PipeSpec::new("3/4\"", 0.824),
    PipeSpec::new("1\"", 1.049),
    PipeSpec::new("1-1/4\"", 1.380),
    PipeSpec::new("1-1/2\"", 1.610),
    PipeSpec::new("2\"", 2.067),
    PipeSpec::new("2-1/2\"", 2.469),
    PipeSpec::new("3\"", 3.068),
    PipeSpec::new("4\"", 4.026),
    PipeSpec::new("6\"", 6.065),
];

pub fn schedule_40() -> &'static [PipeSpec] {
    SCHEDULE_40
}

pub fn find_pipe(nominal: &str) -> Option<&'static PipeSpec> {
    SCHEDULE_40
        .iter()
        .find(|p| p.nominal.eq_ignore_ascii_case(nominal))
}

/// 스케줄 40 전 구경을 검토 대상으로 하는 기본 후보 목록.
pub fn default_candidates() -> Vec<CandidatePipe> {
    SCHEDULE_40
        .iter()
        .map(|p| CandidatePipe {
            label: p.nominal.to_string(),
            inner_diameter_in: p.inner_diameter_in,
            include: true,
        })
        .collect()
}
