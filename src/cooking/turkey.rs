//! 칠면조 로스팅 시간. 325°F 오븐 기준 무게 구간표(USDA 안내 기준)를 사용한다.

use crate::bracket::{lookup, Bracket};
use crate::units::{convert_mass, MassUnit};

/// 로스팅 오븐 온도 [°F]
pub const ROAST_OVEN_F: f64 = 325.0;
/// 안전 내부 온도 [°F]
pub const SAFE_INTERNAL_F: f64 = 165.0;

/// 조리 시간 범위 [h]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursRange {
    pub min: f64,
    pub max: f64,
}

const fn hours(min: f64, max: f64) -> HoursRange {
    HoursRange { min, max }
}

const UNSTUFFED: [Bracket<HoursRange>; 6] = [
    Bracket::new(4.0, 8.0, hours(1.5, 3.25)),
    Bracket::new(8.0, 12.0, hours(2.75, 3.0)),
    Bracket::new(12.0, 14.0, hours(3.0, 3.75)),
    Bracket::new(14.0, 18.0, hours(3.75, 4.25)),
    Bracket::new(18.0, 20.0, hours(4.25, 4.5)),
    Bracket::new(20.0, 24.0, hours(4.5, 5.0)),
];

const STUFFED: [Bracket<HoursRange>; 5] = [
    Bracket::new(8.0, 12.0, hours(3.0, 3.5)),
    Bracket::new(12.0, 14.0, hours(3.5, 4.0)),
    Bracket::new(14.0, 18.0, hours(4.0, 4.25)),
    Bracket::new(18.0, 20.0, hours(4.25, 4.75)),
    Bracket::new(20.0, 24.0, hours(4.75, 5.25)),
];

#[derive(Debug, Clone)]
pub struct TurkeyInput {
    pub weight: f64,
    pub unit: MassUnit,
    /// 속을 채웠는지 여부
    pub stuffed: bool,
}

#[derive(Debug, Clone)]
pub struct TurkeyResult {
    pub weight_lb: f64,
    pub roast_hours: HoursRange,
    pub oven_temp_f: f64,
    pub safe_internal_temp_f: f64,
    /// 휴지 시간 [분]
    pub rest_minutes: (u32, u32),
    /// 표 범위 밖이라 가장 가까운 구간을 사용했는지
    pub clamped: bool,
}

/// 무게 구간표에서 로스팅 시간 범위를 찾는다.
pub fn turkey_roast_time(input: &TurkeyInput) -> TurkeyResult {
    let weight_lb = convert_mass(input.weight, input.unit, MassUnit::Pound);
    let table: &[Bracket<HoursRange>] = if input.stuffed { &STUFFED } else { &UNSTUFFED };
    let (roast_hours, clamped) = match lookup(table, weight_lb) {
        Some(hit) => (*hit.value(), hit.clamped),
        None => (hours(0.0, 0.0), true),
    };
    TurkeyResult {
        weight_lb,
        roast_hours,
        oven_temp_f: ROAST_OVEN_F,
        safe_internal_temp_f: SAFE_INTERNAL_F,
        rest_minutes: (20, 30),
        clamped,
    }
}
