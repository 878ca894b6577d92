//! 케이크 팬 모양/크기로 인분을 추정한다.
//! 업계에서 흔히 쓰는 서빙 차트(파티 2x2in, 웨딩 1x2in 조각)를 6~16in 범위에서 선형 보간한다.

use serde::{Deserialize, Serialize};

use crate::bracket::{interpolate, CurvePoint};
use crate::units::{convert_length, LengthUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CakeShape {
    Round,
    Square,
}

/// 조각 크기 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServingStyle {
    /// 약 2x2in 조각
    Party,
    /// 약 1x2in 조각
    Wedding,
}

/// 케이크 단 하나.
#[derive(Debug, Clone, Copy)]
pub struct CakeTier {
    pub shape: CakeShape,
    /// 지름(원형) 또는 한 변(정사각)
    pub size: f64,
    pub unit: LengthUnit,
}

/// 인분 계산 결과.
#[derive(Debug, Clone)]
pub struct CakeServings {
    /// 단별 인분(반올림). 합이 `total`과 단 수만큼 차이 날 수 있다.
    pub per_tier: Vec<u32>,
    pub total: u32,
    /// 하나라도 차트 범위를 벗어나 클램프되었는지
    pub clamped: bool,
}

const ROUND_PARTY: &[CurvePoint] = &[
    CurvePoint::new(6.0, 12.0),
    CurvePoint::new(8.0, 20.0),
    CurvePoint::new(10.0, 28.0),
    CurvePoint::new(12.0, 40.0),
    CurvePoint::new(14.0, 63.0),
    CurvePoint::new(16.0, 77.0),
];

const ROUND_WEDDING: &[CurvePoint] = &[
    CurvePoint::new(6.0, 12.0),
    CurvePoint::new(8.0, 24.0),
    CurvePoint::new(10.0, 38.0),
    CurvePoint::new(12.0, 56.0),
    CurvePoint::new(14.0, 78.0),
    CurvePoint::new(16.0, 100.0),
];

const SQUARE_PARTY: &[CurvePoint] = &[
    CurvePoint::new(6.0, 12.0),
    CurvePoint::new(8.0, 20.0),
    CurvePoint::new(10.0, 30.0),
    CurvePoint::new(12.0, 48.0),
    CurvePoint::new(14.0, 63.0),
    CurvePoint::new(16.0, 80.0),
];

const SQUARE_WEDDING: &[CurvePoint] = &[
    CurvePoint::new(6.0, 18.0),
    CurvePoint::new(8.0, 32.0),
    CurvePoint::new(10.0, 50.0),
    CurvePoint::new(12.0, 72.0),
    CurvePoint::new(14.0, 98.0),
    CurvePoint::new(16.0, 128.0),
];

fn chart(shape: CakeShape, style: ServingStyle) -> &'static [CurvePoint] {
    match (shape, style) {
        (CakeShape::Round, ServingStyle::Party) => ROUND_PARTY,
        (CakeShape::Round, ServingStyle::Wedding) => ROUND_WEDDING,
        (CakeShape::Square, ServingStyle::Party) => SQUARE_PARTY,
        (CakeShape::Square, ServingStyle::Wedding) => SQUARE_WEDDING,
    }
}

/// 단 하나의 인분(반올림 전)과 클램프 여부를 반환한다.
pub fn servings_for_tier(tier: CakeTier, style: ServingStyle) -> (f64, bool) {
    let inches = convert_length(tier.size, tier.unit, LengthUnit::Inch);
    match interpolate(chart(tier.shape, style), inches) {
        Some(hit) => (hit.value, hit.clamped),
        None => (0.0, true),
    }
}

/// 여러 단으로 된 케이크의 총 인분을 구한다.
pub fn servings_for_cake(tiers: &[CakeTier], style: ServingStyle) -> CakeServings {
    let mut clamped = false;
    let mut raw_total = 0.0;
    let per_tier: Vec<u32> = tiers
        .iter()
        .map(|&tier| {
            let (servings, tier_clamped) = servings_for_tier(tier, style);
            clamped |= tier_clamped;
            raw_total += servings.max(0.0);
            servings.round().max(0.0) as u32
        })
        .collect();
    CakeServings {
        // 합계는 반올림 전 값으로 구한다
        total: raw_total.round() as u32,
        per_tier,
        clamped,
    }
}
