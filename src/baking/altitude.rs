//! 고지대 제빵 보정. 해발 고도 구간별 표준 조정량을 제공한다.
//! 구간 경계값은 높은 구간으로, 범위 밖은 가장 가까운 구간으로 처리한다.

use serde::{Deserialize, Serialize};

use crate::bracket::{lookup, Bracket};

const FEET_PER_METER: f64 = 3.280_84;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevationUnit {
    Feet,
    Meters,
}

/// 고도 구간별 조정값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeRule {
    /// 팽창제(베이킹파우더/소다) 감량 비율 (0.125 = 1/8 줄임)
    pub leavening_reduction: f64,
    /// 설탕 1컵당 줄일 양 [tbsp]
    pub sugar_reduction_tbsp_per_cup: f64,
    /// 액체 1컵당 늘릴 양 [tbsp]
    pub liquid_increase_tbsp_per_cup: f64,
    /// 오븐 온도 상향 [°F]
    pub oven_increase_f: f64,
}

const NO_CHANGE: AltitudeRule = AltitudeRule {
    leavening_reduction: 0.0,
    sugar_reduction_tbsp_per_cup: 0.0,
    liquid_increase_tbsp_per_cup: 0.0,
    oven_increase_f: 0.0,
};

const ALTITUDE_TABLE: [Bracket<AltitudeRule>; 4] = [
    Bracket::new(0.0, 3000.0, NO_CHANGE),
    Bracket::new(
        3000.0,
        5000.0,
        AltitudeRule {
            leavening_reduction: 0.125,
            sugar_reduction_tbsp_per_cup: 0.5,
            liquid_increase_tbsp_per_cup: 1.5,
            oven_increase_f: 15.0,
        },
    ),
    Bracket::new(
        5000.0,
        7000.0,
        AltitudeRule {
            leavening_reduction: 0.25,
            sugar_reduction_tbsp_per_cup: 1.0,
            liquid_increase_tbsp_per_cup: 3.0,
            oven_increase_f: 20.0,
        },
    ),
    Bracket::new(
        7000.0,
        14_000.0,
        AltitudeRule {
            leavening_reduction: 0.375,
            sugar_reduction_tbsp_per_cup: 2.0,
            liquid_increase_tbsp_per_cup: 4.0,
            oven_increase_f: 25.0,
        },
    ),
];

/// 고지대 보정 입력. 레시피 분량은 선택값이다.
#[derive(Debug, Clone)]
pub struct AltitudeInput {
    pub elevation: f64,
    pub unit: ElevationUnit,
    /// 레시피의 팽창제 [tsp]
    pub leavening_tsp: f64,
    /// 레시피의 설탕 [cup]
    pub sugar_cups: f64,
    /// 레시피의 액체 [cup]
    pub liquid_cups: f64,
    /// 레시피 오븐 온도 [°F]
    pub oven_temp_f: f64,
}

#[derive(Debug, Clone)]
pub struct AltitudeResult {
    pub elevation_ft: f64,
    pub rule: AltitudeRule,
    pub adjusted_leavening_tsp: f64,
    pub adjusted_sugar_cups: f64,
    pub adjusted_liquid_cups: f64,
    pub adjusted_oven_temp_f: f64,
    /// 해당 고도에서 물의 끓는점 [°F]
    pub water_boiling_point_f: f64,
    pub clamped: bool,
}

/// 해발 고도에 따른 물의 끓는점 근사 [°F]. 500ft마다 약 1°F 낮아진다.
pub fn boiling_point_f(elevation_ft: f64) -> f64 {
    212.0 - elevation_ft.max(0.0) / 500.0
}

/// 고도 구간에 맞는 보정값을 레시피에 적용한다.
pub fn altitude_adjustment(input: &AltitudeInput) -> AltitudeResult {
    let elevation_ft = match input.unit {
        ElevationUnit::Feet => input.elevation,
        ElevationUnit::Meters => input.elevation * FEET_PER_METER,
    };
    let (rule, clamped) = match lookup(&ALTITUDE_TABLE, elevation_ft) {
        Some(hit) => (*hit.value(), hit.clamped),
        None => (NO_CHANGE, true),
    };
    let tbsp_per_cup = 16.0;
    let sugar_cups = input.sugar_cups.max(0.0);
    let liquid_cups = input.liquid_cups.max(0.0);
    AltitudeResult {
        elevation_ft,
        rule,
        adjusted_leavening_tsp: input.leavening_tsp.max(0.0) * (1.0 - rule.leavening_reduction),
        adjusted_sugar_cups: (sugar_cups
            - sugar_cups * rule.sugar_reduction_tbsp_per_cup / tbsp_per_cup)
            .max(0.0),
        adjusted_liquid_cups: liquid_cups
            + liquid_cups * rule.liquid_increase_tbsp_per_cup / tbsp_per_cup,
        adjusted_oven_temp_f: input.oven_temp_f.max(0.0) + rule.oven_increase_f,
        water_boiling_point_f: boiling_point_f(elevation_ft),
        clamped,
    }
}
