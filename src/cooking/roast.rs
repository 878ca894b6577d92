use serde::{Deserialize, Serialize};

use crate::units::{convert_mass, fahrenheit_to_celsius, MassUnit};

/// 로스팅 부위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeatCut {
    BeefRib,
    BeefTenderloin,
    PorkLoin,
    LambLeg,
    WholeChicken,
}

/// 굽기 정도. 돼지고기/닭고기는 안전 온도 기준 하나만 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Doneness {
    Rare,
    MediumRare,
    Medium,
    WellDone,
}

impl MeatCut {
    pub const ALL: [MeatCut; 5] = [
        MeatCut::BeefRib,
        MeatCut::BeefTenderloin,
        MeatCut::PorkLoin,
        MeatCut::LambLeg,
        MeatCut::WholeChicken,
    ];

    /// 굽기 정도를 고를 수 있는 부위인지
    pub fn has_doneness(&self) -> bool {
        !matches!(self, MeatCut::PorkLoin | MeatCut::WholeChicken)
    }
}

/// 부위·굽기별 로스팅 기준.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoastProfile {
    pub oven_temp_f: f64,
    pub minutes_per_lb: f64,
    /// 오븐에서 꺼낼 내부 온도 [°F]
    pub internal_temp_f: f64,
    pub rest_minutes: f64,
}

const fn profile(oven_temp_f: f64, minutes_per_lb: f64, internal_temp_f: f64, rest: f64) -> RoastProfile {
    RoastProfile {
        oven_temp_f,
        minutes_per_lb,
        internal_temp_f,
        rest_minutes: rest,
    }
}

/// 부위와 굽기 정도에 맞는 로스팅 기준을 반환한다.
pub fn roast_profile(cut: MeatCut, doneness: Doneness) -> RoastProfile {
    use Doneness::*;
    match (cut, doneness) {
        (MeatCut::BeefRib, Rare) => profile(325.0, 15.0, 120.0, 20.0),
        (MeatCut::BeefRib, MediumRare) => profile(325.0, 17.0, 130.0, 20.0),
        (MeatCut::BeefRib, Medium) => profile(325.0, 20.0, 140.0, 20.0),
        (MeatCut::BeefRib, WellDone) => profile(325.0, 25.0, 155.0, 20.0),
        (MeatCut::BeefTenderloin, Rare) => profile(425.0, 9.0, 120.0, 10.0),
        (MeatCut::BeefTenderloin, MediumRare) => profile(425.0, 10.0, 130.0, 10.0),
        (MeatCut::BeefTenderloin, Medium) => profile(425.0, 12.0, 140.0, 10.0),
        (MeatCut::BeefTenderloin, WellDone) => profile(425.0, 15.0, 155.0, 10.0),
        (MeatCut::LambLeg, Rare) => profile(325.0, 15.0, 125.0, 15.0),
        (MeatCut::LambLeg, MediumRare) => profile(325.0, 18.0, 130.0, 15.0),
        (MeatCut::LambLeg, Medium) => profile(325.0, 20.0, 140.0, 15.0),
        (MeatCut::LambLeg, WellDone) => profile(325.0, 25.0, 155.0, 15.0),
        (MeatCut::PorkLoin, _) => profile(350.0, 20.0, 145.0, 3.0),
        (MeatCut::WholeChicken, _) => profile(375.0, 20.0, 165.0, 10.0),
    }
}

#[derive(Debug, Clone)]
pub struct RoastInput {
    pub cut: MeatCut,
    pub doneness: Doneness,
    pub weight: f64,
    pub unit: MassUnit,
}

#[derive(Debug, Clone)]
pub struct RoastResult {
    pub profile: RoastProfile,
    pub weight_lb: f64,
    pub total_minutes: f64,
    pub internal_temp_c: f64,
    pub oven_temp_c: f64,
}

/// 무게 × 파운드당 시간으로 로스팅 시간을 추정한다.
pub fn roast_time(input: &RoastInput) -> RoastResult {
    let profile = roast_profile(input.cut, input.doneness);
    let weight_lb = convert_mass(input.weight, input.unit, MassUnit::Pound).max(0.0);
    RoastResult {
        profile,
        weight_lb,
        total_minutes: weight_lb * profile.minutes_per_lb,
        internal_temp_c: fahrenheit_to_celsius(profile.internal_temp_f),
        oven_temp_c: fahrenheit_to_celsius(profile.oven_temp_f),
    }
}
