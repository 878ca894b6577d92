use serde::{Deserialize, Serialize};

use crate::units::VolumeUnit;

/// 쌀 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiceType {
    WhiteLongGrain,
    Jasmine,
    Basmati,
    ShortGrain,
    BrownLongGrain,
    Wild,
}

impl RiceType {
    pub const ALL: [RiceType; 6] = [
        RiceType::WhiteLongGrain,
        RiceType::Jasmine,
        RiceType::Basmati,
        RiceType::ShortGrain,
        RiceType::BrownLongGrain,
        RiceType::Wild,
    ];
}

/// 쌀 종류별 조리 기준 (부피 기준 물:쌀, 뜸 전 끓이는 시간, 익힌 후 부피 배율).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiceProfile {
    pub water_ratio: f64,
    pub simmer_minutes: f64,
    pub yield_factor: f64,
}

pub fn rice_profile(rice: RiceType) -> RiceProfile {
    let (water_ratio, simmer_minutes, yield_factor) = match rice {
        RiceType::WhiteLongGrain => (2.0, 18.0, 3.0),
        RiceType::Jasmine => (1.5, 15.0, 3.0),
        RiceType::Basmati => (1.5, 15.0, 3.0),
        RiceType::ShortGrain => (1.25, 15.0, 2.5),
        RiceType::BrownLongGrain => (2.25, 45.0, 3.0),
        RiceType::Wild => (3.0, 50.0, 3.5),
    };
    RiceProfile {
        water_ratio,
        simmer_minutes,
        yield_factor,
    }
}

/// 불을 끈 뒤 뜸 들이는 시간 [분]
pub const REST_MINUTES: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct RicePlan {
    pub profile: RiceProfile,
    /// 넣을 물 (입력과 같은 단위)
    pub water: f64,
    /// 예상 밥 양 (입력과 같은 단위)
    pub cooked_yield: f64,
    pub unit: VolumeUnit,
    pub total_minutes: f64,
}

/// 쌀 양에 맞는 물과 조리 시간을 계산한다.
pub fn rice_plan(rice: RiceType, amount: f64, unit: VolumeUnit) -> RicePlan {
    let profile = rice_profile(rice);
    let amount = amount.max(0.0);
    RicePlan {
        profile,
        water: amount * profile.water_ratio,
        cooked_yield: amount * profile.yield_factor,
        unit,
        total_minutes: profile.simmer_minutes + REST_MINUTES,
    }
}
