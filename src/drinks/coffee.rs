use serde::{Deserialize, Serialize};

/// 원두 1g이 머금는 물 [mL]
const GROUNDS_ABSORPTION_ML_PER_G: f64 = 2.0;

/// 추출 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrewMethod {
    PourOver,
    Drip,
    FrenchPress,
    AeroPress,
    Espresso,
    ColdBrew,
}

impl BrewMethod {
    pub const ALL: [BrewMethod; 6] = [
        BrewMethod::PourOver,
        BrewMethod::Drip,
        BrewMethod::FrenchPress,
        BrewMethod::AeroPress,
        BrewMethod::Espresso,
        BrewMethod::ColdBrew,
    ];

    /// 기본 물:원두 비율 (1:N의 N)
    pub fn base_ratio(&self) -> f64 {
        match self {
            BrewMethod::PourOver => 16.0,
            BrewMethod::Drip => 17.0,
            BrewMethod::FrenchPress => 15.0,
            BrewMethod::AeroPress => 12.0,
            BrewMethod::Espresso => 2.0,
            BrewMethod::ColdBrew => 8.0,
        }
    }
}

/// 농도 취향. 진할수록 비율 숫자가 작아진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Mild,
    Medium,
    Strong,
}

impl Strength {
    fn ratio_multiplier(&self) -> f64 {
        match self {
            Strength::Mild => 1.1,
            Strength::Medium => 1.0,
            Strength::Strong => 0.9,
        }
    }
}

/// 무엇을 알고 있는지에 따른 계산 방향.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoffeeMode {
    /// 물 양[mL]으로 원두 양을 구한다.
    FromWater { water_ml: f64 },
    /// 원두 양[g]으로 물 양을 구한다.
    FromCoffee { coffee_g: f64 },
}

#[derive(Debug, Clone)]
pub struct BrewResult {
    pub ratio: f64,
    pub coffee_g: f64,
    pub water_ml: f64,
    /// 원두가 머금는 양을 뺀 예상 추출량 [mL]
    pub brewed_ml: f64,
}

/// 추출 비율로 원두 또는 물 양을 계산한다.
pub fn brew(method: BrewMethod, strength: Strength, mode: CoffeeMode) -> BrewResult {
    let ratio = method.base_ratio() * strength.ratio_multiplier();
    let (coffee_g, water_ml) = match mode {
        CoffeeMode::FromWater { water_ml } => {
            let water_ml = water_ml.max(0.0);
            (water_ml / ratio, water_ml)
        }
        CoffeeMode::FromCoffee { coffee_g } => {
            let coffee_g = coffee_g.max(0.0);
            (coffee_g, coffee_g * ratio)
        }
    };
    BrewResult {
        ratio,
        coffee_g,
        water_ml,
        brewed_ml: (water_ml - coffee_g * GROUNDS_ABSORPTION_ML_PER_G).max(0.0),
    }
}
