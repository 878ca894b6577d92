//! 염지(브라인) 소금 양 계산.
//! - 습식: 최종 소금물 농도가 p%가 되도록 `소금 = 물 × p / (100 − p)`
//! - 건식: 고기 무게의 p%

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ingredient_db::{find_ingredient, grams_to_volume};
use crate::units::{convert_mass, convert_volume, MassUnit, VolumeUnit};

/// 포화 소금물 농도 [%]
pub const SATURATION_PCT: f64 = 26.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaltType {
    Table,
    MortonKosher,
    DiamondKosher,
}

impl SaltType {
    pub const ALL: [SaltType; 3] = [SaltType::Table, SaltType::MortonKosher, SaltType::DiamondKosher];

    fn ingredient_code(&self) -> &'static str {
        match self {
            SaltType::Table => "table-salt",
            SaltType::MortonKosher => "morton-kosher",
            SaltType::DiamondKosher => "diamond-kosher",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrineKind {
    /// 물에 담그는 염지. 물의 양과 단위.
    Wet { water: f64, unit: VolumeUnit },
    /// 소금을 직접 바르는 염지. 고기 무게와 단위.
    Dry { meat: f64, unit: MassUnit },
}

#[derive(Debug, Clone)]
pub struct BrineInput {
    pub kind: BrineKind,
    /// 소금 농도 [%]
    pub salt_pct: f64,
    pub salt: SaltType,
}

#[derive(Debug, Clone)]
pub struct BrineResult {
    pub salt_g: f64,
    pub salt_tbsp: f64,
    pub salt_cups: f64,
    /// 실제 적용한 농도 [%] (포화 농도로 제한)
    pub applied_pct: f64,
}

/// 염지용 소금 양을 계산한다.
pub fn brine(input: &BrineInput) -> BrineResult {
    let pct = input.salt_pct.clamp(0.0, SATURATION_PCT);
    if pct != input.salt_pct {
        debug!(requested = input.salt_pct, applied = pct, "brine concentration clamped");
    }
    let salt_g = match input.kind {
        BrineKind::Wet { water, unit } => {
            // 물 1mL = 1g
            let water_g = convert_volume(water.max(0.0), unit, VolumeUnit::Milliliter);
            water_g * pct / (100.0 - pct)
        }
        BrineKind::Dry { meat, unit } => {
            convert_mass(meat.max(0.0), unit, MassUnit::Gram) * pct / 100.0
        }
    };
    let (salt_tbsp, salt_cups) = match find_ingredient(input.salt.ingredient_code()) {
        Some(ing) => (
            grams_to_volume(ing, salt_g, VolumeUnit::Tablespoon),
            grams_to_volume(ing, salt_g, VolumeUnit::Cup),
        ),
        None => (0.0, 0.0),
    };
    BrineResult {
        salt_g,
        salt_tbsp,
        salt_cups,
        applied_pct: pct,
    }
}
