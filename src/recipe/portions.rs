use serde::{Deserialize, Serialize};

use crate::units::{convert_mass, MassUnit};

/// 어린이는 성인 분량의 절반으로 본다.
const CHILD_FACTOR: f64 = 0.5;

/// 음식 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodCategory {
    BonelessMeat,
    BoneInMeat,
    Fish,
    DryPasta,
    DryRice,
    Vegetables,
    GreenSalad,
    Bread,
    Cheese,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 9] = [
        FoodCategory::BonelessMeat,
        FoodCategory::BoneInMeat,
        FoodCategory::Fish,
        FoodCategory::DryPasta,
        FoodCategory::DryRice,
        FoodCategory::Vegetables,
        FoodCategory::GreenSalad,
        FoodCategory::Bread,
        FoodCategory::Cheese,
    ];

    /// 성인 1인 기준 분량 [g]
    pub fn grams_per_adult(&self) -> f64 {
        match self {
            FoodCategory::BonelessMeat => 170.0,
            FoodCategory::BoneInMeat => 340.0,
            FoodCategory::Fish => 170.0,
            FoodCategory::DryPasta => 85.0,
            FoodCategory::DryRice => 75.0,
            FoodCategory::Vegetables => 115.0,
            FoodCategory::GreenSalad => 40.0,
            FoodCategory::Bread => 60.0,
            FoodCategory::Cheese => 60.0,
        }
    }
}

/// 식사량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appetite {
    Light,
    Normal,
    Hearty,
}

impl Appetite {
    fn multiplier(&self) -> f64 {
        match self {
            Appetite::Light => 0.8,
            Appetite::Normal => 1.0,
            Appetite::Hearty => 1.25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PortionInput {
    pub adults: u32,
    pub children: u32,
    pub appetite: Appetite,
    pub categories: Vec<FoodCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortionLine {
    pub category: FoodCategory,
    pub total_g: f64,
    pub total_lb: f64,
}

/// 인원수와 식사량으로 분류별 준비량을 계산한다.
pub fn plan_portions(input: &PortionInput) -> Vec<PortionLine> {
    let people = input.adults as f64 + input.children as f64 * CHILD_FACTOR;
    let scale = people * input.appetite.multiplier();
    input
        .categories
        .iter()
        .map(|&category| {
            let total_g = category.grams_per_adult() * scale;
            PortionLine {
                category,
                total_g,
                total_lb: convert_mass(total_g, MassUnit::Gram, MassUnit::Pound),
            }
        })
        .collect()
}
