//! 계산기 목록. 각 계산기의 고정 슬러그(페이지 경로)와 제목 번역 키를 정의한다.

/// 제공하는 계산기 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorId {
    BakersPercentage,
    DoughHydration,
    YeastConversion,
    PanSize,
    CakeServings,
    HighAltitude,
    TurkeyRoast,
    TurkeyThaw,
    MicrowaveWattage,
    MeatRoast,
    RiceWater,
    Brine,
    AirFryer,
    OvenTemperature,
    CoffeeRatio,
    RecipeScaler,
    RecipeCost,
    PartyPortions,
    UnitConverter,
    CupsToGrams,
}

impl CalculatorId {
    /// 메뉴 표시 순서.
    pub const ALL: [CalculatorId; 20] = [
        CalculatorId::BakersPercentage,
        CalculatorId::DoughHydration,
        CalculatorId::YeastConversion,
        CalculatorId::PanSize,
        CalculatorId::CakeServings,
        CalculatorId::HighAltitude,
        CalculatorId::TurkeyRoast,
        CalculatorId::TurkeyThaw,
        CalculatorId::MicrowaveWattage,
        CalculatorId::MeatRoast,
        CalculatorId::RiceWater,
        CalculatorId::Brine,
        CalculatorId::AirFryer,
        CalculatorId::OvenTemperature,
        CalculatorId::CoffeeRatio,
        CalculatorId::RecipeScaler,
        CalculatorId::RecipeCost,
        CalculatorId::PartyPortions,
        CalculatorId::UnitConverter,
        CalculatorId::CupsToGrams,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorId::BakersPercentage => "bakers-percentage-calculator",
            CalculatorId::DoughHydration => "dough-hydration-calculator",
            CalculatorId::YeastConversion => "yeast-conversion-calculator",
            CalculatorId::PanSize => "cake-pan-size-converter",
            CalculatorId::CakeServings => "cake-servings-calculator",
            CalculatorId::HighAltitude => "high-altitude-baking-calculator",
            CalculatorId::TurkeyRoast => "turkey-cooking-time-calculator",
            CalculatorId::TurkeyThaw => "turkey-thawing-calculator",
            CalculatorId::MicrowaveWattage => "microwave-wattage-converter",
            CalculatorId::MeatRoast => "meat-roasting-time-calculator",
            CalculatorId::RiceWater => "rice-water-ratio-calculator",
            CalculatorId::Brine => "brine-calculator",
            CalculatorId::AirFryer => "air-fryer-conversion-calculator",
            CalculatorId::OvenTemperature => "oven-temperature-converter",
            CalculatorId::CoffeeRatio => "coffee-ratio-calculator",
            CalculatorId::RecipeScaler => "recipe-scaler",
            CalculatorId::RecipeCost => "recipe-cost-calculator",
            CalculatorId::PartyPortions => "party-food-portion-calculator",
            CalculatorId::UnitConverter => "cooking-unit-converter",
            CalculatorId::CupsToGrams => "cups-to-grams-converter",
        }
    }

    /// 페이지 경로 (예: `/bakers-percentage-calculator`).
    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    /// 제목 번역 키. 슬러그를 그대로 쓴다.
    pub fn title_key(&self) -> String {
        format!("calc.{}", self.slug())
    }

    /// 슬러그 또는 경로로 계산기를 찾는다.
    pub fn from_slug(s: &str) -> Option<CalculatorId> {
        let s = s.trim().trim_start_matches('/');
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.slug().eq_ignore_ascii_case(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = CalculatorId::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(slugs.len(), CalculatorId::ALL.len());
    }

    #[test]
    fn slug_lookup_accepts_path() {
        assert_eq!(
            CalculatorId::from_slug("/bakers-percentage-calculator"),
            Some(CalculatorId::BakersPercentage)
        );
        assert_eq!(CalculatorId::from_slug("nope"), None);
        assert_eq!(CalculatorId::MicrowaveWattage.path(), "/microwave-wattage-converter");
    }
}
