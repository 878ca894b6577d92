//! 재료별 밀도(미국 계량컵 1컵당 g) 테이블과 부피↔무게 환산을 제공한다.
//! 값은 USDA FoodData Central 및 제과 참고서의 평균치이며 계량 방식에 따라 달라질 수 있다.

use crate::units::{convert_volume, VolumeUnit};

#[derive(Debug)]
pub struct IngredientDensity {
    pub code: &'static str,
    pub name: &'static str,
    /// 다른 이름(소문자)
    pub aliases: &'static [&'static str],
    pub grams_per_cup: f64,
}

const fn ing(
    code: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    grams_per_cup: f64,
) -> IngredientDensity {
    IngredientDensity {
        code,
        name,
        aliases,
        grams_per_cup,
    }
}

const INGREDIENTS: &[IngredientDensity] = &[
    ing("flour", "All-Purpose Flour", &["ap flour", "plain flour", "밀가루"], 120.0),
    ing("bread-flour", "Bread Flour", &["strong flour", "강력분"], 127.0),
    ing("whole-wheat-flour", "Whole Wheat Flour", &["wholemeal flour", "통밀가루"], 113.0),
    ing("cake-flour", "Cake Flour", &["박력분"], 114.0),
    ing("sugar", "Granulated Sugar", &["white sugar", "설탕"], 200.0),
    ing("brown-sugar", "Brown Sugar (packed)", &["황설탕"], 213.0),
    ing("powdered-sugar", "Powdered Sugar", &["icing sugar", "confectioners sugar", "슈가파우더"], 120.0),
    ing("butter", "Butter", &["버터"], 227.0),
    ing("water", "Water", &["물"], 236.6),
    ing("milk", "Whole Milk", &["milk", "우유"], 242.0),
    ing("honey", "Honey", &["꿀"], 340.0),
    ing("vegetable-oil", "Vegetable Oil", &["oil", "식용유"], 218.0),
    ing("rice", "Uncooked White Rice", &["쌀"], 185.0),
    ing("rolled-oats", "Rolled Oats", &["oats", "오트밀"], 90.0),
    ing("cocoa", "Cocoa Powder", &["cocoa powder", "코코아"], 84.0),
    ing("table-salt", "Table Salt", &["salt", "소금"], 292.0),
    ing("morton-kosher", "Kosher Salt (Morton)", &["morton kosher salt"], 240.0),
    ing("diamond-kosher", "Kosher Salt (Diamond Crystal)", &["kosher salt", "diamond crystal"], 135.0),
];

pub fn ingredients() -> &'static [IngredientDensity] {
    INGREDIENTS
}

/// 코드, 이름, 별칭으로 재료를 찾는다. 대소문자는 구분하지 않는다.
pub fn find_ingredient(query: &str) -> Option<&'static IngredientDensity> {
    let q = query.trim().to_lowercase();
    INGREDIENTS.iter().find(|i| {
        i.code.eq_ignore_ascii_case(&q)
            || i.name.to_lowercase() == q
            || i.aliases.iter().any(|a| *a == q)
    })
}

/// 부피를 g으로 환산한다.
pub fn volume_to_grams(ingredient: &IngredientDensity, amount: f64, unit: VolumeUnit) -> f64 {
    let cups = convert_volume(amount, unit, VolumeUnit::Cup);
    cups * ingredient.grams_per_cup
}

/// g을 지정한 부피 단위로 환산한다.
pub fn grams_to_volume(ingredient: &IngredientDensity, grams: f64, unit: VolumeUnit) -> f64 {
    if ingredient.grams_per_cup <= 0.0 {
        return 0.0;
    }
    let cups = grams / ingredient.grams_per_cup;
    convert_volume(cups, VolumeUnit::Cup, unit)
}
