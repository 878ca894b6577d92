use calc_kitchen::ingredient_db::{find_ingredient, grams_to_volume, volume_to_grams};
use calc_kitchen::recipe::{
    cost::{recipe_cost, CostLine, RecipeCostInput},
    portions::{plan_portions, Appetite, FoodCategory, PortionInput},
    scaling::{kitchen_fraction, scale_factor, scale_recipe, RecipeLine, ScaleBy},
};
use calc_kitchen::units::VolumeUnit;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

fn line(name: &str, quantity: f64, unit: &str) -> RecipeLine {
    RecipeLine {
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

#[test]
fn scale_by_servings() {
    let recipe = vec![
        line("Flour", 1.0, "cup"),
        line("Sugar", 200.0, "g"),
        line("Vanilla", 0.5, "tsp"),
        line("Baking powder", 3.0, "g"),
    ];
    let scaled = scale_recipe(
        &recipe,
        ScaleBy::Servings {
            original: 4.0,
            desired: 6.0,
        },
    );
    assert_close(scaled.factor, 1.5);
    let shown: Vec<&str> = scaled.lines.iter().map(|l| l.display.as_str()).collect();
    assert_eq!(shown, vec!["1 1/2", "300", "3/4", "4.5"]);
    assert_close(scaled.lines[1].original_quantity, 200.0);
}

#[test]
fn plural_metric_units_keep_decimals() {
    let recipe = vec![line("Milk", 0.5, "liters"), line("Cream", 150.0, "milliliters")];
    let scaled = scale_recipe(&recipe, ScaleBy::Factor(3.0));
    assert_eq!(scaled.lines[0].display, "1.5");
    assert_eq!(scaled.lines[1].display, "450");
}

#[test]
fn scale_factor_edge_cases() {
    assert_close(
        scale_factor(ScaleBy::Servings {
            original: 0.0,
            desired: 6.0,
        }),
        1.0,
    );
    assert_close(scale_factor(ScaleBy::Factor(-2.0)), 0.0);
    assert_close(scale_factor(ScaleBy::Factor(0.5)), 0.5);
}

#[test]
fn kitchen_fractions() {
    assert_eq!(kitchen_fraction(2.0), "2");
    assert_eq!(kitchen_fraction(0.333), "1/3");
    assert_eq!(kitchen_fraction(0.99), "1");
    assert_eq!(kitchen_fraction(1.125), "1 1/8");
    assert_eq!(kitchen_fraction(0.0), "0");
    assert_eq!(kitchen_fraction(0.05), "<1/8");
    assert_eq!(kitchen_fraction(0.07), "1/8");
    assert_eq!(kitchen_fraction(f64::NAN), "0");
}

#[test]
fn recipe_cost_per_serving_and_price() {
    let input = RecipeCostInput {
        lines: vec![
            CostLine {
                name: "Flour".into(),
                package_price: 5.0,
                package_size: 2000.0,
                amount_used: 500.0,
            },
            CostLine {
                name: "Butter".into(),
                package_price: 4.0,
                package_size: 454.0,
                amount_used: 227.0,
            },
            CostLine {
                name: "Free herbs".into(),
                package_price: 3.0,
                package_size: 0.0,
                amount_used: 10.0,
            },
        ],
        servings: 8.0,
        target_food_cost_ratio: 0.25,
    };
    let res = recipe_cost(&input);
    assert_close(res.line_costs[0], 1.25);
    assert_close(res.line_costs[1], 2.0);
    assert_close(res.line_costs[2], 0.0);
    assert_close(res.total_cost, 3.25);
    assert_close(res.cost_per_serving.unwrap(), 0.406_25);
    assert_close(res.suggested_price_per_serving.unwrap(), 1.625);
}

#[test]
fn recipe_cost_without_servings() {
    let res = recipe_cost(&RecipeCostInput {
        lines: vec![],
        servings: 0.0,
        target_food_cost_ratio: 0.3,
    });
    assert_eq!(res.total_cost, 0.0);
    assert_eq!(res.cost_per_serving, None);
    assert_eq!(res.suggested_price_per_serving, None);
}

#[test]
fn party_portions() {
    let normal = plan_portions(&PortionInput {
        adults: 10,
        children: 4,
        appetite: Appetite::Normal,
        categories: vec![FoodCategory::BonelessMeat, FoodCategory::GreenSalad],
    });
    assert_eq!(normal.len(), 2);
    assert_close(normal[0].total_g, 12.0 * 170.0);
    assert_close(normal[1].total_g, 12.0 * 40.0);

    let hearty = plan_portions(&PortionInput {
        adults: 10,
        children: 4,
        appetite: Appetite::Hearty,
        categories: vec![FoodCategory::BonelessMeat],
    });
    assert_close(hearty[0].total_g, 2550.0);
    assert!((hearty[0].total_lb - 5.62).abs() < 0.01);
}

#[test]
fn cups_to_grams() {
    let flour = find_ingredient("flour").unwrap();
    assert_close(volume_to_grams(flour, 1.0, VolumeUnit::Cup), 120.0);

    let sugar = find_ingredient("설탕").unwrap();
    assert_eq!(sugar.code, "sugar");
    assert_close(grams_to_volume(sugar, 200.0, VolumeUnit::Cup), 1.0);

    let butter = find_ingredient("Butter").unwrap();
    assert!((volume_to_grams(butter, 3.0, VolumeUnit::Tablespoon) - 42.5625).abs() < 1e-6);

    assert!(find_ingredient("unobtainium").is_none());
}
