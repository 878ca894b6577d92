use calc_kitchen::baking::{
    altitude::{altitude_adjustment, boiling_point_f, AltitudeInput, ElevationUnit},
    cake_servings::{servings_for_cake, servings_for_tier, CakeShape, CakeTier, ServingStyle},
    hydration::{compute_hydration, water_for_target_hydration, HydrationInput},
    pan_size::{convert_pan, PanShape, PanSpec},
    yeast::{convert_yeast, packets_from_grams, YeastType},
};
use calc_kitchen::units::LengthUnit;

fn dough(flour_g: f64, water_g: f64) -> HydrationInput {
    HydrationInput {
        flour_g,
        water_g,
        starter_g: 0.0,
        starter_hydration_pct: 100.0,
        milk_g: 0.0,
    }
}

#[test]
fn hydration_plain_dough() {
    let res = compute_hydration(&dough(500.0, 350.0));
    assert!((res.hydration_pct.unwrap() - 70.0).abs() < 1e-9);
    assert_eq!(res.dough_weight_g, 850.0);
}

#[test]
fn hydration_counts_starter_and_milk() {
    let mut input = dough(500.0, 300.0);
    input.starter_g = 100.0; // 100% 르방: 밀가루 50 + 물 50
    input.milk_g = 100.0; // 물 87
    let res = compute_hydration(&input);
    assert!((res.total_flour_g - 550.0).abs() < 1e-9);
    assert!((res.total_water_g - 437.0).abs() < 1e-9);
    assert!((res.hydration_pct.unwrap() - 437.0 / 550.0 * 100.0).abs() < 1e-9);
}

#[test]
fn hydration_without_flour_is_undefined() {
    assert_eq!(compute_hydration(&dough(0.0, 200.0)).hydration_pct, None);
}

#[test]
fn extra_water_for_target() {
    let input = dough(500.0, 300.0);
    assert!((water_for_target_hydration(&input, 70.0) - 50.0).abs() < 1e-9);
    // 이미 목표보다 질면 0
    assert_eq!(water_for_target_hydration(&input, 50.0), 0.0);
}

#[test]
fn yeast_conversions() {
    assert!((convert_yeast(10.0, YeastType::Instant, YeastType::ActiveDry) - 12.5).abs() < 1e-9);
    assert!((convert_yeast(10.0, YeastType::Instant, YeastType::Fresh) - 30.0).abs() < 1e-9);
    let instant = convert_yeast(21.0, YeastType::Fresh, YeastType::Instant);
    assert!((instant - 7.0).abs() < 1e-9);
    assert!((packets_from_grams(instant) - 1.0).abs() < 1e-9);
}

#[test]
fn pan_scale_round_to_round() {
    let eight = PanSpec {
        shape: PanShape::Round { diameter: 8.0 },
        unit: LengthUnit::Inch,
    };
    let nine = PanSpec {
        shape: PanShape::Round { diameter: 9.0 },
        unit: LengthUnit::Inch,
    };
    let res = convert_pan(eight, nine);
    assert!((res.scale_factor.unwrap() - 81.0 / 64.0).abs() < 1e-9);
}

#[test]
fn pan_scale_rectangle_and_zero_area() {
    let square = PanSpec {
        shape: PanShape::Square { side: 8.0 },
        unit: LengthUnit::Inch,
    };
    let sheet = PanSpec {
        shape: PanShape::Rectangle {
            length: 13.0,
            width: 9.0,
        },
        unit: LengthUnit::Inch,
    };
    let res = convert_pan(square, sheet);
    assert!((res.scale_factor.unwrap() - 117.0 / 64.0).abs() < 1e-9);
    assert!((res.original_area_cm2 - 64.0 * 2.54 * 2.54).abs() < 1e-6);

    let empty = PanSpec {
        shape: PanShape::Round { diameter: 0.0 },
        unit: LengthUnit::Centimeter,
    };
    assert_eq!(convert_pan(empty, sheet).scale_factor, None);
}

fn round(size: f64) -> CakeTier {
    CakeTier {
        shape: CakeShape::Round,
        size,
        unit: LengthUnit::Inch,
    }
}

#[test]
fn cake_servings_chart_and_interpolation() {
    assert_eq!(servings_for_tier(round(8.0), ServingStyle::Party), (20.0, false));
    let (nine, clamped) = servings_for_tier(round(9.0), ServingStyle::Party);
    assert!((nine - 24.0).abs() < 1e-9);
    assert!(!clamped);

    let cake = servings_for_cake(&[round(6.0), round(8.0)], ServingStyle::Party);
    assert_eq!(cake.per_tier, vec![12, 20]);
    assert_eq!(cake.total, 32);
    assert!(!cake.clamped);
}

#[test]
fn cake_servings_clamps_outside_chart() {
    let cake = servings_for_cake(&[round(20.0)], ServingStyle::Party);
    assert_eq!(cake.total, 77);
    assert!(cake.clamped);
}

fn altitude(elevation: f64, unit: ElevationUnit) -> AltitudeInput {
    AltitudeInput {
        elevation,
        unit,
        leavening_tsp: 1.0,
        sugar_cups: 1.0,
        liquid_cups: 1.0,
        oven_temp_f: 350.0,
    }
}

#[test]
fn altitude_boundary_takes_higher_bracket() {
    let below = altitude_adjustment(&altitude(2999.0, ElevationUnit::Feet));
    assert_eq!(below.adjusted_oven_temp_f, 350.0);
    assert!(!below.clamped);

    let at = altitude_adjustment(&altitude(3000.0, ElevationUnit::Feet));
    assert_eq!(at.rule.leavening_reduction, 0.125);
    assert_eq!(at.adjusted_oven_temp_f, 365.0);
}

#[test]
fn altitude_adjustments_at_5000_ft() {
    let res = altitude_adjustment(&altitude(5000.0, ElevationUnit::Feet));
    assert!((res.adjusted_leavening_tsp - 0.75).abs() < 1e-9);
    assert!((res.adjusted_sugar_cups - 0.9375).abs() < 1e-9);
    assert!((res.adjusted_liquid_cups - 1.1875).abs() < 1e-9);
    assert_eq!(res.adjusted_oven_temp_f, 370.0);
    assert!((res.water_boiling_point_f - 202.0).abs() < 1e-9);
}

#[test]
fn altitude_meters_and_clamping() {
    let res = altitude_adjustment(&altitude(2000.0, ElevationUnit::Meters));
    assert_eq!(res.rule.oven_increase_f, 20.0);

    let high = altitude_adjustment(&altitude(20_000.0, ElevationUnit::Feet));
    assert!(high.clamped);
    assert_eq!(high.rule.oven_increase_f, 25.0);

    let low = altitude_adjustment(&altitude(-50.0, ElevationUnit::Feet));
    assert!(low.clamped);
    assert_eq!(low.adjusted_leavening_tsp, 1.0);
    assert_eq!(boiling_point_f(0.0), 212.0);
}

#[test]
fn altitude_floors_negative_recipe_amounts() {
    let res = altitude_adjustment(&AltitudeInput {
        elevation: 5000.0,
        unit: ElevationUnit::Feet,
        leavening_tsp: -1.0,
        sugar_cups: -1.0,
        liquid_cups: -2.0,
        oven_temp_f: -10.0,
    });
    assert_eq!(res.adjusted_leavening_tsp, 0.0);
    assert_eq!(res.adjusted_sugar_cups, 0.0);
    assert_eq!(res.adjusted_liquid_cups, 0.0);
    assert_eq!(res.adjusted_oven_temp_f, 20.0);
}

#[test]
fn cake_total_sums_unrounded_tiers() {
    // 13in 원형 파티 차트는 51.5인분
    let (raw, _) = servings_for_tier(round(13.0), ServingStyle::Party);
    assert!((raw - 51.5).abs() < 1e-9);

    let cake = servings_for_cake(&[round(13.0), round(13.0)], ServingStyle::Party);
    assert_eq!(cake.per_tier, vec![52, 52]);
    assert_eq!(cake.total, 103);
}
