use assert_float_eq::*;
use calc_kitchen::cooking::{
    air_fryer::{convert_to_air_fryer, AirFryerInput},
    brine::{brine, BrineInput, BrineKind, SaltType, SATURATION_PCT},
    microwave::{conversion_table, convert_microwave_time, MicrowaveInput},
    oven::{fahrenheit_for_gas_mark, gas_mark_for_fahrenheit, gas_mark_label, oven_temperature, OvenInput},
    rice::{rice_plan, RiceType},
    roast::{roast_time, Doneness, MeatCut, RoastInput},
    thaw::{thaw_time, ThawMethod},
    turkey::{turkey_roast_time, TurkeyInput},
};
use calc_kitchen::drinks::coffee::{brew, BrewMethod, CoffeeMode, Strength};
use calc_kitchen::rounding::format_min_sec;
use calc_kitchen::units::{MassUnit, TemperatureUnit, VolumeUnit};

#[test]
fn microwave_lower_wattage_takes_longer() {
    let res = convert_microwave_time(&MicrowaveInput {
        base_minutes: 5.0,
        original_watts: 1000.0,
        target_watts: 700.0,
    });
    assert_float_absolute_eq!(res.adjusted_minutes, 50.0 / 7.0, 1e-9);
    assert_eq!(format_min_sec(res.adjusted_minutes), "7:09");
    assert!(!res.clamped);
}

#[test]
fn microwave_wattage_is_clamped() {
    let res = convert_microwave_time(&MicrowaveInput {
        base_minutes: 3.0,
        original_watts: 900.0,
        target_watts: 100.0,
    });
    assert!(res.clamped);
    assert_float_absolute_eq!(res.adjusted_minutes, 9.0, 1e-9);

    let table = conversion_table(5.0, 1000.0);
    assert_eq!(table.len(), 7);
    assert!(table.iter().any(|&(w, m)| w == 1000.0 && (m - 5.0).abs() < 1e-9));
}

fn turkey(weight: f64, unit: MassUnit, stuffed: bool) -> TurkeyInput {
    TurkeyInput {
        weight,
        unit,
        stuffed,
    }
}

#[test]
fn turkey_bracket_boundary_goes_up() {
    let at = turkey_roast_time(&turkey(12.0, MassUnit::Pound, false));
    assert_eq!((at.roast_hours.min, at.roast_hours.max), (3.0, 3.75));
    let below = turkey_roast_time(&turkey(11.99, MassUnit::Pound, false));
    assert_eq!((below.roast_hours.min, below.roast_hours.max), (2.75, 3.0));
    assert!(!at.clamped && !below.clamped);
    assert_eq!(at.safe_internal_temp_f, 165.0);
}

#[test]
fn turkey_stuffed_and_metric() {
    let stuffed = turkey_roast_time(&turkey(10.0, MassUnit::Pound, true));
    assert_eq!((stuffed.roast_hours.min, stuffed.roast_hours.max), (3.0, 3.5));

    // 6 kg ≈ 13.2 lb
    let kg = turkey_roast_time(&turkey(6.0, MassUnit::Kilogram, false));
    assert_float_absolute_eq!(kg.weight_lb, 13.227_735_731, 1e-6);
    assert_eq!(kg.roast_hours.min, 3.0);
}

#[test]
fn turkey_outside_chart_is_clamped() {
    let big = turkey_roast_time(&turkey(30.0, MassUnit::Pound, false));
    assert!(big.clamped);
    assert_eq!((big.roast_hours.min, big.roast_hours.max), (4.5, 5.0));

    let small = turkey_roast_time(&turkey(3.0, MassUnit::Pound, false));
    assert!(small.clamped);
    assert_eq!(small.roast_hours.min, 1.5);
}

#[test]
fn thawing_times() {
    let fridge = thaw_time(12.0, MassUnit::Pound, ThawMethod::Refrigerator);
    assert_eq!(fridge.hours, 72.0);
    assert_eq!(fridge.days, 3.0);
    assert_eq!(fridge.water_changes, 0);

    let cold = thaw_time(12.0, MassUnit::Pound, ThawMethod::ColdWater);
    assert_eq!(cold.hours, 6.0);
    assert_eq!(cold.water_changes, 12);
}

#[test]
fn roast_minutes_per_pound() {
    let res = roast_time(&RoastInput {
        cut: MeatCut::BeefRib,
        doneness: Doneness::MediumRare,
        weight: 5.0,
        unit: MassUnit::Pound,
    });
    assert_eq!(res.total_minutes, 85.0);
    assert_eq!(res.profile.internal_temp_f, 130.0);

    // 돼지고기는 굽기 정도와 무관하게 145°F
    let pork = roast_time(&RoastInput {
        cut: MeatCut::PorkLoin,
        doneness: Doneness::Rare,
        weight: 3.0,
        unit: MassUnit::Pound,
    });
    assert_eq!(pork.profile.internal_temp_f, 145.0);
    assert_float_absolute_eq!(pork.internal_temp_c, 62.777_777, 1e-5);
    assert!(!MeatCut::PorkLoin.has_doneness());
}

#[test]
fn rice_water_and_yield() {
    let plan = rice_plan(RiceType::WhiteLongGrain, 1.0, VolumeUnit::Cup);
    assert_eq!(plan.water, 2.0);
    assert_eq!(plan.cooked_yield, 3.0);
    assert_eq!(plan.total_minutes, 28.0);

    let brown = rice_plan(RiceType::BrownLongGrain, 200.0, VolumeUnit::Milliliter);
    assert_eq!(brown.water, 450.0);
    assert_eq!(brown.unit, VolumeUnit::Milliliter);
}

#[test]
fn wet_brine_uses_solution_concentration() {
    let res = brine(&BrineInput {
        kind: BrineKind::Wet {
            water: 1000.0,
            unit: VolumeUnit::Milliliter,
        },
        salt_pct: 5.0,
        salt: SaltType::Table,
    });
    assert_float_absolute_eq!(res.salt_g, 1000.0 * 5.0 / 95.0, 1e-9);
    assert_float_absolute_eq!(res.salt_cups, res.salt_g / 292.0, 1e-9);
    assert_float_absolute_eq!(res.salt_tbsp, res.salt_cups * 16.0, 1e-6);
}

#[test]
fn dry_brine_and_saturation_cap() {
    let dry = brine(&BrineInput {
        kind: BrineKind::Dry {
            meat: 1.0,
            unit: MassUnit::Kilogram,
        },
        salt_pct: 1.0,
        salt: SaltType::DiamondKosher,
    });
    assert_float_absolute_eq!(dry.salt_g, 10.0, 1e-9);
    // 같은 무게라도 다이아몬드 코셔가 부피가 크다
    assert!(dry.salt_tbsp > 1.0);

    let capped = brine(&BrineInput {
        kind: BrineKind::Wet {
            water: 1.0,
            unit: VolumeUnit::Liter,
        },
        salt_pct: 40.0,
        salt: SaltType::MortonKosher,
    });
    assert_eq!(capped.applied_pct, SATURATION_PCT);
}

#[test]
fn air_fryer_from_oven_recipe() {
    let res = convert_to_air_fryer(&AirFryerInput {
        oven_temp: 400.0,
        unit: TemperatureUnit::Fahrenheit,
        oven_minutes: 20.0,
    });
    assert_eq!(res.temp, 375.0);
    assert_float_absolute_eq!(res.minutes, 16.0, 1e-9);
    assert_float_absolute_eq!(res.check_at_minutes, 8.0, 1e-9);
    assert!(!res.clamped);

    let hot = convert_to_air_fryer(&AirFryerInput {
        oven_temp: 475.0,
        unit: TemperatureUnit::Fahrenheit,
        oven_minutes: 10.0,
    });
    assert!(hot.clamped);
    assert_eq!(hot.temp, 400.0);

    let celsius = convert_to_air_fryer(&AirFryerInput {
        oven_temp: 200.0,
        unit: TemperatureUnit::Celsius,
        oven_minutes: 30.0,
    });
    assert_eq!(celsius.unit, TemperatureUnit::Celsius);
    assert_float_absolute_eq!(celsius.temp, (392.0 - 25.0 - 32.0) * 5.0 / 9.0, 1e-9);
}

#[test]
fn oven_gas_marks() {
    let reading = oven_temperature(&OvenInput {
        value: 180.0,
        unit: TemperatureUnit::Celsius,
        is_fan: false,
    });
    assert_float_absolute_eq!(reading.conventional_f, 356.0, 1e-9);
    assert_eq!(reading.gas_mark, 4.0);
    assert_float_absolute_eq!(reading.fan_c, 160.0, 1e-9);

    let fan = oven_temperature(&OvenInput {
        value: 160.0,
        unit: TemperatureUnit::Celsius,
        is_fan: true,
    });
    assert_float_absolute_eq!(fan.conventional_c, 180.0, 1e-9);

    assert_eq!(gas_mark_for_fahrenheit(475.0), (9.0, false));
    assert_eq!(gas_mark_for_fahrenheit(550.0), (9.0, true));
    assert_eq!(fahrenheit_for_gas_mark(0.5), Some(250.0));
    assert_eq!(fahrenheit_for_gas_mark(10.0), None);
    assert_eq!(gas_mark_label(0.25), "1/4");
    assert_eq!(gas_mark_label(6.0), "6");
}

#[test]
fn coffee_ratios() {
    let pour = brew(
        BrewMethod::PourOver,
        Strength::Medium,
        CoffeeMode::FromWater { water_ml: 320.0 },
    );
    assert_float_absolute_eq!(pour.coffee_g, 20.0, 1e-9);
    assert_float_absolute_eq!(pour.brewed_ml, 280.0, 1e-9);

    let press = brew(
        BrewMethod::FrenchPress,
        Strength::Strong,
        CoffeeMode::FromCoffee { coffee_g: 30.0 },
    );
    assert_float_absolute_eq!(press.water_ml, 405.0, 1e-9);
}
