use std::io::{self, Write};

use crate::app::AppError;
use crate::baking::{
    altitude::{self, AltitudeInput, ElevationUnit},
    bakers_percentage::{self, BakersMode, IngredientEntry},
    cake_servings::{self, CakeShape, CakeTier, ServingStyle},
    hydration::{self, HydrationInput},
    pan_size::{self, PanShape, PanSpec},
    yeast::{self, YeastType},
};
use crate::catalog::CalculatorId;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::cooking::{
    air_fryer::{self, AirFryerInput},
    brine::{self, BrineInput, BrineKind, SaltType},
    microwave::{self, MicrowaveInput},
    oven::{self, OvenInput},
    rice::{self, RiceType},
    roast::{self, Doneness, MeatCut, RoastInput},
    thaw::{self, ThawMethod},
    turkey::{self, TurkeyInput},
};
use crate::drinks::coffee::{self, BrewMethod, CoffeeMode, Strength};
use crate::i18n::{fill, keys, Translator};
use crate::ingredient_db;
use crate::quantity::QuantityKind;
use crate::recipe::{
    cost::{self, CostLine, RecipeCostInput},
    portions::{self, Appetite, FoodCategory, PortionInput},
    scaling::{self, RecipeLine, ScaleBy},
};
use crate::rounding::{format_min_sec, format_minutes, format_or_dash};
use crate::units::{LengthUnit, MassUnit, TemperatureUnit, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator(CalculatorId),
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for (i, id) in CalculatorId::ALL.iter().enumerate() {
        println!("{:>2}) {}", i + 1, tr.t(&id.title_key()));
    }
    println!(" S) {}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!(" 0) {}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        let sel = sel.trim();
        if sel == "0" {
            return Ok(MenuChoice::Exit);
        }
        if sel.eq_ignore_ascii_case("s") {
            return Ok(MenuChoice::Settings);
        }
        if let Some(id) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| CalculatorId::ALL.get(i))
        {
            return Ok(MenuChoice::Calculator(*id));
        }
        if let Some(id) = CalculatorId::from_slug(sel) {
            return Ok(MenuChoice::Calculator(id));
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 계산기 화면 하나를 실행한다.
pub fn run_calculator(id: CalculatorId, tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(&id.title_key()));
    match id {
        CalculatorId::BakersPercentage => handle_bakers_percentage(tr),
        CalculatorId::DoughHydration => handle_hydration(tr),
        CalculatorId::YeastConversion => handle_yeast(tr),
        CalculatorId::PanSize => handle_pan_size(tr, cfg),
        CalculatorId::CakeServings => handle_cake_servings(tr, cfg),
        CalculatorId::HighAltitude => handle_altitude(tr, cfg),
        CalculatorId::TurkeyRoast => handle_turkey(tr, cfg),
        CalculatorId::TurkeyThaw => handle_thaw(tr, cfg),
        CalculatorId::MicrowaveWattage => handle_microwave(tr),
        CalculatorId::MeatRoast => handle_roast(tr, cfg),
        CalculatorId::RiceWater => handle_rice(tr, cfg),
        CalculatorId::Brine => handle_brine(tr, cfg),
        CalculatorId::AirFryer => handle_air_fryer(tr, cfg),
        CalculatorId::OvenTemperature => handle_oven(tr, cfg),
        CalculatorId::CoffeeRatio => handle_coffee(tr),
        CalculatorId::RecipeScaler => handle_scaler(tr),
        CalculatorId::RecipeCost => handle_cost(tr),
        CalculatorId::PartyPortions => handle_portions(tr),
        CalculatorId::UnitConverter => handle_unit_conversion(tr),
        CalculatorId::CupsToGrams => handle_cups_to_grams(tr, cfg),
    }
}

fn handle_bakers_percentage(tr: &Translator) -> Result<(), AppError> {
    let mode_sel = choose(
        tr,
        &[
            (tr.t("bakers.mode.forward").to_string(), 0),
            (tr.t("bakers.mode.target").to_string(), 1),
            (tr.t("bakers.mode.reverse").to_string(), 2),
        ],
        0,
    )?;
    let reverse = mode_sel == 2;

    println!("{}", tr.t(keys::BAKERS_PRESETS));
    for (i, p) in bakers_percentage::presets().iter().enumerate() {
        println!("{}) {}", i + 1, p.name);
    }
    let sel = read_line(tr.t(keys::BAKERS_PROMPT_PRESET))?;
    let preset = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| bakers_percentage::presets().get(i));

    let mut ledger = match preset {
        Some(p) => bakers_percentage::ledger_from_preset(p),
        None => {
            let count = read_u32(tr, tr.t(keys::BAKERS_PROMPT_COUNT))?;
            let mut entries = Vec::new();
            for _ in 0..count {
                let name = read_line(tr.t(keys::BAKERS_PROMPT_NAME))?;
                let is_flour = read_yes_no(tr, tr.t(keys::BAKERS_PROMPT_IS_FLOUR))?;
                let is_liquid = !is_flour && read_yes_no(tr, tr.t(keys::BAKERS_PROMPT_IS_LIQUID))?;
                let mut entry = IngredientEntry::with_percentage(name.trim(), 0.0, is_flour, is_liquid);
                if !reverse {
                    let prompt = fill(tr.t(keys::BAKERS_PROMPT_PERCENT), &[("name", name.trim())]);
                    entry.percentage = Some(read_f64(tr, &prompt)?);
                }
                entries.push(entry);
            }
            entries
        }
    };

    let mode = match mode_sel {
        0 => BakersMode::Forward {
            flour_weight_g: read_f64(tr, tr.t(keys::BAKERS_PROMPT_FLOUR_WEIGHT))?,
        },
        1 => BakersMode::Target {
            total_weight_g: read_f64(tr, tr.t(keys::BAKERS_PROMPT_TARGET))?,
        },
        _ => {
            for entry in ledger.iter_mut() {
                let prompt = fill(tr.t(keys::BAKERS_PROMPT_WEIGHT), &[("name", entry.name.as_str())]);
                entry.weight_g = Some(read_f64(tr, &prompt)?);
                entry.percentage = None;
            }
            BakersMode::Reverse
        }
    };

    let result = bakers_percentage::calculate(&ledger, mode);
    let report = bakers_percentage::report(&result);
    println!("{}", tr.t(keys::BAKERS_TABLE_HEADER));
    for row in &report.rows {
        println!("{:<22} {:>8.0} g {:>7.1} %", row.name, row.weight_g, row.percentage);
    }
    println!(
        "{} {:.0} g / {:.1} %",
        tr.t(keys::BAKERS_TOTAL),
        report.total_weight_g,
        report.total_percentage
    );
    println!("{} {:.0} g", tr.t(keys::BAKERS_FLOUR_BASIS), report.flour_weight_g);
    println!(
        "{} {} %",
        tr.t(keys::BAKERS_HYDRATION),
        format_or_dash(report.hydration_pct, 1)
    );
    for p in &report.previews {
        println!(
            "{} x{}: {:.0} g ({:.0} g)",
            tr.t(keys::BAKERS_PREVIEW),
            p.factor,
            p.total_weight_g,
            p.flour_weight_g
        );
    }
    Ok(())
}

fn handle_hydration(tr: &Translator) -> Result<(), AppError> {
    let input = HydrationInput {
        flour_g: read_f64(tr, tr.t(keys::PROMPT_FLOUR_G))?,
        water_g: read_f64(tr, tr.t(keys::PROMPT_WATER_G))?,
        starter_g: read_f64_or(tr, tr.t(keys::HYDRATION_PROMPT_STARTER), 0.0)?,
        starter_hydration_pct: read_f64_or(tr, tr.t(keys::HYDRATION_PROMPT_STARTER_PCT), 100.0)?,
        milk_g: read_f64_or(tr, tr.t(keys::HYDRATION_PROMPT_MILK), 0.0)?,
    };
    let res = hydration::compute_hydration(&input);
    println!(
        "{} {:.0} g / {:.0} g",
        tr.t(keys::HYDRATION_RESULT_TOTALS),
        res.total_flour_g,
        res.total_water_g
    );
    println!(
        "{} {} %",
        tr.t(keys::BAKERS_HYDRATION),
        format_or_dash(res.hydration_pct, 1)
    );
    println!("{} {:.0} g", tr.t(keys::RESULT_DOUGH_WEIGHT), res.dough_weight_g);
    let target = read_f64_or(tr, tr.t(keys::HYDRATION_PROMPT_TARGET), 0.0)?;
    if target > 0.0 {
        let extra = hydration::water_for_target_hydration(&input, target);
        println!("{} {:.0} g", tr.t(keys::HYDRATION_RESULT_EXTRA_WATER), extra);
    }
    Ok(())
}

fn yeast_label(tr: &Translator, y: YeastType) -> String {
    let key = match y {
        YeastType::Instant => "label.yeast.instant",
        YeastType::ActiveDry => "label.yeast.active_dry",
        YeastType::Fresh => "label.yeast.fresh",
    };
    tr.t(key).to_string()
}

fn handle_yeast(tr: &Translator) -> Result<(), AppError> {
    let options: Vec<_> = YeastType::ALL
        .iter()
        .map(|&y| (yeast_label(tr, y), y))
        .collect();
    let amount = read_f64(tr, tr.t(keys::YEAST_PROMPT_AMOUNT))?;
    println!("{}", tr.t(keys::YEAST_FROM));
    let from = choose(tr, &options, 0)?;
    println!("{}", tr.t(keys::YEAST_TO));
    let to = choose(tr, &options, 1)?;
    let converted = yeast::convert_yeast(amount, from, to);
    println!(
        "{} {:.1} g ({:.2} {})",
        tr.t(keys::RESULT),
        converted,
        yeast::packets_from_grams(converted),
        tr.t(keys::YEAST_PACKETS)
    );
    Ok(())
}

fn read_pan(tr: &Translator, unit: LengthUnit) -> Result<PanSpec, AppError> {
    let shape = choose(
        tr,
        &[
            (tr.t("label.shape.round").to_string(), 0),
            (tr.t("label.shape.square").to_string(), 1),
            (tr.t("label.shape.rectangle").to_string(), 2),
        ],
        0,
    )?;
    let shape = match shape {
        0 => PanShape::Round {
            diameter: read_f64(tr, tr.t(keys::PROMPT_DIAMETER))?,
        },
        1 => PanShape::Square {
            side: read_f64(tr, tr.t(keys::PROMPT_SIDE))?,
        },
        _ => PanShape::Rectangle {
            length: read_f64(tr, tr.t(keys::PROMPT_LENGTH))?,
            width: read_f64(tr, tr.t(keys::PROMPT_WIDTH))?,
        },
    };
    Ok(PanSpec { shape, unit })
}

fn handle_pan_size(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let unit = read_length_unit(tr, cfg.default_units.length)?;
    println!("{}", tr.t(keys::PAN_ORIGINAL));
    let original = read_pan(tr, unit)?;
    println!("{}", tr.t(keys::PAN_TARGET));
    let target = read_pan(tr, unit)?;
    let res = pan_size::convert_pan(original, target);
    println!(
        "{} {:.0} cm² → {:.0} cm²",
        tr.t(keys::PAN_AREAS),
        res.original_area_cm2,
        res.target_area_cm2
    );
    println!(
        "{} x{}",
        tr.t(keys::RESULT_SCALE_FACTOR),
        format_or_dash(res.scale_factor, 2)
    );
    Ok(())
}

fn handle_cake_servings(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let style = choose(
        tr,
        &[
            (tr.t("label.serving.party").to_string(), ServingStyle::Party),
            (tr.t("label.serving.wedding").to_string(), ServingStyle::Wedding),
        ],
        0,
    )?;
    let unit = read_length_unit(tr, cfg.default_units.length)?;
    let tiers = read_u32(tr, tr.t(keys::CAKE_PROMPT_TIERS))?.max(1);
    let mut list = Vec::new();
    for _ in 0..tiers {
        let shape = choose(
            tr,
            &[
                (tr.t("label.shape.round").to_string(), CakeShape::Round),
                (tr.t("label.shape.square").to_string(), CakeShape::Square),
            ],
            0,
        )?;
        let size = read_f64(tr, tr.t(keys::CAKE_PROMPT_SIZE))?;
        list.push(CakeTier { shape, size, unit });
    }
    let res = cake_servings::servings_for_cake(&list, style);
    for (i, s) in res.per_tier.iter().enumerate() {
        println!("  #{}: {}", i + 1, s);
    }
    println!("{} {}", tr.t(keys::RESULT_SERVINGS), res.total);
    print_clamped(tr, res.clamped);
    Ok(())
}

fn handle_altitude(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let unit = choose(
        tr,
        &[
            ("ft".to_string(), ElevationUnit::Feet),
            ("m".to_string(), ElevationUnit::Meters),
        ],
        match cfg.unit_system {
            UnitSystem::Metric => 1,
            UnitSystem::UsCustomary => 0,
        },
    )?;
    let input = AltitudeInput {
        elevation: read_f64(tr, tr.t(keys::ALTITUDE_PROMPT_ELEVATION))?,
        unit,
        leavening_tsp: read_f64_or(tr, tr.t(keys::ALTITUDE_PROMPT_LEAVENING), 0.0)?,
        sugar_cups: read_f64_or(tr, tr.t(keys::ALTITUDE_PROMPT_SUGAR), 0.0)?,
        liquid_cups: read_f64_or(tr, tr.t(keys::ALTITUDE_PROMPT_LIQUID), 0.0)?,
        oven_temp_f: read_f64_or(tr, tr.t(keys::ALTITUDE_PROMPT_OVEN), 350.0)?,
    };
    let res = altitude::altitude_adjustment(&input);
    println!(
        "{} {:.2} tsp, {:.2} cup, {:.2} cup, {:.0} °F",
        tr.t(keys::ALTITUDE_RESULT),
        res.adjusted_leavening_tsp,
        res.adjusted_sugar_cups,
        res.adjusted_liquid_cups,
        res.adjusted_oven_temp_f
    );
    println!(
        "{} {:.1} °F",
        tr.t(keys::ALTITUDE_BOILING_POINT),
        res.water_boiling_point_f
    );
    print_clamped(tr, res.clamped);
    Ok(())
}

fn handle_turkey(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let weight = read_f64(tr, tr.t(keys::PROMPT_WEIGHT))?;
    let unit = read_mass_unit(tr, cfg.default_units.mass)?;
    let stuffed = read_yes_no(tr, tr.t(keys::TURKEY_PROMPT_STUFFED))?;
    let res = turkey::turkey_roast_time(&TurkeyInput {
        weight,
        unit,
        stuffed,
    });
    println!(
        "{} {:.2} – {:.2} h @ {:.0} °F",
        tr.t(keys::RESULT_COOK_TIME),
        res.roast_hours.min,
        res.roast_hours.max,
        res.oven_temp_f
    );
    println!(
        "{} {:.0} °F, {} {}–{} min",
        tr.t(keys::RESULT_INTERNAL_TEMP),
        res.safe_internal_temp_f,
        tr.t(keys::RESULT_REST),
        res.rest_minutes.0,
        res.rest_minutes.1
    );
    print_clamped(tr, res.clamped);
    Ok(())
}

fn handle_thaw(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let weight = read_f64(tr, tr.t(keys::PROMPT_WEIGHT))?;
    let unit = read_mass_unit(tr, cfg.default_units.mass)?;
    let method = choose(
        tr,
        &[
            (tr.t("label.thaw.fridge").to_string(), ThawMethod::Refrigerator),
            (tr.t("label.thaw.cold_water").to_string(), ThawMethod::ColdWater),
        ],
        0,
    )?;
    let res = thaw::thaw_time(weight, unit, method);
    println!(
        "{} {:.1} h ({:.1} d)",
        tr.t(keys::RESULT_THAW_TIME),
        res.hours,
        res.days
    );
    if res.water_changes > 0 {
        println!("{} {}", tr.t(keys::THAW_WATER_CHANGES), res.water_changes);
    }
    Ok(())
}

fn handle_microwave(tr: &Translator) -> Result<(), AppError> {
    let input = MicrowaveInput {
        base_minutes: read_f64(tr, tr.t(keys::MICROWAVE_PROMPT_MINUTES))?,
        original_watts: read_f64(tr, tr.t(keys::MICROWAVE_PROMPT_ORIGINAL))?,
        target_watts: read_f64(tr, tr.t(keys::MICROWAVE_PROMPT_TARGET))?,
    };
    let res = microwave::convert_microwave_time(&input);
    println!(
        "{} {:.2} min ({})",
        tr.t(keys::RESULT_COOK_TIME),
        res.adjusted_minutes,
        format_min_sec(res.adjusted_minutes)
    );
    print_clamped(tr, res.clamped);
    println!("{}", tr.t(keys::MICROWAVE_TABLE));
    for (w, m) in microwave::conversion_table(input.base_minutes, input.original_watts) {
        println!("  {:>5.0} W  {}", w, format_min_sec(m));
    }
    Ok(())
}

fn cut_label(tr: &Translator, cut: MeatCut) -> String {
    let key = match cut {
        MeatCut::BeefRib => "label.cut.beef_rib",
        MeatCut::BeefTenderloin => "label.cut.beef_tenderloin",
        MeatCut::PorkLoin => "label.cut.pork_loin",
        MeatCut::LambLeg => "label.cut.lamb_leg",
        MeatCut::WholeChicken => "label.cut.whole_chicken",
    };
    tr.t(key).to_string()
}

fn handle_roast(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let cuts: Vec<_> = MeatCut::ALL.iter().map(|&c| (cut_label(tr, c), c)).collect();
    let cut = choose(tr, &cuts, 0)?;
    let doneness = if cut.has_doneness() {
        choose(
            tr,
            &[
                (tr.t("label.doneness.rare").to_string(), Doneness::Rare),
                (tr.t("label.doneness.medium_rare").to_string(), Doneness::MediumRare),
                (tr.t("label.doneness.medium").to_string(), Doneness::Medium),
                (tr.t("label.doneness.well_done").to_string(), Doneness::WellDone),
            ],
            1,
        )?
    } else {
        Doneness::Medium
    };
    let weight = read_f64(tr, tr.t(keys::PROMPT_WEIGHT))?;
    let unit = read_mass_unit(tr, cfg.default_units.mass)?;
    let res = roast::roast_time(&RoastInput {
        cut,
        doneness,
        weight,
        unit,
    });
    println!(
        "{} {} @ {:.0} °F ({:.0} °C)",
        tr.t(keys::RESULT_COOK_TIME),
        format_minutes(res.total_minutes),
        res.profile.oven_temp_f,
        res.oven_temp_c
    );
    println!(
        "{} {:.0} °F ({:.0} °C), {} {:.0} min",
        tr.t(keys::RESULT_INTERNAL_TEMP),
        res.profile.internal_temp_f,
        res.internal_temp_c,
        tr.t(keys::RESULT_REST),
        res.profile.rest_minutes
    );
    Ok(())
}

fn rice_label(tr: &Translator, r: RiceType) -> String {
    let key = match r {
        RiceType::WhiteLongGrain => "label.rice.white_long_grain",
        RiceType::Jasmine => "label.rice.jasmine",
        RiceType::Basmati => "label.rice.basmati",
        RiceType::ShortGrain => "label.rice.short_grain",
        RiceType::BrownLongGrain => "label.rice.brown",
        RiceType::Wild => "label.rice.wild",
    };
    tr.t(key).to_string()
}

fn handle_rice(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let options: Vec<_> = RiceType::ALL.iter().map(|&r| (rice_label(tr, r), r)).collect();
    let rice_type = choose(tr, &options, 0)?;
    let amount = read_f64(tr, tr.t(keys::RICE_PROMPT_AMOUNT))?;
    let unit = read_volume_unit(tr, cfg.default_units.volume)?;
    let plan = rice::rice_plan(rice_type, amount, unit);
    println!(
        "{} {:.2} {}",
        tr.t(keys::RICE_RESULT_WATER),
        plan.water,
        plan.unit.symbol()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RICE_RESULT_YIELD),
        plan.cooked_yield,
        plan.unit.symbol()
    );
    println!(
        "{} {:.0} + {:.0} min",
        tr.t(keys::RESULT_COOK_TIME),
        plan.profile.simmer_minutes,
        rice::REST_MINUTES
    );
    Ok(())
}

fn salt_label(tr: &Translator, s: SaltType) -> String {
    let key = match s {
        SaltType::Table => "label.salt.table",
        SaltType::MortonKosher => "label.salt.morton",
        SaltType::DiamondKosher => "label.salt.diamond",
    };
    tr.t(key).to_string()
}

fn handle_brine(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let wet = choose(
        tr,
        &[
            (tr.t("label.brine.wet").to_string(), true),
            (tr.t("label.brine.dry").to_string(), false),
        ],
        0,
    )?;
    let kind = if wet {
        let water = read_f64(tr, tr.t(keys::BRINE_PROMPT_WATER))?;
        let unit = read_volume_unit(tr, cfg.default_units.volume)?;
        BrineKind::Wet { water, unit }
    } else {
        let meat = read_f64(tr, tr.t(keys::PROMPT_WEIGHT))?;
        let unit = read_mass_unit(tr, cfg.default_units.mass)?;
        BrineKind::Dry { meat, unit }
    };
    let default_pct = if wet { 5.0 } else { 1.0 };
    let salt_pct = read_f64_or(tr, tr.t(keys::BRINE_PROMPT_PCT), default_pct)?;
    let salts: Vec<_> = SaltType::ALL.iter().map(|&s| (salt_label(tr, s), s)).collect();
    let salt = choose(tr, &salts, 0)?;
    let res = brine::brine(&BrineInput {
        kind,
        salt_pct,
        salt,
    });
    println!(
        "{} {:.0} g ≈ {:.1} tbsp ({:.2} cup) @ {:.1} %",
        tr.t(keys::BRINE_RESULT_SALT),
        res.salt_g,
        res.salt_tbsp,
        res.salt_cups,
        res.applied_pct
    );
    Ok(())
}

fn handle_air_fryer(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let oven_temp = read_f64(tr, tr.t(keys::PROMPT_OVEN_TEMP))?;
    let unit = read_temperature_unit(tr, cfg.default_units.temperature)?;
    let oven_minutes = read_f64(tr, tr.t(keys::PROMPT_OVEN_MINUTES))?;
    let res = air_fryer::convert_to_air_fryer(&AirFryerInput {
        oven_temp,
        unit,
        oven_minutes,
    });
    println!(
        "{} {:.0} {}, {:.0} min",
        tr.t(keys::RESULT),
        res.temp,
        res.unit.symbol(),
        res.minutes
    );
    println!("{} {:.0} min", tr.t(keys::AIR_FRYER_CHECK), res.check_at_minutes);
    print_clamped(tr, res.clamped);
    Ok(())
}

fn handle_oven(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let value = read_f64(tr, tr.t(keys::PROMPT_OVEN_TEMP))?;
    let unit = read_temperature_unit(tr, cfg.default_units.temperature)?;
    let is_fan = read_yes_no(tr, tr.t(keys::OVEN_PROMPT_FAN))?;
    let res = oven::oven_temperature(&OvenInput { value, unit, is_fan });
    println!(
        "{} {:.0} °C / {:.0} °F",
        tr.t(keys::OVEN_CONVENTIONAL),
        res.conventional_c,
        res.conventional_f
    );
    println!("{} {:.0} °C", tr.t(keys::OVEN_FAN), res.fan_c);
    println!(
        "{} {}",
        tr.t(keys::OVEN_GAS_MARK),
        oven::gas_mark_label(res.gas_mark)
    );
    print_clamped(tr, res.gas_mark_clamped);
    Ok(())
}

fn method_label(tr: &Translator, m: BrewMethod) -> String {
    let key = match m {
        BrewMethod::PourOver => "label.brew.pour_over",
        BrewMethod::Drip => "label.brew.drip",
        BrewMethod::FrenchPress => "label.brew.french_press",
        BrewMethod::AeroPress => "label.brew.aeropress",
        BrewMethod::Espresso => "label.brew.espresso",
        BrewMethod::ColdBrew => "label.brew.cold_brew",
    };
    tr.t(key).to_string()
}

fn handle_coffee(tr: &Translator) -> Result<(), AppError> {
    let methods: Vec<_> = BrewMethod::ALL
        .iter()
        .map(|&m| (method_label(tr, m), m))
        .collect();
    let method = choose(tr, &methods, 0)?;
    let strength = choose(
        tr,
        &[
            (tr.t("label.strength.mild").to_string(), Strength::Mild),
            (tr.t("label.strength.medium").to_string(), Strength::Medium),
            (tr.t("label.strength.strong").to_string(), Strength::Strong),
        ],
        1,
    )?;
    let from_water = choose(
        tr,
        &[
            (tr.t("label.coffee.from_water").to_string(), true),
            (tr.t("label.coffee.from_coffee").to_string(), false),
        ],
        0,
    )?;
    let mode = if from_water {
        CoffeeMode::FromWater {
            water_ml: read_f64(tr, tr.t(keys::COFFEE_PROMPT_WATER))?,
        }
    } else {
        CoffeeMode::FromCoffee {
            coffee_g: read_f64(tr, tr.t(keys::COFFEE_PROMPT_COFFEE))?,
        }
    };
    let res = coffee::brew(method, strength, mode);
    println!(
        "1:{:.1} → {:.1} g / {:.0} mL ({} {:.0} mL)",
        res.ratio,
        res.coffee_g,
        res.water_ml,
        tr.t(keys::COFFEE_BREWED),
        res.brewed_ml
    );
    Ok(())
}

fn handle_scaler(tr: &Translator) -> Result<(), AppError> {
    let original = read_f64(tr, tr.t(keys::SCALER_PROMPT_ORIGINAL))?;
    let desired = read_f64(tr, tr.t(keys::SCALER_PROMPT_DESIRED))?;
    let count = read_u32(tr, tr.t(keys::SCALER_PROMPT_COUNT))?;
    let mut lines = Vec::new();
    for _ in 0..count {
        let name = read_line(tr.t(keys::BAKERS_PROMPT_NAME))?;
        let quantity = read_f64(tr, tr.t(keys::SCALER_PROMPT_QUANTITY))?;
        let unit = read_line(tr.t(keys::SCALER_PROMPT_UNIT))?;
        lines.push(RecipeLine {
            name: name.trim().to_string(),
            quantity,
            unit: unit.trim().to_string(),
        });
    }
    let scaled = scaling::scale_recipe(&lines, ScaleBy::Servings { original, desired });
    println!("{} x{:.2}", tr.t(keys::RESULT_SCALE_FACTOR), scaled.factor);
    for line in &scaled.lines {
        println!("  {:<20} {} {}", line.name, line.display, line.unit);
    }
    Ok(())
}

fn handle_cost(tr: &Translator) -> Result<(), AppError> {
    let count = read_u32(tr, tr.t(keys::SCALER_PROMPT_COUNT))?;
    let mut lines = Vec::new();
    for _ in 0..count {
        let name = read_line(tr.t(keys::BAKERS_PROMPT_NAME))?;
        lines.push(CostLine {
            name: name.trim().to_string(),
            package_price: read_f64(tr, tr.t(keys::COST_PROMPT_PRICE))?,
            package_size: read_f64(tr, tr.t(keys::COST_PROMPT_SIZE))?,
            amount_used: read_f64(tr, tr.t(keys::COST_PROMPT_USED))?,
        });
    }
    let servings = read_f64(tr, tr.t(keys::COST_PROMPT_SERVINGS))?;
    let target_pct = read_f64_or(tr, tr.t(keys::COST_PROMPT_TARGET_PCT), 30.0)?;
    let input = RecipeCostInput {
        lines,
        servings,
        target_food_cost_ratio: target_pct / 100.0,
    };
    let res = cost::recipe_cost(&input);
    for (line, c) in input.lines.iter().zip(&res.line_costs) {
        println!("  {:<20} {:.2}", line.name, c);
    }
    println!("{} {:.2}", tr.t(keys::COST_TOTAL), res.total_cost);
    println!(
        "{} {}",
        tr.t(keys::COST_PER_SERVING),
        format_or_dash(res.cost_per_serving, 2)
    );
    println!(
        "{} {}",
        tr.t(keys::COST_SUGGESTED_PRICE),
        format_or_dash(res.suggested_price_per_serving, 2)
    );
    Ok(())
}

fn category_label(tr: &Translator, c: FoodCategory) -> String {
    let key = match c {
        FoodCategory::BonelessMeat => "label.food.boneless_meat",
        FoodCategory::BoneInMeat => "label.food.bone_in_meat",
        FoodCategory::Fish => "label.food.fish",
        FoodCategory::DryPasta => "label.food.dry_pasta",
        FoodCategory::DryRice => "label.food.dry_rice",
        FoodCategory::Vegetables => "label.food.vegetables",
        FoodCategory::GreenSalad => "label.food.green_salad",
        FoodCategory::Bread => "label.food.bread",
        FoodCategory::Cheese => "label.food.cheese",
    };
    tr.t(key).to_string()
}

fn handle_portions(tr: &Translator) -> Result<(), AppError> {
    let adults = read_u32(tr, tr.t(keys::PORTIONS_PROMPT_ADULTS))?;
    let children = read_u32(tr, tr.t(keys::PORTIONS_PROMPT_CHILDREN))?;
    let appetite = choose(
        tr,
        &[
            (tr.t("label.appetite.light").to_string(), Appetite::Light),
            (tr.t("label.appetite.normal").to_string(), Appetite::Normal),
            (tr.t("label.appetite.hearty").to_string(), Appetite::Hearty),
        ],
        1,
    )?;
    for (i, c) in FoodCategory::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, category_label(tr, *c));
    }
    let sel = read_line(tr.t(keys::PORTIONS_PROMPT_CATEGORIES))?;
    let categories: Vec<FoodCategory> = sel
        .split([',', ' '])
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .filter_map(|n| n.checked_sub(1))
        .filter_map(|i| FoodCategory::ALL.get(i).copied())
        .collect();
    let lines = portions::plan_portions(&PortionInput {
        adults,
        children,
        appetite,
        categories,
    });
    for line in lines {
        println!(
            "  {:<20} {:>8.0} g ({:.1} lb)",
            category_label(tr, line.category),
            line.total_g,
            line.total_lb
        );
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    let kinds: Vec<_> = QuantityKind::ALL
        .iter()
        .map(|&k| {
            let key = match k {
                QuantityKind::Mass => "label.quantity.mass",
                QuantityKind::Volume => "label.quantity.volume",
                QuantityKind::Temperature => "label.quantity.temperature",
                QuantityKind::Length => "label.quantity.length",
            };
            (tr.t(key).to_string(), k)
        })
        .collect();
    let kind = choose(tr, &kinds, 0)?;
    println!("({})", kind.unit_hint());
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result:.4} {}", tr.t(keys::RESULT), to_unit.trim());
    Ok(())
}

fn handle_cups_to_grams(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    for (i, ing) in ingredient_db::ingredients().iter().enumerate() {
        println!("{:>2}) {} ({:.0} g/cup)", i + 1, ing.name, ing.grams_per_cup);
    }
    let ingredient = loop {
        let sel = read_line(tr.t(keys::CUPS_PROMPT_INGREDIENT))?;
        let sel = sel.trim();
        let by_index = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ingredient_db::ingredients().get(i));
        if let Some(ing) = by_index.or_else(|| ingredient_db::find_ingredient(sel)) {
            break ing;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let to_grams = choose(
        tr,
        &[
            (tr.t("label.cups.volume_to_grams").to_string(), true),
            (tr.t("label.cups.grams_to_volume").to_string(), false),
        ],
        0,
    )?;
    let unit = read_volume_unit(tr, cfg.default_units.volume)?;
    if to_grams {
        let amount = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
        let g = ingredient_db::volume_to_grams(ingredient, amount, unit);
        println!("{} {:.1} g", tr.t(keys::RESULT), g);
    } else {
        let grams = read_f64(tr, tr.t(keys::PROMPT_GRAMS))?;
        let v = ingredient_db::grams_to_volume(ingredient, grams, unit);
        println!(
            "{} {} {}",
            tr.t(keys::RESULT),
            scaling::kitchen_fraction(v),
            unit.symbol()
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.unit_system,
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => cfg.set_unit_system(UnitSystem::Metric),
        "2" => cfg.set_unit_system(UnitSystem::UsCustomary),
        "3" => cfg.language = "en".to_string(),
        "4" => cfg.language = "ko".to_string(),
        "5" => cfg.language = "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!(
        "{} {:?} / {}",
        tr.t(keys::SETTINGS_SAVED),
        cfg.unit_system,
        cfg.language
    );
    Ok(())
}

fn print_clamped(tr: &Translator, clamped: bool) {
    if clamped {
        println!("{}", tr.t(keys::NOTE_CLAMPED));
    }
}

/// 번호 목록에서 하나를 고른다. 빈 입력이면 `default` 번째 항목.
fn choose<T: Copy>(tr: &Translator, options: &[(String, T)], default: usize) -> Result<T, AppError> {
    let line = options
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            let mark = if i == default { "*" } else { "" };
            format!("{}){mark} {label}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("{line}");
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            if let Some((_, v)) = options.get(default) {
                return Ok(*v);
            }
        }
        if let Some((_, v)) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
        {
            return Ok(*v);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_mass_unit(tr: &Translator, default: MassUnit) -> Result<MassUnit, AppError> {
    let units = [MassUnit::Gram, MassUnit::Kilogram, MassUnit::Ounce, MassUnit::Pound];
    unit_choice(tr, &units, default, |u| u.symbol())
}

fn read_volume_unit(tr: &Translator, default: VolumeUnit) -> Result<VolumeUnit, AppError> {
    let units = [
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::Teaspoon,
        VolumeUnit::Tablespoon,
        VolumeUnit::FluidOunce,
        VolumeUnit::Cup,
        VolumeUnit::Quart,
        VolumeUnit::Gallon,
    ];
    unit_choice(tr, &units, default, |u| u.symbol())
}

fn read_temperature_unit(
    tr: &Translator,
    default: TemperatureUnit,
) -> Result<TemperatureUnit, AppError> {
    let units = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];
    unit_choice(tr, &units, default, |u| u.symbol())
}

fn read_length_unit(tr: &Translator, default: LengthUnit) -> Result<LengthUnit, AppError> {
    let units = [LengthUnit::Centimeter, LengthUnit::Millimeter, LengthUnit::Inch];
    unit_choice(tr, &units, default, |u| u.symbol())
}

fn unit_choice<U: Copy + PartialEq>(
    tr: &Translator,
    units: &[U],
    default: U,
    symbol: impl Fn(&U) -> &'static str,
) -> Result<U, AppError> {
    println!("{}", tr.t(keys::PROMPT_UNIT));
    let options: Vec<_> = units.iter().map(|u| (symbol(u).to_string(), *u)).collect();
    let default_idx = units.iter().position(|u| *u == default).unwrap_or(0);
    choose(tr, &options, default_idx)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓴다.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt}[{default}] "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(tr: &Translator, prompt: &str) -> Result<bool, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" | "예" | "ㅇ" => return Ok(true),
            "n" | "no" | "" | "아니오" | "ㄴ" => return Ok(false),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
