//! 베이커스 퍼센트 엔진 회귀 테스트.
use assert_float_eq::*;
use calc_kitchen::baking::bakers_percentage::{
    self, calculate, report, scaled_previews, BakersMode, IngredientEntry,
};

fn basic_bread() -> Vec<IngredientEntry> {
    vec![
        IngredientEntry::with_percentage("Flour", 100.0, true, false),
        IngredientEntry::with_percentage("Water", 65.0, false, true),
        IngredientEntry::with_percentage("Salt", 2.0, false, false),
        IngredientEntry::with_percentage("Yeast", 1.0, false, false),
    ]
}

fn weights(rows: &[bakers_percentage::ReportRow]) -> Vec<f64> {
    rows.iter().map(|r| r.weight_g).collect()
}

#[test]
fn forward_from_flour_weight() {
    let res = calculate(&basic_bread(), BakersMode::Forward { flour_weight_g: 500.0 });
    let rep = report(&res);
    assert_eq!(weights(&rep.rows), vec![500.0, 325.0, 10.0, 5.0]);
    assert_eq!(rep.total_weight_g, 840.0);
    assert_eq!(rep.total_percentage, 168.0);
    assert_eq!(rep.hydration_pct, Some(65.0));
    assert_eq!(rep.flour_weight_g, 500.0);
}

#[test]
fn target_dough_weight_back_solves_flour() {
    let res = calculate(&basic_bread(), BakersMode::Target { total_weight_g: 1000.0 });
    // 1000 / 1.68
    assert_float_absolute_eq!(res.flour_weight_g, 595.238_095, 1e-5);
    let rep = report(&res);
    assert_eq!(weights(&rep.rows), vec![595.0, 387.0, 12.0, 6.0]);
    // 합계는 반올림 전 값으로 구한다
    assert_float_absolute_eq!(res.total_weight_g(), 1000.0, 1e-9);
    assert_eq!(rep.total_weight_g, 1000.0);
}

#[test]
fn reverse_from_weights() {
    let entries = vec![
        IngredientEntry::with_weight("Flour", 500.0, true, false),
        IngredientEntry::with_weight("Water", 325.0, false, true),
        IngredientEntry::with_weight("Salt", 10.0, false, false),
        IngredientEntry::with_weight("Yeast", 5.0, false, false),
    ];
    let res = calculate(&entries, BakersMode::Reverse);
    let pcts: Vec<f64> = res.entries.iter().map(|e| e.display_percentage()).collect();
    assert_eq!(pcts, vec![100.0, 65.0, 2.0, 1.0]);
    assert_eq!(res.flour_weight_g, 500.0);
}

#[test]
fn reverse_sums_every_flour_into_the_basis() {
    let entries = vec![
        IngredientEntry::with_weight("Bread Flour", 450.0, true, false),
        IngredientEntry::with_weight("Rye", 50.0, true, false),
        IngredientEntry::with_weight("Water", 375.0, false, true),
    ];
    let res = calculate(&entries, BakersMode::Reverse);
    assert_eq!(res.flour_weight_g, 500.0);
    assert_float_absolute_eq!(res.entries[0].percentage, 90.0, 1e-9);
    assert_float_absolute_eq!(res.entries[1].percentage, 10.0, 1e-9);
    assert_float_absolute_eq!(res.hydration_pct().unwrap(), 75.0, 1e-9);
}

#[test]
fn forward_then_reverse_recovers_percentages() {
    let ledger = bakers_percentage::ledger_from_preset(bakers_percentage::preset("brioche").unwrap());
    let fwd = calculate(&ledger, BakersMode::Forward { flour_weight_g: 750.0 });
    let back: Vec<IngredientEntry> = fwd
        .entries
        .iter()
        .map(|e| IngredientEntry::with_weight(&e.name, e.weight_g, e.is_flour, e.is_liquid))
        .collect();
    let rev = calculate(&back, BakersMode::Reverse);
    for (a, b) in ledger.iter().zip(&rev.entries) {
        assert_float_absolute_eq!(a.percentage.unwrap(), b.percentage, 1e-9);
    }
}

#[test]
fn zero_flour_reports_zero_percent() {
    let entries = vec![
        IngredientEntry::with_weight("Flour", 0.0, true, false),
        IngredientEntry::with_weight("Water", 300.0, false, true),
    ];
    let res = calculate(&entries, BakersMode::Reverse);
    assert!(res.entries.iter().all(|e| e.percentage == 0.0));
    assert_eq!(res.entries[1].weight_g, 300.0);
}

#[test]
fn zero_or_negative_inputs_never_produce_nan() {
    let res = calculate(&basic_bread(), BakersMode::Forward { flour_weight_g: -10.0 });
    assert!(res.entries.iter().all(|e| e.weight_g == 0.0));

    let empty = vec![IngredientEntry::with_percentage("Flour", 0.0, true, false)];
    let res = calculate(&empty, BakersMode::Target { total_weight_g: 1000.0 });
    assert_eq!(res.flour_weight_g, 0.0);
    assert!(res.total_weight_g().is_finite());
}

#[test]
fn negative_entry_values_are_floored() {
    let entries = vec![
        IngredientEntry::with_weight("Flour", 500.0, true, false),
        IngredientEntry::with_weight("Water", -100.0, false, true),
    ];
    let res = calculate(&entries, BakersMode::Reverse);
    assert_eq!(res.entries[1].weight_g, 0.0);
    assert_eq!(res.entries[1].percentage, 0.0);
    assert_eq!(res.hydration_pct(), Some(0.0));

    let entries = vec![
        IngredientEntry::with_percentage("Flour", 100.0, true, false),
        IngredientEntry::with_percentage("Water", -65.0, false, true),
    ];
    let res = calculate(&entries, BakersMode::Forward { flour_weight_g: 500.0 });
    assert_eq!(res.entries[1].weight_g, 0.0);
    assert_eq!(res.total_weight_g(), 500.0);

    let res = calculate(&entries, BakersMode::Target { total_weight_g: 1000.0 });
    assert_eq!(res.flour_weight_g, 1000.0);
}

#[test]
fn hydration_is_absent_without_liquids() {
    let entries = vec![
        IngredientEntry::with_percentage("Flour", 100.0, true, false),
        IngredientEntry::with_percentage("Butter", 50.0, false, false),
    ];
    let res = calculate(&entries, BakersMode::Forward { flour_weight_g: 200.0 });
    assert_eq!(res.hydration_pct(), None);
    assert_eq!(report(&res).hydration_pct, None);
}

#[test]
fn previews_scale_flour_and_total() {
    let res = calculate(&basic_bread(), BakersMode::Forward { flour_weight_g: 500.0 });
    let previews = scaled_previews(&res, &[0.5, 2.0]);
    assert_eq!(previews[0].total_weight_g, 420.0);
    assert_eq!(previews[1].flour_weight_g, 1000.0);
    assert_eq!(report(&res).previews.len(), 3);
}

#[test]
fn presets_are_found_by_key_or_name() {
    assert!(bakers_percentage::preset("pizza").is_some());
    assert!(bakers_percentage::preset("neapolitan pizza").is_some());
    assert!(bakers_percentage::preset("focaccia").is_none());
    for p in bakers_percentage::presets() {
        let flour: f64 = p.entries.iter().filter(|e| e.is_flour).map(|e| e.percentage).sum();
        assert!((flour - 100.0).abs() < 1e-9, "{} flour sums to {flour}", p.key);
    }
}

#[test]
fn rounded_rows_stay_within_one_gram_per_entry_of_total() {
    for p in bakers_percentage::presets() {
        let ledger = bakers_percentage::ledger_from_preset(p);
        for target in [333.0, 1000.0, 2750.0] {
            let res = calculate(&ledger, BakersMode::Target { total_weight_g: target });
            let rep = report(&res);
            let row_sum: f64 = rep.rows.iter().map(|r| r.weight_g).sum();
            assert!(
                (row_sum - rep.total_weight_g).abs() <= rep.rows.len() as f64,
                "{} @ {target}: rows {row_sum} vs total {}",
                p.key,
                rep.total_weight_g
            );
            assert_float_absolute_eq!(res.total_weight_g(), target, 1e-6);
        }
    }
}
