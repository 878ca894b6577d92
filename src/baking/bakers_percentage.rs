//! 베이커스 퍼센트(제빵 비율) 계산 엔진.
//!
//! 모든 재료 무게를 밀가루 총량(=100%) 대비 비율로 표현한다.
//! - 정방향: 밀가루 무게 + 비율 → 무게
//! - 목표 반죽량: 목표 총량 + 비율 → 밀가루 무게 → 무게
//! - 역방향: 무게 → 밀가루 합계를 기준으로 비율
//!
//! 합계는 반올림 전 값으로 구하고, 표시용 값만 개별적으로 반올림한다.

use serde::{Deserialize, Serialize};

use crate::rounding::{round_grams, round_percent};

/// 재료 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientEntry {
    pub name: String,
    /// 밀가루 총량 대비 비율(%). 정방향/목표 모드에서 기준값.
    pub percentage: Option<f64>,
    /// 절대 무게(g). 역방향 모드에서 기준값.
    pub weight_g: Option<f64>,
    /// 역방향 모드에서 100% 기준(밀가루)에 합산되는 재료인지 여부
    pub is_flour: bool,
    /// 수화율 계산에 포함되는 액체 재료인지 여부
    #[serde(default)]
    pub is_liquid: bool,
}

impl IngredientEntry {
    /// 비율 기반 재료를 만든다.
    pub fn with_percentage(name: &str, percentage: f64, is_flour: bool, is_liquid: bool) -> Self {
        Self {
            name: name.to_string(),
            percentage: Some(percentage),
            weight_g: None,
            is_flour,
            is_liquid,
        }
    }

    /// 무게 기반 재료를 만든다.
    pub fn with_weight(name: &str, weight_g: f64, is_flour: bool, is_liquid: bool) -> Self {
        Self {
            name: name.to_string(),
            percentage: None,
            weight_g: Some(weight_g),
            is_flour,
            is_liquid,
        }
    }
}

/// 계산 모드.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BakersMode {
    /// 밀가루 무게를 알고 비율로 무게를 구한다.
    Forward { flour_weight_g: f64 },
    /// 원하는 반죽 총량에서 밀가루 무게를 역산한 뒤 무게를 구한다.
    Target { total_weight_g: f64 },
    /// 무게를 알고 비율을 구한다.
    Reverse,
}

/// 계산이 끝난 재료. 값은 반올림 전 원시값이다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedEntry {
    pub name: String,
    pub is_flour: bool,
    pub is_liquid: bool,
    pub percentage: f64,
    pub weight_g: f64,
}

impl CalculatedEntry {
    pub fn display_weight_g(&self) -> f64 {
        round_grams(self.weight_g)
    }

    pub fn display_percentage(&self) -> f64 {
        round_percent(self.percentage)
    }
}

/// 전체 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct BakersResult {
    pub mode: BakersMode,
    /// 100% 기준이 되는 밀가루 무게(g)
    pub flour_weight_g: f64,
    pub entries: Vec<CalculatedEntry>,
}

impl BakersResult {
    /// 총 반죽 무게(g). 반올림 전 값의 합.
    pub fn total_weight_g(&self) -> f64 {
        self.entries.iter().map(|e| e.weight_g).sum()
    }

    /// 비율 합계(%).
    pub fn total_percentage(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// 액체 재료 비율의 합. 액체 재료가 없으면 `None`.
    pub fn hydration_pct(&self) -> Option<f64> {
        let mut liquids = self.entries.iter().filter(|e| e.is_liquid).peekable();
        liquids.peek()?;
        Some(liquids.map(|e| e.percentage).sum())
    }
}

/// 재료 목록과 모드로 빠진 값(무게 또는 비율)을 채운다.
pub fn calculate(entries: &[IngredientEntry], mode: BakersMode) -> BakersResult {
    match mode {
        BakersMode::Forward { flour_weight_g } => forward(entries, mode, flour_weight_g.max(0.0)),
        BakersMode::Target { total_weight_g } => {
            let pct_sum: f64 = entries
                .iter()
                .map(|e| e.percentage.unwrap_or(0.0).max(0.0))
                .sum();
            let basis = if pct_sum > 0.0 {
                total_weight_g.max(0.0) / (pct_sum / 100.0)
            } else {
                0.0
            };
            forward(entries, mode, basis)
        }
        BakersMode::Reverse => reverse(entries),
    }
}

fn forward(entries: &[IngredientEntry], mode: BakersMode, basis: f64) -> BakersResult {
    let entries = entries
        .iter()
        .map(|e| {
            let percentage = e.percentage.unwrap_or(0.0).max(0.0);
            CalculatedEntry {
                name: e.name.clone(),
                is_flour: e.is_flour,
                is_liquid: e.is_liquid,
                percentage,
                weight_g: basis * percentage / 100.0,
            }
        })
        .collect();
    BakersResult {
        mode,
        flour_weight_g: basis,
        entries,
    }
}

fn reverse(entries: &[IngredientEntry]) -> BakersResult {
    let basis: f64 = entries
        .iter()
        .filter(|e| e.is_flour)
        .map(|e| e.weight_g.unwrap_or(0.0).max(0.0))
        .sum();
    let entries = entries
        .iter()
        .map(|e| {
            let weight_g = e.weight_g.unwrap_or(0.0).max(0.0);
            // 밀가루 합계가 0이면 0으로 나누지 않고 모두 0%로 보고한다.
            let percentage = if basis > 0.0 {
                100.0 * weight_g / basis
            } else {
                0.0
            };
            CalculatedEntry {
                name: e.name.clone(),
                is_flour: e.is_flour,
                is_liquid: e.is_liquid,
                percentage,
                weight_g,
            }
        })
        .collect();
    BakersResult {
        mode: BakersMode::Reverse,
        flour_weight_g: basis,
        entries,
    }
}

/// 기본 미리보기 배율.
pub const DEFAULT_PREVIEW_FACTORS: [f64; 3] = [0.5, 2.0, 3.0];

/// 배율 적용 미리보기.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPreview {
    pub factor: f64,
    pub flour_weight_g: f64,
    pub total_weight_g: f64,
}

/// 레시피를 여러 배율로 늘리거나 줄였을 때의 밀가루/총량을 구한다.
pub fn scaled_previews(result: &BakersResult, factors: &[f64]) -> Vec<ScaledPreview> {
    let total = result.total_weight_g();
    factors
        .iter()
        .map(|&factor| ScaledPreview {
            factor,
            flour_weight_g: result.flour_weight_g * factor,
            total_weight_g: total * factor,
        })
        .collect()
}

/// 화면 표 한 줄. 값은 표시용으로 반올림되어 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub weight_g: f64,
    pub percentage: f64,
}

/// 표시용 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct BakersReport {
    pub rows: Vec<ReportRow>,
    pub flour_weight_g: f64,
    pub total_weight_g: f64,
    pub total_percentage: f64,
    pub hydration_pct: Option<f64>,
    pub previews: Vec<ScaledPreview>,
}

/// 계산 결과를 표시용으로 정리한다. 합계는 원시값 합을 반올림한다.
pub fn report(result: &BakersResult) -> BakersReport {
    let rows = result
        .entries
        .iter()
        .map(|e| ReportRow {
            name: e.name.clone(),
            weight_g: e.display_weight_g(),
            percentage: e.display_percentage(),
        })
        .collect();
    let previews = scaled_previews(result, &DEFAULT_PREVIEW_FACTORS)
        .into_iter()
        .map(|p| ScaledPreview {
            factor: p.factor,
            flour_weight_g: round_grams(p.flour_weight_g),
            total_weight_g: round_grams(p.total_weight_g),
        })
        .collect();
    BakersReport {
        rows,
        flour_weight_g: round_grams(result.flour_weight_g),
        total_weight_g: round_grams(result.total_weight_g()),
        total_percentage: round_percent(result.total_percentage()),
        hydration_pct: result.hydration_pct().map(round_percent),
        previews,
    }
}

/// 프리셋 재료 한 줄.
#[derive(Debug, Clone, Copy)]
pub struct PresetEntry {
    pub name: &'static str,
    pub percentage: f64,
    pub is_flour: bool,
    pub is_liquid: bool,
}

/// 기본 레시피 프리셋.
#[derive(Debug)]
pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub entries: &'static [PresetEntry],
}

const fn flour(name: &'static str, percentage: f64) -> PresetEntry {
    PresetEntry {
        name,
        percentage,
        is_flour: true,
        is_liquid: false,
    }
}

const fn liquid(name: &'static str, percentage: f64) -> PresetEntry {
    PresetEntry {
        name,
        percentage,
        is_flour: false,
        is_liquid: true,
    }
}

const fn other(name: &'static str, percentage: f64) -> PresetEntry {
    PresetEntry {
        name,
        percentage,
        is_flour: false,
        is_liquid: false,
    }
}

const PRESETS: &[Preset] = &[
    Preset {
        key: "basic-bread",
        name: "Basic Bread",
        entries: &[
            flour("Flour", 100.0),
            liquid("Water", 65.0),
            other("Salt", 2.0),
            other("Yeast", 1.0),
        ],
    },
    Preset {
        key: "pizza",
        name: "Neapolitan Pizza",
        entries: &[
            flour("Tipo 00 Flour", 100.0),
            liquid("Water", 62.0),
            other("Salt", 2.8),
            other("Fresh Yeast", 0.2),
        ],
    },
    Preset {
        key: "sourdough",
        name: "Country Sourdough",
        entries: &[
            flour("Bread Flour", 90.0),
            flour("Whole Wheat Flour", 10.0),
            liquid("Water", 75.0),
            other("Levain", 20.0),
            other("Salt", 2.0),
        ],
    },
    Preset {
        key: "baguette",
        name: "Baguette",
        entries: &[
            flour("Flour", 100.0),
            liquid("Water", 70.0),
            other("Salt", 2.0),
            other("Instant Yeast", 0.5),
        ],
    },
    Preset {
        key: "bagel",
        name: "Bagel",
        entries: &[
            flour("High-Gluten Flour", 100.0),
            liquid("Water", 57.0),
            other("Salt", 2.0),
            other("Malt Syrup", 3.0),
            other("Instant Yeast", 1.0),
        ],
    },
    Preset {
        key: "brioche",
        name: "Brioche",
        entries: &[
            flour("Flour", 100.0),
            liquid("Milk", 20.0),
            other("Eggs", 50.0),
            other("Butter", 50.0),
            other("Sugar", 12.0),
            other("Salt", 2.0),
            other("Instant Yeast", 1.5),
        ],
    },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

/// 키 또는 이름으로 프리셋을 찾는다.
pub fn preset(key: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key) || p.name.eq_ignore_ascii_case(key))
}

/// 프리셋으로 비율 기반 재료 목록을 만든다.
pub fn ledger_from_preset(preset: &Preset) -> Vec<IngredientEntry> {
    preset
        .entries
        .iter()
        .map(|e| IngredientEntry::with_percentage(e.name, e.percentage, e.is_flour, e.is_liquid))
        .collect()
}
