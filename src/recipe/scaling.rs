//! 레시피 인분 조정.

use serde::{Deserialize, Serialize};

use crate::conversion::{parse_mass_unit, parse_volume_unit};
use crate::units::{MassUnit, VolumeUnit};

/// 레시피 재료 한 줄. 단위는 자유 문자열이다(예: "cup", "g", "개").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// 배율 지정 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleBy {
    Servings { original: f64, desired: f64 },
    Factor(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledLine {
    pub name: String,
    pub original_quantity: f64,
    pub quantity: f64,
    pub unit: String,
    /// 표시용 문자열. 미터법은 소수, 그 외는 주방 분수(1 1/2 등).
    pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledRecipe {
    pub factor: f64,
    pub lines: Vec<ScaledLine>,
}

/// 배율을 구한다. 기존 인분이 0 이하이면 1.0을 쓴다.
pub fn scale_factor(by: ScaleBy) -> f64 {
    match by {
        ScaleBy::Servings { original, desired } if original > 0.0 => desired.max(0.0) / original,
        ScaleBy::Servings { .. } => 1.0,
        ScaleBy::Factor(f) => f.max(0.0),
    }
}

/// 모든 재료에 배율을 적용한다.
pub fn scale_recipe(lines: &[RecipeLine], by: ScaleBy) -> ScaledRecipe {
    let factor = scale_factor(by);
    let lines = lines
        .iter()
        .map(|line| {
            let quantity = line.quantity * factor;
            ScaledLine {
                name: line.name.clone(),
                original_quantity: line.quantity,
                quantity,
                unit: line.unit.clone(),
                display: display_quantity(quantity, &line.unit),
            }
        })
        .collect();
    ScaledRecipe { factor, lines }
}

fn is_metric(unit: &str) -> bool {
    matches!(
        parse_mass_unit(unit),
        Ok(MassUnit::Gram) | Ok(MassUnit::Kilogram)
    ) || matches!(
        parse_volume_unit(unit),
        Ok(VolumeUnit::Milliliter) | Ok(VolumeUnit::Liter)
    )
}

fn display_quantity(quantity: f64, unit: &str) -> String {
    if is_metric(unit) {
        if quantity >= 10.0 {
            format!("{quantity:.0}")
        } else {
            format!("{quantity:.1}")
        }
    } else {
        kitchen_fraction(quantity)
    }
}

/// 계량컵/스푼에 맞는 분수 표기로 바꾼다. 1/2, 1/3, 1/4, 1/8 중 가장 가까운 값을 쓴다.
/// 0보다 크지만 1/16 이하인 양(한 꼬집 등)은 `<1/8`로 표시한다.
pub fn kitchen_fraction(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_string();
    }
    let mut whole = value.trunc() as u64;
    let frac = value.fract();
    let mut best = (0_u64, 1_u64, frac);
    for d in [2_u64, 3, 4, 8] {
        let n = (frac * d as f64).round() as u64;
        let err = (frac - n as f64 / d as f64).abs();
        if err < best.2 {
            best = (n, d, err);
        }
    }
    let (mut n, d, _) = best;
    if n == d {
        whole += 1;
        n = 0;
    }
    match (whole, n) {
        (0, 0) => "<1/8".to_string(),
        (w, 0) => w.to_string(),
        (0, n) => format!("{n}/{d}"),
        (w, n) => format!("{w} {n}/{d}"),
    }
}
