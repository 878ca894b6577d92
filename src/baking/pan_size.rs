use std::f64::consts::PI;

use crate::units::{convert_length, LengthUnit};

/// 팬 모양과 치수. 치수 단위는 [`PanSpec::unit`]을 따른다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanShape {
    Round { diameter: f64 },
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
}

/// 팬 하나의 모양과 길이 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSpec {
    pub shape: PanShape,
    pub unit: LengthUnit,
}

/// 팬 크기 변환 결과.
#[derive(Debug, Clone)]
pub struct PanConversion {
    /// 기존 팬 면적 [cm²]
    pub original_area_cm2: f64,
    /// 새 팬 면적 [cm²]
    pub target_area_cm2: f64,
    /// 재료 배율. 기존 팬 면적이 0이면 `None`.
    pub scale_factor: Option<f64>,
}

/// 팬 바닥 면적을 cm²로 구한다. 음수 치수는 0으로 본다.
pub fn pan_area(pan: PanSpec) -> f64 {
    let cm = |v: f64| convert_length(v.max(0.0), pan.unit, LengthUnit::Centimeter);
    match pan.shape {
        PanShape::Round { diameter } => {
            let r = cm(diameter) / 2.0;
            PI * r * r
        }
        PanShape::Square { side } => cm(side) * cm(side),
        PanShape::Rectangle { length, width } => cm(length) * cm(width),
    }
}

/// 기존 팬 레시피를 새 팬에 맞추기 위한 배율을 계산한다.
pub fn convert_pan(original: PanSpec, target: PanSpec) -> PanConversion {
    let original_area_cm2 = pan_area(original);
    let target_area_cm2 = pan_area(target);
    let scale_factor = if original_area_cm2 > 0.0 {
        Some(target_area_cm2 / original_area_cm2)
    } else {
        None
    };
    PanConversion {
        original_area_cm2,
        target_area_cm2,
        scale_factor,
    }
}
