use serde::{Deserialize, Serialize};

/// 체적 단위. 미국식 계량컵 기준이며 내부 기준은 mL이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    Teaspoon,
    Tablespoon,
    FluidOunce,
    Cup,
    Pint,
    Quart,
    Gallon,
}

/// 미국 계량컵 1컵 [mL]
pub const ML_PER_CUP: f64 = 236.588_236_5;

impl VolumeUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Liter => "L",
            VolumeUnit::Teaspoon => "tsp",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::FluidOunce => "fl oz",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Pint => "pt",
            VolumeUnit::Quart => "qt",
            VolumeUnit::Gallon => "gal",
        }
    }

    /// 1 단위가 몇 mL인지 반환한다.
    fn ml_factor(&self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 1.0,
            VolumeUnit::Liter => 1000.0,
            VolumeUnit::Teaspoon => ML_PER_CUP / 48.0,
            VolumeUnit::Tablespoon => ML_PER_CUP / 16.0,
            VolumeUnit::FluidOunce => ML_PER_CUP / 8.0,
            VolumeUnit::Cup => ML_PER_CUP,
            VolumeUnit::Pint => ML_PER_CUP * 2.0,
            VolumeUnit::Quart => ML_PER_CUP * 4.0,
            VolumeUnit::Gallon => ML_PER_CUP * 16.0,
        }
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    let ml = value * from.ml_factor();
    ml / to.ml_factor()
}
