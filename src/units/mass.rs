use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 g이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

pub const GRAMS_PER_OUNCE: f64 = 28.349_523_125;
pub const GRAMS_PER_POUND: f64 = 453.592_37;

impl MassUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
        }
    }
}

fn to_g(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Kilogram => value * 1000.0,
        MassUnit::Ounce => value * GRAMS_PER_OUNCE,
        MassUnit::Pound => value * GRAMS_PER_POUND,
    }
}

fn from_g(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Kilogram => value / 1000.0,
        MassUnit::Ounce => value / GRAMS_PER_OUNCE,
        MassUnit::Pound => value / GRAMS_PER_POUND,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_g(value, from);
    from_g(base, to)
}
