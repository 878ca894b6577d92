use serde::{Deserialize, Serialize};

/// 길이 단위. 팬/틀 크기 계산용이며 내부 기준은 센티미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Inch,
}

impl LengthUnit {
    /// 화면 표시용 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Inch => "in",
        }
    }
}

fn to_cm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value / 10.0,
        LengthUnit::Centimeter => value,
        LengthUnit::Inch => value * 2.54,
    }
}

fn from_cm(value_cm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value_cm * 10.0,
        LengthUnit::Centimeter => value_cm,
        LengthUnit::Inch => value_cm / 2.54,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    let cm = to_cm(value, from);
    from_cm(cm, to)
}
