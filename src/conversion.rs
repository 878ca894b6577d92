use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 해당 물리량에 쓸 수 없는 단위
    #[error("`{unit}` 단위는 {kind} 단위가 아닙니다")]
    WrongKind { unit: String, kind: &'static str },
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `g`, `lb`, `cup`, `tbsp`, `F`, `in` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
    }
}

/// 단위 문자열이 다른 물리량의 단위인지 확인해 더 구체적인 오류를 만든다.
fn unknown(s: &str, kind: &'static str) -> ConversionError {
    let known_elsewhere = [
        parse_mass_unit_raw(s).is_some(),
        parse_volume_unit_raw(s).is_some(),
        parse_temperature_unit_raw(s).is_some(),
        parse_length_unit_raw(s).is_some(),
    ]
    .into_iter()
    .any(|hit| hit);
    if known_elsewhere {
        ConversionError::WrongKind {
            unit: s.to_string(),
            kind,
        }
    } else {
        ConversionError::UnknownUnit(s.to_string())
    }
}

/// 앞뒤 공백과 내부 공백, 약어 마침표(`lb.`, `fl. oz.`)를 없애고 소문자로 맞춘다.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_mass_unit_raw(s: &str) -> Option<MassUnit> {
    match normalize(s).as_str() {
        "g" | "gr" | "gram" | "grams" => Some(MassUnit::Gram),
        "kg" | "kilogram" | "kilograms" => Some(MassUnit::Kilogram),
        "oz" | "ounce" | "ounces" => Some(MassUnit::Ounce),
        "lb" | "lbs" | "pound" | "pounds" => Some(MassUnit::Pound),
        _ => None,
    }
}

fn parse_volume_unit_raw(s: &str) -> Option<VolumeUnit> {
    // 레시피 표기에서 대문자 T는 큰술, 소문자 t는 작은술이다.
    match s.trim().trim_end_matches('.') {
        "T" | "Tb" | "Tbl" => return Some(VolumeUnit::Tablespoon),
        "t" => return Some(VolumeUnit::Teaspoon),
        _ => {}
    }
    match normalize(s).as_str() {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
            Some(VolumeUnit::Milliliter)
        }
        "l" | "liter" | "liters" | "litre" | "litres" => Some(VolumeUnit::Liter),
        "tsp" | "tsps" | "teaspoon" | "teaspoons" => Some(VolumeUnit::Teaspoon),
        "tbsp" | "tbsps" | "tbs" | "tablespoon" | "tablespoons" => Some(VolumeUnit::Tablespoon),
        "floz" | "fluidounce" | "fluidounces" => Some(VolumeUnit::FluidOunce),
        "cup" | "cups" | "c" => Some(VolumeUnit::Cup),
        "pt" | "pint" | "pints" => Some(VolumeUnit::Pint),
        "qt" | "quart" | "quarts" => Some(VolumeUnit::Quart),
        "gal" | "gallon" | "gallons" => Some(VolumeUnit::Gallon),
        _ => None,
    }
}

fn parse_temperature_unit_raw(s: &str) -> Option<TemperatureUnit> {
    match normalize(s).as_str() {
        "c" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
        _ => None,
    }
}

fn parse_length_unit_raw(s: &str) -> Option<LengthUnit> {
    match normalize(s).as_str() {
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
            Some(LengthUnit::Millimeter)
        }
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
            Some(LengthUnit::Centimeter)
        }
        "in" | "inch" | "inches" | "\"" => Some(LengthUnit::Inch),
        _ => None,
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    parse_mass_unit_raw(s).ok_or_else(|| unknown(s, "mass"))
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    parse_volume_unit_raw(s).ok_or_else(|| unknown(s, "volume"))
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    parse_temperature_unit_raw(s).ok_or_else(|| unknown(s, "temperature"))
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    parse_length_unit_raw(s).ok_or_else(|| unknown(s, "length"))
}
