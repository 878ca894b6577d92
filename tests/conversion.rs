//! 단위 문자열 파싱과 변환 회귀 테스트.
use calc_kitchen::conversion::{convert, parse_mass_unit, parse_volume_unit, ConversionError};
use calc_kitchen::quantity::QuantityKind;
use calc_kitchen::units::{
    celsius_to_fahrenheit, convert_mass, convert_volume, fahrenheit_to_celsius, MassUnit,
    VolumeUnit,
};

#[test]
fn mass_pounds_to_grams() {
    let g = convert(QuantityKind::Mass, 1.0, "lb", "g").unwrap();
    assert!((g - 453.592_37).abs() < 1e-9);
    let oz = convert_mass(1.0, MassUnit::Pound, MassUnit::Ounce);
    assert!((oz - 16.0).abs() < 1e-9);
}

#[test]
fn us_volume_ladder() {
    assert!((convert_volume(1.0, VolumeUnit::Cup, VolumeUnit::Tablespoon) - 16.0).abs() < 1e-9);
    assert!((convert_volume(1.0, VolumeUnit::Tablespoon, VolumeUnit::Teaspoon) - 3.0).abs() < 1e-9);
    assert!((convert_volume(1.0, VolumeUnit::Gallon, VolumeUnit::Quart) - 4.0).abs() < 1e-9);
    let ml = convert(QuantityKind::Volume, 1.0, "cup", "mL").unwrap();
    assert!((ml - 236.588_236_5).abs() < 1e-9);
}

#[test]
fn temperature_round_trip() {
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
    let f = convert(QuantityKind::Temperature, 180.0, "°C", "F").unwrap();
    assert!((f - 356.0).abs() < 1e-9);
}

#[test]
fn length_inches() {
    let cm = convert(QuantityKind::Length, 9.0, "in", "cm").unwrap();
    assert!((cm - 22.86).abs() < 1e-9);
}

#[test]
fn unit_names_are_forgiving() {
    assert_eq!(parse_volume_unit(" Cups "), Ok(VolumeUnit::Cup));
    assert_eq!(parse_volume_unit("fl oz"), Ok(VolumeUnit::FluidOunce));
    assert_eq!(parse_volume_unit("fl. oz."), Ok(VolumeUnit::FluidOunce));
    assert_eq!(parse_volume_unit("fluid ounces"), Ok(VolumeUnit::FluidOunce));
    assert_eq!(parse_volume_unit("tablespoons"), Ok(VolumeUnit::Tablespoon));
    assert_eq!(parse_volume_unit("teaspoons"), Ok(VolumeUnit::Teaspoon));
    assert_eq!(parse_volume_unit("liters"), Ok(VolumeUnit::Liter));
    assert_eq!(parse_volume_unit("milliliters"), Ok(VolumeUnit::Milliliter));
    assert_eq!(parse_volume_unit("pints"), Ok(VolumeUnit::Pint));
    assert_eq!(parse_volume_unit("quarts"), Ok(VolumeUnit::Quart));
    assert_eq!(parse_volume_unit("gallons"), Ok(VolumeUnit::Gallon));
    assert_eq!(parse_mass_unit("lb."), Ok(MassUnit::Pound));
    assert_eq!(parse_mass_unit("Pounds"), Ok(MassUnit::Pound));
}

#[test]
fn capital_t_is_tablespoon() {
    assert_eq!(parse_volume_unit("T"), Ok(VolumeUnit::Tablespoon));
    assert_eq!(parse_volume_unit(" T. "), Ok(VolumeUnit::Tablespoon));
    assert_eq!(parse_volume_unit("t"), Ok(VolumeUnit::Teaspoon));
    let tsp = convert(QuantityKind::Volume, 1.0, "T", "t").unwrap();
    assert!((tsp - 3.0).abs() < 1e-9);
}

#[test]
fn unknown_and_mismatched_units() {
    assert_eq!(
        convert(QuantityKind::Mass, 1.0, "stone", "g"),
        Err(ConversionError::UnknownUnit("stone".into()))
    );
    assert_eq!(
        convert(QuantityKind::Mass, 1.0, "g", "cup"),
        Err(ConversionError::WrongKind {
            unit: "cup".into(),
            kind: "mass",
        })
    );
}
