//! 주방 계산기에서 쓰는 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod volume;

pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use temperature::{
    celsius_to_fahrenheit, convert_temperature, fahrenheit_to_celsius, TemperatureUnit,
};
pub use volume::{convert_volume, VolumeUnit};
