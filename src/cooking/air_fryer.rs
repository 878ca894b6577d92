use tracing::debug;

use crate::units::{convert_temperature, TemperatureUnit};

/// 오븐 대비 온도 감소 [°F]
const TEMP_REDUCTION_F: f64 = 25.0;
/// 오븐 대비 시간 비율
const TIME_FACTOR: f64 = 0.8;
/// 일반 가정용 에어프라이어 설정 범위 [°F]
pub const MIN_AIR_FRYER_F: f64 = 180.0;
pub const MAX_AIR_FRYER_F: f64 = 400.0;

#[derive(Debug, Clone)]
pub struct AirFryerInput {
    pub oven_temp: f64,
    pub unit: TemperatureUnit,
    pub oven_minutes: f64,
}

#[derive(Debug, Clone)]
pub struct AirFryerResult {
    /// 에어프라이어 온도 (입력과 같은 단위)
    pub temp: f64,
    pub unit: TemperatureUnit,
    pub minutes: f64,
    /// 중간 점검(뒤집기) 시점 [분]
    pub check_at_minutes: f64,
    /// 설정 범위를 벗어나 클램프되었는지
    pub clamped: bool,
}

/// 오븐 레시피를 에어프라이어용 온도/시간으로 바꾼다.
pub fn convert_to_air_fryer(input: &AirFryerInput) -> AirFryerResult {
    let oven_f = convert_temperature(input.oven_temp, input.unit, TemperatureUnit::Fahrenheit);
    let raw_f = oven_f - TEMP_REDUCTION_F;
    let fryer_f = raw_f.clamp(MIN_AIR_FRYER_F, MAX_AIR_FRYER_F);
    let clamped = fryer_f != raw_f;
    if clamped {
        debug!(raw_f, fryer_f, "air fryer temperature clamped to appliance range");
    }
    let minutes = input.oven_minutes.max(0.0) * TIME_FACTOR;
    AirFryerResult {
        temp: convert_temperature(fryer_f, TemperatureUnit::Fahrenheit, input.unit),
        unit: input.unit,
        minutes,
        check_at_minutes: minutes / 2.0,
        clamped,
    }
}
