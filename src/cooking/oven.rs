//! 오븐 온도 환산: 섭씨/화씨, 컨벡션(팬) 오븐, 가스 마크.

use crate::bracket::{lookup, Bracket};
use crate::units::{celsius_to_fahrenheit, convert_temperature, TemperatureUnit};

/// 컨벡션 오븐은 일반 오븐보다 약 20°C 낮게 설정한다.
pub const FAN_OFFSET_C: f64 = 20.0;

/// 가스 마크 (1/4, 1/2, 1~9)와 대응 화씨 온도.
const GAS_MARKS: [(f64, f64); 11] = [
    (0.25, 225.0),
    (0.5, 250.0),
    (1.0, 275.0),
    (2.0, 300.0),
    (3.0, 325.0),
    (4.0, 350.0),
    (5.0, 375.0),
    (6.0, 400.0),
    (7.0, 425.0),
    (8.0, 450.0),
    (9.0, 475.0),
];

/// 인접 가스 마크 온도의 중간값을 경계로 하는 구간표.
const GAS_MARK_BRACKETS: [Bracket<f64>; 11] = [
    Bracket::new(200.0, 237.5, 0.25),
    Bracket::new(237.5, 262.5, 0.5),
    Bracket::new(262.5, 287.5, 1.0),
    Bracket::new(287.5, 312.5, 2.0),
    Bracket::new(312.5, 337.5, 3.0),
    Bracket::new(337.5, 362.5, 4.0),
    Bracket::new(362.5, 387.5, 5.0),
    Bracket::new(387.5, 412.5, 6.0),
    Bracket::new(412.5, 437.5, 7.0),
    Bracket::new(437.5, 462.5, 8.0),
    Bracket::new(462.5, 500.0, 9.0),
];

/// 화씨 온도에 가장 가까운 가스 마크와 클램프 여부.
pub fn gas_mark_for_fahrenheit(f: f64) -> (f64, bool) {
    match lookup(&GAS_MARK_BRACKETS, f) {
        Some(hit) => (*hit.value(), hit.clamped),
        None => (0.0, true),
    }
}

/// 가스 마크의 화씨 온도. 정의되지 않은 마크면 `None`.
pub fn fahrenheit_for_gas_mark(mark: f64) -> Option<f64> {
    GAS_MARKS
        .iter()
        .find(|(m, _)| (m - mark).abs() < 1e-9)
        .map(|&(_, f)| f)
}

/// 가스 마크 표기 문자열 (예: "1/4", "4").
pub fn gas_mark_label(mark: f64) -> String {
    if (mark - 0.25).abs() < 1e-9 {
        "1/4".to_string()
    } else if (mark - 0.5).abs() < 1e-9 {
        "1/2".to_string()
    } else {
        format!("{mark:.0}")
    }
}

#[derive(Debug, Clone)]
pub struct OvenInput {
    pub value: f64,
    pub unit: TemperatureUnit,
    /// 입력 온도가 컨벡션 오븐 기준인지
    pub is_fan: bool,
}

#[derive(Debug, Clone)]
pub struct OvenReading {
    /// 일반 오븐 기준 섭씨
    pub conventional_c: f64,
    /// 일반 오븐 기준 화씨
    pub conventional_f: f64,
    /// 컨벡션 오븐 섭씨
    pub fan_c: f64,
    pub gas_mark: f64,
    /// 가스 마크 표 범위를 벗어났는지
    pub gas_mark_clamped: bool,
}

/// 입력 온도를 일반/컨벡션/가스 마크로 모두 환산한다.
pub fn oven_temperature(input: &OvenInput) -> OvenReading {
    let c = convert_temperature(input.value, input.unit, TemperatureUnit::Celsius);
    let conventional_c = if input.is_fan { c + FAN_OFFSET_C } else { c };
    let conventional_f = celsius_to_fahrenheit(conventional_c);
    let (gas_mark, gas_mark_clamped) = gas_mark_for_fahrenheit(conventional_f);
    OvenReading {
        conventional_c,
        conventional_f,
        fan_c: conventional_c - FAN_OFFSET_C,
        gas_mark,
        gas_mark_clamped,
    }
}
