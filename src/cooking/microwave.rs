//! 전자레인지 출력(W)에 따른 조리 시간 환산.
//! 조리 시간은 출력에 반비례한다: `조정 시간 = 기준 시간 × (원래 출력 / 사용 출력)`.

use tracing::debug;

/// 표에 정의된 최소/최대 출력 [W]. 범위 밖은 클램프한다.
pub const MIN_WATTAGE: f64 = 300.0;
pub const MAX_WATTAGE: f64 = 1500.0;

/// 환산표에 보여줄 흔한 출력 [W]
pub const COMMON_WATTAGES: [f64; 7] = [600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0, 1200.0];

#[derive(Debug, Clone)]
pub struct MicrowaveInput {
    /// 레시피 조리 시간 [분]
    pub base_minutes: f64,
    /// 레시피 기준 출력 [W]
    pub original_watts: f64,
    /// 사용하는 전자레인지 출력 [W]
    pub target_watts: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MicrowaveResult {
    pub adjusted_minutes: f64,
    /// 시간 배율 (original / target)
    pub factor: f64,
    /// 출력이 표 범위를 벗어나 클램프되었는지
    pub clamped: bool,
}

fn clamp_watts(w: f64) -> (f64, bool) {
    if !w.is_finite() {
        return (MIN_WATTAGE, true);
    }
    let c = w.clamp(MIN_WATTAGE, MAX_WATTAGE);
    (c, c != w)
}

/// 다른 출력의 전자레인지에 맞게 조리 시간을 환산한다.
pub fn convert_microwave_time(input: &MicrowaveInput) -> MicrowaveResult {
    let (original, c1) = clamp_watts(input.original_watts);
    let (target, c2) = clamp_watts(input.target_watts);
    if c1 || c2 {
        debug!(
            original = input.original_watts,
            target = input.target_watts,
            "microwave wattage clamped"
        );
    }
    let factor = original / target;
    MicrowaveResult {
        adjusted_minutes: input.base_minutes.max(0.0) * factor,
        factor,
        clamped: c1 || c2,
    }
}

/// 흔한 출력별 환산표를 만든다. (출력, 조정 시간[분])
pub fn conversion_table(base_minutes: f64, original_watts: f64) -> Vec<(f64, f64)> {
    COMMON_WATTAGES
        .iter()
        .map(|&w| {
            let r = convert_microwave_time(&MicrowaveInput {
                base_minutes,
                original_watts,
                target_watts: w,
            });
            (w, r.adjusted_minutes)
        })
        .collect()
}
