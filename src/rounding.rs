//! 화면 표시용 반올림 헬퍼.
//!
//! 합계는 항상 반올림 전 값으로 계산하고, 표시할 때만 개별 값을 반올림한다.

/// 표시할 값이 없을 때 쓰는 기호.
pub const DASH: &str = "—";

/// 소수점 `decimals` 자리로 반올림한다.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// 무게는 g 단위 정수로 반올림한다.
pub fn round_grams(value: f64) -> f64 {
    value.round()
}

/// 퍼센트는 소수점 한 자리로 반올림한다.
pub fn round_percent(value: f64) -> f64 {
    round_to(value, 1)
}

/// 값이 있으면 지정 자릿수로, 없으면 "—"로 표시한다.
pub fn format_or_dash(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => DASH.to_string(),
    }
}

/// 분 단위 시간을 `h:mm` 형식으로 만든다.
pub fn format_minutes(total_minutes: f64) -> String {
    let total = total_minutes.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// 분 단위 시간을 `m:ss` 형식으로 만든다. 전자레인지처럼 짧은 시간용.
pub fn format_min_sec(minutes: f64) -> String {
    let secs = (minutes.max(0.0) * 60.0).round() as u64;
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_for_display() {
        assert_eq!(round_grams(386.9), 387.0);
        assert_eq!(round_percent(33.333), 33.3);
        assert_eq!(round_percent(66.66), 66.7);
    }

    #[test]
    fn dash_for_missing() {
        assert_eq!(format_or_dash(None, 1), "—");
        assert_eq!(format_or_dash(Some(f64::NAN), 1), "—");
        assert_eq!(format_or_dash(Some(65.0), 1), "65.0");
    }

    #[test]
    fn time_formats() {
        assert_eq!(format_minutes(135.0), "2:15");
        assert_eq!(format_min_sec(7.142857), "7:09");
    }
}
