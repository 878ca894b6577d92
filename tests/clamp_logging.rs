//! 범위를 벗어난 입력을 클램프할 때 debug 이벤트가 남는지 확인한다.
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use calc_kitchen::baking::cake_servings::{servings_for_cake, CakeShape, CakeTier, ServingStyle};
use calc_kitchen::cooking::{
    air_fryer::{convert_to_air_fryer, AirFryerInput},
    brine::{brine, BrineInput, BrineKind, SaltType},
};
use calc_kitchen::units::{LengthUnit, TemperatureUnit, VolumeUnit};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `f`를 실행하는 동안 남은 로그를 문자열로 돌려준다.
fn capture(f: impl FnOnce()) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.text()
}

#[test]
fn cake_chart_clamp_is_logged() {
    let out = capture(|| {
        let cake = servings_for_cake(
            &[CakeTier {
                shape: CakeShape::Round,
                size: 20.0,
                unit: LengthUnit::Inch,
            }],
            ServingStyle::Party,
        );
        assert!(cake.clamped);
    });
    assert!(out.contains("curve interpolation clamped"), "log was: {out}");
}

#[test]
fn in_range_cake_logs_nothing() {
    let out = capture(|| {
        let cake = servings_for_cake(
            &[CakeTier {
                shape: CakeShape::Round,
                size: 9.0,
                unit: LengthUnit::Inch,
            }],
            ServingStyle::Party,
        );
        assert!(!cake.clamped);
    });
    assert!(!out.contains("clamped"), "log was: {out}");
}

#[test]
fn air_fryer_clamp_is_logged() {
    let out = capture(|| {
        let res = convert_to_air_fryer(&AirFryerInput {
            oven_temp: 500.0,
            unit: TemperatureUnit::Fahrenheit,
            oven_minutes: 20.0,
        });
        assert!(res.clamped);
    });
    assert!(out.contains("air fryer temperature clamped"), "log was: {out}");
}

#[test]
fn brine_saturation_clamp_is_logged() {
    let out = capture(|| {
        let res = brine(&BrineInput {
            kind: BrineKind::Wet {
                water: 1.0,
                unit: VolumeUnit::Liter,
            },
            salt_pct: 40.0,
            salt: SaltType::Table,
        });
        assert_eq!(res.applied_pct, 26.4);
    });
    assert!(out.contains("brine concentration clamped"), "log was: {out}");
}
