use serde::{Deserialize, Serialize};

use crate::units::{convert_mass, MassUnit};

/// 해동 방법.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThawMethod {
    /// 냉장 해동: 4lb당 24시간
    Refrigerator,
    /// 찬물 해동: 1lb당 30분, 물은 30분마다 교체
    ColdWater,
}

impl ThawMethod {
    fn hours_per_lb(&self) -> f64 {
        match self {
            ThawMethod::Refrigerator => 24.0 / 4.0,
            ThawMethod::ColdWater => 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThawResult {
    pub weight_lb: f64,
    pub hours: f64,
    pub days: f64,
    /// 찬물 해동 시 물 교체 횟수
    pub water_changes: u32,
}

/// 냉동 칠면조 해동 시간을 계산한다.
pub fn thaw_time(weight: f64, unit: MassUnit, method: ThawMethod) -> ThawResult {
    let weight_lb = convert_mass(weight, unit, MassUnit::Pound).max(0.0);
    let hours = weight_lb * method.hours_per_lb();
    let water_changes = match method {
        ThawMethod::ColdWater => (hours * 2.0).ceil() as u32,
        ThawMethod::Refrigerator => 0,
    };
    ThawResult {
        weight_lb,
        hours,
        days: hours / 24.0,
        water_changes,
    }
}
