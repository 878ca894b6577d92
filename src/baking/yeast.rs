use serde::{Deserialize, Serialize};

/// 이스트 1봉지 [g]
pub const GRAMS_PER_PACKET: f64 = 7.0;

/// 이스트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YeastType {
    Instant,
    ActiveDry,
    Fresh,
}

impl YeastType {
    pub const ALL: [YeastType; 3] = [YeastType::Instant, YeastType::ActiveDry, YeastType::Fresh];

    /// 인스턴트 이스트 1g을 대체하는 데 필요한 양 [g]
    fn grams_per_instant_gram(&self) -> f64 {
        match self {
            YeastType::Instant => 1.0,
            YeastType::ActiveDry => 1.25,
            YeastType::Fresh => 3.0,
        }
    }
}

/// 이스트 종류를 바꿀 때 필요한 양 [g]을 계산한다.
pub fn convert_yeast(amount_g: f64, from: YeastType, to: YeastType) -> f64 {
    let instant_g = amount_g.max(0.0) / from.grams_per_instant_gram();
    instant_g * to.grams_per_instant_gram()
}

/// g을 봉지 수로 환산한다.
pub fn packets_from_grams(amount_g: f64) -> f64 {
    amount_g.max(0.0) / GRAMS_PER_PACKET
}
