/// 우유의 수분 함량(질량 비)
const MILK_WATER_FRACTION: f64 = 0.87;

/// 반죽 수화율 계산 입력.
#[derive(Debug, Clone)]
pub struct HydrationInput {
    /// 밀가루 [g]
    pub flour_g: f64,
    /// 물 [g]
    pub water_g: f64,
    /// 사워도우 스타터(르방) [g]
    pub starter_g: f64,
    /// 스타터 수화율 [%] (100이면 밀가루:물 = 1:1)
    pub starter_hydration_pct: f64,
    /// 우유 [g]. 수분 87%로 본다.
    pub milk_g: f64,
}

impl Default for HydrationInput {
    fn default() -> Self {
        Self {
            flour_g: 0.0,
            water_g: 0.0,
            starter_g: 0.0,
            starter_hydration_pct: 100.0,
            milk_g: 0.0,
        }
    }
}

/// 수화율 계산 결과.
#[derive(Debug, Clone)]
pub struct HydrationResult {
    /// 스타터 몫을 포함한 총 밀가루 [g]
    pub total_flour_g: f64,
    /// 스타터와 우유 몫을 포함한 총 수분 [g]
    pub total_water_g: f64,
    /// 수화율 [%]. 밀가루가 0이면 `None`.
    pub hydration_pct: Option<f64>,
    /// 총 반죽 무게 [g]
    pub dough_weight_g: f64,
}

/// 스타터를 밀가루/물 몫으로 나눈다.
fn split_starter(starter_g: f64, hydration_pct: f64) -> (f64, f64) {
    let starter = starter_g.max(0.0);
    let flour = starter / (1.0 + hydration_pct.max(0.0) / 100.0);
    (flour, starter - flour)
}

/// 스타터/우유를 포함한 실제 반죽 수화율을 계산한다.
pub fn compute_hydration(input: &HydrationInput) -> HydrationResult {
    let (starter_flour, starter_water) =
        split_starter(input.starter_g, input.starter_hydration_pct);
    let total_flour_g = input.flour_g.max(0.0) + starter_flour;
    let total_water_g =
        input.water_g.max(0.0) + starter_water + input.milk_g.max(0.0) * MILK_WATER_FRACTION;
    let hydration_pct = if total_flour_g > 0.0 {
        Some(total_water_g / total_flour_g * 100.0)
    } else {
        None
    };
    HydrationResult {
        total_flour_g,
        total_water_g,
        hydration_pct,
        dough_weight_g: input.flour_g.max(0.0)
            + input.water_g.max(0.0)
            + input.starter_g.max(0.0)
            + input.milk_g.max(0.0),
    }
}

/// 목표 수화율을 맞추려면 물을 얼마나 더 넣어야 하는지 구한다. 이미 넘었으면 0.
/// `input.water_g`는 현재 넣은 물로 본다.
pub fn water_for_target_hydration(input: &HydrationInput, target_pct: f64) -> f64 {
    let current = compute_hydration(input);
    let needed = current.total_flour_g * target_pct.max(0.0) / 100.0;
    (needed - current.total_water_g).max(0.0)
}
