/// 재료 원가 한 줄.
#[derive(Debug, Clone)]
pub struct CostLine {
    pub name: String,
    /// 포장 단위 가격
    pub package_price: f64,
    /// 포장 단위 용량 (사용량과 같은 단위)
    pub package_size: f64,
    /// 레시피에 쓰는 양
    pub amount_used: f64,
}

/// 레시피 원가 계산 입력.
#[derive(Debug, Clone)]
pub struct RecipeCostInput {
    pub lines: Vec<CostLine>,
    /// 레시피 인분
    pub servings: f64,
    /// 목표 식재료 원가율(0~1, 0.3이면 판매가의 30%)
    pub target_food_cost_ratio: f64,
}

/// 레시피 원가 계산 결과.
#[derive(Debug, Clone)]
pub struct RecipeCostResult {
    pub line_costs: Vec<f64>,
    pub total_cost: f64,
    /// 인분당 원가. 인분이 0 이하이면 `None`.
    pub cost_per_serving: Option<f64>,
    /// 목표 원가율을 맞추는 인분당 판매가
    pub suggested_price_per_serving: Option<f64>,
}

/// 사용량 비례 재료 원가. 포장 용량이 0 이하이면 0.
fn line_cost(line: &CostLine) -> f64 {
    if line.package_size > 0.0 {
        line.package_price.max(0.0) * line.amount_used.max(0.0) / line.package_size
    } else {
        0.0
    }
}

/// 재료 원가 합계와 인분당 원가, 권장 판매가를 계산한다.
pub fn recipe_cost(input: &RecipeCostInput) -> RecipeCostResult {
    let line_costs: Vec<f64> = input.lines.iter().map(line_cost).collect();
    let total_cost: f64 = line_costs.iter().sum();
    let cost_per_serving = if input.servings > 0.0 {
        Some(total_cost / input.servings)
    } else {
        None
    };
    let suggested_price_per_serving = cost_per_serving.and_then(|c| {
        if input.target_food_cost_ratio > 0.0 {
            Some(c / input.target_food_cost_ratio)
        } else {
            None
        }
    });
    RecipeCostResult {
        line_costs,
        total_cost,
        cost_per_serving,
        suggested_price_per_serving,
    }
}
