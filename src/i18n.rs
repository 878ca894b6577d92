use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const NOTE_CLAMPED: &str = "note.clamped";

    pub const PROMPT_WEIGHT: &str = "prompt.weight";
    pub const PROMPT_GRAMS: &str = "prompt.grams";
    pub const PROMPT_FLOUR_G: &str = "prompt.flour_g";
    pub const PROMPT_WATER_G: &str = "prompt.water_g";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_SIDE: &str = "prompt.side";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_WIDTH: &str = "prompt.width";
    pub const PROMPT_OVEN_TEMP: &str = "prompt.oven_temp";
    pub const PROMPT_OVEN_MINUTES: &str = "prompt.oven_minutes";

    pub const RESULT: &str = "result.value";
    pub const RESULT_COOK_TIME: &str = "result.cook_time";
    pub const RESULT_INTERNAL_TEMP: &str = "result.internal_temp";
    pub const RESULT_REST: &str = "result.rest";
    pub const RESULT_SCALE_FACTOR: &str = "result.scale_factor";
    pub const RESULT_SERVINGS: &str = "result.servings";
    pub const RESULT_THAW_TIME: &str = "result.thaw_time";
    pub const RESULT_DOUGH_WEIGHT: &str = "result.dough_weight";

    pub const BAKERS_PRESETS: &str = "bakers.presets";
    pub const BAKERS_PROMPT_PRESET: &str = "bakers.prompt_preset";
    pub const BAKERS_PROMPT_COUNT: &str = "bakers.prompt_count";
    pub const BAKERS_PROMPT_NAME: &str = "bakers.prompt_name";
    pub const BAKERS_PROMPT_IS_FLOUR: &str = "bakers.prompt_is_flour";
    pub const BAKERS_PROMPT_IS_LIQUID: &str = "bakers.prompt_is_liquid";
    pub const BAKERS_PROMPT_PERCENT: &str = "bakers.prompt_percent";
    pub const BAKERS_PROMPT_WEIGHT: &str = "bakers.prompt_weight";
    pub const BAKERS_PROMPT_FLOUR_WEIGHT: &str = "bakers.prompt_flour_weight";
    pub const BAKERS_PROMPT_TARGET: &str = "bakers.prompt_target";
    pub const BAKERS_TABLE_HEADER: &str = "bakers.table_header";
    pub const BAKERS_TOTAL: &str = "bakers.total";
    pub const BAKERS_FLOUR_BASIS: &str = "bakers.flour_basis";
    pub const BAKERS_HYDRATION: &str = "bakers.hydration";
    pub const BAKERS_PREVIEW: &str = "bakers.preview";

    pub const HYDRATION_PROMPT_STARTER: &str = "hydration.prompt_starter";
    pub const HYDRATION_PROMPT_STARTER_PCT: &str = "hydration.prompt_starter_pct";
    pub const HYDRATION_PROMPT_MILK: &str = "hydration.prompt_milk";
    pub const HYDRATION_PROMPT_TARGET: &str = "hydration.prompt_target";
    pub const HYDRATION_RESULT_TOTALS: &str = "hydration.result_totals";
    pub const HYDRATION_RESULT_EXTRA_WATER: &str = "hydration.result_extra_water";

    pub const YEAST_PROMPT_AMOUNT: &str = "yeast.prompt_amount";
    pub const YEAST_FROM: &str = "yeast.from";
    pub const YEAST_TO: &str = "yeast.to";
    pub const YEAST_PACKETS: &str = "yeast.packets";

    pub const PAN_ORIGINAL: &str = "pan.original";
    pub const PAN_TARGET: &str = "pan.target";
    pub const PAN_AREAS: &str = "pan.areas";

    pub const CAKE_PROMPT_TIERS: &str = "cake.prompt_tiers";
    pub const CAKE_PROMPT_SIZE: &str = "cake.prompt_size";

    pub const ALTITUDE_PROMPT_ELEVATION: &str = "altitude.prompt_elevation";
    pub const ALTITUDE_PROMPT_LEAVENING: &str = "altitude.prompt_leavening";
    pub const ALTITUDE_PROMPT_SUGAR: &str = "altitude.prompt_sugar";
    pub const ALTITUDE_PROMPT_LIQUID: &str = "altitude.prompt_liquid";
    pub const ALTITUDE_PROMPT_OVEN: &str = "altitude.prompt_oven";
    pub const ALTITUDE_RESULT: &str = "altitude.result";
    pub const ALTITUDE_BOILING_POINT: &str = "altitude.boiling_point";

    pub const TURKEY_PROMPT_STUFFED: &str = "turkey.prompt_stuffed";
    pub const THAW_WATER_CHANGES: &str = "thaw.water_changes";

    pub const MICROWAVE_PROMPT_MINUTES: &str = "microwave.prompt_minutes";
    pub const MICROWAVE_PROMPT_ORIGINAL: &str = "microwave.prompt_original";
    pub const MICROWAVE_PROMPT_TARGET: &str = "microwave.prompt_target";
    pub const MICROWAVE_TABLE: &str = "microwave.table";

    pub const RICE_PROMPT_AMOUNT: &str = "rice.prompt_amount";
    pub const RICE_RESULT_WATER: &str = "rice.result_water";
    pub const RICE_RESULT_YIELD: &str = "rice.result_yield";

    pub const BRINE_PROMPT_WATER: &str = "brine.prompt_water";
    pub const BRINE_PROMPT_PCT: &str = "brine.prompt_pct";
    pub const BRINE_RESULT_SALT: &str = "brine.result_salt";

    pub const AIR_FRYER_CHECK: &str = "air_fryer.check";

    pub const OVEN_PROMPT_FAN: &str = "oven.prompt_fan";
    pub const OVEN_CONVENTIONAL: &str = "oven.conventional";
    pub const OVEN_FAN: &str = "oven.fan";
    pub const OVEN_GAS_MARK: &str = "oven.gas_mark";

    pub const COFFEE_PROMPT_WATER: &str = "coffee.prompt_water";
    pub const COFFEE_PROMPT_COFFEE: &str = "coffee.prompt_coffee";
    pub const COFFEE_BREWED: &str = "coffee.brewed";

    pub const SCALER_PROMPT_ORIGINAL: &str = "scaler.prompt_original";
    pub const SCALER_PROMPT_DESIRED: &str = "scaler.prompt_desired";
    pub const SCALER_PROMPT_COUNT: &str = "scaler.prompt_count";
    pub const SCALER_PROMPT_QUANTITY: &str = "scaler.prompt_quantity";
    pub const SCALER_PROMPT_UNIT: &str = "scaler.prompt_unit";

    pub const COST_PROMPT_PRICE: &str = "cost.prompt_price";
    pub const COST_PROMPT_SIZE: &str = "cost.prompt_size";
    pub const COST_PROMPT_USED: &str = "cost.prompt_used";
    pub const COST_PROMPT_SERVINGS: &str = "cost.prompt_servings";
    pub const COST_PROMPT_TARGET_PCT: &str = "cost.prompt_target_pct";
    pub const COST_TOTAL: &str = "cost.total";
    pub const COST_PER_SERVING: &str = "cost.per_serving";
    pub const COST_SUGGESTED_PRICE: &str = "cost.suggested_price";

    pub const PORTIONS_PROMPT_ADULTS: &str = "portions.prompt_adults";
    pub const PORTIONS_PROMPT_CHILDREN: &str = "portions.prompt_children";
    pub const PORTIONS_PROMPT_CATEGORIES: &str = "portions.prompt_categories";

    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";

    pub const CUPS_PROMPT_INGREDIENT: &str = "cups.prompt_ingredient";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
}

impl Language {
    /// `ko`, `ko-KR`, `en_US.UTF-8` 같은 코드를 해석한다. 모르는 언어는 `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let base = code
            .trim()
            .split(['.', '_', '-'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match base.as_str() {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: HashMap<String, String>,
}

impl Translator {
    /// 내장 문자열만 쓰는 번역기.
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            overrides: HashMap::new(),
        }
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)가 있으면 내장 문자열 위에 덮어쓴다.
    /// 파일이 없거나 깨져 있으면 내장 문자열만 사용한다.
    pub fn with_pack(lang: Language, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang))
            .unwrap_or_default();
        Self { lang, overrides }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 현재 언어 → 영어 순으로 찾고, 끝까지 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.get(key) {
            return v;
        }
        let built_in: Option<&str> = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or(key)
    }
}

/// `{name}` 자리표시자를 채운다.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

/// CLI 플래그 → 설정 → 시스템 로케일 순으로 언어를 정한다. "auto"는 건너뛴다.
pub fn resolve_language(cli_arg: &str, config_lang: &str) -> Language {
    Language::from_code(cli_arg)
        .or_else(|| Language::from_code(config_lang))
        .or_else(detect_system_language)
        .unwrap_or(Language::En)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(lang) = get_locale().as_deref().and_then(Language::from_code) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| Language::from_code(&v))
}

/// TOML 언어팩을 로드한다. 중첩 테이블은 `a.b` 형태의 키로 펼친다.
fn load_overrides(dir: &Path, lang: Language) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{}.toml", lang.as_code()));
    let content = fs::read_to_string(&path).ok()?;
    match parse_toml_to_map(&content) {
        Ok(map) => {
            debug!(path = %path.display(), entries = map.len(), "언어팩 로드");
            Some(map)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "언어팩을 읽지 못해 내장 문자열을 사용합니다");
            None
        }
    }
}

fn parse_toml_to_map(src: &str) -> Result<HashMap<String, String>, toml::de::Error> {
    let table: toml::Table = toml::from_str(src)?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        walk(k, v, &mut map);
    }
    Ok(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== CalcKitchen ===",
        MAIN_MENU_SETTINGS => "설정",
        MAIN_MENU_EXIT => "종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        PROMPT_UNIT => "단위:",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        NOTE_CLAMPED => "참고: 입력값이 표 범위를 벗어나 가장 가까운 구간으로 계산했습니다.",

        PROMPT_WEIGHT => "무게: ",
        PROMPT_GRAMS => "무게 [g]: ",
        PROMPT_FLOUR_G => "밀가루 [g]: ",
        PROMPT_WATER_G => "물 [g]: ",
        PROMPT_DIAMETER => "지름: ",
        PROMPT_SIDE => "한 변: ",
        PROMPT_LENGTH => "길이: ",
        PROMPT_WIDTH => "너비: ",
        PROMPT_OVEN_TEMP => "오븐 온도: ",
        PROMPT_OVEN_MINUTES => "오븐 조리 시간 [분]: ",

        RESULT => "결과:",
        RESULT_COOK_TIME => "조리 시간:",
        RESULT_INTERNAL_TEMP => "목표 심부 온도:",
        RESULT_REST => "휴지",
        RESULT_SCALE_FACTOR => "배율:",
        RESULT_SERVINGS => "총 인분:",
        RESULT_THAW_TIME => "해동 시간:",
        RESULT_DOUGH_WEIGHT => "반죽 총량:",

        BAKERS_PRESETS => "프리셋 (엔터 = 직접 입력):",
        BAKERS_PROMPT_PRESET => "프리셋 번호: ",
        BAKERS_PROMPT_COUNT => "재료 개수: ",
        BAKERS_PROMPT_NAME => "재료 이름: ",
        BAKERS_PROMPT_IS_FLOUR => "밀가루(100% 기준)인가요? (y/n): ",
        BAKERS_PROMPT_IS_LIQUID => "수화율에 포함되는 액체인가요? (y/n): ",
        BAKERS_PROMPT_PERCENT => "{name} 비율 [%]: ",
        BAKERS_PROMPT_WEIGHT => "{name} 무게 [g]: ",
        BAKERS_PROMPT_FLOUR_WEIGHT => "밀가루 무게 [g]: ",
        BAKERS_PROMPT_TARGET => "목표 반죽 총량 [g]: ",
        BAKERS_TABLE_HEADER => "재료                       무게        비율",
        BAKERS_TOTAL => "합계:",
        BAKERS_FLOUR_BASIS => "밀가루 기준:",
        BAKERS_HYDRATION => "수화율:",
        BAKERS_PREVIEW => "배율 미리보기",
        "bakers.mode.forward" => "밀가루 무게로 계산",
        "bakers.mode.target" => "목표 반죽량으로 계산",
        "bakers.mode.reverse" => "무게로 비율 계산",

        HYDRATION_PROMPT_STARTER => "르방/스타터 [g] ",
        HYDRATION_PROMPT_STARTER_PCT => "스타터 수화율 [%] ",
        HYDRATION_PROMPT_MILK => "우유 [g] ",
        HYDRATION_PROMPT_TARGET => "목표 수화율 [%] (0 = 건너뜀) ",
        HYDRATION_RESULT_TOTALS => "총 밀가루 / 총 수분:",
        HYDRATION_RESULT_EXTRA_WATER => "목표까지 추가할 물:",

        YEAST_PROMPT_AMOUNT => "이스트 양 [g]: ",
        YEAST_FROM => "원래 이스트:",
        YEAST_TO => "바꿀 이스트:",
        YEAST_PACKETS => "봉지",

        PAN_ORIGINAL => "원래 틀:",
        PAN_TARGET => "바꿀 틀:",
        PAN_AREAS => "면적:",

        CAKE_PROMPT_TIERS => "단 수: ",
        CAKE_PROMPT_SIZE => "크기(지름/한 변): ",

        ALTITUDE_PROMPT_ELEVATION => "고도: ",
        ALTITUDE_PROMPT_LEAVENING => "팽창제 [tsp] ",
        ALTITUDE_PROMPT_SUGAR => "설탕 [cup] ",
        ALTITUDE_PROMPT_LIQUID => "액체 [cup] ",
        ALTITUDE_PROMPT_OVEN => "오븐 온도 [°F] ",
        ALTITUDE_RESULT => "조정값 (팽창제, 설탕, 액체, 오븐):",
        ALTITUDE_BOILING_POINT => "물의 끓는점:",

        TURKEY_PROMPT_STUFFED => "속을 채웠나요? (y/n): ",
        THAW_WATER_CHANGES => "찬물 교체 횟수(30분마다):",

        MICROWAVE_PROMPT_MINUTES => "레시피 조리 시간 [분]: ",
        MICROWAVE_PROMPT_ORIGINAL => "레시피 전자레인지 출력 [W]: ",
        MICROWAVE_PROMPT_TARGET => "내 전자레인지 출력 [W]: ",
        MICROWAVE_TABLE => "출력별 조리 시간:",

        RICE_PROMPT_AMOUNT => "쌀 양: ",
        RICE_RESULT_WATER => "물:",
        RICE_RESULT_YIELD => "완성량:",

        BRINE_PROMPT_WATER => "물 양: ",
        BRINE_PROMPT_PCT => "소금 농도 [%] ",
        BRINE_RESULT_SALT => "소금:",

        AIR_FRYER_CHECK => "중간 확인:",

        OVEN_PROMPT_FAN => "컨벡션(팬) 오븐 기준 온도인가요? (y/n): ",
        OVEN_CONVENTIONAL => "일반 오븐:",
        OVEN_FAN => "컨벡션 오븐:",
        OVEN_GAS_MARK => "가스 마크:",

        COFFEE_PROMPT_WATER => "물 [mL]: ",
        COFFEE_PROMPT_COFFEE => "원두 [g]: ",
        COFFEE_BREWED => "추출량",

        SCALER_PROMPT_ORIGINAL => "원래 인분: ",
        SCALER_PROMPT_DESIRED => "원하는 인분: ",
        SCALER_PROMPT_COUNT => "재료 개수: ",
        SCALER_PROMPT_QUANTITY => "수량: ",
        SCALER_PROMPT_UNIT => "단위(예: cup, g, tbsp): ",

        COST_PROMPT_PRICE => "포장 가격: ",
        COST_PROMPT_SIZE => "포장 용량: ",
        COST_PROMPT_USED => "사용량(같은 단위): ",
        COST_PROMPT_SERVINGS => "인분: ",
        COST_PROMPT_TARGET_PCT => "목표 원가율 [%] ",
        COST_TOTAL => "총 원가:",
        COST_PER_SERVING => "1인분 원가:",
        COST_SUGGESTED_PRICE => "권장 판매가:",

        PORTIONS_PROMPT_ADULTS => "성인 수: ",
        PORTIONS_PROMPT_CHILDREN => "어린이 수: ",
        PORTIONS_PROMPT_CATEGORIES => "음식 번호(쉼표로 구분): ",

        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위: ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위: ",

        CUPS_PROMPT_INGREDIENT => "재료 번호 또는 이름: ",

        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 단위 시스템 / 언어:",
        SETTINGS_OPTIONS => "1) 미터법  2) 미국 단위  3) English  4) 한국어  5) 언어 자동",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다:",

        "calc.bakers-percentage-calculator" => "베이커스 퍼센트 계산기",
        "calc.dough-hydration-calculator" => "반죽 수화율 계산기",
        "calc.yeast-conversion-calculator" => "이스트 변환기",
        "calc.cake-pan-size-converter" => "케이크 틀 크기 변환기",
        "calc.cake-servings-calculator" => "케이크 인분 계산기",
        "calc.high-altitude-baking-calculator" => "고지대 베이킹 보정",
        "calc.turkey-cooking-time-calculator" => "칠면조 굽는 시간",
        "calc.turkey-thawing-calculator" => "칠면조 해동 시간",
        "calc.microwave-wattage-converter" => "전자레인지 출력 변환기",
        "calc.meat-roasting-time-calculator" => "고기 로스팅 시간",
        "calc.rice-water-ratio-calculator" => "밥물 비율 계산기",
        "calc.brine-calculator" => "염지(브라인) 계산기",
        "calc.air-fryer-conversion-calculator" => "에어프라이어 변환기",
        "calc.oven-temperature-converter" => "오븐 온도 변환기",
        "calc.coffee-ratio-calculator" => "커피 비율 계산기",
        "calc.recipe-scaler" => "레시피 배율 조정",
        "calc.recipe-cost-calculator" => "레시피 원가 계산기",
        "calc.party-food-portion-calculator" => "파티 음식 양 계산기",
        "calc.cooking-unit-converter" => "요리 단위 변환기",
        "calc.cups-to-grams-converter" => "컵 ↔ 그램 변환기",

        "label.yeast.instant" => "인스턴트 드라이",
        "label.yeast.active_dry" => "액티브 드라이",
        "label.yeast.fresh" => "생이스트",
        "label.shape.round" => "원형",
        "label.shape.square" => "정사각형",
        "label.shape.rectangle" => "직사각형",
        "label.serving.party" => "파티 조각",
        "label.serving.wedding" => "웨딩 조각",
        "label.thaw.fridge" => "냉장 해동",
        "label.thaw.cold_water" => "찬물 해동",
        "label.cut.beef_rib" => "소 립로스트",
        "label.cut.beef_tenderloin" => "소 안심",
        "label.cut.pork_loin" => "돼지 등심",
        "label.cut.lamb_leg" => "양 다리",
        "label.cut.whole_chicken" => "통닭",
        "label.doneness.rare" => "레어",
        "label.doneness.medium_rare" => "미디엄 레어",
        "label.doneness.medium" => "미디엄",
        "label.doneness.well_done" => "웰던",
        "label.rice.white_long_grain" => "백미(장립종)",
        "label.rice.jasmine" => "자스민",
        "label.rice.basmati" => "바스마티",
        "label.rice.short_grain" => "단립종",
        "label.rice.brown" => "현미",
        "label.rice.wild" => "와일드 라이스",
        "label.brine.wet" => "습식 염지",
        "label.brine.dry" => "건식 염지",
        "label.salt.table" => "식탁염",
        "label.salt.morton" => "모턴 코셔 소금",
        "label.salt.diamond" => "다이아몬드 크리스털 코셔 소금",
        "label.brew.pour_over" => "푸어오버",
        "label.brew.drip" => "드립 머신",
        "label.brew.french_press" => "프렌치 프레스",
        "label.brew.aeropress" => "에어로프레스",
        "label.brew.espresso" => "에스프레소",
        "label.brew.cold_brew" => "콜드브루 원액",
        "label.strength.mild" => "연하게",
        "label.strength.medium" => "보통",
        "label.strength.strong" => "진하게",
        "label.coffee.from_water" => "물 양으로",
        "label.coffee.from_coffee" => "원두 양으로",
        "label.appetite.light" => "적게",
        "label.appetite.normal" => "보통",
        "label.appetite.hearty" => "많이",
        "label.food.boneless_meat" => "뼈 없는 고기",
        "label.food.bone_in_meat" => "뼈 있는 고기",
        "label.food.fish" => "생선",
        "label.food.dry_pasta" => "건파스타",
        "label.food.dry_rice" => "쌀",
        "label.food.vegetables" => "채소",
        "label.food.green_salad" => "샐러드",
        "label.food.bread" => "빵",
        "label.food.cheese" => "치즈",
        "label.quantity.mass" => "무게",
        "label.quantity.volume" => "부피",
        "label.quantity.temperature" => "온도",
        "label.quantity.length" => "길이",
        "label.cups.volume_to_grams" => "부피 → 그램",
        "label.cups.grams_to_volume" => "그램 → 부피",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== CalcKitchen ===",
        MAIN_MENU_SETTINGS => "Settings",
        MAIN_MENU_EXIT => "Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        PROMPT_UNIT => "Unit:",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        NOTE_CLAMPED => "Note: input was outside the chart; the nearest range was used.",

        PROMPT_WEIGHT => "Weight: ",
        PROMPT_GRAMS => "Weight [g]: ",
        PROMPT_FLOUR_G => "Flour [g]: ",
        PROMPT_WATER_G => "Water [g]: ",
        PROMPT_DIAMETER => "Diameter: ",
        PROMPT_SIDE => "Side: ",
        PROMPT_LENGTH => "Length: ",
        PROMPT_WIDTH => "Width: ",
        PROMPT_OVEN_TEMP => "Oven temperature: ",
        PROMPT_OVEN_MINUTES => "Oven time [min]: ",

        RESULT => "Result:",
        RESULT_COOK_TIME => "Cooking time:",
        RESULT_INTERNAL_TEMP => "Target internal temperature:",
        RESULT_REST => "rest",
        RESULT_SCALE_FACTOR => "Scale factor:",
        RESULT_SERVINGS => "Total servings:",
        RESULT_THAW_TIME => "Thawing time:",
        RESULT_DOUGH_WEIGHT => "Dough weight:",

        BAKERS_PRESETS => "Presets (enter = custom):",
        BAKERS_PROMPT_PRESET => "Preset number: ",
        BAKERS_PROMPT_COUNT => "Number of ingredients: ",
        BAKERS_PROMPT_NAME => "Ingredient name: ",
        BAKERS_PROMPT_IS_FLOUR => "Is this flour (100% basis)? (y/n): ",
        BAKERS_PROMPT_IS_LIQUID => "Does it count toward hydration? (y/n): ",
        BAKERS_PROMPT_PERCENT => "{name} percentage [%]: ",
        BAKERS_PROMPT_WEIGHT => "{name} weight [g]: ",
        BAKERS_PROMPT_FLOUR_WEIGHT => "Flour weight [g]: ",
        BAKERS_PROMPT_TARGET => "Target dough weight [g]: ",
        BAKERS_TABLE_HEADER => "Ingredient               Weight     Percent",
        BAKERS_TOTAL => "Total:",
        BAKERS_FLOUR_BASIS => "Flour basis:",
        BAKERS_HYDRATION => "Hydration:",
        BAKERS_PREVIEW => "Scaled",
        "bakers.mode.forward" => "From flour weight",
        "bakers.mode.target" => "From target dough weight",
        "bakers.mode.reverse" => "Percentages from weights",

        HYDRATION_PROMPT_STARTER => "Starter [g] ",
        HYDRATION_PROMPT_STARTER_PCT => "Starter hydration [%] ",
        HYDRATION_PROMPT_MILK => "Milk [g] ",
        HYDRATION_PROMPT_TARGET => "Target hydration [%] (0 = skip) ",
        HYDRATION_RESULT_TOTALS => "Total flour / total water:",
        HYDRATION_RESULT_EXTRA_WATER => "Water to add for target:",

        YEAST_PROMPT_AMOUNT => "Yeast amount [g]: ",
        YEAST_FROM => "From yeast:",
        YEAST_TO => "To yeast:",
        YEAST_PACKETS => "packets",

        PAN_ORIGINAL => "Original pan:",
        PAN_TARGET => "New pan:",
        PAN_AREAS => "Area:",

        CAKE_PROMPT_TIERS => "Number of tiers: ",
        CAKE_PROMPT_SIZE => "Size (diameter/side): ",

        ALTITUDE_PROMPT_ELEVATION => "Elevation: ",
        ALTITUDE_PROMPT_LEAVENING => "Leavening [tsp] ",
        ALTITUDE_PROMPT_SUGAR => "Sugar [cup] ",
        ALTITUDE_PROMPT_LIQUID => "Liquid [cup] ",
        ALTITUDE_PROMPT_OVEN => "Oven temperature [°F] ",
        ALTITUDE_RESULT => "Adjusted (leavening, sugar, liquid, oven):",
        ALTITUDE_BOILING_POINT => "Water boils at:",

        TURKEY_PROMPT_STUFFED => "Stuffed? (y/n): ",
        THAW_WATER_CHANGES => "Cold-water changes (every 30 min):",

        MICROWAVE_PROMPT_MINUTES => "Recipe time [min]: ",
        MICROWAVE_PROMPT_ORIGINAL => "Recipe wattage [W]: ",
        MICROWAVE_PROMPT_TARGET => "Your microwave wattage [W]: ",
        MICROWAVE_TABLE => "Time by wattage:",

        RICE_PROMPT_AMOUNT => "Rice amount: ",
        RICE_RESULT_WATER => "Water:",
        RICE_RESULT_YIELD => "Cooked yield:",

        BRINE_PROMPT_WATER => "Water amount: ",
        BRINE_PROMPT_PCT => "Salt concentration [%] ",
        BRINE_RESULT_SALT => "Salt:",

        AIR_FRYER_CHECK => "Check at:",

        OVEN_PROMPT_FAN => "Is this a fan/convection temperature? (y/n): ",
        OVEN_CONVENTIONAL => "Conventional:",
        OVEN_FAN => "Fan/convection:",
        OVEN_GAS_MARK => "Gas mark:",

        COFFEE_PROMPT_WATER => "Water [mL]: ",
        COFFEE_PROMPT_COFFEE => "Coffee [g]: ",
        COFFEE_BREWED => "brewed",

        SCALER_PROMPT_ORIGINAL => "Original servings: ",
        SCALER_PROMPT_DESIRED => "Desired servings: ",
        SCALER_PROMPT_COUNT => "Number of ingredients: ",
        SCALER_PROMPT_QUANTITY => "Quantity: ",
        SCALER_PROMPT_UNIT => "Unit (e.g. cup, g, tbsp): ",

        COST_PROMPT_PRICE => "Package price: ",
        COST_PROMPT_SIZE => "Package size: ",
        COST_PROMPT_USED => "Amount used (same unit): ",
        COST_PROMPT_SERVINGS => "Servings: ",
        COST_PROMPT_TARGET_PCT => "Target food-cost [%] ",
        COST_TOTAL => "Total cost:",
        COST_PER_SERVING => "Cost per serving:",
        COST_SUGGESTED_PRICE => "Suggested price:",

        PORTIONS_PROMPT_ADULTS => "Adults: ",
        PORTIONS_PROMPT_CHILDREN => "Children: ",
        PORTIONS_PROMPT_CATEGORIES => "Food numbers (comma separated): ",

        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit: ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit: ",

        CUPS_PROMPT_INGREDIENT => "Ingredient number or name: ",

        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current unit system / language:",
        SETTINGS_OPTIONS => "1) Metric  2) US customary  3) English  4) 한국어  5) Auto language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings changed:",

        "calc.bakers-percentage-calculator" => "Baker's Percentage Calculator",
        "calc.dough-hydration-calculator" => "Dough Hydration Calculator",
        "calc.yeast-conversion-calculator" => "Yeast Conversion Calculator",
        "calc.cake-pan-size-converter" => "Cake Pan Size Converter",
        "calc.cake-servings-calculator" => "Cake Servings Calculator",
        "calc.high-altitude-baking-calculator" => "High-Altitude Baking Calculator",
        "calc.turkey-cooking-time-calculator" => "Turkey Cooking Time Calculator",
        "calc.turkey-thawing-calculator" => "Turkey Thawing Calculator",
        "calc.microwave-wattage-converter" => "Microwave Wattage Converter",
        "calc.meat-roasting-time-calculator" => "Meat Roasting Time Calculator",
        "calc.rice-water-ratio-calculator" => "Rice-to-Water Ratio Calculator",
        "calc.brine-calculator" => "Brine Calculator",
        "calc.air-fryer-conversion-calculator" => "Air Fryer Conversion Calculator",
        "calc.oven-temperature-converter" => "Oven Temperature Converter",
        "calc.coffee-ratio-calculator" => "Coffee Ratio Calculator",
        "calc.recipe-scaler" => "Recipe Scaler",
        "calc.recipe-cost-calculator" => "Recipe Cost Calculator",
        "calc.party-food-portion-calculator" => "Party Food Portion Calculator",
        "calc.cooking-unit-converter" => "Cooking Unit Converter",
        "calc.cups-to-grams-converter" => "Cups to Grams Converter",

        "label.yeast.instant" => "Instant dry",
        "label.yeast.active_dry" => "Active dry",
        "label.yeast.fresh" => "Fresh (cake)",
        "label.shape.round" => "Round",
        "label.shape.square" => "Square",
        "label.shape.rectangle" => "Rectangle",
        "label.serving.party" => "Party slices",
        "label.serving.wedding" => "Wedding slices",
        "label.thaw.fridge" => "Refrigerator",
        "label.thaw.cold_water" => "Cold water",
        "label.cut.beef_rib" => "Beef rib roast",
        "label.cut.beef_tenderloin" => "Beef tenderloin",
        "label.cut.pork_loin" => "Pork loin",
        "label.cut.lamb_leg" => "Leg of lamb",
        "label.cut.whole_chicken" => "Whole chicken",
        "label.doneness.rare" => "Rare",
        "label.doneness.medium_rare" => "Medium rare",
        "label.doneness.medium" => "Medium",
        "label.doneness.well_done" => "Well done",
        "label.rice.white_long_grain" => "White long-grain",
        "label.rice.jasmine" => "Jasmine",
        "label.rice.basmati" => "Basmati",
        "label.rice.short_grain" => "Short-grain",
        "label.rice.brown" => "Brown",
        "label.rice.wild" => "Wild rice",
        "label.brine.wet" => "Wet brine",
        "label.brine.dry" => "Dry brine",
        "label.salt.table" => "Table salt",
        "label.salt.morton" => "Morton kosher salt",
        "label.salt.diamond" => "Diamond Crystal kosher salt",
        "label.brew.pour_over" => "Pour-over",
        "label.brew.drip" => "Drip machine",
        "label.brew.french_press" => "French press",
        "label.brew.aeropress" => "AeroPress",
        "label.brew.espresso" => "Espresso",
        "label.brew.cold_brew" => "Cold brew concentrate",
        "label.strength.mild" => "Mild",
        "label.strength.medium" => "Medium",
        "label.strength.strong" => "Strong",
        "label.coffee.from_water" => "From water",
        "label.coffee.from_coffee" => "From coffee",
        "label.appetite.light" => "Light",
        "label.appetite.normal" => "Normal",
        "label.appetite.hearty" => "Hearty",
        "label.food.boneless_meat" => "Boneless meat",
        "label.food.bone_in_meat" => "Bone-in meat",
        "label.food.fish" => "Fish",
        "label.food.dry_pasta" => "Dry pasta",
        "label.food.dry_rice" => "Rice (dry)",
        "label.food.vegetables" => "Vegetables",
        "label.food.green_salad" => "Green salad",
        "label.food.bread" => "Bread",
        "label.food.cheese" => "Cheese",
        "label.quantity.mass" => "Mass",
        "label.quantity.volume" => "Volume",
        "label.quantity.temperature" => "Temperature",
        "label.quantity.length" => "Length",
        "label.cups.volume_to_grams" => "Volume → grams",
        "label.cups.grams_to_volume" => "Grams → volume",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CalculatorId;

    #[test]
    fn every_calculator_has_a_title_in_both_languages() {
        for id in CalculatorId::ALL {
            let key = id.title_key();
            assert!(en(&key).is_some(), "missing en title for {key}");
            assert!(ko(&key).is_some(), "missing ko title for {key}");
        }
    }

    #[test]
    fn language_codes_are_normalised() {
        assert_eq!(Language::from_code("ko-KR"), Some(Language::Ko));
        assert_eq!(Language::from_code("en_US.UTF-8"), Some(Language::En));
        assert_eq!(Language::from_code("auto"), None);
        assert_eq!(resolve_language("ko", "en"), Language::Ko);
        assert_eq!(resolve_language("auto", "en"), Language::En);
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new(Language::Ko);
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
    }

    #[test]
    fn pack_overrides_built_in_strings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.toml"),
            "[general]\nerror_prefix = \"Oops\"\n",
        )
        .unwrap();
        let tr = Translator::with_pack(Language::En, Some(dir.path()));
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Oops");
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
    }

    #[test]
    fn broken_pack_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ko.toml"), "this is = = not toml").unwrap();
        let tr = Translator::with_pack(Language::Ko, Some(dir.path()));
        assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
    }

    #[test]
    fn fill_replaces_named_placeholders() {
        assert_eq!(
            fill("{name} weight [g]: ", &[("name", "Water")]),
            "Water weight [g]: "
        );
    }
}
