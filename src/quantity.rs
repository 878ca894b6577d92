/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Mass,
    Volume,
    Temperature,
    Length,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Mass,
        QuantityKind::Volume,
        QuantityKind::Temperature,
        QuantityKind::Length,
    ];

    /// 입력 예시로 보여줄 단위 문자열 목록.
    pub fn unit_hint(&self) -> &'static str {
        match self {
            QuantityKind::Mass => "g, kg, oz, lb",
            QuantityKind::Volume => "ml, l, tsp, tbsp, fl oz, cup, pt, qt, gal",
            QuantityKind::Temperature => "C, F",
            QuantityKind::Length => "mm, cm, in",
        }
    }
}
