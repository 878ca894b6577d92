//! 조리 시간·온도 관련 계산 모듈을 모아둔다.
//! 칠면조 로스팅/해동, 전자레인지 출력 환산, 육류 로스팅, 밥물, 염지, 에어프라이어, 오븐 온도로 구성한다.

pub mod air_fryer;
pub mod brine;
pub mod microwave;
pub mod oven;
pub mod rice;
pub mod roast;
pub mod thaw;
pub mod turkey;
