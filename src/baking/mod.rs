//! 제빵 관련 계산 모듈을 모아둔다.
//! 베이커스 퍼센트, 수화율, 이스트 환산, 팬 크기, 케이크 인분, 고지대 보정으로 구성한다.

pub mod altitude;
pub mod bakers_percentage;
pub mod cake_servings;
pub mod hydration;
pub mod pan_size;
pub mod yeast;
