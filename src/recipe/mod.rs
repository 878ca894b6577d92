//! 레시피 단위 계산: 인분 배율 조정, 원가, 파티 음식 분량.

pub mod cost;
pub mod portions;
pub mod scaling;
