//! 음료 관련 계산 모듈.

pub mod coffee;
