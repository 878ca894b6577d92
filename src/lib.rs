//! 주방 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod baking;
pub mod bracket;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod cooking;
pub mod drinks;
pub mod i18n;
pub mod ingredient_db;
pub mod quantity;
pub mod recipe;
pub mod rounding;
pub mod ui_cli;
pub mod units;
