use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::units::{LengthUnit, MassUnit, TemperatureUnit, VolumeUnit};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// g, mL, °C, cm
    Metric,
    /// lb/oz, cup, °F, in
    UsCustomary,
}

/// 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub mass: MassUnit,
    pub volume: VolumeUnit,
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 기본 단위 세트.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                mass: MassUnit::Gram,
                volume: VolumeUnit::Milliliter,
                temperature: TemperatureUnit::Celsius,
                length: LengthUnit::Centimeter,
            },
            UnitSystem::UsCustomary => Self {
                mass: MassUnit::Pound,
                volume: VolumeUnit::Cup,
                temperature: TemperatureUnit::Fahrenheit,
                length: LengthUnit::Inch,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드 (auto/en/ko)
    pub language: String,
    /// 언어팩(TOML) 디렉터리
    pub locale_dir: Option<String>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            language: "auto".to_string(),
            locale_dir: None,
            default_units: DefaultUnits::default(),
        }
    }
}

impl Config {
    /// 단위 시스템을 바꾸고 기본 단위 세트도 함께 바꾼다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파일 해석 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
