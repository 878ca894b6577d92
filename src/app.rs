use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::CalculatorId;
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("알 수 없는 계산기: {0}")]
    UnknownCalculator(String),
    /// 표준 입력이 닫힘(EOF)
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// CLI 인자와 설정값으로 표시 언어를 정하고 번역기를 만든다.
pub fn translator_for(cli_lang: &str, config: &Config) -> Translator {
    let lang = i18n::resolve_language(cli_lang, &config.language);
    Translator::with_pack(lang, config.locale_dir.as_deref().map(Path::new))
}

/// 설정 화면에서 언어가 바뀌었으면 새 언어로 번역기를 다시 만든다.
/// 바뀌지 않았으면 기존 번역기(CLI 인자로 고른 언어 포함)를 그대로 쓴다.
fn refresh_translator(tr: Translator, previous_language: &str, config: &Config) -> Translator {
    if config.language == previous_language {
        return tr;
    }
    debug!(language = %config.language, "언어 설정 변경, 번역기 재생성");
    translator_for("auto", config)
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 메뉴에서 바뀐 값은 바로 저장하고 적용한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let mut tr = tr.clone();
    info!(language = tr.language().as_code(), "CalcKitchen 시작");
    loop {
        let choice = match ui_cli::main_menu(&tr) {
            Ok(c) => c,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        match choice {
            MenuChoice::Calculator(id) => {
                debug!(calculator = id.slug(), "계산기 실행");
                match ui_cli::run_calculator(id, &tr, config) {
                    Ok(()) => {}
                    // 잘못된 단위 같은 입력 오류는 메뉴로 돌아간다.
                    Err(AppError::Conversion(e)) => {
                        println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
                    }
                    Err(AppError::InputClosed) => break,
                    Err(e) => return Err(e),
                }
            }
            MenuChoice::Settings => {
                let previous_language = config.language.clone();
                ui_cli::handle_settings(&tr, config)?;
                config.save(config_path)?;
                tr = refresh_translator(tr, &previous_language, config);
            }
            MenuChoice::Exit => break,
        }
    }
    println!("{}", tr.t(i18n::keys::APP_EXIT));
    info!("CalcKitchen 종료");
    Ok(())
}

/// 메뉴 없이 계산기 하나만 실행한다(`--calc <slug>`).
pub fn run_single(slug: &str, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let id = CalculatorId::from_slug(slug)
        .ok_or_else(|| AppError::UnknownCalculator(slug.to_string()))?;
    info!(calculator = id.slug(), "단일 계산기 실행");
    ui_cli::run_calculator(id, tr, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn config_with_language(code: &str) -> Config {
        Config {
            language: code.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let tr = translator_for("en", &config_with_language("ko"));
        assert_eq!(tr.language(), Language::En);
        let tr = translator_for("auto", &config_with_language("ko"));
        assert_eq!(tr.language(), Language::Ko);
    }

    #[test]
    fn language_change_rebuilds_translator() {
        let tr = Translator::new(Language::En);
        let cfg = config_with_language("ko");
        let tr = refresh_translator(tr, "en", &cfg);
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(i18n::keys::SETTINGS_SAVED), "설정이 변경되었습니다:");
    }

    #[test]
    fn unchanged_language_keeps_cli_choice() {
        // --lang en 으로 시작했고 설정에서는 단위만 바꾼 경우
        let tr = Translator::new(Language::En);
        let cfg = config_with_language("ko");
        let tr = refresh_translator(tr, "ko", &cfg);
        assert_eq!(tr.language(), Language::En);
    }
}
