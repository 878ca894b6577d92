use std::path::PathBuf;
use std::process::ExitCode;

use calc_kitchen::config::{self, DEFAULT_CONFIG_PATH};
use calc_kitchen::i18n::{self, keys, Translator};
use calc_kitchen::app;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 주방 계산기 모음 CLI
#[derive(Parser, Debug)]
#[command(name = "calc_kitchen")]
#[command(about = "Kitchen-math calculators: baker's percentage, cooking times, conversions")]
#[command(version)]
struct Args {
    /// 표시 언어 (ko, en, auto)
    #[arg(short, long, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 메뉴 없이 바로 실행할 계산기 슬러그 (예: bakers-percentage-calculator)
    #[arg(long)]
    calc: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calc_kitchen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut cfg = match config::load_or_default(&args.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{}: {err}", Translator::new(i18n::Language::En).t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };

    let tr = app::translator_for(&args.lang, &cfg);

    let result = match args.calc.as_deref() {
        Some(slug) => app::run_single(slug, &cfg, &tr),
        None => app::run(&mut cfg, &args.config, &tr),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
