use calc_kitchen::config::{load_or_default, Config, DefaultUnits, UnitSystem};
use calc_kitchen::units::{MassUnit, TemperatureUnit};

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.default_units.mass, MassUnit::Gram);
}

#[test]
fn saved_settings_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.set_unit_system(UnitSystem::UsCustomary);
    cfg.language = "ko".into();
    cfg.locale_dir = Some("locales".into());
    cfg.save(&path).expect("save");

    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.default_units, DefaultUnits::for_system(UnitSystem::UsCustomary));
    assert_eq!(loaded.default_units.temperature, TemperatureUnit::Fahrenheit);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.unit_system, UnitSystem::Metric);
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "unit_system = [").expect("write");
    assert!(load_or_default(&path).is_err());
}
