use deflicker_core::pipeline::config::{DeflickerConfig, FailurePolicy};
use deflicker_core::remap::RemapMode;

#[test]
fn test_minimal_toml_gets_defaults() {
    let config: DeflickerConfig = toml::from_str(
        r#"
        source = "/frames/in"
        destination = "/frames/out"
        "#,
    )
    .unwrap();

    assert_eq!(config.rolling_average, 10);
    assert!(config.threads >= 1);
    assert_eq!(config.remap, RemapMode::PerChannel);
    assert_eq!(config.on_error, FailurePolicy::Abort);
}

#[test]
fn test_full_toml_round_trip() {
    let toml_in = r#"
        source = "/frames/in"
        destination = "/frames/out"
        rolling_average = 4
        threads = 3
        remap = "luminance"
        on_error = "skip"
    "#;
    let config: DeflickerConfig = toml::from_str(toml_in).unwrap();
    assert_eq!(config.rolling_average, 4);
    assert_eq!(config.threads, 3);
    assert_eq!(config.remap, RemapMode::Luminance);
    assert_eq!(config.on_error, FailurePolicy::Skip);

    let serialized = toml::to_string(&config).unwrap();
    let reparsed: DeflickerConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(reparsed.rolling_average, config.rolling_average);
    assert_eq!(reparsed.threads, config.threads);
    assert_eq!(reparsed.remap, config.remap);
    assert_eq!(reparsed.on_error, config.on_error);
}

#[test]
fn test_new_uses_the_same_defaults_as_serde() {
    let config = DeflickerConfig::new("/a".into(), "/b".into());
    assert_eq!(config.rolling_average, 10);
    assert!(config.threads >= 1);
    assert_eq!(config.remap, RemapMode::PerChannel);
    assert_eq!(config.on_error, FailurePolicy::Abort);
}
