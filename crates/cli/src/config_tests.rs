use super::*;
use std::path::Path;

#[test]
fn full_config_parses() {
    let config: CliConfig = toml::from_str("depth = 5\nengine = \"random\"").expect("valid TOML");
    assert_eq!(config.depth, Some(5));
    assert_eq!(config.engine.as_deref(), Some("random"));
}

#[test]
fn empty_config_leaves_defaults() {
    let config: CliConfig = toml::from_str("").expect("valid TOML");
    assert_eq!(config.depth, None);
    assert_eq!(config.engine, None);
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<CliConfig>("deepth = 5").is_err());
}

#[test]
fn missing_file_is_not_an_error() {
    let loaded = load(Path::new("no-such-chess-cli-config.toml")).expect("missing file is fine");
    assert!(loaded.is_none());
}
