use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let config = DriverConfig::with_default_dialect(None).unwrap();
    assert_eq!(config, DriverConfig::default());
    assert_eq!(config.dialect, Dialect::Mini);
    assert!(!config.verbose);
    assert_eq!(config.color, ColorMode::Auto);
}

#[test]
fn environment_dialect() {
    let config = DriverConfig::with_default_dialect(Some("extended")).unwrap();
    assert_eq!(config.dialect, Dialect::Extended);

    assert_eq!(
        DriverConfig::with_default_dialect(Some("java")),
        Err(ConfigError::Dialect(UnknownDialect("java".to_string())))
    );
}

#[test]
fn flags_override_environment() {
    let mut config = DriverConfig::with_default_dialect(Some("extended")).unwrap();
    let argv = args(&["--mini", "tests/"]);
    let positional = config.apply_args(&argv).unwrap();
    assert_eq!(positional, vec!["tests/"]);
    assert_eq!(config.dialect, Dialect::Mini);
}

#[test]
fn interleaved_options() {
    let mut config = DriverConfig::default();
    let argv = args(&["-v", "a.java", "--dialect=extended", "--color=never"]);
    let positional = config.apply_args(&argv).unwrap();
    assert_eq!(positional, vec!["a.java"]);
    assert_eq!(
        config,
        DriverConfig {
            dialect: Dialect::Extended,
            verbose: true,
            color: ColorMode::Never,
        }
    );
}

#[test]
fn extended_shorthand() {
    let mut config = DriverConfig::default();
    assert!(config.apply_option("--extended").unwrap());
    assert_eq!(config.dialect, Dialect::Extended);
}

#[test]
fn bad_options() {
    let mut config = DriverConfig::default();
    assert_eq!(
        config.apply_option("--color=blue"),
        Err(ConfigError::Color("blue".to_string()))
    );
    assert_eq!(
        config.apply_option("--fast"),
        Err(ConfigError::UnknownOption("--fast".to_string()))
    );
    assert!(matches!(
        config.apply_option("--dialect=c"),
        Err(ConfigError::Dialect(_))
    ));
    assert_eq!(config, DriverConfig::default());
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::Color("blue".to_string()).to_string(),
        "unknown color mode 'blue' (expected 'auto', 'always' or 'never')"
    );
    assert_eq!(
        ConfigError::Dialect(UnknownDialect("c".to_string())).to_string(),
        "unknown dialect 'c' (expected 'mini' or 'extended')"
    );
}
