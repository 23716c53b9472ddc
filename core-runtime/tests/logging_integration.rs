//! Integration tests for the logging system

use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use tracing::Level;

#[test]
fn test_logging_initialization() {
    // We can only install a global subscriber once per process, so the
    // builder is exercised first and a second init is expected to fail.
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(Level::DEBUG)
        .with_spans(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, Level::DEBUG);
    assert!(!config.enable_spans);
    assert!(config.display_thread_info);

    init_logging(config.clone()).expect("first init should succeed");
    assert!(init_logging(config).is_err());
}

#[test]
fn test_invalid_filter_is_rejected() {
    let config = LoggingConfig::default().with_filter("core_player=not_a_level");
    assert!(init_logging(config).is_err());
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_filter_configuration() {
    let config = LoggingConfig::default().with_filter("core_player=debug,bridge_traits=trace");

    assert_eq!(
        config.filter,
        Some("core_player=debug,bridge_traits=trace".to_string())
    );
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(Level::WARN)
        .with_spans(false)
        .with_target(false);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, Level::WARN);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
}
