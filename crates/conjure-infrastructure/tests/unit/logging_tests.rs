//! Logging tests

use conjure_infrastructure::config::LoggingConfig;
use conjure_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("loud").is_err());
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        json_format: false,
    };
    assert!(init_logging(config).is_err());
}

#[test]
fn test_init_logging_installs_once() {
    // Whichever call installs the global subscriber, a second one must fail
    let _ = init_logging(LoggingConfig::default());
    assert!(init_logging(LoggingConfig::default()).is_err());
}
