use std::time::Duration;
use valet::config::LoggingConfig;
use valet::logging::{self, LogContext};

#[test]
fn init_logging_creates_rolling_file_and_is_idempotent() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut config = LoggingConfig::default();
    config.file = tmp_dir
        .path()
        .join("valet.log")
        .to_string_lossy()
        .to_string();
    config.console_output = false;

    logging::init_logging(&config).unwrap();
    // Second call is a no-op
    logging::init_logging(&config).unwrap();

    let logger = logging::get_logger_with_context(
        LogContext::new("test").with_vehicle("AB-123".to_string()),
    );
    logger.info("vehicle entered the garage");
    logger.warn("vehicle already parked");
    // Error level passes even a restrictive RUST_LOG filter
    logger.error("replay aborted");

    // Writes go through a non-blocking worker; give it a moment
    std::thread::sleep(Duration::from_millis(300));

    let mut names: Vec<String> = std::fs::read_dir(tmp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert!(
        names.iter().any(|n| n.starts_with("valet.") && n.ends_with(".log")),
        "no rolling log file in {names:?}"
    );
}
