use std::fs;
use serial_test::serial;
use log::{info, debug, error};
use crate::core::logger;

#[test]
#[serial]
fn test_logger() {
    logger::setup(log::LevelFilter::Info, None);
    info!("info: testing....");
    error!("error: testing...");
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    logger::teardown();
    assert_eq!(log::max_level(), log::LevelFilter::Off);
}

#[test]
#[serial]
fn test_logger_disable() {
    logger::setup(log::LevelFilter::Info, None);
    logger::revert_console_output();
    info!("info: testing....");
    debug!("debug: testing...");
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_file() {
    let path = std::env::temp_dir().join("messenger-logger-test.log");
    _ = fs::remove_file(&path);
    let file = path.to_str().unwrap().to_string();

    logger::setup(log::LevelFilter::Info, Some(&file));
    logger::revert_console_output();
    info!("written to file");
    debug!("filtered out");
    logger::teardown();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.contains("[INFO] written to file"), true);
    assert_eq!(content.contains("filtered out"), false);
    _ = fs::remove_file(&path);
}
