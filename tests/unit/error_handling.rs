//! Unit tests for error handling and recovery

use crate::common::create_mock_driver;
use crate::common::MockError;
use crate::common::test_utils::EVENT_COUNT;
use ds1683::{Error, Register};

#[test]
fn test_read_failure_basic() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.event_count();
    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
}

#[test]
fn test_first_elapsed_read_failure_is_not_retried() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_elapsed_sequence(&[1000, 1000]);
    interface.fail_next_read();

    let result = driver.elapsed_time();
    assert!(matches!(result, Err(Error::Bus(_))));
    assert_eq!(interface.read_count(), 0);
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_u16(EVENT_COUNT, 300);
    interface.fail_next_read();

    assert!(driver.event_count().is_err(), "First read should fail");
    assert_eq!(
        driver.event_count().unwrap(),
        300,
        "Subsequent read should succeed after single failure"
    );
}

#[test]
fn test_write_failure_is_not_retried() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_u16(EVENT_COUNT, 5);
    interface.fail_next_write();

    let result = driver.set_event_count(10);
    assert_eq!(result, Err(Error::Bus(MockError::Communication)));
    assert_eq!(interface.write_count(), 0);
    assert_eq!(interface.get_u16(EVENT_COUNT), 5);

    // The failure was one-shot
    driver.set_event_count(10).unwrap();
    assert_eq!(interface.get_u16(EVENT_COUNT), 10);
}

#[test]
fn test_fault_classification() {
    assert!(Error::Bus(MockError::Communication).is_bus_fault());
    assert!(Error::<MockError>::UnstableCounter.is_bus_fault());
    assert!(!Error::<MockError>::InvalidInput.is_bus_fault());
    assert!(!Error::<MockError>::OutOfRange.is_bus_fault());
}

#[test]
fn test_failed_read_returns_no_value() {
    let (mut driver, interface) = create_mock_driver();

    for reg in Register::ALL {
        interface.fail_next_read();
        assert!(driver.read(reg).is_err(), "{:?} should surface the fault", reg);
    }
}
