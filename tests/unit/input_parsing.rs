//! Unit tests for operator text input

use crate::common::create_mock_driver;
use crate::common::test_utils::{ELAPSED, EVENT_COUNT, EVENT_COUNT_ALARM};
use ds1683::{Error, Register};

#[test]
fn test_malformed_input_rejected_without_traffic() {
    let (mut driver, interface) = create_mock_driver();

    for text in ["", "abc", "-1", "-0", "12x", "1.5", " 7", "0x", "++1"] {
        for reg in Register::ALL {
            let result = driver.write_str(reg, text);
            assert_eq!(
                result,
                Err(Error::InvalidInput),
                "{:?} should be rejected for {:?}",
                text,
                reg
            );
        }
    }

    assert!(
        interface.operations().is_empty(),
        "Malformed input must not reach the bus"
    );
}

#[test]
fn test_trailing_newline_accepted() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_str(Register::EventCount, "42\n").unwrap();

    assert_eq!(interface.get_u16(EVENT_COUNT), 42);
}

#[test]
fn test_hex_and_octal_input() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_str(Register::EventCount, "0xBEEF").unwrap();
    assert_eq!(interface.get_u16(EVENT_COUNT), 0xBEEF);

    driver.write_str(Register::EventCountAlarm, "0777").unwrap();
    assert_eq!(interface.get_u16(EVENT_COUNT_ALARM), 0o777);
}

#[test]
fn test_text_is_scaled_like_numbers() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_str(Register::ElapsedTime, "1000999").unwrap();

    assert_eq!(interface.get_u32(ELAPSED), 4003);
}

#[test]
fn test_value_above_register_range_rejected() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_u16(EVENT_COUNT, 7);

    assert_eq!(
        driver.write_str(Register::EventCount, "99999"),
        Err(Error::OutOfRange)
    );
    assert_eq!(interface.write_count(), 0);
    assert_eq!(interface.get_u16(EVENT_COUNT), 7, "Register must be untouched");

    // Boundary value still fits
    driver.write_str(Register::EventCount, "65535").unwrap();
    assert_eq!(interface.get_u16(EVENT_COUNT), 65535);
}

#[test]
fn test_value_above_u64_rejected() {
    let (mut driver, interface) = create_mock_driver();

    assert_eq!(
        driver.write_str(Register::ElapsedTime, "18446744073709551616"),
        Err(Error::InvalidInput)
    );
    assert_eq!(interface.write_count(), 0);
}
