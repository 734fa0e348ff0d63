//! Test utilities and helper functions

use crate::common::mock_interface::{MockInterface, Operation};
use ds1683::Ds1683Driver;

/// Elapsed time register address
pub const ELAPSED: u8 = 0x0A;
/// Elapsed time alarm register address
pub const ELAPSED_ALARM: u8 = 0x12;
/// Event counter register address
pub const EVENT_COUNT: u8 = 0x08;
/// Event counter alarm register address
pub const EVENT_COUNT_ALARM: u8 = 0x10;

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Ds1683Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Ds1683Driver::new(interface);
    (driver, interface_clone)
}

/// Assert that every logged transaction moved exactly `width` bytes and
/// reported a matching size
pub fn assert_transaction_width(operations: &[Operation], width: usize) {
    for op in operations {
        let (size_bits, len) = match op {
            Operation::ReadRegister {
                size_bits, data, ..
            } => (*size_bits, data.len()),
            Operation::WriteRegister {
                size_bits, data, ..
            } => (*size_bits, data.len()),
        };
        assert_eq!(len, width, "Transaction {:?} has the wrong length", op);
        assert_eq!(
            size_bits as usize,
            width * 8,
            "Transaction {:?} reports the wrong size",
            op
        );
    }
}
