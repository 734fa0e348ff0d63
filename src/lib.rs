#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod access;
pub mod attributes;
pub mod device;
pub mod interface;
pub mod registers;

// Re-export main types
pub use access::TICK_RETRIES;
pub use attributes::{ATTRIBUTES, Attribute, ShowError};
pub use device::Ds1683Driver;
pub use interface::I2cInterface;
pub use registers::{Register, RegisterDescriptor};

/// DS1683 7-bit I2C address
///
/// The DS1683 has no address pins; every part answers on 0x6B.
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS: u8 = 0x6B;

/// Driver name used when matching against a bus device table
pub const DRIVER_NAME: &str = "ds1683";

/// Device-tree compatible string for the DS1683
pub const OF_COMPATIBLE: &str = "dallas,ds1683";

/// Driver errors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// The elapsed-time counter moved by more than one tick between every
    /// pair of consecutive reads within the retry budget
    UnstableCounter,
    /// Input text is not a non-negative integer
    InvalidInput,
    /// Value does not fit in the register after scaling
    OutOfRange,
}

impl<E> Error<E> {
    /// Whether the error is an I/O-class fault reported by (or blamed on) the
    /// device, as opposed to bad caller input
    pub const fn is_bus_fault(&self) -> bool {
        matches!(self, Self::Bus(_) | Self::UnstableCounter)
    }
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
