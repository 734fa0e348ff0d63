//! Named register attributes
//!
//! Maps the four attribute names a host exposes to operators onto registers,
//! and converts between register values and attribute text. Reading an
//! attribute yields the value as unsigned decimal followed by a newline;
//! writing accepts the syntax of [`parse_value`](crate::access::parse_value).
//!
//! Attaching the attributes to an actual file tree is up to the host.

use core::fmt::Write;

use crate::Error;
use crate::device::Ds1683Driver;
use crate::registers::Register;

use device_driver::RegisterInterface;

/// Permission bits of every DS1683 attribute: world readable, owner writable
pub const ATTRIBUTE_MODE: u16 = 0o644;

/// A named, permissioned register endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attribute {
    /// Attribute name
    pub name: &'static str,
    /// Register behind the attribute
    pub register: Register,
    /// Unix permission bits
    pub mode: u16,
}

const fn attribute(register: Register) -> Attribute {
    Attribute {
        name: register.name(),
        register,
        mode: ATTRIBUTE_MODE,
    }
}

/// The DS1683 attribute group
pub static ATTRIBUTES: [Attribute; 4] = [
    attribute(Register::ElapsedTime),
    attribute(Register::ElapsedTimeAlarm),
    attribute(Register::EventCount),
    attribute(Register::EventCountAlarm),
];

/// Error returned by [`Attribute::show`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowError<E> {
    /// Reading the register failed
    Device(Error<E>),
    /// The output sink rejected the text
    Format,
}

impl<E> From<Error<E>> for ShowError<E> {
    fn from(error: Error<E>) -> Self {
        Self::Device(error)
    }
}

impl Attribute {
    /// Find an attribute by name
    pub fn find(name: &str) -> Option<&'static Self> {
        ATTRIBUTES.iter().find(|attr| attr.name == name)
    }

    /// Whether the owner may write this attribute
    pub const fn is_writable(&self) -> bool {
        self.mode & 0o200 != 0
    }

    /// Read the register and render it as `"<value>\n"` into `out`
    ///
    /// Nothing is written to `out` if the register read fails.
    ///
    /// # Errors
    ///
    /// Returns [`ShowError::Device`] if the register read fails and
    /// [`ShowError::Format`] if `out` runs out of space.
    pub fn show<I, W>(
        &self,
        driver: &mut Ds1683Driver<I>,
        out: &mut W,
    ) -> Result<(), ShowError<I::Error>>
    where
        I: RegisterInterface<AddressType = u8>,
        W: Write,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("show() called on {}", self.name);

        let value = driver.read(self.register)?;
        writeln!(out, "{}", value).map_err(|_| ShowError::Format)
    }

    /// Parse `text` and write it to the register
    ///
    /// Returns the number of bytes consumed, which is always the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for malformed text,
    /// [`Error::OutOfRange`] for values that do not fit, or a bus error.
    pub fn store<I>(&self, driver: &mut Ds1683Driver<I>, text: &str) -> Result<usize, Error<I::Error>>
    where
        I: RegisterInterface<AddressType = u8>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("store() called on {}", self.name);

        driver.write_str(self.register, text)?;
        Ok(text.len())
    }
}
