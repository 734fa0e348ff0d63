//! High-level driver API for the DS1683
//!
//! [`Ds1683Driver`] owns a bus interface between [`Ds1683Driver::new`] and
//! [`Ds1683Driver::release`] and forwards typed register accesses to the
//! [`access`](crate::access) engine. Values are in application units: elapsed
//! time in milliseconds, everything else as raw counts.

use crate::Error;
use crate::access;
use crate::registers::Register;

use device_driver::RegisterInterface;

/// Main driver for the DS1683
///
/// Every method takes `&mut self`, so one driver never runs two transactions at
/// once. Share a driver between tasks by wrapping it in a mutex that is held
/// for the whole call.
pub struct Ds1683Driver<I> {
    interface: I,
}

impl<I> Ds1683Driver<I> {
    /// Create a new DS1683 driver instance
    ///
    /// No bus traffic is generated. The DS1683 has no identification register,
    /// so the first register access is the first sign of a missing device.
    pub const fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Get mutable access to the underlying interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I> Ds1683Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Read a register in application units
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or if the
    /// elapsed-time counter never settles (see [`access::read`]).
    pub fn read(&mut self, register: Register) -> Result<u64, Error<I::Error>> {
        access::read(&mut self.interface, register.descriptor())
    }

    /// Write a register in application units
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the value does not fit the register,
    /// or an error if communication with the device fails.
    pub fn write(&mut self, register: Register, value: u64) -> Result<(), Error<I::Error>> {
        access::write(&mut self.interface, register.descriptor(), value)
    }

    /// Parse operator text and write it to a register
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is not a non-negative
    /// integer, otherwise as [`write`](Self::write).
    pub fn write_str(&mut self, register: Register, text: &str) -> Result<(), Error<I::Error>> {
        access::write_str(&mut self.interface, register.descriptor(), text)
    }

    /// Read the elapsed time in milliseconds (quarter-second resolution)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the counter
    /// never settles.
    pub fn elapsed_time(&mut self) -> Result<u64, Error<I::Error>> {
        self.read(Register::ElapsedTime)
    }

    /// Set the elapsed time in milliseconds
    ///
    /// Precision below a quarter second is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub fn set_elapsed_time(&mut self, millis: u64) -> Result<(), Error<I::Error>> {
        self.write(Register::ElapsedTime, millis)
    }

    /// Read the elapsed time alarm threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn elapsed_time_alarm(&mut self) -> Result<u64, Error<I::Error>> {
        self.read(Register::ElapsedTimeAlarm)
    }

    /// Set the elapsed time alarm threshold
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub fn set_elapsed_time_alarm(&mut self, value: u64) -> Result<(), Error<I::Error>> {
        self.write(Register::ElapsedTimeAlarm, value)
    }

    /// Read the event counter
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn event_count(&mut self) -> Result<u64, Error<I::Error>> {
        self.read(Register::EventCount)
    }

    /// Set the event counter
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub fn set_event_count(&mut self, value: u64) -> Result<(), Error<I::Error>> {
        self.write(Register::EventCount, value)
    }

    /// Read the event counter alarm threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn event_count_alarm(&mut self) -> Result<u64, Error<I::Error>> {
        self.read(Register::EventCountAlarm)
    }

    /// Set the event counter alarm threshold
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub fn set_event_count_alarm(&mut self, value: u64) -> Result<(), Error<I::Error>> {
        self.write(Register::EventCountAlarm, value)
    }
}

#[cfg(feature = "async")]
impl<I> Ds1683Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Read a register in application units (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails, or if the
    /// elapsed-time counter never settles.
    pub async fn read_async(&mut self, register: Register) -> Result<u64, Error<I::Error>> {
        access::read_async(&mut self.interface, register.descriptor()).await
    }

    /// Write a register in application units (async)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the value does not fit the register,
    /// or an error if communication with the device fails.
    pub async fn write_async(
        &mut self,
        register: Register,
        value: u64,
    ) -> Result<(), Error<I::Error>> {
        access::write_async(&mut self.interface, register.descriptor(), value).await
    }

    /// Parse operator text and write it to a register (async)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is not a non-negative
    /// integer, otherwise as [`write_async`](Self::write_async).
    pub async fn write_str_async(
        &mut self,
        register: Register,
        text: &str,
    ) -> Result<(), Error<I::Error>> {
        access::write_str_async(&mut self.interface, register.descriptor(), text).await
    }

    /// Read the elapsed time in milliseconds (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails or the counter
    /// never settles.
    pub async fn elapsed_time_async(&mut self) -> Result<u64, Error<I::Error>> {
        self.read_async(Register::ElapsedTime).await
    }

    /// Set the elapsed time in milliseconds (async)
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub async fn set_elapsed_time_async(&mut self, millis: u64) -> Result<(), Error<I::Error>> {
        self.write_async(Register::ElapsedTime, millis).await
    }

    /// Read the elapsed time alarm threshold (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn elapsed_time_alarm_async(&mut self) -> Result<u64, Error<I::Error>> {
        self.read_async(Register::ElapsedTimeAlarm).await
    }

    /// Set the elapsed time alarm threshold (async)
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub async fn set_elapsed_time_alarm_async(
        &mut self,
        value: u64,
    ) -> Result<(), Error<I::Error>> {
        self.write_async(Register::ElapsedTimeAlarm, value).await
    }

    /// Read the event counter (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn event_count_async(&mut self) -> Result<u64, Error<I::Error>> {
        self.read_async(Register::EventCount).await
    }

    /// Set the event counter (async)
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub async fn set_event_count_async(&mut self, value: u64) -> Result<(), Error<I::Error>> {
        self.write_async(Register::EventCount, value).await
    }

    /// Read the event counter alarm threshold (async)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn event_count_alarm_async(&mut self) -> Result<u64, Error<I::Error>> {
        self.read_async(Register::EventCountAlarm).await
    }

    /// Set the event counter alarm threshold (async)
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of range or communication fails.
    pub async fn set_event_count_alarm_async(
        &mut self,
        value: u64,
    ) -> Result<(), Error<I::Error>> {
        self.write_async(Register::EventCountAlarm, value).await
    }
}
