//! I2C transport for the DS1683
//!
//! The DS1683 answers on the fixed 7-bit address 0x6B; it has no address pins.
//! Its register pointer auto-increments, so a whole counter moves in one block
//! transfer: 4 bytes for the elapsed-time counter, 2 bytes for the event
//! counter and both alarms, always least significant byte first.
//!
//! - read: `S 0x6B+W reg Sr 0x6B+R b0 .. bn P` (one `write_read`)
//! - write: `S 0x6B+W reg b0 .. bn P` (one `write`)
//!
//! Splitting a counter over several transfers would let the part tick between
//! them, so every access goes through exactly one transaction.

use crate::I2C_ADDRESS;

use device_driver::RegisterInterface;

/// Largest payload sent after the register byte in one block write
pub const MAX_BLOCK_LEN: usize = 32;

/// DS1683 register access over an `embedded-hal` I2C bus
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Talk to the DS1683 at its fixed address 0x6B
    ///
    /// # Example
    /// ```ignore
    /// let mut counter = Ds1683Driver::new(I2cInterface::default(i2c));
    ///
    /// // 4-byte block read of 0x0A, re-read until two samples agree
    /// let uptime_ms = counter.elapsed_time()?;
    /// // 2-byte block write of 0x10: [0x10, 0xF4, 0x01]
    /// counter.set_event_count_alarm(500)?;
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS,
        }
    }

    /// Talk to the DS1683 at a remapped 7-bit address
    ///
    /// The part itself always answers on 0x6B; use this behind an address
    /// translator that moves it elsewhere.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit I2C address this interface talks to
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Get mutable access to the I2C peripheral
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Lay out `[register, lsb, .., msb]` for a block write, capped at [`MAX_BLOCK_LEN`]
fn block_write_frame(
    buffer: &mut [u8; MAX_BLOCK_LEN + 1],
    address: u8,
    write_data: &[u8],
) -> usize {
    buffer[0] = address;
    let len = write_data.len().min(MAX_BLOCK_LEN);
    buffer[1..=len].copy_from_slice(&write_data[..len]);
    len
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // the pointer auto-increments over the whole counter
        let _ = size_bits;
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let mut buffer = [0u8; MAX_BLOCK_LEN + 1];
        let len = block_write_frame(&mut buffer, address, write_data);

        self.i2c.write(self.address, &buffer[..=len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        // the pointer auto-increments over the whole counter
        let _ = size_bits;
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let mut buffer = [0u8; MAX_BLOCK_LEN + 1];
        let len = block_write_frame(&mut buffer, address, write_data);

        self.i2c.write(self.address, &buffer[..=len]).await
    }
}
