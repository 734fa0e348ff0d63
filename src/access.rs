//! Register access engine
//!
//! Reads and writes a [`RegisterDescriptor`] over any block transport that
//! implements the `device-driver` register interface. Values cross this module
//! in application units: reads return the raw little-endian value multiplied by
//! the descriptor's scale, writes divide by it before encoding.
//!
//! ## Torn reads
//!
//! The DS1683 latches the bytes of its elapsed-time counter one at a time, so a
//! tick landing in the middle of a block read can produce a value that mixes
//! pre-tick and post-tick bytes. Reads of a `volatile_tick` register are
//! therefore repeated until two consecutive values differ by at most one tick,
//! for at most [`TICK_RETRIES`] additional transactions. The re-reads are issued
//! back to back without any delay.
//!
//! The bus handle is only borrowed for the duration of one call. Callers that
//! share a bus between several contexts must serialise whole calls themselves.

use crate::Error;
use crate::registers::{MAX_WIDTH, RegisterDescriptor};

use device_driver::RegisterInterface;

/// Additional reads allowed for a volatile register before giving up
pub const TICK_RETRIES: u8 = 5;

/// Read a register and return its value in application units
///
/// Non-volatile registers are read exactly once. Volatile registers are re-read
/// until two consecutive values agree within one tick.
///
/// # Errors
///
/// - [`Error::Bus`] if any transaction fails
/// - [`Error::UnstableCounter`] if no consistent pair was seen within
///   [`TICK_RETRIES`] re-reads
pub fn read<I>(bus: &mut I, desc: RegisterDescriptor) -> Result<u64, Error<I::Error>>
where
    I: RegisterInterface<AddressType = u8> + ?Sized,
{
    let mut buf = [0u8; MAX_WIDTH];
    let data = &mut buf[..usize::from(desc.width)];

    bus.read_register(desc.address, desc.size_bits(), data)?;
    let mut raw = decode_le(data);

    if !desc.volatile_tick {
        return Ok(scale_up(&desc, raw));
    }

    for attempt in 0..TICK_RETRIES {
        bus.read_register(desc.address, desc.size_bits(), data)?;
        let next = decode_le(data);

        if tick_consistent(raw, next) {
            return Ok(scale_up(&desc, next));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Torn read on 0x{:02X}: {} -> {} (attempt {})",
            desc.address,
            raw,
            next,
            attempt + 1
        );
        #[cfg(not(feature = "defmt"))]
        let _ = attempt;

        raw = next;
    }

    #[cfg(feature = "defmt")]
    defmt::warn!(
        "Counter at 0x{:02X} did not settle after {} re-reads",
        desc.address,
        TICK_RETRIES
    );

    Err(Error::UnstableCounter)
}

/// Write a value in application units to a register
///
/// The value is divided by the register's scale (remainder discarded) and
/// written as `width` little-endian bytes in a single transaction.
///
/// # Errors
///
/// - [`Error::OutOfRange`] if the scaled value does not fit the register; no
///   transaction is issued
/// - [`Error::Bus`] if the transaction fails
pub fn write<I>(bus: &mut I, desc: RegisterDescriptor, value: u64) -> Result<(), Error<I::Error>>
where
    I: RegisterInterface<AddressType = u8> + ?Sized,
{
    let raw = scale_down(&desc, value).ok_or(Error::OutOfRange)?;

    let mut buf = [0u8; MAX_WIDTH];
    let data = encode_le(raw, &mut buf, desc.width);

    bus.write_register(desc.address, desc.size_bits(), data)
        .map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Register write failed; reg=0x{:02X}, size={}",
                desc.address,
                desc.width
            );
            Error::Bus(e)
        })
}

/// Parse caller text and write it to a register
///
/// See [`parse_value`] for the accepted syntax.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if the text is not a non-negative integer; no
///   transaction is issued
/// - otherwise as [`write`]
pub fn write_str<I>(bus: &mut I, desc: RegisterDescriptor, text: &str) -> Result<(), Error<I::Error>>
where
    I: RegisterInterface<AddressType = u8> + ?Sized,
{
    let Some(value) = parse_value(text) else {
        #[cfg(feature = "defmt")]
        defmt::debug!("Input string not a number");
        return Err(Error::InvalidInput);
    };

    write(bus, desc, value)
}

/// Async version of [`read`]
#[cfg(feature = "async")]
pub async fn read_async<I>(bus: &mut I, desc: RegisterDescriptor) -> Result<u64, Error<I::Error>>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    let mut buf = [0u8; MAX_WIDTH];
    let data = &mut buf[..usize::from(desc.width)];

    bus.read_register(desc.address, desc.size_bits(), data)
        .await?;
    let mut raw = decode_le(data);

    if !desc.volatile_tick {
        return Ok(scale_up(&desc, raw));
    }

    for attempt in 0..TICK_RETRIES {
        bus.read_register(desc.address, desc.size_bits(), data)
            .await?;
        let next = decode_le(data);

        if tick_consistent(raw, next) {
            return Ok(scale_up(&desc, next));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Torn read on 0x{:02X}: {} -> {} (attempt {})",
            desc.address,
            raw,
            next,
            attempt + 1
        );
        #[cfg(not(feature = "defmt"))]
        let _ = attempt;

        raw = next;
    }

    #[cfg(feature = "defmt")]
    defmt::warn!(
        "Counter at 0x{:02X} did not settle after {} re-reads",
        desc.address,
        TICK_RETRIES
    );

    Err(Error::UnstableCounter)
}

/// Async version of [`write`]
#[cfg(feature = "async")]
pub async fn write_async<I>(
    bus: &mut I,
    desc: RegisterDescriptor,
    value: u64,
) -> Result<(), Error<I::Error>>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    let raw = scale_down(&desc, value).ok_or(Error::OutOfRange)?;

    let mut buf = [0u8; MAX_WIDTH];
    let data = encode_le(raw, &mut buf, desc.width);

    bus.write_register(desc.address, desc.size_bits(), data)
        .await
        .map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "Register write failed; reg=0x{:02X}, size={}",
                desc.address,
                desc.width
            );
            Error::Bus(e)
        })
}

/// Async version of [`write_str`]
#[cfg(feature = "async")]
pub async fn write_str_async<I>(
    bus: &mut I,
    desc: RegisterDescriptor,
    text: &str,
) -> Result<(), Error<I::Error>>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    let Some(value) = parse_value(text) else {
        #[cfg(feature = "defmt")]
        defmt::debug!("Input string not a number");
        return Err(Error::InvalidInput);
    };

    write_async(bus, desc, value).await
}

/// Parse an unsigned integer written by an operator
///
/// Accepts an optional leading `+`, a `0x`/`0X` prefix for hexadecimal, a
/// leading `0` for octal and decimal otherwise. A single trailing newline is
/// ignored. Returns `None` for anything else, including negative numbers and
/// values above `u64::MAX`.
pub fn parse_value(text: &str) -> Option<u64> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_prefix('+').unwrap_or(text);

    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    // from_str_radix would accept a second sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    u64::from_str_radix(digits, radix).ok()
}

/// Two consecutive reads are consistent if the counter stood still or advanced
/// by exactly one tick. A rollover to zero is not a tick and gets re-read.
fn tick_consistent(previous: u64, next: u64) -> bool {
    // raw values are at most 32 bits wide, so this cannot overflow
    next == previous || next == previous + 1
}

fn scale_up(desc: &RegisterDescriptor, raw: u64) -> u64 {
    match desc.scale {
        // raw is at most 32 bits wide, so this cannot overflow
        Some(scale) => raw * u64::from(scale),
        None => raw,
    }
}

fn scale_down(desc: &RegisterDescriptor, value: u64) -> Option<u64> {
    let raw = match desc.scale {
        Some(scale) => value / u64::from(scale),
        None => value,
    };
    (raw <= desc.raw_max()).then_some(raw)
}

fn decode_le(data: &[u8]) -> u64 {
    data.iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

fn encode_le(raw: u64, buf: &mut [u8; MAX_WIDTH], width: u8) -> &[u8] {
    let width = usize::from(width);
    buf[..width].copy_from_slice(&raw.to_le_bytes()[..width]);
    &buf[..width]
}
