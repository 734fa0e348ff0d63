//! Register definitions for the DS1683
//!
//! The DS1683 keeps its counters in little-endian multi-byte registers that are
//! accessed with I2C block transactions. Only the counter and alarm registers
//! are exposed as [`Register`]s; the remaining addresses are listed as plain
//! constants.
//!
//! ## Register Map
//! - **Event counter** (0x08, 2 bytes): number of high pulses seen on EVENT
//! - **Elapsed time** (0x0A, 4 bytes): free-running counter in quarter seconds
//! - **Event counter alarm** (0x10, 2 bytes): alarm threshold for the event counter
//! - **Elapsed time alarm** (0x12, 2 bytes): alarm threshold for the elapsed time

/// Command register
pub const REG_COMMAND: u8 = 0x00;
/// Status register
pub const REG_STATUS: u8 = 0x01;
/// Password entry register
pub const REG_PWE: u8 = 0x02;
/// Event counter (LSB)
pub const REG_EVENT_COUNTER: u8 = 0x08;
/// Elapsed time counter (LSB)
pub const REG_ELAPSED: u8 = 0x0A;
/// Event counter alarm threshold (LSB)
pub const REG_EVENT_COUNTER_ALARM: u8 = 0x10;
/// Elapsed time alarm threshold (LSB)
pub const REG_ELAPSED_ALARM: u8 = 0x12;
/// Configuration register
pub const REG_CONFIG: u8 = 0x16;
/// Start of user EEPROM
pub const REG_EEPROM: u8 = 0x20;

/// Widest register in the catalog, in bytes
pub const MAX_WIDTH: usize = 4;

/// Milliseconds per elapsed-time tick (the counter runs in quarter seconds)
pub const ELAPSED_TIME_SCALE: u32 = 250;

/// Static description of one counter or alarm register
///
/// Descriptors only come from [`Register::descriptor`], so `width` is always
/// between 1 and [`MAX_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterDescriptor {
    pub(crate) address: u8,
    pub(crate) width: u8,
    pub(crate) scale: Option<u32>,
    pub(crate) volatile_tick: bool,
}

impl RegisterDescriptor {
    /// Register address (LSB of the value)
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Number of bytes moved by every transaction on this register
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Sub-unit size of the raw value, if it is stored as fixed point
    pub const fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// The register content can change on its own between two reads
    pub const fn volatile_tick(&self) -> bool {
        self.volatile_tick
    }

    /// Size of the register in bits
    pub const fn size_bits(&self) -> u32 {
        self.width as u32 * 8
    }

    /// Largest raw value the register can hold
    pub const fn raw_max(&self) -> u64 {
        u64::MAX >> (64 - self.size_bits())
    }
}

/// Registers exposed by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Elapsed time in milliseconds (quarter-second resolution)
    ElapsedTime,
    /// Elapsed time alarm threshold
    ElapsedTimeAlarm,
    /// Event counter
    EventCount,
    /// Event counter alarm threshold
    EventCountAlarm,
}

impl Register {
    /// Every register, in attribute order
    pub const ALL: [Self; 4] = [
        Self::ElapsedTime,
        Self::ElapsedTimeAlarm,
        Self::EventCount,
        Self::EventCountAlarm,
    ];

    /// Get the static descriptor of this register
    pub const fn descriptor(self) -> RegisterDescriptor {
        match self {
            Self::ElapsedTime => RegisterDescriptor {
                address: REG_ELAPSED,
                width: 4,
                scale: Some(ELAPSED_TIME_SCALE),
                volatile_tick: true,
            },
            Self::ElapsedTimeAlarm => RegisterDescriptor {
                address: REG_ELAPSED_ALARM,
                width: 2,
                scale: None,
                volatile_tick: false,
            },
            Self::EventCount => RegisterDescriptor {
                address: REG_EVENT_COUNTER,
                width: 2,
                scale: None,
                volatile_tick: false,
            },
            Self::EventCountAlarm => RegisterDescriptor {
                address: REG_EVENT_COUNTER_ALARM,
                width: 2,
                scale: None,
                volatile_tick: false,
            },
        }
    }

    /// Attribute name of this register
    pub const fn name(self) -> &'static str {
        match self {
            Self::ElapsedTime => "elapsed_time",
            Self::ElapsedTimeAlarm => "elapsed_time_alarm",
            Self::EventCount => "event_count",
            Self::EventCountAlarm => "event_count_alarm",
        }
    }

    /// Look up a register by attribute name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reg| reg.name() == name)
    }
}
