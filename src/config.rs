//! Transmitter configuration and derived bit timing
//!
//! A [`TxConfig`] pairs the tick-source clock with the requested frame
//! shape. All validation funnels through [`TxConfig::timing`]: an
//! unachievable configuration fails there, never inside the running
//! state machine.

use crate::types::BaudRate;
use crate::uart::frame::FrameTiming;
use core::fmt;
#[cfg(feature = "embedded")]
use micromath::F32Ext;

/// Default reference clock for the tick source (16 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 16_000_000;

/// Default baud rate
pub const DEFAULT_BAUD: BaudRate = BaudRate::B115200;

/// Default number of data bits per frame
pub const DEFAULT_DATA_BITS: u8 = 8;

/// Default number of stop bits per frame
pub const DEFAULT_STOP_BITS: u8 = 1;

/// Smallest supported data width
pub const MIN_DATA_BITS: u8 = 1;

/// Largest supported data width (the word storage is 16 bits wide)
pub const MAX_DATA_BITS: u8 = 16;

/// Reasons a configuration cannot drive a transmitter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The clock frequency is zero
    ZeroClock,
    /// The baud rate exceeds the clock; a bit period would span no ticks
    BaudTooFast,
    /// The data width is outside 1..=16
    InvalidDataBits,
    /// A frame needs at least one stop bit
    InvalidStopBits,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroClock => write!(f, "clock frequency is zero"),
            Self::BaudTooFast => write!(f, "baud rate exceeds clock frequency"),
            Self::InvalidDataBits => {
                write!(f, "data width outside {MIN_DATA_BITS}..={MAX_DATA_BITS}")
            }
            Self::InvalidStopBits => write!(f, "at least one stop bit required"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ZeroClock => defmt::write!(f, "zero clock"),
            Self::BaudTooFast => defmt::write!(f, "baud too fast for clock"),
            Self::InvalidDataBits => defmt::write!(f, "invalid data bits"),
            Self::InvalidStopBits => defmt::write!(f, "invalid stop bits"),
        }
    }
}

/// Transmitter configuration, fixed for the lifetime of an engine
///
/// The bit period is `clock_hz / baud` ticks, truncated toward zero.
/// The truncation is deliberate and uncorrected; use
/// [`baud_error_percent`](Self::baud_error_percent) to judge whether a
/// clock/baud pairing is acceptable for the link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxConfig {
    /// Tick-source frequency in Hz
    pub clock_hz: u32,
    /// Requested line rate
    pub baud: BaudRate,
    /// Data bits per frame (1..=16)
    pub data_bits: u8,
    /// Stop bits per frame (>= 1)
    pub stop_bits: u8,
}

impl TxConfig {
    /// Create a configuration with the common 8-data-bit, 1-stop-bit frame
    #[must_use]
    pub const fn new(clock_hz: u32, baud: BaudRate) -> Self {
        Self {
            clock_hz,
            baud,
            data_bits: DEFAULT_DATA_BITS,
            stop_bits: DEFAULT_STOP_BITS,
        }
    }

    /// Set the number of data bits per frame
    #[must_use]
    pub const fn with_data_bits(mut self, data_bits: u8) -> Self {
        self.data_bits = data_bits;
        self
    }

    /// Set the number of stop bits per frame
    #[must_use]
    pub const fn with_stop_bits(mut self, stop_bits: u8) -> Self {
        self.stop_bits = stop_bits;
        self
    }

    /// Validate and derive the per-frame tick counts
    ///
    /// This is the single validation point: a `FrameTiming` only exists
    /// for configurations the engine can actually run.
    pub fn timing(&self) -> Result<FrameTiming, ConfigError> {
        if self.clock_hz == 0 {
            return Err(ConfigError::ZeroClock);
        }
        if self.data_bits < MIN_DATA_BITS || self.data_bits > MAX_DATA_BITS {
            return Err(ConfigError::InvalidDataBits);
        }
        if self.stop_bits == 0 {
            return Err(ConfigError::InvalidStopBits);
        }
        let ticks_per_bit = self.clock_hz / self.baud.as_hz();
        if ticks_per_bit == 0 {
            return Err(ConfigError::BaudTooFast);
        }
        Ok(FrameTiming::new(
            ticks_per_bit,
            self.data_bits,
            self.stop_bits,
        ))
    }

    /// Clock ticks per bit period (`clock_hz / baud`, truncated)
    pub fn ticks_per_bit(&self) -> Result<u32, ConfigError> {
        self.timing().map(FrameTiming::ticks_per_bit)
    }

    /// The line rate actually produced after truncation
    ///
    /// Equal to or faster than the requested rate.
    pub fn actual_baud(&self) -> Result<u32, ConfigError> {
        let ticks = self.ticks_per_bit()?;
        Ok(self.clock_hz / ticks)
    }

    /// Relative error between requested and produced rate, in percent
    pub fn baud_error_percent(&self) -> Result<f32, ConfigError> {
        let ticks = self.ticks_per_bit()?;
        let actual = self.clock_hz as f32 / ticks as f32;
        let requested = self.baud.as_hz() as f32;
        Ok(((actual - requested) / requested * 100.0).abs())
    }
}

impl Default for TxConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_HZ, DEFAULT_BAUD)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TxConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{} Hz / {} ({}N{})",
            self.clock_hz,
            self.baud,
            self.data_bits,
            self.stop_bits
        );
    }
}
