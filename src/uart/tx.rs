//! UART Transmitter
//!
//! Converts a parallel data word into a framed serial bit stream, one
//! line level per clock tick. The caller drives [`UartTx::tick`] once
//! per clock period; the engine has no internal notion of time.
//!
//! # Tick contract
//!
//! On the tick where `start` is accepted the output is already the start
//! bit with `busy` asserted. A frame then occupies exactly
//! `ticks_per_bit * (1 + data_bits + stop_bits)` ticks, after which the
//! line returns high and `busy` drops. `start` while busy is silently
//! ignored; the in-flight frame is never disturbed. `reset` overrides
//! everything on its tick and returns the engine to idle.

use crate::config::{ConfigError, TxConfig};
use crate::types::{LineLevel, TxInput, TxOutput};
use crate::uart::frame::FrameTiming;

/// Transmitter phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum TxPhase {
    /// Line high, waiting for a start request
    #[default]
    Idle,
    /// Driving the start bit
    Start,
    /// Driving the latched data bits, LSB first
    Data,
    /// Driving the stop bit(s)
    Stop,
}

/// UART transmit engine
///
/// A self-contained value: instances share nothing, so multi-channel use
/// is as many engines as lines. Exclusive ownership is the concurrency
/// story; callers wanting cross-thread access must serialize externally.
#[derive(Clone, Debug)]
pub struct UartTx {
    /// Validated frame timing
    timing: FrameTiming,
    /// Configuration the engine was built from
    config: TxConfig,
    /// Current phase
    phase: TxPhase,
    /// Word latched when the current frame started
    latched: u16,
    /// Data bit currently on the line (0 = LSB)
    bit_index: u8,
    /// Tick position within the current bit period
    bit_tick: u32,
    /// Stop bits already completed
    stop_index: u8,
}

impl UartTx {
    /// Create an engine for `config`
    ///
    /// Fails if the configuration cannot produce a valid frame timing
    /// (zero clock, unachievable baud rate, bad frame shape).
    pub fn new(config: TxConfig) -> Result<Self, ConfigError> {
        let timing = config.timing()?;
        Ok(Self {
            timing,
            config,
            phase: TxPhase::Idle,
            latched: 0,
            bit_index: 0,
            bit_tick: 0,
            stop_index: 0,
        })
    }

    /// Get the validated frame timing
    #[must_use]
    pub const fn timing(&self) -> FrameTiming {
        self.timing
    }

    /// Get the configuration the engine was built from
    #[must_use]
    pub const fn config(&self) -> TxConfig {
        self.config
    }

    /// Check if a frame is in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        !matches!(self.phase, TxPhase::Idle)
    }

    /// Check if the engine is idle and ready to accept a start request
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, TxPhase::Idle)
    }

    /// Level currently driven on the line
    #[must_use]
    pub const fn line(&self) -> LineLevel {
        match self.phase {
            TxPhase::Idle | TxPhase::Stop => LineLevel::High,
            TxPhase::Start => LineLevel::Low,
            TxPhase::Data => self.timing.data_bit(self.latched, self.bit_index),
        }
    }

    /// Advance the engine by exactly one clock period
    ///
    /// Must be called once per clock period to preserve timing. Returns
    /// the line level and busy indicator for that period.
    ///
    /// `input.reset` takes precedence over `input.start` and over any
    /// frame in flight. `input.data` is latched (masked to the data
    /// width) only on the tick where `start` is accepted.
    pub fn tick(&mut self, input: TxInput) -> TxOutput {
        if input.reset {
            self.clear();
            return TxOutput::idle();
        }

        let output = match self.phase {
            TxPhase::Idle => {
                if input.start {
                    self.latched = input.data & self.timing.word_mask();
                    self.phase = TxPhase::Start;
                    TxOutput {
                        line: LineLevel::Low,
                        busy: true,
                    }
                } else {
                    return TxOutput::idle();
                }
            }
            TxPhase::Start => TxOutput {
                line: LineLevel::Low,
                busy: true,
            },
            TxPhase::Data => TxOutput {
                line: self.timing.data_bit(self.latched, self.bit_index),
                busy: true,
            },
            TxPhase::Stop => TxOutput {
                line: LineLevel::High,
                busy: true,
            },
        };

        self.advance();
        output
    }

    /// Force the engine back to idle, discarding any frame in flight
    ///
    /// Equivalent to a tick with `reset` asserted, without consuming a
    /// clock period.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Count this tick against the current bit period and move between
    /// phases at period boundaries
    fn advance(&mut self) {
        if self.bit_tick + 1 < self.timing.ticks_per_bit() {
            self.bit_tick += 1;
            return;
        }
        self.bit_tick = 0;

        match self.phase {
            TxPhase::Idle => {}
            TxPhase::Start => self.phase = TxPhase::Data,
            TxPhase::Data => {
                if self.bit_index + 1 < self.timing.data_bits() {
                    self.bit_index += 1;
                } else {
                    self.bit_index = 0;
                    self.phase = TxPhase::Stop;
                }
            }
            TxPhase::Stop => {
                if self.stop_index + 1 < self.timing.stop_bits() {
                    self.stop_index += 1;
                } else {
                    self.stop_index = 0;
                    self.phase = TxPhase::Idle;
                }
            }
        }
    }

    fn clear(&mut self) {
        self.phase = TxPhase::Idle;
        self.latched = 0;
        self.bit_index = 0;
        self.bit_tick = 0;
        self.stop_index = 0;
    }
}
