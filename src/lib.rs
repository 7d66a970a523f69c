//! UART Transmit Engine
//!
//! This library provides a bit-accurate, clock-synchronous UART
//! transmitter core: a parallel data word goes in, a framed asynchronous
//! serial bit stream comes out, one line level per clock tick. The caller
//! owns the clock; the engine never blocks, sleeps or spawns anything.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DRIVER / HARNESS (external)               │
//! │  tick source @ clock_hz  │  start pulse + data  │  busy poll │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      ENGINE LAYER                            │
//! │  UartTx state machine  │  FrameTiming  │  LineProbe          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   CONFIGURATION LAYER                        │
//! │  TxConfig  │  BaudRate  │  validation (ConfigError)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire convention is the classic asynchronous serial frame: the line
//! idles high; each frame is one start bit (low), `data_bits` data bits
//! least-significant-bit first, and `stop_bits` stop bits (high), every
//! bit lasting `clock_hz / baud` ticks.
//!
//! # Design Principles
//!
//! - **Caller-supplied time**: no internal clock, one unit of work per
//!   `tick` call; fully deterministic and host-testable
//! - **Type-driven design**: validated newtypes and closed enums enforce
//!   invariants at construction time
//! - **No unsafe**: pure logic, no hardware dependencies
//! - **Explicit error handling**: invalid configurations fail at
//!   construction with a `Result`, never at run time

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Transmitter configuration and derived bit timing
pub mod config;

/// Shared types used across the engine
pub mod types;

/// Serial transmit engine
///
/// The tick-driven transmitter, frame arithmetic and line capture.
pub mod uart;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types.

    pub use crate::config::{ConfigError, TxConfig};
    pub use crate::types::{BaudRate, LineLevel, TxInput, TxOutput};
    pub use crate::uart::frame::{FrameBits, FrameTiming};
    pub use crate::uart::probe::LineProbe;
    pub use crate::uart::tx::UartTx;
}
