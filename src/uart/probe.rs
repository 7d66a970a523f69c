//! Line capture
//!
//! A bounded recorder for transmitter output, one sample per tick.
//! Host tests use it to check framing against the reference sequence;
//! on target it stands in for a logic analyzer when one is not at hand.

use crate::types::{LineLevel, TxOutput};
use heapless::Vec;

/// One recorded tick of transmitter output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Line level during the tick
    pub line: LineLevel,
    /// Busy indicator during the tick
    pub busy: bool,
}

/// A line level change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Tick index of the first sample at the new level
    pub tick: usize,
    /// Level after the change
    pub level: LineLevel,
}

/// Bounded per-tick recorder for transmitter outputs
///
/// Capacity `N` is fixed at compile time. Recording past capacity drops
/// the sample and counts it; the probe never grows and never panics.
#[derive(Clone, Debug, Default)]
pub struct LineProbe<const N: usize> {
    samples: Vec<Sample, N>,
    dropped: usize,
}

impl<const N: usize> LineProbe<N> {
    /// Create an empty probe
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
            dropped: 0,
        }
    }

    /// Record the output of one tick
    pub fn record(&mut self, output: TxOutput) {
        let sample = Sample {
            line: output.line,
            busy: output.busy,
        };
        if self.samples.push(sample).is_err() {
            self.dropped += 1;
        }
    }

    /// Number of recorded samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples discarded because the probe was full
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// All recorded samples in tick order
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Line levels in tick order
    pub fn levels(&self) -> impl Iterator<Item = LineLevel> + '_ {
        self.samples.iter().map(|s| s.line)
    }

    /// Ticks where the line level changed
    ///
    /// The first sample establishes the initial level and is not an edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.samples
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                (pair[0].line != pair[1].line).then_some(Edge {
                    tick: i + 1,
                    level: pair[1].line,
                })
            })
    }

    /// One level per bit period, sampled at the period start
    ///
    /// `ticks_per_bit` values below 1 are treated as 1.
    pub fn bit_levels(&self, ticks_per_bit: u32) -> impl Iterator<Item = LineLevel> + '_ {
        let step = ticks_per_bit.max(1) as usize;
        self.samples.iter().step_by(step).map(|s| s.line)
    }

    /// Discard all recorded samples and the drop count
    pub fn clear(&mut self) {
        self.samples.clear();
        self.dropped = 0;
    }
}
