//! Program authoring
//!
//! Builds bytecode into a fixed-capacity buffer, for programs generated at
//! runtime and for tests. Hand-written programs are plain byte strings.

use core::fmt;

use heapless::Vec;

use crate::grid::{GRID_CELLS, Grid};
use crate::interpreter::WAIT_HALT;
use crate::pan::PanOperand;
use crate::program::{PROGRAM_END, SEQUENCE_END, hex_char};

/// One encodable instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `eNN`
    Effect(u8),
    /// `sNN`
    Set(u8),
    /// `a`
    All,
    /// `pNN`
    Pan(PanOperand),
    /// `wNNNN`
    Wait(u16),
    /// `x`
    EndSequence,
}

impl Instruction {
    /// Encoded length in bytes
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Effect(_) | Self::Set(_) | Self::Pan(_) => 3,
            Self::Wait(_) => 5,
            Self::All | Self::EndSequence => 1,
        }
    }

    /// Encode into a small stack buffer, returns the used prefix length
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(self, out: &mut [u8; 5]) -> usize {
        let byte = |out: &mut [u8; 5], opcode: u8, value: u8| {
            out[0] = opcode;
            out[1] = hex_char(value >> 4);
            out[2] = hex_char(value);
        };
        match self {
            Self::Effect(value) => byte(out, b'e', value),
            Self::Set(index) => byte(out, b's', index),
            Self::Pan(pan) => byte(out, b'p', pan.to_byte()),
            Self::All => out[0] = b'a',
            Self::EndSequence => out[0] = SEQUENCE_END,
            Self::Wait(ticks) => {
                out[0] = b'w';
                for (i, slot) in out[1..5].iter_mut().enumerate() {
                    let shift = 12 - 4 * i;
                    *slot = hex_char((ticks >> shift) as u8);
                }
            }
        }
        self.encoded_len()
    }
}

/// Error returned when a program does not fit the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssembleError {
    CapacityExceeded,
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::CapacityExceeded => write!(f, "Program buffer capacity exceeded"),
        }
    }
}

impl core::error::Error for AssembleError {}

/// Bytecode writer over a fixed-capacity buffer
#[derive(Debug, Clone, Default)]
pub struct ProgramWriter<const N: usize> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> ProgramWriter<N> {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append one instruction
    pub fn push(&mut self, instruction: Instruction) -> Result<&mut Self, AssembleError> {
        let mut encoded = [0u8; 5];
        let len = instruction.encode(&mut encoded);
        self.bytes
            .extend_from_slice(&encoded[..len])
            .map_err(|()| AssembleError::CapacityExceeded)?;
        Ok(self)
    }

    /// Append instructions that draw `grid` exactly
    ///
    /// Every cell is written, grouped by value so each distinct value needs
    /// a single `e`. The result does not depend on what was on the grid.
    #[allow(clippy::cast_possible_truncation)]
    pub fn frame(&mut self, grid: &Grid) -> Result<&mut Self, AssembleError> {
        let mut written = [false; GRID_CELLS];
        for start in 0..GRID_CELLS {
            if written[start] {
                continue;
            }
            let value = grid.get(start);
            self.push(Instruction::Effect(value))?;
            for index in start..GRID_CELLS {
                if !written[index] && grid.get(index) == value {
                    self.push(Instruction::Set(index as u8))?;
                    written[index] = true;
                }
            }
        }
        Ok(self)
    }

    /// Append `s` instructions for every cell brighter than `threshold`
    ///
    /// Uses whatever effect is current, so the caller picks the look with
    /// a preceding [`Instruction::Effect`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn image(&mut self, grid: &Grid, threshold: u8) -> Result<&mut Self, AssembleError> {
        for index in 0..GRID_CELLS {
            if grid.level(index) > threshold {
                self.push(Instruction::Set(index as u8))?;
            }
        }
        Ok(self)
    }

    /// Append a wait of roughly `millis`
    ///
    /// Converts at `tick_millis` per tick, rounding down. Waits that do not
    /// fit 16 bits become a halt.
    pub fn wait_millis(&mut self, millis: u32, tick_millis: u32) -> Result<&mut Self, AssembleError> {
        let ticks = millis / tick_millis.max(1);
        let ticks = u16::try_from(ticks).unwrap_or(WAIT_HALT);
        self.push(Instruction::Wait(ticks))
    }

    /// Close the current sequence
    pub fn end_sequence(&mut self) -> Result<&mut Self, AssembleError> {
        self.push(Instruction::EndSequence)
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append the terminator and return the finished program
    pub fn finish(mut self) -> Result<Vec<u8, N>, AssembleError> {
        self.bytes
            .push(PROGRAM_END)
            .map_err(|_| AssembleError::CapacityExceeded)?;
        Ok(self.bytes)
    }
}
