//! Animation bytecode interpreter
//!
//! Holds the program cursor, the current effect register and the wait
//! counter. One [`Interpreter::advance`] call runs per scheduler tick.

use log::{debug, trace, warn};

use crate::grid::Grid;
use crate::pan::PanOperand;
use crate::program::{Opcode, Program};

/// Wait value that stops the sequence until another one is selected
pub const WAIT_HALT: u16 = 0xFFFF;

/// Result of one [`Interpreter::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A wait is pending, this many ticks remain
    Waiting(u16),
    /// The sequence is stopped until a sequence switch
    Halted,
    /// End of sequence or a bad opcode; the cursor is back at the start
    Restarted,
}

/// The animation virtual machine
#[derive(Debug, Clone)]
pub struct Interpreter<'a> {
    program: Program<'a>,
    /// Offset of the next opcode
    cursor: usize,
    /// Value written by `s` and `a`
    effect: u8,
    /// Remaining ticks, [`WAIT_HALT`] to stop
    wait: u16,
    /// Active sequence selector
    sequence: u8,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter positioned at sequence 0
    pub fn new(program: Program<'a>) -> Self {
        Self {
            program,
            cursor: 0,
            effect: 0,
            wait: 0,
            sequence: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn effect(&self) -> u8 {
        self.effect
    }

    pub fn wait(&self) -> u16 {
        self.wait
    }

    pub fn is_halted(&self) -> bool {
        self.wait == WAIT_HALT
    }

    /// Currently selected sequence
    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Select a sequence and rewind to its start
    ///
    /// Selectors past the last sequence wrap to sequence 0.
    pub fn select_sequence(&mut self, selector: u8) {
        self.sequence = selector;
        self.restart();
    }

    /// Select the sequence after the current one
    pub fn next_sequence(&mut self) {
        self.select_sequence(self.sequence.wrapping_add(1));
    }

    /// Re-resolve the selector and rewind to the start of its sequence
    fn restart(&mut self) {
        let (cursor, sequence) = self.program.sequence_start(self.sequence);
        if sequence != self.sequence {
            debug!("interpreter: sequence {} not found, wrapping to 0", self.sequence);
        }
        self.cursor = cursor;
        self.sequence = sequence;
        self.wait = 0;
    }

    fn read_byte(&mut self) -> u8 {
        let byte = self.program.byte_at(self.cursor);
        self.cursor += 1;
        byte
    }

    fn read_operand(&mut self, digits: usize) -> u16 {
        let (value, next) = self.program.operand(self.cursor, digits);
        self.cursor = next;
        value
    }

    /// Run until a wait is set or the sequence ends
    ///
    /// A pending wait is counted down by one per call. When it reaches
    /// zero the same call continues with the next instruction, so `wN`
    /// resumes exactly N calls after the call that executed it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, grid: &mut Grid) -> Advance {
        match self.wait {
            WAIT_HALT => return Advance::Halted,
            0 => {}
            _ => {
                self.wait -= 1;
                if self.wait != 0 {
                    return Advance::Waiting(self.wait);
                }
            }
        }

        loop {
            let byte = self.read_byte();
            let opcode = Opcode::from_byte(byte);
            match opcode {
                Opcode::Effect => {
                    self.effect = self.read_operand(2) as u8;
                }
                Opcode::Set => {
                    let index = self.read_operand(2);
                    grid.set(usize::from(index), self.effect);
                }
                Opcode::All => {
                    grid.fill(self.effect);
                }
                Opcode::Pan => {
                    let operand = self.read_operand(2) as u8;
                    grid.pan(PanOperand::from_byte(operand));
                }
                Opcode::Wait => {
                    self.wait = self.read_operand(4);
                    if self.wait == WAIT_HALT {
                        trace!("interpreter: halted at offset {}", self.cursor);
                        return Advance::Halted;
                    }
                    if self.wait != 0 {
                        trace!("interpreter: wait {} ticks", self.wait);
                        return Advance::Waiting(self.wait);
                    }
                }
                Opcode::End => {
                    self.restart();
                    return Advance::Restarted;
                }
                Opcode::Invalid(found) => {
                    warn!(
                        "interpreter: invalid opcode 0x{:02x} at offset {}, restarting sequence {}",
                        found,
                        self.cursor - 1,
                        self.sequence
                    );
                    self.restart();
                    return Advance::Restarted;
                }
            }
        }
    }
}
