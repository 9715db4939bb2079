#![no_std]

//! LED matrix animation engine
//!
//! Architecture layers:
//! - `grid` - 16x16 brightness buffer, pan shifts and packed cell state
//! - `program` - bytecode blob, hex operands, sequence lookup and validation
//! - `assembler` - authoring helpers that emit bytecode
//! - `interpreter` - the animation virtual machine
//! - `fade` - autonomous per-cell fade/bounce state machine
//! - `automaton` - falling embers display mode
//! - `sync` - tick/phase counters shared with the refresh driver
//! - `frame` / `scan` - bit-plane latch and row multiplexer
//! - `engine` - per-tick scheduler switching between display modes
//!
//! The engine is generic over [`RenderDriver`], so the same core runs on
//! the device and in host tests.

pub mod assembler;
pub mod automaton;
pub mod cell;
pub mod command;
pub mod engine;
pub mod fade;
pub mod frame;
pub mod grid;
pub mod pan;
pub mod program;
pub mod scan;
pub mod sync;

mod interpreter;

pub use assembler::{AssembleError, Instruction, ProgramWriter};
pub use automaton::Automaton;
pub use cell::AutoCell;
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use engine::{DisplayMode, Engine, EngineConfig, EngineState};
pub use frame::{Frame, SharedFrame};
pub use grid::{GRID_CELLS, GRID_SIDE, Grid};
pub use interpreter::{Advance, Interpreter, WAIT_HALT};
pub use pan::PanOperand;
pub use program::{Opcode, Program, ProgramError, ProgramErrorKind, ProgramStats};
pub use scan::{MatrixPins, Scanner};
pub use sync::{PHASE_COUNT, Synchronizer};

/// Render driver abstraction
///
/// Receives the grid whenever the engine wants it shown. The driver owns
/// the timing of the actual pin toggling, so `push` must not block.
pub trait RenderDriver {
    /// Hand the 256-cell buffer to the multiplexing driver
    fn push(&mut self, grid: &Grid);
}

impl<D: RenderDriver + ?Sized> RenderDriver for &mut D {
    fn push(&mut self, grid: &Grid) {
        (**self).push(grid);
    }
}
