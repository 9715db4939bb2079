//! Infrastructure layer - ESP32 board support
//!
//! Hardware bindings for the engine: matrix pins, the refresh task that
//! multiplexes the latched frame, the hardware random seed and power-down.

use embassy_sync::channel::Channel;
use ledmatrix_engine::{CommandChannel, SharedFrame, Synchronizer};

pub mod drivers;
pub mod power;
pub mod tasks;

/// Refresh counters, written only by the refresh task
pub static SYNC: Synchronizer = Synchronizer::new();

/// Frame shown by the refresh task
pub static FRAME: SharedFrame = SharedFrame::new();

/// Input commands for the engine
pub static COMMANDS: CommandChannel = Channel::new();
