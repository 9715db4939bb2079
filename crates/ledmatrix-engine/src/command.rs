use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

/// Requests from input handlers to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Blank the display and switch to the next animation sequence
    NextSequence,
    /// Blank the display and switch to a given sequence
    SelectSequence(u8),
    /// Blank the display and stop for good
    PowerDown,
}

const COMMAND_CHANNEL_SIZE: usize = 4;

/// Input side, held by button handlers
pub type CommandSender = Sender<'static, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Engine side
pub type CommandReceiver =
    Receiver<'static, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Channel between input handlers and the engine
pub type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;
