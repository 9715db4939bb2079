use ledmatrix_engine::{DisplayMode, EngineConfig};

pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Length of one refresh tick in milliseconds
///
/// Used when converting authored wait times to ticks.
pub const TICK_MILLIS: u32 = 15;

/// Multiplexer base time unit
///
/// Phase `p` keeps a row lit for `2^p` units, so one refresh takes
/// 16 rows * 15 units, which lands close to [`TICK_MILLIS`].
pub const ROW_UNIT_MICROS: u64 = 62;

/// Holding the button for longer than this many ticks powers the device down
pub const LONG_PRESS_TICKS: u8 = 50;

const DISPLAY_MODE: DisplayMode = if cfg!(feature = "automaton") {
    DisplayMode::Automaton
} else {
    DisplayMode::Animation
};

/// Engine configuration of the board
pub const ENGINE: EngineConfig = EngineConfig::new().with_mode(DISPLAY_MODE);

/// Build the matrix pin set from the peripherals
///
/// Wiring: shift register data GPIO23, clock GPIO18, latch GPIO5; row
/// decoder enable GPIO19, address GPIO25, GPIO26, GPIO27, GPIO14.
#[cfg(feature = "esp32")]
#[macro_export]
macro_rules! matrix_pins {
    ($peripherals:ident) => {{
        use esp_hal::gpio::{Level, Output, OutputConfig};

        ledmatrix_engine::MatrixPins {
            data: Output::new($peripherals.GPIO23, Level::Low, OutputConfig::default()),
            clock: Output::new($peripherals.GPIO18, Level::Low, OutputConfig::default()),
            latch: Output::new($peripherals.GPIO5, Level::Low, OutputConfig::default()),
            enable: Output::new($peripherals.GPIO19, Level::High, OutputConfig::default()),
            address: [
                Output::new($peripherals.GPIO25, Level::Low, OutputConfig::default()),
                Output::new($peripherals.GPIO26, Level::Low, OutputConfig::default()),
                Output::new($peripherals.GPIO27, Level::Low, OutputConfig::default()),
                Output::new($peripherals.GPIO14, Level::Low, OutputConfig::default()),
            ],
        }
    }};
}
