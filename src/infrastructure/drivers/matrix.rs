use esp_hal::gpio::Output;
use ledmatrix_engine::{MatrixPins, Scanner};

/// Scanner bound to the board's GPIO outputs
pub type MatrixScanner = Scanner<Output<'static>>;

/// Create the scanner with every row turned off
pub fn init_matrix(pins: MatrixPins<Output<'static>>) -> MatrixScanner {
    let mut scanner = Scanner::new(pins);
    if let Err(err) = scanner.blank() {
        log::error!("matrix: failed to blank display: {:?}", err);
    }
    scanner
}
