use embassy_time::{Duration, Timer};

use crate::config::ROW_UNIT_MICROS;
use crate::infrastructure::drivers::MatrixScanner;
use crate::infrastructure::{FRAME, SYNC};

/// Task multiplexing the latched frame onto the matrix
///
/// Shows one row per iteration and keeps it lit for the weight of the
/// current phase. It is the only writer of the refresh counters.
#[embassy_executor::task]
pub async fn refresh_task(mut scanner: MatrixScanner) {
    loop {
        match scanner.show_next(&FRAME, &SYNC) {
            Ok(units) => {
                Timer::after(Duration::from_micros(ROW_UNIT_MICROS * u64::from(units))).await;
            }
            Err(err) => {
                log::error!("refresh: pin error: {:?}", err);
                Timer::after(Duration::from_micros(ROW_UNIT_MICROS)).await;
            }
        }
    }
}
