//! Power-down hook
//!
//! Stops everything and parks the chip in deep sleep until the button pulls
//! its pin low again. Waking up restarts the firmware from scratch.

use esp_hal::peripherals::{GPIO0, LPWR};
use esp_hal::rtc_cntl::Rtc;
use esp_hal::rtc_cntl::sleep::{Ext0WakeupSource, WakeupLevel};

pub fn power_down(lpwr: LPWR<'static>, button: GPIO0<'static>) -> ! {
    log::info!("power: entering deep sleep");
    let mut rtc = Rtc::new(lpwr);
    let wakeup = Ext0WakeupSource::new(button, WakeupLevel::Low);
    rtc.sleep_deep(&[&wakeup])
}
