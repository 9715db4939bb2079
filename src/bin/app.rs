#![no_std]
#![no_main]

use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

use ledmatrix_engine::{Engine, Program};
use ledmatrix_firmware::animations::PROGRAM;
use ledmatrix_firmware::config::{BUILD_VERSION, ENGINE, LONG_PRESS_TICKS};
use ledmatrix_firmware::controllers::PressTracker;
use ledmatrix_firmware::infrastructure::drivers::{init_matrix, seeded_rng};
use ledmatrix_firmware::infrastructure::power::power_down;
use ledmatrix_firmware::infrastructure::tasks::refresh_task;
use ledmatrix_firmware::infrastructure::{COMMANDS, FRAME, SYNC};
use ledmatrix_firmware::matrix_pins;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::info!("ledmatrix: firmware {}", BUILD_VERSION);

    let program = Program::new(PROGRAM);
    match program.validate() {
        Ok(stats) => log::info!(
            "ledmatrix: program has {} sequences, {} instructions",
            stats.sequences,
            stats.instructions
        ),
        Err(err) => log::warn!("ledmatrix: program is malformed: {}", err),
    }

    // Spawn the refresh task, it drives the tick counter
    let scanner = init_matrix(matrix_pins!(peripherals));
    spawner.spawn(refresh_task(scanner)).ok();

    let mut button_pin = peripherals.GPIO0;
    let button = Input::new(
        button_pin.reborrow(),
        InputConfig::default().with_pull(Pull::Up),
    );
    let mut presses = PressTracker::new(LONG_PRESS_TICKS);
    let commands = COMMANDS.sender();

    let mut engine =
        Engine::new(program, &FRAME, seeded_rng(), ENGINE).with_commands(COMMANDS.receiver());

    while !engine.is_powered_down() {
        let tick = engine.wait_slot(&SYNC).await;
        if let Some(command) = presses.update(button.is_low()) {
            if commands.try_send(command).is_err() {
                log::warn!("ledmatrix: command queue full, dropped {:?}", command);
            }
        }
        engine.on_tick(tick);
    }

    drop(button);
    power_down(peripherals.LPWR, button_pin)
}
