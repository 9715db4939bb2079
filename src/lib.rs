#![no_std]

//! LED matrix firmware
//!
//! Board glue around `ledmatrix-engine`: configuration, the built-in
//! animation program and button handling compile everywhere, the ESP32
//! infrastructure only with the `esp32` feature.

pub mod animations;
pub mod config;
pub mod controllers;
#[cfg(feature = "esp32")]
pub mod infrastructure;
