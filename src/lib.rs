//! Blocking `no_std` driver for the Bosch BMP280 barometric pressure and temperature sensor.
//!
//! The driver talks to the device through the [`bus::Bus`] trait, which is implemented for any
//! `embedded-hal` 1.0 I2C bus by [`bus::I2c`]. Measurements are compensated with the 32-bit
//! integer formulas from the datasheet and come back as temperature in 1/100 °C and pressure
//! in Pa. A [`window::SampleWindow`] keeps a fixed number of recent samples and summarizes
//! them.
//!
//! ```rust,no_run
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::i2c::I2c;
//! # use bmp280_rs::Bmp280Result;
//! use bmp280_rs::{Bmp280, SdoPinState};
//! use bmp280_rs::window::SampleWindow;
//!
//! # fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Bmp280Result<(), I::Error> {
//! let mut device = Bmp280::new_i2c(i2c, SdoPinState::Low);
//! device.configure_preset(1, &mut delay)?;
//!
//! let mut window: SampleWindow<16> = SampleWindow::new();
//! for _ in 0..32 {
//!     window.push(device.read_compensated()?);
//!     delay.delay_ms(100);
//! }
//!
//! if let Ok(pressure) = window.pressure_summary() {
//!     // pressure.high, pressure.low, pressure.average
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format` for public types.
//! - `log`: log through the `log` crate.
//!
//! The two are mutually exclusive. With neither enabled, logging compiles away.
#![cfg_attr(not(test), no_std)]

// must come first so the macros are visible in the other modules
#[macro_use]
mod fmt;

mod bmp280;
pub mod bus;
pub mod calibration;
pub mod compensation;
pub mod config;
pub mod error;
pub mod register;
pub mod sample;
pub mod window;

#[cfg(test)]
mod testing;

pub use bmp280::{
    Bmp280, Bmp280I2c, Bmp280Result, SdoPinState, CONFIG_DELAY_US, MAX_WRITE_PAIRS,
    RESET_DELAY_US,
};
