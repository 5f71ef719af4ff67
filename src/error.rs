//! Errors that can occur when using the BMP280 device or its sample window.
//!
//! [`Bmp280Error`] is generic over the underlying bus error type, which is passed through
//! untouched in [`Bmp280Error::Bus`].

use core::fmt::{Debug, Display, Formatter};

/// This represents all possible errors that can occur when talking to the BMP280.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bmp280Error<BusError> {
    /// An error has occurred in the I2C driver.
    ///
    /// The driver never retries. If this happens in the middle of
    /// [`Bmp280::configure`](crate::Bmp280::configure) the device configuration is undefined
    /// and `configure` has to be run again from the start.
    Bus(BusError),

    /// More register/value pairs were passed to
    /// [`Bmp280::write_registers`](crate::Bmp280::write_registers) than fit in one transaction.
    ///
    /// Nothing was written to the device.
    WriteTooLong,
}

impl<BusError: Debug> Display for Bmp280Error<BusError> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Bmp280Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Bmp280Error::WriteTooLong => f.write_str("too many register writes for one transaction"),
        }
    }
}

/// Errors returned by [`SampleWindow`](crate::window::SampleWindow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// The window holds no samples, so there is nothing to return or summarize.
    EmptyCollection,
}

impl Display for WindowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            WindowError::EmptyCollection => f.write_str("the sample window is empty"),
        }
    }
}
