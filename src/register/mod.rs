//! Register catalog for the BMP280.
//!
//! Every register the driver touches has a marker type here. Readable registers know how
//! to decode their bytes, writable ones how to encode a value. The markers are used with
//! [`Bmp280::read`](crate::Bmp280::read) and [`Bmp280::write`](crate::Bmp280::write), or
//! directly through a [`Bus`](crate::bus::Bus).
pub mod calibration;
pub mod chip_id;
pub mod config;
pub mod ctrl_meas;
pub mod data;
pub mod reset;
pub mod status;

/// Largest block read in one go (the calibration block).
pub const MAX_REG_BYTES: usize = 26;

pub trait Reg { const ADDR: u8; }

pub trait Readable: Reg {
    type Out;
    const N: usize = 1;
    fn decode(b: &[u8]) -> Self::Out;
}

/// Single byte registers that can be written.
pub trait Writable: Reg {
    type In;
    fn encode(v: &Self::In) -> u8;
}
