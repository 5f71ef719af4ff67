//! ### ID - Chip identification number (`0xD0`, 1 byte, R)
//!
//! Contains the chip identification code, which is always 0x58 for the BMP280.
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::chip_id::ChipId;
//!
//! let id = device.read::<ChipId>()?;
//! assert_eq!(0x58, id);
//! # Ok(()) }
//! ```
#![doc(alias = "ID")]
use crate::register::{Readable, Reg};

/// The value the ID register reads on a BMP280.
pub const BMP280_CHIP_ID: u8 = 0x58;

/// Marker struct for the ID (0xD0) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct ChipId;
impl Reg for ChipId { const ADDR: u8 = 0xD0; }

impl Readable for ChipId {
    type Out = u8;
    fn decode(b: &[u8]) -> Self::Out {
        b[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_id_decode() {
        assert_eq!(BMP280_CHIP_ID, ChipId::decode(&[0x58]));
        assert_eq!(0x60, ChipId::decode(&[0x60]));
    }
}
