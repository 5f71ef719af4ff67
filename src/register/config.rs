//! ### CONFIG - Rate, filter and interface options (`0xF5`, 1 byte, R/W)
//!
//! | bits | field    |
//! |------|----------|
//! | 7..5 | t_sb     |
//! | 4..2 | filter   |
//! | 0    | spi3w_en |
//!
//! Writes to this register in Normal mode may be ignored by the device. Put it to Sleep first,
//! which is what [`Bmp280::configure`](crate::Bmp280::configure) does.
//!
//! ### Default values
//! 0x00 (0.5 ms standby, filter off, 4-wire SPI)
//!
//! ### Examples
//! ```rust,no_run
//! # use bmp280_rs::{Bmp280, Bmp280Result};
//! # use bmp280_rs::bus::Bus;
//! # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
//! use bmp280_rs::register::config::{Config, ConfigFields, IIRFilterCoefficient, StandbyTime};
//!
//! let fields = device.read::<Config>()?;
//! println!("{:?}", fields.filter);
//!
//! device.write::<Config>(&ConfigFields {
//!     standby: StandbyTime::Ms125,
//!     filter: IIRFilterCoefficient::Coef4,
//!     spi3w_en: false,
//! })?;
//! # Ok(()) }
//! ```
#![doc(alias = "CONFIG")]
use crate::register::{Readable, Reg, Writable};

/// Marker type for CONFIG (0xF5) register
pub struct Config;
impl Reg for Config { const ADDR: u8 = 0xF5; }

/// The payload for the CONFIG (0xF5) register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigFields {
    /// Inactive time between measurements in Normal mode.
    pub standby: StandbyTime,
    /// The IIR filter coefficient.
    ///
    /// Read more about the IIR filter in the datasheet section 3.4.3
    pub filter: IIRFilterCoefficient,
    /// Enables the 3-wire SPI interface.
    pub spi3w_en: bool,
}

impl Readable for Config {
    type Out = ConfigFields;

    fn decode(b: &[u8]) -> Self::Out {
        ConfigFields {
            standby: StandbyTime::from((b[0] >> 5) & 0b111),
            filter: IIRFilterCoefficient::from((b[0] >> 2) & 0b111),
            spi3w_en: (b[0] & 0b1) != 0,
        }
    }
}

impl Writable for Config {
    type In = ConfigFields;

    fn encode(v: &Self::In) -> u8 {
        let standby: u8 = v.standby.into();
        let filter: u8 = v.filter.into();
        (standby << 5) | (filter << 2) | v.spi3w_en as u8
    }
}

/// Standby time between measurements in Normal mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyTime {
    Ms0_5,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
    Ms2000,
    Ms4000,
}

impl From<u8> for StandbyTime {
    fn from(field: u8) -> Self {
        match field {
            0b000 => StandbyTime::Ms0_5,
            0b001 => StandbyTime::Ms62_5,
            0b010 => StandbyTime::Ms125,
            0b011 => StandbyTime::Ms250,
            0b100 => StandbyTime::Ms500,
            0b101 => StandbyTime::Ms1000,
            0b110 => StandbyTime::Ms2000,
            _ => StandbyTime::Ms4000,
        }
    }
}

impl From<StandbyTime> for u8 {
    fn from(t: StandbyTime) -> u8 {
        match t {
            StandbyTime::Ms0_5 => 0b000,
            StandbyTime::Ms62_5 => 0b001,
            StandbyTime::Ms125 => 0b010,
            StandbyTime::Ms250 => 0b011,
            StandbyTime::Ms500 => 0b100,
            StandbyTime::Ms1000 => 0b101,
            StandbyTime::Ms2000 => 0b110,
            StandbyTime::Ms4000 => 0b111,
        }
    }
}

/// The configurable IIR filter coefficients.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IIRFilterCoefficient {
    /// Filter off
    Off,
    Coef2,
    Coef4,
    Coef8,
    Coef16,
}

impl From<u8> for IIRFilterCoefficient {
    fn from(field: u8) -> Self {
        match field {
            0b000 => IIRFilterCoefficient::Off,
            0b001 => IIRFilterCoefficient::Coef2,
            0b010 => IIRFilterCoefficient::Coef4,
            0b011 => IIRFilterCoefficient::Coef8,
            _ => IIRFilterCoefficient::Coef16,
        }
    }
}

impl From<IIRFilterCoefficient> for u8 {
    fn from(c: IIRFilterCoefficient) -> u8 {
        match c {
            IIRFilterCoefficient::Off => 0b000,
            IIRFilterCoefficient::Coef2 => 0b001,
            IIRFilterCoefficient::Coef4 => 0b010,
            IIRFilterCoefficient::Coef8 => 0b011,
            IIRFilterCoefficient::Coef16 => 0b100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_decode() {
        let reg = Config::decode(&[0b0000_0000]);
        assert_eq!(StandbyTime::Ms0_5, reg.standby);
        assert_eq!(IIRFilterCoefficient::Off, reg.filter);
        assert!(!reg.spi3w_en);

        let reg = Config::decode(&[0b0100_1000]);
        assert_eq!(StandbyTime::Ms125, reg.standby);
        assert_eq!(IIRFilterCoefficient::Coef4, reg.filter);

        let reg = Config::decode(&[0b1111_1101]);
        assert_eq!(StandbyTime::Ms4000, reg.standby);
        assert_eq!(IIRFilterCoefficient::Coef16, reg.filter);
        assert!(reg.spi3w_en);
    }

    #[test]
    fn config_encode() {
        assert_eq!(0x28, Config::encode(&ConfigFields {
            standby: StandbyTime::Ms62_5,
            filter: IIRFilterCoefficient::Coef4,
            spi3w_en: false,
        }));

        assert_eq!(0x10, Config::encode(&ConfigFields {
            standby: StandbyTime::Ms0_5,
            filter: IIRFilterCoefficient::Coef16,
            spi3w_en: false,
        }));

        assert_eq!(0b1110_1101, Config::encode(&ConfigFields {
            standby: StandbyTime::Ms4000,
            filter: IIRFilterCoefficient::Coef8,
            spi3w_en: true,
        }));
    }
}
