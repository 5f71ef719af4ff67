//! ### CTRL_MEAS - Measurement control (`0xF4`, 1 byte, R/W)
//!
//! Holds the temperature and pressure oversampling settings and the power mode.
//!
//! | bits | field  |
//! |------|--------|
//! | 7..5 | osrs_t |
//! | 4..2 | osrs_p |
//! | 1..0 | mode   |
//!
//! ### Default values
//! 0x00 (both measurements skipped, Sleep mode)
#![doc(alias = "CTRL_MEAS")]
use crate::register::{Readable, Reg, Writable};

/// Clears the mode bits of a CTRL_MEAS value, which puts the device in Sleep mode.
pub const MODE_MASK_OUT: u8 = 0b1111_1100;

/// Marker type for the CTRL_MEAS (0xF4) register
pub struct CtrlMeas;
impl Reg for CtrlMeas { const ADDR: u8 = 0xF4; }

/// The payload for the CTRL_MEAS (0xF4) register.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtrlMeasFields {
    pub osrs_t: Oversampling,
    pub osrs_p: Oversampling,
    pub mode: PowerMode,
}

impl Readable for CtrlMeas {
    type Out = CtrlMeasFields;

    fn decode(b: &[u8]) -> Self::Out {
        CtrlMeasFields {
            osrs_t: Oversampling::from((b[0] >> 5) & 0b111),
            osrs_p: Oversampling::from((b[0] >> 2) & 0b111),
            mode: PowerMode::from(b[0] & 0b11),
        }
    }
}

impl Writable for CtrlMeas {
    type In = CtrlMeasFields;

    fn encode(v: &Self::In) -> u8 {
        let osrs_t: u8 = v.osrs_t.into();
        let osrs_p: u8 = v.osrs_p.into();
        let mode: u8 = v.mode.into();
        (osrs_t << 5) | (osrs_p << 2) | mode
    }
}

/// Oversampling setting for a single measurement channel.
///
/// Higher oversampling lowers noise at the cost of measurement time and power.
/// [`Oversampling::Skipped`] disables the channel; a skipped channel reads 0x80000.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    Skipped,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl From<u8> for Oversampling {
    fn from(field: u8) -> Self {
        match field {
            0b000 => Oversampling::Skipped,
            0b001 => Oversampling::X1,
            0b010 => Oversampling::X2,
            0b011 => Oversampling::X4,
            0b100 => Oversampling::X8,
            // 0b101 and up all mean x16
            _ => Oversampling::X16,
        }
    }
}

impl From<Oversampling> for u8 {
    fn from(osr: Oversampling) -> u8 {
        match osr {
            Oversampling::Skipped => 0b000,
            Oversampling::X1 => 0b001,
            Oversampling::X2 => 0b010,
            Oversampling::X4 => 0b011,
            Oversampling::X8 => 0b100,
            Oversampling::X16 => 0b101,
        }
    }
}

/// The power modes that can be set in the CTRL_MEAS register.
///
/// For more information, see section 3.6 in the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// No measurements are performed. This is the mode after power on reset.
    Sleep,
    /// A single measurement is performed, after which the device returns to Sleep mode.
    Forced,
    /// Measurements are performed continuously, separated by the configured standby time.
    Normal,
}

impl From<u8> for PowerMode {
    fn from(field: u8) -> Self {
        match field {
            0b00 => PowerMode::Sleep,
            0b01 | 0b10 => PowerMode::Forced,
            _ => PowerMode::Normal,
        }
    }
}

impl From<PowerMode> for u8 {
    fn from(mode: PowerMode) -> u8 {
        match mode {
            PowerMode::Sleep => 0b00,
            PowerMode::Forced => 0b01,
            PowerMode::Normal => 0b11,
        }
    }
}
