use crate::calibration::{CalibrationData, CALIBRATION_LEN};
use crate::register::{Readable, Reg};

/// Marker struct for the calib00 .. calib25 (0x88 - 0xA1) registers.
///
/// - **Length:** 26 bytes
/// - **Access:** Read-only
pub struct Calibration;
impl Reg for Calibration { const ADDR: u8 = 0x88; }

impl Readable for Calibration {
    type Out = CalibrationData;

    const N: usize = CALIBRATION_LEN;

    fn decode(b: &[u8]) -> Self::Out {
        let mut block = [0u8; CALIBRATION_LEN];
        block.copy_from_slice(&b[..CALIBRATION_LEN]);

        CalibrationData::from_bytes(&block)
    }
}
