/// Size of the calibration block starting at register 0x88.
pub const CALIBRATION_LEN: usize = 26;

/// Per-device compensation coefficients, read from the sensor's NVM.
///
/// Field names follow the datasheet (`dig_T1` .. `dig_P9`, section 3.11.2).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationData {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

impl CalibrationData {
    /// Parses the 26 byte calibration block.
    ///
    /// Every coefficient is stored LSB first, so coefficient `k` is `block[2k + 1]` (MSB) and
    /// `block[2k]` (LSB). The last two bytes are reserved.
    pub fn from_bytes(block: &[u8; CALIBRATION_LEN]) -> Self {
        let word = |lsb: usize| u16::from_be_bytes([block[lsb + 1], block[lsb]]);

        Self {
            dig_t1: word(0),
            dig_t2: word(2) as i16,
            dig_t3: word(4) as i16,
            dig_p1: word(6),
            dig_p2: word(8) as i16,
            dig_p3: word(10) as i16,
            dig_p4: word(12) as i16,
            dig_p5: word(14) as i16,
            dig_p6: word(16) as i16,
            dig_p7: word(18) as i16,
            dig_p8: word(20) as i16,
            dig_p9: word(22) as i16,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Calibration block of the worked example in the datasheet, section 3.12.
    pub(crate) const DATASHEET_BLOCK: [u8; CALIBRATION_LEN] = [
        0x70, 0x6B, 0x43, 0x67, 0x18, 0xFC, 0x7D, 0x8E, 0x43, 0xD6, 0xD0, 0x0B, 0x27, 0x0B,
        0x8C, 0x00, 0xF9, 0xFF, 0x8C, 0x3C, 0xF8, 0xC6, 0x70, 0x17, 0x00, 0x00,
    ];

    pub(crate) fn datasheet_calibration() -> CalibrationData {
        CalibrationData {
            dig_t1: 27504,
            dig_t2: 26435,
            dig_t3: -1000,
            dig_p1: 36477,
            dig_p2: -10685,
            dig_p3: 3024,
            dig_p4: 2855,
            dig_p5: 140,
            dig_p6: -7,
            dig_p7: 15500,
            dig_p8: -14600,
            dig_p9: 6000,
        }
    }

    #[test]
    fn load_calibration() {
        let cal = CalibrationData::from_bytes(&DATASHEET_BLOCK);

        assert_eq!(datasheet_calibration(), cal);
    }

    #[test]
    fn load_calibration_ignores_reserved_bytes() {
        let mut block = DATASHEET_BLOCK;
        block[24] = 0xAB;
        block[25] = 0xCD;

        assert_eq!(datasheet_calibration(), CalibrationData::from_bytes(&block));
    }

    #[test]
    fn unsigned_coefficients_keep_high_bit() {
        let mut block = [0u8; CALIBRATION_LEN];
        block[0] = 0xFF;
        block[1] = 0xFF;
        block[6] = 0x00;
        block[7] = 0x80;

        let cal = CalibrationData::from_bytes(&block);
        assert_eq!(0xFFFF, cal.dig_t1);
        assert_eq!(0x8000, cal.dig_p1);
        assert_eq!(0, cal.dig_t2);
    }

    #[test]
    fn default_is_zeroed() {
        let cal = CalibrationData::default();
        assert_eq!(0, cal.dig_t1);
        assert_eq!(0, cal.dig_p9);
    }
}
