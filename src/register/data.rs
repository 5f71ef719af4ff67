use crate::register::{Readable, Reg};

/// Marker struct for the press_msb .. temp_xlsb (0xF7 - 0xFC) registers.
///
/// The BMP280 auto-increments on multiple reads, so reading 6 bytes from 0xF7 gets pressure
/// and temperature from the same measurement in one burst, as recommended by the datasheet,
/// section 3.9. Note that this returns the raw uncompensated counts. For most use cases
/// [`Bmp280::read_compensated()`](crate::Bmp280::read_compensated) is what you want.
///
/// - **Length:** 6 bytes
/// - **Access:** Read-only
pub struct Data;
impl Reg for Data { const ADDR: u8 = 0xF7; }

/// Raw 20-bit ADC counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataSample {
    pressure: u32,
    temperature: i32,
}

impl DataSample {
    pub fn new(pressure: u32, temperature: i32) -> Self {
        Self { pressure, temperature }
    }

    /// Returns the raw pressure count from press_msb, press_lsb and press_xlsb
    pub fn pressure(&self) -> u32 { self.pressure }

    /// Returns the raw temperature count from temp_msb, temp_lsb and temp_xlsb
    pub fn temperature(&self) -> i32 { self.temperature }
}

/// Packs msb, lsb and the upper nibble of xlsb into a 20-bit value.
fn unpack_20bit(b: &[u8]) -> u32 {
    ((b[0] as u32) << 12) | ((b[1] as u32) << 4) | ((b[2] as u32) >> 4)
}

impl Readable for Data {
    type Out = DataSample;

    const N: usize = 6;

    fn decode(b: &[u8]) -> Self::Out {
        DataSample {
            pressure: unpack_20bit(&b[0..3]),
            // fits in 20 bits, so the cast never changes the value
            temperature: unpack_20bit(&b[3..6]) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_decode() {
        let reg = Data::decode(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

        assert_eq!(0xAABBC, reg.pressure);
        assert_eq!(0xDDEEF, reg.temperature);
    }

    #[test]
    fn data_decode_ignores_low_nibble_of_xlsb() {
        let reg = Data::decode(&[0x65, 0x5A, 0xC3, 0x7E, 0xED, 0x0F]);

        assert_eq!(415148, reg.pressure);
        assert_eq!(519888, reg.temperature);
    }

    #[test]
    fn data_decode_full_scale() {
        let reg = Data::decode(&[0xFF; 6]);

        assert_eq!(0xFFFFF, reg.pressure);
        assert_eq!(0xFFFFF, reg.temperature);
    }
}
