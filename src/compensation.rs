//! 32-bit fixed-point compensation.
//!
//! These are the integer formulas from the BMP280 datasheet (section 8.2). All arithmetic is
//! done on fixed-width integers with two's complement wrap-around, and right shifts of signed
//! values are arithmetic.
//!
//! Pressure compensation depends on a value produced while compensating the temperature of the
//! *same* measurement. That value is returned as a [`TFine`] and has to be handed to
//! [`compensate_pressure`] explicitly:
//!
//! ```rust
//! use bmp280_rs::calibration::CalibrationData;
//! use bmp280_rs::compensation::{compensate_pressure, compensate_temperature};
//!
//! let cal = CalibrationData {
//!     dig_t1: 27504, dig_t2: 26435, dig_t3: -1000,
//!     dig_p1: 36477, dig_p2: -10685, dig_p3: 3024, dig_p4: 2855, dig_p5: 140,
//!     dig_p6: -7, dig_p7: 15500, dig_p8: -14600, dig_p9: 6000,
//! };
//!
//! let (temperature, t_fine) = compensate_temperature(519888, &cal);
//! let pressure = compensate_pressure(415148, t_fine, &cal);
//!
//! assert_eq!(2508, temperature);
//! assert_eq!(100656, pressure);
//! ```

use crate::calibration::CalibrationData;

/// Fine temperature value carried from temperature to pressure compensation.
///
/// Only [`compensate_temperature`] produces one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TFine(i32);

impl TFine {
    pub fn value(self) -> i32 {
        self.0
    }
}

/// Compensates a raw temperature count.
///
/// Returns the temperature in 1/100 °C together with the [`TFine`] needed to compensate the
/// pressure count of the same measurement.
pub fn compensate_temperature(raw: i32, cal: &CalibrationData) -> (i32, TFine) {
    let t1 = cal.dig_t1 as i32;
    let t2 = cal.dig_t2 as i32;
    let t3 = cal.dig_t3 as i32;

    let v1 = (raw >> 3).wrapping_sub(t1 << 1).wrapping_mul(t2) >> 11;
    let delta = (raw >> 4).wrapping_sub(t1);
    let v1a = delta.wrapping_mul(delta);
    let v2 = (v1a >> 12).wrapping_mul(t3) >> 14;

    let t_fine = v1.wrapping_add(v2);
    let temperature = t_fine.wrapping_mul(5).wrapping_add(128) >> 8;

    (temperature, TFine(t_fine))
}

/// Compensates a raw pressure count. The result is in pascal.
///
/// Returns 0 when the calibration makes the scaling divisor zero.
pub fn compensate_pressure(raw: u32, t_fine: TFine, cal: &CalibrationData) -> u32 {
    let p1 = cal.dig_p1 as i32;
    let p2 = cal.dig_p2 as i32;
    let p3 = cal.dig_p3 as i32;
    let p4 = cal.dig_p4 as i32;
    let p5 = cal.dig_p5 as i32;
    let p6 = cal.dig_p6 as i32;
    let p7 = cal.dig_p7 as i32;
    let p8 = cal.dig_p8 as i32;
    let p9 = cal.dig_p9 as i32;

    let v1 = (t_fine.0 >> 1).wrapping_sub(64000);
    let v1a = (v1 >> 2).wrapping_mul(v1 >> 2);

    let v2 = (v1a >> 11).wrapping_mul(p6).wrapping_add(v1.wrapping_mul(p5) << 1);
    let v2 = (v2 >> 2).wrapping_add(p4 << 16);

    let v1 = (p3.wrapping_mul(v1a >> 13) >> 3).wrapping_add(p2.wrapping_mul(v1) >> 1) >> 18;
    let v1 = 32768i32.wrapping_add(v1).wrapping_mul(p1) >> 15;

    if v1 == 0 {
        return 0;
    }

    let v3 = 1_048_576u32
        .wrapping_sub(raw)
        .wrapping_sub((v2 >> 12) as u32)
        .wrapping_mul(3125);

    let divisor = v1 as u32;
    // doubling before the division would overflow from 2^31 upwards
    let v3 = if v3 < 0x8000_0000 {
        (v3 << 1) / divisor
    } else {
        (v3 / divisor).wrapping_mul(2)
    };

    let v3a = (v3 >> 3).wrapping_mul(v3 >> 3);
    let v1 = p9.wrapping_mul((v3a >> 13) as i32) >> 12;
    let v2 = ((v3 >> 2) as i32).wrapping_mul(p8) >> 13;

    (v3 as i32).wrapping_add(v1.wrapping_add(v2).wrapping_add(p7) >> 4) as u32
}
