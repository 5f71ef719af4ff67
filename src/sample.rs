use embassy_time::Instant;

/// Uncompensated ADC counts from a single measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub timestamp: Instant,
    /// 20-bit temperature count
    pub temperature: i32,
    /// 20-bit pressure count
    pub pressure: u32,
}

/// A calibrated temperature and pressure reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompensatedSample {
    pub timestamp: Instant,
    /// Temperature in 1/100 °C
    pub temperature: i32,
    /// Pressure in Pa
    pub pressure: u32,
}

impl CompensatedSample {
    pub fn new(timestamp: Instant, temperature: i32, pressure: u32) -> Self {
        Self { timestamp, temperature, pressure }
    }

    pub fn temperature_celsius(&self) -> f32 {
        self.temperature as f32 / 100.0
    }

    pub fn pressure_pascal(&self) -> u32 {
        self.pressure
    }

    pub fn pressure_hectopascal(&self) -> f32 {
        self.pressure as f32 / 100.0
    }
}
