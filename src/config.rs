use crate::register::config::{Config, ConfigFields, IIRFilterCoefficient, StandbyTime};
use crate::register::ctrl_meas::{CtrlMeas, CtrlMeasFields, Oversampling, PowerMode};
use crate::register::Writable;

/// Typed device configuration, covering the CTRL_MEAS (0xF4) and CONFIG (0xF5) registers.
///
/// Apply it with [`Bmp280::apply_configuration`](crate::Bmp280::apply_configuration).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub(crate) mode: PowerMode,
    pub(crate) pressure_oversampling: Oversampling,
    pub(crate) temperature_oversampling: Oversampling,
    pub(crate) standby_time: StandbyTime,
    pub(crate) iir_filter_coefficient: IIRFilterCoefficient,
}

impl Default for Configuration {
    /// Same as [`Preset::HandheldLowPower`].
    fn default() -> Self {
        Self {
            mode: PowerMode::Normal,
            pressure_oversampling: Oversampling::X16,
            temperature_oversampling: Oversampling::X2,
            standby_time: StandbyTime::Ms62_5,
            iir_filter_coefficient: IIRFilterCoefficient::Coef4,
        }
    }
}

impl Configuration {
    pub fn power_mode(mut self, power_mode: PowerMode) -> Self {
        self.mode = power_mode;

        self
    }

    pub fn pressure_oversampling(mut self, pressure_oversampling: Oversampling) -> Self {
        self.pressure_oversampling = pressure_oversampling;

        self
    }

    /// Sets temperature oversampling.
    /// Pressure compensation needs a temperature from the same measurement, so skipping the
    /// temperature channel also makes compensated pressure meaningless.
    pub fn temperature_oversampling(mut self, temperature_oversampling: Oversampling) -> Self {
        self.temperature_oversampling = temperature_oversampling;

        self
    }

    pub fn standby_time(mut self, standby_time: StandbyTime) -> Self {
        self.standby_time = standby_time;

        self
    }

    pub fn iir_filter_coefficient(mut self, filter_coefficient: IIRFilterCoefficient) -> Self {
        self.iir_filter_coefficient = filter_coefficient;

        self
    }

    /// The CTRL_MEAS register value for this configuration.
    pub fn ctrl_meas(&self) -> u8 {
        CtrlMeas::encode(&CtrlMeasFields {
            osrs_t: self.temperature_oversampling,
            osrs_p: self.pressure_oversampling,
            mode: self.mode,
        })
    }

    /// The CONFIG register value for this configuration.
    pub fn config(&self) -> u8 {
        Config::encode(&ConfigFields {
            standby: self.standby_time,
            filter: self.iir_filter_coefficient,
            spi3w_en: false,
        })
    }

    /// Recommended settings from the datasheet, section 3.5.
    pub fn from_preset(p: Preset) -> Self {
        match p {
            Preset::HandheldLowPower => Configuration::default(),
            Preset::HandheldDynamic => Configuration::default()
                .pressure_oversampling(Oversampling::X4)
                .temperature_oversampling(Oversampling::X1)
                .standby_time(StandbyTime::Ms0_5)
                .iir_filter_coefficient(IIRFilterCoefficient::Coef16),
            Preset::WeatherMonitoring => Configuration::default()
                .power_mode(PowerMode::Forced)
                .pressure_oversampling(Oversampling::X1)
                .temperature_oversampling(Oversampling::X1)
                .standby_time(StandbyTime::Ms0_5)
                .iir_filter_coefficient(IIRFilterCoefficient::Off),
            Preset::ElevatorFloorChange => Configuration::default()
                .pressure_oversampling(Oversampling::X4)
                .temperature_oversampling(Oversampling::X1)
                .standby_time(StandbyTime::Ms125),
            Preset::DropDetection => Configuration::default()
                .pressure_oversampling(Oversampling::X2)
                .temperature_oversampling(Oversampling::X1)
                .standby_time(StandbyTime::Ms0_5)
                .iir_filter_coefficient(IIRFilterCoefficient::Off),
            Preset::IndoorNavigation => Configuration::default()
                .standby_time(StandbyTime::Ms0_5)
                .iir_filter_coefficient(IIRFilterCoefficient::Coef16),
        }
    }
}

/// The six use cases the datasheet recommends settings for, numbered 1 to 6.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Preset {
    HandheldLowPower = 1,
    HandheldDynamic = 2,
    WeatherMonitoring = 3,
    ElevatorFloorChange = 4,
    DropDetection = 5,
    IndoorNavigation = 6,
}

impl Preset {
    /// Maps a preset number to a preset. Anything outside 1..=6 selects
    /// [`Preset::HandheldLowPower`].
    pub fn from_number(n: i32) -> Self {
        match n {
            2 => Preset::HandheldDynamic,
            3 => Preset::WeatherMonitoring,
            4 => Preset::ElevatorFloorChange,
            5 => Preset::DropDetection,
            6 => Preset::IndoorNavigation,
            _ => Preset::HandheldLowPower,
        }
    }

    pub fn number(self) -> i32 {
        self as i32
    }
}
