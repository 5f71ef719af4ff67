use crate::bus::{Bus, I2c};
use crate::calibration::CalibrationData;
use crate::compensation::{compensate_pressure, compensate_temperature};
use crate::config::{Configuration, Preset};
use crate::error::Bmp280Error;
use crate::register::calibration::Calibration;
use crate::register::chip_id::{ChipId, BMP280_CHIP_ID};
use crate::register::config::Config;
use crate::register::ctrl_meas::{CtrlMeas, MODE_MASK_OUT};
use crate::register::data::Data;
use crate::register::reset::{Reset, ResetCommand};
use crate::register::status::{Status, StatusFlags};
use crate::register::{Readable, Reg, Writable};
use crate::sample::{CompensatedSample, RawSample};
use embassy_time::Instant;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::SevenBitAddress;

/// Type alias for a Bmp280 chip communicating over I2C
pub type Bmp280I2c<T> = Bmp280<I2c<T>>;

/// Type alias used to simplify return types throughout the driver
pub type Bmp280Result<T, BusError> = Result<T, Bmp280Error<BusError>>;

/// Time to wait after a soft reset before talking to the device again.
pub const RESET_DELAY_US: u32 = 10_000;

/// Time to wait after writing a new configuration, long enough for the first measurement of
/// every preset to complete.
pub const CONFIG_DELAY_US: u32 = 100_000;

/// Maximum number of register/value pairs in one [`Bmp280::write_registers`] transaction.
pub const MAX_WRITE_PAIRS: usize = 8;

/// Main Bmp280 driver struct
///
/// Owns the bus and the calibration coefficients once they have been read from the device.
pub struct Bmp280<B> {
    bus: B,
    calibration: Option<CalibrationData>,
}

impl<T> Bmp280I2c<T>
where
    T: embedded_hal::i2c::I2c,
{
    /// Constructs a driver that talks to the device over I2C.
    ///
    /// Nothing is sent on the bus. Call [`configure_preset`](Bmp280::configure_preset) or
    /// [`apply_configuration`](Bmp280::apply_configuration) to start measuring.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use embedded_hal::delay::DelayNs;
    /// # use embedded_hal::i2c::I2c;
    /// # use bmp280_rs::Bmp280Result;
    ///  use bmp280_rs::{Bmp280, SdoPinState};
    /// # fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Bmp280Result<(), I::Error> {
    ///
    ///  let mut device = Bmp280::new_i2c(i2c, SdoPinState::Low);
    ///  device.configure_preset(3, &mut delay)?;
    ///  let sample = device.read_compensated()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_i2c(i2c: T, sdo_pin_state: SdoPinState) -> Self {
        Self::new(I2c::new(i2c, sdo_pin_state.into()))
    }
}

impl<B> Bmp280<B> {
    /// Register values for the recommended settings of datasheet section 3.5, as
    /// `(ctrl_meas, config)` pairs. Entry `n - 1` belongs to preset `n`.
    pub const PRESETS: [(u8, u8); 6] = [
        (0x57, 0x28),
        (0x2F, 0x10),
        (0x25, 0x00),
        (0x2F, 0x48),
        (0x2B, 0x00),
        (0x57, 0x10),
    ];

    /// Creates a driver on top of an already constructed [`Bus`]. Nothing is sent on the bus.
    pub fn new(bus: B) -> Self {
        Bmp280 {
            bus,
            calibration: None,
        }
    }

    /// Consumes the driver and gives back the bus.
    pub fn release(self) -> B {
        self.bus
    }

    /// The calibration coefficients, if they have been loaded.
    pub fn calibration(&self) -> Option<&CalibrationData> {
        self.calibration.as_ref()
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }
}

impl<B> Bmp280<B>
where
    B: Bus,
{
    /// Read a register (or fixed-size register block) using a typed marker from
    /// [`crate::register`].
    ///
    /// The bus transfer length and address come from `R::N` and `R::ADDR`.
    ///
    /// # Examples
    /// Read the STATUS (0xF3) register:
    /// ```rust,no_run
    /// # use bmp280_rs::{Bmp280, Bmp280Result};
    /// # use bmp280_rs::bus::Bus;
    /// # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
    /// use bmp280_rs::register::status::Status;
    ///
    /// let status = device.read::<Status>()?;
    /// if status.measuring() {
    ///     // results are not in the data registers yet
    /// }
    /// # Ok(()) }
    /// ```
    pub fn read<R: Readable>(&mut self) -> Bmp280Result<R::Out, B::Error> {
        self.bus.read::<R>()
    }

    /// Write a register using a typed marker from [`crate::register`].
    ///
    /// This is a direct write of the given fields. Writes to CTRL_MEAS and CONFIG outside of
    /// [`configure`](Self::configure) may be ignored by the device while it is in Normal mode.
    pub fn write<W: Writable>(&mut self, v: &W::In) -> Bmp280Result<(), B::Error> {
        self.bus.write::<W>(v)
    }

    /// Burst reads `data.len()` bytes starting at register `start`.
    pub fn read_registers(&mut self, start: u8, data: &mut [u8]) -> Bmp280Result<(), B::Error> {
        self.bus.read_registers(start, data).map_err(Bmp280Error::Bus)
    }

    /// Writes `(register, value)` pairs in a single bus transaction, in the given order.
    ///
    /// Returns [`Bmp280Error::WriteTooLong`] without touching the bus if more than
    /// [`MAX_WRITE_PAIRS`] pairs are given.
    pub fn write_registers(&mut self, pairs: &[(u8, u8)]) -> Bmp280Result<(), B::Error> {
        if pairs.len() > MAX_WRITE_PAIRS {
            warn!("refusing to write {} register pairs in one transaction", pairs.len());
            return Err(Bmp280Error::WriteTooLong);
        }
        if pairs.is_empty() {
            return Ok(());
        }

        let mut buf = [0u8; 2 * MAX_WRITE_PAIRS];
        for (chunk, (reg, value)) in buf.chunks_exact_mut(2).zip(pairs) {
            chunk[0] = *reg;
            chunk[1] = *value;
        }

        self.bus
            .write_registers(&buf[..2 * pairs.len()])
            .map_err(Bmp280Error::Bus)
    }

    /// Determines if a BMP280 is connected by reading the ID (0xD0) register.
    pub fn is_connected(&mut self) -> Bmp280Result<bool, B::Error> {
        let id = self.bus.read::<ChipId>()?;

        Ok(id == BMP280_CHIP_ID)
    }

    /// Returns the status from the STATUS (0xF3) register.
    pub fn status(&mut self) -> Bmp280Result<StatusFlags, B::Error> {
        self.bus.read::<Status>()
    }

    /// Triggers a soft reset and blocks for [`RESET_DELAY_US`].
    ///
    /// All user settings are lost and the device returns to Sleep mode. Calibration
    /// coefficients live in NVM and survive the reset.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Bmp280Result<(), B::Error> {
        debug!("soft reset");
        self.bus.write::<Reset>(&ResetCommand::SoftReset)?;
        delay.delay_us(RESET_DELAY_US);

        Ok(())
    }

    /// Reads the calibration block (0x88, 26 bytes) and stores it, replacing any previously
    /// loaded coefficients.
    pub fn load_calibration(&mut self) -> Bmp280Result<CalibrationData, B::Error> {
        let calibration = self.bus.read::<Calibration>()?;
        debug!("calibration loaded: {:?}", calibration);
        self.calibration = Some(calibration);

        Ok(calibration)
    }

    /// Configures the device with one of the six recommended settings, see [`Preset`] and
    /// [`Self::PRESETS`].
    ///
    /// Any number outside `1..=6` selects preset 1.
    pub fn configure_preset<D: DelayNs>(
        &mut self,
        preset: i32,
        delay: &mut D,
    ) -> Bmp280Result<(), B::Error> {
        let preset = Preset::from_number(preset);
        let (ctrl_meas, config) = Self::PRESETS[preset.number() as usize - 1];
        debug!("applying preset {}", preset.number());

        self.configure(ctrl_meas, config, delay)
    }

    /// Applies a typed [`Configuration`] through [`configure`](Self::configure).
    pub fn apply_configuration<D: DelayNs>(
        &mut self,
        config: &Configuration,
        delay: &mut D,
    ) -> Bmp280Result<(), B::Error> {
        self.configure(config.ctrl_meas(), config.config(), delay)
    }

    /// Resets the device and writes new CTRL_MEAS and CONFIG values.
    ///
    /// CONFIG writes are only guaranteed to take effect in Sleep mode, so after the reset
    /// CTRL_MEAS is first written with its mode bits cleared, then CONFIG, then CTRL_MEAS with
    /// the requested mode. All three writes go out in one transaction. Blocks for
    /// [`RESET_DELAY_US`] plus [`CONFIG_DELAY_US`].
    ///
    /// A bus error aborts immediately and leaves the device configuration undefined.
    pub fn configure<D: DelayNs>(
        &mut self,
        ctrl_meas: u8,
        config: u8,
        delay: &mut D,
    ) -> Bmp280Result<(), B::Error> {
        let sleeping = ctrl_meas & MODE_MASK_OUT;

        self.reset(delay)?;
        self.write_registers(&[
            (CtrlMeas::ADDR, sleeping),
            (Config::ADDR, config),
            (CtrlMeas::ADDR, ctrl_meas),
        ])?;
        delay.delay_us(CONFIG_DELAY_US);
        debug!("configured ctrl_meas={:#x} config={:#x}", ctrl_meas, config);

        Ok(())
    }

    /// Reads back the raw `(ctrl_meas, config)` register values.
    pub fn config_registers(&mut self) -> Bmp280Result<(u8, u8), B::Error> {
        let mut buf = [0u8; 2];
        self.read_registers(CtrlMeas::ADDR, &mut buf)?;

        Ok((buf[0], buf[1]))
    }

    /// Reads the latest uncompensated pressure and temperature counts in one burst, timestamped
    /// with [`Instant::now`].
    pub fn read_uncompensated(&mut self) -> Bmp280Result<RawSample, B::Error> {
        let data = self.bus.read::<Data>()?;
        let timestamp = Instant::now();
        trace!("raw temperature={} pressure={}", data.temperature(), data.pressure());

        Ok(RawSample {
            timestamp,
            temperature: data.temperature(),
            pressure: data.pressure(),
        })
    }

    /// Reads the latest measurement and compensates it.
    ///
    /// Loads the calibration coefficients first if that has not happened yet. Temperature is in
    /// 1/100 °C and pressure in Pa.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use bmp280_rs::{Bmp280, Bmp280Result};
    /// # use bmp280_rs::bus::Bus;
    /// # fn demo<B: Bus>(mut device: Bmp280<B>) -> Bmp280Result<(), B::Error> {
    /// let sample = device.read_compensated()?;
    /// let celsius = sample.temperature_celsius();
    /// let hectopascal = sample.pressure_hectopascal();
    /// # Ok(()) }
    /// ```
    pub fn read_compensated(&mut self) -> Bmp280Result<CompensatedSample, B::Error> {
        let calibration = match self.calibration {
            Some(calibration) => calibration,
            None => self.load_calibration()?,
        };

        let raw = self.read_uncompensated()?;
        let (temperature, t_fine) = compensate_temperature(raw.temperature, &calibration);
        let pressure = compensate_pressure(raw.pressure, t_fine, &calibration);

        Ok(CompensatedSample::new(raw.timestamp, temperature, pressure))
    }
}

/// This enum should reflect the physical state of the SDO pin. This is used to determine the I2C address
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SdoPinState {
    /// SDO is pulled high by connection to VDDIO
    High,
    /// SDO is pulled low by connection to GND
    Low,
}

impl From<SdoPinState> for SevenBitAddress {
    fn from(state: SdoPinState) -> Self {
        match state {
            SdoPinState::High => 0x77,
            SdoPinState::Low => 0x76,
        }
    }
}
