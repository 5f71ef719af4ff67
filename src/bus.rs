//! Register level access to the device.
//!
//! [`Bus`] is the seam between the driver and the transport. [`I2c`] implements it on top of
//! any `embedded-hal` 1.0 I2C bus. The driver never locks the bus. If several devices share
//! it, serialize whole transactions outside the driver, for example with the shared bus
//! devices from `embassy-embedded-hal`.

use crate::error::Bmp280Error;
use crate::register::{Readable, Writable, MAX_REG_BYTES};
use embedded_hal::i2c::SevenBitAddress;

pub trait Bus {
    type Error;

    /// Burst reads `data.len()` bytes starting at register `start`.
    fn read_registers(&mut self, start: u8, data: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes alternating register address / value bytes in a single transaction.
    fn write_registers(&mut self, pairs: &[u8]) -> Result<(), Self::Error>;

    fn read<R: Readable>(&mut self) -> Result<R::Out, Bmp280Error<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES];
        self.read_registers(R::ADDR, &mut buf[..R::N])
            .map_err(Bmp280Error::Bus)?;

        Ok(R::decode(&buf[..R::N]))
    }

    fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Bmp280Error<Self::Error>> {
        self.write_registers(&[W::ADDR, W::encode(v)])
            .map_err(Bmp280Error::Bus)
    }
}

pub struct I2c<I2cType> {
    i2c: I2cType,
    address: SevenBitAddress,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2cType, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Gives back the wrapped I2C bus.
    pub fn release(self) -> I2cType {
        self.i2c
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal::i2c::I2c,
{
    type Error = <I2cType as embedded_hal::i2c::ErrorType>::Error;

    fn read_registers(&mut self, start: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[start], data)
    }

    fn write_registers(&mut self, pairs: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, pairs)
    }
}
