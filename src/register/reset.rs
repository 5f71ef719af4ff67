//! ### RESET - Soft reset register (`0xE0`, 1 byte, Write-only)
//!
//! Writing [`ResetCommand::SoftReset`] (0xB6) resets the device using the complete power-on
//! reset procedure. Any other value has no effect, and the register always reads 0x00.
//!
//! See also: [`Bmp280::reset()`](crate::Bmp280::reset)
#![doc(alias = "RESET")]
use crate::register::{Reg, Writable};

/// Marker type for the RESET (0xE0) register
pub struct Reset;
impl Reg for Reset { const ADDR: u8 = 0xE0; }

/// The payload for the RESET (0xE0) register.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResetCommand {
    /// Triggers a power-on style reset.
    ///
    /// All user configuration is lost and the device returns to Sleep mode.
    SoftReset,
}

impl From<ResetCommand> for u8 {
    fn from(cmd: ResetCommand) -> u8 {
        match cmd {
            ResetCommand::SoftReset => 0xB6,
        }
    }
}

impl Writable for Reset {
    type In = ResetCommand;
    fn encode(v: &Self::In) -> u8 {
        (*v).into()
    }
}
