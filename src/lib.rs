//! Driver for the Infineon TLE75008-ESD 8-channel low-side switch.
//!
//! The chip talks 16-bit SPI frames (mode 1, MSB first) and answers every frame with the
//! response to the frame before it. [`driver`] moves single frames, [`chip::Tle75008`]
//! turns register operations into correctly drained frame sequences and
//! [`device::Tle75008Device`] handles the IDLE pin and Sleep/Active transitions.
#![cfg_attr(not(test), no_std)]

pub mod chip;
pub mod config;
pub mod device;
pub mod driver;
pub mod error;
pub mod shared;

pub use chip::{Channel, InputPin, Reg, Tle75008, Tle75008Configuration};
pub use config::DriverConfig;
pub use device::{Mode, Tle75008Device};
pub use driver::Tle75008Driver;
pub use error::{ConfigError, Error};
pub use shared::SharedTle75008;
