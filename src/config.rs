use fugit::HertzU32;
use serde::{Deserialize, Serialize};

use crate::chip::Tle75008Configuration;
use crate::driver::SPI_MAX_CLOCK_HZ;
use crate::error::ConfigError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    /// SCLK frequency. The driver does not own the bus configuration, the caller applies
    /// [`DriverConfig::spi_clock`] when building the SPI peripheral.
    pub spi_clock_hz: u32,
    // IDLE pin settling times
    pub power_up_delay_us: u32,
    pub wake_delay_us: u32,
    pub sleep_delay_us: u32,
    // registers written by begin()
    pub registers: Tle75008Configuration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            spi_clock_hz: SPI_MAX_CLOCK_HZ,
            power_up_delay_us: 100,
            wake_delay_us: 50,
            sleep_delay_us: 100,
            registers: Default::default(),
        }
    }
}

impl DriverConfig {
    /// Parses a JSON object, missing fields keep their defaults.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        let (config, _) =
            serde_json_core::from_slice::<DriverConfig>(json).map_err(ConfigError::Json)?;
        if !config.validate() {
            return Err(ConfigError::Invalid);
        }
        Ok(config)
    }

    pub fn validate(&self) -> bool {
        if self.spi_clock_hz == 0 || self.spi_clock_hz > SPI_MAX_CLOCK_HZ {
            return false;
        }
        self.registers.validate()
    }

    /// Clock to configure the SPI peripheral with, together with [`SPI_MODE`](crate::driver::SPI_MODE).
    pub fn spi_clock(&self) -> HertzU32 {
        HertzU32::from_raw(self.spi_clock_hz)
    }
}
