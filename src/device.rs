use log::debug;

use crate::chip::{Reg, Tle75008};
use crate::config::DriverConfig;
use crate::driver::Tle75008Driver;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Sleep,
    Active,
}

/// Owns the driver and walks the chip between Sleep and Active.
///
/// Register access goes through [`Tle75008Device::chip`].
pub struct Tle75008Device<D: Tle75008Driver> {
    driver: D,
    config: DriverConfig,
    mode: Mode,
}

impl<D: Tle75008Driver> Tle75008Device<D> {
    pub fn new(driver: D, config: DriverConfig) -> Self {
        Self {
            driver,
            config,
            mode: Mode::Sleep,
        }
    }

    /// Releases chip select, wakes the chip and writes the configured registers.
    /// Call once after power up.
    pub async fn begin(&mut self) -> Result<(), D::Error> {
        debug!(
            "tle75008 begin, bus expected at {} Hz",
            self.config.spi_clock().to_Hz()
        );
        self.driver.release().await?;
        self.driver.set_idle(true).await?;
        self.driver.delay_us(self.config.power_up_delay_us).await;

        let registers = self.config.registers;
        self.chip().configure(&registers).await?;

        self.mode = Mode::Active;
        debug!("tle75008 initialized");
        Ok(())
    }

    /// Switches every output off, then pulls IDLE low.
    pub async fn enter_sleep(&mut self) -> Result<(), D::Error> {
        self.chip().write_register(Reg::OUT, 0x00).await?;

        self.driver.set_idle(false).await?;
        self.driver.delay_us(self.config.sleep_delay_us).await;

        self.mode = Mode::Sleep;
        debug!("tle75008 sleeping");
        Ok(())
    }

    /// Pulls IDLE high and forces HWCR.ACT.
    pub async fn enter_active(&mut self) -> Result<(), D::Error> {
        self.driver.set_idle(true).await?;
        self.driver.delay_us(self.config.wake_delay_us).await;

        self.chip().set_active_bit().await?;

        self.mode = Mode::Active;
        debug!("tle75008 active");
        Ok(())
    }

    pub fn chip(&mut self) -> Tle75008<'_, D> {
        Tle75008::new(&mut self.driver)
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn free(self) -> D {
        self.driver
    }
}
