use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

use crate::chip::{InputPin, Reg, Tle75008};
use crate::driver::Tle75008Driver;

/// Driver handle that can be used from several tasks.
///
/// Each method locks the driver for its whole frame sequence, a read-modify-write included,
/// so responses can never be attributed to another task's command.
pub struct SharedTle75008<M: RawMutex, D: Tle75008Driver> {
    driver: Mutex<M, D>,
}

impl<M: RawMutex, D: Tle75008Driver> SharedTle75008<M, D> {
    pub const fn new(driver: D) -> Self {
        Self {
            driver: Mutex::new(driver),
        }
    }

    /// Exclusive access for sequences not covered below, e.g. a pipelined
    /// `Tle75008::new(&mut *guard).reader()` or the `try_*` variants.
    pub async fn lock(&self) -> MutexGuard<'_, M, D> {
        self.driver.lock().await
    }

    pub async fn write_register(&self, reg: Reg, value: u8) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).write_register(reg, value).await
    }

    pub async fn read_register(&self, reg: Reg) -> Result<u8, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_register(reg).await
    }

    pub async fn read_standard_diagnosis(&self) -> Result<u16, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_standard_diagnosis().await
    }

    pub async fn write_outputs(&self, mask: u8) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).write_outputs(mask).await
    }

    pub async fn read_outputs(&self) -> Result<u8, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_outputs().await
    }

    pub async fn set_channel(&self, channel: u8, on: bool) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).set_channel(channel, on).await
    }

    pub async fn clear_all_errors(&self) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).clear_all_errors().await
    }

    pub async fn clear_error(&self, channel: u8) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).clear_error(channel).await
    }

    pub async fn toggle_output(&self, channel: u8, on: bool) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).toggle_output(channel, on).await
    }

    pub async fn read_output_status_monitor(&self) -> Result<u8, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_output_status_monitor().await
    }

    pub async fn write_diagnostic_current(&self, mask: u8) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).write_diagnostic_current(mask).await
    }

    pub async fn read_diagnostic_current(&self) -> Result<u8, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_diagnostic_current().await
    }

    pub async fn write_input_mapping(&self, input: InputPin, mask: u8) -> Result<(), D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).write_input_mapping(input, mask).await
    }

    pub async fn read_input_mapping(&self, input: InputPin) -> Result<u8, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_input_mapping(input).await
    }

    pub async fn read_input_status(&self) -> Result<u8, D::Error> {
        let mut driver = self.driver.lock().await;
        Tle75008::new(&mut *driver).read_input_status().await
    }
}
