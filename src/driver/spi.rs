use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::{SpiBus, SpiDevice};
use log::trace;

use super::Tle75008Driver;

#[derive(Debug, PartialEq)]
pub enum Tle75008SpiError<E> {
    Spi(E),
    Pin,
}

/// Driver for a dedicated `SpiBus` with a manually controlled chip select line.
///
/// Make sure the bus is configured with [`SPI_MODE`](super::SPI_MODE), MSB first and at most
/// [`SPI_MAX_CLOCK_HZ`](super::SPI_MAX_CLOCK_HZ).
pub struct Tle75008SpiDriver<SPI, CS, IDLE, DELAY> {
    pub spi_bus: SPI,
    pub pin_cs: CS,
    pub pin_idle: IDLE,
    pub delay: DELAY,
}

impl<SPI, CS, IDLE, DELAY> Tle75008SpiDriver<SPI, CS, IDLE, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    IDLE: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(spi_bus: SPI, pin_cs: CS, pin_idle: IDLE, delay: DELAY) -> Self {
        Self {
            spi_bus,
            pin_cs,
            pin_idle,
            delay,
        }
    }

    pub fn free(self) -> (SPI, CS, IDLE, DELAY) {
        (self.spi_bus, self.pin_cs, self.pin_idle, self.delay)
    }
}

impl<SPI, CS, IDLE, DELAY> Tle75008Driver for Tle75008SpiDriver<SPI, CS, IDLE, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    IDLE: OutputPin,
    DELAY: DelayNs,
{
    type Error = Tle75008SpiError<SPI::Error>;

    /// Drives CS high so the first frame starts with a falling edge.
    async fn release(&mut self) -> Result<(), Self::Error> {
        self.pin_cs.set_high().map_err(|_| Tle75008SpiError::Pin)
    }

    async fn transfer(&mut self, frame: u16) -> Result<u16, Self::Error> {
        let buf_tx = frame.to_be_bytes();
        let mut buf_rx = [0u8; 2];

        self.pin_cs.set_low().map_err(|_| Tle75008SpiError::Pin)?;
        let result = match self.spi_bus.transfer(&mut buf_rx, &buf_tx).await {
            Ok(()) => self.spi_bus.flush().await,
            Err(e) => Err(e),
        };
        // the rising CS edge ends the frame, release it even if the bus failed
        let released = self.pin_cs.set_high();

        result.map_err(Tle75008SpiError::Spi)?;
        released.map_err(|_| Tle75008SpiError::Pin)?;

        let rx = u16::from_be_bytes(buf_rx);
        trace!("tle75008 frame tx {frame:#06x} rx {rx:#06x}");
        Ok(rx)
    }

    async fn set_idle(&mut self, high: bool) -> Result<(), Self::Error> {
        let res = if high {
            self.pin_idle.set_high()
        } else {
            self.pin_idle.set_low()
        };
        res.map_err(|_| Tle75008SpiError::Pin)
    }

    async fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us).await;
    }
}

/// Driver for a `SpiDevice`, chip select is handled by the device implementation
/// (e.g. `embedded_hal_bus::spi::ExclusiveDevice`).
pub struct Tle75008SpiDeviceDriver<SPI, IDLE, DELAY> {
    pub spi_device: SPI,
    pub pin_idle: IDLE,
    pub delay: DELAY,
}

impl<SPI, IDLE, DELAY> Tle75008SpiDeviceDriver<SPI, IDLE, DELAY>
where
    SPI: SpiDevice,
    IDLE: OutputPin,
    DELAY: DelayNs,
{
    pub fn new(spi_device: SPI, pin_idle: IDLE, delay: DELAY) -> Self {
        Self {
            spi_device,
            pin_idle,
            delay,
        }
    }

    pub fn free(self) -> (SPI, IDLE, DELAY) {
        (self.spi_device, self.pin_idle, self.delay)
    }
}

impl<SPI, IDLE, DELAY> Tle75008Driver for Tle75008SpiDeviceDriver<SPI, IDLE, DELAY>
where
    SPI: SpiDevice,
    IDLE: OutputPin,
    DELAY: DelayNs,
{
    type Error = Tle75008SpiError<SPI::Error>;

    // the SpiDevice owns chip select
    async fn release(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn transfer(&mut self, frame: u16) -> Result<u16, Self::Error> {
        let buf_tx = frame.to_be_bytes();
        let mut buf_rx = [0u8; 2];
        self.spi_device
            .transfer(&mut buf_rx, &buf_tx)
            .await
            .map_err(Tle75008SpiError::Spi)?;

        let rx = u16::from_be_bytes(buf_rx);
        trace!("tle75008 frame tx {frame:#06x} rx {rx:#06x}");
        Ok(rx)
    }

    async fn set_idle(&mut self, high: bool) -> Result<(), Self::Error> {
        let res = if high {
            self.pin_idle.set_high()
        } else {
            self.pin_idle.set_low()
        };
        res.map_err(|_| Tle75008SpiError::Pin)
    }

    async fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us).await;
    }
}
