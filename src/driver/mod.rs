pub mod spi;

use embedded_hal::spi::{Mode, MODE_1};

/// Data is sampled on the falling edge of SCLK and shifted out on the rising edge.
pub const SPI_MODE: Mode = MODE_1;

/// Highest SCLK frequency the chip accepts with VDD above 4.5 V.
pub const SPI_MAX_CLOCK_HZ: u32 = 5_000_000;

#[allow(async_fn_in_trait)]
pub trait Tle75008Driver {
    type Error;

    /// Puts the bus pins into their idle state. Called once before the first frame.
    async fn release(&mut self) -> Result<(), Self::Error>;

    /// Performs one full 16-bit frame exchange, MSB first, with chip select asserted for
    /// exactly this frame. The returned word is the chip's answer to the *previous* frame.
    async fn transfer(&mut self, frame: u16) -> Result<u16, Self::Error>;

    /// Drives the IDLE pin. High keeps the chip in Idle/Active, low sends it to Sleep.
    async fn set_idle(&mut self, high: bool) -> Result<(), Self::Error>;

    async fn delay_us(&mut self, us: u32);
}
