mod registers;
pub use registers::*;

mod frame;
pub use frame::{Frame, FrameKind};

mod channel;
pub use channel::Channel;

mod reader;
pub use reader::Reader;

mod configuration;
pub use configuration::*;

use log::{debug, warn};

use crate::driver::Tle75008Driver;
use crate::error::Error;

/// Register level access to a TLE75008-ESD.
///
/// Every frame's response belongs to the frame before it, so each operation pads its
/// command with fetch frames until its own response is drained. When an operation returns
/// the pipeline only holds a diagnosis word nobody waits for.
pub struct Tle75008<'a, D: Tle75008Driver> {
    pub driver: &'a mut D,
}

impl<'a, D: Tle75008Driver> Tle75008<'a, D> {
    pub fn new(driver: &'a mut D) -> Self {
        Self { driver }
    }

    async fn send(&mut self, frame: Frame) -> Result<u16, D::Error> {
        self.driver.transfer(frame.bits()).await
    }

    /// Write command followed by one fetch frame that drains the diagnosis it produced.
    pub async fn write_address(&mut self, address: u8, value: u8) -> Result<(), D::Error> {
        self.send(Frame::write(address, value)).await?;
        self.send(Frame::FETCH).await?;
        Ok(())
    }

    /// Read request, a fetch frame carrying the register content and a last fetch to drain
    /// the diagnosis. For several registers in a row, [`Tle75008::reader`] needs fewer frames.
    pub async fn read_address(&mut self, address: u8) -> Result<u8, D::Error> {
        self.send(Frame::read(address)).await?;
        let data = self.send(Frame::FETCH).await?;
        self.send(Frame::FETCH).await?;
        Ok((data & 0x00FF) as u8)
    }

    pub async fn write_register(&mut self, reg: Reg, value: u8) -> Result<(), D::Error> {
        self.write_address(reg.addr(), value).await
    }

    pub async fn read_register(&mut self, reg: Reg) -> Result<u8, D::Error> {
        self.read_address(reg.addr()).await
    }

    /// Starts a pipelined read of several registers.
    pub fn reader<'r>(&'r mut self) -> Reader<'r, 'a, D> {
        Reader::create(self)
    }

    /// Returns the raw 16-bit standard diagnosis word, decoding is left to the caller.
    pub async fn read_standard_diagnosis(&mut self) -> Result<u16, D::Error> {
        self.send(Frame::READ_STANDARD_DIAGNOSIS).await?;
        self.send(Frame::FETCH).await
    }

    pub async fn read_outputs(&mut self) -> Result<u8, D::Error> {
        self.read_register(Reg::OUT).await
    }

    /// Switches all channels at once, bit n = channel n, 1 = on.
    pub async fn write_outputs(&mut self, mask: u8) -> Result<(), D::Error> {
        self.write_register(Reg::OUT, mask).await
    }

    async fn update_output(&mut self, channel: Channel, on: bool) -> Result<(), D::Error> {
        let current = self.read_outputs().await?;
        self.write_outputs(channel.apply(current, on)).await
    }

    /// Switches one channel (0..=7) and leaves the others as they are.
    /// Out of range channels are ignored without touching the bus.
    pub async fn set_channel(&mut self, channel: u8, on: bool) -> Result<(), D::Error> {
        match self.try_set_channel(channel, on).await {
            Err(Error::Transport(e)) => Err(e),
            Err(Error::InvalidChannel(n)) => {
                warn!("tle75008 ignoring channel {n}");
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    pub async fn try_set_channel(&mut self, channel: u8, on: bool) -> Result<(), Error<D::Error>> {
        let ch = Channel::new(channel).ok_or(Error::InvalidChannel(channel))?;
        self.update_output(ch, on).await?;
        Ok(())
    }

    /// Like [`Tle75008::set_channel`] with channels numbered 1..=8.
    pub async fn toggle_output(&mut self, channel: u8, on: bool) -> Result<(), D::Error> {
        match self.try_toggle_output(channel, on).await {
            Err(Error::Transport(e)) => Err(e),
            Err(Error::InvalidChannel(n)) => {
                warn!("tle75008 ignoring output {n}");
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    pub async fn try_toggle_output(
        &mut self,
        channel: u8,
        on: bool,
    ) -> Result<(), Error<D::Error>> {
        let ch = Channel::from_one_based(channel).ok_or(Error::InvalidChannel(channel))?;
        self.update_output(ch, on).await?;
        Ok(())
    }

    /// HWCR_OCL is write-1-to-clear, 0xFF releases every latch in one write.
    pub async fn clear_all_errors(&mut self) -> Result<(), D::Error> {
        self.write_register(Reg::HWCR_OCL, 0xFF).await
    }

    pub async fn clear_error(&mut self, channel: u8) -> Result<(), D::Error> {
        match self.try_clear_error(channel).await {
            Err(Error::Transport(e)) => Err(e),
            Err(Error::InvalidChannel(n)) => {
                warn!("tle75008 ignoring error clear for channel {n}");
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    pub async fn try_clear_error(&mut self, channel: u8) -> Result<(), Error<D::Error>> {
        let ch = Channel::new(channel).ok_or(Error::InvalidChannel(channel))?;
        self.write_register(Reg::HWCR_OCL, ch.mask()).await?;
        Ok(())
    }

    /// Bit n set means VDS of channel n is below the threshold.
    pub async fn read_output_status_monitor(&mut self) -> Result<u8, D::Error> {
        self.read_register(Reg::DIAG_OSM).await
    }

    /// Replaces the whole DIAG_IOL mask, 1 = open load current source enabled.
    pub async fn write_diagnostic_current(&mut self, mask: u8) -> Result<(), D::Error> {
        self.write_register(Reg::DIAG_IOL, mask).await
    }

    pub async fn read_diagnostic_current(&mut self) -> Result<u8, D::Error> {
        self.read_register(Reg::DIAG_IOL).await
    }

    pub async fn write_input_mapping(&mut self, input: InputPin, mask: u8) -> Result<(), D::Error> {
        self.write_register(input_mapping_reg(input), mask).await
    }

    pub async fn read_input_mapping(&mut self, input: InputPin) -> Result<u8, D::Error> {
        self.read_register(input_mapping_reg(input)).await
    }

    pub async fn read_input_status(&mut self) -> Result<u8, D::Error> {
        self.read_register(Reg::INST).await
    }

    pub async fn read_hwcr(&mut self) -> Result<u8, D::Error> {
        self.read_register(Reg::HWCR).await
    }

    /// Forces HWCR.ACT while keeping the other HWCR bits.
    pub async fn set_active_bit(&mut self) -> Result<(), D::Error> {
        let hwcr = self.read_hwcr().await?;
        self.write_register(Reg::HWCR, hwcr | HWCR_ACT).await
    }

    pub async fn configure(&mut self, config: &Tle75008Configuration) -> Result<(), D::Error> {
        debug!("tle75008 configure {config:?}");
        self.clear_all_errors().await?;

        self.write_register(Reg::MAPIN0, config.input_mapping_in0).await?;
        self.write_register(Reg::MAPIN1, config.input_mapping_in1).await?;
        self.write_register(Reg::DIAG_IOL, config.diagnostic_current).await?;
        self.write_register(Reg::HWCR, config.hwcr()).await?;
        self.write_register(Reg::OUT, config.outputs).await?;

        Ok(())
    }
}

fn input_mapping_reg(input: InputPin) -> Reg {
    match input {
        InputPin::In0 => Reg::MAPIN0,
        InputPin::In1 => Reg::MAPIN1,
    }
}
