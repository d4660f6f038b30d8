#![allow(dead_code)]

use core::convert::Infallible;

use tle75008_esd::chip::{Frame, FrameKind, Reg};
use tle75008_esd::Tle75008Driver;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    Release,
    Frame(u16),
    Idle(bool),
    Delay(u32),
}

/// Register file behind the 16-bit pipelined SPI protocol.
///
/// The response to a frame is only handed out with the next frame: a read request is
/// answered with `10 aaaaaa dddddddd`, anything else with the diagnosis word.
pub struct SimulatedChip {
    pub registers: [u8; 64],
    pub latched_errors: u8,
    pub events: Vec<Event>,
    /// yields to the executor before every frame so concurrent callers can interleave
    pub yield_between_frames: bool,
    pending: u16,
}

impl SimulatedChip {
    pub fn new() -> Self {
        Self {
            registers: [0; 64],
            latched_errors: 0,
            events: Vec::new(),
            yield_between_frames: false,
            pending: 0,
        }
    }

    pub fn reg(&self, reg: Reg) -> u8 {
        self.registers[reg.addr() as usize]
    }

    pub fn set_reg(&mut self, reg: Reg, value: u8) {
        self.registers[reg.addr() as usize] = value;
    }

    pub fn frames(&self) -> Vec<u16> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Frame(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn diagnosis(&self) -> u16 {
        self.latched_errors as u16
    }
}

impl Tle75008Driver for SimulatedChip {
    type Error = Infallible;

    async fn release(&mut self) -> Result<(), Infallible> {
        self.events.push(Event::Release);
        Ok(())
    }

    async fn transfer(&mut self, bits: u16) -> Result<u16, Infallible> {
        if self.yield_between_frames {
            embassy_futures::yield_now().await;
        }
        self.events.push(Event::Frame(bits));

        let frame = Frame::from_bits(bits);
        let address = frame.address() as usize;
        let response = self.pending;
        self.pending = match frame.kind() {
            FrameKind::Write => {
                if frame.address() == Reg::HWCR_OCL.addr() {
                    self.latched_errors &= !frame.payload();
                } else {
                    self.registers[address] = frame.payload();
                }
                self.diagnosis()
            }
            FrameKind::Read => 0x8000 | ((address as u16) << 8) | self.registers[address] as u16,
            FrameKind::Other => self.diagnosis(),
        };
        Ok(response)
    }

    async fn set_idle(&mut self, high: bool) -> Result<(), Infallible> {
        self.events.push(Event::Idle(high));
        Ok(())
    }

    async fn delay_us(&mut self, us: u32) {
        self.events.push(Event::Delay(us));
    }
}
