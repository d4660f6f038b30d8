//! 16-bit SPI frame layout.
//!
//! | bits 15:14 | bits 13:8 | bits 7:0 |
//! |---|---|---|
//! | opcode (`01` read, `10` write) | 6-bit address | data, or `0b10` on a read request |
//!
//! The response clocked out during a frame always belongs to the frame sent before it.

const OPCODE_MASK: u16 = 0xC000;
const OPCODE_READ: u16 = 0x4000;
const OPCODE_WRITE: u16 = 0x8000;
const ADDRESS_MASK: u16 = 0x3F00;
const READ_REQUEST_SUFFIX: u16 = 0x0002;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Read,
    Write,
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame(u16);

impl Frame {
    /// Dummy frame that only clocks out the pending response.
    pub const FETCH: Frame = Frame(0x0000);

    /// "Read standard diagnosis" request, the diagnosis word follows on the next frame.
    pub const READ_STANDARD_DIAGNOSIS: Frame = Frame(0x4002);

    pub const fn write(address: u8, value: u8) -> Self {
        Frame(OPCODE_WRITE | (((address as u16) << 8) & ADDRESS_MASK) | value as u16)
    }

    pub const fn read(address: u8) -> Self {
        Frame(OPCODE_READ | (((address as u16) << 8) & ADDRESS_MASK) | READ_REQUEST_SUFFIX)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Frame(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub fn kind(&self) -> FrameKind {
        match self.0 & OPCODE_MASK {
            OPCODE_READ => FrameKind::Read,
            OPCODE_WRITE => FrameKind::Write,
            _ => FrameKind::Other,
        }
    }

    pub const fn address(&self) -> u8 {
        ((self.0 & ADDRESS_MASK) >> 8) as u8
    }

    pub const fn payload(&self) -> u8 {
        (self.0 & 0x00FF) as u8
    }
}
