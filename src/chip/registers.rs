/// Combines the two address fields of the register overview into the 6-bit address sent
/// in bits 13..8 of a frame. Out-of-range inputs are masked, not rejected.
pub const fn compose_address(addr0: u8, addr1: u8) -> u8 {
    ((addr0 & 0x0F) << 2) | (addr1 & 0x03)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Reg {
    /// output control, bit n switches channel n
    OUT,
    /// input mapping for IN0
    MAPIN0,
    /// input mapping for IN1
    MAPIN1,
    /// input status monitor
    INST,
    /// open load diagnostic current enable
    DIAG_IOL,
    /// output status monitor, VDS below threshold
    DIAG_OSM,
    /// hardware configuration
    HWCR,
    /// overload error latch clear
    HWCR_OCL,
}

impl Reg {
    pub const ALL: [Reg; 8] = [
        Reg::OUT,
        Reg::MAPIN0,
        Reg::MAPIN1,
        Reg::INST,
        Reg::DIAG_IOL,
        Reg::DIAG_OSM,
        Reg::HWCR,
        Reg::HWCR_OCL,
    ];

    pub const fn addr0(&self) -> u8 {
        match self {
            Reg::OUT => 0x0,
            Reg::MAPIN0 => 0x1,
            Reg::MAPIN1 => 0x2,
            Reg::INST => 0x1,
            Reg::DIAG_IOL => 0x2,
            Reg::DIAG_OSM => 0x2,
            Reg::HWCR => 0x3,
            Reg::HWCR_OCL => 0x3,
        }
    }

    pub const fn addr1(&self) -> u8 {
        match self {
            Reg::OUT => 0b00,
            Reg::MAPIN0 => 0b00,
            // shares its address with DIAG_OSM, MAPIN0's pattern suggests 0x08
            Reg::MAPIN1 => 0b01,
            Reg::INST => 0b10,
            Reg::DIAG_IOL => 0b00,
            Reg::DIAG_OSM => 0b01,
            Reg::HWCR => 0b00,
            Reg::HWCR_OCL => 0b01,
        }
    }

    pub const fn addr(&self) -> u8 {
        compose_address(self.addr0(), self.addr1())
    }
}

/// HWCR: keep the device in Active mode
pub const HWCR_ACT: u8 = 1 << 7;
/// HWCR: software reset of all registers
pub const HWCR_RST: u8 = 1 << 6;
/// HWCR: parallel channel pairing, bits 3..0
pub const HWCR_PAR_MASK: u8 = 0x0F;
