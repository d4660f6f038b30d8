use serde::{Deserialize, Serialize};

use super::registers::{HWCR_ACT, HWCR_PAR_MASK};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPin {
    In0,
    In1,
}

/// Register contents written by [`Tle75008::configure`](super::Tle75008::configure).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tle75008Configuration {
    /// channels driven by IN0 (MAPIN0)
    pub input_mapping_in0: u8,
    /// channels driven by IN1 (MAPIN1)
    pub input_mapping_in1: u8,
    /// open load diagnostic current enables (DIAG_IOL)
    pub diagnostic_current: u8,
    /// HWCR.ACT, keep the device in Active mode
    pub active: bool,
    /// HWCR.PAR, parallel channel pairs
    pub parallel: u8,
    /// OUT after configuration
    pub outputs: u8,
}

impl Default for Tle75008Configuration {
    fn default() -> Self {
        Self {
            // channel 2 follows IN0, channel 3 follows IN1
            input_mapping_in0: 0x04,
            input_mapping_in1: 0x08,
            diagnostic_current: 0x00,
            active: true,
            parallel: 0,
            outputs: 0x00,
        }
    }
}

impl Tle75008Configuration {
    pub fn hwcr(&self) -> u8 {
        let mut hwcr = self.parallel & HWCR_PAR_MASK;
        if self.active {
            hwcr |= HWCR_ACT;
        }
        hwcr
    }

    pub fn validate(&self) -> bool {
        self.parallel & !HWCR_PAR_MASK == 0
    }
}
