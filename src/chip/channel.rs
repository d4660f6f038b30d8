/// One of the eight low-side outputs, 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Channel(u8);

impl Channel {
    pub const COUNT: u8 = 8;

    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Channel(index))
        } else {
            None
        }
    }

    /// Channel as numbered on the datasheet pinout, 1..=8.
    pub const fn from_one_based(number: u8) -> Option<Self> {
        match number.checked_sub(1) {
            Some(index) => Self::new(index),
            None => None,
        }
    }

    pub const fn index(&self) -> u8 {
        self.0
    }

    pub const fn mask(&self) -> u8 {
        1 << self.0
    }

    pub fn all() -> impl Iterator<Item = Channel> {
        (0..Self::COUNT).map(Channel)
    }

    /// Sets or clears this channel's bit in a channel mask.
    pub const fn apply(&self, mask: u8, on: bool) -> u8 {
        if on {
            mask | self.mask()
        } else {
            mask & !self.mask()
        }
    }
}
