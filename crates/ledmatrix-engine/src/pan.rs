//! Pan operand of the `p` instruction
//!
//! Bit layout: `[down:0x80][right:0x40][up:0x20][left:0x10][amount:0x0F]`.

const PAN_LEFT: u8 = 0x10;
const PAN_UP: u8 = 0x20;
const PAN_RIGHT: u8 = 0x40;
const PAN_DOWN: u8 = 0x80;
const PAN_AMOUNT: u8 = 0x0F;

/// Decoded `p` operand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanOperand {
    pub left: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
    /// Shift distance in cells (0-15)
    pub amount: u8,
}

impl PanOperand {
    pub const fn from_byte(value: u8) -> Self {
        Self {
            left: value & PAN_LEFT != 0,
            up: value & PAN_UP != 0,
            right: value & PAN_RIGHT != 0,
            down: value & PAN_DOWN != 0,
            amount: value & PAN_AMOUNT,
        }
    }

    pub const fn to_byte(self) -> u8 {
        let mut value = self.amount & PAN_AMOUNT;
        if self.left {
            value |= PAN_LEFT;
        }
        if self.up {
            value |= PAN_UP;
        }
        if self.right {
            value |= PAN_RIGHT;
        }
        if self.down {
            value |= PAN_DOWN;
        }
        value
    }

    pub const fn left(amount: u8) -> Self {
        Self::single(PAN_LEFT, amount)
    }

    pub const fn up(amount: u8) -> Self {
        Self::single(PAN_UP, amount)
    }

    pub const fn right(amount: u8) -> Self {
        Self::single(PAN_RIGHT, amount)
    }

    pub const fn down(amount: u8) -> Self {
        Self::single(PAN_DOWN, amount)
    }

    const fn single(direction: u8, amount: u8) -> Self {
        Self::from_byte(direction | (amount & PAN_AMOUNT))
    }
}

impl From<u8> for PanOperand {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}
