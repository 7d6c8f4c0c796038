use std::fmt;

use serde::Deserialize;

use crate::registers::{
    MOTOR_REGISTER_BASE, MOTOR_REGISTER_STEP, MOTOR_REVERSE_OFFSET, SERVO_REGISTER_BASE,
    SERVO_REGISTER_STEP,
};

///Servo outputs as labelled on the board.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Servo {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
}

impl Servo {
    pub const ALL: [Servo; 8] = [
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::S8,
    ];

    fn index(&self) -> u8 {
        match *self {
            Self::S1 => 0,
            Self::S2 => 1,
            Self::S3 => 2,
            Self::S4 => 3,
            Self::S5 => 4,
            Self::S6 => 5,
            Self::S7 => 6,
            Self::S8 => 7,
        }
    }

    ///Low off-time register for this output. The high bit lives at `register() + 1`.
    pub fn register(&self) -> u8 {
        SERVO_REGISTER_BASE + self.index() * SERVO_REGISTER_STEP
    }
}

impl fmt::Display for Servo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.index() + 1)
    }
}

///Motor outputs as labelled on the board. Each motor is driven by a forward and a reverse output.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motor {
    M1,
    M2,
    M3,
    M4,
}

impl Motor {
    pub const ALL: [Motor; 4] = [Self::M1, Self::M2, Self::M3, Self::M4];

    fn index(&self) -> u8 {
        match *self {
            Self::M1 => 0,
            Self::M2 => 1,
            Self::M3 => 2,
            Self::M4 => 3,
        }
    }

    pub fn forward_register(&self) -> u8 {
        MOTOR_REGISTER_BASE + self.index() * MOTOR_REGISTER_STEP
    }

    pub fn reverse_register(&self) -> u8 {
        self.forward_register() + MOTOR_REVERSE_OFFSET
    }

    ///Returns the (active, inactive) low registers for a direction.
    pub fn registers_for(&self, direction: MotorDirection) -> (u8, u8) {
        match direction {
            MotorDirection::CW => (self.forward_register(), self.reverse_register()),
            MotorDirection::CCW => (self.reverse_register(), self.forward_register()),
        }
    }
}

impl fmt::Display for Motor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.index() + 1)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotorDirection {
    CW,
    CCW,
}

impl fmt::Display for MotorDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CW => f.write_str("CW"),
            Self::CCW => f.write_str("CCW"),
        }
    }
}

///The board can be strapped to one of four I2C addresses. `Board1` is the factory default.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoardAddress {
    #[default]
    Board1,
    Board2,
    Board3,
    Board4,
}

impl BoardAddress {
    pub const ALL: [BoardAddress; 4] = [Self::Board1, Self::Board2, Self::Board3, Self::Board4];

    pub fn i2c_address(&self) -> u8 {
        match *self {
            Self::Board1 => 0x6C,
            Self::Board2 => 0x6D,
            Self::Board3 => 0x6E,
            Self::Board4 => 0x6F,
        }
    }
}

impl fmt::Display for BoardAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            Self::Board1 => 1,
            Self::Board2 => 2,
            Self::Board3 => 3,
            Self::Board4 => 4,
        };
        write!(f, "Board{} (0x{:02X})", n, self.i2c_address())
    }
}
